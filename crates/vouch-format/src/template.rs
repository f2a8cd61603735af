use crate::render::{ArityError, count_placeholders, render};
use std::fmt;
use thiserror::Error;

pub const POSITIVE_OPEN: &str = "[+";
pub const POSITIVE_CLOSE: &str = "+]";
pub const NEGATIVE_OPEN: &str = "[!";
pub const NEGATIVE_CLOSE: &str = "!]";

/// Whether a predicate was evaluated directly or under `not()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn from_inverted(inverted: bool) -> Self {
        if inverted {
            Polarity::Negative
        } else {
            Polarity::Positive
        }
    }

    pub fn is_negative(self) -> bool {
        self == Polarity::Negative
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Positive => f.write_str("positive"),
            Polarity::Negative => f.write_str("negative"),
        }
    }
}

/// The two kinds of polarity-specific span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpanKind {
    PositiveOnly,
    NegativeOnly,
}

impl SpanKind {
    pub fn open(self) -> &'static str {
        match self {
            SpanKind::PositiveOnly => POSITIVE_OPEN,
            SpanKind::NegativeOnly => NEGATIVE_OPEN,
        }
    }

    pub fn close(self) -> &'static str {
        match self {
            SpanKind::PositiveOnly => POSITIVE_CLOSE,
            SpanKind::NegativeOnly => NEGATIVE_CLOSE,
        }
    }

    fn shown_in(self, polarity: Polarity) -> bool {
        match self {
            SpanKind::PositiveOnly => polarity == Polarity::Positive,
            SpanKind::NegativeOnly => polarity == Polarity::Negative,
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanKind::PositiveOnly => write!(f, "positive-only `{POSITIVE_OPEN}`"),
            SpanKind::NegativeOnly => write!(f, "negative-only `{NEGATIVE_OPEN}`"),
        }
    }
}

/// A raw template that cannot be compiled. Offsets are byte offsets into the raw text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unterminated {span} span opened at byte {offset}")]
    Unterminated { span: SpanKind, offset: usize },

    #[error("{inner} span at byte {offset} opens inside a {outer} span; spans do not nest")]
    Nested {
        outer: SpanKind,
        inner: SpanKind,
        offset: usize,
    },

    #[error("{span} span closed at byte {offset} was never opened")]
    UnopenedClose { span: SpanKind, offset: usize },
}

/// Compiled pair of format strings. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatTemplate {
    positive: String,
    negative: String,
    positive_arity: usize,
    negative_arity: usize,
}

impl FormatTemplate {
    pub fn form(&self, polarity: Polarity) -> &str {
        match polarity {
            Polarity::Positive => &self.positive,
            Polarity::Negative => &self.negative,
        }
    }

    /// Placeholder count of one form.
    pub fn arity(&self, polarity: Polarity) -> usize {
        match polarity {
            Polarity::Positive => self.positive_arity,
            Polarity::Negative => self.negative_arity,
        }
    }

    pub fn render<S: AsRef<str>>(
        &self,
        polarity: Polarity,
        args: &[S],
    ) -> Result<String, ArityError> {
        render(self.form(polarity), args)
    }
}

/// Compile a raw dual-polarity template.
pub fn compile(raw: &str) -> Result<FormatTemplate, TemplateError> {
    let positive = strip(raw, Polarity::Positive)?;
    let negative = strip(raw, Polarity::Negative)?;
    Ok(FormatTemplate {
        positive_arity: count_placeholders(&positive),
        negative_arity: count_placeholders(&negative),
        positive,
        negative,
    })
}

#[derive(Clone, Copy)]
enum Marker {
    Open(SpanKind),
    Close(SpanKind),
}

// Markers are two ASCII bytes, so a match always sits on a char boundary.
fn marker_at(bytes: &[u8], at: usize) -> Option<Marker> {
    let rest = &bytes[at..];
    for span in [SpanKind::PositiveOnly, SpanKind::NegativeOnly] {
        if rest.starts_with(span.open().as_bytes()) {
            return Some(Marker::Open(span));
        }
        if rest.starts_with(span.close().as_bytes()) {
            return Some(Marker::Close(span));
        }
    }
    None
}

/// Render the raw template for one polarity: spans of the other polarity are removed with
/// their contents, spans of this polarity lose only their markers.
///
/// Single pass; independent of the pass for the other polarity.
pub fn strip(raw: &str, keep: Polarity) -> Result<String, TemplateError> {
    let bytes = raw.as_bytes();
    let mut out = String::with_capacity(raw.len());
    let mut open: Option<(SpanKind, usize)> = None;
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let Some(marker) = marker_at(bytes, i) else {
            i += 1;
            continue;
        };

        if open.is_none_or(|(span, _)| span.shown_in(keep)) {
            out.push_str(&raw[text_start..i]);
        }

        match (marker, open) {
            (Marker::Open(span), None) => open = Some((span, i)),
            (Marker::Open(inner), Some((outer, _))) => {
                return Err(TemplateError::Nested {
                    outer,
                    inner,
                    offset: i,
                });
            }
            (Marker::Close(span), Some((current, _))) if span == current => open = None,
            (Marker::Close(span), _) => {
                return Err(TemplateError::UnopenedClose { span, offset: i });
            }
        }

        i += 2;
        text_start = i;
    }

    if let Some((span, offset)) = open {
        return Err(TemplateError::Unterminated { span, offset });
    }
    out.push_str(&raw[text_start..]);
    Ok(out)
}
