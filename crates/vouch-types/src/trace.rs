use serde::{Deserialize, Serialize};
use std::fmt;

/// One call frame recorded when a failure is raised.
///
/// `symbol` is the demangled path of the function (without the trailing hash), e.g.
/// `vouch_domain::check::Check<T>::evaluate` or
/// `<vouch_domain::checks::text::TextCheck as vouch_domain::check::Fluent>::named`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl Frame {
    pub fn new<S: Into<String>>(symbol: S) -> Self {
        Self {
            symbol: symbol.into(),
            file: None,
            line: None,
        }
    }

    pub fn at<S: Into<String>>(mut self, file: S, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    /// The symbol with a leading `<` of a trait-impl path removed.
    pub fn path(&self) -> &str {
        self.symbol.strip_prefix('<').unwrap_or(&self.symbol)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)?;
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, " at {file}:{line}"),
            (Some(file), None) => write!(f, " at {file}"),
            _ => Ok(()),
        }
    }
}

/// Ordered origin trace of a failure, innermost (most recent) frame first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    frames: Vec<Frame>,
}

impl Trace {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The frame the failure appears to originate from.
    pub fn top(&self) -> Option<&Frame> {
        self.frames.first()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Drop the `count` innermost frames.
    pub fn trim_front(&mut self, count: usize) {
        let count = count.min(self.frames.len());
        self.frames.drain(..count);
    }
}

impl From<Vec<Frame>> for Trace {
    fn from(frames: Vec<Frame>) -> Self {
        Self::new(frames)
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "{i:>4}: {frame}")?;
        }
        Ok(())
    }
}
