//! Dual-polarity message templates.
//!
//! A raw template is authored once and compiled into two plain format strings:
//!
//! ```text
//! "{} must [!not !]be between {} and {}, but was {}"
//!   positive: "{} must be between {} and {}, but was {}"
//!   negative: "{} must not be between {} and {}, but was {}"
//! ```
//!
//! Compilation happens when a catalog is loaded, so a malformed template is reported
//! before any check runs. Rendering substitutes `{}` placeholders positionally and
//! refuses argument lists whose length differs from the placeholder count.

#![forbid(unsafe_code)]

mod render;
mod template;

pub use render::{ArityError, count_placeholders, render};
pub use template::{
    FormatTemplate, NEGATIVE_CLOSE, NEGATIVE_OPEN, POSITIVE_CLOSE, POSITIVE_OPEN, Polarity,
    SpanKind, TemplateError, compile, strip,
};
