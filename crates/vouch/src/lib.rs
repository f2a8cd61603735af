//! Fluent argument preconditions.
//!
//! ```
//! use vouch::prelude::*;
//!
//! fn greet(name: &str) -> vouch::CheckResult<String> {
//!     let ctx = vouch::context();
//!     ctx.text(name).named("name").is_not_blank()?.has_length_between(1, 64)?;
//!     Ok(format!("hello, {name}"))
//! }
//!
//! assert!(greet("ada").is_ok());
//! let err = greet("   ").unwrap_err();
//! assert_eq!(err.to_string(), "name must not be blank");
//! ```
//!
//! A [`Validator`] holds the compiled message catalog and is shared across threads; every
//! thread checks through its own [`CheckContext`], which reuses one check state per value
//! shape.

#![forbid(unsafe_code)]

mod explain;
mod load;

pub use explain::{ExplainOutput, Explanation, format_explanation, format_not_found, run_explain};
pub use load::{load_validator, load_validator_from_pairs};

pub use vouch_domain::{
    ArgumentFailure, ArrayCheck, Cause, Check, CheckContext, CheckResult, CheckState, Comparable,
    ContractFailure, ContractViolation, EffectiveSettings, Elements, Failure, FailureKind,
    FloatCheck, Fluent, Frame, IntCheck, MapCheck, Mapping, Measure, Measured, NumberCheck,
    ObjectCheck, Polarity, SeqCheck, TextCheck, Trace, Validator, Variant,
};
pub use vouch_settings::{Overrides, VouchConfigV1};

/// Traits needed to call predicates.
pub mod prelude {
    pub use vouch_domain::{Comparable, Elements, Fluent, Measured};
}

/// A check context over the built-in settings.
pub fn context() -> CheckContext {
    CheckContext::with_defaults()
}
