//! Argument checks with reusable per-context state (no IO).
//!
//! Input: a value bound to a check obtained from a [`CheckContext`].
//! Output: the same check on success, or a [`Failure`] whose message is rendered from the
//! compiled catalog and whose trace starts at the caller.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod check;
pub mod checks;
pub mod failure;
pub mod policy;
pub mod pool;
pub mod provenance;
pub mod state;

mod validator;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use catalog::Catalog;
pub use check::{Check, Fluent};
pub use checks::{
    ArrayCheck, Comparable, Elements, FloatCheck, IntCheck, MapCheck, Mapping, Measure, Measured,
    NumberCheck, ObjectCheck, SeqCheck, TextCheck,
};
pub use failure::{
    ArgumentFailure, Cause, CheckResult, ContractFailure, ContractViolation, Failure,
    FailureFactory,
};
pub use policy::EffectiveSettings;
pub use pool::{CheckContext, Variant};
pub use provenance::ProvenanceCleaner;
pub use state::CheckState;
pub use validator::Validator;
pub use vouch_format::Polarity;
pub use vouch_types::{FailureKind, Frame, Trace};
