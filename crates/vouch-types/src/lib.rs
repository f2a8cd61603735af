//! Stable DTOs and IDs used across the vouch workspace.
//!
//! This crate is intentionally boring:
//! - the closed set of failure kinds and their stable string IDs
//! - the built-in dual-polarity message template for every kind
//! - provenance frames recorded when a failure is raised

#![forbid(unsafe_code)]

pub mod kind;
pub mod messages;
pub mod trace;

pub use kind::FailureKind;
pub use messages::{all_kinds, default_template, lookup_template};
pub use trace::{Frame, Trace};
