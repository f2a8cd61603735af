//! Failure taxonomy and the factory that renders failures from the catalog.
//!
//! - [`ArgumentFailure`]: the caller's value violates a predicate.
//! - [`ContractFailure`]: the check machinery itself was misused (malformed catalog,
//!   wrong number of rendering arguments).
//!
//! They are distinct types so a caller matching [`Failure::Argument`] never absorbs a
//! contract failure by accident.

use crate::catalog::Catalog;
use crate::provenance::{self, ProvenanceCleaner};
use std::error::Error as StdError;
use thiserror::Error;
use vouch_format::{ArityError, Polarity, TemplateError};
use vouch_types::{FailureKind, Trace};

/// Underlying error chained to an argument failure.
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

pub type CheckResult<T> = Result<T, Failure>;

#[derive(Debug, Error)]
#[error("{message}")]
pub struct ArgumentFailure {
    kind: FailureKind,
    polarity: Polarity,
    message: String,
    #[source]
    cause: Option<Cause>,
    trace: Trace,
}

impl ArgumentFailure {
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Origin trace, innermost frame first.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }
}

#[derive(Debug, Error)]
pub enum ContractViolation {
    #[error("template for {kind} is malformed: {source}")]
    MalformedTemplate {
        kind: FailureKind,
        source: TemplateError,
    },

    #[error(
        "template for {kind} has {found} placeholders in its {polarity} form, but {kind} takes {expected} arguments"
    )]
    TemplateArity {
        kind: FailureKind,
        polarity: Polarity,
        expected: usize,
        found: usize,
    },

    #[error("message for {kind} rendered with the wrong number of arguments: {source}")]
    ArgumentCount {
        kind: FailureKind,
        source: ArityError,
    },
}

#[derive(Debug, Error)]
#[error("{violation}")]
pub struct ContractFailure {
    violation: ContractViolation,
    trace: Trace,
}

impl ContractFailure {
    pub fn new(violation: ContractViolation, trace: Trace) -> Self {
        Self { violation, trace }
    }

    pub fn violation(&self) -> &ContractViolation {
        &self.violation
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }
}

#[derive(Debug, Error)]
pub enum Failure {
    #[error(transparent)]
    Argument(#[from] ArgumentFailure),
    #[error(transparent)]
    Contract(#[from] ContractFailure),
}

impl Failure {
    pub fn is_argument(&self) -> bool {
        matches!(self, Failure::Argument(_))
    }

    pub fn is_contract(&self) -> bool {
        matches!(self, Failure::Contract(_))
    }

    pub fn as_argument(&self) -> Option<&ArgumentFailure> {
        match self {
            Failure::Argument(failure) => Some(failure),
            Failure::Contract(_) => None,
        }
    }

    pub fn as_contract(&self) -> Option<&ContractFailure> {
        match self {
            Failure::Contract(failure) => Some(failure),
            Failure::Argument(_) => None,
        }
    }

    pub fn trace(&self) -> &Trace {
        match self {
            Failure::Argument(failure) => failure.trace(),
            Failure::Contract(failure) => failure.trace(),
        }
    }
}

/// Builds failures from the compiled catalog and cleans their provenance.
#[derive(Clone, Copy, Debug)]
pub struct FailureFactory<'a> {
    catalog: &'a Catalog,
    cleaner: &'a ProvenanceCleaner,
}

impl<'a> FailureFactory<'a> {
    pub fn new(catalog: &'a Catalog, cleaner: &'a ProvenanceCleaner) -> Self {
        Self { catalog, cleaner }
    }

    /// Render the failure for `kind` with the polarity selected by `inverted`.
    ///
    /// `args` must match the kind's placeholder count; a mismatch is reported as a
    /// [`ContractFailure`] rather than an argument failure.
    pub fn build<S: AsRef<str>>(
        &self,
        kind: FailureKind,
        inverted: bool,
        args: &[S],
        cause: Option<Cause>,
    ) -> Failure {
        let polarity = Polarity::from_inverted(inverted);
        let trace = self.trace();
        match self.catalog.template(kind).render(polarity, args) {
            Ok(message) => {
                tracing::debug!(%kind, %polarity, "argument check failed");
                ArgumentFailure {
                    kind,
                    polarity,
                    message,
                    cause,
                    trace,
                }
                .into()
            }
            Err(source) => {
                tracing::debug!(%kind, %polarity, %source, "predicate supplied wrong argument count");
                ContractFailure::new(ContractViolation::ArgumentCount { kind, source }, trace)
                    .into()
            }
        }
    }

    /// Capture the current trace, cleaned according to settings.
    pub fn trace(&self) -> Trace {
        provenance::capture(self.cleaner)
    }
}
