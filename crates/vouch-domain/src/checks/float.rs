use super::Comparable;
use crate::check::{Check, Fluent};
use crate::failure::CheckResult;
use crate::pool::Variant;
use vouch_types::FailureKind;

/// Check over an `f64`. NaN compares false against every bound, so every ordering
/// predicate fails on NaN unless negated.
#[derive(Debug)]
pub struct FloatCheck<'c>(Check<'c, f64>);

impl<'c> Fluent<'c> for FloatCheck<'c> {
    type Subject = f64;
    const VARIANT: Variant = Variant::Float;

    fn from_check(check: Check<'c, f64>) -> Self {
        Self(check)
    }

    fn check(&self) -> &Check<'c, f64> {
        &self.0
    }

    fn check_mut(&mut self) -> &mut Check<'c, f64> {
        &mut self.0
    }

    fn into_check(self) -> Check<'c, f64> {
        self.0
    }
}

impl<'c> Comparable<'c> for FloatCheck<'c> {}

impl FloatCheck<'_> {
    pub fn is_finite(self) -> CheckResult<Self> {
        self.classify(FailureKind::Finite, f64::is_finite)
    }

    pub fn is_nan(self) -> CheckResult<Self> {
        self.classify(FailureKind::Nan, f64::is_nan)
    }

    pub fn is_positive(self) -> CheckResult<Self> {
        self.classify(FailureKind::Positive, |v| v > 0.0)
    }

    pub fn is_negative(self) -> CheckResult<Self> {
        self.classify(FailureKind::Negative, |v| v < 0.0)
    }

    fn classify(mut self, kind: FailureKind, holds: impl FnOnce(f64) -> bool) -> CheckResult<Self> {
        self.0.evaluate(
            kind,
            |v| holds(*v),
            |name, v| vec![name.to_owned(), v.to_string()],
        )?;
        Ok(self)
    }
}
