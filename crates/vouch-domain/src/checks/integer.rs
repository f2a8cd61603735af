use super::Comparable;
use crate::check::{Check, Fluent};
use crate::failure::CheckResult;
use crate::pool::Variant;
use vouch_types::FailureKind;

#[derive(Debug)]
pub struct IntCheck<'c>(Check<'c, i64>);

impl<'c> Fluent<'c> for IntCheck<'c> {
    type Subject = i64;
    const VARIANT: Variant = Variant::Integer;

    fn from_check(check: Check<'c, i64>) -> Self {
        Self(check)
    }

    fn check(&self) -> &Check<'c, i64> {
        &self.0
    }

    fn check_mut(&mut self) -> &mut Check<'c, i64> {
        &mut self.0
    }

    fn into_check(self) -> Check<'c, i64> {
        self.0
    }
}

impl<'c> Comparable<'c> for IntCheck<'c> {}

impl IntCheck<'_> {
    pub fn is_positive(self) -> CheckResult<Self> {
        self.sign(FailureKind::Positive, |v| v > 0)
    }

    pub fn is_negative(self) -> CheckResult<Self> {
        self.sign(FailureKind::Negative, |v| v < 0)
    }

    pub fn is_zero(self) -> CheckResult<Self> {
        self.sign(FailureKind::Zero, |v| v == 0)
    }

    /// Zero is a multiple of everything, and only zero is a multiple of zero.
    pub fn is_multiple_of(mut self, divisor: i64) -> CheckResult<Self> {
        self.0.evaluate(
            FailureKind::MultipleOf,
            |v| is_multiple(*v, divisor),
            |name, v| vec![name.to_owned(), divisor.to_string(), v.to_string()],
        )?;
        Ok(self)
    }

    fn sign(mut self, kind: FailureKind, holds: impl FnOnce(i64) -> bool) -> CheckResult<Self> {
        self.0.evaluate(
            kind,
            |v| holds(*v),
            |name, v| vec![name.to_owned(), v.to_string()],
        )?;
        Ok(self)
    }
}

fn is_multiple(value: i64, divisor: i64) -> bool {
    // `checked_rem` is `None` for a zero divisor and for `i64::MIN % -1`.
    value
        .checked_rem(divisor)
        .map_or(divisor == -1 || value == 0, |rem| rem == 0)
}

#[cfg(test)]
mod tests {
    use super::is_multiple;

    #[test]
    fn multiples_cover_the_overflow_and_zero_edges() {
        assert!(is_multiple(12, 4));
        assert!(is_multiple(-12, 4));
        assert!(!is_multiple(13, 4));
        assert!(is_multiple(0, 0));
        assert!(!is_multiple(5, 0));
        assert!(is_multiple(i64::MIN, -1));
    }
}
