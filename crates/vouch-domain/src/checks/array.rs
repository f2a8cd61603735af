use super::{Elements, Measure, Measured};
use crate::check::{Check, Fluent};
use crate::pool::Variant;

/// Check over a fixed-size array.
#[derive(Debug)]
pub struct ArrayCheck<'c, 'v, T, const N: usize>(Check<'c, &'v [T; N]>);

impl<'c, 'v, T, const N: usize> Fluent<'c> for ArrayCheck<'c, 'v, T, N> {
    type Subject = &'v [T; N];
    const VARIANT: Variant = Variant::Array;

    fn from_check(check: Check<'c, &'v [T; N]>) -> Self {
        Self(check)
    }

    fn check(&self) -> &Check<'c, &'v [T; N]> {
        &self.0
    }

    fn check_mut(&mut self) -> &mut Check<'c, &'v [T; N]> {
        &mut self.0
    }

    fn into_check(self) -> Check<'c, &'v [T; N]> {
        self.0
    }
}

impl<'c, 'v, T, const N: usize> Measured<'c> for ArrayCheck<'c, 'v, T, N> {
    const MEASURE: Measure = Measure::Size;

    fn measure(_: &&'v [T; N]) -> usize {
        N
    }
}

impl<'c, 'v, T, const N: usize> Elements<'c> for ArrayCheck<'c, 'v, T, N> {
    type Item = T;

    fn elements<'s>(subject: &'s &'v [T; N]) -> &'s [T] {
        subject.as_slice()
    }
}
