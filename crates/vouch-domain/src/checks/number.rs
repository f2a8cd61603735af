use super::Comparable;
use crate::check::{Check, Fluent};
use crate::pool::Variant;
use std::fmt::Display;

/// Check over any ordered, displayable scalar.
#[derive(Debug)]
pub struct NumberCheck<'c, N>(Check<'c, N>);

impl<'c, N> Fluent<'c> for NumberCheck<'c, N> {
    type Subject = N;
    const VARIANT: Variant = Variant::Number;

    fn from_check(check: Check<'c, N>) -> Self {
        Self(check)
    }

    fn check(&self) -> &Check<'c, N> {
        &self.0
    }

    fn check_mut(&mut self) -> &mut Check<'c, N> {
        &mut self.0
    }

    fn into_check(self) -> Check<'c, N> {
        self.0
    }
}

impl<'c, N: PartialOrd + Copy + Display> Comparable<'c> for NumberCheck<'c, N> {}
