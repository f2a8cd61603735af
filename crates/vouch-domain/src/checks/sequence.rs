use super::{Elements, Measure, Measured};
use crate::check::{Check, Fluent};
use crate::pool::Variant;

/// Check over a slice.
#[derive(Debug)]
pub struct SeqCheck<'c, 'v, T>(Check<'c, &'v [T]>);

impl<'c, 'v, T> Fluent<'c> for SeqCheck<'c, 'v, T> {
    type Subject = &'v [T];
    const VARIANT: Variant = Variant::Sequence;

    fn from_check(check: Check<'c, &'v [T]>) -> Self {
        Self(check)
    }

    fn check(&self) -> &Check<'c, &'v [T]> {
        &self.0
    }

    fn check_mut(&mut self) -> &mut Check<'c, &'v [T]> {
        &mut self.0
    }

    fn into_check(self) -> Check<'c, &'v [T]> {
        self.0
    }
}

impl<'c, 'v, T> Measured<'c> for SeqCheck<'c, 'v, T> {
    const MEASURE: Measure = Measure::Size;

    fn measure(subject: &&'v [T]) -> usize {
        subject.len()
    }
}

impl<'c, 'v, T> Elements<'c> for SeqCheck<'c, 'v, T> {
    type Item = T;

    fn elements<'s>(subject: &'s &'v [T]) -> &'s [T] {
        subject
    }
}
