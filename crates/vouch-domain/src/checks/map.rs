use super::{Mapping, Measure, Measured};
use crate::check::{Check, Fluent};
use crate::failure::CheckResult;
use crate::pool::Variant;
use std::fmt::Debug;
use vouch_types::FailureKind;

/// Check over a `HashMap` or `BTreeMap`.
#[derive(Debug)]
pub struct MapCheck<'c, 'v, M>(Check<'c, &'v M>);

impl<'c, 'v, M> Fluent<'c> for MapCheck<'c, 'v, M> {
    type Subject = &'v M;
    const VARIANT: Variant = Variant::Map;

    fn from_check(check: Check<'c, &'v M>) -> Self {
        Self(check)
    }

    fn check(&self) -> &Check<'c, &'v M> {
        &self.0
    }

    fn check_mut(&mut self) -> &mut Check<'c, &'v M> {
        &mut self.0
    }

    fn into_check(self) -> Check<'c, &'v M> {
        self.0
    }
}

impl<'c, 'v, M: Mapping> Measured<'c> for MapCheck<'c, 'v, M> {
    const MEASURE: Measure = Measure::Size;

    fn measure(subject: &&'v M) -> usize {
        subject.len()
    }
}

impl<M: Mapping> MapCheck<'_, '_, M> {
    pub fn contains_key(mut self, key: &M::Key) -> CheckResult<Self>
    where
        M::Key: Debug,
    {
        self.0.evaluate(
            FailureKind::ContainsKey,
            |m| m.contains_key(key),
            |name, _| vec![name.to_owned(), format!("{key:?}")],
        )?;
        Ok(self)
    }

    pub fn contains_value(mut self, value: &M::Value) -> CheckResult<Self>
    where
        M::Value: PartialEq + Debug,
    {
        self.0.evaluate(
            FailureKind::ContainsValue,
            |m| m.contains_value(value),
            |name, _| vec![name.to_owned(), format!("{value:?}")],
        )?;
        Ok(self)
    }
}
