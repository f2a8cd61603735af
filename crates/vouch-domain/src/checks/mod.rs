//! Check variants and the shape families they share.
//!
//! Each variant is a thin wrapper over [`Check`](crate::check::Check) for one value shape.
//! Predicates common to a family of shapes live as default methods on [`Measured`],
//! [`Elements`] and [`Comparable`]; predicates unique to a shape are inherent methods.

use crate::check::Fluent;
use crate::failure::CheckResult;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::{Debug, Display};
use std::hash::{BuildHasher, Hash};
use vouch_types::FailureKind;

mod array;
mod float;
mod integer;
mod map;
mod number;
mod object;
mod sequence;
mod text;


pub use array::ArrayCheck;
pub use float::FloatCheck;
pub use integer::IntCheck;
pub use map::MapCheck;
pub use number::NumberCheck;
pub use object::ObjectCheck;
pub use sequence::SeqCheck;
pub use text::TextCheck;

/// How a measured value words its extent in messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Measure {
    /// Characters of a text.
    Length,
    /// Elements of a collection.
    Size,
}

impl Measure {
    /// Property name of the derived check.
    pub fn property(self) -> &'static str {
        match self {
            Measure::Length => "length",
            Measure::Size => "size",
        }
    }

    pub fn exact_kind(self) -> FailureKind {
        match self {
            Measure::Length => FailureKind::Length,
            Measure::Size => FailureKind::Size,
        }
    }

    pub fn between_kind(self) -> FailureKind {
        match self {
            Measure::Length => FailureKind::LengthBetween,
            Measure::Size => FailureKind::SizeBetween,
        }
    }
}

/// Values with a length or size: text, sequences, arrays and mappings.
pub trait Measured<'c>: Fluent<'c> {
    const MEASURE: Measure;

    fn measure(subject: &Self::Subject) -> usize;

    fn is_not_empty(mut self) -> CheckResult<Self> {
        self.check_mut().evaluate(
            FailureKind::NotEmpty,
            |v| Self::measure(v) > 0,
            |name, _| vec![name.to_owned()],
        )?;
        Ok(self)
    }

    fn is_empty(mut self) -> CheckResult<Self> {
        self.check_mut().negate();
        self.is_not_empty()
    }

    fn has_size(mut self, expected: usize) -> CheckResult<Self> {
        self.check_mut().evaluate(
            Self::MEASURE.exact_kind(),
            |v| Self::measure(v) == expected,
            |name, v| {
                vec![
                    name.to_owned(),
                    expected.to_string(),
                    Self::measure(v).to_string(),
                ]
            },
        )?;
        Ok(self)
    }

    /// Inclusive on both ends.
    fn has_size_between(mut self, min: usize, max: usize) -> CheckResult<Self> {
        self.check_mut().evaluate(
            Self::MEASURE.between_kind(),
            |v| (min..=max).contains(&Self::measure(v)),
            |name, v| {
                vec![
                    name.to_owned(),
                    min.to_string(),
                    max.to_string(),
                    Self::measure(v).to_string(),
                ]
            },
        )?;
        Ok(self)
    }

    /// Derive a check on the length or size, named `"the size of <name>"`.
    fn size(self) -> CheckResult<NumberCheck<'c, usize>> {
        self.into_check()
            .derive(Self::MEASURE.property(), Self::measure)
    }
}

/// Measured values whose elements can be inspected.
pub trait Elements<'c>: Measured<'c> {
    type Item;

    fn elements(subject: &Self::Subject) -> &[Self::Item];

    fn contains(mut self, element: &Self::Item) -> CheckResult<Self>
    where
        Self::Item: PartialEq + Debug,
    {
        self.check_mut().evaluate(
            FailureKind::Contains,
            |v| Self::elements(v).contains(element),
            |name, v| {
                vec![
                    name.to_owned(),
                    format!("{element:?}"),
                    format!("{:?}", Self::elements(v)),
                ]
            },
        )?;
        Ok(self)
    }

    fn contains_all(mut self, required: &[Self::Item]) -> CheckResult<Self>
    where
        Self::Item: PartialEq + Debug,
    {
        self.check_mut().evaluate(
            FailureKind::ContainsAll,
            |v| {
                let elements = Self::elements(v);
                required.iter().all(|item| elements.contains(item))
            },
            |name, v| {
                vec![
                    name.to_owned(),
                    format!("{required:?}"),
                    format!("{:?}", Self::elements(v)),
                ]
            },
        )?;
        Ok(self)
    }

    fn has_unique_elements(mut self) -> CheckResult<Self>
    where
        Self::Item: Eq + Hash + Debug,
    {
        self.check_mut().evaluate(
            FailureKind::Unique,
            |v| {
                let elements = Self::elements(v);
                let mut seen = HashSet::with_capacity(elements.len());
                elements.iter().all(|item| seen.insert(item))
            },
            |name, v| vec![name.to_owned(), format!("{:?}", Self::elements(v))],
        )?;
        Ok(self)
    }
}

/// Ordered scalars: generic numbers, integers and floats.
///
/// Values and bounds render with `Display`.
pub trait Comparable<'c>: Fluent<'c, Subject: PartialOrd + Copy + Display> {
    fn is_greater_than(mut self, bound: Self::Subject) -> CheckResult<Self> {
        self.check_mut().evaluate(
            FailureKind::GreaterThan,
            |v| *v > bound,
            |name, v| vec![name.to_owned(), bound.to_string(), v.to_string()],
        )?;
        Ok(self)
    }

    fn is_greater_than_or_equal_to(mut self, bound: Self::Subject) -> CheckResult<Self> {
        self.check_mut().evaluate(
            FailureKind::GreaterThanOrEqual,
            |v| *v >= bound,
            |name, v| vec![name.to_owned(), bound.to_string(), v.to_string()],
        )?;
        Ok(self)
    }

    fn is_less_than(mut self, bound: Self::Subject) -> CheckResult<Self> {
        self.check_mut().evaluate(
            FailureKind::LessThan,
            |v| *v < bound,
            |name, v| vec![name.to_owned(), bound.to_string(), v.to_string()],
        )?;
        Ok(self)
    }

    fn is_less_than_or_equal_to(mut self, bound: Self::Subject) -> CheckResult<Self> {
        self.check_mut().evaluate(
            FailureKind::LessThanOrEqual,
            |v| *v <= bound,
            |name, v| vec![name.to_owned(), bound.to_string(), v.to_string()],
        )?;
        Ok(self)
    }

    /// Inclusive on both ends.
    fn is_between(mut self, min: Self::Subject, max: Self::Subject) -> CheckResult<Self> {
        self.check_mut().evaluate(
            FailureKind::Between,
            |v| *v >= min && *v <= max,
            |name, v| {
                vec![
                    name.to_owned(),
                    min.to_string(),
                    max.to_string(),
                    v.to_string(),
                ]
            },
        )?;
        Ok(self)
    }
}

/// Associative containers accepted by [`MapCheck`].
pub trait Mapping {
    type Key;
    type Value;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains_key(&self, key: &Self::Key) -> bool;

    fn contains_value(&self, value: &Self::Value) -> bool
    where
        Self::Value: PartialEq;
}

impl<K: Eq + Hash, V, S: BuildHasher> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }
}
