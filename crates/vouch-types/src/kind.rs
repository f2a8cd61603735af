//! Stable identifiers for failure kinds.
//!
//! Each kind names one predicate family. Its `id` is the SCREAMING_SNAKE key used by
//! configuration (`<ID>.format`) and its `arity` is the number of rendering arguments
//! every template for the kind must consume. The first argument is always the
//! display name of the checked value.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureKind {
    // Presence
    Null,
    NotNull,

    // Emptiness and measure
    NotEmpty,
    NotBlank,
    Length,
    LengthBetween,
    Size,
    SizeBetween,

    // Identity
    Equal,
    OneOf,
    Satisfies,

    // Ordering
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Between,

    // Sign and numeric shape
    Positive,
    Negative,
    Zero,
    MultipleOf,
    Finite,
    Nan,

    // Containment
    StartsWith,
    EndsWith,
    Contains,
    ContainsAll,
    Unique,
    ContainsKey,
    ContainsValue,

    // Pattern and protocol shape
    Matches,
    Url,
    Scheme,
}

impl FailureKind {
    pub const ALL: [FailureKind; 32] = [
        FailureKind::Null,
        FailureKind::NotNull,
        FailureKind::NotEmpty,
        FailureKind::NotBlank,
        FailureKind::Length,
        FailureKind::LengthBetween,
        FailureKind::Size,
        FailureKind::SizeBetween,
        FailureKind::Equal,
        FailureKind::OneOf,
        FailureKind::Satisfies,
        FailureKind::GreaterThan,
        FailureKind::GreaterThanOrEqual,
        FailureKind::LessThan,
        FailureKind::LessThanOrEqual,
        FailureKind::Between,
        FailureKind::Positive,
        FailureKind::Negative,
        FailureKind::Zero,
        FailureKind::MultipleOf,
        FailureKind::Finite,
        FailureKind::Nan,
        FailureKind::StartsWith,
        FailureKind::EndsWith,
        FailureKind::Contains,
        FailureKind::ContainsAll,
        FailureKind::Unique,
        FailureKind::ContainsKey,
        FailureKind::ContainsValue,
        FailureKind::Matches,
        FailureKind::Url,
        FailureKind::Scheme,
    ];

    /// Number of kinds; the catalog stores one template per kind.
    pub const COUNT: usize = Self::ALL.len();

    pub fn id(self) -> &'static str {
        match self {
            FailureKind::Null => "NULL",
            FailureKind::NotNull => "NOT_NULL",
            FailureKind::NotEmpty => "NOT_EMPTY",
            FailureKind::NotBlank => "NOT_BLANK",
            FailureKind::Length => "LENGTH",
            FailureKind::LengthBetween => "LENGTH_BETWEEN",
            FailureKind::Size => "SIZE",
            FailureKind::SizeBetween => "SIZE_BETWEEN",
            FailureKind::Equal => "EQUAL",
            FailureKind::OneOf => "ONE_OF",
            FailureKind::Satisfies => "SATISFIES",
            FailureKind::GreaterThan => "GREATER_THAN",
            FailureKind::GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
            FailureKind::LessThan => "LESS_THAN",
            FailureKind::LessThanOrEqual => "LESS_THAN_OR_EQUAL",
            FailureKind::Between => "BETWEEN",
            FailureKind::Positive => "POSITIVE",
            FailureKind::Negative => "NEGATIVE",
            FailureKind::Zero => "ZERO",
            FailureKind::MultipleOf => "MULTIPLE_OF",
            FailureKind::Finite => "FINITE",
            FailureKind::Nan => "NAN",
            FailureKind::StartsWith => "STARTS_WITH",
            FailureKind::EndsWith => "ENDS_WITH",
            FailureKind::Contains => "CONTAINS",
            FailureKind::ContainsAll => "CONTAINS_ALL",
            FailureKind::Unique => "UNIQUE",
            FailureKind::ContainsKey => "CONTAINS_KEY",
            FailureKind::ContainsValue => "CONTAINS_VALUE",
            FailureKind::Matches => "MATCHES",
            FailureKind::Url => "URL",
            FailureKind::Scheme => "SCHEME",
        }
    }

    /// Parse a stable ID. Returns `None` for unknown identifiers.
    pub fn from_id(id: &str) -> Option<FailureKind> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// Number of rendering arguments (display name included).
    pub fn arity(self) -> usize {
        match self {
            FailureKind::Null
            | FailureKind::NotNull
            | FailureKind::NotEmpty
            | FailureKind::NotBlank => 1,

            FailureKind::Positive
            | FailureKind::Negative
            | FailureKind::Zero
            | FailureKind::Finite
            | FailureKind::Nan
            | FailureKind::Unique
            | FailureKind::ContainsKey
            | FailureKind::ContainsValue
            | FailureKind::Url => 2,

            FailureKind::Length
            | FailureKind::Size
            | FailureKind::Equal
            | FailureKind::OneOf
            | FailureKind::Satisfies
            | FailureKind::GreaterThan
            | FailureKind::GreaterThanOrEqual
            | FailureKind::LessThan
            | FailureKind::LessThanOrEqual
            | FailureKind::MultipleOf
            | FailureKind::StartsWith
            | FailureKind::EndsWith
            | FailureKind::Contains
            | FailureKind::ContainsAll
            | FailureKind::Matches
            | FailureKind::Scheme => 3,

            FailureKind::LengthBetween | FailureKind::SizeBetween | FailureKind::Between => 4,
        }
    }

    /// Dense index, usable as a table offset.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position_in_all() {
        for (i, kind) in FailureKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), i, "{kind} is out of order in ALL");
        }
    }

    #[test]
    fn ids_round_trip() {
        for kind in FailureKind::ALL {
            assert_eq!(FailureKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(FailureKind::from_id("not_empty"), None);
        assert_eq!(FailureKind::from_id("UNKNOWN"), None);
    }

    #[test]
    fn serde_uses_the_stable_id() {
        for kind in FailureKind::ALL {
            let json = serde_json::to_string(&kind).expect("serialize kind");
            assert_eq!(json, format!("\"{}\"", kind.id()));
        }
    }
}
