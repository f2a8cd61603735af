//! Built-in message catalog.
//!
//! Every failure kind maps to one dual-polarity template. `[+ ... +]` spans appear only in
//! the positive rendering, `[! ... !]` spans only in the negated one, and each `{}`
//! consumes one rendering argument in order.

use crate::kind::FailureKind;

/// Built-in template for a kind.
pub fn default_template(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::Null => "{} must [!not !]be null",
        FailureKind::NotNull => "{} must not be null",

        FailureKind::NotEmpty => "{} must [+not +]be empty",
        FailureKind::NotBlank => "{} must [+not +]be blank",
        FailureKind::Length => "{} must [!not !]have a length of {}, but it was {}",
        FailureKind::LengthBetween => {
            "{} must [!not !]have a length between {} and {}, but it was {}"
        }
        FailureKind::Size => "{} must [!not !]contain exactly {} elements, but it contained {}",
        FailureKind::SizeBetween => {
            "{} must [!not !]contain between {} and {} elements, but it contained {}"
        }

        FailureKind::Equal => "{} must [!not !]be equal to {}, but was {}",
        FailureKind::OneOf => "{} must [!not !]be one of {}, but was {}",
        FailureKind::Satisfies => "{} must [!not !]satisfy {}, but was {}",

        FailureKind::GreaterThan => "{} must [!not !]be greater than {}, but was {}",
        FailureKind::GreaterThanOrEqual => {
            "{} must [!not !]be greater than or equal to {}, but was {}"
        }
        FailureKind::LessThan => "{} must [!not !]be less than {}, but was {}",
        FailureKind::LessThanOrEqual => "{} must [!not !]be less than or equal to {}, but was {}",
        FailureKind::Between => "{} must [!not !]be between {} and {}, but was {}",

        FailureKind::Positive => "{} must [!not !]be positive, but was {}",
        FailureKind::Negative => "{} must [!not !]be negative, but was {}",
        FailureKind::Zero => "{} must [!not !]be zero, but was {}",
        FailureKind::MultipleOf => "{} must [!not !]be a multiple of {}, but was {}",
        FailureKind::Finite => "{} must [!not !]be finite, but was {}",
        FailureKind::Nan => "{} must [!not !]be NaN, but was {}",

        FailureKind::StartsWith => "{} must [!not !]start with {}, but was {}",
        FailureKind::EndsWith => "{} must [!not !]end with {}, but was {}",
        FailureKind::Contains => "{} must [!not !]contain {}, but was {}",
        FailureKind::ContainsAll => "{} must [!not !]contain all of {}, but was {}",
        FailureKind::Unique => "{} must [+only +]contain [!duplicate!][+unique+] elements, but was {}",
        FailureKind::ContainsKey => "{} must [!not !]contain the key {}",
        FailureKind::ContainsValue => "{} must [!not !]contain the value {}",

        FailureKind::Matches => "{} must [!not !]match the pattern {}, but was {}",
        FailureKind::Url => "{} must [!not !]be a valid URL, but was {}",
        FailureKind::Scheme => "{} must [!not !]use the {} scheme, but was {}",
    }
}

/// Look up a built-in template by stable kind ID.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_template(id: &str) -> Option<&'static str> {
    FailureKind::from_id(id).map(default_template)
}

/// List all known kinds, in catalog order.
pub fn all_kinds() -> &'static [FailureKind] {
    &FailureKind::ALL
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholders(template: &str) -> usize {
        template.matches("{}").count()
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(
            lookup_template("NOT_EMPTY"),
            Some("{} must [+not +]be empty")
        );
        assert!(lookup_template("BETWEEN").is_some());
        assert!(lookup_template("SCHEME").is_some());
    }

    #[test]
    fn lookup_unknown_returns_none() {
        assert!(lookup_template("unknown").is_none());
        assert!(lookup_template("").is_none());
    }

    #[test]
    fn every_template_starts_with_the_name_placeholder() {
        for kind in all_kinds() {
            assert!(
                default_template(*kind).starts_with("{} "),
                "template for {kind} should lead with the display name"
            );
        }
    }

    #[test]
    fn placeholder_count_matches_arity() {
        for kind in all_kinds() {
            assert_eq!(
                placeholders(default_template(*kind)),
                kind.arity(),
                "template for {kind} disagrees with its arity"
            );
        }
    }
}
