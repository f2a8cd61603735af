//! Property-based tests for the check state machine.
//!
//! - inversion is consumed by exactly one evaluation
//! - rebinding a pooled state leaves nothing behind from the previous bind
//! - null allowance short-circuits every predicate family except the null checks
//! - provenance trimming stops at the first caller frame

use crate::check::Fluent;
use crate::checks::{Comparable, Elements, Measured};
use crate::policy::LIBRARY_PREFIXES;
use crate::provenance::ProvenanceCleaner;
use crate::test_support::{context, trace_of};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_name() -> impl Strategy<Value = String> {
    "[a-z][a-z ]{0,15}"
}

fn arb_library_frame() -> impl Strategy<Value = String> {
    (
        prop::sample::select(LIBRARY_PREFIXES.to_vec()),
        "[a-z_]{1,12}",
        "[a-z_]{1,12}",
    )
        .prop_filter("test modules are not library frames", |(_, module, _)| module != "tests")
        .prop_map(|(krate, module, func)| format!("{krate}::{module}::{func}"))
}

fn arb_caller_frame() -> impl Strategy<Value = String> {
    ("app_[a-z]{1,8}", "[a-z_]{1,12}").prop_map(|(krate, func)| format!("{krate}::{func}"))
}

// ============================================================================
// Inversion
// ============================================================================

proptest! {
    #[test]
    fn inversion_is_consumed_by_one_evaluation(value in -1000i64..1000, bound in -1000i64..1000) {
        let ctx = context();
        let holds = value > bound;

        let negated = ctx.int(value).not().is_greater_than(bound);
        prop_assert_eq!(negated.is_ok(), !holds);

        if let Ok(check) = negated {
            prop_assert!(!check.check().state().is_inverted());
            let again = check.is_greater_than(bound);
            prop_assert_eq!(again.is_ok(), holds);
        }
    }

    #[test]
    fn double_negation_cancels(text in "[a-c]{0,4}") {
        let ctx = context();
        let direct = ctx.text(text.as_str()).is_not_empty().is_ok();
        let doubled = ctx.text(text.as_str()).not().not().is_not_empty().is_ok();
        prop_assert_eq!(direct, doubled);
    }

    #[test]
    fn failed_evaluation_also_consumes_inversion(value in 0i64..100) {
        let ctx = context();
        // Fails: value is in range, negated.
        let failure = ctx.int(value).not().is_between(0, 100);
        prop_assert!(failure.is_err());
        drop(failure);

        let rebound = ctx.int(value);
        prop_assert!(!rebound.check().state().is_inverted());
    }
}

// ============================================================================
// Reset isolation
// ============================================================================

proptest! {
    #[test]
    fn rebinding_resets_name_null_allowance_and_inversion(
        name in arb_name(),
        allow in any::<bool>(),
        negate in any::<bool>(),
        first in "[a-z]{0,6}",
        second in "[a-z]{0,6}",
    ) {
        let ctx = context();
        {
            let mut check = ctx.text(first.as_str()).named(&name);
            if allow {
                check = check.allow_null();
            }
            if negate {
                check = check.not();
            }
            let _ = check.is_not_empty();
        }
        {
            let mut check = ctx.text(first.as_str()).named(&name);
            if negate {
                check = check.not();
            }
            // Left pending: the next bind must not see it.
            drop(check);
        }

        let check = ctx.text(second.as_str());
        prop_assert!(check.check().is_pooled());
        let state = check.check().state();
        prop_assert_eq!(state.name(), "the argument");
        prop_assert!(!state.is_null_allowed());
        prop_assert!(!state.is_inverted());
        prop_assert!(!state.is_disabled());
    }
}

// ============================================================================
// Null allowance
// ============================================================================

proptest! {
    #[test]
    fn allowed_null_passes_every_non_null_predicate(
        negate in any::<bool>(),
        bound in any::<i64>(),
        needle in "[a-z]{0,4}",
    ) {
        let ctx = context();

        let text = ctx.text(None::<&str>).allow_null();
        let text = if negate { text.not() } else { text };
        let text = text.is_not_empty().and_then(|c| c.starts_with(&needle));
        prop_assert!(text.is_ok());
        drop(text);

        let int = ctx.int(None::<i64>).allow_null();
        let int = if negate { int.not() } else { int };
        prop_assert!(int.is_greater_than(bound).and_then(|c| c.is_zero()).is_ok());

        let seq = ctx.seq(None::<&[u8]>).allow_null();
        let seq = if negate { seq.not() } else { seq };
        prop_assert!(seq.has_unique_elements().and_then(|c| c.has_size(3)).is_ok());

        let obj = ctx.object_opt(None::<u8>).allow_null();
        let obj = if negate { obj.not() } else { obj };
        prop_assert!(obj.is_equal_to(1u8).is_ok());
    }

    #[test]
    fn allowed_null_still_fails_is_null_under_negation(name in arb_name()) {
        let ctx = context();
        let failure = ctx
            .text(None::<&str>)
            .named(&name)
            .allow_null()
            .not()
            .is_null();
        prop_assert!(failure.is_err());
        if let Err(failure) = failure {
            prop_assert_eq!(failure.to_string(), format!("{name} must not be null"));
        }
    }
}

// ============================================================================
// Provenance
// ============================================================================

#[test]
fn three_library_two_caller_one_library_trims_exactly_three() {
    let mut trace = trace_of(&[
        "vouch_domain::failure::FailureFactory::build",
        "vouch_domain::check::Check<T>::evaluate",
        "<vouch_domain::checks::integer::IntCheck>::is_positive",
        "app::orders::place",
        "app::main",
        "vouch::load_validator",
    ]);
    let tail = trace.frames()[3..].to_vec();

    ProvenanceCleaner::new(true, LIBRARY_PREFIXES.iter().copied()).clean(&mut trace);

    assert_eq!(trace.frames(), tail.as_slice());
}

proptest! {
    #[test]
    fn cleaning_removes_exactly_the_library_prefix(
        library in prop::collection::vec(arb_library_frame(), 0..6),
        callers in prop::collection::vec(arb_caller_frame(), 1..4),
        trailing in prop::collection::vec(arb_library_frame(), 0..3),
    ) {
        let symbols: Vec<&str> = library
            .iter()
            .chain(&callers)
            .chain(&trailing)
            .map(String::as_str)
            .collect();
        let raw = trace_of(&symbols);
        let mut trace = raw.clone();

        ProvenanceCleaner::new(true, LIBRARY_PREFIXES.iter().copied()).clean(&mut trace);

        prop_assert_eq!(trace.len(), callers.len() + trailing.len());
        prop_assert_eq!(trace.frames(), &raw.frames()[library.len()..]);
    }

    #[test]
    fn disabled_cleaning_preserves_the_trace(
        library in prop::collection::vec(arb_library_frame(), 0..6),
    ) {
        let symbols: Vec<&str> = library.iter().map(String::as_str).collect();
        let raw = trace_of(&symbols);
        let mut trace = raw.clone();

        ProvenanceCleaner::new(false, LIBRARY_PREFIXES.iter().copied()).clean(&mut trace);

        prop_assert_eq!(trace, raw);
    }
}
