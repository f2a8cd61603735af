//! The check state machine shared by every variant.
//!
//! Every predicate funnels through [`Check::evaluate`] (or [`Check::evaluate_presence`] for
//! the null-check family):
//!
//! 1. null value, null not allowed: fail with `NOT_NULL`, whatever the condition;
//! 2. null value, null allowed: pass without evaluating the condition;
//! 3. otherwise fail when the condition, flipped if inverted, does not hold.
//!
//! The inversion flag is consumed by every evaluation, pass or fail.

use crate::failure::{Cause, CheckResult, Failure};
use crate::pool::{CheckContext, Variant};
use crate::state::{CheckState, Slot};
use std::fmt::Debug;
use vouch_types::FailureKind;

pub struct Check<'c, T> {
    value: Option<T>,
    state: Slot<'c>,
    ctx: &'c CheckContext,
}

impl<'c, T> Check<'c, T> {
    pub(crate) fn bind(ctx: &'c CheckContext, mut state: Slot<'c>, value: Option<T>) -> Self {
        state.reset(ctx.validator().default_name());
        Self { value, state, ctx }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn state(&self) -> &CheckState {
        &self.state
    }

    pub fn context(&self) -> &'c CheckContext {
        self.ctx
    }

    /// Whether the state was leased from the context's pool.
    pub fn is_pooled(&self) -> bool {
        self.state.is_pooled()
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.state.set_name(name);
    }

    pub(crate) fn allow_null(&mut self) {
        self.state.allow_null();
    }

    pub(crate) fn negate(&mut self) {
        self.state.toggle_inversion();
    }

    /// Evaluate a predicate whose condition is `holds` for the non-negated case.
    ///
    /// `args` builds the rendering arguments and only runs on failure.
    pub fn evaluate<H, A>(&mut self, kind: FailureKind, holds: H, args: A) -> CheckResult<()>
    where
        H: FnOnce(&T) -> bool,
        A: FnOnce(&str, &T) -> Vec<String>,
    {
        self.evaluate_with_cause(kind, |value| (holds(value), None), args)
    }

    /// Like [`Check::evaluate`], but the test may supply an underlying cause. The cause is
    /// chained only when the non-negated condition fails.
    pub fn evaluate_with_cause<H, A>(
        &mut self,
        kind: FailureKind,
        test: H,
        args: A,
    ) -> CheckResult<()>
    where
        H: FnOnce(&T) -> (bool, Option<Cause>),
        A: FnOnce(&str, &T) -> Vec<String>,
    {
        let inverted = self.state.take_inversion();
        if self.state.is_disabled() {
            return Ok(());
        }
        let Some(value) = self.value.as_ref() else {
            if self.state.is_null_allowed() {
                return Ok(());
            }
            return Err(self.null_violation(inverted));
        };

        let (holds, cause) = test(value);
        if holds != inverted {
            return Ok(());
        }
        let args = args(self.state.name(), value);
        let cause = if inverted { None } else { cause };
        Err(self
            .ctx
            .validator()
            .failures()
            .build(kind, inverted, &args, cause))
    }

    /// The null-check family. Evaluates "value is null" (`expect_null`) or its negation
    /// directly: null allowance does not short-circuit it.
    pub fn evaluate_presence(&mut self, expect_null: bool) -> CheckResult<()> {
        let inverted = self.state.take_inversion();
        if self.state.is_disabled() {
            return Ok(());
        }
        let negated = inverted != !expect_null;
        let is_null = self.value.is_none();
        if is_null != negated {
            return Ok(());
        }
        let args = [self.state.name().to_owned()];
        Err(self
            .ctx
            .validator()
            .failures()
            .build(FailureKind::Null, negated, &args, None))
    }

    fn null_violation(&self, inverted: bool) -> Failure {
        let args = [self.state.name().to_owned()];
        self.ctx
            .validator()
            .failures()
            .build(FailureKind::NotNull, inverted, &args, None)
    }

    /// Derive a check for a property of the bound value, named
    /// `"the <property> of <name>"`.
    ///
    /// A null parent fails as any predicate would, unless null is allowed, in which case the
    /// derived check is disabled and every predicate on it passes.
    pub fn derive<C, F>(self, property: &str, extract: F) -> CheckResult<C>
    where
        C: Fluent<'c>,
        F: FnOnce(&T) -> C::Subject,
    {
        if self.state.is_disabled() {
            return Ok(self.disabled_child());
        }
        let Some(value) = self.value.as_ref() else {
            if self.state.is_null_allowed() {
                return Ok(self.disabled_child());
            }
            return Err(self.null_violation(self.state.is_inverted()));
        };

        let mut child: C = self.ctx.bind(Some(extract(value)));
        child
            .check_mut()
            .state
            .write_name(format_args!("the {property} of {}", self.state.name()));
        Ok(child)
    }

    fn disabled_child<C: Fluent<'c>>(&self) -> C {
        let mut child: C = self.ctx.bind(None);
        child.check_mut().state.disable();
        child
    }
}

impl<T: Debug> Debug for Check<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Check")
            .field("value", &self.value)
            .field("state", &*self.state)
            .field("pooled", &self.state.is_pooled())
            .finish()
    }
}

/// Fluent surface shared by every check variant.
///
/// Modifiers return `Self`; predicates return `CheckResult<Self>` so chains read
/// `ctx.text(s).named("greeting").is_not_empty()?.has_length_between(1, 64)?`.
pub trait Fluent<'c>: Sized {
    /// The bound value type.
    type Subject;

    /// Pool slot used by this check type.
    const VARIANT: Variant;

    fn from_check(check: Check<'c, Self::Subject>) -> Self;

    fn check(&self) -> &Check<'c, Self::Subject>;

    fn check_mut(&mut self) -> &mut Check<'c, Self::Subject>;

    fn into_check(self) -> Check<'c, Self::Subject>;

    fn value<'a>(&'a self) -> Option<&'a Self::Subject>
    where
        'c: 'a,
    {
        self.check().value()
    }

    /// Name the value in failure messages.
    fn named(mut self, name: &str) -> Self {
        self.check_mut().set_name(name);
        self
    }

    /// Let every predicate except the null checks pass on a null value.
    fn allow_null(mut self) -> Self {
        self.check_mut().allow_null();
        self
    }

    /// Negate the next predicate only. Consecutive calls toggle.
    fn not(mut self) -> Self {
        self.check_mut().negate();
        self
    }

    fn is_null(mut self) -> CheckResult<Self> {
        self.check_mut().evaluate_presence(true)?;
        Ok(self)
    }

    fn is_not_null(mut self) -> CheckResult<Self> {
        self.check_mut().evaluate_presence(false)?;
        Ok(self)
    }

    fn is_equal_to<U>(mut self, expected: U) -> CheckResult<Self>
    where
        Self::Subject: PartialEq<U> + Debug,
        U: Debug,
    {
        self.check_mut().evaluate(
            FailureKind::Equal,
            |v| *v == expected,
            |name, v| vec![name.to_owned(), format!("{expected:?}"), format!("{v:?}")],
        )?;
        Ok(self)
    }

    fn is_one_of<U>(mut self, candidates: &[U]) -> CheckResult<Self>
    where
        Self::Subject: PartialEq<U> + Debug,
        U: Debug,
    {
        self.check_mut().evaluate(
            FailureKind::OneOf,
            |v| candidates.iter().any(|c| *v == *c),
            |name, v| vec![name.to_owned(), format!("{candidates:?}"), format!("{v:?}")],
        )?;
        Ok(self)
    }

    /// Check an arbitrary condition; `description` completes "must satisfy ...".
    fn satisfies<P>(mut self, description: &str, predicate: P) -> CheckResult<Self>
    where
        Self::Subject: Debug,
        P: FnOnce(&Self::Subject) -> bool,
    {
        self.check_mut().evaluate(
            FailureKind::Satisfies,
            predicate,
            |name, v| vec![name.to_owned(), description.to_owned(), format!("{v:?}")],
        )?;
        Ok(self)
    }
}
