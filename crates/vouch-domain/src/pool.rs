//! Per-execution-context reuse of check state.
//!
//! A [`CheckContext`] owns one lazily created [`CheckState`] per check [`Variant`]. Binding a
//! value leases the variant's slot, resets it and hands it to a fresh check object; the slot
//! returns to the pool when the check is dropped. The context is `!Sync`, so a pooled
//! state is never visible to two threads. Share the [`Validator`] across threads and give
//! each thread its own context.

use crate::check::{Check, Fluent};
use crate::checks::{
    ArrayCheck, FloatCheck, IntCheck, MapCheck, Mapping, NumberCheck, ObjectCheck, SeqCheck,
    TextCheck,
};
use crate::state::{CheckState, Slot};
use crate::validator::Validator;
use std::cell::{RefCell, RefMut};
use std::fmt;
use std::sync::Arc;

/// Identity of a check variant; one pool slot per variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Object,
    Text,
    Sequence,
    Array,
    Map,
    Number,
    Integer,
    Float,
}

impl Variant {
    pub const ALL: [Variant; 8] = [
        Variant::Object,
        Variant::Text,
        Variant::Sequence,
        Variant::Array,
        Variant::Map,
        Variant::Number,
        Variant::Integer,
        Variant::Float,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Object => "object",
            Variant::Text => "text",
            Variant::Sequence => "sequence",
            Variant::Array => "array",
            Variant::Map => "map",
            Variant::Number => "number",
            Variant::Integer => "integer",
            Variant::Float => "float",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct CheckContext {
    validator: Arc<Validator>,
    slots: [RefCell<Option<CheckState>>; Variant::COUNT],
}

impl CheckContext {
    pub fn new(validator: Arc<Validator>) -> Self {
        Self {
            validator,
            slots: std::array::from_fn(|_| RefCell::new(None)),
        }
    }

    /// A context over [`Validator::shared_default`].
    pub fn with_defaults() -> Self {
        Self::new(Validator::shared_default())
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Number of variants whose pooled state has been created so far.
    pub fn pooled(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.try_borrow().map_or(true, |state| state.is_some()))
            .count()
    }

    pub(crate) fn lease(&self, variant: Variant) -> Slot<'_> {
        match self.slots[variant.index()].try_borrow_mut() {
            Ok(slot) => Slot::Pooled(RefMut::map(slot, |state| {
                state.get_or_insert_with(|| CheckState::new(variant))
            })),
            Err(_) => {
                tracing::trace!(%variant, "pool slot busy, using a detached check state");
                Slot::Detached(CheckState::new(variant))
            }
        }
    }

    /// Bind `value` to a check of type `C`, reusing this context's state for `C`'s variant.
    pub fn bind<'c, C: Fluent<'c>>(&'c self, value: Option<C::Subject>) -> C {
        let slot = self.lease(C::VARIANT);
        C::from_check(Check::bind(self, slot, value))
    }

    /// Bind a present value of any type. Use [`CheckContext::object_opt`] for a nullable one.
    pub fn object<'c, T>(&'c self, value: T) -> ObjectCheck<'c, T> {
        self.bind(Some(value))
    }

    pub fn object_opt<'c, T>(&'c self, value: Option<T>) -> ObjectCheck<'c, T> {
        self.bind(value)
    }

    pub fn text<'c, 'v>(&'c self, value: impl Into<Option<&'v str>>) -> TextCheck<'c, 'v> {
        self.bind(value.into())
    }

    pub fn seq<'c, 'v, T>(&'c self, value: impl Into<Option<&'v [T]>>) -> SeqCheck<'c, 'v, T> {
        self.bind(value.into())
    }

    pub fn array<'c, 'v, T, const N: usize>(
        &'c self,
        value: impl Into<Option<&'v [T; N]>>,
    ) -> ArrayCheck<'c, 'v, T, N> {
        self.bind(value.into())
    }

    pub fn map<'c, 'v, M: Mapping>(&'c self, value: impl Into<Option<&'v M>>) -> MapCheck<'c, 'v, M> {
        self.bind(value.into())
    }

    pub fn number<'c, N>(&'c self, value: N) -> NumberCheck<'c, N> {
        self.bind(Some(value))
    }

    pub fn number_opt<'c, N>(&'c self, value: Option<N>) -> NumberCheck<'c, N> {
        self.bind(value)
    }

    pub fn int<'c>(&'c self, value: impl Into<Option<i64>>) -> IntCheck<'c> {
        self.bind(value.into())
    }

    pub fn float<'c>(&'c self, value: impl Into<Option<f64>>) -> FloatCheck<'c> {
        self.bind(value.into())
    }
}

impl fmt::Debug for CheckContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckContext")
            .field("pooled", &self.pooled())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::Measured;
    use crate::test_support::context;

    #[test]
    fn slots_are_created_lazily_and_reused() {
        let ctx = context();
        assert_eq!(ctx.pooled(), 0);

        for word in ["a", "bb", "ccc"] {
            let check = ctx.text(word);
            assert!(check.check().is_pooled());
        }
        assert_eq!(ctx.pooled(), 1);

        let _ = ctx.int(3);
        assert_eq!(ctx.pooled(), 2);
    }

    #[test]
    fn busy_slot_falls_back_to_detached_state() {
        let ctx = context();
        let outer = ctx.text("outer");
        let inner = ctx.text("inner");
        assert!(outer.check().is_pooled());
        assert!(!inner.check().is_pooled());
        drop(inner);
        drop(outer);

        assert!(ctx.text("again").check().is_pooled());
    }

    #[test]
    fn derived_property_uses_a_different_slot() {
        let ctx = context();
        let size = ctx
            .seq([1, 2, 3].as_slice())
            .named("items")
            .size()
            .expect("items is not null");
        assert!(size.check().is_pooled());
        assert_eq!(size.check().state().name(), "the size of items");
        assert_eq!(size.check().state().variant(), Variant::Number);
    }
}
