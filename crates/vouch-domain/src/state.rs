use crate::pool::Variant;
use std::cell::RefMut;
use std::fmt::{self, Write as _};
use std::ops::{Deref, DerefMut};

/// Modifier state of one check. Reused across binds: `reset` clears it in place and
/// keeps the name buffer's allocation.
#[derive(Clone, Debug)]
pub struct CheckState {
    variant: Variant,
    name: String,
    null_allowed: bool,
    inverted: bool,
    disabled: bool,
}

impl CheckState {
    pub(crate) fn new(variant: Variant) -> Self {
        Self {
            variant,
            name: String::new(),
            null_allowed: false,
            inverted: false,
            disabled: false,
        }
    }

    pub(crate) fn reset(&mut self, default_name: &str) {
        self.name.clear();
        self.name.push_str(default_name);
        self.null_allowed = false;
        self.inverted = false;
        self.disabled = false;
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_null_allowed(&self) -> bool {
        self.null_allowed
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// A disabled check was derived from a null parent that allows null; every predicate
    /// on it passes.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name.clear();
        self.name.push_str(name);
    }

    pub(crate) fn write_name(&mut self, args: fmt::Arguments<'_>) {
        self.name.clear();
        // Writing into a String cannot fail.
        let _ = self.name.write_fmt(args);
    }

    pub(crate) fn allow_null(&mut self) {
        self.null_allowed = true;
    }

    pub(crate) fn toggle_inversion(&mut self) {
        self.inverted = !self.inverted;
    }

    /// Read the inversion flag and clear it.
    pub(crate) fn take_inversion(&mut self) -> bool {
        std::mem::take(&mut self.inverted)
    }

    pub(crate) fn disable(&mut self) {
        self.disabled = true;
    }
}

/// Where a check's state lives: leased from its context's pool, or owned outright when
/// the pooled slot for the variant is already in use.
#[derive(Debug)]
pub(crate) enum Slot<'c> {
    Pooled(RefMut<'c, CheckState>),
    Detached(CheckState),
}

impl Slot<'_> {
    pub(crate) fn is_pooled(&self) -> bool {
        matches!(self, Slot::Pooled(_))
    }
}

impl Deref for Slot<'_> {
    type Target = CheckState;

    fn deref(&self) -> &CheckState {
        match self {
            Slot::Pooled(state) => state,
            Slot::Detached(state) => state,
        }
    }
}

impl DerefMut for Slot<'_> {
    fn deref_mut(&mut self) -> &mut CheckState {
        match self {
            Slot::Pooled(state) => state,
            Slot::Detached(state) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_every_modifier() {
        let mut state = CheckState::new(Variant::Text);
        state.set_name("greeting");
        state.allow_null();
        state.toggle_inversion();
        state.disable();

        state.reset("the argument");

        assert_eq!(state.name(), "the argument");
        assert!(!state.is_null_allowed());
        assert!(!state.is_inverted());
        assert!(!state.is_disabled());
        assert_eq!(state.variant(), Variant::Text);
    }

    #[test]
    fn inversion_toggles_and_is_consumed_once() {
        let mut state = CheckState::new(Variant::Integer);
        state.toggle_inversion();
        state.toggle_inversion();
        assert!(!state.is_inverted());

        state.toggle_inversion();
        assert!(state.take_inversion());
        assert!(!state.take_inversion());
    }

    #[test]
    fn write_name_replaces_the_buffer() {
        let mut state = CheckState::new(Variant::Number);
        state.set_name("old");
        state.write_name(format_args!("the {} of {}", "size", "items"));
        assert_eq!(state.name(), "the size of items");
    }
}
