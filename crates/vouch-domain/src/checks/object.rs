use crate::check::{Check, Fluent};
use crate::failure::CheckResult;
use crate::pool::Variant;

/// Check over an arbitrary value.
#[derive(Debug)]
pub struct ObjectCheck<'c, T>(Check<'c, T>);

impl<'c, T> Fluent<'c> for ObjectCheck<'c, T> {
    type Subject = T;
    const VARIANT: Variant = Variant::Object;

    fn from_check(check: Check<'c, T>) -> Self {
        Self(check)
    }

    fn check(&self) -> &Check<'c, T> {
        &self.0
    }

    fn check_mut(&mut self) -> &mut Check<'c, T> {
        &mut self.0
    }

    fn into_check(self) -> Check<'c, T> {
        self.0
    }
}

impl<'c, T> ObjectCheck<'c, T> {
    /// Derive a check on a projection of the value, named `"the <name> of <parent>"`.
    ///
    /// The derived check shares the object slot with its parent, so it runs on a detached
    /// state. Use [`ObjectCheck::property_as`] to pick a shape-specific check instead.
    pub fn property<U, F>(self, name: &str, extract: F) -> CheckResult<ObjectCheck<'c, U>>
    where
        F: FnOnce(&T) -> U,
    {
        self.0.derive(name, extract)
    }

    /// Derive a check of any variant on a projection of the value.
    ///
    /// ```ignore
    /// ctx.object(&user)
    ///     .named("user")
    ///     .property_as::<TextCheck<'_, '_>, _>("email", |u| u.email.as_str())?
    ///     .is_not_blank()?;
    /// ```
    pub fn property_as<C, F>(self, name: &str, extract: F) -> CheckResult<C>
    where
        C: Fluent<'c>,
        F: FnOnce(&T) -> C::Subject,
    {
        self.0.derive(name, extract)
    }
}
