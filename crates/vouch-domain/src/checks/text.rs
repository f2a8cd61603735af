use super::{Measure, Measured, NumberCheck};
use crate::check::{Check, Fluent};
use crate::failure::{Cause, CheckResult};
use crate::pool::Variant;
use regex::Regex;
use url::Url;
use vouch_types::FailureKind;

/// Check over a string slice. Length is counted in characters.
#[derive(Debug)]
pub struct TextCheck<'c, 'v>(Check<'c, &'v str>);

impl<'c, 'v> Fluent<'c> for TextCheck<'c, 'v> {
    type Subject = &'v str;
    const VARIANT: Variant = Variant::Text;

    fn from_check(check: Check<'c, &'v str>) -> Self {
        Self(check)
    }

    fn check(&self) -> &Check<'c, &'v str> {
        &self.0
    }

    fn check_mut(&mut self) -> &mut Check<'c, &'v str> {
        &mut self.0
    }

    fn into_check(self) -> Check<'c, &'v str> {
        self.0
    }
}

impl<'c, 'v> Measured<'c> for TextCheck<'c, 'v> {
    const MEASURE: Measure = Measure::Length;

    fn measure(subject: &&'v str) -> usize {
        subject.chars().count()
    }
}

impl<'c> TextCheck<'c, '_> {
    pub fn has_length(self, expected: usize) -> CheckResult<Self> {
        self.has_size(expected)
    }

    pub fn has_length_between(self, min: usize, max: usize) -> CheckResult<Self> {
        self.has_size_between(min, max)
    }

    /// Derive a check on the character count, named `"the length of <name>"`.
    pub fn length(self) -> CheckResult<NumberCheck<'c, usize>> {
        self.size()
    }

    /// Passes when the text has at least one non-whitespace character.
    pub fn is_not_blank(mut self) -> CheckResult<Self> {
        self.0.evaluate(
            FailureKind::NotBlank,
            |v| !v.trim().is_empty(),
            |name, _| vec![name.to_owned()],
        )?;
        Ok(self)
    }

    pub fn is_blank(mut self) -> CheckResult<Self> {
        self.0.negate();
        self.is_not_blank()
    }

    pub fn starts_with(mut self, prefix: &str) -> CheckResult<Self> {
        self.0.evaluate(
            FailureKind::StartsWith,
            |v| v.starts_with(prefix),
            |name, v| vec![name.to_owned(), format!("{prefix:?}"), format!("{v:?}")],
        )?;
        Ok(self)
    }

    pub fn ends_with(mut self, suffix: &str) -> CheckResult<Self> {
        self.0.evaluate(
            FailureKind::EndsWith,
            |v| v.ends_with(suffix),
            |name, v| vec![name.to_owned(), format!("{suffix:?}"), format!("{v:?}")],
        )?;
        Ok(self)
    }

    pub fn contains(mut self, needle: &str) -> CheckResult<Self> {
        self.0.evaluate(
            FailureKind::Contains,
            |v| v.contains(needle),
            |name, v| vec![name.to_owned(), format!("{needle:?}"), format!("{v:?}")],
        )?;
        Ok(self)
    }

    /// Passes when `pattern` matches anywhere in the text. Anchor the pattern with `^...$`
    /// to require a whole-text match.
    pub fn matches(mut self, pattern: &Regex) -> CheckResult<Self> {
        self.0.evaluate(
            FailureKind::Matches,
            |v| pattern.is_match(v),
            |name, v| {
                vec![
                    name.to_owned(),
                    format!("/{}/", pattern.as_str()),
                    format!("{v:?}"),
                ]
            },
        )?;
        Ok(self)
    }

    /// Passes when the text parses as an absolute URL. The parse error is chained as the
    /// failure's cause.
    pub fn is_url(mut self) -> CheckResult<Self> {
        self.0.evaluate_with_cause(
            FailureKind::Url,
            |v| match Url::parse(v) {
                Ok(_) => (true, None),
                Err(err) => (false, Some(Cause::from(err))),
            },
            |name, v| vec![name.to_owned(), format!("{v:?}")],
        )?;
        Ok(self)
    }

    /// Passes when the text is an absolute URL with the given scheme (ASCII
    /// case-insensitive). A parse error is chained as the failure's cause.
    pub fn has_scheme(mut self, scheme: &str) -> CheckResult<Self> {
        self.0.evaluate_with_cause(
            FailureKind::Scheme,
            |v| match Url::parse(v) {
                Ok(url) => (url.scheme().eq_ignore_ascii_case(scheme), None),
                Err(err) => (false, Some(Cause::from(err))),
            },
            |name, v| vec![name.to_owned(), scheme.to_owned(), format!("{v:?}")],
        )?;
        Ok(self)
    }
}
