use std::collections::BTreeMap;
use vouch_types::{FailureKind, default_template};

/// Display name used when a check is never `named`.
pub const DEFAULT_NAME: &str = "the argument";

/// Crate paths whose frames are trimmed from the top of a failure trace.
pub const LIBRARY_PREFIXES: &[&str] = &[
    "vouch",
    "vouch_domain",
    "vouch_format",
    "vouch_types",
    "vouch_settings",
];

/// Resolved settings consumed by [`crate::Validator`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveSettings {
    pub default_name: String,
    pub clean_provenance: bool,
    pub library_prefixes: Vec<String>,
    /// Raw template overrides. Kinds without an entry use the built-in template.
    pub templates: BTreeMap<FailureKind, String>,
}

impl Default for EffectiveSettings {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_NAME.to_string(),
            clean_provenance: true,
            library_prefixes: LIBRARY_PREFIXES.iter().map(|p| p.to_string()).collect(),
            templates: BTreeMap::new(),
        }
    }
}

impl EffectiveSettings {
    /// The raw template in effect for `kind`.
    pub fn template(&self, kind: FailureKind) -> &str {
        self.templates
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| default_template(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_builtin() {
        let mut settings = EffectiveSettings::default();
        assert_eq!(
            settings.template(FailureKind::NotEmpty),
            default_template(FailureKind::NotEmpty)
        );

        settings
            .templates
            .insert(FailureKind::NotEmpty, "{} is [+not +]allowed to be empty".to_string());
        assert_eq!(
            settings.template(FailureKind::NotEmpty),
            "{} is [+not +]allowed to be empty"
        );
        assert_eq!(
            settings.template(FailureKind::Null),
            default_template(FailureKind::Null)
        );
    }
}
