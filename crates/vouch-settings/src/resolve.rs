use crate::model::{CONFIG_SCHEMA_ID, VouchConfigV1};
use anyhow::Context;
use vouch_domain::EffectiveSettings;
use vouch_domain::catalog::compile_kind;
use vouch_types::FailureKind;

/// Programmatic settings; they win over the config source.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub default_name: Option<String>,
    pub clean_stack_trace: Option<bool>,
    /// Extra crate prefixes treated as library frames, e.g. an application's own
    /// validation helpers.
    pub library_prefixes: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveSettings,
}

pub fn resolve_config(cfg: VouchConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref() {
        anyhow::ensure!(
            schema == CONFIG_SCHEMA_ID,
            "unsupported config schema: {schema} (expected {CONFIG_SCHEMA_ID})"
        );
    }

    let mut effective = EffectiveSettings::default();

    if let Some(name) = overrides.default_name.or(cfg.default_name) {
        anyhow::ensure!(!name.trim().is_empty(), "default_name must not be blank");
        effective.default_name = name;
    }

    if let Some(clean) = overrides.clean_stack_trace.or(cfg.clean_stack_trace) {
        effective.clean_provenance = clean;
    }

    for prefix in overrides.library_prefixes {
        if !effective.library_prefixes.contains(&prefix) {
            effective.library_prefixes.push(prefix);
        }
    }

    // per-kind templates
    for (id, message) in cfg.messages {
        let Some(kind) = FailureKind::from_id(&id) else {
            tracing::warn!(kind = %id, "ignoring format for unknown failure kind");
            continue;
        };
        let Some(format) = message.format else {
            continue;
        };
        compile_kind(kind, &format).with_context(|| format!("invalid format for {id}"))?;
        effective.templates.insert(kind, format);
    }

    Ok(ResolvedConfig { effective })
}
