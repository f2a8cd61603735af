use anyhow::Context;
use std::sync::Arc;
use vouch_domain::Validator;
use vouch_settings::{Overrides, VouchConfigV1};

/// Build a validator from `vouch.toml` contents. Empty text means built-in defaults.
pub fn load_validator(config_text: &str, overrides: Overrides) -> anyhow::Result<Arc<Validator>> {
    let cfg = if config_text.trim().is_empty() {
        VouchConfigV1::default()
    } else {
        vouch_settings::parse_config_toml(config_text).context("parse config")?
    };
    build(cfg, overrides)
}

/// Build a validator from a flat key/value source (`<KIND>.format`, `default_name`,
/// `clean_stack_trace`).
pub fn load_validator_from_pairs<I, K, V>(
    pairs: I,
    overrides: Overrides,
) -> anyhow::Result<Arc<Validator>>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let cfg = vouch_settings::config_from_pairs(pairs).context("read config pairs")?;
    build(cfg, overrides)
}

fn build(cfg: VouchConfigV1, overrides: Overrides) -> anyhow::Result<Arc<Validator>> {
    let resolved = vouch_settings::resolve_config(cfg, overrides).context("resolve config")?;
    let validator = Validator::new(resolved.effective).context("compile message catalog")?;
    Ok(Arc::new(validator))
}
