//! Config parsing and settings resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as
//! strings or key/value pairs.

#![forbid(unsafe_code)]

mod model;
mod pairs;
mod resolve;

pub use model::{CONFIG_SCHEMA_ID, MessageConfig, VouchConfigV1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `vouch.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<VouchConfigV1> {
    let cfg: VouchConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Build a config from a flat key/value source such as a properties file or the
/// environment. Keys are `default_name`, `clean_stack_trace` and `<KIND>.format`.
pub fn config_from_pairs<I, K, V>(pairs: I) -> anyhow::Result<VouchConfigV1>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs::config_from_pairs(pairs)
}

/// Resolve the settings used by the validator (defaults + config + overrides).
pub fn resolve_config(cfg: VouchConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON schema of [`VouchConfigV1`], pretty-printed.
pub fn config_schema_json() -> anyhow::Result<String> {
    let schema = schemars::schema_for!(VouchConfigV1);
    let mut json = serde_json::to_string_pretty(&schema)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_parses_to_defaults() {
        let cfg = parse_config_toml("").expect("parse");
        assert_eq!(cfg, VouchConfigV1::default());
    }

    #[test]
    fn schema_describes_scalar_keys() {
        let json = config_schema_json().expect("schema");
        let schema: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        let properties = &schema["properties"];
        assert!(properties.get("default_name").is_some());
        assert!(properties.get("clean_stack_trace").is_some());
        assert!(json.ends_with('\n'));
    }
}
