use crate::model::VouchConfigV1;
use anyhow::Context;

const FORMAT_SUFFIX: &str = ".format";

pub fn config_from_pairs<I, K, V>(pairs: I) -> anyhow::Result<VouchConfigV1>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut cfg = VouchConfigV1::default();
    for (key, value) in pairs {
        let (key, value) = (key.as_ref().trim(), value.as_ref());
        match key {
            "schema" => cfg.schema = Some(value.to_string()),
            "default_name" => cfg.default_name = Some(value.to_string()),
            "clean_stack_trace" => {
                cfg.clean_stack_trace = Some(
                    parse_bool(value.trim()).with_context(|| format!("invalid value for {key}"))?,
                );
            }
            _ => match key.strip_suffix(FORMAT_SUFFIX) {
                Some(kind) if !kind.is_empty() => {
                    cfg.messages.entry(kind.to_string()).or_default().format =
                        Some(value.to_string());
                }
                _ => tracing::warn!(key, "ignoring unknown configuration key"),
            },
        }
    }
    Ok(cfg)
}

fn parse_bool(v: &str) -> anyhow::Result<bool> {
    match v {
        "true" => Ok(true),
        "false" => Ok(false),
        other => anyhow::bail!("expected true or false, got {other:?}"),
    }
}
