use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schema identifier accepted in the `schema` key.
pub const CONFIG_SCHEMA_ID: &str = "vouch.config.v1";

/// `vouch.toml` schema v1.
///
/// ```toml
/// default_name = "the input"
/// clean_stack_trace = true
///
/// [NOT_EMPTY]
/// format = "{} is [+not +]allowed to be empty"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VouchConfigV1 {
    /// Optional schema string for tooling (`vouch.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Display name of values that are never `named`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_name: Option<String>,

    /// Trim the library's own frames from failure traces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clean_stack_trace: Option<bool>,

    /// Map of failure kind ID (e.g. `NOT_EMPTY`) -> message config.
    #[serde(flatten)]
    pub messages: BTreeMap<String, MessageConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MessageConfig {
    /// Dual-polarity template overriding the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}
