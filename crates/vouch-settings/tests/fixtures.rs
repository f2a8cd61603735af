//! Resolve every config fixture under `tests/fixtures/` and compare against its
//! `expected.json`: either the effective settings or the top-level error message.

use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;
use vouch_settings::{Overrides, parse_config_toml, resolve_config};
use vouch_types::FailureKind;

/// Get the path to the test fixtures directory (repo root / tests / fixtures).
fn fixtures_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // crates/vouch-settings -> crates -> repo root
    manifest_dir
        .parent()
        .expect("vouch-settings should have parent (crates)")
        .parent()
        .expect("crates should have parent (repo root)")
        .join("tests")
        .join("fixtures")
}

fn load(name: &str) -> (String, Value) {
    let dir = fixtures_dir().join(name);
    let config = std::fs::read_to_string(dir.join("vouch.toml")).expect("should read vouch.toml");
    let expected = std::fs::read_to_string(dir.join("expected.json"))
        .expect("should read expected.json");
    let expected: Value = serde_json::from_str(&expected).expect("should parse expected.json");
    (config, expected)
}

fn check_fixture(name: &str) {
    let (config, expected) = load(name);
    let result = parse_config_toml(&config).and_then(|cfg| resolve_config(cfg, Overrides::default()));

    if let Some(error) = expected.get("error").and_then(Value::as_str) {
        let err = result.expect_err("fixture should fail to resolve");
        assert_eq!(err.to_string(), error, "fixture {name}");
        return;
    }

    let effective = result.expect("fixture should resolve").effective;
    assert_eq!(
        effective.default_name,
        expected["default_name"].as_str().expect("default_name"),
        "fixture {name}"
    );
    assert_eq!(
        effective.clean_provenance,
        expected["clean_stack_trace"].as_bool().expect("clean_stack_trace"),
        "fixture {name}"
    );

    let templates: BTreeMap<&str, &str> = effective
        .templates
        .iter()
        .map(|(kind, format)| (kind.id(), format.as_str()))
        .collect();
    let expected_templates: BTreeMap<&str, &str> = expected["templates"]
        .as_object()
        .expect("templates")
        .iter()
        .map(|(id, format)| (id.as_str(), format.as_str().expect("format string")))
        .collect();
    assert_eq!(templates, expected_templates, "fixture {name}");
}

#[test]
fn defaults() {
    check_fixture("defaults");
}

#[test]
fn custom_name() {
    check_fixture("custom_name");
}

#[test]
fn message_override() {
    check_fixture("message_override");
}

#[test]
fn unknown_kind() {
    check_fixture("unknown_kind");
}

#[test]
fn malformed_format() {
    check_fixture("malformed_format");
}

#[test]
fn wrong_arity() {
    check_fixture("wrong_arity");
}

#[test]
fn unsupported_schema() {
    check_fixture("unsupported_schema");
}

#[test]
fn overridden_templates_keep_their_kind() {
    let (config, _) = load("message_override");
    let effective = resolve_config(
        parse_config_toml(&config).expect("parse"),
        Overrides::default(),
    )
    .expect("resolve")
    .effective;
    assert_eq!(
        effective.template(FailureKind::NotEmpty),
        "{} is [+not +]allowed to be empty"
    );
}
