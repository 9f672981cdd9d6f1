// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Vouch configuration system.

use vouch_config::diagnostic::ConfigError;
use vouch_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_vouch_config() {
    let toml = r#"
[display]
default_count = 3
default_orderby = "title"
default_order = "asc"
no_results_message = "Nothing to show yet."

[log]
level = "debug"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.display.default_count, 3);
    assert_eq!(config.display.default_orderby, "title");
    assert_eq!(config.display.default_order, "asc");
    assert_eq!(config.display.no_results_message, "Nothing to show yet.");
    assert_eq!(config.log.level, "debug");
}

/// An empty config yields compiled defaults.
#[test]
fn empty_toml_yields_defaults() {
    let config = load_config_from_str("").expect("empty TOML should deserialize");
    assert_eq!(config.display.default_count, -1);
    assert_eq!(config.display.default_orderby, "date");
    assert_eq!(config.display.default_order, "desc");
    assert_eq!(config.display.no_results_message, "No testimonials found.");
    assert_eq!(config.log.level, "info");
}

/// Unknown field in [display] section produces an error.
#[test]
fn unknown_field_in_display_produces_error() {
    let toml = r#"
[display]
defualt_count = 5
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("defualt_count"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Unknown key surfaces as an UnknownKey diagnostic with a suggestion.
#[test]
fn unknown_key_diagnostic_carries_suggestion() {
    let toml = r#"
[display]
defualt_count = 5
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    let unknown = errors
        .iter()
        .find_map(|e| match e {
            ConfigError::UnknownKey { key, suggestion, .. } => Some((key, suggestion)),
            _ => None,
        })
        .expect("expected an UnknownKey diagnostic");
    assert_eq!(unknown.0, "defualt_count");
    assert_eq!(unknown.1.as_deref(), Some("default_count"));
}

/// Semantic validation runs after deserialization.
#[test]
fn invalid_orderby_fails_validation() {
    let toml = r#"
[display]
default_orderby = "meta_value"
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("default_orderby"))));
}

/// A wrong-typed value produces an InvalidType diagnostic.
#[test]
fn wrong_type_produces_invalid_type_error() {
    let toml = r#"
[display]
default_count = "three"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject wrong type");
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigError::InvalidType { .. })));
}
