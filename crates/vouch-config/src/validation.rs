// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! The display directive itself silently falls back to defaults for bad
//! attribute values, but a typo in the site-wide config file is a mistake
//! the operator should hear about at startup, so these are strict.

use vouch_core::sanitize::sanitize_key;
use vouch_core::types::SortKey;

use crate::diagnostic::ConfigError;
use crate::model::VouchConfig;

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &VouchConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.display.default_count < -1 {
        errors.push(ConfigError::Validation {
            message: format!(
                "display.default_count must be -1 (unbounded) or non-negative, got {}",
                config.display.default_count
            ),
        });
    }

    let orderby = sanitize_key(&config.display.default_orderby);
    if orderby.parse::<SortKey>().is_err() {
        errors.push(ConfigError::Validation {
            message: format!(
                "display.default_orderby `{}` is not one of: date, title, rand, menu_order, modified",
                config.display.default_orderby
            ),
        });
    }

    let order = config.display.default_order.to_ascii_lowercase();
    if order != "asc" && order != "desc" {
        errors.push(ConfigError::Validation {
            message: format!(
                "display.default_order must be `asc` or `desc`, got `{}`",
                config.display.default_order
            ),
        });
    }

    if !VALID_LOG_LEVELS.contains(&config.log.level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level must be one of {}, got `{}`",
                VALID_LOG_LEVELS.join(", "),
                config.log.level
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VouchConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&VouchConfig::default()).is_ok());
    }

    #[test]
    fn negative_count_below_sentinel_is_rejected() {
        let mut config = VouchConfig::default();
        config.display.default_count = -2;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("default_count"));
    }

    #[test]
    fn unknown_orderby_is_rejected() {
        let mut config = VouchConfig::default();
        config.display.default_orderby = "meta_value".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].to_string().contains("default_orderby"));
    }

    #[test]
    fn mixed_case_order_is_accepted() {
        let mut config = VouchConfig::default();
        config.display.default_order = "ASC".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let mut config = VouchConfig::default();
        config.log.level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].to_string().contains("log.level"));
    }

    #[test]
    fn errors_are_collected_not_fail_fast() {
        let mut config = VouchConfig::default();
        config.display.default_count = -5;
        config.display.default_order = "up".to_string();
        config.log.level = "loud".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
