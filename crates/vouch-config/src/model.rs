// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Vouch plugin toolkit.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Vouch configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VouchConfig {
    /// Defaults for the testimonial display directive.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Site-wide defaults for the `[testimonials]` display directive.
///
/// A shortcode occurrence overrides any of these per invocation; these are
/// the values used when an attribute is omitted.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Default maximum number of testimonials to show. `-1` means unbounded.
    #[serde(default = "default_count")]
    pub default_count: i64,

    /// Default sort key (date, title, rand, menu_order, modified).
    #[serde(default = "default_orderby")]
    pub default_orderby: String,

    /// Default sort direction (asc or desc).
    #[serde(default = "default_order")]
    pub default_order: String,

    /// Message shown when the query returns no published testimonials.
    #[serde(default = "default_no_results_message")]
    pub no_results_message: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_count: default_count(),
            default_orderby: default_orderby(),
            default_order: default_order(),
            no_results_message: default_no_results_message(),
        }
    }
}

fn default_count() -> i64 {
    -1
}

fn default_orderby() -> String {
    "date".to_string()
}

fn default_order() -> String {
    "desc".to_string()
}

fn default_no_results_message() -> String {
    "No testimonials found.".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
