// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./vouch.toml` > `~/.config/vouch/vouch.toml` >
//! `/etc/vouch/vouch.toml` with environment variable overrides via `VOUCH_`
//! prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::VouchConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/vouch/vouch.toml` (system-wide)
/// 3. `~/.config/vouch/vouch.toml` (user XDG config)
/// 4. `./vouch.toml` (local directory)
/// 5. `VOUCH_*` environment variables
pub fn load_config() -> Result<VouchConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VouchConfig::default()))
        .merge(Toml::file("/etc/vouch/vouch.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("vouch/vouch.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("vouch.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<VouchConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VouchConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<VouchConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VouchConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `VOUCH_DISPLAY_DEFAULT_COUNT` must map
/// to `display.default_count`, not `display.default.count`.
fn env_provider() -> Env {
    Env::prefixed("VOUCH_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("display_", "display.", 1)
            .replacen("log_", "log.", 1);
        mapped.into()
    })
}
