// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Vouch plugin toolkit.

use thiserror::Error;

/// The primary error type used across Vouch traits and core operations.
///
/// Editor-side validation rejections (bad nonce, autosave, missing
/// capability) are deliberately *not* errors: the save handlers absorb them
/// as silent no-ops so that a hostile or malformed submission never reaches
/// the host's error surface.
#[derive(Debug, Error)]
pub enum VouchError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Requested plugin was not found in the registry.
    #[error("plugin not found: {name}")]
    PluginNotFound { name: String },

    /// A shortcode name no registered plugin claims.
    #[error("unknown shortcode: [{name}]")]
    UnknownShortcode { name: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
