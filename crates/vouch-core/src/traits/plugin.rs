// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The plugin trait hosts drive through the typed hook registry.

use std::collections::HashMap;

use crate::traits::Host;
use crate::types::ContentId;

/// A validated save submission, in place of ambient request superglobals.
///
/// `fields` maps submitted form-field names to raw values; a name absent
/// from the map means the field was not part of the submission at all,
/// which save handlers treat differently from an empty value.
#[derive(Debug, Clone, Default)]
pub struct SaveRequest {
    /// The submitted forgery-protection token, if any.
    pub nonce: Option<String>,
    /// Host-defined signal that this save is part of an automatic
    /// draft-saving cycle.
    pub is_autosave: bool,
    /// Submitted form fields by name, unsanitized.
    pub fields: HashMap<String, String>,
}

impl SaveRequest {
    /// Raw value of a submitted field, or `None` when not submitted.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Add a submitted field (builder-style, used heavily in tests).
    #[must_use]
    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }

    /// Set the forgery-protection token (builder-style).
    #[must_use]
    pub fn with_nonce(mut self, nonce: &str) -> Self {
        self.nonce = Some(nonce.to_string());
        self
    }
}

/// A content-management plugin driven by host lifecycle events.
///
/// Handlers return nothing: per the plugin model, validation rejections are
/// absorbed as silent no-ops and host registry failures are not surfaced.
pub trait CmsPlugin: Send + Sync {
    /// Unique plugin name.
    fn name(&self) -> &'static str;

    /// One-line description for registry listings.
    fn description(&self) -> &'static str {
        ""
    }

    /// Called on every host initialization cycle. Must be idempotent.
    fn on_init(&self, host: &mut dyn Host);

    /// Called once when the plugin is installed/activated.
    fn on_activate(&self, host: &mut dyn Host) {
        self.on_init(host);
    }

    /// Called once when the plugin is removed/deactivated.
    fn on_deactivate(&self, _host: &mut dyn Host) {}

    /// Content type whose saves this plugin handles, if any.
    fn save_content_type(&self) -> Option<&'static str> {
        None
    }

    /// Handle a save of an item of [`save_content_type`](Self::save_content_type).
    fn on_save(&self, _host: &mut dyn Host, _id: ContentId, _request: &SaveRequest) {}

    /// Shortcode names this plugin expands.
    fn shortcodes(&self) -> &'static [&'static str] {
        &[]
    }

    /// Expand a shortcode occurrence into an HTML fragment.
    ///
    /// Returns `None` when `name` is not one of this plugin's shortcodes.
    /// Must be idempotent and side-effect free: one body may contain many
    /// occurrences with independent attribute sets.
    fn handle_shortcode(
        &self,
        _host: &dyn Host,
        _name: &str,
        _attrs: &HashMap<String, String>,
    ) -> Option<String> {
        None
    }
}
