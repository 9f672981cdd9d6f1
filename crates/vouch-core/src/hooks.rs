// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed hook registry for dispatching host lifecycle events to plugins.
//!
//! Replaces ambient global hook mutation with an explicit registration
//! table constructed at process startup: the host builds a `PluginRegistry`,
//! registers plugins, and drives init/activate/save/shortcode dispatch
//! through it.

use std::collections::HashMap;

use crate::error::VouchError;
use crate::traits::{CmsPlugin, Host, SaveRequest};
use crate::types::ContentId;

/// Status of a plugin in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginStatus {
    /// Plugin is active and receives dispatched events.
    Enabled,
    /// Plugin is registered but skipped during dispatch.
    Disabled,
}

impl std::fmt::Display for PluginStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginStatus::Enabled => write!(f, "enabled"),
            PluginStatus::Disabled => write!(f, "disabled"),
        }
    }
}

/// A single entry in the plugin registry.
pub struct PluginEntry {
    /// The plugin implementation.
    pub plugin: Box<dyn CmsPlugin>,
    /// Current status of the plugin.
    pub status: PluginStatus,
}

impl std::fmt::Debug for PluginEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginEntry")
            .field("name", &self.plugin.name())
            .field("status", &self.status)
            .finish()
    }
}

/// Registry of plugins, dispatching host events in registration order.
#[derive(Default)]
pub struct PluginRegistry {
    entries: Vec<PluginEntry>,
}

impl PluginRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin with default status `Enabled`.
    pub fn register(&mut self, plugin: Box<dyn CmsPlugin>) {
        self.register_with_status(plugin, PluginStatus::Enabled);
    }

    /// Register a plugin with an explicit status.
    pub fn register_with_status(&mut self, plugin: Box<dyn CmsPlugin>, status: PluginStatus) {
        tracing::debug!(plugin = plugin.name(), %status, "registering plugin");
        self.entries.push(PluginEntry { plugin, status });
    }

    /// Get a plugin entry by name.
    pub fn get(&self, name: &str) -> Option<&PluginEntry> {
        self.entries.iter().find(|e| e.plugin.name() == name)
    }

    /// All entries, enabled or not, sorted by plugin name.
    pub fn list_all(&self) -> Vec<&PluginEntry> {
        let mut entries: Vec<&PluginEntry> = self.entries.iter().collect();
        entries.sort_by_key(|e| e.plugin.name());
        entries
    }

    /// Toggle a plugin's enabled status.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> Result<(), VouchError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.plugin.name() == name)
            .ok_or_else(|| VouchError::PluginNotFound {
                name: name.to_string(),
            })?;
        entry.status = if enabled {
            PluginStatus::Enabled
        } else {
            PluginStatus::Disabled
        };
        Ok(())
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn enabled(&self) -> impl Iterator<Item = &dyn CmsPlugin> {
        self.entries
            .iter()
            .filter(|e| e.status == PluginStatus::Enabled)
            .map(|e| e.plugin.as_ref())
    }

    /// Dispatch host initialization to every enabled plugin.
    pub fn dispatch_init(&self, host: &mut dyn Host) {
        for plugin in self.enabled() {
            tracing::debug!(plugin = plugin.name(), "dispatching init");
            plugin.on_init(host);
        }
    }

    /// Dispatch activation to every enabled plugin.
    pub fn dispatch_activate(&self, host: &mut dyn Host) {
        for plugin in self.enabled() {
            tracing::info!(plugin = plugin.name(), "activating plugin");
            plugin.on_activate(host);
        }
    }

    /// Dispatch deactivation to every enabled plugin.
    pub fn dispatch_deactivate(&self, host: &mut dyn Host) {
        for plugin in self.enabled() {
            tracing::info!(plugin = plugin.name(), "deactivating plugin");
            plugin.on_deactivate(host);
        }
    }

    /// Dispatch a content-item save to the plugins claiming its content type.
    ///
    /// The item's content type is read from the host; saves of items the
    /// host no longer knows about are dropped.
    pub fn dispatch_save(&self, host: &mut dyn Host, id: ContentId, request: &SaveRequest) {
        let Some(item) = host.get(id) else {
            tracing::debug!(%id, "save dispatched for unknown item, ignoring");
            return;
        };
        for plugin in self.enabled() {
            if plugin.save_content_type() == Some(item.content_type.as_str()) {
                plugin.on_save(host, id, request);
            }
        }
    }

    /// Expand a shortcode occurrence through the first enabled plugin
    /// claiming its name.
    pub fn expand_shortcode(
        &self,
        host: &dyn Host,
        name: &str,
        attrs: &HashMap<String, String>,
    ) -> Result<String, VouchError> {
        self.enabled()
            .filter(|p| p.shortcodes().contains(&name))
            .find_map(|p| p.handle_shortcode(host, name, attrs))
            .ok_or_else(|| VouchError::UnknownShortcode {
                name: name.to_string(),
            })
    }

    /// All shortcode names claimed by enabled plugins.
    pub fn shortcode_names(&self) -> Vec<&'static str> {
        self.enabled().flat_map(|p| p.shortcodes()).copied().collect()
    }
}
