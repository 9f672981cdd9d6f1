// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content-type registration against the host's global content-type registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Built-in item features a content type can opt into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ContentFeature {
    Title,
    Editor,
    Thumbnail,
    Revisions,
}

/// Declaration of a structured content type.
///
/// Registration is a pure declaration: the host owns storage, querying,
/// admin screens, and URL routing for items of this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeSpec {
    /// Fixed machine name (e.g. `dvc_testimonial`).
    pub name: String,
    /// Human label, singular.
    pub singular_label: String,
    /// Human label, plural.
    pub plural_label: String,
    /// Publicly visible on the front of the site.
    pub public: bool,
    /// Queryable through the host's content query engine.
    pub queryable: bool,
    /// Gets its own archive/listing page.
    pub has_archive: bool,
    /// URL path segment for item permalinks.
    pub slug: String,
    /// Item features this type supports.
    pub supports: Vec<ContentFeature>,
    /// Exposed to the host's structured-content editing API.
    pub show_in_rest: bool,
    /// Admin menu position hint.
    pub menu_position: Option<u8>,
    /// Admin menu icon identifier.
    pub menu_icon: Option<String>,
    /// Extra admin labels keyed by slot (e.g. `featured_image`), replacing
    /// the host's generic strings for this type. Slots not listed here keep
    /// the host defaults.
    pub labels: BTreeMap<String, String>,
}

/// Mutating access to the host's content-type registry and URL router.
pub trait ContentTypeRegistry {
    /// Register a content type. Idempotent: registering the same spec on
    /// every initialization cycle is safe. Host-side failures are not
    /// surfaced to the plugin.
    fn register_content_type(&mut self, spec: &ContentTypeSpec);

    /// Force regeneration of the host's URL-routing table. Required after
    /// (de)activation so new or stale URL patterns are picked up or purged.
    fn flush_rewrite_rules(&mut self);
}
