// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! An in-memory host implementing every Vouch host trait.
//!
//! `MemoryHost` stands in for a real CMS in tests and previews: a content
//! store over a `BTreeMap`, a metadata map, a recording content-type
//! registry, deterministic nonces, and toggleable permissions.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, TimeZone, Utc};
use vouch_core::traits::{
    Capabilities, ContentStore, ContentTypeRegistry, ContentTypeSpec, MetaStore, NonceProvider,
};
use vouch_core::types::{
    ContentId, ContentItem, ContentQuery, ContentStatus, SortKey, SortOrder,
};

/// In-memory mock host.
#[derive(Debug, Default)]
pub struct MemoryHost {
    items: BTreeMap<u64, ContentItem>,
    meta: HashMap<(u64, String), String>,
    /// Every content-type spec registered, in order (duplicates included,
    /// so idempotency can be asserted).
    pub registered_types: Vec<ContentTypeSpec>,
    /// Number of times the routing table was flushed.
    pub flush_count: usize,
    /// When false, every nonce verification fails.
    pub nonces_valid: bool,
    /// When false, the current principal cannot edit anything.
    pub editing_allowed: bool,
    next_id: u64,
}

impl MemoryHost {
    /// A host where nonces verify and editing is allowed.
    pub fn new() -> Self {
        Self {
            nonces_valid: true,
            editing_allowed: true,
            next_id: 1,
            ..Self::default()
        }
    }

    /// Insert a content item, assigning the next identifier.
    pub fn insert_item(&mut self, builder: ItemBuilder) -> ContentId {
        let id = ContentId(self.next_id);
        self.next_id += 1;
        self.items.insert(id.0, builder.build(id));
        id
    }

    /// Directly seed a metadata value, bypassing any plugin save path.
    pub fn seed_meta(&mut self, id: ContentId, key: &str, value: &str) {
        self.meta.insert((id.0, key.to_string()), value.to_string());
    }

    /// Number of stored metadata values for an item.
    pub fn meta_len(&self, id: ContentId) -> usize {
        self.meta.keys().filter(|(item, _)| *item == id.0).count()
    }

    fn sort_items(items: &mut [ContentItem], key: SortKey, order: SortOrder) {
        match key {
            SortKey::Date => items.sort_by_key(|i| i.created_at),
            SortKey::Modified => items.sort_by_key(|i| i.modified_at),
            SortKey::Title => items.sort_by(|a, b| a.title.cmp(&b.title)),
            SortKey::MenuOrder => items.sort_by_key(|i| i.menu_order),
            // Deterministic stand-in for random order, so tests stay stable.
            SortKey::Rand => {}
        }
        if order == SortOrder::Desc && key != SortKey::Rand {
            items.reverse();
        }
    }
}

impl ContentStore for MemoryHost {
    fn get(&self, id: ContentId) -> Option<ContentItem> {
        self.items.get(&id.0).cloned()
    }

    fn query(&self, query: &ContentQuery) -> Vec<ContentItem> {
        let mut matches: Vec<ContentItem> = self
            .items
            .values()
            .filter(|i| i.content_type == query.content_type && i.status == query.status)
            .cloned()
            .collect();
        Self::sort_items(&mut matches, query.sort_key, query.sort_order);
        if let Some(limit) = query.limit {
            matches.truncate(limit);
        }
        matches
    }
}

impl MetaStore for MemoryHost {
    fn get_meta(&self, id: ContentId, key: &str) -> Option<String> {
        self.meta.get(&(id.0, key.to_string())).cloned()
    }

    fn put_meta(&mut self, id: ContentId, key: &str, value: &str) {
        self.meta.insert((id.0, key.to_string()), value.to_string());
    }
}

impl ContentTypeRegistry for MemoryHost {
    fn register_content_type(&mut self, spec: &ContentTypeSpec) {
        self.registered_types.push(spec.clone());
    }

    fn flush_rewrite_rules(&mut self) {
        self.flush_count += 1;
    }
}

impl NonceProvider for MemoryHost {
    fn issue_nonce(&self, action: &str, id: ContentId) -> String {
        format!("nonce-{action}-{id}")
    }

    fn verify_nonce(&self, token: &str, action: &str, id: ContentId) -> bool {
        self.nonces_valid && token == self.issue_nonce(action, id)
    }
}

impl Capabilities for MemoryHost {
    fn can_edit(&self, _id: ContentId) -> bool {
        self.editing_allowed
    }
}

/// Builder for seeding content items without spelling out every field.
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    content_type: String,
    title: String,
    body: String,
    cover_image: Option<String>,
    status: ContentStatus,
    created_at: DateTime<Utc>,
    menu_order: i32,
}

impl ItemBuilder {
    /// A published item of the given content type.
    pub fn published(content_type: &str, title: &str) -> Self {
        Self {
            content_type: content_type.to_string(),
            title: title.to_string(),
            body: String::new(),
            cover_image: None,
            status: ContentStatus::Published,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap(),
            menu_order: 0,
        }
    }

    #[must_use]
    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    #[must_use]
    pub fn cover_image(mut self, url: &str) -> Self {
        self.cover_image = Some(url.to_string());
        self
    }

    #[must_use]
    pub fn status(mut self, status: ContentStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    #[must_use]
    pub fn menu_order(mut self, order: i32) -> Self {
        self.menu_order = order;
        self
    }

    fn build(self, id: ContentId) -> ContentItem {
        ContentItem {
            id,
            content_type: self.content_type,
            title: self.title,
            body: self.body,
            cover_image: self.cover_image,
            status: self.status,
            created_at: self.created_at,
            modified_at: self.created_at,
            menu_order: self.menu_order,
        }
    }
}
