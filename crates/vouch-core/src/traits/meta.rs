// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Metadata store seam: host-managed key/value persistence per content item.

use crate::types::ContentId;

/// Scalar metadata attached to content items, keyed by (item id, meta key).
///
/// The plugin treats this as a trusted map; values it writes are always
/// sanitized plain text first.
pub trait MetaStore {
    /// Read a stored metadata value.
    fn get_meta(&self, id: ContentId, key: &str) -> Option<String>;

    /// Write a metadata value, replacing any previous one.
    fn put_meta(&mut self, id: ContentId, key: &str, value: &str);
}
