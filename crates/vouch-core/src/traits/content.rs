// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content store seam: the host's generic content-item query engine.

use crate::types::{ContentId, ContentItem, ContentQuery};

/// Read access to the host's content store.
///
/// Each call is a single atomic operation from the plugin's point of view;
/// consistency across calls is the host's responsibility.
pub trait ContentStore {
    /// Fetch a single item by identifier.
    fn get(&self, id: ContentId) -> Option<ContentItem>;

    /// Run a filtered, sorted, optionally limited query.
    ///
    /// Results are returned in query order; the limit applies after sorting.
    fn query(&self, query: &ContentQuery) -> Vec<ContentItem>;
}
