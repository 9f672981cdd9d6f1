// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Vouch plugin toolkit.
//!
//! Vouch lets content-management plugins be written against a typed host
//! abstraction instead of ambient platform globals. This crate provides the
//! host trait seams (content store, metadata store, content-type registry,
//! nonces, capabilities), the `CmsPlugin` trait, the hook dispatch registry,
//! plain-text sanitization, and the common types shared by all of them.

pub mod error;
pub mod hooks;
pub mod sanitize;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::VouchError;
pub use hooks::{PluginEntry, PluginRegistry, PluginStatus};
pub use types::{
    ContentId, ContentItem, ContentQuery, ContentStatus, Rating, SortKey, SortOrder,
};

// Re-export the trait surface at crate root.
pub use traits::{
    Capabilities, CmsPlugin, ContentFeature, ContentStore, ContentTypeRegistry, ContentTypeSpec,
    Host, MetaStore, NonceProvider, SaveRequest,
};
