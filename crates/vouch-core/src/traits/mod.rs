// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between plugins and the host platform.
//!
//! Everything a plugin needs from its platform (content storage and
//! querying, metadata persistence, content-type registration, forgery-token
//! issuance, permission checks) is a trait here. Plugins code against
//! these; hosts (or the in-memory test host) implement them.

pub mod auth;
pub mod content;
pub mod meta;
pub mod plugin;
pub mod registry;

pub use auth::{Capabilities, NonceProvider};
pub use content::ContentStore;
pub use meta::MetaStore;
pub use plugin::{CmsPlugin, SaveRequest};
pub use registry::{ContentFeature, ContentTypeRegistry, ContentTypeSpec};

/// The full host surface a plugin runs against.
///
/// Blanket-implemented for any type providing all five seams, so a host
/// passes itself as a single `&mut dyn Host`.
pub trait Host:
    ContentStore + MetaStore + ContentTypeRegistry + NonceProvider + Capabilities
{
}

impl<T> Host for T where
    T: ContentStore + MetaStore + ContentTypeRegistry + NonceProvider + Capabilities
{
}
