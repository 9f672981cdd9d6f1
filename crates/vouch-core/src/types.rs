// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across host traits and the Vouch plugin toolkit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::sanitize::coerce_int;

/// Opaque identifier the host assigns to a content item on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentId(pub u64);

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a content item, governed entirely by the host.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    Draft,
    Published,
    Trashed,
}

/// A generic content item as stored by the host platform.
///
/// The plugin never owns one of these beyond a single request; it reads them
/// out of the host's [`ContentStore`](crate::traits::ContentStore) and
/// attaches scalar metadata through the host's
/// [`MetaStore`](crate::traits::MetaStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ContentId,
    /// Machine name of the content type this item belongs to.
    pub content_type: String,
    /// Free-text title (optional fallback display name).
    pub title: String,
    /// Rich-text body as markdown source.
    pub body: String,
    /// Optional URL of the attached media asset (client photo).
    pub cover_image: Option<String>,
    pub status: ContentStatus,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    /// Manual ordering weight, used by the `menu_order` sort key.
    pub menu_order: i32,
}

/// Sort key for content queries.
///
/// Unknown input falls back to [`SortKey::Date`] rather than erroring; the
/// display directive treats its `orderby` attribute as advisory.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Date,
    Title,
    Rand,
    MenuOrder,
    Modified,
}

impl SortKey {
    /// Parse a sanitized key, silently falling back to `Date` when the input
    /// is not in the allow-list.
    pub fn parse_or_default(input: &str) -> Self {
        input.parse().unwrap_or_default()
    }
}

/// Sort direction for content queries.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Only a case-insensitive `asc` yields ascending; everything else,
    /// including garbage, is descending.
    pub fn parse_or_default(input: &str) -> Self {
        if input.eq_ignore_ascii_case("asc") {
            Self::Asc
        } else {
            Self::Desc
        }
    }
}

/// A filtered, sorted, optionally limited content query.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentQuery {
    pub content_type: String,
    pub status: ContentStatus,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    /// `None` means unbounded.
    pub limit: Option<usize>,
}

impl ContentQuery {
    /// Query for published items of the given content type, newest first.
    pub fn published(content_type: &str) -> Self {
        Self {
            content_type: content_type.to_string(),
            status: ContentStatus::Published,
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            limit: None,
        }
    }
}

/// A star rating, held in the invariant range 1..=5.
///
/// Two construction paths with deliberately different zero handling:
/// [`Rating::from_submission`] clamps zero up to 1 (a submitted `0` is an
/// out-of-range value), while [`Rating::from_meta`] treats absent or zero
/// stored values as "never rated" and defaults to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Clamp an already-coerced integer into range, dropping the sign first.
    pub fn clamped(value: i64) -> Self {
        Self(value.unsigned_abs().clamp(u64::from(Self::MIN), u64::from(Self::MAX)) as u8)
    }

    /// Coerce a raw submitted string and clamp into range.
    pub fn from_submission(raw: &str) -> Self {
        Self::clamped(coerce_int(raw))
    }

    /// Read a stored metadata value; absent or zero defaults to 5.
    pub fn from_meta(raw: Option<&str>) -> Self {
        match raw.map(coerce_int).map(i64::unsigned_abs) {
            None | Some(0) => Self::default(),
            Some(n) => Self(n.clamp(u64::from(Self::MIN), u64::from(Self::MAX)) as u8),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(5)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
