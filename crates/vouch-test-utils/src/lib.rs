// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Vouch plugins.
//!
//! Provides `MemoryHost`, an in-memory implementation of the full host
//! trait surface, and `ItemBuilder` for seeding content items. Used by
//! plugin unit/integration tests and by the preview CLI.

pub mod memory_host;

pub use memory_host::{ItemBuilder, MemoryHost};
