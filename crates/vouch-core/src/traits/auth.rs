// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request-forgery tokens and permission checks, both delegated to the host.

use crate::types::ContentId;

/// Per-form, per-action forgery-protection tokens.
pub trait NonceProvider {
    /// Issue a token for the given action on the given item.
    fn issue_nonce(&self, action: &str, id: ContentId) -> String;

    /// Verify a submitted token against the one issued for this action/item.
    fn verify_nonce(&self, token: &str, action: &str, id: ContentId) -> bool;
}

/// Permission checks for the current request's principal.
pub trait Capabilities {
    /// Whether the caller may edit the given item.
    fn can_edit(&self, id: ContentId) -> bool;
}
