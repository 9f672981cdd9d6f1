// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field editor adapter: the client-details form and its save handler.
//!
//! Render is pure apart from token issuance; save is a strict validation
//! pipeline that aborts silently at the first failure, so a rejected
//! submission never partially overwrites stored metadata.

use vouch_core::sanitize::sanitize_text_field;
use vouch_core::traits::{Host, SaveRequest};
use vouch_core::types::{ContentId, ContentItem, Rating};

use crate::escape::{esc_attr, esc_html};

/// Metadata keys, prefixed to avoid collisions with other plugins.
pub const META_CLIENT_NAME: &str = "_dvc_client_name";
pub const META_CLIENT_POSITION: &str = "_dvc_client_position";
pub const META_COMPANY_NAME: &str = "_dvc_company_name";
pub const META_RATING: &str = "_dvc_rating";

/// Submitted form-field names.
pub const FIELD_CLIENT_NAME: &str = "dvc_client_name";
pub const FIELD_CLIENT_POSITION: &str = "dvc_client_position";
pub const FIELD_COMPANY_NAME: &str = "dvc_company_name";
pub const FIELD_RATING: &str = "dvc_rating";

/// Forgery-protection token action for the client-details form.
pub const NONCE_ACTION: &str = "dvc_save_testimonial_meta";

/// Render the client-details form fragment for the given item.
///
/// Emits a forgery-protection token and four inputs pre-filled from the
/// item's stored metadata; the rating select defaults to 5 when unset.
pub fn render_fields(host: &dyn Host, item: &ContentItem) -> String {
    let nonce = host.issue_nonce(NONCE_ACTION, item.id);
    let client_name = host.get_meta(item.id, META_CLIENT_NAME).unwrap_or_default();
    let client_position = host
        .get_meta(item.id, META_CLIENT_POSITION)
        .unwrap_or_default();
    let company_name = host.get_meta(item.id, META_COMPANY_NAME).unwrap_or_default();
    let rating = Rating::from_meta(host.get_meta(item.id, META_RATING).as_deref());

    let mut html = String::with_capacity(2048);
    html.push_str(&format!(
        "<input type=\"hidden\" name=\"dvc_testimonial_nonce\" value=\"{}\" />\n",
        esc_attr(&nonce)
    ));

    html.push_str(&text_field_row(
        FIELD_CLIENT_NAME,
        "Client Name",
        &client_name,
        "e.g. Jane Smith",
        true,
    ));
    html.push_str(&text_field_row(
        FIELD_CLIENT_POSITION,
        "Client Position / Title",
        &client_position,
        "e.g. Marketing Director",
        false,
    ));
    html.push_str(&text_field_row(
        FIELD_COMPANY_NAME,
        "Company Name",
        &company_name,
        "e.g. Acme Corp",
        false,
    ));
    html.push_str(&rating_select_row(rating));
    html
}

fn text_field_row(
    name: &str,
    label: &str,
    value: &str,
    placeholder: &str,
    required: bool,
) -> String {
    let required_mark = if required {
        " <span class=\"dvc-required\" aria-label=\"required\">*</span>"
    } else {
        ""
    };
    let required_attrs = if required {
        " required aria-required=\"true\""
    } else {
        ""
    };
    format!(
        concat!(
            "<div class=\"dvc-field-row\">\n",
            "  <label for=\"{name}\">{label}{mark}</label>\n",
            "  <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\"",
            " placeholder=\"{placeholder}\"{attrs} />\n",
            "</div>\n"
        ),
        name = name,
        label = esc_html(label),
        mark = required_mark,
        value = esc_attr(value),
        placeholder = esc_attr(placeholder),
        attrs = required_attrs,
    )
}

fn rating_select_row(current: Rating) -> String {
    let mut html = String::from(
        "<div class=\"dvc-field-row\">\n  <label for=\"dvc_rating\">Rating</label>\n  <select id=\"dvc_rating\" name=\"dvc_rating\">\n",
    );
    for value in Rating::MIN..=Rating::MAX {
        let selected = if value == current.value() {
            " selected"
        } else {
            ""
        };
        let plural = if value > 1 { "s" } else { "" };
        let stars: String = "★".repeat(usize::from(value))
            + &"☆".repeat(usize::from(Rating::MAX - value));
        html.push_str(&format!(
            "    <option value=\"{value}\"{selected}>{stars} ({value} star{plural})</option>\n"
        ));
    }
    html.push_str("  </select>\n</div>\n");
    html
}

/// Persist submitted client-detail fields for the given item.
///
/// Executes in strict order, aborting (no-op) at the first failure:
/// 1. forgery-token verification, 2. autosave rejection, 3. permission
/// check, 4. per-field sanitize-and-write. An empty submitted client name
/// never erases a previously stored one; the rating is coerced and clamped
/// into 1..=5 before writing.
pub fn save_fields(host: &mut dyn Host, id: ContentId, request: &SaveRequest) {
    let nonce_ok = request
        .nonce
        .as_deref()
        .is_some_and(|token| host.verify_nonce(token, NONCE_ACTION, id));
    if !nonce_ok {
        tracing::debug!(%id, "testimonial save rejected: missing or invalid nonce");
        return;
    }

    if request.is_autosave {
        tracing::debug!(%id, "testimonial save skipped: autosave cycle");
        return;
    }

    if !host.can_edit(id) {
        tracing::debug!(%id, "testimonial save rejected: caller cannot edit item");
        return;
    }

    if let Some(raw) = request.field(FIELD_CLIENT_NAME) {
        let client_name = sanitize_text_field(raw);
        // Required field: an accidental empty submission must not erase
        // a previously saved name.
        if !client_name.is_empty() {
            host.put_meta(id, META_CLIENT_NAME, &client_name);
        }
    }

    if let Some(raw) = request.field(FIELD_CLIENT_POSITION) {
        host.put_meta(id, META_CLIENT_POSITION, &sanitize_text_field(raw));
    }

    if let Some(raw) = request.field(FIELD_COMPANY_NAME) {
        host.put_meta(id, META_COMPANY_NAME, &sanitize_text_field(raw));
    }

    if let Some(raw) = request.field(FIELD_RATING) {
        let rating = Rating::from_submission(raw);
        host.put_meta(id, META_RATING, &rating.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use vouch_core::traits::NonceProvider;
    use vouch_core::MetaStore;
    use vouch_test_utils::{ItemBuilder, MemoryHost};

    fn seeded_host() -> (MemoryHost, ContentId) {
        let mut host = MemoryHost::new();
        let id = host.insert_item(ItemBuilder::published("dvc_testimonial", "A quote"));
        (host, id)
    }

    fn valid_request(host: &MemoryHost, id: ContentId) -> SaveRequest {
        SaveRequest::default().with_nonce(&host.issue_nonce(NONCE_ACTION, id))
    }

    #[test]
    fn full_save_writes_all_four_fields() {
        let (mut host, id) = seeded_host();
        let request = valid_request(&host, id)
            .with_field(FIELD_CLIENT_NAME, "Jane Smith")
            .with_field(FIELD_CLIENT_POSITION, "Director")
            .with_field(FIELD_COMPANY_NAME, "Acme Corp")
            .with_field(FIELD_RATING, "4");

        save_fields(&mut host, id, &request);

        assert_eq!(host.get_meta(id, META_CLIENT_NAME).as_deref(), Some("Jane Smith"));
        assert_eq!(host.get_meta(id, META_CLIENT_POSITION).as_deref(), Some("Director"));
        assert_eq!(host.get_meta(id, META_COMPANY_NAME).as_deref(), Some("Acme Corp"));
        assert_eq!(host.get_meta(id, META_RATING).as_deref(), Some("4"));
    }

    #[test]
    fn missing_nonce_skips_all_writes() {
        let (mut host, id) = seeded_host();
        host.seed_meta(id, META_CLIENT_NAME, "Old Name");
        host.seed_meta(id, META_RATING, "2");

        let request = SaveRequest::default()
            .with_field(FIELD_CLIENT_NAME, "New Name")
            .with_field(FIELD_CLIENT_POSITION, "CEO")
            .with_field(FIELD_COMPANY_NAME, "NewCo")
            .with_field(FIELD_RATING, "5");
        save_fields(&mut host, id, &request);

        assert_eq!(host.get_meta(id, META_CLIENT_NAME).as_deref(), Some("Old Name"));
        assert_eq!(host.get_meta(id, META_CLIENT_POSITION), None);
        assert_eq!(host.get_meta(id, META_COMPANY_NAME), None);
        assert_eq!(host.get_meta(id, META_RATING).as_deref(), Some("2"));
    }

    #[test]
    fn invalid_nonce_skips_all_writes() {
        let (mut host, id) = seeded_host();
        let request = SaveRequest::default()
            .with_nonce("forged-token")
            .with_field(FIELD_CLIENT_NAME, "Mallory");
        save_fields(&mut host, id, &request);
        assert_eq!(host.meta_len(id), 0);
    }

    #[test]
    fn autosave_is_ignored() {
        let (mut host, id) = seeded_host();
        let mut request = valid_request(&host, id).with_field(FIELD_CLIENT_NAME, "Jane");
        request.is_autosave = true;
        save_fields(&mut host, id, &request);
        assert_eq!(host.meta_len(id), 0);
    }

    #[test]
    fn missing_edit_permission_skips_all_writes() {
        let (mut host, id) = seeded_host();
        host.editing_allowed = false;
        let request = valid_request(&host, id).with_field(FIELD_CLIENT_NAME, "Jane");
        save_fields(&mut host, id, &request);
        assert_eq!(host.meta_len(id), 0);
    }

    #[test]
    fn empty_client_name_never_erases_stored_name() {
        let (mut host, id) = seeded_host();
        host.seed_meta(id, META_CLIENT_NAME, "Jane Smith");

        let request = valid_request(&host, id).with_field(FIELD_CLIENT_NAME, "   ");
        save_fields(&mut host, id, &request);
        assert_eq!(host.get_meta(id, META_CLIENT_NAME).as_deref(), Some("Jane Smith"));

        let request = valid_request(&host, id).with_field(FIELD_CLIENT_NAME, "New Name");
        save_fields(&mut host, id, &request);
        assert_eq!(host.get_meta(id, META_CLIENT_NAME).as_deref(), Some("New Name"));
    }

    #[test]
    fn empty_position_and_company_are_written() {
        let (mut host, id) = seeded_host();
        host.seed_meta(id, META_CLIENT_POSITION, "Director");
        host.seed_meta(id, META_COMPANY_NAME, "Acme");

        let request = valid_request(&host, id)
            .with_field(FIELD_CLIENT_POSITION, "")
            .with_field(FIELD_COMPANY_NAME, "");
        save_fields(&mut host, id, &request);

        assert_eq!(host.get_meta(id, META_CLIENT_POSITION).as_deref(), Some(""));
        assert_eq!(host.get_meta(id, META_COMPANY_NAME).as_deref(), Some(""));
    }

    #[test]
    fn unsubmitted_fields_are_left_alone() {
        let (mut host, id) = seeded_host();
        host.seed_meta(id, META_COMPANY_NAME, "Acme");

        let request = valid_request(&host, id).with_field(FIELD_CLIENT_NAME, "Jane");
        save_fields(&mut host, id, &request);

        assert_eq!(host.get_meta(id, META_COMPANY_NAME).as_deref(), Some("Acme"));
        assert_eq!(host.get_meta(id, META_RATING), None);
    }

    #[test]
    fn markup_is_stripped_before_write() {
        let (mut host, id) = seeded_host();
        let request = valid_request(&host, id)
            .with_field(FIELD_CLIENT_NAME, "<script>alert(1)</script>Jane");
        save_fields(&mut host, id, &request);
        let stored = host.get_meta(id, META_CLIENT_NAME).unwrap();
        assert_eq!(stored, "alert(1)Jane");
        assert!(!stored.contains('<'));
    }

    #[test]
    fn out_of_range_ratings_are_clamped() {
        for (raw, expected) in [("9", "5"), ("0", "1"), ("-3", "3"), ("abc", "1"), ("3", "3")] {
            let (mut host, id) = seeded_host();
            let request = valid_request(&host, id).with_field(FIELD_RATING, raw);
            save_fields(&mut host, id, &request);
            assert_eq!(host.get_meta(id, META_RATING).as_deref(), Some(expected), "raw {raw:?}");
        }
    }

    proptest! {
        #[test]
        fn persisted_rating_is_always_in_range(raw in "\\PC*") {
            let (mut host, id) = seeded_host();
            let request = valid_request(&host, id).with_field(FIELD_RATING, &raw);
            save_fields(&mut host, id, &request);
            let stored = host.get_meta(id, META_RATING).unwrap();
            let value: u8 = stored.parse().unwrap();
            prop_assert!((1..=5).contains(&value));
        }
    }

    #[test]
    fn render_prefills_from_meta_and_escapes() {
        let (mut host, id) = seeded_host();
        host.seed_meta(id, META_CLIENT_NAME, "Jane \"JS\" Smith");
        host.seed_meta(id, META_RATING, "3");
        let item = vouch_core::traits::ContentStore::get(&host, id).unwrap();

        let html = render_fields(&host, &item);
        assert!(html.contains("dvc_testimonial_nonce"));
        assert!(html.contains("Jane &quot;JS&quot; Smith"));
        assert!(html.contains("<option value=\"3\" selected>"));
        assert!(!html.contains("\"JS\""));
    }

    #[test]
    fn render_defaults_rating_to_five() {
        let (host, id) = {
            let mut host = MemoryHost::new();
            let id = host.insert_item(ItemBuilder::published("dvc_testimonial", "A quote"));
            (host, id)
        };
        let item = vouch_core::traits::ContentStore::get(&host, id).unwrap();
        let html = render_fields(&host, &item);
        assert!(html.contains("<option value=\"5\" selected>"));
        assert!(html.contains("★★★★★ (5 stars)"));
    }
}
