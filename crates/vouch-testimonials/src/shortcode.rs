// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `[testimonials]` display directive: attribute sanitization, the
//! content query, and view assembly feeding the pure renderer.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use vouch_config::DisplayConfig;
use vouch_core::hooks::PluginRegistry;
use vouch_core::sanitize::{coerce_int, sanitize_key};
use vouch_core::traits::Host;
use vouch_core::types::{ContentItem, ContentQuery, ContentStatus, Rating, SortKey, SortOrder};

use crate::content_type::CONTENT_TYPE;
use crate::editor::{META_CLIENT_NAME, META_CLIENT_POSITION, META_COMPANY_NAME, META_RATING};
use crate::render::{self, TestimonialView};

/// Shortcode name, as written in body content: `[testimonials]`.
pub const SHORTCODE: &str = "testimonials";

/// Sanitized presentation parameters for one shortcode occurrence.
///
/// Every attribute is advisory: unrecognized values silently fall back to
/// the configured defaults rather than erroring.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortcodeAttrs {
    /// Maximum number of testimonials; negative means unbounded.
    pub count: i64,
    pub orderby: SortKey,
    pub order: SortOrder,
}

impl ShortcodeAttrs {
    /// Sanitize raw attributes, filling gaps from the display defaults.
    pub fn parse(attrs: &HashMap<String, String>, defaults: &DisplayConfig) -> Self {
        let count = attrs
            .get("count")
            .map(|raw| coerce_int(raw))
            .unwrap_or(defaults.default_count);
        let orderby = attrs
            .get("orderby")
            .map(String::as_str)
            .unwrap_or(&defaults.default_orderby);
        let order = attrs
            .get("order")
            .map(String::as_str)
            .unwrap_or(&defaults.default_order);
        Self {
            count,
            orderby: SortKey::parse_or_default(&sanitize_key(orderby)),
            order: SortOrder::parse_or_default(order),
        }
    }

    /// The content query this occurrence resolves to.
    pub fn to_query(&self) -> ContentQuery {
        ContentQuery {
            content_type: CONTENT_TYPE.to_string(),
            status: ContentStatus::Published,
            sort_key: self.orderby,
            sort_order: self.order,
            limit: usize::try_from(self.count).ok(),
        }
    }
}

/// Expand one `[testimonials]` occurrence into an HTML fragment.
///
/// Idempotent and side-effect free; safe to invoke once per occurrence
/// with independent attribute sets.
pub fn handle(host: &dyn Host, attrs: &HashMap<String, String>, defaults: &DisplayConfig) -> String {
    let parsed = ShortcodeAttrs::parse(attrs, defaults);
    let items = host.query(&parsed.to_query());
    tracing::debug!(
        count = items.len(),
        orderby = %parsed.orderby,
        order = %parsed.order,
        "expanding testimonials shortcode"
    );

    if items.is_empty() {
        return render::no_results(&defaults.no_results_message);
    }

    let views: Vec<TestimonialView> = items.iter().map(|item| view_for(host, item)).collect();
    render::carousel(&views)
}

/// Read an item's metadata and compose its display-ready view.
fn view_for(host: &dyn Host, item: &ContentItem) -> TestimonialView {
    let client_name = host
        .get_meta(item.id, META_CLIENT_NAME)
        .unwrap_or_default();
    let position = host
        .get_meta(item.id, META_CLIENT_POSITION)
        .unwrap_or_default();
    let company = host
        .get_meta(item.id, META_COMPANY_NAME)
        .unwrap_or_default();
    let rating = Rating::from_meta(host.get_meta(item.id, META_RATING).as_deref());

    TestimonialView::compose(
        &client_name,
        &item.title,
        &position,
        &company,
        rating,
        item.cover_image.clone(),
        item.body.clone(),
    )
}

static SHORTCODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // [name] or [name attr="value" ...]; names and attr keys are
    // identifier-like, values are double-quoted.
    Regex::new(r#"\[([a-z0-9_-]+)((?:\s+[a-z0-9_-]+="[^"]*")*)\s*\]"#).unwrap()
});

static ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([a-z0-9_-]+)="([^"]*)""#).unwrap());

/// Expand every registered shortcode occurrence in a body text.
///
/// Stands in for the host's content-processing pipeline: each occurrence
/// is dispatched through the registry with its own attribute set;
/// occurrences no enabled plugin claims pass through untouched.
pub fn expand_shortcodes(host: &dyn Host, registry: &PluginRegistry, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in SHORTCODE_RE.captures_iter(text) {
        let whole = caps.get(0).expect("regex match has group 0");
        let name = &caps[1];
        let attrs: HashMap<String, String> = ATTR_RE
            .captures_iter(caps.get(2).map_or("", |m| m.as_str()))
            .map(|a| (a[1].to_string(), a[2].to_string()))
            .collect();

        out.push_str(&text[last..whole.start()]);
        match registry.expand_shortcode(host, name, &attrs) {
            Ok(html) => out.push_str(&html),
            Err(_) => out.push_str(whole.as_str()),
        }
        last = whole.end();
    }
    out.push_str(&text[last..]);
    out
}
