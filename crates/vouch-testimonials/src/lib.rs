// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client testimonials plugin.
//!
//! Registers a `dvc_testimonial` content type, collects per-item client
//! details (name, position, company, star rating) through an editor field
//! group, and expands a `[testimonials]` shortcode into a self-contained
//! carousel of styled testimonial cards.

pub mod content_type;
pub mod editor;
pub mod escape;
pub mod render;
pub mod shortcode;

use std::collections::HashMap;

use vouch_config::DisplayConfig;
use vouch_core::traits::{CmsPlugin, Host, SaveRequest};
use vouch_core::types::ContentId;

pub use content_type::{CONTENT_TYPE, SLUG};
pub use render::TestimonialView;
pub use shortcode::{expand_shortcodes, ShortcodeAttrs, SHORTCODE};

/// The testimonials plugin, carrying its configured display defaults.
#[derive(Debug, Clone, Default)]
pub struct TestimonialsPlugin {
    display: DisplayConfig,
}

impl TestimonialsPlugin {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }
}

impl CmsPlugin for TestimonialsPlugin {
    fn name(&self) -> &'static str {
        "dvc-testimonials"
    }

    fn description(&self) -> &'static str {
        "Client testimonials with a shortcode-driven carousel display"
    }

    fn on_init(&self, host: &mut dyn Host) {
        host.register_content_type(&content_type::testimonial_content_type());
    }

    fn on_activate(&self, host: &mut dyn Host) {
        // Routing rules are rebuilt with the type registered, so the
        // archive slug resolves immediately.
        self.on_init(host);
        host.flush_rewrite_rules();
    }

    fn on_deactivate(&self, host: &mut dyn Host) {
        host.flush_rewrite_rules();
    }

    fn save_content_type(&self) -> Option<&'static str> {
        Some(CONTENT_TYPE)
    }

    fn on_save(&self, host: &mut dyn Host, id: ContentId, request: &SaveRequest) {
        editor::save_fields(host, id, request);
    }

    fn shortcodes(&self) -> &'static [&'static str] {
        &[SHORTCODE]
    }

    fn handle_shortcode(
        &self,
        host: &dyn Host,
        name: &str,
        attrs: &HashMap<String, String>,
    ) -> Option<String> {
        (name == SHORTCODE).then(|| shortcode::handle(host, attrs, &self.display))
    }
}
