// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sample-data preview: seeds an in-memory host with a handful of
//! testimonials and expands a shortcode against it, so the rendered
//! carousel can be inspected without a real CMS.

use chrono::{TimeZone, Utc};
use vouch_config::VouchConfig;
use vouch_core::hooks::PluginRegistry;
use vouch_test_utils::{ItemBuilder, MemoryHost};
use vouch_testimonials::editor::{
    META_CLIENT_NAME, META_CLIENT_POSITION, META_COMPANY_NAME, META_RATING,
};
use vouch_testimonials::{expand_shortcodes, TestimonialsPlugin, CONTENT_TYPE};

struct Sample {
    title: &'static str,
    name: &'static str,
    position: &'static str,
    company: &'static str,
    rating: &'static str,
    quote: &'static str,
    day: u32,
}

const SAMPLES: &[Sample] = &[
    Sample {
        title: "Website redesign",
        name: "Amara Diallo",
        position: "Head of Marketing",
        company: "Northwind Traders",
        rating: "5",
        quote: "The redesign **doubled** our signups within a month.",
        day: 3,
    },
    Sample {
        title: "Checkout overhaul",
        name: "Lukas Meier",
        position: "CTO",
        company: "Alpenkraft GmbH",
        rating: "4",
        quote: "Clear communication and the checkout flow just works now.",
        day: 9,
    },
    Sample {
        title: "Brand refresh",
        name: "Priya Nair",
        position: "Founder",
        company: "",
        rating: "5",
        quote: "They captured exactly what our brand needed. *Delightful* to work with.",
        day: 17,
    },
];

/// Seed the host with the sample testimonials.
pub fn seed(host: &mut MemoryHost) {
    for sample in SAMPLES {
        let id = host.insert_item(
            ItemBuilder::published(CONTENT_TYPE, sample.title)
                .body(sample.quote)
                .created_at(Utc.with_ymd_and_hms(2026, 6, sample.day, 10, 0, 0).unwrap()),
        );
        host.seed_meta(id, META_CLIENT_NAME, sample.name);
        host.seed_meta(id, META_CLIENT_POSITION, sample.position);
        host.seed_meta(id, META_COMPANY_NAME, sample.company);
        host.seed_meta(id, META_RATING, sample.rating);
    }
}

/// Render a shortcode occurrence against the seeded sample data.
pub fn render(config: &VouchConfig, shortcode_text: &str) -> String {
    let mut registry = PluginRegistry::new();
    registry.register(Box::new(TestimonialsPlugin::new(config.display.clone())));

    let mut host = MemoryHost::new();
    registry.dispatch_init(&mut host);
    seed(&mut host);

    expand_shortcodes(&host, &registry, shortcode_text)
}
