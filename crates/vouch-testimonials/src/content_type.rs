// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `dvc_testimonial` content type declaration.

use std::collections::BTreeMap;

use vouch_core::traits::{ContentFeature, ContentTypeSpec};

/// Fixed machine name of the testimonial content type.
pub const CONTENT_TYPE: &str = "dvc_testimonial";

/// URL path segment for testimonial permalinks and the archive page.
pub const SLUG: &str = "testimonials";

/// Build the testimonial content-type declaration.
///
/// Public, queryable, own archive page, title/body/cover-image/revisions
/// support, and exposed to the host's structured-content editing API.
pub fn testimonial_content_type() -> ContentTypeSpec {
    ContentTypeSpec {
        name: CONTENT_TYPE.to_string(),
        singular_label: "Testimonial".to_string(),
        plural_label: "Testimonials".to_string(),
        public: true,
        queryable: true,
        has_archive: true,
        slug: SLUG.to_string(),
        supports: vec![
            ContentFeature::Title,
            ContentFeature::Editor,
            ContentFeature::Thumbnail,
            ContentFeature::Revisions,
        ],
        show_in_rest: true,
        menu_position: Some(25),
        menu_icon: Some("format-quote".to_string()),
        labels: cover_image_labels(),
    }
}

/// The cover image of a testimonial is the client's photo; relabel the
/// host's generic featured-image strings to say so.
fn cover_image_labels() -> BTreeMap<String, String> {
    [
        ("featured_image", "Client Photo"),
        ("set_featured_image", "Set client photo"),
        ("remove_featured_image", "Remove client photo"),
        ("use_featured_image", "Use as client photo"),
    ]
    .into_iter()
    .map(|(slot, label)| (slot.to_string(), label.to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_is_complete() {
        let spec = testimonial_content_type();
        assert_eq!(spec.name, "dvc_testimonial");
        assert_eq!(spec.slug, "testimonials");
        assert!(spec.public);
        assert!(spec.queryable);
        assert!(spec.has_archive);
        assert!(spec.show_in_rest);
        assert_eq!(spec.supports.len(), 4);
        assert!(spec.supports.contains(&ContentFeature::Revisions));
        assert!(spec.supports.contains(&ContentFeature::Thumbnail));
    }

    #[test]
    fn cover_image_slots_are_relabeled_as_client_photo() {
        let spec = testimonial_content_type();
        assert_eq!(
            spec.labels.get("featured_image").map(String::as_str),
            Some("Client Photo")
        );
        assert_eq!(
            spec.labels.get("set_featured_image").map(String::as_str),
            Some("Set client photo")
        );
        assert_eq!(
            spec.labels.get("remove_featured_image").map(String::as_str),
            Some("Remove client photo")
        );
        assert_eq!(
            spec.labels.get("use_featured_image").map(String::as_str),
            Some("Use as client photo")
        );
    }
}
