// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure carousel rendering: a list of validated testimonial records in, one
//! self-contained HTML fragment out.
//!
//! Data fetching lives in the shortcode handler; nothing here touches the
//! host, so every branch is directly testable.

use vouch_core::types::Rating;

use crate::escape::{esc_attr, esc_html};

/// A validated, display-ready testimonial record.
#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialView {
    /// Client name, falling back to the item title when the name metadata
    /// is empty.
    pub display_name: String,
    /// Position and company joined with ", "; empty parts omitted.
    pub subtitle: String,
    /// Clamped star rating.
    pub rating: Rating,
    /// Single-character initials fallback for the avatar placeholder.
    pub initial: char,
    /// Client photo URL, if the item has a cover image.
    pub avatar_url: Option<String>,
    /// Testimonial quote as markdown source.
    pub body_markdown: String,
}

impl TestimonialView {
    /// Compose a view from raw metadata values, applying all fallbacks.
    pub fn compose(
        client_name: &str,
        item_title: &str,
        position: &str,
        company: &str,
        rating: Rating,
        avatar_url: Option<String>,
        body_markdown: String,
    ) -> Self {
        let display_name = if client_name.is_empty() {
            item_title.to_string()
        } else {
            client_name.to_string()
        };
        let initial = client_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('?');
        let subtitle = [position, company]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            display_name,
            subtitle,
            rating,
            initial,
            avatar_url,
            body_markdown,
        }
    }
}

/// The "no testimonials" message fragment, terminal when the query is empty.
pub fn no_results(message: &str) -> String {
    format!(
        "<p class=\"dvc-no-testimonials\">{}</p>",
        esc_html(message)
    )
}

/// Assemble the full carousel fragment: inline styles, one slide per view,
/// and (for two or more slides) navigation controls and dot indicators.
///
/// All interactive behavior is declared, not implemented: the buttons, the
/// counter, and the dots are static markup for client-side behavior to
/// attach to.
pub fn carousel(views: &[TestimonialView]) -> String {
    let mut html = String::with_capacity(4096 + views.len() * 1024);
    html.push_str(STYLE);
    html.push_str("<section class=\"dvc-testimonials-wrapper\" aria-label=\"Client Testimonials\">\n");
    html.push_str(
        "<div class=\"dvc-slider-track\" role=\"region\" aria-live=\"polite\" aria-atomic=\"true\">\n<div class=\"dvc-slides\">\n",
    );

    for (index, view) in views.iter().enumerate() {
        html.push_str(&slide(view, index));
    }

    html.push_str("</div>\n</div>\n");

    if views.len() > 1 {
        html.push_str(&navigation(views.len()));
    }

    html.push_str("</section>\n");
    html
}

fn slide(view: &TestimonialView, index: usize) -> String {
    let avatar = match &view.avatar_url {
        Some(url) => format!(
            "<img class=\"dvc-client-photo\" src=\"{}\" alt=\"{}\" width=\"72\" height=\"72\" />",
            esc_attr(url),
            esc_attr(&view.display_name)
        ),
        None => format!(
            "<div class=\"dvc-client-photo-placeholder\" aria-hidden=\"true\">{}</div>",
            esc_html(&view.initial.to_string())
        ),
    };

    format!(
        concat!(
            "<article class=\"dvc-slide\" role=\"group\" aria-label=\"Testimonial {number}\">\n",
            "<header class=\"dvc-slide-header\">\n",
            "{avatar}\n",
            "<div class=\"dvc-client-meta\">\n",
            "<strong>{name}</strong>\n",
            "<span>{subtitle}</span>\n",
            "</div>\n",
            "</header>\n",
            "<div class=\"dvc-stars\" aria-label=\"{rating_label}\">{stars}</div>\n",
            "<blockquote class=\"dvc-testimonial-text\">\n{body}</blockquote>\n",
            "</article>\n"
        ),
        number = index + 1,
        avatar = avatar,
        name = esc_html(&view.display_name),
        subtitle = esc_html(&view.subtitle),
        rating_label = esc_attr(&rating_label(view.rating)),
        stars = stars(view.rating),
        body = markdown_body(&view.body_markdown),
    )
}

/// Accessible label for a star row.
fn rating_label(rating: Rating) -> String {
    format!("{} star rating", rating.value())
}

/// Five glyphs, filled per the rating; each glyph is decorative to
/// assistive technology while the container carries the label.
fn stars(rating: Rating) -> String {
    let mut html = String::new();
    for position in Rating::MIN..=Rating::MAX {
        if position <= rating.value() {
            html.push_str("<span aria-hidden=\"true\">★</span>");
        } else {
            html.push_str("<span class=\"dvc-star-empty\" aria-hidden=\"true\">★</span>");
        }
    }
    html
}

/// Render the quote body from markdown, escaping any raw HTML in it.
fn markdown_body(markdown: &str) -> String {
    let mut options = comrak::Options::default();
    options.render.escape = true;
    comrak::markdown_to_html(markdown, &options)
}

fn navigation(total: usize) -> String {
    let mut html = String::with_capacity(512 + total * 128);
    html.push_str(concat!(
        "<nav class=\"dvc-nav\" aria-label=\"Testimonial navigation\">\n",
        "<button class=\"dvc-nav-btn dvc-prev\" aria-label=\"Previous testimonial\" disabled>&#8592;</button>\n",
    ));
    html.push_str(&format!(
        "<span class=\"dvc-counter\" aria-live=\"polite\">1 / {total}</span>\n"
    ));
    html.push_str(
        "<button class=\"dvc-nav-btn dvc-next\" aria-label=\"Next testimonial\">&#8594;</button>\n</nav>\n",
    );

    html.push_str("<div class=\"dvc-dots\" role=\"group\" aria-label=\"Go to testimonial\">\n");
    for index in 0..total {
        let active = if index == 0 { " active" } else { "" };
        html.push_str(&format!(
            "<button class=\"dvc-dot{active}\" aria-label=\"Testimonial {}\" data-index=\"{index}\"></button>\n",
            index + 1
        ));
    }
    html.push_str("</div>\n");
    html
}

/// Scoped styles shipped inline so the fragment is self-contained.
const STYLE: &str = "<style>
.dvc-testimonials-wrapper{position:relative;max-width:860px;margin:2rem auto;font-family:'Segoe UI',system-ui,-apple-system,sans-serif}
.dvc-slider-track{overflow:hidden;border-radius:16px}
.dvc-slides{display:flex;transition:transform 0.5s cubic-bezier(0.4,0,0.2,1);will-change:transform}
.dvc-slide{min-width:100%;box-sizing:border-box;padding:2.5rem;background:#fff;border-radius:16px;box-shadow:0 4px 24px rgba(108,99,255,0.1);display:flex;flex-direction:column;gap:1.25rem}
.dvc-client-photo{width:72px;height:72px;border-radius:50%;object-fit:cover;border:3px solid #6c63ff;flex-shrink:0}
.dvc-client-photo-placeholder{width:72px;height:72px;border-radius:50%;background:linear-gradient(135deg,#6c63ff,#ff6584);display:flex;align-items:center;justify-content:center;font-size:1.8rem;color:#fff;flex-shrink:0}
.dvc-stars{color:#ffc107;font-size:1.1rem;letter-spacing:0.05em}
.dvc-stars .dvc-star-empty{color:#d0d0d0}
.dvc-testimonial-text{font-size:1rem;color:#4a4a6a;line-height:1.75;font-style:italic;position:relative;padding-left:1.25rem}
.dvc-slide-header{display:flex;align-items:center;gap:1rem}
.dvc-client-meta strong{display:block;font-size:1rem;color:#1a1a2e;font-weight:700}
.dvc-client-meta span{font-size:0.85rem;color:#8888aa}
.dvc-nav{display:flex;justify-content:center;align-items:center;gap:1rem;margin-top:1.5rem}
.dvc-nav-btn{width:44px;height:44px;border-radius:50%;border:2px solid #6c63ff;background:#fff;color:#6c63ff;font-size:1.1rem;cursor:pointer;display:flex;align-items:center;justify-content:center}
.dvc-nav-btn:disabled{border-color:#d0d0d0;color:#d0d0d0;cursor:not-allowed}
.dvc-counter{font-size:0.875rem;color:#8888aa;min-width:60px;text-align:center}
.dvc-dots{display:flex;justify-content:center;gap:0.5rem;margin-top:1rem}
.dvc-dot{width:8px;height:8px;border-radius:50%;background:#d0d0d0;border:none;cursor:pointer;padding:0}
.dvc-dot.active{background:#6c63ff;transform:scale(1.35)}
@media (max-width:600px){.dvc-slide{padding:1.5rem}.dvc-slide-header{flex-direction:column;text-align:center}.dvc-testimonial-text{font-size:0.9rem}}
</style>
";

#[cfg(test)]
mod tests {
    use super::*;

    fn view(name: &str) -> TestimonialView {
        TestimonialView::compose(
            name,
            "Fallback Title",
            "Director",
            "Acme Corp",
            Rating::clamped(4),
            None,
            "Great service.".to_string(),
        )
    }

    #[test]
    fn compose_falls_back_to_title_when_name_empty() {
        let v = TestimonialView::compose(
            "",
            "A lovely quote",
            "",
            "",
            Rating::default(),
            None,
            String::new(),
        );
        assert_eq!(v.display_name, "A lovely quote");
        assert_eq!(v.initial, '?');
    }

    #[test]
    fn compose_derives_uppercased_initial() {
        assert_eq!(view("jane").initial, 'J');
        assert_eq!(view("Ülrich").initial, 'Ü');
    }

    #[test]
    fn subtitle_joins_only_non_empty_parts() {
        let both = TestimonialView::compose("j", "t", "Director", "Acme Corp", Rating::default(), None, String::new());
        assert_eq!(both.subtitle, "Director, Acme Corp");

        let position_only = TestimonialView::compose("j", "t", "Director", "", Rating::default(), None, String::new());
        assert_eq!(position_only.subtitle, "Director");

        let company_only = TestimonialView::compose("j", "t", "", "Acme Corp", Rating::default(), None, String::new());
        assert_eq!(company_only.subtitle, "Acme Corp");

        let neither = TestimonialView::compose("j", "t", "", "", Rating::default(), None, String::new());
        assert_eq!(neither.subtitle, "");
    }

    #[test]
    fn no_results_fragment_escapes_message() {
        let html = no_results("No testimonials <yet>.");
        assert!(html.starts_with("<p class=\"dvc-no-testimonials\">"));
        assert!(html.contains("&lt;yet&gt;"));
    }

    #[test]
    fn single_slide_has_no_navigation() {
        let html = carousel(&[view("Jane")]);
        assert_eq!(html.matches("class=\"dvc-slide\"").count(), 1);
        assert!(!html.contains("class=\"dvc-nav"));
        assert!(!html.contains("class=\"dvc-dot"));
        assert!(!html.contains("class=\"dvc-counter"));
    }

    #[test]
    fn multiple_slides_get_nav_counter_and_dots() {
        let html = carousel(&[view("A"), view("B"), view("C")]);
        assert!(html.contains("class=\"dvc-nav-btn dvc-prev\""));
        assert!(html.contains("disabled"));
        assert!(html.contains("1 / 3"));
        assert_eq!(html.matches("data-index=").count(), 3);
        assert_eq!(html.matches("dvc-dot active").count(), 1);
        assert!(html.contains("data-index=\"0\""));
        assert!(html.contains("data-index=\"2\""));
    }

    #[test]
    fn stars_match_rating_and_are_decorative() {
        let html = carousel(&[view("Jane")]); // rating 4
        let slide_stars = html
            .split("class=\"dvc-stars\"")
            .nth(1)
            .expect("stars container in slide");
        let row = &slide_stars[..slide_stars.find("</div>").unwrap()];
        assert_eq!(row.matches("aria-hidden").count(), 5);
        assert_eq!(row.matches("dvc-star-empty").count(), 1);
        assert!(html.contains("aria-label=\"4 star rating\""));
    }

    #[test]
    fn avatar_prefers_cover_image_over_initials() {
        let mut v = view("Jane");
        v.avatar_url = Some("https://example.com/jane.jpg".to_string());
        let html = carousel(&[v]);
        assert!(html.contains("class=\"dvc-client-photo\""));
        assert!(html.contains("src=\"https://example.com/jane.jpg\""));
        assert!(!html.contains("class=\"dvc-client-photo-placeholder\""));

        let html = carousel(&[view("Jane")]);
        assert!(html.contains("class=\"dvc-client-photo-placeholder\""));
        assert!(html.contains(">J</div>"));
    }

    #[test]
    fn body_markdown_is_rendered_and_raw_html_escaped() {
        let mut v = view("Jane");
        v.body_markdown = "They did *great* work. <script>alert(1)</script>".to_string();
        let html = carousel(&[v]);
        assert!(html.contains("<em>great</em>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn dynamic_values_are_escaped() {
        let v = TestimonialView::compose(
            "\"><img src=x onerror=1>",
            "t",
            "CTO & Founder",
            "",
            Rating::default(),
            None,
            String::new(),
        );
        let html = carousel(&[v]);
        assert!(!html.contains("<img src=x"));
        assert!(html.contains("CTO &amp; Founder"));
    }
}
