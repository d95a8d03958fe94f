//! Homepage renderer.

use super::talent::influencer_card;
use crate::{
    assemble::home::HomeView,
    content::types::{LogoImage, ScrollerImage},
    utils::html::{escape, escape_attr},
};

const HOME_TEMPLATE: &str = include_str!("../embed/home.html");
const FORMS_TEMPLATE: &str = include_str!("../embed/forms.html");

/// The `/` page content.
pub fn home_page(view: &HomeView) -> String {
    let hero_button = match &view.hero.button {
        Some((text, url)) => format!(
            "        <a class=\"button\" href=\"{}\">{}</a>",
            escape_attr(url),
            escape(text)
        ),
        None => String::new(),
    };

    let hero_image = match &view.hero.image_url {
        Some(url) => format!(
            "      <div class=\"hero-media\"><img src=\"{}\" alt=\"\" fetchpriority=\"high\"></div>",
            escape_attr(url)
        ),
        None => String::new(),
    };

    HOME_TEMPLATE
        .replace("{contact_forms}", FORMS_TEMPLATE)
        .replace("{scroller}", &scroller_section(view))
        .replace("{stats}", &stats_section(view))
        .replace("{featured}", &featured_section(view))
        .replace("{logo_rows}", &logo_rows(view))
        .replace("{hero_image}", &hero_image)
        .replace("{hero_button}", &hero_button)
        .replace("{hero_subtitle}", &escape(&view.hero.subtitle))
        .replace("{hero_title}", &escape(&view.hero.title))
}

fn logo_rows(view: &HomeView) -> String {
    if view.logos_top.is_empty() && view.logos_bottom.is_empty() {
        return String::new();
    }

    let row = |logos: &[LogoImage]| -> String {
        let imgs = logos
            .iter()
            .map(|logo| {
                format!(
                    "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                    escape_attr(logo.url.as_deref().unwrap_or_default()),
                    escape_attr(logo.alt.as_deref().unwrap_or_default())
                )
            })
            .collect::<Vec<_>>()
            .join("");
        format!("      <div class=\"logo-row\">{imgs}</div>")
    };

    let mut rows = Vec::new();
    if !view.logos_top.is_empty() {
        rows.push(row(&view.logos_top));
    }
    if !view.logos_bottom.is_empty() {
        rows.push(row(&view.logos_bottom));
    }
    format!(
        "    <section class=\"logo-rows\" aria-label=\"Brands we work with\">\n{}\n    </section>",
        rows.join("\n")
    )
}

fn featured_section(view: &HomeView) -> String {
    if view.featured.is_empty() {
        return String::new();
    }
    let cards = view
        .featured
        .iter()
        .map(influencer_card)
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "    <section class=\"featured\">\n      <h2>Featured Talent</h2>\n      <div class=\"card-grid\">\n{cards}\n      </div>\n    </section>"
    )
}

fn stats_section(view: &HomeView) -> String {
    if view.selling_points.is_empty() {
        return String::new();
    }
    let points = view
        .selling_points
        .iter()
        .map(|point| {
            format!(
                "        <div class=\"stat\">\n          <div class=\"stat-icon\">{icon}</div>\n          <div class=\"stat-number\">{number}{suffix}</div>\n          <div class=\"stat-label\">{label}</div>\n        </div>",
                icon = point.icon_svg,
                number = escape(&point.number_label),
                suffix = escape(&point.suffix),
                label = escape(&point.label),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "    <section class=\"stats\">\n      <h2>{}</h2>\n      <div class=\"stats-grid\">\n{points}\n      </div>\n    </section>",
        escape(&view.stats_title)
    )
}

fn scroller_section(view: &HomeView) -> String {
    let Some(scroller) = &view.scroller else {
        return String::new();
    };

    let row = |images: &[ScrollerImage]| -> String {
        let imgs = images
            .iter()
            .map(|image| {
                format!(
                    "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                    escape_attr(image.url.as_deref().unwrap_or_default()),
                    escape_attr(image.alt.as_deref().unwrap_or_default())
                )
            })
            .collect::<Vec<_>>()
            .join("");
        format!("      <div class=\"scroller-row\">{imgs}</div>")
    };

    let mut out = String::from("    <section class=\"image-scroller\">\n");
    if !scroller.title.is_empty() {
        out.push_str(&format!("      <h2>{}</h2>\n", escape(&scroller.title)));
    }
    if !scroller.body.is_empty() {
        out.push_str(&format!("      <p>{}</p>\n", escape(&scroller.body)));
    }
    if !scroller.top_row.is_empty() {
        out.push_str(&row(&scroller.top_row));
        out.push('\n');
    }
    if !scroller.bottom_row.is_empty() {
        out.push_str(&row(&scroller.bottom_row));
        out.push('\n');
    }
    out.push_str("    </section>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::home::{DEFAULT_HERO_TITLE, shape_home};

    #[test]
    fn test_empty_store_renders_complete_page() {
        let html = home_page(&shape_home(None, Vec::new()));

        // The fallback hero is present and the layout is complete
        assert!(html.contains(DEFAULT_HERO_TITLE));
        assert!(html.contains("Ready to move with us?"));
        assert!(html.contains("data-endpoint=\"/api/contact\""));
        assert!(html.contains("data-endpoint=\"/api/join-influencer\""));
        // Absent sections collapse instead of rendering empty shells
        assert!(!html.contains("logo-rows"));
        assert!(!html.contains("image-scroller"));
    }

    #[test]
    fn test_authored_sections_render() {
        let doc = serde_json::from_value(serde_json::json!({
            "heroTitle": "Creators who move culture",
            "topRowLogos": [{"url": "https://cdn.example.com/logo.svg", "alt": "Acme"}],
            "sellingPoints": [
                {"number": 120.0, "label": "Creators", "suffix": "+", "icon": "users"}
            ],
        }))
        .unwrap();
        let html = home_page(&shape_home(Some(doc), Vec::new()));

        assert!(html.contains("Creators who move culture"));
        assert!(html.contains("logo-row"));
        assert!(html.contains("120"));
        assert!(html.contains("Creators"));
    }

    #[test]
    fn test_no_unexpanded_placeholders() {
        let html = home_page(&shape_home(None, Vec::new()));
        for token in [
            "{hero_title}",
            "{hero_button}",
            "{logo_rows}",
            "{featured}",
            "{stats}",
            "{scroller}",
            "{contact_forms}",
        ] {
            assert!(!html.contains(token), "unexpanded {token}");
        }
    }
}
