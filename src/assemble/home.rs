//! Homepage assembler.
//!
//! The homepage binds the hero, client logo rows, the stats section, the
//! image scroller, and the featured-talent grid. Every section has a
//! canonical fallback; the page renders complete even when the store
//! returns nothing at all.

use super::{SeoView, shape_seo, talent::InfluencerCard};
use crate::{
    config::cfg,
    content::{
        ContentClient, FetchOptions,
        query,
        types::{HomePage, Influencer, LogoImage, ScrollerImage},
    },
    log,
    render::icons,
};

pub const DEFAULT_HERO_TITLE: &str = "Brand Link - Built to Link, Made to Move";
pub const DEFAULT_HERO_SUBTITLE: &str =
    "The influencer talent agency connecting brands with creators who move culture.";

/// The hero section, fallbacks applied.
#[derive(Debug, Clone)]
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
    /// `(text, url)`; rendered only when both were authored.
    pub button: Option<(String, String)>,
    pub image_url: Option<String>,
}

/// One stats-section selling point, display-ready.
#[derive(Debug, Clone)]
pub struct SellingPointView {
    pub number_label: String,
    pub suffix: String,
    pub label: String,
    pub icon_svg: &'static str,
}

/// The image scroller section (only present when enabled and non-empty).
#[derive(Debug, Clone)]
pub struct ScrollerView {
    pub title: String,
    pub body: String,
    pub top_row: Vec<ScrollerImage>,
    pub bottom_row: Vec<ScrollerImage>,
}

/// The homepage view model.
#[derive(Debug, Clone)]
pub struct HomeView {
    pub hero: HeroView,
    pub logos_top: Vec<LogoImage>,
    pub logos_bottom: Vec<LogoImage>,
    pub stats_title: String,
    pub selling_points: Vec<SellingPointView>,
    pub scroller: Option<ScrollerView>,
    pub featured: Vec<InfluencerCard>,
    pub seo: SeoView,
}

/// Shape the homepage from its document and the featured grid.
pub fn shape_home(doc: Option<HomePage>, featured: Vec<Influencer>) -> HomeView {
    let doc = doc.unwrap_or_default();

    let hero = HeroView {
        title: doc
            .hero_title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_HERO_TITLE.to_string()),
        subtitle: doc
            .hero_subtitle
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_HERO_SUBTITLE.to_string()),
        button: doc
            .hero_button_text
            .filter(|t| !t.is_empty())
            .zip(doc.hero_button_url.filter(|u| !u.is_empty())),
        image_url: doc.hero_image_url.filter(|u| !u.is_empty()),
    };

    let selling_points = doc
        .selling_points
        .iter()
        .filter_map(|point| {
            let label = point.label.clone().filter(|l| !l.is_empty())?;
            Some(SellingPointView {
                number_label: point
                    .number
                    .map(format_point_number)
                    .unwrap_or_else(|| "0".to_string()),
                suffix: point.suffix.clone().unwrap_or_default(),
                label,
                icon_svg: icons::resolve(point.icon.as_deref().unwrap_or("")),
            })
        })
        .collect();

    let scroller = match doc.show_image_scroller {
        Some(false) => None,
        _ => {
            let top_row = with_urls(doc.top_row_images);
            let bottom_row = with_urls(doc.bottom_row_images);
            (!top_row.is_empty() || !bottom_row.is_empty()).then(|| ScrollerView {
                title: doc.image_scroller_title.unwrap_or_default(),
                body: doc.image_scroller_body.unwrap_or_default(),
                top_row,
                bottom_row,
            })
        }
    };

    HomeView {
        seo: shape_seo(doc.seo, &hero.title, &hero.subtitle),
        hero,
        logos_top: doc
            .top_row_logos
            .into_iter()
            .filter(|l| l.url.as_deref().is_some_and(|u| !u.is_empty()))
            .collect(),
        logos_bottom: doc
            .bottom_row_logos
            .into_iter()
            .filter(|l| l.url.as_deref().is_some_and(|u| !u.is_empty()))
            .collect(),
        stats_title: doc
            .stats_title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "Why Brand Link".to_string()),
        selling_points,
        scroller,
        featured: featured.iter().filter_map(InfluencerCard::from_doc).collect(),
    }
}

/// Selling-point numbers are authored as plain numbers; render integers
/// without a trailing `.0`.
fn format_point_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

fn with_urls(images: Vec<ScrollerImage>) -> Vec<ScrollerImage> {
    images
        .into_iter()
        .filter(|img| img.url.as_deref().is_some_and(|u| !u.is_empty()))
        .collect()
}

/// Fetch the homepage document and featured grid concurrently and shape
/// them. Failures are logged and fall back.
pub async fn assemble_home(client: &ContentClient) -> HomeView {
    let options = FetchOptions::revalidate(cfg().build.revalidate);

    let (doc, featured) = tokio::join!(
        client.fetch_one::<HomePage>(&query::HOME_PAGE, &[], options),
        client.fetch_many::<Influencer>(&query::FEATURED_INFLUENCERS, &[], options),
    );

    let doc = doc.unwrap_or_else(|e| {
        log!("content"; "homepage fetch failed: {e:#}");
        None
    });
    let featured = featured.unwrap_or_else(|e| {
        log!("content"; "featured influencers fetch failed: {e:#}");
        Vec::new()
    });

    shape_home(doc, featured)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_document_falls_back_to_default_hero() {
        let view = shape_home(None, Vec::new());

        assert_eq!(view.hero.title, DEFAULT_HERO_TITLE);
        assert_eq!(view.hero.subtitle, DEFAULT_HERO_SUBTITLE);
        assert!(view.hero.button.is_none());
        assert!(view.featured.is_empty());
        // The page still carries meaningful head metadata
        assert_eq!(view.seo.title, DEFAULT_HERO_TITLE);
    }

    #[test]
    fn test_authored_hero_wins() {
        let doc: HomePage = serde_json::from_value(json!({
            "heroTitle": "Creators who move culture",
            "heroButtonText": "Work with us",
            "heroButtonUrl": "/services/",
        }))
        .unwrap();
        let view = shape_home(Some(doc), Vec::new());

        assert_eq!(view.hero.title, "Creators who move culture");
        assert_eq!(
            view.hero.button,
            Some(("Work with us".to_string(), "/services/".to_string()))
        );
    }

    #[test]
    fn test_button_requires_both_fields() {
        let doc: HomePage = serde_json::from_value(json!({
            "heroButtonText": "Work with us",
        }))
        .unwrap();
        assert!(shape_home(Some(doc), Vec::new()).hero.button.is_none());
    }

    #[test]
    fn test_selling_points_resolve_icons_and_numbers() {
        let doc: HomePage = serde_json::from_value(json!({
            "sellingPoints": [
                {"number": 120.0, "label": "Creators", "suffix": "+", "icon": "users"},
                {"number": 4.5, "label": "Avg. rating", "icon": "star"},
                {"label": ""},
            ],
        }))
        .unwrap();
        let view = shape_home(Some(doc), Vec::new());

        assert_eq!(view.selling_points.len(), 2);
        assert_eq!(view.selling_points[0].number_label, "120");
        assert_eq!(view.selling_points[0].suffix, "+");
        assert_eq!(view.selling_points[1].number_label, "4.5");
    }

    #[test]
    fn test_scroller_respects_enabled_flag() {
        let doc: HomePage = serde_json::from_value(json!({
            "showImageScroller": false,
            "topRowImages": [{"url": "https://cdn.example.com/a.jpg"}],
        }))
        .unwrap();
        assert!(shape_home(Some(doc), Vec::new()).scroller.is_none());

        let doc: HomePage = serde_json::from_value(json!({
            "topRowImages": [{"url": "https://cdn.example.com/a.jpg"}],
        }))
        .unwrap();
        assert!(shape_home(Some(doc), Vec::new()).scroller.is_some());
    }

    #[test]
    fn test_scroller_absent_when_no_images() {
        let doc: HomePage = serde_json::from_value(json!({
            "imageScrollerTitle": "On set",
        }))
        .unwrap();
        assert!(shape_home(Some(doc), Vec::new()).scroller.is_none());
    }

    #[test]
    fn test_featured_grid_drops_unlinkable_entries() {
        let featured: Vec<Influencer> = vec![
            serde_json::from_value(json!({"name": "Linked", "handle": "linked"})).unwrap(),
            serde_json::from_value(json!({"name": "No handle"})).unwrap(),
        ];
        let view = shape_home(None, featured);
        assert_eq!(view.featured.len(), 1);
        assert_eq!(view.featured[0].handle, "linked");
    }
}
