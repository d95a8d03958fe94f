//! Page data assemblers.
//!
//! For each page type: a pure `shape_*` function from raw query results
//! to a view model, plus an async `assemble_*` wrapper that performs the
//! fetches, catches and logs failures, and applies the canonical fallback
//! defaults. The rule throughout: **a page always renders a complete,
//! non-empty layout**, even when the store returns partial or no data.

pub mod chrome;
pub mod events;
pub mod home;
pub mod legal;
pub mod services;
pub mod talent;

pub use chrome::ChromeView;

use crate::content::types::Seo;

/// Head metadata for one page, fallbacks already applied.
#[derive(Debug, Clone)]
pub struct SeoView {
    pub title: String,
    pub description: String,
    pub share_image: Option<String>,
    pub keywords: Vec<String>,
}

/// Apply per-page SEO overrides over the given fallbacks.
pub fn shape_seo(seo: Option<Seo>, fallback_title: &str, fallback_description: &str) -> SeoView {
    let seo = seo.unwrap_or_default();
    SeoView {
        title: seo
            .meta_title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| fallback_title.to_string()),
        description: seo
            .meta_description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| fallback_description.to_string()),
        share_image: seo.share_image.filter(|u| !u.is_empty()),
        keywords: seo.keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_seo_fallbacks() {
        let seo = shape_seo(None, "Brand Link", "Talent agency");
        assert_eq!(seo.title, "Brand Link");
        assert_eq!(seo.description, "Talent agency");
        assert!(seo.share_image.is_none());
        assert!(seo.keywords.is_empty());
    }

    #[test]
    fn test_shape_seo_overrides() {
        let seo = shape_seo(
            Some(Seo {
                meta_title: Some("Custom".into()),
                meta_description: None,
                share_image: Some("https://cdn.example.com/share.jpg".into()),
                keywords: vec!["talent".into()],
            }),
            "Fallback",
            "Fallback description",
        );
        assert_eq!(seo.title, "Custom");
        assert_eq!(seo.description, "Fallback description");
        assert!(seo.share_image.is_some());
        assert_eq!(seo.keywords, vec!["talent"]);
    }

    #[test]
    fn test_shape_seo_empty_strings_fall_back() {
        let seo = shape_seo(
            Some(Seo {
                meta_title: Some(String::new()),
                ..Default::default()
            }),
            "Fallback",
            "Description",
        );
        assert_eq!(seo.title, "Fallback");
    }
}
