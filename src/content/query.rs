//! The query catalog: every read this system performs against the
//! content store, as named, parameterized GROQ templates.
//!
//! Each query is structurally bound to one page or component's needs and
//! projects exactly the fields that view consumes. All queries are
//! read-only; a `null` result or empty array is a normal outcome that
//! callers must treat as absence, not failure.

use serde_json::Value;

/// A named, read-only query template.
#[derive(Debug, Clone, Copy)]
pub struct Query {
    /// Stable name, used for logging and cache keys.
    pub name: &'static str,
    /// GROQ template. Parameters appear as `$name` placeholders and are
    /// transmitted out-of-band, never spliced into the text.
    pub groq: &'static str,
}

/// Parameter list for one execution: `$name` → JSON value.
pub type Params<'a> = &'a [(&'static str, Value)];

// ============================================================================
// Talent
// ============================================================================

/// Full talent directory.
pub const ALL_INFLUENCERS: Query = Query {
    name: "all_influencers",
    groq: r#"*[_type == "influencer"]{
  _id,
  name,
  handle,
  description,
  "imageUrl": image.asset->url,
  facebookFollowers,
  instagramFollowers,
  tiktokFollowers,
  youtubeFollowers
}"#,
};

/// Homepage grid: featured only, strongest Instagram reach first.
pub const FEATURED_INFLUENCERS: Query = Query {
    name: "featured_influencers",
    groq: r#"*[_type == "influencer" && featured == true] | order(instagramFollowers desc){
  _id,
  name,
  handle,
  description,
  "imageUrl": image.asset->url,
  facebookFollowers,
  instagramFollowers,
  tiktokFollowers,
  youtubeFollowers
}"#,
};

/// Single profile lookup by routing key. Requires `$handle`.
pub const INFLUENCER_BY_HANDLE: Query = Query {
    name: "influencer_by_handle",
    groq: r#"*[_type == "influencer" && handle == $handle][0]{
  _id,
  name,
  handle,
  about,
  description,
  "imageUrl": image.asset->url,
  instagramFollowers,
  tiktokFollowers,
  youtubeFollowers,
  instagramLink,
  tiktokLink,
  youtubeLink
}"#,
};

/// "Other influencers" rail: top ten by Instagram reach, excluding the
/// current profile. Requires `$handle`.
pub const OTHER_INFLUENCERS: Query = Query {
    name: "other_influencers",
    groq: r#"*[_type == "influencer" && handle != $handle] | order(instagramFollowers desc)[0...10]{
  _id,
  name,
  handle,
  "imageUrl": image.asset->url,
  instagramFollowers
}"#,
};

/// Route derivation: the set of valid handles for static generation.
pub const ALL_HANDLES: Query = Query {
    name: "all_handles",
    groq: r#"*[_type == "influencer" && defined(handle)].handle"#,
};

// ============================================================================
// Events
// ============================================================================

/// Events showcase, featured first, then most recent.
pub const EVENTS_LIST: Query = Query {
    name: "events_list",
    groq: r#"*[_type == "event"] | order(featured desc, eventDate desc){
  _id,
  title,
  "imageUrl": mainImage.asset->url,
  eventDate,
  location,
  summary,
  description,
  featured,
  stats[]{ value, label }
}"#,
};

// ============================================================================
// Pages
// ============================================================================

/// The homepage singleton, flattened to what the home view consumes.
pub const HOME_PAGE: Query = Query {
    name: "home_page",
    groq: r#"*[_type == "pages" && pageType == "homepage"][0]{
  "heroTitle": heroSection.heroTitle,
  "heroSubtitle": heroSection.heroSubtitle,
  "heroButtonText": heroSection.heroButtonText,
  "heroButtonUrl": heroSection.heroButtonUrl,
  "heroImageUrl": heroSection.heroImage.asset->url,
  "topRowLogos": logosSection.topRowLogos[]{ "url": asset->url, alt },
  "bottomRowLogos": logosSection.bottomRowLogos[]{ "url": asset->url, alt },
  "statsTitle": statsSection.sectionTitle,
  "sellingPoints": statsSection.sellingPoints[]{ number, label, suffix, icon },
  "topRowImages": imageScroller.topRowImages[]{ "url": asset->url, alt, ratio },
  "bottomRowImages": imageScroller.bottomRowImages[]{ "url": asset->url, alt, ratio },
  "imageScrollerTitle": imageScroller.title,
  "imageScrollerBody": imageScroller.body,
  "showImageScroller": imageScroller.enabled,
  seo{ metaTitle, metaDescription, "shareImage": shareImage.asset->url, keywords }
}"#,
};

/// The services page singleton.
pub const SERVICES_PAGE: Query = Query {
    name: "services_page",
    groq: r#"*[_type == "pages" && pageType == "services"][0]{
  title,
  servicesList[]{ title, description, icon, "imageUrl": image.asset->url },
  seo{ metaTitle, metaDescription, "shareImage": shareImage.asset->url, keywords }
}"#,
};

/// The events page copy singleton.
pub const EVENTS_PAGE: Query = Query {
    name: "events_page",
    groq: r#"*[_type == "pages" && pageType == "events"][0]{
  eventsTitle,
  eventsDescription,
  eventsServices[]{ title, description }
}"#,
};

/// A rich-text page by type (about, terms, privacy). Requires `$pageType`.
pub const CONTENT_PAGE: Query = Query {
    name: "content_page",
    groq: r#"*[_type == "pages" && pageType == $pageType][0]{
  title,
  content,
  seo{ metaTitle, metaDescription, "shareImage": shareImage.asset->url, keywords }
}"#,
};

/// All page documents of one type; used by the authoring-time `check`
/// command to flag singleton violations. Requires `$pageType`.
pub const PAGES_OF_TYPE: Query = Query {
    name: "pages_of_type",
    groq: r#"*[_type == "pages" && pageType == $pageType]{ _id, title, pageType }"#,
};

/// Raw documents of a type, for authoring-time validation. Requires `$type`.
pub const DOCUMENTS_OF_TYPE: Query = Query {
    name: "documents_of_type",
    groq: r#"*[_type == $type]"#,
};

// ============================================================================
// Chrome
// ============================================================================

/// The footer singleton.
pub const FOOTER: Query = Query {
    name: "footer",
    groq: r#"*[_type == "footer"][0]{
  aboutText,
  socialLinksHeading,
  socialLinks{ instagram, facebook, twitter, tiktok, linkedin, youtube },
  newsletterHeading,
  newsletterEnabled,
  copyrightText
}"#,
};

/// A menu document by its fixed title. Requires `$title`.
pub const MENU_BY_TITLE: Query = Query {
    name: "menu_by_title",
    groq: r#"*[_type == "menu" && title == $title][0]{
  title,
  links[]{ label, href }
}"#,
};

/// Title of the primary navigation menu document.
pub const MAIN_MENU_TITLE: &str = "Main Menu";
/// Title of the footer navigation menu document.
pub const FOOTER_MENU_TITLE: &str = "Footer Menu";

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &[Query] = &[
        ALL_INFLUENCERS,
        FEATURED_INFLUENCERS,
        INFLUENCER_BY_HANDLE,
        OTHER_INFLUENCERS,
        ALL_HANDLES,
        EVENTS_LIST,
        HOME_PAGE,
        SERVICES_PAGE,
        EVENTS_PAGE,
        CONTENT_PAGE,
        PAGES_OF_TYPE,
        DOCUMENTS_OF_TYPE,
        FOOTER,
        MENU_BY_TITLE,
    ];

    #[test]
    fn test_catalog_names_are_unique() {
        let mut names: Vec<_> = CATALOG.iter().map(|q| q.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn test_no_query_performs_writes() {
        // GROQ mutations never appear in this catalog; every template is a
        // filter expression.
        for query in CATALOG {
            assert!(query.groq.trim_start().starts_with('*'), "{}", query.name);
        }
    }

    #[test]
    fn test_parameterized_queries_declare_placeholders() {
        assert!(INFLUENCER_BY_HANDLE.groq.contains("$handle"));
        assert!(OTHER_INFLUENCERS.groq.contains("$handle"));
        assert!(CONTENT_PAGE.groq.contains("$pageType"));
        assert!(MENU_BY_TITLE.groq.contains("$title"));
    }
}
