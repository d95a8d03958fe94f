//! Typed shapes of content-store query results.
//!
//! Every field that the store could legitimately omit is optional or
//! defaulted; absence is a normal outcome handled by the assemblers, not
//! an error. Field names mirror the query projections (camelCase).

use serde::Deserialize;
use serde_json::Value;

// ============================================================================
// Influencer
// ============================================================================

/// An influencer document, as projected by the talent queries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Influencer {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    /// Public routing key; documents without one cannot be linked.
    pub handle: Option<String>,
    /// Short description, soft-capped at 160 chars at authoring time.
    pub description: Option<String>,
    /// Rich-text bio blocks.
    pub about: Option<Value>,
    pub image_url: Option<String>,
    pub instagram_followers: Option<u64>,
    pub tiktok_followers: Option<u64>,
    pub youtube_followers: Option<u64>,
    pub facebook_followers: Option<u64>,
    pub instagram_link: Option<String>,
    pub tiktok_link: Option<String>,
    pub youtube_link: Option<String>,
    pub facebook_link: Option<String>,
    pub featured: Option<bool>,
}

// ============================================================================
// Event
// ============================================================================

/// A `{value, label}` statistic pair shown on event cards.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub value: Option<String>,
    pub label: Option<String>,
}

/// An event document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub event_date: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub featured: Option<bool>,
    pub stats: Vec<Stat>,
}

// ============================================================================
// Navigation and footer
// ============================================================================

/// One navigation entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MenuLink {
    pub label: Option<String>,
    pub href: Option<String>,
}

/// A named menu document (`Main Menu`, `Footer Menu`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Menu {
    pub title: Option<String>,
    pub links: Vec<MenuLink>,
}

/// Per-platform profile URLs in the footer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub tiktok: Option<String>,
    pub linkedin: Option<String>,
    pub youtube: Option<String>,
}

/// The footer singleton.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Footer {
    pub about_text: Option<String>,
    pub social_links_heading: Option<String>,
    pub social_links: Option<SocialLinks>,
    pub newsletter_heading: Option<String>,
    pub newsletter_enabled: Option<bool>,
    /// May contain a literal `{year}` token.
    pub copyright_text: Option<String>,
}

// ============================================================================
// Pages
// ============================================================================

/// SEO overrides carried by page documents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Seo {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub share_image: Option<String>,
    pub keywords: Vec<String>,
}

/// A logo-row image on the homepage.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogoImage {
    pub url: Option<String>,
    pub alt: Option<String>,
}

/// An image-scroller entry on the homepage.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScrollerImage {
    pub url: Option<String>,
    pub alt: Option<String>,
    pub ratio: Option<String>,
}

/// A stats-section selling point (`120`, `Creators`, `+`, icon name).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SellingPoint {
    pub number: Option<f64>,
    pub label: Option<String>,
    pub suffix: Option<String>,
    pub icon: Option<String>,
}

/// The homepage document, flattened by the homepage query.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomePage {
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_button_text: Option<String>,
    pub hero_button_url: Option<String>,
    pub hero_image_url: Option<String>,
    pub top_row_logos: Vec<LogoImage>,
    pub bottom_row_logos: Vec<LogoImage>,
    pub stats_title: Option<String>,
    pub selling_points: Vec<SellingPoint>,
    pub top_row_images: Vec<ScrollerImage>,
    pub bottom_row_images: Vec<ScrollerImage>,
    pub image_scroller_title: Option<String>,
    pub image_scroller_body: Option<String>,
    pub show_image_scroller: Option<bool>,
    pub seo: Option<Seo>,
}

/// One entry of the services list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceItem {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Content-authored icon name, resolved through the closed icon table.
    pub icon: Option<String>,
    pub image_url: Option<String>,
}

/// The services page document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServicesPage {
    pub title: Option<String>,
    pub services_list: Vec<ServiceItem>,
    pub seo: Option<Seo>,
}

/// One service block on the events page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventsService {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// The events page copy document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventsPage {
    pub events_title: Option<String>,
    pub events_description: Option<String>,
    pub events_services: Vec<EventsService>,
}

/// A rich-text page (about, terms, privacy).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentPage {
    pub title: Option<String>,
    /// Portable-text blocks.
    pub content: Option<Value>,
    pub seo: Option<Seo>,
}
