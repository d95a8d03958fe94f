//! `[base]` section configuration.
//!
//! Contains basic site information like title, description, base URL, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in brandlink.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "Brand Link"
/// description = "Influencer talent agency"
/// url = "https://brandlinkagency.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title displayed in browser tab and meta tags.
    #[serde(default = "defaults::base::title")]
    #[educe(Default = defaults::base::title())]
    pub title: String,

    /// Site description for SEO meta tags; also the meta-description
    /// fallback when a page carries no SEO overrides.
    #[serde(default = "defaults::base::description")]
    #[educe(Default = defaults::base::description())]
    pub description: String,

    /// Base URL for absolute links in the sitemap.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// BCP 47 language code (e.g., "en-US").
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,

    /// Copyright notice fallback when the footer document carries none.
    /// A literal `{year}` token is substituted at render time.
    #[serde(default = "defaults::base::copyright")]
    #[educe(Default = defaults::base::copyright())]
    pub copyright: String,
}
