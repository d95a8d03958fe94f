//! Sitemap generation.
//!
//! Generates a sitemap.xml listing every rendered route for search
//! engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://brandlinkagency.com/talent-directory/</loc>
//!   </url>
//! </urlset>
//! ```

use crate::{config::SiteConfig, log, utils::minify};
use anyhow::{Context, Result};
use std::fs;

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build sitemap.xml if enabled in config.
///
/// `routes` are absolute site paths (`/`, `/events/`, …); the 404 page is
/// excluded by the caller.
pub fn build_sitemap(config: &SiteConfig, routes: &[String]) -> Result<()> {
    if !config.build.sitemap {
        return Ok(());
    }
    let Some(base_url) = config.base.url.as_deref() else {
        log!("warn"; "[base.url] is unset, skipping sitemap generation");
        return Ok(());
    };

    let xml = sitemap_xml(base_url, routes);
    let xml = minify::xml(xml.as_bytes(), config);

    let path = config.build.output.join("sitemap.xml");
    fs::write(&path, &*xml)
        .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

    log!("sitemap"; "{} routes", routes.len());
    Ok(())
}

/// Generate the sitemap XML string.
fn sitemap_xml(base_url: &str, routes: &[String]) -> String {
    let base = base_url.trim_end_matches('/');
    let mut xml = String::with_capacity(256 + routes.len() * 64);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<urlset xmlns=\"{SITEMAP_NS}\">\n"));
    for route in routes {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&format!("{base}{route}"))));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
