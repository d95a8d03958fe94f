//! Output minification for rendered HTML and sitemap XML.
//!
//! Controlled by `[build].minify`; disabled output passes through untouched.

use crate::config::SiteConfig;
use std::borrow::Cow;

/// Minify an HTML page if enabled in config.
pub fn html<'a>(content: &'a [u8], config: &SiteConfig) -> Cow<'a, [u8]> {
    if !config.build.minify {
        return Cow::Borrowed(content);
    }

    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.minify_js = true;
    Cow::Owned(minify_html::minify(content, &cfg))
}

/// Minify XML by collapsing indentation whitespace.
pub fn xml<'a>(content: &'a [u8], config: &SiteConfig) -> Cow<'a, [u8]> {
    if !config.build.minify {
        return Cow::Borrowed(content);
    }

    let text = std::str::from_utf8(content).unwrap_or("");
    Cow::Owned(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("")
            .into_bytes(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn config_with_minify(enabled: bool) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.minify = enabled;
        config
    }

    #[test]
    fn test_html_disabled_passthrough() {
        let config = config_with_minify(false);
        let input = b"<html>  <body>   hi   </body>  </html>";
        assert!(matches!(html(input, &config), Cow::Borrowed(_)));
    }

    #[test]
    fn test_html_minifies_whitespace() {
        let config = config_with_minify(true);
        let out = html(b"<html><body>  <p>hi</p>  </body></html>", &config);
        let out = String::from_utf8(out.into_owned()).unwrap();
        assert!(out.contains("<p>hi</p>"));
        assert!(!out.contains("  <p>"));
    }

    #[test]
    fn test_xml_collapses_lines() {
        let config = config_with_minify(true);
        let out = xml(b"<urlset>\n  <url>\n    <loc>x</loc>\n  </url>\n</urlset>\n", &config);
        assert_eq!(&*out, b"<urlset><url><loc>x</loc></url></urlset>");
    }

    #[test]
    fn test_xml_disabled_passthrough() {
        let config = config_with_minify(false);
        let input = b"<a>\n  <b/>\n</a>";
        assert_eq!(&*xml(input, &config), input);
    }
}
