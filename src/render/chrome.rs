//! Page shell: head metadata, header navigation, and the footer.

use super::{format, icons};
use crate::{
    assemble::{ChromeView, SeoView, chrome::NavLink},
    config::cfg,
    theme,
    utils::html::{escape, escape_attr},
};

/// Page shell template (embedded at compile time)
const BASE_TEMPLATE: &str = include_str!("../embed/base.html");

/// Footer template (embedded at compile time)
const FOOTER_TEMPLATE: &str = include_str!("../embed/footer.html");

/// Bind a rendered content fragment into the full page shell.
pub fn render_page(chrome: &ChromeView, seo: &SeoView, content: &str) -> String {
    let config = cfg();

    // Content is substituted last so tokens inside store-authored text
    // are never re-expanded.
    BASE_TEMPLATE
        .replace("{lang}", &config.base.language)
        .replace("{theme}", theme::current().as_attr())
        .replace("{icon_sun}", icons::SUN)
        .replace("{icon_moon}", icons::MOON)
        .replace("{head_meta}", &head_meta(seo))
        .replace("{nav_links}", &nav_links(&chrome.main_menu))
        .replace("{footer}", &footer_html(chrome))
        .replace("{title}", &escape(&seo.title))
        .replace("{description}", &escape_attr(&seo.description))
        .replace("{content}", content)
}

/// Social-share and keyword meta tags.
fn head_meta(seo: &SeoView) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  <meta property=\"og:title\" content=\"{}\">\n",
        escape_attr(&seo.title)
    ));
    out.push_str(&format!(
        "  <meta property=\"og:description\" content=\"{}\">\n",
        escape_attr(&seo.description)
    ));
    if let Some(image) = &seo.share_image {
        out.push_str(&format!(
            "  <meta property=\"og:image\" content=\"{}\">\n",
            escape_attr(image)
        ));
    }
    if !seo.keywords.is_empty() {
        out.push_str(&format!(
            "  <meta name=\"keywords\" content=\"{}\">\n",
            escape_attr(&seo.keywords.join(", "))
        ));
    }
    out
}

fn nav_links(links: &[NavLink]) -> String {
    links
        .iter()
        .map(|link| {
            format!(
                "        <a href=\"{}\">{}</a>",
                escape_attr(&link.href),
                escape(&link.label)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn footer_html(chrome: &ChromeView) -> String {
    let footer = &chrome.footer;

    let social_links = footer
        .socials
        .iter()
        .map(|social| {
            format!(
                "          <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"{}\">{}</a>",
                escape_attr(&social.url),
                escape_attr(social.platform),
                icons::resolve(social.platform)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let newsletter = if footer.newsletter_enabled {
        format!(
            "      <div class=\"footer-newsletter\">\n        <h4>{}</h4>\n        <form class=\"newsletter-form\">\n          <input type=\"email\" placeholder=\"Email\" required>\n          <button class=\"button\" type=\"submit\">Subscribe</button>\n        </form>\n      </div>",
            escape(&footer.newsletter_heading)
        )
    } else {
        String::new()
    };

    let copyright = format::substitute_year(&footer.copyright_template, format::current_year());

    FOOTER_TEMPLATE
        .replace("{about_text}", &escape(&footer.about_text))
        .replace("{social_heading}", &escape(&footer.social_heading))
        .replace("{social_links}", &social_links)
        .replace("{nav_links}", &footer_nav(&chrome.main_menu))
        .replace("{newsletter}", &newsletter)
        .replace("{footer_menu}", &footer_nav(&chrome.footer_menu))
        .replace("{copyright}", &escape(&copyright))
}

fn footer_nav(links: &[NavLink]) -> String {
    links
        .iter()
        .map(|link| {
            format!(
                "        <a href=\"{}\">{}</a>",
                escape_attr(&link.href),
                escape(&link.label)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::chrome::shape_chrome;

    fn seo() -> SeoView {
        SeoView {
            title: "Brand Link".into(),
            description: "Talent agency".into(),
            share_image: None,
            keywords: vec![],
        }
    }

    #[test]
    fn test_render_page_is_complete_html() {
        let chrome = shape_chrome(None, None, None);
        let html = render_page(&chrome, &seo(), "<p>hello</p>");

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>Brand Link</title>"));
        assert!(html.contains("<p>hello</p>"));
        assert!(html.contains("site.css"));
        assert!(html.contains("site.js"));
        // No unexpanded placeholders remain
        for token in ["{lang}", "{title}", "{content}", "{footer}", "{nav_links}"] {
            assert!(!html.contains(token), "unexpanded {token}");
        }
    }

    #[test]
    fn test_footer_substitutes_year() {
        let chrome = shape_chrome(None, None, None);
        let html = render_page(&chrome, &seo(), "");

        assert!(!html.contains("{year}"));
        assert!(html.contains(&format::current_year().to_string()));
    }

    #[test]
    fn test_nav_escapes_labels() {
        let links = vec![NavLink {
            label: "A & B".into(),
            href: "/a\"b/".into(),
        }];
        let html = nav_links(&links);
        assert!(html.contains("A &amp; B"));
        assert!(html.contains("&quot;"));
    }

    #[test]
    fn test_newsletter_block_respects_toggle() {
        let mut chrome = shape_chrome(None, None, None);
        chrome.footer.newsletter_enabled = false;
        let html = render_page(&chrome, &seo(), "");
        assert!(!html.contains("newsletter-form"));

        chrome.footer.newsletter_enabled = true;
        let html = render_page(&chrome, &seo(), "");
        assert!(html.contains("newsletter-form"));
    }
}
