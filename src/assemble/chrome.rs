//! Shared page chrome: navigation menus and the footer.
//!
//! Fetched once per build and bound into every rendered page. Missing
//! menu or footer documents fall back to the canonical navigation set so
//! the chrome never renders empty.

use crate::{
    config::cfg,
    content::{
        ContentClient, FetchOptions,
        query,
        types::{Footer, Menu},
    },
    log,
};
use serde_json::json;

/// One resolved navigation entry.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// One footer social link.
#[derive(Debug, Clone)]
pub struct SocialLink {
    /// Platform key, also the icon name.
    pub platform: &'static str,
    pub url: String,
}

/// Footer view model, fallbacks applied.
#[derive(Debug, Clone)]
pub struct FooterView {
    pub about_text: String,
    pub social_heading: String,
    pub socials: Vec<SocialLink>,
    pub newsletter_heading: String,
    pub newsletter_enabled: bool,
    /// May still contain the `{year}` token; substituted at render time.
    pub copyright_template: String,
}

/// Chrome shared by all pages.
#[derive(Debug, Clone)]
pub struct ChromeView {
    pub main_menu: Vec<NavLink>,
    pub footer_menu: Vec<NavLink>,
    pub footer: FooterView,
}

pub const DEFAULT_SOCIAL_HEADING: &str = "Follow Us";
pub const DEFAULT_NEWSLETTER_HEADING: &str = "Join Our List";
pub const DEFAULT_ABOUT_TEXT: &str =
    "The influencer talent agency connecting brands with creators who move culture.";
pub const DEFAULT_COPYRIGHT: &str = "© {year} Brand Link Agency. All rights reserved.";

/// Canonical navigation, used when the menu documents are missing.
fn default_main_menu() -> Vec<NavLink> {
    [
        ("Home", "/"),
        ("Talent Directory", "/talent-directory/"),
        ("Events", "/events/"),
        ("Services", "/services/"),
        ("About", "/about/"),
    ]
    .into_iter()
    .map(|(label, href)| NavLink {
        label: label.to_string(),
        href: href.to_string(),
    })
    .collect()
}

fn default_footer_menu() -> Vec<NavLink> {
    [
        ("Terms & Conditions", "/terms-conditions/"),
        ("Privacy Policy", "/privacy-policy/"),
    ]
    .into_iter()
    .map(|(label, href)| NavLink {
        label: label.to_string(),
        href: href.to_string(),
    })
    .collect()
}

/// Shape the chrome from raw documents, applying every fallback.
pub fn shape_chrome(
    footer: Option<Footer>,
    main_menu: Option<Menu>,
    footer_menu: Option<Menu>,
) -> ChromeView {
    let footer = footer.unwrap_or_default();

    let socials = footer
        .social_links
        .map(|links| {
            [
                ("instagram", links.instagram),
                ("facebook", links.facebook),
                ("twitter", links.twitter),
                ("tiktok", links.tiktok),
                ("linkedin", links.linkedin),
                ("youtube", links.youtube),
            ]
            .into_iter()
            .filter_map(|(platform, url)| {
                url.filter(|u| !u.is_empty())
                    .map(|url| SocialLink { platform, url })
            })
            .collect()
        })
        .unwrap_or_default();

    ChromeView {
        main_menu: menu_links(main_menu).unwrap_or_else(default_main_menu),
        footer_menu: menu_links(footer_menu).unwrap_or_else(default_footer_menu),
        footer: FooterView {
            about_text: footer
                .about_text
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_ABOUT_TEXT.to_string()),
            social_heading: footer
                .social_links_heading
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_SOCIAL_HEADING.to_string()),
            socials,
            newsletter_heading: footer
                .newsletter_heading
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_NEWSLETTER_HEADING.to_string()),
            // Shown unless explicitly disabled in the studio.
            newsletter_enabled: footer.newsletter_enabled != Some(false),
            copyright_template: footer
                .copyright_text
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_COPYRIGHT.to_string()),
        },
    }
}

/// Resolve a menu document into links, dropping incomplete entries.
/// `None` when the document is missing or has no usable links.
fn menu_links(menu: Option<Menu>) -> Option<Vec<NavLink>> {
    let links: Vec<NavLink> = menu?
        .links
        .into_iter()
        .filter_map(|link| {
            Some(NavLink {
                label: link.label.filter(|l| !l.is_empty())?,
                href: link.href.filter(|h| !h.is_empty())?,
            })
        })
        .collect();
    (!links.is_empty()).then_some(links)
}

/// Fetch the three chrome documents concurrently and shape them.
pub async fn assemble_chrome(client: &ContentClient) -> ChromeView {
    let options = FetchOptions::revalidate(cfg().build.revalidate);

    let main_menu_params = [("title", json!(query::MAIN_MENU_TITLE))];
    let footer_menu_params = [("title", json!(query::FOOTER_MENU_TITLE))];

    let (footer, main_menu, footer_menu) = tokio::join!(
        client.fetch_one::<Footer>(&query::FOOTER, &[], options),
        client.fetch_one::<Menu>(
            &query::MENU_BY_TITLE,
            &main_menu_params,
            options,
        ),
        client.fetch_one::<Menu>(
            &query::MENU_BY_TITLE,
            &footer_menu_params,
            options,
        ),
    );

    let footer = footer.unwrap_or_else(|e| {
        log!("content"; "footer fetch failed: {e:#}");
        None
    });
    let main_menu = main_menu.unwrap_or_else(|e| {
        log!("content"; "main menu fetch failed: {e:#}");
        None
    });
    let footer_menu = footer_menu.unwrap_or_else(|e| {
        log!("content"; "footer menu fetch failed: {e:#}");
        None
    });

    shape_chrome(footer, main_menu, footer_menu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::types::{MenuLink, SocialLinks};

    #[test]
    fn test_shape_chrome_all_missing_renders_complete_layout() {
        let chrome = shape_chrome(None, None, None);

        assert!(!chrome.main_menu.is_empty());
        assert!(!chrome.footer_menu.is_empty());
        assert_eq!(chrome.footer.social_heading, DEFAULT_SOCIAL_HEADING);
        assert_eq!(chrome.footer.newsletter_heading, DEFAULT_NEWSLETTER_HEADING);
        assert!(chrome.footer.newsletter_enabled);
        assert!(chrome.footer.copyright_template.contains("{year}"));
    }

    #[test]
    fn test_shape_chrome_socials_keep_platform_order() {
        let footer = Footer {
            social_links: Some(SocialLinks {
                youtube: Some("https://youtube.com/@brandlink".into()),
                instagram: Some("https://instagram.com/brandlink".into()),
                twitter: Some(String::new()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let chrome = shape_chrome(Some(footer), None, None);

        let platforms: Vec<_> = chrome
            .footer
            .socials
            .iter()
            .map(|s| s.platform)
            .collect();
        assert_eq!(platforms, vec!["instagram", "youtube"]);
    }

    #[test]
    fn test_shape_chrome_newsletter_explicit_disable() {
        let footer = Footer {
            newsletter_enabled: Some(false),
            ..Default::default()
        };
        let chrome = shape_chrome(Some(footer), None, None);
        assert!(!chrome.footer.newsletter_enabled);
    }

    #[test]
    fn test_menu_with_incomplete_links_falls_back() {
        let menu = Menu {
            title: Some("Main Menu".into()),
            links: vec![
                MenuLink {
                    label: Some("No href".into()),
                    href: None,
                },
                MenuLink {
                    label: None,
                    href: Some("/orphan/".into()),
                },
            ],
        };
        let chrome = shape_chrome(None, Some(menu), None);
        // Both entries are unusable → canonical default navigation
        assert_eq!(chrome.main_menu[0].label, "Home");
    }

    #[test]
    fn test_menu_links_resolved() {
        let menu = Menu {
            title: Some("Main Menu".into()),
            links: vec![MenuLink {
                label: Some("Talent".into()),
                href: Some("/talent-directory/".into()),
            }],
        };
        let chrome = shape_chrome(None, Some(menu), None);
        assert_eq!(chrome.main_menu.len(), 1);
        assert_eq!(chrome.main_menu[0].href, "/talent-directory/");
    }
}
