//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── fetch_snapshot() ──► async fan-out over the query catalog
//!     │       (chrome, home, directory, events, services, legal pages,
//!     │        one profile per handle; handles derived first)
//!     │
//!     ├── render + write each route in parallel (rayon)
//!     │
//!     ├── write embedded assets (site.css, site.js)
//!     │
//!     └── build_sitemap() for every rendered route
//! ```
//!
//! A fetch failure never aborts the build: assemblers fall back so every
//! page still renders a complete layout.

use crate::{
    assemble::{
        self, ChromeView,
        events::EventsView,
        home::HomeView,
        legal::ContentPageView,
        services::ServicesView,
        talent::{DirectoryView, ProfileView},
    },
    config::{SiteConfig, cfg},
    content::{ContentClient, client},
    generator::sitemap::build_sitemap,
    log,
    logger::Progress,
    render,
    utils::minify,
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{fs, path::Path};

/// Embedded stylesheet, copied into the output on every build.
const SITE_CSS: &str = include_str!("embed/site.css");
/// Embedded client script.
const SITE_JS: &str = include_str!("embed/site.js");

/// Everything fetched for one build, shaped and fallback-applied.
struct SiteSnapshot {
    chrome: ChromeView,
    home: HomeView,
    directory: DirectoryView,
    profiles: Vec<ProfileView>,
    events: EventsView,
    services: ServicesView,
    about: ContentPageView,
    terms: ContentPageView,
    privacy: ContentPageView,
}

/// One rendered route.
struct Route {
    /// Site path (`/`, `/events/`, `/talent-directory/jane/`).
    path: String,
    html: String,
}

/// Build the entire site into the output directory.
pub fn build_site() -> Result<()> {
    let config = cfg();
    prepare_output(&config)?;

    let client = client::shared()?;
    log!("fetch"; "loading content from {}", config.store()?.project_id);

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let snapshot = runtime.block_on(fetch_snapshot(client));
    log!(
        "fetch";
        "{} influencers, {} events",
        snapshot.directory.influencers.len(),
        snapshot.events.events.len()
    );

    let routes = render_routes(&snapshot);
    let progress = Progress::new("render", routes.len());
    routes
        .par_iter()
        .try_for_each(|route| -> Result<()> {
            write_route(&config, route)?;
            progress.inc();
            Ok(())
        })?;
    progress.finish();

    write_assets(&config)?;

    let paths: Vec<String> = routes
        .iter()
        .map(|r| r.path.clone())
        .filter(|p| p != "/404.html")
        .collect();
    build_sitemap(&config, &paths)?;

    log!("build"; "done, {} pages", routes.len());
    Ok(())
}

/// Fetch and assemble every view model for the site.
///
/// Independent pages fan out concurrently; profile assembly is
/// sequential per handle because the lookup parameterizes the
/// "other influencers" query.
async fn fetch_snapshot(client: &ContentClient) -> SiteSnapshot {
    let (chrome, home, directory, events, services, about, terms, privacy, handles) = tokio::join!(
        assemble::chrome::assemble_chrome(client),
        assemble::home::assemble_home(client),
        assemble::talent::assemble_directory(client),
        assemble::events::assemble_events(client),
        assemble::services::assemble_services(client),
        assemble::legal::assemble_content_page(client, "about", "About Us"),
        assemble::legal::assemble_content_page(client, "terms", "Terms & Conditions"),
        assemble::legal::assemble_content_page(client, "privacy", "Privacy Policy"),
        assemble::talent::routes(client),
    );

    let mut profiles = Vec::with_capacity(handles.len());
    for handle in &handles {
        // A handle that resolves to nothing is a not-found outcome; the
        // route is skipped rather than rendered broken.
        if let Some(profile) = assemble::talent::assemble_profile(client, handle).await {
            profiles.push(profile);
        } else {
            log!("warn"; "skipping profile for unresolved handle @{handle}");
        }
    }

    SiteSnapshot {
        chrome,
        home,
        directory,
        profiles,
        events,
        services,
        about,
        terms,
        privacy,
    }
}

/// Render every route of the site.
fn render_routes(snapshot: &SiteSnapshot) -> Vec<Route> {
    let chrome = &snapshot.chrome;
    fn page(chrome: &ChromeView, seo: &crate::assemble::SeoView, content: String) -> String {
        render::render_page(chrome, seo, &content)
    }

    let mut routes = vec![
        Route {
            path: "/".into(),
            html: page(chrome, &snapshot.home.seo, render::home::home_page(&snapshot.home)),
        },
        Route {
            path: "/talent-directory/".into(),
            html: page(
                chrome,
                &snapshot.directory.seo,
                render::talent::directory_page(&snapshot.directory),
            ),
        },
        Route {
            path: "/events/".into(),
            html: page(
                chrome,
                &snapshot.events.seo,
                render::events::events_page(&snapshot.events),
            ),
        },
        Route {
            path: "/services/".into(),
            html: page(
                chrome,
                &snapshot.services.seo,
                render::services::services_page(&snapshot.services),
            ),
        },
        Route {
            path: "/about/".into(),
            html: page(
                chrome,
                &snapshot.about.seo,
                render::content_page::content_page(&snapshot.about),
            ),
        },
        Route {
            path: "/terms-conditions/".into(),
            html: page(
                chrome,
                &snapshot.terms.seo,
                render::content_page::content_page(&snapshot.terms),
            ),
        },
        Route {
            path: "/privacy-policy/".into(),
            html: page(
                chrome,
                &snapshot.privacy.seo,
                render::content_page::content_page(&snapshot.privacy),
            ),
        },
        Route {
            path: "/404.html".into(),
            html: page(
                chrome,
                &assemble::shape_seo(None, "Not Found | Brand Link", "Page not found."),
                render::not_found::not_found_page(),
            ),
        },
    ];

    for profile in &snapshot.profiles {
        routes.push(Route {
            path: profile.route.clone(),
            html: page(chrome, &profile.seo, render::talent::profile_page(profile)),
        });
    }

    routes
}

/// Map a site path to its output file and write the (minified) page.
fn write_route(config: &SiteConfig, route: &Route) -> Result<()> {
    let relative = route.path.trim_start_matches('/');
    let file = if route.path.ends_with('/') {
        config.build.output.join(relative).join("index.html")
    } else {
        config.build.output.join(relative)
    };

    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let html = minify::html(route.html.as_bytes(), config);
    fs::write(&file, &*html).with_context(|| format!("Failed to write {}", file.display()))?;
    Ok(())
}

fn write_assets(config: &SiteConfig) -> Result<()> {
    let assets = config.build.output.join("assets");
    fs::create_dir_all(&assets)
        .with_context(|| format!("Failed to create {}", assets.display()))?;
    fs::write(assets.join("site.css"), SITE_CSS)?;
    fs::write(assets.join("site.js"), SITE_JS)?;
    Ok(())
}

/// Ensure the output directory exists; clear it first when `clean` is set.
fn prepare_output(config: &SiteConfig) -> Result<()> {
    let output: &Path = &config.build.output;
    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::{
        chrome::shape_chrome, events::shape_events, home::shape_home, legal::shape_content_page,
        services::shape_services, talent::shape_directory,
    };

    fn empty_snapshot() -> SiteSnapshot {
        SiteSnapshot {
            chrome: shape_chrome(None, None, None),
            home: shape_home(None, Vec::new()),
            directory: shape_directory(Vec::new()),
            profiles: Vec::new(),
            events: shape_events(None, Vec::new()),
            services: shape_services(None),
            about: shape_content_page(None, "About Us"),
            terms: shape_content_page(None, "Terms & Conditions"),
            privacy: shape_content_page(None, "Privacy Policy"),
        }
    }

    #[test]
    fn test_render_routes_covers_static_surface() {
        let routes = render_routes(&empty_snapshot());
        let paths: Vec<_> = routes.iter().map(|r| r.path.as_str()).collect();

        for expected in [
            "/",
            "/talent-directory/",
            "/events/",
            "/services/",
            "/about/",
            "/terms-conditions/",
            "/privacy-policy/",
            "/404.html",
        ] {
            assert!(paths.contains(&expected), "missing route {expected}");
        }
    }

    #[test]
    fn test_empty_store_renders_non_empty_pages() {
        for route in render_routes(&empty_snapshot()) {
            assert!(
                route.html.len() > 500,
                "route {} rendered suspiciously small",
                route.path
            );
            assert!(route.html.contains("</html>"));
        }
    }

    #[test]
    fn test_write_route_maps_paths() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.build.output = dir.path().to_path_buf();
        config.build.minify = false;

        write_route(
            &config,
            &Route {
                path: "/talent-directory/jane/".into(),
                html: "<html></html>".into(),
            },
        )
        .unwrap();
        write_route(
            &config,
            &Route {
                path: "/404.html".into(),
                html: "<html></html>".into(),
            },
        )
        .unwrap();

        assert!(dir.path().join("talent-directory/jane/index.html").is_file());
        assert!(dir.path().join("404.html").is_file());
    }
}
