//! Services page assembler.

use super::{SeoView, shape_seo};
use crate::{
    config::cfg,
    content::{ContentClient, FetchOptions, query, types::ServicesPage},
    log,
    render::icons,
};

pub const DEFAULT_SERVICES_TITLE: &str = "Our Services";

/// One service card.
#[derive(Debug, Clone)]
pub struct ServiceCard {
    pub title: String,
    pub description: String,
    pub icon_svg: &'static str,
    pub image_url: Option<String>,
}

/// The services page view model.
#[derive(Debug, Clone)]
pub struct ServicesView {
    pub title: String,
    pub services: Vec<ServiceCard>,
    pub seo: SeoView,
}

/// Shape the services page; entries without a title are dropped, unknown
/// icons resolve to the fallback glyph.
pub fn shape_services(doc: Option<ServicesPage>) -> ServicesView {
    let doc = doc.unwrap_or_default();

    let title = doc
        .title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_SERVICES_TITLE.to_string());

    let services = doc
        .services_list
        .into_iter()
        .filter_map(|service| {
            Some(ServiceCard {
                title: service.title.filter(|t| !t.is_empty())?,
                description: service.description.unwrap_or_default(),
                icon_svg: icons::resolve(service.icon.as_deref().unwrap_or("").trim()),
                image_url: service.image_url.filter(|u| !u.is_empty()),
            })
        })
        .collect();

    ServicesView {
        seo: shape_seo(
            doc.seo,
            &format!("{title} | Brand Link"),
            "Talent management, brand partnerships, and campaign production by Brand Link.",
        ),
        title,
        services,
    }
}

/// Fetch and shape the services page. Fetch failure → default copy.
pub async fn assemble_services(client: &ContentClient) -> ServicesView {
    let doc = client
        .fetch_one::<ServicesPage>(
            &query::SERVICES_PAGE,
            &[],
            FetchOptions::revalidate(cfg().build.revalidate),
        )
        .await
        .unwrap_or_else(|e| {
            log!("content"; "services page fetch failed: {e:#}");
            None
        });
    shape_services(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::icons;
    use serde_json::json;

    #[test]
    fn test_missing_document_falls_back() {
        let view = shape_services(None);
        assert_eq!(view.title, DEFAULT_SERVICES_TITLE);
        assert!(view.services.is_empty());
        assert!(view.seo.title.contains("Our Services"));
    }

    #[test]
    fn test_services_shaping() {
        let doc: ServicesPage = serde_json::from_value(json!({
            "title": "What we do",
            "servicesList": [
                {"title": "Campaigns", "description": "End-to-end", "icon": "megaphone"},
                {"title": "Untitled icon", "icon": "not-a-real-icon"},
                {"description": "orphan, dropped"},
            ],
        }))
        .unwrap();

        let view = shape_services(Some(doc));
        assert_eq!(view.title, "What we do");
        assert_eq!(view.services.len(), 2);
        assert_eq!(view.services[0].icon_svg, icons::MEGAPHONE);
        assert_eq!(view.services[1].icon_svg, icons::HELP_CIRCLE);
    }
}
