//! Rich-text page assembler (about, terms, privacy).

use super::{SeoView, shape_seo};
use crate::{
    config::cfg,
    content::{ContentClient, FetchOptions, portable_text, query, types::ContentPage},
    log,
};
use serde_json::json;

const DEFAULT_BODY: &str = "<p>This page is being updated. Please check back soon.</p>\n";

/// A rendered rich-text page.
#[derive(Debug, Clone)]
pub struct ContentPageView {
    pub title: String,
    pub body_html: String,
    pub seo: SeoView,
}

/// Shape a rich-text page; a missing or empty document renders the
/// default title and placeholder body, never an empty layout.
pub fn shape_content_page(doc: Option<ContentPage>, default_title: &str) -> ContentPageView {
    let doc = doc.unwrap_or_default();

    let title = doc
        .title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| default_title.to_string());

    let body_html = doc
        .content
        .as_ref()
        .map(portable_text::to_html)
        .filter(|html| !html.is_empty())
        .unwrap_or_else(|| DEFAULT_BODY.to_string());

    let description = doc
        .content
        .as_ref()
        .map(portable_text::to_plain_text)
        .filter(|text| !text.is_empty())
        .map(|text| truncate_description(&text))
        .unwrap_or_else(|| format!("{title} — Brand Link Agency"));

    ContentPageView {
        seo: shape_seo(doc.seo, &format!("{title} | Brand Link"), &description),
        title,
        body_html,
    }
}

/// Meta descriptions use the first sentence-ish slice of the body text.
fn truncate_description(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or(text);
    if first_line.chars().count() <= 160 {
        return first_line.to_string();
    }
    let truncated: String = first_line.chars().take(157).collect();
    format!("{}…", truncated.trim_end())
}

/// Fetch and shape a page by its type (`about`, `terms`, `privacy`).
pub async fn assemble_content_page(
    client: &ContentClient,
    page_type: &str,
    default_title: &str,
) -> ContentPageView {
    let doc = client
        .fetch_one::<ContentPage>(
            &query::CONTENT_PAGE,
            &[("pageType", json!(page_type))],
            FetchOptions::revalidate(cfg().build.revalidate),
        )
        .await
        .unwrap_or_else(|e| {
            log!("content"; "{page_type} page fetch failed: {e:#}");
            None
        });
    shape_content_page(doc, default_title)
}
