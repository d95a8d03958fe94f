//! Rich-text page renderer (about, terms, privacy).

use crate::{assemble::legal::ContentPageView, utils::html::escape};

const CONTENT_TEMPLATE: &str = include_str!("../embed/content_page.html");

/// A rich-text page's content.
pub fn content_page(view: &ContentPageView) -> String {
    CONTENT_TEMPLATE
        .replace("{body}", &view.body_html)
        .replace("{title}", &escape(&view.title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::legal::shape_content_page;
    use serde_json::json;

    #[test]
    fn test_placeholder_body_for_missing_document() {
        let html = content_page(&shape_content_page(None, "Privacy Policy"));
        assert!(html.contains("<h1>Privacy Policy</h1>"));
        assert!(html.contains("being updated"));
    }

    #[test]
    fn test_rich_text_body() {
        let doc = serde_json::from_value(json!({
            "title": "Terms & Conditions",
            "content": [
                {"_type": "block", "children": [{"text": "Use of this site…"}]}
            ],
        }))
        .unwrap();
        let html = content_page(&shape_content_page(Some(doc), "Terms"));

        assert!(html.contains("Terms &amp; Conditions"));
        assert!(html.contains("<p>Use of this site…</p>"));
    }
}
