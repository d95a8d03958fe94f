//! Rich-text block normalization.
//!
//! The store delivers long-form copy as portable-text blocks. Views need
//! either plain text (meta descriptions, previews) or HTML (legal pages,
//! profile bios). Unknown block types and marks are skipped, never an
//! error; authoring experiments must not break rendering.

use crate::utils::html::escape;
use serde_json::Value;

/// Walk blocks and concatenate span text into plain text.
///
/// Blocks are separated by blank lines; non-text blocks are skipped.
pub fn to_plain_text(blocks: &Value) -> String {
    let Some(blocks) = blocks.as_array() else {
        return String::new();
    };

    let mut out = Vec::new();
    for block in blocks {
        if block.get("_type").and_then(Value::as_str) != Some("block") {
            continue;
        }
        let text = span_text(block);
        if !text.is_empty() {
            out.push(text);
        }
    }
    out.join("\n\n")
}

/// Render blocks to HTML.
///
/// Supported styles: `normal`, `h2`–`h4`, `blockquote`; consecutive
/// bullet/number list items are grouped into one list element. Supported
/// marks: `strong`, `em`, `underline`, and `link` mark definitions.
pub fn to_html(blocks: &Value) -> String {
    let Some(blocks) = blocks.as_array() else {
        return String::new();
    };

    let mut out = String::new();
    let mut open_list: Option<&str> = None;

    for block in blocks {
        if block.get("_type").and_then(Value::as_str) != Some("block") {
            continue;
        }

        let list_kind = block.get("listItem").and_then(Value::as_str).map(|kind| {
            if kind == "number" { "ol" } else { "ul" }
        });

        // Close or switch the open list when the block kind changes.
        if open_list != list_kind {
            if let Some(tag) = open_list.take() {
                out.push_str(&format!("</{tag}>\n"));
            }
            if let Some(tag) = list_kind {
                out.push_str(&format!("<{tag}>\n"));
                open_list = Some(tag);
            }
        }

        let inner = spans_html(block);
        if list_kind.is_some() {
            out.push_str(&format!("<li>{inner}</li>\n"));
            continue;
        }

        let tag = match block.get("style").and_then(Value::as_str) {
            Some("h1") | Some("h2") => "h2",
            Some("h3") => "h3",
            Some("h4") => "h4",
            Some("blockquote") => "blockquote",
            _ => "p",
        };
        if inner.is_empty() {
            continue;
        }
        out.push_str(&format!("<{tag}>{inner}</{tag}>\n"));
    }

    if let Some(tag) = open_list {
        out.push_str(&format!("</{tag}>\n"));
    }
    out
}

/// Concatenate the raw text of a block's spans.
fn span_text(block: &Value) -> String {
    let Some(children) = block.get("children").and_then(Value::as_array) else {
        return String::new();
    };
    children
        .iter()
        .filter_map(|child| child.get("text").and_then(Value::as_str))
        .collect()
}

/// Render a block's spans with marks applied.
fn spans_html(block: &Value) -> String {
    let Some(children) = block.get("children").and_then(Value::as_array) else {
        return String::new();
    };
    let mark_defs = block
        .get("markDefs")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let mut out = String::new();
    for child in children {
        let Some(text) = child.get("text").and_then(Value::as_str) else {
            continue;
        };
        let mut fragment = escape(text);

        if let Some(marks) = child.get("marks").and_then(Value::as_array) {
            for mark in marks.iter().filter_map(Value::as_str) {
                fragment = apply_mark(fragment, mark, mark_defs);
            }
        }
        out.push_str(&fragment);
    }
    out
}

fn apply_mark(fragment: String, mark: &str, mark_defs: &[Value]) -> String {
    match mark {
        "strong" => format!("<strong>{fragment}</strong>"),
        "em" => format!("<em>{fragment}</em>"),
        "underline" => format!("<u>{fragment}</u>"),
        key => {
            // Keyed marks reference a definition; only links are rendered.
            let def = mark_defs
                .iter()
                .find(|def| def.get("_key").and_then(Value::as_str) == Some(key));
            match def {
                Some(def) if def.get("_type").and_then(Value::as_str) == Some("link") => {
                    let href = def.get("href").and_then(Value::as_str).unwrap_or("#");
                    format!(r#"<a href="{}">{fragment}</a>"#, escape(href))
                }
                _ => fragment,
            }
        }
    }
}
