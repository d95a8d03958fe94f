//! URL-safe route segments for influencer handles.
//!
//! Handles are authored in the content store as social handles (`@jane.doe`,
//! `Jana Müller`) and double as routing keys. Route segments must be ASCII,
//! lowercase, and free of path-hostile characters.

use deunicode::deunicode;

/// Convert a content-authored handle to a URL-safe route segment.
///
/// - leading `@` is dropped
/// - unicode is transliterated to ASCII
/// - whitespace runs collapse to a single `-`
/// - anything outside `[a-z0-9._-]` is dropped
pub fn handle_segment(handle: &str) -> String {
    let ascii = deunicode(handle.trim().trim_start_matches('@'));

    let mut out = String::with_capacity(ascii.len());
    let mut pending_dash = false;
    for c in ascii.chars() {
        if c.is_whitespace() {
            pending_dash = !out.is_empty();
            continue;
        }
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
            if pending_dash {
                out.push('-');
                pending_dash = false;
            }
            out.push(c);
        }
    }
    out
}
