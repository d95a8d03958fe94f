//! Content schema definitions.
//!
//! Declares, for each content type, its fields and validation rules:
//! the source of truth for what the query catalog may request. Validation
//! runs at authoring time (the `check` subcommand), never in the
//! rendering path; a document that fails validation still renders through
//! the assemblers' fallbacks.
//!
//! Referential integrity is deliberately not checked: a deleted
//! influencer leaves handle-based links dangling until the next build.

use serde_json::Value;
use std::fmt;

// ============================================================================
// Specs
// ============================================================================

/// Field value categories, as the store types them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Text,
    RichText,
    Number,
    Boolean,
    Url,
    Image,
    Slug,
    Array,
    Object,
}

/// A single validation rule.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    Required,
    /// String length ceiling.
    MaxLength(usize),
    /// Numeric floor.
    Min(i64),
    /// Enumerated value list.
    OneOf(&'static [&'static str]),
}

/// How a violated rule is surfaced to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One declared field of a content type.
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub rules: &'static [(Rule, Severity)],
}

/// One content type.
pub struct TypeSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

const REQUIRED: (Rule, Severity) = (Rule::Required, Severity::Error);
const NON_NEGATIVE: (Rule, Severity) = (Rule::Min(0), Severity::Error);

/// Valid `pageType` values; singleton-rendered types take the first match.
pub const PAGE_TYPES: &[&str] = &[
    "homepage", "about", "services", "events", "terms", "privacy",
];

pub const PAGES: TypeSpec = TypeSpec {
    name: "pages",
    title: "Pages",
    fields: &[
        FieldSpec { name: "title", kind: FieldKind::String, rules: &[REQUIRED] },
        FieldSpec { name: "slug", kind: FieldKind::Slug, rules: &[] },
        FieldSpec {
            name: "pageType",
            kind: FieldKind::String,
            rules: &[REQUIRED, (Rule::OneOf(PAGE_TYPES), Severity::Error)],
        },
        FieldSpec { name: "heroSection", kind: FieldKind::Object, rules: &[] },
        FieldSpec { name: "logosSection", kind: FieldKind::Object, rules: &[] },
        FieldSpec { name: "statsSection", kind: FieldKind::Object, rules: &[] },
        FieldSpec { name: "imageScroller", kind: FieldKind::Object, rules: &[] },
        FieldSpec { name: "servicesList", kind: FieldKind::Array, rules: &[] },
        FieldSpec { name: "eventsTitle", kind: FieldKind::String, rules: &[] },
        FieldSpec { name: "eventsDescription", kind: FieldKind::Text, rules: &[] },
        FieldSpec { name: "eventsServices", kind: FieldKind::Array, rules: &[] },
        FieldSpec { name: "content", kind: FieldKind::RichText, rules: &[] },
        FieldSpec { name: "seo", kind: FieldKind::Object, rules: &[] },
    ],
};

pub const INFLUENCER: TypeSpec = TypeSpec {
    name: "influencer",
    title: "Influencer",
    fields: &[
        FieldSpec { name: "featured", kind: FieldKind::Boolean, rules: &[] },
        FieldSpec { name: "image", kind: FieldKind::Image, rules: &[REQUIRED] },
        FieldSpec { name: "name", kind: FieldKind::String, rules: &[REQUIRED] },
        FieldSpec {
            name: "description",
            kind: FieldKind::String,
            rules: &[(Rule::MaxLength(160), Severity::Warning)],
        },
        FieldSpec { name: "about", kind: FieldKind::RichText, rules: &[] },
        FieldSpec { name: "handle", kind: FieldKind::String, rules: &[REQUIRED] },
        FieldSpec { name: "instagramFollowers", kind: FieldKind::Number, rules: &[NON_NEGATIVE] },
        FieldSpec { name: "tiktokFollowers", kind: FieldKind::Number, rules: &[NON_NEGATIVE] },
        FieldSpec { name: "youtubeFollowers", kind: FieldKind::Number, rules: &[NON_NEGATIVE] },
        FieldSpec { name: "facebookFollowers", kind: FieldKind::Number, rules: &[NON_NEGATIVE] },
        FieldSpec { name: "facebookLink", kind: FieldKind::Url, rules: &[] },
        FieldSpec { name: "instagramLink", kind: FieldKind::Url, rules: &[] },
        FieldSpec { name: "tiktokLink", kind: FieldKind::Url, rules: &[] },
        FieldSpec { name: "youtubeLink", kind: FieldKind::Url, rules: &[] },
    ],
};

pub const EVENT: TypeSpec = TypeSpec {
    name: "event",
    title: "Events",
    fields: &[
        FieldSpec { name: "title", kind: FieldKind::String, rules: &[REQUIRED] },
        FieldSpec { name: "mainImage", kind: FieldKind::Image, rules: &[] },
        FieldSpec { name: "eventDate", kind: FieldKind::String, rules: &[] },
        FieldSpec { name: "location", kind: FieldKind::String, rules: &[] },
        FieldSpec { name: "summary", kind: FieldKind::Text, rules: &[] },
        FieldSpec { name: "description", kind: FieldKind::Text, rules: &[] },
        FieldSpec { name: "featured", kind: FieldKind::Boolean, rules: &[] },
        FieldSpec { name: "stats", kind: FieldKind::Array, rules: &[] },
    ],
};

pub const FOOTER: TypeSpec = TypeSpec {
    name: "footer",
    title: "Footer",
    fields: &[
        FieldSpec { name: "aboutText", kind: FieldKind::Text, rules: &[] },
        FieldSpec { name: "socialLinksHeading", kind: FieldKind::String, rules: &[] },
        FieldSpec { name: "socialLinks", kind: FieldKind::Object, rules: &[] },
        FieldSpec { name: "newsletterHeading", kind: FieldKind::String, rules: &[] },
        FieldSpec { name: "newsletterEnabled", kind: FieldKind::Boolean, rules: &[] },
        FieldSpec { name: "copyrightText", kind: FieldKind::String, rules: &[] },
    ],
};

pub const MENU: TypeSpec = TypeSpec {
    name: "menu",
    title: "Menus",
    fields: &[
        FieldSpec { name: "title", kind: FieldKind::String, rules: &[REQUIRED] },
        FieldSpec { name: "links", kind: FieldKind::Array, rules: &[] },
    ],
};

/// All declared content types.
pub const REGISTRY: &[&TypeSpec] = &[&PAGES, &INFLUENCER, &EVENT, &FOOTER, &MENU];

/// All declared content types, in studio order.
pub fn registry() -> &'static [&'static TypeSpec] {
    REGISTRY
}

// ============================================================================
// Validation
// ============================================================================

/// A single rule violation in one document.
#[derive(Debug)]
pub struct Violation {
    pub doc_type: &'static str,
    pub field: &'static str,
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}.{}: {}",
            self.severity, self.doc_type, self.field, self.message
        )
    }
}

/// Validate one document against its type spec.
pub fn validate(spec: &TypeSpec, doc: &Value) -> Vec<Violation> {
    let mut violations = Vec::new();

    for field in spec.fields {
        let value = doc.get(field.name);
        let present = value.is_some_and(|v| !v.is_null());

        for (rule, severity) in field.rules {
            match rule {
                Rule::Required if !present => violations.push(Violation {
                    doc_type: spec.name,
                    field: field.name,
                    severity: *severity,
                    message: "required field is missing".into(),
                }),
                Rule::MaxLength(max) => {
                    if let Some(text) = value.and_then(Value::as_str)
                        && text.chars().count() > *max
                    {
                        violations.push(Violation {
                            doc_type: spec.name,
                            field: field.name,
                            severity: *severity,
                            message: format!("must be {max} characters or less"),
                        });
                    }
                }
                Rule::Min(min) => {
                    if let Some(n) = value.and_then(Value::as_i64)
                        && n < *min
                    {
                        violations.push(Violation {
                            doc_type: spec.name,
                            field: field.name,
                            severity: *severity,
                            message: format!("must be at least {min}"),
                        });
                    }
                }
                Rule::OneOf(allowed) => {
                    if let Some(text) = value.and_then(Value::as_str)
                        && !allowed.contains(&text)
                    {
                        violations.push(Violation {
                            doc_type: spec.name,
                            field: field.name,
                            severity: *severity,
                            message: format!("`{text}` is not one of {allowed:?}"),
                        });
                    }
                }
                Rule::Required => {}
            }
        }

        // URL fields must look like URLs whenever present.
        if field.kind == FieldKind::Url
            && let Some(text) = value.and_then(Value::as_str)
            && !(text.starts_with("https://") || text.starts_with("http://"))
        {
            violations.push(Violation {
                doc_type: spec.name,
                field: field.name,
                severity: Severity::Error,
                message: "must be an absolute http(s) URL".into(),
            });
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_influencer_passes() {
        let doc = json!({
            "name": "Jane Doe",
            "handle": "jane.doe",
            "image": {"asset": {"_ref": "image-x-1x1-jpg"}},
            "description": "Lifestyle creator",
            "instagramFollowers": 120000,
            "instagramLink": "https://instagram.com/jane.doe",
        });
        assert!(validate(&INFLUENCER, &doc).is_empty());
    }

    #[test]
    fn test_missing_required_fields_are_errors() {
        let doc = json!({ "description": "no name, handle, or image" });
        let violations = validate(&INFLUENCER, &doc);

        let errors: Vec<_> = violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
            .map(|v| v.field)
            .collect();
        assert!(errors.contains(&"name"));
        assert!(errors.contains(&"handle"));
        assert!(errors.contains(&"image"));
    }

    #[test]
    fn test_long_description_is_a_warning() {
        let doc = json!({
            "name": "Jane",
            "handle": "jane",
            "image": {},
            "description": "x".repeat(200),
        });
        let violations = validate(&INFLUENCER, &doc);
        let warning = violations
            .iter()
            .find(|v| v.field == "description")
            .unwrap();
        assert_eq!(warning.severity, Severity::Warning);
        assert!(warning.message.contains("160"));
    }

    #[test]
    fn test_negative_followers_are_errors() {
        let doc = json!({
            "name": "Jane",
            "handle": "jane",
            "image": {},
            "tiktokFollowers": -5,
        });
        let violations = validate(&INFLUENCER, &doc);
        assert!(violations
            .iter()
            .any(|v| v.field == "tiktokFollowers" && v.severity == Severity::Error));
    }

    #[test]
    fn test_invalid_page_type_is_error() {
        let doc = json!({ "title": "Landing", "pageType": "landing" });
        let violations = validate(&PAGES, &doc);
        assert!(violations
            .iter()
            .any(|v| v.field == "pageType" && v.message.contains("landing")));
    }

    #[test]
    fn test_relative_url_is_error() {
        let doc = json!({
            "name": "Jane",
            "handle": "jane",
            "image": {},
            "instagramLink": "instagram.com/jane",
        });
        let violations = validate(&INFLUENCER, &doc);
        assert!(violations.iter().any(|v| v.field == "instagramLink"));
    }

    #[test]
    fn test_registry_covers_all_document_types() {
        let names: Vec<_> = registry().iter().map(|spec| spec.name).collect();
        assert_eq!(names, vec!["pages", "influencer", "event", "footer", "menu"]);
    }
}
