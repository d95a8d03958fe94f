//! Lead-submission field validation.
//!
//! Mirrors the inline rules shown to visitors: required fields, minimum
//! lengths, email and phone formats, and the consent flag. Validation
//! gates submission; failures surface per-field and block the send.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Digits plus the separators people actually type; at least ten chars.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\d\s()+-]{10,}$").unwrap());

/// One failed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

// ============================================================================
// Contact form
// ============================================================================

/// A contact-form submission body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub budget: Option<String>,
    pub message: String,
    pub terms: bool,
}

/// Validate a contact submission; empty result means it may be sent.
pub fn validate_contact(submission: &ContactSubmission) -> Vec<FieldError> {
    let mut errors = Vec::new();

    check_name(&mut errors, "firstName", &submission.first_name, "First name must be at least 2 characters");
    check_name(&mut errors, "lastName", &submission.last_name, "Last name must be at least 2 characters");
    check_email(&mut errors, &submission.email);
    check_phone(&mut errors, &submission.phone);
    if submission.message.trim().chars().count() < 10 {
        errors.push(FieldError::new(
            "message",
            "Message must be at least 10 characters",
        ));
    }
    check_terms(&mut errors, submission.terms);

    errors
}

// ============================================================================
// Influencer application
// ============================================================================

/// An influencer-application submission body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub instagram: Option<String>,
    pub tiktok: Option<String>,
    pub youtube: Option<String>,
    pub followers: String,
    pub niche: String,
    pub about: String,
    pub terms: bool,
}

/// One step of the application wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    /// Basic info: names, email, phone.
    Basics,
    /// Social handles, reach, and niche.
    Social,
    /// Free-text about plus consent.
    About,
}

impl Step {
    pub const fn number(self) -> u8 {
        match self {
            Self::Basics => 1,
            Self::Social => 2,
            Self::About => 3,
        }
    }
}

/// Validate only the fields belonging to one wizard step.
pub fn validate_step(step: Step, submission: &ApplicationSubmission) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match step {
        Step::Basics => {
            check_name(&mut errors, "firstName", &submission.first_name, "First name must be at least 2 characters");
            check_name(&mut errors, "lastName", &submission.last_name, "Last name must be at least 2 characters");
            check_email(&mut errors, &submission.email);
            check_phone(&mut errors, &submission.phone);
        }
        Step::Social => {
            if let Some(instagram) = submission.instagram.as_deref()
                && !instagram.is_empty()
                && instagram.trim().chars().count() < 3
            {
                errors.push(FieldError::new(
                    "instagram",
                    "Please enter your Instagram handle",
                ));
            }
            if submission.followers.trim().is_empty() {
                errors.push(FieldError::new(
                    "followers",
                    "Please specify your follower count",
                ));
            }
            if submission.niche.trim().is_empty() {
                errors.push(FieldError::new("niche", "Please select your content niche"));
            }
        }
        Step::About => {
            let len = submission.about.trim().chars().count();
            if len < 10 {
                errors.push(FieldError::new("about", "Please tell us more about yourself"));
            } else if len > 500 {
                errors.push(FieldError::new("about", "Maximum 500 characters"));
            }
            check_terms(&mut errors, submission.terms);
        }
    }

    errors
}

/// Validate the whole application, step by step, in wizard order.
pub fn validate_application(submission: &ApplicationSubmission) -> Vec<FieldError> {
    [Step::Basics, Step::Social, Step::About]
        .into_iter()
        .flat_map(|step| validate_step(step, submission))
        .collect()
}

// ============================================================================
// Shared checks
// ============================================================================

fn check_name(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    message: &'static str,
) {
    if value.trim().chars().count() < 2 {
        errors.push(FieldError::new(field, message));
    }
}

fn check_email(errors: &mut Vec<FieldError>, value: &str) {
    if !EMAIL_RE.is_match(value.trim()) {
        errors.push(FieldError::new(
            "email",
            "Please enter a valid email address",
        ));
    }
}

fn check_phone(errors: &mut Vec<FieldError>, value: &str) {
    if !PHONE_RE.is_match(value.trim()) {
        errors.push(FieldError::new(
            "phone",
            "Please enter a valid phone number",
        ));
    }
}

fn check_terms(errors: &mut Vec<FieldError>, accepted: bool) {
    if !accepted {
        errors.push(FieldError::new(
            "terms",
            "You must agree to the terms and conditions",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_contact() -> ContactSubmission {
        ContactSubmission {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            phone: "0123 456 789".into(),
            budget: Some("15,000".into()),
            message: "We'd like a creator campaign for Q4.".into(),
            terms: true,
        }
    }

    fn valid_application() -> ApplicationSubmission {
        ApplicationSubmission {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            phone: "0123 456 789".into(),
            instagram: Some("jane.doe".into()),
            tiktok: None,
            youtube: None,
            followers: "120000".into(),
            niche: "Lifestyle".into(),
            about: "Ten years creating lifestyle content.".into(),
            terms: true,
        }
    }

    #[test]
    fn test_valid_contact_passes() {
        assert!(validate_contact(&valid_contact()).is_empty());
    }

    #[test]
    fn test_contact_requires_fields() {
        let errors = validate_contact(&ContactSubmission::default());
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        for field in ["firstName", "lastName", "email", "phone", "message", "terms"] {
            assert!(fields.contains(&field), "missing error for {field}");
        }
    }

    #[test]
    fn test_contact_budget_is_optional() {
        let mut submission = valid_contact();
        submission.budget = None;
        assert!(validate_contact(&submission).is_empty());
    }

    #[test]
    fn test_email_format() {
        let mut submission = valid_contact();
        for bad in ["plainaddress", "a@b", "a b@c.com", "@example.com"] {
            submission.email = bad.into();
            assert!(
                validate_contact(&submission)
                    .iter()
                    .any(|e| e.field == "email"),
                "{bad} accepted"
            );
        }
        submission.email = "name+tag@sub.example.co".into();
        assert!(validate_contact(&submission).is_empty());
    }

    #[test]
    fn test_phone_format() {
        let mut submission = valid_contact();
        submission.phone = "12345".into();
        assert!(validate_contact(&submission)
            .iter()
            .any(|e| e.field == "phone"));

        submission.phone = "+1 (555) 123-4567".into();
        assert!(validate_contact(&submission).is_empty());
    }

    #[test]
    fn test_step_validation_is_local() {
        // Step 2 errors must not surface while validating step 1.
        let submission = ApplicationSubmission {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            phone: "0123 456 789".into(),
            ..Default::default()
        };
        assert!(validate_step(Step::Basics, &submission).is_empty());
        assert!(!validate_step(Step::Social, &submission).is_empty());
    }

    #[test]
    fn test_optional_handles_validated_when_present() {
        let mut submission = valid_application();
        submission.instagram = Some("ab".into());
        assert!(validate_step(Step::Social, &submission)
            .iter()
            .any(|e| e.field == "instagram"));

        submission.instagram = None;
        assert!(validate_step(Step::Social, &submission).is_empty());
    }

    #[test]
    fn test_about_length_bounds() {
        let mut submission = valid_application();
        submission.about = "Too short".into();
        assert!(validate_step(Step::About, &submission)
            .iter()
            .any(|e| e.field == "about"));

        submission.about = "x".repeat(501);
        assert!(validate_step(Step::About, &submission)
            .iter()
            .any(|e| e.message == "Maximum 500 characters"));
    }

    #[test]
    fn test_validate_application_covers_all_steps() {
        let errors = validate_application(&ApplicationSubmission::default());
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert!(fields.contains(&"email"));
        assert!(fields.contains(&"followers"));
        assert!(fields.contains(&"terms"));

        assert!(validate_application(&valid_application()).is_empty());
    }
}
