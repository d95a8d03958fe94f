//! Transactional-email submission.
//!
//! Builds the notification email for a validated lead and POSTs it to
//! the provider. The provider's JSON answer is passed back to the serve
//! layer, which wraps it in the `{success, data|error}` response shape.
//! Nothing here is retried automatically, and no submission is persisted.

use crate::{
    config::MailConfig,
    render::format::{format_currency, format_grouped},
    utils::html::escape,
};
use serde_json::{Value, json};
use std::time::Duration;
use thiserror::Error;

use super::validate::{ApplicationSubmission, ContactSubmission};

/// Provider endpoint.
const PROVIDER_URL: &str = "https://api.resend.com/emails";

/// Submission timeout; slower than this and the visitor should retry.
const SEND_TIMEOUT: Duration = Duration::from_secs(15);

/// Transport and provider failures.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("email provider API key is not configured")]
    MissingKey,

    #[error("email request failed")]
    Http(#[from] reqwest::Error),

    #[error("email provider rejected the message (HTTP {status}): {body}")]
    Provider { status: u16, body: String },
}

/// Sends lead notifications through the provider.
pub struct Mailer {
    http: reqwest::Client,
    config: MailConfig,
}

impl Mailer {
    pub fn new(config: MailConfig) -> Result<Self, SubmitError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("brandlink/", env!("CARGO_PKG_VERSION")))
            .timeout(SEND_TIMEOUT)
            .build()?;
        Ok(Self { http, config })
    }

    /// Whether sending is possible at all (key configured).
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Send a contact-form notification. Returns the provider's response
    /// body on success.
    pub async fn send_contact(&self, submission: &ContactSubmission) -> Result<Value, SubmitError> {
        self.send(
            &self.config.contact_to,
            "New Contact Form Submission",
            &contact_email_html(submission),
        )
        .await
    }

    /// Send an influencer-application notification.
    pub async fn send_application(
        &self,
        submission: &ApplicationSubmission,
    ) -> Result<Value, SubmitError> {
        self.send(
            &self.config.application_to,
            "New Influencer Application",
            &application_email_html(submission),
        )
        .await
    }

    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<Value, SubmitError> {
        let key = self.config.api_key.as_deref().ok_or(SubmitError::MissingKey)?;

        let response = self
            .http
            .post(PROVIDER_URL)
            .bearer_auth(key)
            .json(&json!({
                "from": self.config.from,
                "to": to,
                "subject": subject,
                "html": html,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Provider {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        Ok(response.json().await?)
    }
}

// ============================================================================
// Email bodies
// ============================================================================

fn contact_email_html(submission: &ContactSubmission) -> String {
    let budget = submission
        .budget
        .as_deref()
        .filter(|b| !b.trim().is_empty())
        .map(|b| format!("${}", format_currency(b)))
        .unwrap_or_else(|| "Not specified".to_string());
    let message = if submission.message.trim().is_empty() {
        "No message provided".to_string()
    } else {
        escape(&submission.message)
    };

    format!(
        "<h2>New Contact Form Submission</h2>\n\
         <p><strong>Name:</strong> {first} {last}</p>\n\
         <p><strong>Email:</strong> {email}</p>\n\
         <p><strong>Phone:</strong> {phone}</p>\n\
         <p><strong>Budget:</strong> {budget}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{message}</p>",
        first = escape(&submission.first_name),
        last = escape(&submission.last_name),
        email = escape(&submission.email),
        phone = escape(&submission.phone),
        budget = escape(&budget),
    )
}

fn application_email_html(submission: &ApplicationSubmission) -> String {
    let mut socials = String::new();
    if let Some(instagram) = handle_value(&submission.instagram) {
        socials.push_str(&format!(
            "<li><strong>Instagram:</strong> @{}</li>",
            escape(instagram)
        ));
    }
    if let Some(tiktok) = handle_value(&submission.tiktok) {
        socials.push_str(&format!(
            "<li><strong>TikTok:</strong> @{}</li>",
            escape(tiktok)
        ));
    }
    if let Some(youtube) = handle_value(&submission.youtube) {
        socials.push_str(&format!(
            "<li><strong>YouTube:</strong> {}</li>",
            escape(youtube)
        ));
    }

    let followers: u64 = submission
        .followers
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .unwrap_or(0);
    let about = if submission.about.trim().is_empty() {
        "No information provided".to_string()
    } else {
        escape(&submission.about)
    };

    format!(
        "<h2>New Influencer Application</h2>\n\
         <p><strong>Name:</strong> {first} {last}</p>\n\
         <p><strong>Email:</strong> {email}</p>\n\
         <p><strong>Phone:</strong> {phone}</p>\n\
         <p><strong>Social Media:</strong></p>\n\
         <ul>{socials}</ul>\n\
         <p><strong>Followers:</strong> {followers}</p>\n\
         <p><strong>Content Niche:</strong> {niche}</p>\n\
         <p><strong>About:</strong></p>\n\
         <p>{about}</p>",
        first = escape(&submission.first_name),
        last = escape(&submission.last_name),
        email = escape(&submission.email),
        phone = escape(&submission.phone),
        followers = format_grouped(followers),
        niche = escape(&submission.niche),
    )
}

fn handle_value(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(|v| v.trim().trim_start_matches('@'))
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mail_config() -> MailConfig {
        MailConfig {
            api_key: None,
            from: "noreply@brandlinkagency.com".into(),
            contact_to: "neko@brandlinkagency.com".into(),
            application_to: "talent@brandlinkagency.com".into(),
        }
    }

    #[test]
    fn test_mailer_without_key_is_unconfigured() {
        let mailer = Mailer::new(mail_config()).unwrap();
        assert!(!mailer.is_configured());
    }

    #[tokio::test]
    async fn test_send_without_key_fails_fast() {
        let mailer = Mailer::new(mail_config()).unwrap();
        let result = mailer.send_contact(&ContactSubmission::default()).await;
        assert!(matches!(result, Err(SubmitError::MissingKey)));
    }

    #[test]
    fn test_contact_email_body() {
        let submission = ContactSubmission {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            phone: "0123456789".into(),
            budget: Some("15000".into()),
            message: "A <big> campaign".into(),
            terms: true,
        };
        let html = contact_email_html(&submission);

        assert!(html.contains("Jane Doe"));
        assert!(html.contains("$15,000"));
        // Submitted text is escaped
        assert!(html.contains("A &lt;big&gt; campaign"));
    }

    #[test]
    fn test_contact_email_defaults() {
        let html = contact_email_html(&ContactSubmission::default());
        assert!(html.contains("Not specified"));
        assert!(html.contains("No message provided"));
    }

    #[test]
    fn test_application_email_body() {
        let submission = ApplicationSubmission {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            phone: "0123456789".into(),
            instagram: Some("@jane.doe".into()),
            tiktok: None,
            youtube: Some("JaneDoeTV".into()),
            followers: "120000".into(),
            niche: "Lifestyle".into(),
            about: "Ten years on camera.".into(),
            terms: true,
        };
        let html = application_email_html(&submission);

        assert!(html.contains("<strong>Instagram:</strong> @jane.doe"));
        assert!(!html.contains("TikTok"));
        assert!(html.contains("JaneDoeTV"));
        assert!(html.contains("120,000"));
        assert!(html.contains("Lifestyle"));
    }
}
