//! Email-provider configuration, sourced from the environment.
//!
//! Unlike the store identity, a missing API key is not fatal at startup:
//! the site builds and serves without it, and submissions fail with a
//! provider error until the key is configured.

use serde::Serialize;

/// Transactional-email provider settings.
#[derive(Debug, Clone, Serialize)]
pub struct MailConfig {
    /// Provider API key (`RESEND_API_KEY`). `None` disables sending.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Sender address for notification mail.
    pub from: String,

    /// Recipient for contact-form submissions.
    pub contact_to: String,

    /// Recipient for influencer applications.
    pub application_to: String,
}

impl MailConfig {
    /// Read provider settings from the environment, with the agency's
    /// documented address defaults. The application recipient falls back
    /// through `INFLUENCER_EMAIL`, then `RESEND_TO`, then the default.
    pub fn from_env() -> Self {
        let contact_to = env_opt("RESEND_TO");
        Self {
            api_key: env_opt("RESEND_API_KEY"),
            from: env_opt("RESEND_FROM").unwrap_or_else(|| "noreply@brandlinkagency.com".into()),
            application_to: env_opt("INFLUENCER_EMAIL")
                .or_else(|| contact_to.clone())
                .unwrap_or_else(|| "talent@brandlinkagency.com".into()),
            contact_to: contact_to.unwrap_or_else(|| "neko@brandlinkagency.com".into()),
        }
    }
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_shapes() {
        let mail = MailConfig {
            api_key: None,
            from: "noreply@brandlinkagency.com".into(),
            contact_to: "neko@brandlinkagency.com".into(),
            application_to: "talent@brandlinkagency.com".into(),
        };
        assert!(mail.api_key.is_none());
        assert_ne!(mail.contact_to, mail.application_to);
        assert!(mail.from.contains('@'));
    }
}
