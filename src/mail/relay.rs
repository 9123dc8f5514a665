//! Outbound email relay
//!
//! Relays validated contact submissions to a transactional email HTTP API.
//! Credentials are checked at send time, not at process start: a portfolio
//! without mail configuration still serves every other section.

use super::message::ContactMessage;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};

/// Default relay endpoint (transactional email HTTP API)
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.resend.com/emails";

/// Errors from the email relay
#[derive(Debug, Error)]
pub enum MailError {
    /// Required credentials absent from the environment
    #[error("Email configuration missing: set EMAIL_USER and EMAIL_PASSWORD")]
    MissingCredentials,

    #[error("Email relay request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Email relay returned HTTP {status}")]
    Status { status: u16 },
}

/// Relay settings, loaded from the environment by `FolioConfig`.
#[derive(Debug, Clone, Default)]
pub struct MailSettings {
    /// Sender identity; also the fallback destination
    pub user: Option<String>,
    /// API credential for the relay
    pub password: Option<String>,
    /// Relay endpoint override
    pub endpoint: Option<String>,
    /// Destination override
    pub to: Option<String>,
}

/// Wire payload for the relay endpoint
#[derive(Debug, Serialize)]
struct OutgoingEmail<'a> {
    from: &'a str,
    to: &'a str,
    reply_to: &'a str,
    subject: String,
    text: String,
}

/// Contact relay over a transactional email HTTP API
pub struct Mailer {
    http_client: Client,
    settings: MailSettings,
}

impl Mailer {
    pub fn new(settings: MailSettings, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            http_client,
            settings,
        }
    }

    /// Whether credentials are present (useful for health reporting).
    pub fn is_configured(&self) -> bool {
        self.settings.user.is_some() && self.settings.password.is_some()
    }

    /// Relays one validated contact message.
    pub async fn send(&self, contact: &ContactMessage) -> Result<(), MailError> {
        let (user, password) = match (&self.settings.user, &self.settings.password) {
            (Some(user), Some(password)) => (user, password),
            _ => {
                error!("Missing EMAIL_USER or EMAIL_PASSWORD, cannot relay contact message");
                return Err(MailError::MissingCredentials);
            }
        };

        let endpoint = self
            .settings
            .endpoint
            .as_deref()
            .unwrap_or(DEFAULT_RELAY_ENDPOINT);
        let to = self.settings.to.as_deref().unwrap_or(user);

        let email = OutgoingEmail {
            from: user,
            to,
            reply_to: &contact.email,
            subject: subject_line(contact),
            text: body_text(contact),
        };

        let response = self
            .http_client
            .post(endpoint)
            .bearer_auth(password)
            .json(&email)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MailError::Status {
                status: response.status().as_u16(),
            });
        }

        info!(reply_to = %contact.email, "Contact message relayed");
        Ok(())
    }
}

fn subject_line(contact: &ContactMessage) -> String {
    if contact.subject.is_empty() {
        format!("New contact from portfolio: {}", contact.name)
    } else {
        contact.subject.clone()
    }
}

fn body_text(contact: &ContactMessage) -> String {
    format!(
        "Name: {}\nEmail: {}\nSubject: {}\nMessage:\n{}\n",
        contact.name, contact.email, contact.subject, contact.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "A question".to_string(),
        }
    }

    #[test]
    fn test_subject_line_default() {
        let mut message = contact();
        message.subject = String::new();
        assert_eq!(subject_line(&message), "New contact from portfolio: Ada");
    }

    #[test]
    fn test_subject_line_explicit() {
        assert_eq!(subject_line(&contact()), "Hello");
    }

    #[test]
    fn test_body_text_contains_all_fields() {
        let body = body_text(&contact());
        assert!(body.contains("Name: Ada"));
        assert!(body.contains("Email: ada@example.com"));
        assert!(body.contains("A question"));
    }

    #[tokio::test]
    async fn test_send_without_credentials_fails_fast() {
        let mailer = Mailer::new(MailSettings::default(), Duration::from_secs(1));
        assert!(!mailer.is_configured());

        let result = mailer.send(&contact()).await;
        assert!(matches!(result, Err(MailError::MissingCredentials)));
    }
}
