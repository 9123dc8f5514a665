//! Contact-form message validation

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Validation failures for a contact submission
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Name, email, subject, and message are required")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// An inbound contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

impl ContactMessage {
    /// Validates and trims the submission.
    ///
    /// All four fields must be non-blank after trimming, and the email must
    /// have a plausible address shape.
    pub fn validated(&self) -> Result<ContactMessage, ContactError> {
        let trimmed = ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        if trimmed.name.is_empty()
            || trimmed.email.is_empty()
            || trimmed.subject.is_empty()
            || trimmed.message.is_empty()
        {
            return Err(ContactError::MissingFields);
        }

        if !email_regex().is_match(&trimmed.email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, subject: &str, body: &str) -> ContactMessage {
        ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: body.to_string(),
        }
    }

    #[test]
    fn test_valid_submission() {
        let valid = message("Ada", "ada@example.com", "Hello", "A question about AlgoQuest")
            .validated()
            .unwrap();
        assert_eq!(valid.name, "Ada");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let valid = message("  Ada ", " ada@example.com ", " Hi ", " body ")
            .validated()
            .unwrap();
        assert_eq!(valid.name, "Ada");
        assert_eq!(valid.email, "ada@example.com");
        assert_eq!(valid.message, "body");
    }

    #[test]
    fn test_empty_message_is_rejected() {
        let result = message("Ada", "ada@example.com", "Hi", "").validated();
        assert_eq!(result.unwrap_err(), ContactError::MissingFields);
    }

    #[test]
    fn test_whitespace_only_field_is_rejected() {
        let result = message("Ada", "ada@example.com", "   ", "body").validated();
        assert_eq!(result.unwrap_err(), ContactError::MissingFields);
    }

    #[test]
    fn test_invalid_email_is_rejected_even_with_valid_fields() {
        let result = message("Ada", "not-an-email", "Hi", "body").validated();
        assert_eq!(result.unwrap_err(), ContactError::InvalidEmail);
    }

    #[test]
    fn test_email_shapes() {
        for bad in ["a@b", "a b@c.com", "@c.com", "a@", "a@@b.com"] {
            let result = message("Ada", bad, "Hi", "body").validated();
            assert!(result.is_err(), "{bad} should be rejected");
        }
        for good in ["a@b.co", "first.last@sub.domain.org"] {
            let result = message("Ada", good, "Hi", "body").validated();
            assert!(result.is_ok(), "{good} should be accepted");
        }
    }

    #[test]
    fn test_deserialization_defaults_missing_fields() {
        let parsed: ContactMessage = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(parsed.name, "Ada");
        assert!(parsed.email.is_empty());
        assert_eq!(parsed.validated().unwrap_err(), ContactError::MissingFields);
    }
}
