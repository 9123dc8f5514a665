//! Configuration management for folio
//!
//! Settings load from environment variables with sensible defaults, so a
//! bare `folio serve` works against the public APIs out of the box.
//!
//! # Environment Variables
//!
//! ## Aggregation
//! - `FOLIO_GITHUB_USERNAME`: GitHub account to aggregate - default: "anurag-yv"
//! - `GITHUB_TOKEN`: optional API token, raises rate limits
//! - `FOLIO_PROJECT_FILTERS`: comma-separated allow-list keys - default: curated set
//! - `FOLIO_REQUEST_TIMEOUT`: per-request timeout in seconds - default: "10"
//!
//! ## Stats platforms
//! - `FOLIO_LEETCODE_USER`, `FOLIO_CODEFORCES_USER`, `FOLIO_CODECHEF_USER`
//!
//! ## Server & logging
//! - `FOLIO_BIND_ADDR`: listen address - default: "127.0.0.1:8080"
//! - `FOLIO_LOG_LEVEL`: trace|debug|info|warn|error - default: "info"
//!
//! ## Email relay (checked at send time, not at startup)
//! - `EMAIL_USER` (required to relay), `EMAIL_PASSWORD` (required to relay)
//! - `EMAIL_SERVICE`: relay endpoint override
//! - `EMAIL_TO`: destination override - default: `EMAIL_USER`

use crate::mail::MailSettings;
use crate::projects::DEFAULT_FILTER_KEYS;
use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_GITHUB_USERNAME: &str = "anurag-yv";
const DEFAULT_LEETCODE_USER: &str = "Annuraag09";
const DEFAULT_CODEFORCES_USER: &str = "anuragyv";
const DEFAULT_CODECHEF_USER: &str = "annurag66";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Main configuration structure for folio
///
/// Constructed with `Default::default()`, which loads from environment
/// variables with fallback defaults.
#[derive(Debug, Clone)]
pub struct FolioConfig {
    /// GitHub account whose repositories are aggregated
    pub github_username: String,

    /// Optional GitHub API token
    pub github_token: Option<String>,

    /// Allow-list keys for the project filter
    pub project_filters: Vec<String>,

    /// LeetCode username
    pub leetcode_user: String,

    /// Codeforces handle
    pub codeforces_user: String,

    /// CodeChef username
    pub codechef_user: String,

    /// HTTP server bind address
    pub bind_addr: String,

    /// Per-request timeout in seconds for all outbound calls
    pub request_timeout_secs: u64,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Email relay settings
    pub mail: MailSettings,
}

impl Default for FolioConfig {
    fn default() -> Self {
        let project_filters = env::var("FOLIO_PROJECT_FILTERS")
            .ok()
            .map(|raw| {
                raw.split(',')
                    .map(|key| key.trim().to_string())
                    .filter(|key| !key.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| DEFAULT_FILTER_KEYS.iter().map(|k| k.to_string()).collect());

        let request_timeout_secs = env::var("FOLIO_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        let mail = MailSettings {
            user: env::var("EMAIL_USER").ok(),
            password: env::var("EMAIL_PASSWORD").ok(),
            endpoint: env::var("EMAIL_SERVICE").ok(),
            to: env::var("EMAIL_TO").ok(),
        };

        Self {
            github_username: env::var("FOLIO_GITHUB_USERNAME")
                .unwrap_or_else(|_| DEFAULT_GITHUB_USERNAME.to_string()),
            github_token: env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
            project_filters,
            leetcode_user: env::var("FOLIO_LEETCODE_USER")
                .unwrap_or_else(|_| DEFAULT_LEETCODE_USER.to_string()),
            codeforces_user: env::var("FOLIO_CODEFORCES_USER")
                .unwrap_or_else(|_| DEFAULT_CODEFORCES_USER.to_string()),
            codechef_user: env::var("FOLIO_CODECHEF_USER")
                .unwrap_or_else(|_| DEFAULT_CODECHEF_USER.to_string()),
            bind_addr: env::var("FOLIO_BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            request_timeout_secs,
            log_level: env::var("FOLIO_LOG_LEVEL")
                .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
                .to_lowercase(),
            mail,
        }
    }
}

impl FolioConfig {
    /// Validates the configuration.
    ///
    /// Email credentials are deliberately NOT validated here: their absence
    /// is a send-time failure, not a startup failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.github_username.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "GitHub username must not be empty".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }
        if self.request_timeout_secs > 120 {
            return Err(ConfigError::ValidationFailed(
                "Request timeout cannot exceed 2 minutes".to_string(),
            ));
        }

        if self.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::ValidationFailed(format!(
                "Invalid bind address: {}",
                self.bind_addr
            )));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    /// The shared timeout for outbound requests.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl fmt::Display for FolioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Folio Configuration:")?;
        writeln!(f, "  GitHub Username: {}", self.github_username)?;
        writeln!(
            f,
            "  GitHub Token: {}",
            if self.github_token.is_some() {
                "configured"
            } else {
                "absent"
            }
        )?;
        writeln!(f, "  Project Filters: {}", self.project_filters.join(", "))?;
        writeln!(f, "  Bind Address: {}", self.bind_addr)?;
        writeln!(f, "  Request Timeout: {}s", self.request_timeout_secs)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(
            f,
            "  Email Relay: {}",
            if self.mail.user.is_some() && self.mail.password.is_some() {
                "configured"
            } else {
                "not configured"
            }
        )?;
        Ok(())
    }
}
