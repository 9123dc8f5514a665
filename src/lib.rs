//! folio - portfolio aggregation backend
//!
//! This library powers a personal portfolio site's data layer. It aggregates
//! a GitHub account's repositories into display-ready project cards with
//! best-effort technology detection, pulls competitive-programming
//! statistics from three public providers, and relays contact-form
//! submissions through a transactional email API.
//!
//! # Core Concepts
//!
//! - **Aggregation**: list repositories, filter them against a curated
//!   allow-list, detect each project's technologies, and format cards
//! - **Technology detection**: a best-effort classifier over a repository's
//!   file tree and root manifest files; it never fails its caller
//! - **Degradation**: every upstream failure degrades to an empty or partial
//!   section so the portfolio always renders something
//!
//! # Example Usage
//!
//! ```no_run
//! use folio::{GithubClient, ProjectAggregator, ProjectFilter};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn example() {
//! let github = Arc::new(GithubClient::new(None, Duration::from_secs(10)));
//! let aggregator = ProjectAggregator::new(
//!     github,
//!     "anurag-yv".to_string(),
//!     ProjectFilter::default(),
//! );
//!
//! let listing = aggregator.aggregate().await;
//! for card in &listing.projects {
//!     println!("{}: {}", card.title, card.technologies.join(", "));
//! }
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`github`]: typed GitHub REST client
//! - [`detect`]: technology detection heuristics
//! - [`projects`]: filtering, formatting, and aggregation
//! - [`stats`]: competitive-programming stat providers
//! - [`mail`]: contact validation and email relay
//! - [`server`]: actix-web HTTP API

// Public modules
pub mod cli;
pub mod config;
pub mod detect;
pub mod github;
pub mod mail;
pub mod projects;
pub mod server;
pub mod stats;
pub mod util;

// Re-export key types for convenient access
pub use config::{ConfigError, FolioConfig};
pub use detect::TechDetector;
pub use github::{GithubClient, GithubError, RepoSummary};
pub use mail::{ContactError, ContactMessage, MailError, Mailer};
pub use projects::{ProjectAggregator, ProjectCard, ProjectFilter, ProjectListing};
pub use stats::{PlatformStats, StatsProvider, StatsService};
pub use util::{init_default, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_folio() {
        assert_eq!(NAME, "folio");
    }
}
