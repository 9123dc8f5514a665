//! Competitive-programming statistics
//!
//! Three public providers, each with its own ad hoc JSON shape. Every
//! provider response is parsed into its own narrow record type; unexpected
//! shapes are rejected rather than trusted. Platforms degrade independently:
//! one failing provider never hides the others.

mod codechef;
mod codeforces;
mod leetcode;

pub use codechef::CodeChefProvider;
pub use codeforces::CodeforcesProvider;
pub use leetcode::LeetCodeProvider;

use async_trait::async_trait;
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors from one stats provider call
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Stats request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned HTTP {status}")]
    Status { status: u16 },

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

/// Statistics for one platform, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformStats {
    pub platform: String,
    pub profile_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solved: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contests: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PlatformStats {
    /// An empty stats record for a platform.
    pub fn empty(platform: &str, profile_url: String) -> Self {
        Self {
            platform: platform.to_string(),
            profile_url,
            rating: None,
            rank: None,
            solved: None,
            contests: None,
            badges: Vec::new(),
            error: None,
        }
    }

    /// The degraded record published when a provider fails.
    pub fn unavailable(platform: &str, profile_url: String) -> Self {
        Self {
            error: Some("Failed to load stats".to_string()),
            ..Self::empty(platform, profile_url)
        }
    }
}

/// One upstream statistics provider
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Platform display name (e.g. "LeetCode")
    fn platform(&self) -> &str;

    /// Public profile URL for the configured handle
    fn profile_url(&self) -> String;

    /// Fetches the platform's statistics.
    async fn fetch(&self) -> Result<PlatformStats, StatsError>;
}

/// Fetches all providers concurrently, degrading each failure in place.
pub struct StatsService {
    providers: Vec<Box<dyn StatsProvider>>,
}

impl StatsService {
    pub fn new(providers: Vec<Box<dyn StatsProvider>>) -> Self {
        Self { providers }
    }

    /// Gathers stats for every provider. Never fails; a provider error
    /// becomes an `unavailable` record for that platform alone.
    pub async fn gather(&self) -> Vec<PlatformStats> {
        let tasks = self.providers.iter().map(|provider| async move {
            match provider.fetch().await {
                Ok(stats) => stats,
                Err(e) => {
                    warn!(platform = provider.platform(), error = %e, "Stats fetch failed");
                    PlatformStats::unavailable(provider.platform(), provider.profile_url())
                }
            }
        });

        join_all(tasks).await
    }
}
