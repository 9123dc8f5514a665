//! LeetCode statistics via the public stats mirror
//!
//! The mirror exposes a flat JSON document; only `totalSolved` and `ranking`
//! are consumed here.

use super::{PlatformStats, StatsError, StatsProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

const STATS_API_BASE: &str = "https://leetcode-stats-api.herokuapp.com";

#[derive(Debug, Deserialize)]
struct LeetCodeResponse {
    #[serde(rename = "totalSolved", default)]
    total_solved: u64,
    #[serde(default)]
    ranking: Option<u64>,
}

pub struct LeetCodeProvider {
    http_client: Client,
    base_url: String,
    username: String,
}

impl LeetCodeProvider {
    pub fn new(http_client: Client, username: String) -> Self {
        Self::with_base_url(http_client, STATS_API_BASE.to_string(), username)
    }

    pub fn with_base_url(http_client: Client, base_url: String, username: String) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            username,
        }
    }
}

#[async_trait]
impl StatsProvider for LeetCodeProvider {
    fn platform(&self) -> &str {
        "LeetCode"
    }

    fn profile_url(&self) -> String {
        format!("https://leetcode.com/u/{}/", self.username)
    }

    async fn fetch(&self) -> Result<PlatformStats, StatsError> {
        let url = format!("{}/{}", self.base_url, self.username);
        debug!(%url, "Fetching LeetCode stats");

        let response = self.http_client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(StatsError::Status {
                status: response.status().as_u16(),
            });
        }

        let parsed: LeetCodeResponse = response
            .json()
            .await
            .map_err(|e| StatsError::UnexpectedShape(e.to_string()))?;

        let mut stats = PlatformStats::empty(self.platform(), self.profile_url());
        stats.solved = Some(parsed.total_solved);
        stats.rank = Some(match parsed.ranking {
            Some(ranking) => format!("Global #{}", ranking),
            None => "N/A".to_string(),
        });
        Ok(stats)
    }
}
