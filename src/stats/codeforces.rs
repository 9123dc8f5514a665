//! Codeforces statistics via the official API
//!
//! Three endpoints are consulted: `user.info` for rating and rank,
//! `user.status` for the distinct-solved count, and `user.rating` for the
//! number of rated contests. Only `user.info` is load-bearing; the other two
//! degrade to zero on failure.

use super::{PlatformStats, StatsError, StatsProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashSet;
use tracing::{debug, warn};

const API_BASE: &str = "https://codeforces.com/api";

/// Codeforces wraps every payload in {status, result}
#[derive(Debug, Deserialize)]
struct CfEnvelope<T> {
    #[serde(default)]
    status: String,
    result: Option<T>,
}

impl<T> CfEnvelope<T> {
    fn into_result(self) -> Result<T, StatsError> {
        if self.status != "OK" {
            return Err(StatsError::UnexpectedShape(format!(
                "status was {:?}",
                self.status
            )));
        }
        self.result
            .ok_or_else(|| StatsError::UnexpectedShape("missing result".to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct CfUser {
    #[serde(default)]
    rating: Option<i64>,
    #[serde(default)]
    rank: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CfProblem {
    #[serde(rename = "contestId", default)]
    contest_id: Option<i64>,
    #[serde(default)]
    index: String,
}

#[derive(Debug, Deserialize)]
struct CfSubmission {
    #[serde(default)]
    verdict: Option<String>,
    problem: CfProblem,
}

#[derive(Debug, Deserialize)]
struct CfRatingChange {
    #[serde(rename = "contestId", default)]
    #[allow(dead_code)]
    contest_id: Option<i64>,
}

pub struct CodeforcesProvider {
    http_client: Client,
    base_url: String,
    handle: String,
}

impl CodeforcesProvider {
    pub fn new(http_client: Client, handle: String) -> Self {
        Self::with_base_url(http_client, API_BASE.to_string(), handle)
    }

    pub fn with_base_url(http_client: Client, base_url: String, handle: String) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            handle,
        }
    }

    async fn get_envelope<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, StatsError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "Fetching Codeforces endpoint");

        let response = self.http_client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(StatsError::Status {
                status: response.status().as_u16(),
            });
        }

        let envelope: CfEnvelope<T> = response
            .json()
            .await
            .map_err(|e| StatsError::UnexpectedShape(e.to_string()))?;
        envelope.into_result()
    }

    /// Distinct solved problems, keyed by `{contestId}{index}` over OK verdicts.
    async fn solved_count(&self) -> Result<u64, StatsError> {
        let path = format!("user.status?handle={}&from=1&count=100000", self.handle);
        let submissions: Vec<CfSubmission> = self.get_envelope(&path).await?;

        let mut solved = HashSet::new();
        for submission in submissions {
            if submission.verdict.as_deref() == Some("OK") {
                let contest = submission
                    .problem
                    .contest_id
                    .map(|id| id.to_string())
                    .unwrap_or_default();
                solved.insert(format!("{}{}", contest, submission.problem.index));
            }
        }
        Ok(solved.len() as u64)
    }

    async fn contest_count(&self) -> Result<u64, StatsError> {
        let path = format!("user.rating?handle={}", self.handle);
        let changes: Vec<CfRatingChange> = self.get_envelope(&path).await?;
        Ok(changes.len() as u64)
    }
}

#[async_trait]
impl StatsProvider for CodeforcesProvider {
    fn platform(&self) -> &str {
        "CodeForces"
    }

    fn profile_url(&self) -> String {
        format!("https://codeforces.com/profile/{}", self.handle)
    }

    async fn fetch(&self) -> Result<PlatformStats, StatsError> {
        let path = format!("user.info?handles={}", self.handle);
        let users: Vec<CfUser> = self.get_envelope(&path).await?;
        let user = users
            .into_iter()
            .next()
            .ok_or_else(|| StatsError::UnexpectedShape("empty user.info result".to_string()))?;

        // secondary endpoints degrade to zero, they are not load-bearing
        let solved = match self.solved_count().await {
            Ok(count) => count,
            Err(e) => {
                warn!(handle = %self.handle, error = %e, "Codeforces submissions fetch failed");
                0
            }
        };
        let contests = match self.contest_count().await {
            Ok(count) => count,
            Err(e) => {
                warn!(handle = %self.handle, error = %e, "Codeforces contest count fetch failed");
                0
            }
        };

        let mut stats = PlatformStats::empty(self.platform(), self.profile_url());
        stats.rating = user.rating.map(|r| r.to_string());
        stats.rank = user.rank;
        stats.solved = Some(solved);
        stats.contests = Some(contests);
        Ok(stats)
    }
}
