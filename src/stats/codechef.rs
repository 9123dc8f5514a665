//! CodeChef statistics via the competeapi mirror

use super::{PlatformStats, StatsError, StatsProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

const STATS_API_BASE: &str = "https://competeapi.vercel.app";

#[derive(Debug, Deserialize)]
struct CodeChefResponse {
    #[serde(default)]
    rating_number: Option<f64>,
    #[serde(default)]
    global_rank: Option<u64>,
    /// Star title text, e.g. "3★"
    #[serde(default)]
    rating: Option<String>,
}

pub struct CodeChefProvider {
    http_client: Client,
    base_url: String,
    username: String,
}

impl CodeChefProvider {
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
impl StatsProvider for CodeChefProvider {
    fn platform(&self) -> &str {
        "CodeChef"
    }

    fn profile_url(&self) -> String {
        format!("https://www.codechef.com/users/{}", self.username)
    }

    async fn fetch(&self) -> Result<PlatformStats, StatsError> {
        let url = format!("{}/user/codechef/{}/", self.base_url, self.username);
        debug!(%url, "Fetching CodeChef stats");

        let response = self.http_client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(StatsError::Status {
                status: response.status().as_u16(),
            });
        }

        let parsed: CodeChefResponse = response
            .json()
            .await
            .map_err(|e| StatsError::UnexpectedShape(e.to_string()))?;

        let mut stats = PlatformStats::empty(self.platform(), self.profile_url());
        stats.rating = Some(match parsed.rating_number {
            Some(rating) => format!("{}", rating),
            None => "N/A".to_string(),
        });
        stats.rank = Some(match parsed.global_rank {
            Some(rank) => format!("#{}", rank),
            None => "N/A".to_string(),
        });
        if let Some(title) = parsed.rating {
            stats.badges.push(format!("{} Rating", title));
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parsing() {
        let json = r#"{"rating_number":1523.0,"global_rank":40231,"rating":"3★","extra":{}}"#;
        let parsed: CodeChefResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.rating_number, Some(1523.0));
        assert_eq!(parsed.global_rank, Some(40231));
        assert_eq!(parsed.rating.as_deref(), Some("3★"));
    }

    #[test]
    fn test_response_parsing_with_missing_fields() {
        let parsed: CodeChefResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.rating_number.is_none());
        assert!(parsed.global_rank.is_none());
        assert!(parsed.rating.is_none());
    }

    #[test]
    fn test_profile_url() {
        let provider = CodeChefProvider::new(Client::new(), "annurag66".to_string());
        assert_eq!(
            provider.profile_url(),
            "https://www.codechef.com/users/annurag66"
        );
    }
}
