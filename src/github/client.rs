//! HTTP client for the GitHub REST API
//!
//! A thin typed wrapper over a pooled `reqwest::Client`. Every request
//! carries a User-Agent (GitHub rejects anonymous agents), an optional
//! `Authorization: token` header, and the client-level timeout configured at
//! construction time.
//!
//! Listing degrades to an empty sequence on any failure: the portfolio page
//! must still render when GitHub is unreachable, and the caller has no
//! actionable recovery. Tree and contents fetches return errors so the
//! technology detector can decide how much of its pipeline to abandon.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::types::{ContentsResponse, RepoSummary, TreeResponse};

/// Public GitHub API endpoint
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Errors from individual GitHub API calls
#[derive(Debug, Error)]
pub enum GithubError {
    /// Transport-level failure (DNS, connect, timeout)
    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("GitHub returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// A contents body could not be base64-decoded into UTF-8 text
    #[error("Failed to decode file contents: {0}")]
    Decode(String),
}

/// Typed GitHub REST client
///
/// Thread-safe; share it across tasks with `Arc`.
pub struct GithubClient {
    base_url: String,
    token: Option<String>,
    http_client: Client,
}

impl GithubClient {
    /// Creates a client against the public API with the given timeout.
    pub fn new(token: Option<String>, timeout: Duration) -> Self {
        Self::with_base_url(DEFAULT_API_BASE.to_string(), token, timeout)
    }

    /// Creates a client against a custom API base URL.
    ///
    /// Used by tests to point at a local stand-in server.
    pub fn with_base_url(base_url: String, token: Option<String>, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            http_client,
        }
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.http_client.get(url);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }
        request
    }

    /// Lists a user's repositories with forks removed.
    ///
    /// Degrades to an empty sequence on any failure; the cause is logged.
    pub async fn list_repos(&self, username: &str) -> Vec<RepoSummary> {
        match self.fetch_repos(username).await {
            Ok(repos) => {
                let total = repos.len();
                let own: Vec<RepoSummary> = repos.into_iter().filter(|r| !r.fork).collect();
                info!(
                    username,
                    total,
                    non_fork = own.len(),
                    "Fetched repository listing"
                );
                own
            }
            Err(e) => {
                warn!(username, error = %e, "Repository listing failed, returning empty");
                Vec::new()
            }
        }
    }

    async fn fetch_repos(&self, username: &str) -> Result<Vec<RepoSummary>, GithubError> {
        let path = format!("users/{}/repos?sort=updated", username);
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "Listing repositories");

        let response = self.get(&path).send().await?;
        if !response.status().is_success() {
            return Err(GithubError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        Ok(response.json().await?)
    }

    /// Fetches the full recursive tree of a branch.
    pub async fn get_tree(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<TreeResponse, GithubError> {
        let path = format!("repos/{}/{}/git/trees/{}?recursive=1", owner, repo, branch);
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "Fetching recursive tree");

        let response = self.get(&path).send().await?;
        if !response.status().is_success() {
            return Err(GithubError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        let tree: TreeResponse = response.json().await?;
        if tree.truncated {
            debug!(owner, repo, "Tree response was truncated by GitHub");
        }
        Ok(tree)
    }

    /// Fetches a file's contents and decodes the base64 body into text.
    pub async fn get_contents(
        &self,
        owner: &str,
        repo: &str,
        file_path: &str,
    ) -> Result<String, GithubError> {
        let path = format!("repos/{}/{}/contents/{}", owner, repo, file_path);
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "Fetching file contents");

        let response = self.get(&path).send().await?;
        if !response.status().is_success() {
            return Err(GithubError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        let contents: ContentsResponse = response.json().await?;
        decode_contents(&contents)
    }

    /// Checks whether the API is reachable at all.
    pub async fn health_check(&self) -> bool {
        match self.get("rate_limit").send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!(error = %e, "GitHub health check failed");
                false
            }
        }
    }
}

/// Decodes a contents response body (base64 with embedded newlines) to text.
fn decode_contents(contents: &ContentsResponse) -> Result<String, GithubError> {
    if contents.encoding != "base64" {
        return Err(GithubError::Decode(format!(
            "unexpected encoding: {}",
            contents.encoding
        )));
    }

    let compact: String = contents
        .content
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let bytes = BASE64
        .decode(compact.as_bytes())
        .map_err(|e| GithubError::Decode(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| GithubError::Decode(e.to_string()))
}
