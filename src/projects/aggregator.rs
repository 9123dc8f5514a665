//! Project aggregation pipeline
//!
//! list -> filter -> detect -> format. Per-repository work is independent
//! and read-only, so detection runs concurrently across repositories; within
//! one repository the detector itself orders tree fetch before manifest
//! fetches. Every per-repository task is wrapped in a task-level timeout so
//! one hung upstream cannot stall the whole listing.

use super::filter::ProjectFilter;
use super::formatter::format_card;
use super::types::{ProjectCard, ProjectListing};
use crate::detect::TechDetector;
use crate::github::GithubClient;
use futures_util::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, warn};

/// Upper bound for one repository's full detection pass
const DEFAULT_DETECT_TIMEOUT_SECS: u64 = 20;

/// Aggregates GitHub repositories into display-ready project cards
pub struct ProjectAggregator {
    github: Arc<GithubClient>,
    detector: TechDetector,
    filter: ProjectFilter,
    username: String,
    detect_timeout: Duration,
}

impl ProjectAggregator {
    pub fn new(github: Arc<GithubClient>, username: String, filter: ProjectFilter) -> Self {
        let detector = TechDetector::new(Arc::clone(&github));
        Self {
            github,
            detector,
            filter,
            username,
            detect_timeout: Duration::from_secs(DEFAULT_DETECT_TIMEOUT_SECS),
        }
    }

    pub fn with_detect_timeout(mut self, detect_timeout: Duration) -> Self {
        self.detect_timeout = detect_timeout;
        self
    }

    /// Runs one full aggregation.
    ///
    /// Never fails: every stage degrades to fewer (or zero) projects. All
    /// per-repository tasks complete before the listing is published.
    pub async fn aggregate(&self) -> ProjectListing {
        let repos = self.github.list_repos(&self.username).await;
        let selected = self.filter.apply(repos);
        info!(
            username = %self.username,
            selected = selected.len(),
            "Aggregating project cards"
        );

        let tasks = selected.iter().map(|repo| async move {
            let detected = match timeout(
                self.detect_timeout,
                self.detector.detect(&self.username, &repo.name),
            )
            .await
            {
                Ok(tags) => tags,
                Err(_) => {
                    warn!(repo = %repo.name, "Technology detection timed out");
                    Vec::new()
                }
            };
            format_card(repo, detected)
        });

        let cards: Vec<ProjectCard> = join_all(tasks).await;
        ProjectListing::new(cards)
    }
}
