//! Best-effort technology detection for a repository
//!
//! Inspects a repository's recursive file tree and, conditionally, its root
//! manifest files, and derives a deduplicated set of technology tags. The
//! detector never fails its caller: a tree fetch error aborts detection for
//! that repository with an empty result, and any single manifest fetch error
//! degrades only that source.

mod extensions;
mod manifests;

pub use extensions::{collect_extensions, language_tags};
pub use manifests::{
    default_heuristics, is_dockerfile, ManifestHeuristic, PackageJsonHeuristic, PomXmlHeuristic,
    RequirementsHeuristic,
};

use crate::github::GithubClient;
use std::sync::Arc;
use tracing::{debug, warn};

/// Branch queried for the recursive tree when none is configured
pub const DEFAULT_BRANCH: &str = "main";

/// Technology detector over the GitHub tree and contents endpoints
pub struct TechDetector {
    github: Arc<GithubClient>,
    heuristics: Vec<Box<dyn ManifestHeuristic>>,
    branch: String,
}

impl TechDetector {
    pub fn new(github: Arc<GithubClient>) -> Self {
        Self::with_branch(github, DEFAULT_BRANCH.to_string())
    }

    pub fn with_branch(github: Arc<GithubClient>, branch: String) -> Self {
        Self {
            github,
            heuristics: default_heuristics(),
            branch,
        }
    }

    /// Detects technology tags for one repository.
    ///
    /// Returns a deduplicated sequence in discovery order. Best-effort:
    /// all failures are logged and degrade to fewer (or zero) tags.
    pub async fn detect(&self, owner: &str, repo: &str) -> Vec<String> {
        let tree = match self.github.get_tree(owner, repo, &self.branch).await {
            Ok(tree) => tree,
            Err(e) => {
                debug!(owner, repo, error = %e, "Tree fetch failed, no tags derived");
                return Vec::new();
            }
        };

        let blob_paths: Vec<String> = tree
            .tree
            .iter()
            .filter(|entry| entry.is_blob())
            .map(|entry| entry.path.to_lowercase())
            .collect();

        let seen_extensions = collect_extensions(blob_paths.iter().map(String::as_str));
        let mut tags = language_tags(&seen_extensions);

        for heuristic in &self.heuristics {
            let Some(path) = blob_paths.iter().find(|p| heuristic.matches(p.as_str())) else {
                continue;
            };

            match self.github.get_contents(owner, repo, path).await {
                Ok(content) => tags.extend(heuristic.tags(&content)),
                Err(e) => {
                    warn!(
                        owner,
                        repo,
                        key_file = heuristic.name(),
                        error = %e,
                        "Key file fetch failed, skipping its tags"
                    );
                }
            }
        }

        if blob_paths.iter().any(|p| is_dockerfile(p)) {
            debug!(owner, repo, "Dockerfile present (no content heuristic)");
        }

        dedupe(tags)
    }
}

/// Removes duplicate tags, preserving first-seen order.
///
/// Equality is case-sensitive: "React" and "react" are distinct tags.
pub fn dedupe(tags: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tags.into_iter().filter(|t| seen.insert(t.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::GithubClient;
    use std::time::Duration;

    #[test]
    fn test_dedupe_preserves_first_seen_order() {
        let tags = vec![
            "TypeScript".to_string(),
            "React".to_string(),
            "TypeScript".to_string(),
            "CSS".to_string(),
            "React".to_string(),
        ];
        assert_eq!(dedupe(tags), vec!["TypeScript", "React", "CSS"]);
    }

    #[test]
    fn test_dedupe_is_case_sensitive() {
        let tags = vec!["React".to_string(), "react".to_string()];
        assert_eq!(dedupe(tags).len(), 2);
    }

    #[tokio::test]
    async fn test_tree_fetch_failure_yields_empty() {
        let github = Arc::new(GithubClient::with_base_url(
            "http://127.0.0.1:9".to_string(),
            None,
            Duration::from_millis(500),
        ));
        let detector = TechDetector::new(github);

        let tags = detector.detect("someone", "some-repo").await;
        assert!(tags.is_empty());
    }
}
