//! Allow-list project filtering
//!
//! A static business rule, not a general-purpose filter: only repositories
//! whose name contains one of a short curated set of keys survive. Matching
//! is case-insensitive and separator-blind, so the key "mental health"
//! matches `Mental-Health-Awareness-Among-Children`.

use crate::github::RepoSummary;

/// Default allow-list keys for the portfolio
pub const DEFAULT_FILTER_KEYS: &[&str] = &["algoquest", "talktome", "talk to me", "mental health"];

/// Name-substring allow-list over repository summaries
#[derive(Debug, Clone)]
pub struct ProjectFilter {
    keys: Vec<String>,
}

impl ProjectFilter {
    pub fn new(keys: Vec<String>) -> Self {
        Self {
            keys: keys.into_iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Whether a repository name matches any allow-list key.
    pub fn matches(&self, name: &str) -> bool {
        let normalized = normalize(name);
        self.keys.iter().any(|key| normalized.contains(key.as_str()))
    }

    /// Keeps only the repositories whose name matches the allow-list.
    pub fn apply(&self, repos: Vec<RepoSummary>) -> Vec<RepoSummary> {
        repos.into_iter().filter(|r| self.matches(&r.name)).collect()
    }
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self::new(DEFAULT_FILTER_KEYS.iter().map(|k| k.to_string()).collect())
    }
}

/// Lowercases and replaces separator characters with spaces.
fn normalize(name: &str) -> String {
    name.to_lowercase().replace(['-', '_'], " ")
}
