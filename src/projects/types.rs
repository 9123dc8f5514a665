//! Display-ready project records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One project card, ready for the presentation layer.
///
/// Created fresh on every aggregation run; `id` always equals the source
/// repository's id, and `technologies` never contains a duplicate tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCard {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    pub stars: u64,
    pub forks: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Result of one aggregation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectListing {
    pub generated_at: DateTime<Utc>,
    pub projects: Vec<ProjectCard>,
}

impl ProjectListing {
    pub fn new(projects: Vec<ProjectCard>) -> Self {
        Self {
            generated_at: Utc::now(),
            projects,
        }
    }
}
