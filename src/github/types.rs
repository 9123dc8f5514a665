//! Response types for the GitHub REST API
//!
//! Each upstream endpoint gets its own narrow record that deserializes only
//! the fields this crate consumes. Unexpected fields are ignored; missing
//! optional fields fall back to defaults instead of failing the whole
//! response.

use serde::{Deserialize, Serialize};

/// Summary of a repository as returned by `GET /users/{username}/repos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    /// Primary language as reported by GitHub (may be absent for empty repos)
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub html_url: String,
    #[serde(default)]
    pub fork: bool,
}

/// Kind of a git tree entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeEntryKind {
    Blob,
    Tree,
    /// Anything else the API may introduce (e.g. commit for submodules)
    #[serde(other)]
    Other,
}

/// One entry of a recursive git tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: TreeEntryKind,
}

impl TreeEntry {
    pub fn is_blob(&self) -> bool {
        self.kind == TreeEntryKind::Blob
    }
}

/// Response of `GET /repos/{owner}/{repo}/git/trees/{branch}?recursive=1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeResponse {
    #[serde(default)]
    pub tree: Vec<TreeEntry>,
    /// Set by GitHub when the tree was too large to return completely
    #[serde(default)]
    pub truncated: bool,
}

/// Response of `GET /repos/{owner}/{repo}/contents/{path}`.
///
/// The body arrives base64-encoded with embedded newlines.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentsResponse {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub encoding: String,
}
