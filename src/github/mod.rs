//! GitHub REST API integration

mod client;
mod types;

pub use client::{GithubClient, GithubError, DEFAULT_API_BASE};
pub use types::{ContentsResponse, RepoSummary, TreeEntry, TreeEntryKind, TreeResponse};
