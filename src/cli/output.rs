//! Output formatting for CLI results
//!
//! JSON for machine consumption, human-readable text otherwise.

use anyhow::{Context, Result};

use crate::projects::ProjectListing;
use crate::stats::PlatformStats;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// Human-readable formatted text
    Human,
}

/// Result of one upstream reachability probe
#[derive(Debug, Clone, serde::Serialize)]
pub struct HealthReport {
    pub name: String,
    pub healthy: bool,
}

/// Output formatter for CLI results
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats an aggregated project listing.
    pub fn format_projects(&self, listing: &ProjectListing) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(listing).context("Failed to serialize projects")
            }
            OutputFormat::Human => Ok(format_projects_human(listing)),
        }
    }

    /// Formats platform statistics.
    pub fn format_stats(&self, stats: &[PlatformStats]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(stats).context("Failed to serialize stats")
            }
            OutputFormat::Human => Ok(format_stats_human(stats)),
        }
    }

    /// Formats health probe results.
    pub fn format_health(&self, reports: &[HealthReport]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(reports).context("Failed to serialize health report")
            }
            OutputFormat::Human => Ok(format_health_human(reports)),
        }
    }
}

fn format_projects_human(listing: &ProjectListing) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Projects ({} cards, generated {})\n",
        listing.projects.len(),
        listing.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    for card in &listing.projects {
        out.push_str(&format!("\n  {} ({})\n", card.title, card.github));
        out.push_str(&format!("    {}\n", card.description));
        out.push_str(&format!(
            "    stars: {}  forks: {}\n",
            card.stars, card.forks
        ));
        if !card.technologies.is_empty() {
            out.push_str(&format!(
                "    technologies: {}\n",
                card.technologies.join(", ")
            ));
        }
        if let Some(demo) = &card.demo {
            out.push_str(&format!("    demo: {}\n", demo));
        }
    }
    out
}

fn format_stats_human(stats: &[PlatformStats]) -> String {
    let mut out = String::new();
    for platform in stats {
        out.push_str(&format!("{} ({})\n", platform.platform, platform.profile_url));
        if let Some(error) = &platform.error {
            out.push_str(&format!("  error: {}\n", error));
            continue;
        }
        if let Some(rating) = &platform.rating {
            out.push_str(&format!("  rating: {}\n", rating));
        }
        if let Some(rank) = &platform.rank {
            out.push_str(&format!("  rank: {}\n", rank));
        }
        if let Some(solved) = platform.solved {
            out.push_str(&format!("  solved: {}\n", solved));
        }
        if let Some(contests) = platform.contests {
            out.push_str(&format!("  contests: {}\n", contests));
        }
        if !platform.badges.is_empty() {
            out.push_str(&format!("  badges: {}\n", platform.badges.join(", ")));
        }
    }
    out
}

fn format_health_human(reports: &[HealthReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let status = if report.healthy { "ok" } else { "unreachable" };
        out.push_str(&format!("  {:<12} {}\n", report.name, status));
    }
    out
}
