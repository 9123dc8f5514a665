//! Repository-to-card formatting
//!
//! Merges repository metadata with detected technology tags and a small
//! curated image lookup into one display-ready `ProjectCard`.

use super::types::ProjectCard;
use crate::detect::dedupe;
use crate::github::RepoSummary;

/// Fallback description for repositories without one
const NO_DESCRIPTION: &str = "No description provided";

/// Curated name-substring to image filename lookup
const IMAGE_LOOKUP: &[(&str, &str)] = &[
    ("algoquest", "algoquest.png"),
    ("talktome", "talktome.png"),
    ("talk to me", "talktome.png"),
    ("mental-health-awareness-among-children", "mental-health.png"),
];

/// Derives a display title from a repository name.
///
/// Hyphens and underscores become spaces; the first letter of each word is
/// uppercased.
pub fn derive_title(name: &str) -> String {
    name.replace(['-', '_'], " ")
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<String>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Heuristic tags from the repository name and description.
pub fn curated_tags(name: &str, description: Option<&str>) -> Vec<String> {
    let name = name.to_lowercase();
    let description = description.unwrap_or("").to_lowercase();
    let mut tags = Vec::new();
    let mut add = |tag: &str| {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    };

    if name.contains("dsa") || name.contains("algorithm") || description.contains("algorithm") {
        add("Algorithms");
        add("Data Structures");
    }
    if name.contains("react") || description.contains("react") {
        add("React");
    }
    if name.contains("next") || description.contains("next.js") {
        add("Next.js");
    }
    if name.contains("ai")
        || name.contains("ml")
        || description.contains("ai")
        || description.contains("machine learning")
    {
        add("AI/ML");
    }
    if name.contains("web") || name.contains("frontend") || name.contains("website") {
        add("Web");
    }

    // per-project specials
    if name.contains("algoquest") {
        add("Competitive Programming");
        add("JavaScript");
    }
    if name.contains("talktome") || name.contains("talk to me") {
        add("Mental Health");
        add("Chatbot");
    }
    if name.contains("mental-health-awareness-among-children") {
        add("Mental Health");
        add("Awareness");
    }

    tags
}

/// Resolves the curated image filename for a repository name, if any.
pub fn image_for(name: &str) -> Option<String> {
    let name = name.to_lowercase();
    IMAGE_LOOKUP
        .iter()
        .find(|(key, _)| name.contains(key))
        .map(|(_, image)| (*image).to_string())
}

/// Builds one card from a repository and its detected tags.
///
/// Technologies are the deduplicated union of the primary language, the
/// repository topics, the curated name/description tags, and the detected
/// tags, in that order.
pub fn format_card(repo: &RepoSummary, detected: Vec<String>) -> ProjectCard {
    let mut technologies = Vec::new();
    if let Some(language) = &repo.language {
        technologies.push(language.clone());
    }
    technologies.extend(repo.topics.iter().cloned());
    technologies.extend(curated_tags(&repo.name, repo.description.as_deref()));
    technologies.extend(detected);

    ProjectCard {
        id: repo.id,
        title: derive_title(&repo.name),
        description: repo
            .description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        technologies: dedupe(technologies),
        github: repo.html_url.clone(),
        demo: repo.homepage.clone().filter(|h| !h.is_empty()),
        stars: repo.stargazers_count,
        forks: repo.forks_count,
        image: image_for(&repo.name),
    }
}
