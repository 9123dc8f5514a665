//! Technology detection pipeline integration tests
//!
//! Drives the pure stages of the detector (extension classification,
//! manifest heuristics, deduplication) and the degrade-to-empty behavior of
//! the full detector against an unreachable API.

use folio::detect::{
    collect_extensions, dedupe, default_heuristics, language_tags, ManifestHeuristic,
    PackageJsonHeuristic, PomXmlHeuristic, RequirementsHeuristic, TechDetector,
};
use folio::github::GithubClient;
use std::sync::Arc;
use std::time::Duration;

fn extension_tags(paths: &[&str]) -> Vec<String> {
    let lowered: Vec<String> = paths.iter().map(|p| p.to_lowercase()).collect();
    let extensions = collect_extensions(lowered.iter().map(String::as_str));
    language_tags(&extensions)
}

#[test]
fn test_tree_with_ts_and_css_yields_exactly_typescript_and_css() {
    let tags = extension_tags(&["src/App.tsx", "src/index.ts", "styles/main.css"]);

    assert_eq!(tags.len(), 2);
    assert!(tags.contains(&"TypeScript".to_string()));
    assert!(tags.contains(&"CSS".to_string()));
}

#[test]
fn test_full_stack_tree_classification() {
    let tags = extension_tags(&[
        "backend/server.py",
        "backend/schema.sql",
        "frontend/index.html",
        "frontend/app.js",
        "native/module.cpp",
    ]);

    for expected in ["Python", "SQL", "HTML", "JavaScript", "C++"] {
        assert!(tags.contains(&expected.to_string()), "missing {expected}");
    }
}

#[test]
fn test_detection_output_never_contains_duplicates() {
    // extension tags, curated tags, and manifest tags can all produce the
    // same label; the published sequence must still be duplicate-free
    let mut tags = extension_tags(&["a.js", "b.jsx"]);
    tags.extend(PackageJsonHeuristic.tags(r#"{"dependencies": {"react": "1", "next": "1"}}"#));
    tags.extend(PackageJsonHeuristic.tags(r#"{"dependencies": {"react": "1"}}"#));

    let deduped = dedupe(tags);
    let mut sorted = deduped.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), deduped.len());
}

#[test]
fn test_package_json_with_react_and_next_includes_both_frameworks() {
    let content = r#"{
        "name": "portfolio",
        "dependencies": {
            "react": "^18.2.0",
            "react-dom": "^18.2.0",
            "next": "14.1.0"
        }
    }"#;

    let tags = PackageJsonHeuristic.tags(content);
    assert!(tags.contains(&"React".to_string()));
    assert!(tags.contains(&"Next.js".to_string()));
}

#[test]
fn test_requirements_ecosystem_tags() {
    let content = "\
# core
django>=4.2
pandas==2.1.0
scikit-learn
";
    let tags = RequirementsHeuristic.tags(content);
    assert_eq!(
        tags,
        vec!["Web Framework (Python)", "Data Science", "Machine Learning"]
    );
}

#[test]
fn test_pom_spring_marker() {
    let content = "<project><groupId>org.springframework</groupId></project>";
    assert_eq!(PomXmlHeuristic.tags(content), vec!["Spring Boot"]);
}

#[test]
fn test_heuristics_match_root_key_files_only() {
    for heuristic in default_heuristics() {
        let root = heuristic.name().to_string();
        let nested = format!("vendored/{root}");
        assert!(heuristic.matches(&root), "{root} should match at root");
        assert!(!heuristic.matches(&nested), "{nested} should not match");
    }
}

#[tokio::test]
async fn test_tree_fetch_failure_yields_empty_sequence() {
    let github = Arc::new(GithubClient::with_base_url(
        "http://127.0.0.1:9".to_string(),
        None,
        Duration::from_millis(500),
    ));
    let detector = TechDetector::new(github);

    // must not panic or propagate an error past the detector boundary
    let tags = detector.detect("someone", "unreachable-repo").await;
    assert!(tags.is_empty());
}
