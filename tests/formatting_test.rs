//! Project formatting and filtering integration tests

use folio::github::RepoSummary;
use folio::projects::{derive_title, format_card, ProjectFilter};

fn repo(name: &str, description: Option<&str>, topics: &[&str]) -> RepoSummary {
    serde_json::from_value(serde_json::json!({
        "id": 1234,
        "name": name,
        "description": description,
        "language": "JavaScript",
        "topics": topics,
        "stargazers_count": 9,
        "forks_count": 3,
        "html_url": format!("https://github.com/anurag-yv/{name}"),
        "homepage": "https://demo.example",
    }))
    .unwrap()
}

#[test]
fn test_title_derivation_removes_all_separators() {
    for (name, expected) in [
        ("mental-health-awareness-among-children", "Mental Health Awareness Among Children"),
        ("talk_to_me", "Talk To Me"),
        ("mixed-sep_name", "Mixed Sep Name"),
        ("single", "Single"),
    ] {
        let title = derive_title(name);
        assert_eq!(title, expected);
        assert!(!title.contains('-') && !title.contains('_'));
    }
}

#[test]
fn test_title_derivation_capitalizes_each_word() {
    let title = derive_title("algo-quest_arena");
    for word in title.split(' ') {
        assert!(
            word.chars().next().unwrap().is_uppercase(),
            "word {word} not capitalized"
        );
    }
}

#[test]
fn test_card_identifier_matches_source_repository() {
    let repo = repo("algoquest", Some("practice arena"), &[]);
    let card = format_card(&repo, Vec::new());
    assert_eq!(card.id, repo.id);
}

#[test]
fn test_card_technologies_have_no_duplicates() {
    // topics overlap with the primary language and the detected tags
    let repo = repo(
        "algoquest",
        Some("React-based algorithm practice"),
        &["javascript", "React", "algorithms"],
    );
    let detected = vec![
        "JavaScript".to_string(),
        "React".to_string(),
        "HTML".to_string(),
    ];

    let card = format_card(&repo, detected);

    let mut sorted = card.technologies.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), card.technologies.len(), "{:?}", card.technologies);

    // primary language always leads
    assert_eq!(card.technologies[0], "JavaScript");
}

#[test]
fn test_card_carries_repository_metadata() {
    let repo = repo("talktome", None, &[]);
    let card = format_card(&repo, Vec::new());

    assert_eq!(card.github, "https://github.com/anurag-yv/talktome");
    assert_eq!(card.demo.as_deref(), Some("https://demo.example"));
    assert_eq!(card.stars, 9);
    assert_eq!(card.forks, 3);
    assert_eq!(card.description, "No description provided");
    assert_eq!(card.image.as_deref(), Some("talktome.png"));
}

#[test]
fn test_filter_is_allow_list_not_general_purpose() {
    let filter = ProjectFilter::default();
    let repos = vec![
        repo("AlgoQuest", None, &[]),
        repo("my-config-files", None, &[]),
        repo("Mental-Health-Awareness-Among-Children", None, &[]),
        repo("course-homework", None, &[]),
    ];

    let kept = filter.apply(repos);
    assert_eq!(kept.len(), 2);
    assert!(kept.iter().all(|r| {
        let n = r.name.to_lowercase();
        n.contains("algoquest") || n.contains("mental-health")
    }));
}
