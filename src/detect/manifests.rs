//! Second-level manifest heuristics
//!
//! Each heuristic owns one key-file shape: it decides whether a tree path is
//! its key file, and derives framework/ecosystem tags from the fetched file
//! contents. Heuristics are best-effort text classifiers; malformed content
//! yields no tags rather than an error.

use serde_json::Value;
use tracing::debug;

/// A heuristic over one kind of key file
pub trait ManifestHeuristic: Send + Sync {
    /// Key-file name, used for logging and lookups
    fn name(&self) -> &str;

    /// Whether this lowercased tree path is this heuristic's key file
    fn matches(&self, path: &str) -> bool;

    /// Tags derived from the file contents
    fn tags(&self, content: &str) -> Vec<String>;
}

/// All heuristics in their canonical order.
pub fn default_heuristics() -> Vec<Box<dyn ManifestHeuristic>> {
    vec![
        Box::new(PackageJsonHeuristic),
        Box::new(RequirementsHeuristic),
        Box::new(PomXmlHeuristic),
    ]
}

/// Whether a lowercased path names a Dockerfile.
///
/// Recognized but carries no content heuristic: presence alone yields no
/// tags, matching the listing behavior this detector reproduces.
pub fn is_dockerfile(path: &str) -> bool {
    path == "dockerfile" || path.ends_with(".dockerfile") || path.ends_with("/dockerfile")
}

/// Root package.json: framework tags from the union of dependency maps.
pub struct PackageJsonHeuristic;

/// Dependency-name-to-tag table for package.json
const NPM_DEPENDENCY_TAGS: &[(&str, &str)] = &[
    ("react", "React"),
    ("next", "Next.js"),
    ("@angular/core", "Angular"),
    ("express", "Express.js"),
    ("react-native", "React Native"),
    ("tensorflow", "TensorFlow"),
    ("@tensorflow/tfjs", "TensorFlow"),
    ("torch", "PyTorch"),
    ("pytorch", "PyTorch"),
];

impl ManifestHeuristic for PackageJsonHeuristic {
    fn name(&self) -> &str {
        "package.json"
    }

    fn matches(&self, path: &str) -> bool {
        path == "package.json"
    }

    fn tags(&self, content: &str) -> Vec<String> {
        let parsed: Value = match serde_json::from_str(content) {
            Ok(v) => v,
            Err(e) => {
                debug!(error = %e, "package.json did not parse, skipping");
                return Vec::new();
            }
        };

        let mut tags = Vec::new();
        for (dependency, tag) in NPM_DEPENDENCY_TAGS {
            let present = ["dependencies", "devDependencies"]
                .iter()
                .any(|section| parsed[section].get(dependency).is_some());
            if present && !tags.iter().any(|t| t == tag) {
                tags.push((*tag).to_string());
            }
        }
        tags
    }
}

/// Root requirements.txt: ecosystem tags from package-name keywords.
pub struct RequirementsHeuristic;

/// Keyword-to-tag table for Python requirements
const PYTHON_KEYWORD_TAGS: &[(&[&str], &str)] = &[
    (&["flask", "django"], "Web Framework (Python)"),
    (&["numpy", "pandas"], "Data Science"),
    (&["scikit-learn", "tensorflow"], "Machine Learning"),
];

impl ManifestHeuristic for RequirementsHeuristic {
    fn name(&self) -> &str {
        "requirements.txt"
    }

    fn matches(&self, path: &str) -> bool {
        path == "requirements.txt"
    }

    fn tags(&self, content: &str) -> Vec<String> {
        let mut tags = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // package name before any version-constraint operator
            let package = line
                .split("==")
                .next()
                .and_then(|s| s.split('>').next())
                .and_then(|s| s.split('<').next())
                .unwrap_or(line)
                .trim()
                .to_lowercase();

            for (keywords, tag) in PYTHON_KEYWORD_TAGS {
                if keywords.iter().any(|k| package.contains(k))
                    && !tags.iter().any(|t| t == tag)
                {
                    tags.push((*tag).to_string());
                }
            }
        }
        tags
    }
}

/// Root pom.xml: raw substring markers, no XML parsing needed.
pub struct PomXmlHeuristic;

impl ManifestHeuristic for PomXmlHeuristic {
    fn name(&self) -> &str {
        "pom.xml"
    }

    fn matches(&self, path: &str) -> bool {
        path == "pom.xml"
    }

    fn tags(&self, content: &str) -> Vec<String> {
        let mut tags = Vec::new();
        if content.contains("<groupId>org.springframework</groupId>") {
            tags.push("Spring Boot".to_string());
        }
        if content.contains("<artifactId>maven-surefire-plugin</artifactId>") {
            tags.push("Maven".to_string());
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_json_react_and_next() {
        let content = r#"{
            "dependencies": {"react": "^18.0.0", "next": "14.0.0"},
            "devDependencies": {"typescript": "^5.0.0"}
        }"#;

        let tags = PackageJsonHeuristic.tags(content);
        assert!(tags.contains(&"React".to_string()));
        assert!(tags.contains(&"Next.js".to_string()));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_package_json_dev_dependencies_count() {
        let content = r#"{"devDependencies": {"react-native": "0.73.0"}}"#;
        let tags = PackageJsonHeuristic.tags(content);
        assert_eq!(tags, vec!["React Native"]);
    }

    #[test]
    fn test_package_json_tensorflow_variants_dedupe() {
        let content = r#"{"dependencies": {"tensorflow": "1.0", "@tensorflow/tfjs": "4.0"}}"#;
        let tags = PackageJsonHeuristic.tags(content);
        assert_eq!(tags, vec!["TensorFlow"]);
    }

    #[test]
    fn test_package_json_exact_names_only() {
        // react-dom is not react
        let content = r#"{"dependencies": {"react-dom": "^18.0.0"}}"#;
        let tags = PackageJsonHeuristic.tags(content);
        assert!(tags.is_empty());
    }

    #[test]
    fn test_package_json_invalid_json_yields_nothing() {
        assert!(PackageJsonHeuristic.tags("not json {").is_empty());
    }

    #[test]
    fn test_requirements_keywords() {
        let content = "# web stack\nflask==2.3.0\nnumpy>=1.24\npandas<3\n";
        let tags = RequirementsHeuristic.tags(content);
        assert_eq!(tags, vec!["Web Framework (Python)", "Data Science"]);
    }

    #[test]
    fn test_requirements_version_operators_stripped() {
        let tags = RequirementsHeuristic.tags("scikit-learn>=1.3,<2.0\n");
        assert_eq!(tags, vec!["Machine Learning"]);
    }

    #[test]
    fn test_requirements_comments_and_blanks_skipped() {
        let tags = RequirementsHeuristic.tags("# flask would match if uncommented\n\n");
        assert!(tags.is_empty());
    }

    #[test]
    fn test_pom_markers() {
        let content = r#"<project>
            <dependencies>
                <dependency><groupId>org.springframework</groupId></dependency>
            </dependencies>
            <build><plugins>
                <plugin><artifactId>maven-surefire-plugin</artifactId></plugin>
            </plugins></build>
        </project>"#;

        let tags = PomXmlHeuristic.tags(content);
        assert_eq!(tags, vec!["Spring Boot", "Maven"]);
    }

    #[test]
    fn test_pom_without_markers() {
        assert!(PomXmlHeuristic.tags("<project></project>").is_empty());
    }

    #[test]
    fn test_key_file_matching_is_root_only() {
        assert!(PackageJsonHeuristic.matches("package.json"));
        assert!(!PackageJsonHeuristic.matches("frontend/package.json"));
        assert!(RequirementsHeuristic.matches("requirements.txt"));
        assert!(!RequirementsHeuristic.matches("docs/requirements.txt"));
    }

    #[test]
    fn test_dockerfile_paths() {
        assert!(is_dockerfile("dockerfile"));
        assert!(is_dockerfile("build/prod.dockerfile"));
        assert!(is_dockerfile("docker/dockerfile"));
        assert!(!is_dockerfile("dockerfile.md"));
    }
}
