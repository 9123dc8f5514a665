//! Extension-based language classification

use std::collections::HashSet;

/// Fixed extension-to-tag table. Order determines tag insertion order.
const EXTENSION_TAGS: &[(&[&str], &str)] = &[
    (&["js", "jsx"], "JavaScript"),
    (&["ts", "tsx"], "TypeScript"),
    (&["py"], "Python"),
    (&["java"], "Java"),
    (&["cpp", "c"], "C++"),
    (&["html"], "HTML"),
    (&["css"], "CSS"),
    (&["sql"], "SQL"),
];

/// Collects the set of lowercased file extensions from blob paths.
///
/// Paths are expected to be lowercased already; files without a dot
/// contribute nothing.
pub fn collect_extensions<'a>(paths: impl Iterator<Item = &'a str>) -> HashSet<String> {
    let mut extensions = HashSet::new();
    for path in paths {
        if let Some((_, ext)) = path.rsplit_once('.') {
            if !ext.is_empty() && !ext.contains('/') {
                extensions.insert(ext.to_string());
            }
        }
    }
    extensions
}

/// Maps a set of seen extensions to language tags via the fixed table.
pub fn language_tags(extensions: &HashSet<String>) -> Vec<String> {
    let mut tags = Vec::new();
    for (exts, tag) in EXTENSION_TAGS {
        if exts.iter().any(|e| extensions.contains(*e)) {
            tags.push((*tag).to_string());
        }
    }
    tags
}
