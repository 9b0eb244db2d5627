//! Name search over a tree.

use drivetree_core::{Entry, EntryKind, TreePath};
use globset::{Glob, GlobMatcher};
use serde::Serialize;
use tracing::debug;

use crate::error::ReportError;

/// An entry found by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    /// Path from the search root.
    pub path: TreePath,
    /// Kind of the matched entry.
    pub kind: EntryKind,
    /// Display name of the matched entry.
    pub name: String,
}

/// Matches entry names against a glob pattern.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    pattern: String,
    matcher: GlobMatcher,
}

impl NameMatcher {
    /// Compile `pattern` (glob syntax, e.g. `*.rs`).
    pub fn new(pattern: impl Into<String>) -> Result<Self, ReportError> {
        let pattern = pattern.into();
        let matcher = Glob::new(&pattern)
            .map_err(|e| ReportError::pattern(&pattern, e))?
            .compile_matcher();
        Ok(Self { pattern, matcher })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Check if `name` matches.
    pub fn is_match(&self, name: &str) -> bool {
        self.matcher.is_match(name)
    }

    /// Every entry under `root` whose name matches, in pre-order.
    pub fn find(&self, root: &Entry) -> Vec<SearchMatch> {
        let matches: Vec<_> = root
            .walk()
            .filter(|(_, entry)| self.is_match(&entry.name()))
            .map(|(path, entry)| SearchMatch {
                path,
                kind: entry.kind(),
                name: entry.name().into_owned(),
            })
            .collect();
        debug!(pattern = %self.pattern, found = matches.len(), "searched tree");
        matches
    }
}

/// Paths of every entry named exactly `name`, in pre-order.
pub fn find_by_name(root: &Entry, name: &str) -> Vec<TreePath> {
    root.walk()
        .filter(|(_, entry)| entry.name() == name)
        .map(|(path, _)| path)
        .collect()
}

/// Every entry whose name matches the glob `pattern`, in pre-order.
pub fn find_matching(root: &Entry, pattern: &str) -> Result<Vec<SearchMatch>, ReportError> {
    Ok(NameMatcher::new(pattern)?.find(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Entry {
        Entry::drive(
            'c',
            [
                Entry::directory("src", [Entry::file("main.rs"), Entry::file("lib.rs")]),
                Entry::directory("docs", [Entry::file("main.md")]),
            ],
        )
    }

    #[test]
    fn test_find_by_name() {
        let paths = find_by_name(&tree(), "main.rs");
        assert_eq!(paths, vec![TreePath::from([0, 0])]);
        assert!(find_by_name(&tree(), "missing").is_empty());
    }

    #[test]
    fn test_find_matching_glob() {
        let found = find_matching(&tree(), "main.*").unwrap();
        let paths: Vec<_> = found.iter().map(|m| m.path.clone()).collect();
        assert_eq!(paths, vec![TreePath::from([0, 0]), TreePath::from([1, 0])]);
        assert!(found.iter().all(|m| m.kind == EntryKind::File));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = find_matching(&tree(), "[").unwrap_err();
        assert!(matches!(err, ReportError::InvalidPattern { .. }));
        assert!(err.to_string().contains("'['"));
    }
}
