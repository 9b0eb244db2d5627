//! Structural checks that the type system does not enforce.

use std::convert::Infallible;

use drivetree_core::{Entry, TreePath};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Kind of validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    /// A directory or file has an empty name.
    EmptyName,
    /// A drive appears below the root.
    NestedDrive,
    /// Two siblings share a name.
    DuplicateName,
}

/// A problem found by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Path of the offending entry (the parent, for duplicate names).
    pub path: TreePath,
    /// Human-readable message.
    pub message: String,
    /// Kind of issue.
    pub kind: IssueKind,
}

impl ValidationIssue {
    /// Create a new validation issue.
    pub fn new(path: TreePath, message: impl Into<String>, kind: IssueKind) -> Self {
        Self {
            path,
            message: message.into(),
            kind,
        }
    }

    pub fn empty_name(path: TreePath) -> Self {
        let message = format!("Entry at {path} has an empty name");
        Self::new(path, message, IssueKind::EmptyName)
    }

    pub fn nested_drive(path: TreePath, letter: char) -> Self {
        let message = format!("Drive '{letter}' is nested at {path}");
        Self::new(path, message, IssueKind::NestedDrive)
    }

    pub fn duplicate_name(path: TreePath, name: &str) -> Self {
        let message = format!("Name '{name}' appears more than once under {path}");
        Self::new(path, message, IssueKind::DuplicateName)
    }
}

/// Scan the whole tree under `root` and collect every issue, in pre-order.
pub fn validate(root: &Entry) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let Ok(()) = root.recurse(|entry, path| {
        match entry.as_drive() {
            Some(drive) if !path.is_root() => {
                issues.push(ValidationIssue::nested_drive(path.clone(), drive.letter()));
            }
            _ => {}
        }

        if entry.as_named().is_some_and(|named| named.name().is_empty()) {
            issues.push(ValidationIssue::empty_name(path.clone()));
        }

        if let Some(container) = entry.as_container() {
            for name in container.children().iter().map(|c| c.name()).duplicates() {
                issues.push(ValidationIssue::duplicate_name(path.clone(), &name));
            }
        }
        Ok::<_, Infallible>(())
    });
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use drivetree_core::Drive;

    #[test]
    fn test_clean_tree_has_no_issues() {
        let root = Entry::drive('a', [Entry::directory("Animals", [Entry::file("Aardvark")])]);
        assert!(validate(&root).is_empty());
    }

    #[test]
    fn test_detects_each_issue_kind() {
        let root = Entry::drive(
            'a',
            [
                Entry::file(""),
                Entry::directory("dup", [Entry::from(Drive::new('b'))]),
                Entry::file("dup"),
            ],
        );

        let kinds: Vec<_> = validate(&root).iter().map(|issue| issue.kind).collect();
        assert_eq!(
            kinds,
            vec![IssueKind::DuplicateName, IssueKind::EmptyName, IssueKind::NestedDrive]
        );
    }
}
