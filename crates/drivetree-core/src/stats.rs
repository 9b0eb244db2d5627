//! Whole-tree summary statistics.

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::entry::{Entry, EntryKind};
use crate::path::TreePath;

/// Summary counts for a tree, gathered in one pre-order pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total number of entries, root included.
    pub total_entries: u64,
    /// Number of drives.
    pub drives: u64,
    /// Number of directories.
    pub directories: u64,
    /// Number of files.
    pub files: u64,
    /// Deepest path length reached.
    pub max_depth: usize,
    /// Path of the container with the most direct children.
    pub widest: Option<(TreePath, usize)>,
}

impl TreeStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk `root` and count every entry below it.
    pub fn collect(root: &Entry) -> Self {
        let mut stats = Self::new();
        let Ok(()) = root.recurse(|entry, path| {
            stats.record(entry, path);
            Ok::<_, Infallible>(())
        });
        stats
    }

    /// Update stats with one visited entry.
    pub fn record(&mut self, entry: &Entry, path: &TreePath) {
        self.total_entries += 1;
        self.max_depth = self.max_depth.max(path.depth());

        match entry.kind() {
            EntryKind::Drive => self.drives += 1,
            EntryKind::Directory => self.directories += 1,
            EntryKind::File => self.files += 1,
        }

        if let Some(container) = entry.as_container() {
            let count = container.child_count();
            if count > 0 && self.widest.as_ref().is_none_or(|(_, widest)| count > *widest) {
                self.widest = Some((path.clone(), count));
            }
        }
    }

    /// Number of entries that can hold children.
    pub fn containers(&self) -> u64 {
        self.drives + self.directories
    }
}
