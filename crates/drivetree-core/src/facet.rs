//! Capabilities shared between entry kinds.
//!
//! [`Named`] is implemented by directories and files, [`Container`] by
//! drives and directories. [`Entry`] narrows to either facet with
//! [`Entry::as_named`] and [`Entry::as_container`].

use std::sync::atomic::{AtomicU64, Ordering};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entry::Entry;
use crate::error::{Result, TreeError};

/// Process-unique identity of one child list.
///
/// Every new, cloned, defaulted or deserialized list draws a fresh id, so a
/// container that replaced another in place never shares its identity.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ListId(u64);

impl ListId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub(crate) fn get(&self) -> u64 {
        self.0
    }
}

impl Default for ListId {
    fn default() -> Self {
        Self::next()
    }
}

impl Clone for ListId {
    fn clone(&self) -> Self {
        Self::next()
    }
}

/// Ordered children owned by a container.
///
/// The position of a child is its only address. Each list carries a unique
/// id and a revision counter bumped by every operation that shifts existing
/// positions, so stamped [`Locator`](crate::Locator)s can detect that they
/// went stale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Children {
    entries: Vec<Entry>,
    #[serde(skip)]
    id: ListId,
    #[serde(skip)]
    revision: u64,
}

impl Children {
    /// Create an empty child list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no children.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of position-shifting changes made so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn id(&self) -> u64 {
        self.id.get()
    }

    /// Get the child at `index`.
    pub fn get(&self, index: usize) -> Result<&Entry> {
        let len = self.entries.len();
        self.entries
            .get(index)
            .ok_or(TreeError::NotFound { index, len })
    }

    /// Get the child at `index` for in-place mutation.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Entry> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(TreeError::NotFound { index, len })
    }

    /// Add a child after the current last one.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Insert a child at `index`, shifting later children right.
    ///
    /// `index == len` appends and leaves existing positions untouched.
    pub fn insert(&mut self, index: usize, entry: Entry) -> Result<()> {
        let len = self.entries.len();
        if index > len {
            return Err(TreeError::NotFound { index, len });
        }
        self.entries.insert(index, entry);
        if index < len {
            self.revision += 1;
            debug!(index, revision = self.revision, "inserted child, later paths shifted");
        }
        Ok(())
    }

    /// Remove the child at `index`, shifting later children left.
    ///
    /// Invalidates every path through this container at or past `index`.
    pub fn remove(&mut self, index: usize) -> Result<Entry> {
        let len = self.entries.len();
        if index >= len {
            return Err(TreeError::NotFound { index, len });
        }
        let removed = self.entries.remove(index);
        self.revision += 1;
        debug!(index, revision = self.revision, "removed child, later paths shifted");
        Ok(removed)
    }

    /// Children in position order.
    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterate over children in position order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Iterate mutably over children in position order.
    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Entry> {
        self.entries.iter_mut()
    }
}

impl From<Vec<Entry>> for Children {
    fn from(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            id: ListId::next(),
            revision: 0,
        }
    }
}

impl FromIterator<Entry> for Children {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a Children {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An entry with a mutable display name.
pub trait Named {
    /// The stored name.
    fn name(&self) -> &str;

    /// Replace the stored name in place.
    fn rename(&mut self, new_name: CompactString);
}

/// An entry owning an ordered sequence of children.
pub trait Container {
    /// Borrow the child list.
    fn children(&self) -> &Children;

    /// Borrow the child list mutably.
    fn children_mut(&mut self) -> &mut Children;

    /// Number of direct children.
    fn child_count(&self) -> usize {
        self.children().len()
    }

    /// Child at `index`, or `NotFound` outside `0..child_count()`.
    fn child_at(&self, index: usize) -> Result<&Entry> {
        self.children().get(index)
    }

    /// Mutable child at `index`, or `NotFound` outside `0..child_count()`.
    fn child_at_mut(&mut self, index: usize) -> Result<&mut Entry> {
        self.children_mut().get_mut(index)
    }

    /// Take ownership of `entry` as the new last child.
    fn append(&mut self, entry: Entry) {
        self.children_mut().push(entry);
    }

    /// Insert `entry` at `index`, shifting later children right.
    fn insert_at(&mut self, index: usize, entry: Entry) -> Result<()> {
        self.children_mut().insert(index, entry)
    }

    /// Remove and return the child at `index`.
    fn remove_at(&mut self, index: usize) -> Result<Entry> {
        self.children_mut().remove(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::File;

    fn files(names: &[&str]) -> Children {
        names.iter().map(|n| Entry::from(File::new(*n))).collect()
    }

    #[test]
    fn test_get_out_of_range() {
        let children = files(&["a", "b"]);
        assert_eq!(children.get(1).unwrap().name(), "b");
        assert_eq!(
            children.get(2).unwrap_err(),
            TreeError::NotFound { index: 2, len: 2 }
        );
    }

    #[test]
    fn test_push_keeps_revision() {
        let mut children = files(&["a"]);
        children.push(File::new("b").into());
        assert_eq!(children.len(), 2);
        assert_eq!(children.revision(), 0);
    }

    #[test]
    fn test_insert_bumps_revision_only_when_shifting() {
        let mut children = files(&["a", "c"]);

        children.insert(2, File::new("d").into()).unwrap();
        assert_eq!(children.revision(), 0);

        children.insert(1, File::new("b").into()).unwrap();
        assert_eq!(children.revision(), 1);

        let names: Vec<_> = children.iter().map(|e| e.name().into_owned()).collect();
        assert_eq!(names, ["a", "b", "c", "d"]);

        assert!(children.insert(9, File::new("z").into()).is_err());
        assert_eq!(children.revision(), 1);
    }

    #[test]
    fn test_lists_get_distinct_ids() {
        let children = files(&["a"]);
        let cloned = children.clone();
        assert_ne!(children.id(), cloned.id());
        assert_ne!(Children::new().id(), Children::default().id());

        let parsed: Children = serde_json::from_str("[]").unwrap();
        assert_ne!(parsed.id(), Children::new().id());
    }

    #[test]
    fn test_remove_shifts_and_bumps_revision() {
        let mut children = files(&["a", "b", "c"]);
        let removed = children.remove(0).unwrap();

        assert_eq!(removed.name(), "a");
        assert_eq!(children.revision(), 1);
        assert_eq!(children.get(0).unwrap().name(), "b");
        assert!(children.remove(5).unwrap_err().is_not_found());
        assert_eq!(children.revision(), 1);
    }
}
