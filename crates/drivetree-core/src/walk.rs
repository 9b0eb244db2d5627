//! Depth-first, pre-order traversal with path tracking.

use crate::entry::Entry;
use crate::path::TreePath;

impl Entry {
    /// Visit this entry and every descendant in pre-order.
    ///
    /// The visitor receives each entry with its path relative to `self`
    /// (the empty path for `self`). Children are visited in position order.
    /// The first visitor error stops the walk and is returned unchanged.
    pub fn recurse<E, F>(&self, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(&Entry, &TreePath) -> Result<(), E>,
    {
        let mut path = TreePath::root();
        recurse_entry(self, &mut path, &mut visitor)
    }

    /// Mutable form of [`recurse`](Self::recurse).
    ///
    /// The visitor runs before the entry's children are walked, so changes
    /// it makes to the child list are seen by the rest of the walk.
    pub fn recurse_mut<E, F>(&mut self, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(&mut Entry, &TreePath) -> Result<(), E>,
    {
        let mut path = TreePath::root();
        recurse_entry_mut(self, &mut path, &mut visitor)
    }

    /// Iterate over this entry and every descendant in pre-order.
    ///
    /// Yields the same sequence as [`recurse`](Self::recurse).
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(TreePath::root(), self)],
        }
    }
}

fn recurse_entry<E, F>(entry: &Entry, path: &mut TreePath, visitor: &mut F) -> Result<(), E>
where
    F: FnMut(&Entry, &TreePath) -> Result<(), E>,
{
    visitor(entry, &*path)?;
    if let Some(container) = entry.as_container() {
        for (index, child) in container.children().iter().enumerate() {
            path.push(index);
            let result = recurse_entry(child, path, visitor);
            path.pop();
            result?;
        }
    }
    Ok(())
}

fn recurse_entry_mut<E, F>(entry: &mut Entry, path: &mut TreePath, visitor: &mut F) -> Result<(), E>
where
    F: FnMut(&mut Entry, &TreePath) -> Result<(), E>,
{
    visitor(&mut *entry, &*path)?;
    if let Some(container) = entry.as_container_mut() {
        for (index, child) in container.children_mut().iter_mut().enumerate() {
            path.push(index);
            let result = recurse_entry_mut(child, path, visitor);
            path.pop();
            result?;
        }
    }
    Ok(())
}

/// Pre-order iterator returned by [`Entry::walk`].
pub struct Walk<'a> {
    stack: Vec<(TreePath, &'a Entry)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (TreePath, &'a Entry);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, entry) = self.stack.pop()?;
        if let Some(container) = entry.as_container() {
            // Reverse so the first child is popped next.
            for (index, child) in container.children().iter().enumerate().rev() {
                self.stack.push((path.child(index), child));
            }
        }
        Some((path, entry))
    }
}
