//! Positional paths and their resolution.
//!
//! A [`TreePath`] is a list of child indices walked from a root. It carries
//! no identity: removing or inserting a child shifts the positions after it,
//! and a path computed earlier may then address a different entry or none at
//! all. A [`Locator`] is a path stamped with the identity and revision of
//! every container on its route, so resolving it after such a change fails
//! with `StalePath` instead of reading a shifted sibling.
//!
//! Container identity also catches a subtree replaced or swapped through
//! `&mut Entry`. A file has no identity of its own: overwriting the file a
//! locator ends on, in place, leaves the locator valid.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::entry::Entry;
use crate::error::{ParsePathError, Result, TreeError};

/// Ordered child indices locating an entry relative to a root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreePath(Vec<usize>);

impl TreePath {
    /// The empty path, which resolves to the root itself.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Create an empty path with room for `depth` indices.
    pub fn with_capacity(depth: usize) -> Self {
        Self(Vec::with_capacity(depth))
    }

    /// Descend into child `index`.
    pub fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    /// Step back out of the last child.
    pub fn pop(&mut self) -> Option<usize> {
        self.0.pop()
    }

    /// Number of indices.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Distance from the root; same as [`len`](Self::len).
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The final index, if any.
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Path of the parent entry, or `None` for the root.
    pub fn parent(&self) -> Option<TreePath> {
        let (_, parent) = self.0.split_last()?;
        Some(Self(parent.to_vec()))
    }

    /// Path of child `index` below this one.
    pub fn child(&self, index: usize) -> TreePath {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    /// Check if `prefix` is a (not necessarily strict) prefix of this path.
    pub fn starts_with(&self, prefix: &TreePath) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Check if `other` lies strictly below this path.
    pub fn is_strict_prefix_of(&self, other: &TreePath) -> bool {
        other.len() > self.len() && other.starts_with(self)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }
}

impl AsRef<[usize]> for TreePath {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for TreePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl<const N: usize> From<[usize; N]> for TreePath {
    fn from(indices: [usize; N]) -> Self {
        Self(indices.to_vec())
    }
}

impl From<&[usize]> for TreePath {
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

impl FromIterator<usize> for TreePath {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

/// Parses slash-separated indices: `"0/2/1"`. `""` and `"/"` are the root;
/// any other empty segment is an error.
impl FromStr for TreePath {
    type Err = ParsePathError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "/" {
            return Ok(Self::root());
        }
        s.split('/')
            .map(|segment| {
                segment.parse::<usize>().map_err(|source| ParsePathError {
                    segment: segment.to_string(),
                    source,
                })
            })
            .collect()
    }
}

/// Identity and revision of one child list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Stamp {
    list: u64,
    revision: u64,
}

impl Stamp {
    fn of(entry: &Entry) -> Option<Self> {
        entry.as_container().map(|container| {
            let children = container.children();
            Self {
                list: children.id(),
                revision: children.revision(),
            }
        })
    }
}

/// One step of a [`Locator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step {
    index: usize,
    stamp: Stamp,
}

/// A [`TreePath`] stamped with the containers it crosses and the one it
/// reaches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    steps: Vec<Step>,
    target: Option<Stamp>,
}

impl Locator {
    /// The plain path this locator was taken from.
    pub fn path(&self) -> TreePath {
        self.steps.iter().map(|step| step.index).collect()
    }

    pub fn depth(&self) -> usize {
        self.steps.len()
    }
}

impl Entry {
    /// Walk `path` from this entry and return the entry it reaches.
    ///
    /// Each step requires a container and an in-range index; the first
    /// failing step aborts resolution with its error.
    pub fn resolve(&self, path: impl AsRef<[usize]>) -> Result<&Entry> {
        let mut current = self;
        for (depth, &index) in path.as_ref().iter().enumerate() {
            trace!(depth, index, "resolving path step");
            current = current.child_at(index)?;
        }
        Ok(current)
    }

    /// Walk `path` and borrow the reached entry for mutation.
    pub fn resolve_mut(&mut self, path: impl AsRef<[usize]>) -> Result<&mut Entry> {
        let mut current = self;
        for (depth, &index) in path.as_ref().iter().enumerate() {
            trace!(depth, index, "resolving path step");
            current = current.child_at_mut(index)?;
        }
        Ok(current)
    }

    /// Resolve `path` and stamp it with the current container identities
    /// and revisions.
    pub fn locate(&self, path: impl AsRef<[usize]>) -> Result<Locator> {
        let indices = path.as_ref();
        let mut steps = Vec::with_capacity(indices.len());
        let mut current = self;
        for &index in indices {
            let container = current.container()?;
            let children = container.children();
            let child = children.get(index)?;
            steps.push(Step {
                index,
                stamp: Stamp {
                    list: children.id(),
                    revision: children.revision(),
                },
            });
            current = child;
        }
        Ok(Locator {
            steps,
            target: Stamp::of(current),
        })
    }

    /// Resolve a locator, failing with `StalePath` if any container on its
    /// route was restructured or replaced since it was taken.
    pub fn resolve_locator(&self, locator: &Locator) -> Result<&Entry> {
        let mut current = self;
        for (depth, step) in locator.steps.iter().enumerate() {
            let children = current.container()?.children();
            check_stamp(children.id(), children.revision(), step.stamp, depth)?;
            current = children.get(step.index)?;
        }
        check_target(current, locator)?;
        Ok(current)
    }

    /// Mutable form of [`resolve_locator`](Self::resolve_locator).
    pub fn resolve_locator_mut(&mut self, locator: &Locator) -> Result<&mut Entry> {
        let mut current = self;
        for (depth, step) in locator.steps.iter().enumerate() {
            let children = current.container_mut()?.children_mut();
            check_stamp(children.id(), children.revision(), step.stamp, depth)?;
            current = children.get_mut(step.index)?;
        }
        check_target(current, locator)?;
        Ok(current)
    }
}

fn check_stamp(list: u64, revision: u64, stamp: Stamp, depth: usize) -> Result<()> {
    if list != stamp.list || revision != stamp.revision {
        trace!(depth, "locator crosses a changed container");
        return Err(TreeError::StalePath { depth });
    }
    Ok(())
}

fn check_target(entry: &Entry, locator: &Locator) -> Result<()> {
    if Stamp::of(entry) != locator.target {
        return Err(TreeError::StalePath {
            depth: locator.steps.len(),
        });
    }
    Ok(())
}
