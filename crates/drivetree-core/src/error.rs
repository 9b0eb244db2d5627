//! Error types for tree operations.

use std::num::ParseIntError;

use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

use crate::entry::EntryKind;

/// Result alias for tree operations.
pub type Result<T, E = TreeError> = std::result::Result<T, E>;

/// Errors raised by child access, path resolution and rename.
///
/// Every variant is terminal for the operation that raised it. Resolution
/// and traversal propagate these unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Child index outside `0..len`.
    #[error("No child at index {index} (container holds {len})")]
    NotFound { index: usize, len: usize },

    /// Container-style access on an entry without children.
    #[error("{kind} entries cannot hold children")]
    NoChildren { kind: EntryKind },

    /// Rename attempted on an entry without a name.
    #[error("{kind} entries cannot be renamed")]
    CannotRename { kind: EntryKind },

    /// A stamped locator crossed a container that was restructured after
    /// the locator was taken.
    #[error("Stale locator: container at depth {depth} changed since it was located")]
    StalePath { depth: usize },
}

/// Coarse classification of a [`TreeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Nothing lives at the requested position.
    NotFound,
    /// The entry has no name to change.
    CannotRename,
}

impl TreeError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } | Self::NoChildren { .. } | Self::StalePath { .. } => {
                ErrorKind::NotFound
            }
            Self::CannotRename { .. } => ErrorKind::CannotRename,
        }
    }

    /// Check if this is a `NotFound`-kind error.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Failure to parse a [`TreePath`](crate::TreePath) from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid path segment '{segment}': {source}")]
pub struct ParsePathError {
    pub segment: String,
    #[source]
    pub source: ParseIntError,
}
