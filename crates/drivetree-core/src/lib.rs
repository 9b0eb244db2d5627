//! Core types for drivetree.
//!
//! This crate provides the in-memory entry tree (drives, directories and
//! files), the facets they share, positional paths, and pre-order
//! traversal.

mod entry;
mod error;
mod facet;
mod path;
mod stats;
mod walk;

pub use entry::{Directory, Drive, Entry, EntryKind, File};
pub use error::{ErrorKind, ParsePathError, Result, TreeError};
pub use facet::{Children, Container, Named};
pub use path::{Locator, TreePath};
pub use stats::TreeStats;
pub use walk::Walk;
