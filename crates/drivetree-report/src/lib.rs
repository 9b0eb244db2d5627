//! Reporting over drivetree entries.
//!
//! Everything here is built on the pre-order traversal from
//! `drivetree-core`:
//!
//! - **Rendering** - one line per entry, indented by path depth
//! - **Search** - exact-name and glob lookups returning index paths
//! - **Validation** - empty names, nested drives, duplicate sibling names
//!
//! ```rust,ignore
//! use drivetree_core::Entry;
//! use drivetree_report::{render, RenderConfig};
//!
//! let root = Entry::drive('a', [Entry::directory("Animals", [Entry::file("Aardvark")])]);
//! let text = render(&root, &RenderConfig::default());
//! assert_eq!(text, "a\n\tAnimals\n\t\tAardvark\n");
//! ```

mod config;
mod error;
mod render;
mod search;
mod validate;

pub use config::{RenderConfig, RenderConfigBuilder};
pub use error::ReportError;
pub use render::{render, render_subtree, render_to};
pub use search::{NameMatcher, SearchMatch, find_by_name, find_matching};
pub use validate::{IssueKind, ValidationIssue, validate};

// Re-export core types
pub use drivetree_core::{Entry, TreePath};
