//! Error types for reporting.

use drivetree_core::TreeError;
use thiserror::Error;

/// Errors raised while rendering or searching a tree.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The search pattern is not a valid glob.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// A tree operation failed.
    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl ReportError {
    /// Create a pattern error with the offending pattern attached.
    pub fn pattern(pattern: impl Into<String>, source: globset::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}
