//! Global error handling for repo-snapshot
//!
//! Only failures that prevent producing a snapshot at all live here. Problems
//! with a single file are recorded as a [`crate::types::FileOutcome`] and
//! rendered inline instead.

use std::path::PathBuf;

use thiserror::Error;

/// Global error type for snapshot operations
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The scan root does not exist or is not a directory
    #[error("Directory '{}' not found", .0.display())]
    RootNotFound(PathBuf),

    /// Directory traversal errors
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Unexpected error
    #[error("{0}")]
    Unexpected(String),
}

/// Specialized Result type for snapshot operations
pub type Result<T> = std::result::Result<T, SnapshotError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T, E> {
    /// Add additional context to an error
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E: std::error::Error + 'static> ResultExt<T, E> for std::result::Result<T, E> {
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|e| {
            let context = f();
            SnapshotError::Unexpected(format!("{}: {}", context, e))
        })
    }
}
