//! Storage-level error types.

use thiserror::Error;

/// Post store errors.
///
/// `NotFound` is about data presence and callers branch on it.
/// `Read` and `Write` are about I/O health of the backing collection.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Failed to read post collection: {0}")]
    Read(String),

    #[error("Failed to write post collection: {0}")]
    Write(String),

    #[error("Post not found: {0}")]
    NotFound(String),
}
