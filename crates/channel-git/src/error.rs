//! Error types for channel-git

use std::path::PathBuf;

/// Result type for channel-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in channel-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("No release tags in {path}")]
    NoTags { path: PathBuf },

    #[error("Tag '{tag}' yields an empty version string")]
    EmptyVersion { tag: String },

    #[error("Tag '{tag}' not found in {path}")]
    TagNotFound { tag: String, path: PathBuf },

    #[error("Tag '{tag}' has an out-of-range commit time ({seconds})")]
    InvalidCommitTime { tag: String, seconds: i64 },
}
