//! Error types for channel-manifest

use std::path::PathBuf;

/// Result type for channel-manifest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in channel-manifest operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot read plugin list {path}: {source}")]
    ListUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read declaration {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid declaration {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
