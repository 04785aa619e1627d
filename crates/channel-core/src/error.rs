//! Error types for channel-core

use std::path::PathBuf;

/// Result type for channel-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in channel-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Declaration read/parse failure from channel-manifest
    #[error("Manifest error: {0}")]
    Manifest(#[from] channel_manifest::Error),

    /// Tag or timestamp resolution failure from channel-git
    #[error("Git error: {0}")]
    Git(#[from] channel_git::Error),

    /// Schema 1.2 needs a `platforms` list in the declaration
    #[error("Plugin '{plugin}' declares no platforms")]
    MissingPlatforms { plugin: String },

    /// Schema 2.0 needs a `details` link in the declaration
    #[error("Plugin '{plugin}' declares no details link")]
    MissingDetails { plugin: String },

    #[error("Cannot write channel {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read channel {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Channel {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot serialize channel document: {0}")]
    Serialize(#[source] serde_json::Error),
}
