//! Plugin listing and metadata for Channel Builder
//!
//! Resolves plugin names to installed plugin directories and parses each
//! plugin's `package.json` declaration file.

pub mod error;
pub mod listing;
pub mod manifest;

pub use error::{Error, Result};
pub use listing::{PluginList, declaration_path, default_packages_dir, DECLARATION_FILE};
pub use manifest::PluginManifest;
