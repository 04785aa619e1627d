//! Per-plugin declaration file parsing.
//!
//! The declaration is the plugin author's own `package.json`; its fields
//! are carried into the channel verbatim. Missing required keys, an
//! unreadable file, or malformed JSON all propagate to the caller, which
//! skips the plugin rather than aborting the run.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{Error, Result};

/// A plugin's declaration file.
///
/// `platforms` feeds the schema 1.2 platform-keyed release map;
/// `details` feeds the schema 2.0 details link. Each is optional at parse
/// time — the assembler for a given schema requires the one it needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PluginManifest {
    pub name: String,
    pub description: String,
    pub author: String,
    pub homepage: String,

    /// Repository slug (`owner/name`), used to form download URLs.
    pub repo: String,

    /// Platform tags in declaration order.
    #[serde(default)]
    pub platforms: Option<Vec<String>>,

    /// Details-page URL.
    #[serde(default)]
    pub details: Option<String>,
}

impl PluginManifest {
    /// Open and parse a declaration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
