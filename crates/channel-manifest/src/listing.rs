//! Plugin list resolution.
//!
//! A plugin list names the installed plugins to include in the channel, in
//! the order they should appear. It comes either from a newline-delimited
//! text file (blank lines and `#` comments ignored) or from names supplied
//! directly on the command line — there is no compiled-in default.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Fixed name of the per-plugin declaration file.
pub const DECLARATION_FILE: &str = "package.json";

/// An ordered list of plugin names to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginList {
    names: Vec<String>,
}

impl PluginList {
    /// Load from a newline-delimited file.
    ///
    /// Blank lines and lines starting with `#` are skipped; surrounding
    /// whitespace is trimmed. A file of only comments yields an empty list,
    /// which is a valid (empty-channel) run.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ListUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let names = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        Ok(Self { names })
    }

    /// Build from explicit names, preserving order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Plugin names in input order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

/// Where the host plugin manager keeps installed plugin directories.
///
/// Windows and macOS use the application-support directory; everything
/// else falls back to a dot-directory under the home directory.
pub fn default_packages_dir() -> PathBuf {
    if cfg!(any(target_os = "windows", target_os = "macos")) {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Sublime Text 2")
            .join("Packages")
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".Sublime Text 2")
            .join("Packages")
    }
}

/// Path of a plugin's declaration file under a packages directory.
///
/// No existence check: a missing file surfaces when the declaration is
/// read, and that failure only skips the one plugin.
pub fn declaration_path(packages_dir: &Path, plugin: &str) -> PathBuf {
    packages_dir.join(plugin).join(DECLARATION_FILE)
}
