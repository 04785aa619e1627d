//! Installed-plugin directory fixtures.
//!
//! A [`PluginFixture`] is a plugin directory as the host plugin manager
//! would lay it out: a git checkout containing a `package.json`
//! declaration at its root.

use std::fs;
use std::path::{Path, PathBuf};

use git2::Repository;

use crate::git::{commit_file, init_repo, tag_head};

/// Builder for a plugin directory under a packages root.
pub struct PluginFixture {
    dir: PathBuf,
    repo: Repository,
}

impl PluginFixture {
    /// Creates `<packages_root>/<name>` with an initialised git repository.
    ///
    /// # Panics
    /// Panics on filesystem or git failures.
    pub fn create(packages_root: &Path, name: &str) -> Self {
        let dir = packages_root.join(name);
        fs::create_dir_all(&dir)
            .unwrap_or_else(|e| panic!("PluginFixture: failed to create {}: {e}", dir.display()));
        let repo = init_repo(&dir);
        Self { dir, repo }
    }

    /// Writes a `package.json` declaration and commits it.
    pub fn with_declaration(self, declaration: &serde_json::Value) -> Self {
        let pretty = serde_json::to_string_pretty(declaration)
            .unwrap_or_else(|e| panic!("PluginFixture: declaration not serializable: {e}"));
        commit_file(&self.repo, "package.json", &pretty);
        self
    }

    /// Writes a minimal valid declaration for `name` with the given platforms.
    pub fn with_default_declaration(self, name: &str, platforms: &[&str]) -> Self {
        self.with_declaration(&serde_json::json!({
            "name": name,
            "description": format!("{name} plugin"),
            "author": "Test Author",
            "homepage": format!("https://github.com/test/{name}"),
            "repo": format!("test/{name}"),
            "platforms": platforms,
            "details": format!("https://github.com/test/{name}/blob/master/README.md"),
        }))
    }

    /// Tags the current HEAD.
    pub fn with_tag(self, tag: &str) -> Self {
        tag_head(&self.repo, tag);
        self
    }

    /// Adds a throwaway commit so HEAD moves past existing tags.
    pub fn with_extra_commit(self) -> Self {
        commit_file(&self.repo, "extra.txt", "extra");
        self
    }

    /// The plugin directory path.
    pub fn path(&self) -> &Path {
        &self.dir
    }
}
