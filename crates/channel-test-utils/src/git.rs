//! Git repository fixtures built with `git2` only, so tests never depend
//! on a `git` binary or the host's global config.

use std::fs;
use std::path::Path;

use git2::{Oid, Repository};

/// Initialises a real git repository with a local test identity.
///
/// # Panics
/// Panics if init or config writes fail.
pub fn init_repo(path: &Path) -> Repository {
    let repo = Repository::init(path)
        .unwrap_or_else(|e| panic!("init_repo: failed to init at {}: {e}", path.display()));
    {
        let mut config = repo
            .config()
            .unwrap_or_else(|e| panic!("init_repo: failed to open config: {e}"));
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@test.com").unwrap();
    }
    repo
}

/// Writes `contents` to `name` in the worktree and commits it on HEAD.
///
/// Works for both the initial commit (no parent) and subsequent commits.
///
/// # Panics
/// Panics if any git operation fails.
pub fn commit_file(repo: &Repository, name: &str, contents: &str) -> Oid {
    let workdir = repo
        .workdir()
        .unwrap_or_else(|| panic!("commit_file: bare repository"));
    fs::write(workdir.join(name), contents)
        .unwrap_or_else(|e| panic!("commit_file: failed to write {name}: {e}"));

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(name)).unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let sig = repo.signature().unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, &format!("Add {name}"), &tree, &parents)
        .unwrap_or_else(|e| panic!("commit_file: commit failed: {e}"))
}

/// Like [`commit_file`], but signs the commit with an explicit `time`.
///
/// Lets tests plant commit timestamps git itself would never produce,
/// such as values outside the representable calendar range.
///
/// # Panics
/// Panics if any git operation fails.
pub fn commit_file_at(repo: &Repository, name: &str, contents: &str, time: git2::Time) -> Oid {
    let workdir = repo
        .workdir()
        .unwrap_or_else(|| panic!("commit_file_at: bare repository"));
    fs::write(workdir.join(name), contents)
        .unwrap_or_else(|e| panic!("commit_file_at: failed to write {name}: {e}"));

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(name)).unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let sig = git2::Signature::new("Test User", "test@test.com", &time)
        .unwrap_or_else(|e| panic!("commit_file_at: bad signature: {e}"));
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, &format!("Add {name}"), &tree, &parents)
        .unwrap_or_else(|e| panic!("commit_file_at: commit failed: {e}"))
}

/// Creates a lightweight tag pointing at HEAD.
///
/// # Panics
/// Panics if HEAD cannot be resolved or the tag exists.
pub fn tag_head(repo: &Repository, name: &str) {
    let head = repo
        .head()
        .and_then(|h| h.peel_to_commit())
        .unwrap_or_else(|e| panic!("tag_head: no HEAD commit: {e}"));
    repo.tag_lightweight(name, head.as_object(), false)
        .unwrap_or_else(|e| panic!("tag_head: failed to tag {name}: {e}"));
}
