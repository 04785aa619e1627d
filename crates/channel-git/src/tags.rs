//! Latest-tag resolution and commit timestamps.
//!
//! The original channel build scripts disagreed on which tag counts as
//! "latest" (plain `git tag` listing vs. `git describe --abbrev=0 --tags`),
//! so the choice is an explicit [`TagPolicy`] instead of an accident of
//! which subcommand happens to run.

use std::path::Path;

use chrono::{FixedOffset, TimeZone, Utc};
use git2::Repository;

use crate::{Error, Result};

/// Strategy for picking the release tag of a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagPolicy {
    /// Last tag in listing order (lexicographic, like `git tag`).
    #[default]
    LastListed,

    /// Tag nearest the current commit (`git describe --abbrev=0 --tags`).
    ClosestToHead,
}

/// A resolved release tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInfo {
    /// Raw tag name, e.g. `v1.2.3`
    pub tag: String,

    /// Tag with one leading `v` stripped, e.g. `1.2.3`
    pub version: String,
}

impl TagInfo {
    fn from_tag(tag: &str) -> Result<Self> {
        let version = tag.strip_prefix('v').unwrap_or(tag);
        if tag.is_empty() || version.is_empty() {
            return Err(Error::EmptyVersion {
                tag: tag.to_string(),
            });
        }
        Ok(Self {
            tag: tag.to_string(),
            version: version.to_string(),
        })
    }
}

/// Narrow seam between git and the document assembly logic.
///
/// Production code uses [`GitTagSource`]; tests substitute a double that
/// returns canned tags without touching a repository.
pub trait TagSource {
    /// Resolve the latest release tag of the checkout at `path`.
    fn latest_tag(&self, path: &Path, policy: TagPolicy) -> Result<TagInfo>;

    /// Committer date of `tag`'s target, formatted `YYYY-MM-DD HH:MM:SS`
    /// in the commit's own timezone.
    fn commit_timestamp(&self, path: &Path, tag: &str) -> Result<String>;
}

/// [`TagSource`] backed by `git2`.
#[derive(Debug, Default)]
pub struct GitTagSource;

impl GitTagSource {
    pub fn new() -> Self {
        Self
    }
}

impl TagSource for GitTagSource {
    fn latest_tag(&self, path: &Path, policy: TagPolicy) -> Result<TagInfo> {
        let repo = Repository::open(path)?;
        let tag = match policy {
            TagPolicy::LastListed => last_listed_tag(&repo, path)?,
            TagPolicy::ClosestToHead => closest_tag_to_head(&repo, path)?,
        };
        tracing::debug!(path = %path.display(), tag, "resolved latest tag");
        TagInfo::from_tag(&tag)
    }

    fn commit_timestamp(&self, path: &Path, tag: &str) -> Result<String> {
        let repo = Repository::open(path)?;
        let reference = repo
            .find_reference(&format!("refs/tags/{tag}"))
            .map_err(|_| Error::TagNotFound {
                tag: tag.to_string(),
                path: path.to_path_buf(),
            })?;
        let commit = reference.peel_to_commit()?;

        let time = commit.time();
        let utc = Utc
            .timestamp_opt(time.seconds(), 0)
            .single()
            .ok_or_else(|| Error::InvalidCommitTime {
                tag: tag.to_string(),
                seconds: time.seconds(),
            })?;
        // %ci prints the committer's local time; the offset itself is
        // dropped by the 19-character truncation.
        let formatted = match FixedOffset::east_opt(time.offset_minutes() * 60) {
            Some(tz) => utc.with_timezone(&tz).format("%Y-%m-%d %H:%M:%S").to_string(),
            None => utc.format("%Y-%m-%d %H:%M:%S").to_string(),
        };
        Ok(formatted)
    }
}

/// Last tag in `git tag` listing order (refs are stored sorted).
fn last_listed_tag(repo: &Repository, path: &Path) -> Result<String> {
    let names = repo.tag_names(None)?;
    names
        .iter()
        .flatten()
        .last()
        .map(str::to_string)
        .ok_or_else(|| Error::NoTags {
            path: path.to_path_buf(),
        })
}

/// `git describe --abbrev=0 --tags` equivalent.
fn closest_tag_to_head(repo: &Repository, path: &Path) -> Result<String> {
    let mut opts = git2::DescribeOptions::new();
    opts.describe_tags();
    let describe = repo.describe(&opts).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "describe failed");
        Error::NoTags {
            path: path.to_path_buf(),
        }
    })?;

    let mut format = git2::DescribeFormatOptions::new();
    format.abbreviated_size(0);
    Ok(describe.format(Some(&format))?)
}
