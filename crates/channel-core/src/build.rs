//! Best-effort channel assembly.
//!
//! Plugins are processed strictly in list order, one at a time. Each
//! plugin folds to `Ok(entry)` or `Err(reason)`; every `Ok` enters the
//! document and every `Err` becomes a [`SkipDiagnostic`] instead of being
//! swallowed. A failing plugin never aborts the run — only a missing
//! plugin list does, and that is the caller's tier.

use std::path::PathBuf;

use channel_git::{TagPolicy, TagSource};
use channel_manifest::{declaration_path, PluginList, PluginManifest};

use crate::document::{
    download_url, ChannelDocument, DetailedEntry, PackageEntry, PlatformReleases, PlatformedEntry,
    Release, ReleaseArtifact, SchemaVersion,
};
use crate::{Error, Result};

/// Inputs for one channel build run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Plugins to include, in output order.
    pub plugins: PluginList,

    /// Directory holding installed plugin checkouts.
    pub packages_dir: PathBuf,

    /// Shape of the emitted document.
    pub schema: SchemaVersion,

    /// How the latest release tag is chosen.
    pub tag_policy: TagPolicy,
}

/// Why one plugin was left out of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipDiagnostic {
    pub plugin: String,
    pub reason: String,
}

/// A built document plus the plugins that did not make it in.
#[derive(Debug)]
pub struct BuildOutcome {
    pub document: ChannelDocument,
    pub skipped: Vec<SkipDiagnostic>,
}

/// Assemble a channel document from installed plugins.
///
/// Never fails as a whole: per-plugin errors are folded into
/// [`BuildOutcome::skipped`].
pub fn build_channel(config: &BuildConfig, tags: &dyn TagSource) -> BuildOutcome {
    let mut packages = Vec::with_capacity(config.plugins.len());
    let mut skipped = Vec::new();

    for name in config.plugins.names() {
        match build_entry(config, tags, name) {
            Ok(entry) => {
                tracing::debug!(plugin = %name, "added package entry");
                packages.push(entry);
            }
            Err(e) => {
                tracing::warn!(plugin = %name, error = %e, "skipping plugin");
                skipped.push(SkipDiagnostic {
                    plugin: name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    BuildOutcome {
        document: ChannelDocument {
            schema_version: config.schema,
            packages,
        },
        skipped,
    }
}

/// Process a single plugin: declaration, tag, timestamp, entry.
fn build_entry(
    config: &BuildConfig,
    tags: &dyn TagSource,
    plugin: &str,
) -> Result<PackageEntry> {
    let declaration = declaration_path(&config.packages_dir, plugin);
    let manifest = PluginManifest::load(&declaration)?;

    let plugin_dir = config.packages_dir.join(plugin);
    let tag_info = tags.latest_tag(&plugin_dir, config.tag_policy)?;
    let timestamp = tags.commit_timestamp(&plugin_dir, &tag_info.tag)?;

    let url = download_url(&manifest.repo, &tag_info.tag);

    match config.schema {
        SchemaVersion::V1_2 => {
            let platforms = manifest
                .platforms
                .as_ref()
                .filter(|p| !p.is_empty())
                .ok_or_else(|| Error::MissingPlatforms {
                    plugin: plugin.to_string(),
                })?;

            let releases = platforms
                .iter()
                .map(|platform| {
                    (
                        platform.clone(),
                        vec![ReleaseArtifact {
                            version: tag_info.version.clone(),
                            url: url.clone(),
                        }],
                    )
                })
                .collect();

            Ok(PackageEntry::Platformed(PlatformedEntry {
                name: manifest.name,
                description: manifest.description,
                author: manifest.author,
                homepage: manifest.homepage,
                last_modified: timestamp,
                platforms: PlatformReleases(releases),
            }))
        }
        SchemaVersion::V2_0 => {
            let details = manifest.details.ok_or_else(|| Error::MissingDetails {
                plugin: plugin.to_string(),
            })?;

            Ok(PackageEntry::Detailed(DetailedEntry {
                name: manifest.name,
                description: manifest.description,
                author: manifest.author,
                homepage: manifest.homepage,
                details,
                releases: vec![Release {
                    version: tag_info.version,
                    url,
                    date: timestamp,
                    platforms: vec!["*".to_string()],
                }],
            }))
        }
    }
}
