//! Channel document model.
//!
//! Two incompatible package-entry shapes exist across schema versions and
//! both must round-trip: 1.2 keys releases by platform tag, 2.0 carries a
//! single details link plus a flat release list with a wildcard platform
//! marker. Consumers branch on `schema_version`.
//!
//! The document is always produced through serde — never through string
//! templates — so metadata values with quotes or control characters cannot
//! break the emitted JSON.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

/// Marker distinguishing incompatible channel document shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SchemaVersion {
    /// Platform-keyed release maps with `last_modified`.
    #[default]
    #[serde(rename = "1.2")]
    V1_2,

    /// Single `details` link with a flat `releases` list.
    #[serde(rename = "2.0")]
    V2_0,
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1_2 => write!(f, "1.2"),
            Self::V2_0 => write!(f, "2.0"),
        }
    }
}

/// The aggregated channel file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelDocument {
    pub schema_version: SchemaVersion,
    pub packages: Vec<PackageEntry>,
}

/// One package in the channel, in either schema shape.
///
/// Untagged: the shapes are distinguished by their required keys
/// (`platforms`/`last_modified` vs. `details`/`releases`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PackageEntry {
    Platformed(PlatformedEntry),
    Detailed(DetailedEntry),
}

impl PackageEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Platformed(e) => &e.name,
            Self::Detailed(e) => &e.name,
        }
    }
}

/// Schema 1.2 package entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformedEntry {
    pub name: String,
    pub description: String,
    pub author: String,
    pub homepage: String,

    /// Commit timestamp of the release tag, `YYYY-MM-DD HH:MM:SS`.
    pub last_modified: String,

    pub platforms: PlatformReleases,
}

/// Schema 2.0 package entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedEntry {
    pub name: String,
    pub description: String,
    pub author: String,
    pub homepage: String,

    /// Details-page URL from the plugin declaration.
    pub details: String,

    pub releases: Vec<Release>,
}

/// A downloadable artifact in a 1.2 platform map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseArtifact {
    pub version: String,
    pub url: String,
}

/// A release in a 2.0 entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub version: String,
    pub url: String,

    /// Commit timestamp of the release tag, `YYYY-MM-DD HH:MM:SS`.
    pub date: String,

    /// Platform markers; the builder always emits the `*` wildcard.
    pub platforms: Vec<String>,
}

/// Platform-tag → release-list map that keeps declaration order.
///
/// JSON objects have no order guarantee in most map types; this wrapper
/// serializes as an object while preserving the order the plugin declared
/// its platforms in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformReleases(pub Vec<(String, Vec<ReleaseArtifact>)>);

impl PlatformReleases {
    pub fn iter(&self) -> impl Iterator<Item = &(String, Vec<ReleaseArtifact>)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for PlatformReleases {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (platform, artifacts) in &self.0 {
            map.serialize_entry(platform, artifacts)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PlatformReleases {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct MapVisitor;

        impl<'de> Visitor<'de> for MapVisitor {
            type Value = PlatformReleases;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of platform tag to release list")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, Vec<ReleaseArtifact>>()? {
                    entries.push(entry);
                }
                Ok(PlatformReleases(entries))
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}

/// Download URL for a tagged release of a repository slug.
pub fn download_url(repo_slug: &str, tag: &str) -> String {
    format!("https://nodeload.github.com/{repo_slug}/zipball/{tag}")
}

/// Serialize the document and write it to `path` as pretty-printed JSON.
pub fn write_channel(path: &Path, document: &ChannelDocument) -> Result<()> {
    let mut json = serde_json::to_string_pretty(document).map_err(Error::Serialize)?;
    json.push('\n');
    fs::write(path, json).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote channel document");
    Ok(())
}

/// Read and parse a channel document from `path`.
pub fn read_channel(path: &Path) -> Result<ChannelDocument> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}
