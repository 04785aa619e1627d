//! Channel document validation.
//!
//! Re-parses an emitted channel file and checks the semantic rules a
//! plugin-manager client relies on: known platform tags only, and every
//! version string parseable as semver after the compatibility transform.
//! Syntactic failures (unreadable file, malformed JSON) are hard errors;
//! semantic problems are collected as [`Finding`]s so one bad package
//! does not hide the rest.

use std::fmt;
use std::path::Path;

use crate::document::{read_channel, ChannelDocument, PackageEntry, SchemaVersion};
use crate::semver_compat::semver_compat;
use crate::Result;

/// Platform tags a channel entry may carry.
pub const ALLOWED_PLATFORMS: [&str; 4] = ["*", "windows", "linux", "osx"];

/// One semantic problem found in a channel document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Platform tag outside [`ALLOWED_PLATFORMS`].
    UnknownPlatform { package: String, platform: String },

    /// Version string that does not parse as semver even after the
    /// compatibility transform.
    BadVersion {
        package: String,
        version: String,
        normalized: String,
        error: String,
    },

    /// Entry shape does not match the document's schema version.
    ShapeMismatch {
        package: String,
        schema: SchemaVersion,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPlatform { package, platform } => {
                write!(f, "{package}: unknown platform '{platform}'")
            }
            Self::BadVersion {
                package,
                version,
                normalized,
                error,
            } => write!(
                f,
                "{package}: version '{version}' (normalized '{normalized}') is not semver: {error}"
            ),
            Self::ShapeMismatch { package, schema } => {
                write!(f, "{package}: entry shape does not match schema {schema}")
            }
        }
    }
}

/// Validate the channel file at `path`.
///
/// Returns `Err` only for syntactic failures; semantic problems come back
/// as findings (empty vec means the document is valid).
pub fn validate_channel_file(path: &Path) -> Result<Vec<Finding>> {
    let document = read_channel(path)?;
    Ok(validate_document(&document))
}

/// Semantic checks over an already-parsed document.
pub fn validate_document(document: &ChannelDocument) -> Vec<Finding> {
    let mut findings = Vec::new();

    for package in &document.packages {
        let name = package.name().to_string();
        match (document.schema_version, package) {
            (SchemaVersion::V1_2, PackageEntry::Platformed(entry)) => {
                for (platform, artifacts) in entry.platforms.iter() {
                    check_platform(&mut findings, &name, platform);
                    for artifact in artifacts {
                        check_version(&mut findings, &name, &artifact.version);
                    }
                }
            }
            (SchemaVersion::V2_0, PackageEntry::Detailed(entry)) => {
                for release in &entry.releases {
                    for platform in &release.platforms {
                        check_platform(&mut findings, &name, platform);
                    }
                    check_version(&mut findings, &name, &release.version);
                }
            }
            (schema, _) => {
                findings.push(Finding::ShapeMismatch {
                    package: name,
                    schema,
                });
            }
        }
    }

    findings
}

fn check_platform(findings: &mut Vec<Finding>, package: &str, platform: &str) {
    if !ALLOWED_PLATFORMS.contains(&platform) {
        findings.push(Finding::UnknownPlatform {
            package: package.to_string(),
            platform: platform.to_string(),
        });
    }
}

fn check_version(findings: &mut Vec<Finding>, package: &str, version: &str) {
    let normalized = semver_compat(version);
    if let Err(e) = semver::Version::parse(&normalized) {
        findings.push(Finding::BadVersion {
            package: package.to_string(),
            version: version.to_string(),
            normalized,
            error: e.to_string(),
        });
    }
}
