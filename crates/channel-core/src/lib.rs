//! Core layer for Channel Builder
//!
//! Owns the channel document model, the best-effort build pipeline that
//! folds per-plugin results into one document, the semver compatibility
//! transform, and the document validator.

pub mod build;
pub mod document;
pub mod error;
pub mod semver_compat;
pub mod validate;

pub use build::{build_channel, BuildConfig, BuildOutcome, SkipDiagnostic};
pub use document::{
    download_url, read_channel, write_channel, ChannelDocument, DetailedEntry, PackageEntry,
    PlatformReleases, PlatformedEntry, Release, ReleaseArtifact, SchemaVersion,
};
pub use error::{Error, Result};
pub use semver_compat::semver_compat;
pub use validate::{validate_channel_file, validate_document, Finding, ALLOWED_PLATFORMS};
