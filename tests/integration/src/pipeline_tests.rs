//! End-to-end pipeline tests: real git plugin checkouts in, validated
//! channel documents out.

use channel_core::{
    build_channel, read_channel, validate_channel_file, validate_document, write_channel,
    BuildConfig, PackageEntry, SchemaVersion,
};
use channel_git::{GitTagSource, TagPolicy, TagSource};
use channel_manifest::PluginList;
use channel_test_utils::PluginFixture;
use std::path::Path;
use tempfile::TempDir;

fn config(packages_dir: &Path, names: &[&str], schema: SchemaVersion) -> BuildConfig {
    BuildConfig {
        plugins: PluginList::from_names(names.iter().copied()),
        packages_dir: packages_dir.to_path_buf(),
        schema,
        tag_policy: TagPolicy::LastListed,
    }
}

#[test]
fn build_write_validate_schema_1_2() {
    let temp = TempDir::new().unwrap();
    PluginFixture::create(temp.path(), "AlphaFormatter")
        .with_default_declaration("AlphaFormatter", &["windows", "linux", "osx"])
        .with_tag("v1.2.3");
    PluginFixture::create(temp.path(), "BetaLinter")
        .with_default_declaration("BetaLinter", &["*"])
        .with_tag("v2012.11.10.10.31.23");

    let outcome = build_channel(
        &config(
            temp.path(),
            &["AlphaFormatter", "BetaLinter"],
            SchemaVersion::V1_2,
        ),
        &GitTagSource::new(),
    );
    assert!(outcome.skipped.is_empty(), "skipped: {:?}", outcome.skipped);

    let output = temp.path().join("packages.json");
    write_channel(&output, &outcome.document).unwrap();

    // The written file is valid JSON and passes every semantic check,
    // including the date-stamp version of BetaLinter.
    assert_eq!(validate_channel_file(&output).unwrap(), vec![]);

    let doc = read_channel(&output).unwrap();
    let names: Vec<&str> = doc.packages.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["AlphaFormatter", "BetaLinter"]);
}

#[test]
fn build_write_validate_schema_2_0() {
    let temp = TempDir::new().unwrap();
    PluginFixture::create(temp.path(), "AlphaFormatter")
        .with_default_declaration("AlphaFormatter", &["windows"])
        .with_tag("v3.5");

    let outcome = build_channel(
        &config(temp.path(), &["AlphaFormatter"], SchemaVersion::V2_0),
        &GitTagSource::new(),
    );
    assert!(outcome.skipped.is_empty());

    let output = temp.path().join("packages.json");
    write_channel(&output, &outcome.document).unwrap();
    assert_eq!(validate_channel_file(&output).unwrap(), vec![]);

    match &outcome.document.packages[0] {
        PackageEntry::Detailed(entry) => {
            assert_eq!(entry.releases[0].version, "3.5");
            assert_eq!(entry.releases[0].platforms, ["*"]);
        }
        other => panic!("expected detailed entry, got {other:?}"),
    }
}

#[test]
fn untagged_plugin_is_dropped_not_fatal() {
    let temp = TempDir::new().unwrap();
    PluginFixture::create(temp.path(), "NoTags")
        .with_default_declaration("NoTags", &["windows"]);
    PluginFixture::create(temp.path(), "Tagged")
        .with_default_declaration("Tagged", &["windows"])
        .with_tag("v1.0.0");

    let outcome = build_channel(
        &config(temp.path(), &["NoTags", "Tagged"], SchemaVersion::V1_2),
        &GitTagSource::new(),
    );

    assert_eq!(outcome.document.packages.len(), 1);
    assert_eq!(outcome.document.packages[0].name(), "Tagged");
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].plugin, "NoTags");
    assert_eq!(validate_document(&outcome.document), vec![]);
}

#[test]
fn tag_policies_differ_when_head_moved_past_a_tag() {
    let temp = TempDir::new().unwrap();
    // v0.9.9 is reachable from HEAD; v1.0.0 tags an older commit only in
    // listing order. LastListed picks v1.0.0, ClosestToHead picks v0.9.9.
    PluginFixture::create(temp.path(), "Alpha")
        .with_default_declaration("Alpha", &["windows"])
        .with_tag("v1.0.0")
        .with_extra_commit()
        .with_tag("v0.9.9");

    let source = GitTagSource::new();
    let plugin_dir = temp.path().join("Alpha");

    let last = source
        .latest_tag(&plugin_dir, TagPolicy::LastListed)
        .unwrap();
    assert_eq!(last.tag, "v1.0.0");

    let closest = source
        .latest_tag(&plugin_dir, TagPolicy::ClosestToHead)
        .unwrap();
    assert_eq!(closest.tag, "v0.9.9");
}

#[test]
fn fixed_inputs_serialize_to_known_literal() {
    use channel_core::{PlatformReleases, PlatformedEntry, ReleaseArtifact};

    let entry = PackageEntry::Platformed(PlatformedEntry {
        name: "AlphaFormatter".into(),
        description: "Formats things".into(),
        author: "Alice".into(),
        homepage: "https://github.com/alice/AlphaFormatter".into(),
        last_modified: "2012-11-10 10:31:23".into(),
        platforms: PlatformReleases(vec![(
            "windows".into(),
            vec![ReleaseArtifact {
                version: "1.2.3".into(),
                url: "https://nodeload.github.com/alice/AlphaFormatter/zipball/v1.2.3".into(),
            }],
        )]),
    });

    let expected = r#"{
  "name": "AlphaFormatter",
  "description": "Formats things",
  "author": "Alice",
  "homepage": "https://github.com/alice/AlphaFormatter",
  "last_modified": "2012-11-10 10:31:23",
  "platforms": {
    "windows": [
      {
        "version": "1.2.3",
        "url": "https://nodeload.github.com/alice/AlphaFormatter/zipball/v1.2.3"
      }
    ]
  }
}"#;
    assert_eq!(serde_json::to_string_pretty(&entry).unwrap(), expected);
}

#[test]
fn builds_are_deterministic() {
    let temp = TempDir::new().unwrap();
    PluginFixture::create(temp.path(), "Alpha")
        .with_default_declaration("Alpha", &["windows", "linux"])
        .with_tag("v1.0.0");

    let cfg = config(temp.path(), &["Alpha"], SchemaVersion::V1_2);
    let source = GitTagSource::new();

    let first = serde_json::to_string_pretty(&build_channel(&cfg, &source).document).unwrap();
    let second = serde_json::to_string_pretty(&build_channel(&cfg, &source).document).unwrap();
    assert_eq!(first, second);
}
