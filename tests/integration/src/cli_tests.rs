//! CLI tests for the `channel` binary.

use assert_cmd::Command;
use channel_test_utils::PluginFixture;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn channel() -> Command {
    Command::cargo_bin("channel").expect("channel binary builds")
}

#[test]
fn build_then_check_succeeds() {
    let temp = TempDir::new().unwrap();
    let packages = temp.path().join("packages");
    fs::create_dir_all(&packages).unwrap();
    PluginFixture::create(&packages, "AlphaFormatter")
        .with_default_declaration("AlphaFormatter", &["windows", "linux"])
        .with_tag("v1.2.3");

    let output = temp.path().join("packages.json");
    channel()
        .args(["build", "AlphaFormatter"])
        .arg("--packages-dir")
        .arg(&packages)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 package(s)"));

    channel().arg("check").arg(&output).assert().success();
}

#[test]
fn build_without_plugin_source_is_fatal() {
    channel()
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no plugins given"));
}

#[test]
fn build_with_missing_list_file_is_fatal() {
    channel()
        .args(["build", "--list", "/nonexistent/plugins.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("plugin list"));
}

#[test]
fn skipped_plugins_do_not_fail_the_run() {
    let temp = TempDir::new().unwrap();
    let packages = temp.path().join("packages");
    fs::create_dir_all(packages.join("Ghost")).unwrap();
    PluginFixture::create(&packages, "Good")
        .with_default_declaration("Good", &["osx"])
        .with_tag("v0.1.0");

    let output = temp.path().join("packages.json");
    channel()
        .args(["build", "Ghost", "Good"])
        .arg("--packages-dir")
        .arg(&packages)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("skipped Ghost"));

    let text = fs::read_to_string(&output).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["packages"].as_array().unwrap().len(), 1);
}

#[test]
fn comment_only_list_builds_empty_channel() {
    let temp = TempDir::new().unwrap();
    let list = temp.path().join("plugins.txt");
    fs::write(&list, "# all commented out\n\n# really\n").unwrap();
    let output = temp.path().join("packages.json");

    channel()
        .arg("build")
        .arg("--list")
        .arg(&list)
        .arg("--packages-dir")
        .arg(temp.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 package(s)"));

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(doc["schema_version"], "1.2");
    assert_eq!(doc["packages"], serde_json::json!([]));
}

#[test]
fn check_fails_on_bad_version() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("packages.json");
    fs::write(
        &path,
        r#"{
            "schema_version": "1.2",
            "packages": [
                {
                    "name": "A",
                    "description": "d",
                    "author": "a",
                    "homepage": "h",
                    "last_modified": "2012-11-10 10:31:23",
                    "platforms": {
                        "windows": [
                            {"version": "trunk", "url": "https://example.com/a.zip"}
                        ]
                    }
                }
            ]
        }"#,
    )
    .unwrap();

    channel()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not semver"));
}

#[test]
fn check_fails_on_unknown_platform() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("packages.json");
    fs::write(
        &path,
        r#"{
            "schema_version": "1.2",
            "packages": [
                {
                    "name": "A",
                    "description": "d",
                    "author": "a",
                    "homepage": "h",
                    "last_modified": "2012-11-10 10:31:23",
                    "platforms": {
                        "beos": [
                            {"version": "1.2.3", "url": "https://example.com/a.zip"}
                        ]
                    }
                }
            ]
        }"#,
    )
    .unwrap();

    channel()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown platform"));
}

#[test]
fn check_fails_on_malformed_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("packages.json");
    fs::write(&path, "{ nope").unwrap();

    channel().arg("check").arg(&path).assert().failure();
}

#[test]
fn build_schema_2_0_emits_details_entries() {
    let temp = TempDir::new().unwrap();
    let packages = temp.path().join("packages");
    fs::create_dir_all(&packages).unwrap();
    PluginFixture::create(&packages, "Alpha")
        .with_default_declaration("Alpha", &["windows"])
        .with_tag("v2.0.0");

    let output = temp.path().join("packages.json");
    channel()
        .args(["build", "Alpha", "--schema", "2.0"])
        .arg("--packages-dir")
        .arg(&packages)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(doc["schema_version"], "2.0");
    let package = &doc["packages"][0];
    assert!(package["details"].is_string());
    assert_eq!(package["releases"][0]["platforms"], serde_json::json!(["*"]));

    channel().arg("check").arg(&output).assert().success();
}
