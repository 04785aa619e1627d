//! The `channel build` command.

use std::path::{Path, PathBuf};

use channel_core::{build_channel, write_channel, BuildConfig, SchemaVersion};
use channel_git::{GitTagSource, TagPolicy};
use channel_manifest::{default_packages_dir, PluginList};
use colored::Colorize;

use crate::error::{CliError, Result};

/// Resolve the plugin list, build the document, and write it.
///
/// Failing to resolve the list is run-fatal; individual plugin failures
/// only drop that plugin and are reported to stderr.
pub fn run_build(
    names: &[String],
    list: Option<&Path>,
    packages_dir: Option<PathBuf>,
    schema: SchemaVersion,
    tag_policy: TagPolicy,
    output: &Path,
) -> Result<()> {
    let plugins = resolve_plugins(names, list)?;
    let packages_dir = packages_dir.unwrap_or_else(default_packages_dir);
    tracing::info!(
        count = plugins.len(),
        packages_dir = %packages_dir.display(),
        %schema,
        "building channel"
    );

    let config = BuildConfig {
        plugins,
        packages_dir,
        schema,
        tag_policy,
    };
    let outcome = build_channel(&config, &GitTagSource::new());

    for skip in &outcome.skipped {
        eprintln!(
            "{}: skipped {}: {}",
            "warning".yellow().bold(),
            skip.plugin,
            skip.reason
        );
    }

    write_channel(output, &outcome.document).map_err(CliError::Core)?;

    println!(
        "Wrote {} with {} package(s), {} skipped",
        output.display(),
        outcome.document.packages.len(),
        outcome.skipped.len()
    );
    Ok(())
}

/// Exactly one plugin source: a list file or inline names.
fn resolve_plugins(names: &[String], list: Option<&Path>) -> Result<PluginList> {
    match (list, names.is_empty()) {
        (Some(path), true) => Ok(PluginList::from_file(path)?),
        (None, false) => Ok(PluginList::from_names(names.iter().cloned())),
        (Some(_), false) => Err(CliError::user(
            "pass either --list or plugin names, not both",
        )),
        (None, true) => Err(CliError::user(
            "no plugins given: pass --list <file> or plugin names",
        )),
    }
}
