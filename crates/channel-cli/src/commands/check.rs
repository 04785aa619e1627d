//! The `channel check` command.

use std::path::Path;

use channel_core::validate_channel_file;
use colored::Colorize;

use crate::error::{CliError, Result};

/// Validate a written channel file.
///
/// Syntactic failures surface as errors; semantic findings are printed
/// one per line and collapse into a single failing result.
pub fn run_check(file: &Path) -> Result<()> {
    let findings = validate_channel_file(file).map_err(CliError::Core)?;

    if findings.is_empty() {
        println!("{} is valid", file.display());
        return Ok(());
    }

    for finding in &findings {
        eprintln!("{}: {}", "invalid".red().bold(), finding);
    }
    Err(CliError::user(format!(
        "{} failed validation with {} problem(s)",
        file.display(),
        findings.len()
    )))
}
