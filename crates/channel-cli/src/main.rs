//! Channel Builder CLI
//!
//! Builds and validates the channel document that describes installed
//! plugins and their tagged releases.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Build {
            names,
            list,
            packages_dir,
            schema,
            tag_policy,
            output,
        } => commands::run_build(
            &names,
            list.as_deref(),
            packages_dir,
            schema.into(),
            tag_policy.into(),
            &output,
        ),
        Commands::Check { file } => commands::run_check(&file),
    }
}
