//! CLI argument parsing using clap derive

use std::path::PathBuf;

use channel_core::SchemaVersion;
use channel_git::TagPolicy;
use clap::{Parser, Subcommand, ValueEnum};

/// Channel Builder - Aggregate installed plugins into a channel file
#[derive(Parser, Debug)]
#[command(name = "channel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Build the channel document from installed plugins
    ///
    /// Plugins come either from a list file (--list) or from names given
    /// directly on the command line; exactly one source is required.
    ///
    /// Examples:
    ///   channel build --list plugins.txt
    ///   channel build AlphaFormatter BetaLinter --schema 2.0
    Build {
        /// Plugin names to include, in output order
        names: Vec<String>,

        /// Newline-delimited plugin list file (# lines are comments)
        #[arg(short, long)]
        list: Option<PathBuf>,

        /// Directory holding installed plugins (defaults to the host
        /// plugin manager's packages directory)
        #[arg(long)]
        packages_dir: Option<PathBuf>,

        /// Channel schema to emit
        #[arg(long, value_enum, default_value_t = SchemaArg::V1_2)]
        schema: SchemaArg,

        /// How the latest release tag is chosen
        #[arg(long, value_enum, default_value_t = TagPolicyArg::LastListed)]
        tag_policy: TagPolicyArg,

        /// Output file
        #[arg(short, long, default_value = "packages.json")]
        output: PathBuf,
    },

    /// Validate a channel document
    ///
    /// Checks that the file is well-formed JSON, that every platform tag
    /// is known, and that every version normalizes to valid semver.
    Check {
        /// Channel file to validate
        #[arg(default_value = "packages.json")]
        file: PathBuf,
    },
}

/// Channel schema selector
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaArg {
    /// Platform-keyed release maps with last_modified
    #[value(name = "1.2")]
    V1_2,

    /// Single details link with a flat releases list
    #[value(name = "2.0")]
    V2_0,
}

impl From<SchemaArg> for SchemaVersion {
    fn from(arg: SchemaArg) -> Self {
        match arg {
            SchemaArg::V1_2 => SchemaVersion::V1_2,
            SchemaArg::V2_0 => SchemaVersion::V2_0,
        }
    }
}

/// Tag selection strategy selector
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagPolicyArg {
    /// Last tag in listing order
    LastListed,

    /// Tag nearest the current commit (git describe)
    ClosestToHead,
}

impl From<TagPolicyArg> for TagPolicy {
    fn from(arg: TagPolicyArg) -> Self {
        match arg {
            TagPolicyArg::LastListed => TagPolicy::LastListed,
            TagPolicyArg::ClosestToHead => TagPolicy::ClosestToHead,
        }
    }
}
