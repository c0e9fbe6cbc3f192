//! CLI argument definitions for pubcfg.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "pubcfg",
    version,
    about = "Validate and inspect Maven and P2 release publishing configuration",
    long_about = "pubcfg reads a Publishing.toml build description, checks that everything a \
                  publish run needs is set, and prints the resulting publication plan."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the settings file (default: nearest Publishing.toml)
    #[arg(short, long, global = true, env = "PUBCFG_FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate Publishing.toml and print a summary
    Check,

    /// Print the publication plan
    Plan {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: PlanFormat,
    },

    /// Print the base version of a version string or of the configured version
    BaseVersion {
        /// Version to derive from (default: the configured version)
        version: Option<String>,
    },

    /// Create a Publishing.toml in the current directory
    Init {
        /// Maven group of the generated project
        #[arg(short, long, default_value = pubcfg_ops::ops_init::DEFAULT_INIT_GROUP)]
        group: String,
        /// Initial version
        #[arg(long = "set-version", default_value = pubcfg_ops::ops_init::DEFAULT_INIT_VERSION)]
        version: String,
    },

    /// Print variables from .publishing.env
    Env {
        /// Show secret values unmasked
        #[arg(long)]
        reveal: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanFormat {
    Text,
    Json,
}

pub fn parse() -> Cli {
    Cli::parse()
}
