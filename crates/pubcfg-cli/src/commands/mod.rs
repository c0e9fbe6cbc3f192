//! Command dispatch and handler modules.

mod base_version;
mod check;
mod env;
mod init;
mod plan;

use std::path::PathBuf;

use miette::Result;

use pubcfg_util::errors::PublishingError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    tracing::debug!("Dispatching {:?}", cli.command);
    let file = cli.file.as_deref();
    match cli.command {
        Command::Check => check::exec(file),
        Command::Plan { format } => plan::exec(file, format),
        Command::BaseVersion { version } => base_version::exec(file, version.as_deref()),
        Command::Init { group, version } => init::exec(group, version),
        Command::Env { reveal } => env::exec(file, reveal),
    }
}

fn current_dir() -> Result<PathBuf> {
    Ok(std::env::current_dir().map_err(PublishingError::Io)?)
}
