//! Command implementations.

pub mod completions;
pub mod create;
pub mod init;
pub mod list;
pub mod parse;
pub mod show;
pub mod update;
pub mod version;

use serde::Serialize;

use crate::config::{CliOverrides, Config};
use crate::error::Result;
use issues_core::{FileSlot, IssueSession, Persistence, flatfile};

/// Load config, parse the source and open a session over the file slot.
///
/// # Errors
///
/// Returns an error if the working directory or config file cannot be read.
pub fn open_session(overrides: &CliOverrides) -> Result<(Config, IssueSession<FileSlot>)> {
    let root = std::env::current_dir()?;
    let config = Config::load(&root, overrides)?;
    let loaded = flatfile::load_source(&config.source);
    let persistence = Persistence::in_dir(&config.data_dir, &config.slot);
    let session = IssueSession::open(loaded, persistence);
    Ok((config, session))
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value)?;
    println!("{output}");
    Ok(())
}
