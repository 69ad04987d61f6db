//! Parse command implementation.
//!
//! Reports what the loader accepts and why it skips the rest.

use std::fs;

use issues_core::{IssuesError, flatfile};

use crate::cli::ParseArgs;
use crate::config::{CliOverrides, Config};
use crate::error::Result;
use crate::format::{ParseSummary, format_skip_line};

use super::print_json;

/// Execute the parse command.
///
/// # Errors
///
/// Returns `FileNotFound` if the file does not exist, or `Io` if it cannot
/// be read.
pub fn execute(args: &ParseArgs, overrides: &CliOverrides, json: bool) -> Result<()> {
    let path = match &args.path {
        Some(path) => path.clone(),
        None => Config::load(&std::env::current_dir()?, overrides)?.source,
    };

    let content = fs::read_to_string(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IssuesError::FileNotFound(path.clone())
        } else {
            IssuesError::Io(e)
        }
    })?;
    let report = flatfile::parse_report(&content);
    let source = dunce::simplified(&path).display().to_string();

    if json {
        return print_json(&ParseSummary::from_report(source, &report));
    }

    let rejected = report.rejected();
    println!(
        "{source}: {} accepted, {} rejected",
        report.accepted_count(),
        rejected.len()
    );
    for (line, reason) in rejected {
        println!("{}", format_skip_line(line, reason));
    }

    Ok(())
}
