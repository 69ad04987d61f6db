//! Show command implementation.

use crate::cli::ShowArgs;
use crate::config::CliOverrides;
use crate::error::Result;
use crate::format::format_issue_details;

use super::{open_session, print_json};

/// Execute the show command.
///
/// # Errors
///
/// Returns `IssueNotFound` if no issue has the given id.
pub fn execute(args: &ShowArgs, overrides: &CliOverrides, json: bool) -> Result<()> {
    let (_config, session) = open_session(overrides)?;
    let issue = session.get(&args.id)?;

    if json {
        print_json(issue)
    } else {
        print!("{}", format_issue_details(issue));
        Ok(())
    }
}
