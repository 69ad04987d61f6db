//! Update command implementation.
//!
//! Unset flags keep the issue's current values; the timestamp is always
//! refreshed.

use chrono::Utc;
use issues_core::IssueEdit;

use crate::cli::UpdateArgs;
use crate::config::CliOverrides;
use crate::error::Result;

use super::{open_session, print_json};

/// Execute the update command.
///
/// # Errors
///
/// Returns `IssueNotFound` if no issue has the given id.
pub fn execute(args: &UpdateArgs, overrides: &CliOverrides, json: bool) -> Result<()> {
    let (_config, mut session) = open_session(overrides)?;

    let mut edit = IssueEdit::from_issue(session.get(&args.id)?);
    if let Some(title) = &args.title {
        edit.title.clone_from(title);
    }
    if let Some(status) = args.status {
        edit.status = status;
    }
    if let Some(description) = &args.description {
        edit.description.clone_from(description);
    }

    let issue = session.update_issue(&edit, Utc::now())?;

    if json {
        print_json(&issue)
    } else {
        println!(
            "Updated issue {}: {} [{}]",
            issue.id,
            issue.title,
            issue.status.label()
        );
        Ok(())
    }
}
