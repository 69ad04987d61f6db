use chrono::Utc;
use issues_core::IssueDraft;

use crate::cli::CreateArgs;
use crate::config::CliOverrides;
use crate::error::Result;

use super::{open_session, print_json};

/// Execute the create command.
///
/// # Errors
///
/// Returns a validation error if the title is too short; nothing is created.
pub fn execute(args: &CreateArgs, overrides: &CliOverrides, json: bool) -> Result<()> {
    let (_config, mut session) = open_session(overrides)?;

    let draft = IssueDraft {
        title: args.title.clone(),
        description: args.description.clone(),
    };
    let issue = session.create_issue(&draft, Utc::now())?;

    if json {
        print_json(&issue)
    } else {
        println!("Created issue {}: {}", issue.id, issue.title);
        Ok(())
    }
}
