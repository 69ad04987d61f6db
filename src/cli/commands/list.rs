//! List command implementation.
//!
//! The view starts from `--location`, explicit flags are applied through the
//! URL synchronizer, and the rewritten location is printed with the results.

use crate::cli::ListArgs;
use crate::config::CliOverrides;
use crate::error::Result;
use crate::format::{ListOutput, format_issue_line};
use issues_core::{Location, RecordingNavigator, UrlSync};

use super::{open_session, print_json};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or output fails.
pub fn execute(args: &ListArgs, overrides: &CliOverrides, json: bool) -> Result<()> {
    let (_config, session) = open_session(overrides)?;

    let mut sync = UrlSync::new(
        Location::parse(&args.location),
        RecordingNavigator::default(),
    );
    if let Some(search) = &args.search {
        sync.set_search(search.clone());
    }
    if let Some(status) = args.status {
        sync.set_status(status);
    }
    if let Some(sort) = args.sort {
        sync.set_sort(sort);
    }

    let query = sync.params().clone();
    // Normalize even when no flag changed anything.
    let location = sync
        .location()
        .with_query(query.apply_to_query(&sync.location().query));
    let issues = session.derive(&query);

    if json {
        return print_json(&ListOutput::new(location.to_string(), &query, &issues));
    }

    if issues.is_empty() {
        println!("No issues found.");
    } else {
        for issue in &issues {
            println!("{}", format_issue_line(issue));
        }
        println!("\n{} issue(s), {} first", issues.len(), query.sort.label());
    }
    println!("Location: {location}");

    Ok(())
}
