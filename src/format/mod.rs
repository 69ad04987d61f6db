//! Output formatting for `iss`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//! Diagnostics go to stderr; only command output goes to stdout.

mod output;
mod text;

pub use output::{ListOutput, ParseLine, ParseSummary};
pub use text::{
    TITLE_WIDTH, format_issue_details, format_issue_line, format_skip_line, format_status_icon,
    format_status_label, format_updated, icons, truncate_to_width,
};
