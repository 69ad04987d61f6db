//! Plain text formatting for terminal output.
//!
//! - Status icons (○ ◐ ✓)
//! - Status labels (`[Open]`, `[In Progress]`, `[Closed]`)
//! - Issue lines and detail blocks

use chrono::{DateTime, Utc};
use issues_core::{Issue, SkipReason, Status};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Status icon characters.
pub mod icons {
    /// Open issue (hollow circle).
    pub const OPEN: &str = "○";
    /// In progress (half-filled).
    pub const IN_PROGRESS: &str = "◐";
    /// Closed (checkmark).
    pub const CLOSED: &str = "✓";
}

/// Display width reserved for titles in list lines.
pub const TITLE_WIDTH: usize = 60;

const ELLIPSIS: char = '…';

/// Return the icon character for a status.
#[must_use]
pub const fn format_status_icon(status: Status) -> &'static str {
    match status {
        Status::Open => icons::OPEN,
        Status::InProgress => icons::IN_PROGRESS,
        Status::Closed => icons::CLOSED,
    }
}

/// Format status as a bracketed label, e.g. `[In Progress]`.
#[must_use]
pub fn format_status_label(status: Status) -> String {
    format!("[{}]", status.label())
}

/// Format the last-updated instant, or `Unknown` when absent.
#[must_use]
pub fn format_updated(updated_at: Option<DateTime<Utc>>) -> String {
    updated_at.map_or_else(
        || "Unknown".to_string(),
        |at| at.format("%Y-%m-%d %H:%M").to_string(),
    )
}

/// Cut `text` to at most `max_width` display columns, ending in `…` if cut.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    if max_width > 0 {
        out.push(ELLIPSIS);
    }
    out
}

/// Format a single-line issue summary.
///
/// Format: `{icon} {id} [{status}] {title}  {updated}`
#[must_use]
pub fn format_issue_line(issue: &Issue) -> String {
    format!(
        "{} {} {} {}  {}",
        format_status_icon(issue.status),
        issue.id,
        format_status_label(issue.status),
        truncate_to_width(&issue.title, TITLE_WIDTH),
        format_updated(issue.updated_at),
    )
}

/// Format the full detail block for `show`.
#[must_use]
pub fn format_issue_details(issue: &Issue) -> String {
    let mut out = format!(
        "{} {} {}\n",
        format_status_icon(issue.status),
        issue.id,
        issue.title
    );
    out.push_str(&format!("Status:  {}\n", issue.status.label()));
    out.push_str(&format!("Updated: {}\n", format_updated(issue.updated_at)));
    if !issue.description.is_empty() {
        out.push('\n');
        out.push_str(&issue.description);
        out.push('\n');
    }
    out
}

/// Format one skipped line of a parse report.
#[must_use]
pub fn format_skip_line(line: usize, reason: &SkipReason) -> String {
    format!("  line {line}: {reason}")
}
