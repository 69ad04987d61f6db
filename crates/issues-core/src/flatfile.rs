//! Flat-file issue source parsing.
//!
//! One record per line, fields separated by `|`:
//!
//! ```text
//! # comment
//! <id>|<title>|<status>|<updatedAt?>|<description>
//! ```
//!
//! A 4-field line omits `updatedAt`; a 5-field line carries it, possibly
//! empty. Malformed, duplicate and invalid lines are dropped, never reported
//! as errors. Every line still gets an outcome so callers can see why.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::model::{Issue, Status};
use crate::util::parse_instant;

/// Comment marker at the start of a line.
pub const COMMENT_MARKER: char = '#';

/// Field separator.
pub const FIELD_SEPARATOR: char = '|';

/// Why a line did not produce a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Blank after trimming.
    Blank,
    /// Starts with `#`.
    Comment,
    /// Field count other than 4 or 5.
    FieldCount(usize),
    /// ID already claimed by an earlier line.
    DuplicateId(String),
    /// Status is not one of the three wire values.
    InvalidStatus(String),
    /// Non-empty `updatedAt` that is not a time value.
    InvalidTimestamp(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "blank line"),
            Self::Comment => write!(f, "comment"),
            Self::FieldCount(n) => write!(f, "expected 4 or 5 fields, found {n}"),
            Self::DuplicateId(id) => write!(f, "duplicate id '{id}'"),
            Self::InvalidStatus(status) => write!(f, "invalid status '{status}'"),
            Self::InvalidTimestamp(value) => write!(f, "invalid timestamp '{value}'"),
        }
    }
}

/// Outcome of parsing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Accepted(Issue),
    Skipped(SkipReason),
}

impl LineOutcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Per-line outcomes for a whole source, in file order.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    /// `(line_number, outcome)`, line numbers 1-based.
    pub lines: Vec<(usize, LineOutcome)>,
}

impl ParseReport {
    /// Accepted records, in first-occurrence order.
    #[must_use]
    pub fn into_issues(self) -> Vec<Issue> {
        self.lines
            .into_iter()
            .filter_map(|(_, outcome)| match outcome {
                LineOutcome::Accepted(issue) => Some(issue),
                LineOutcome::Skipped(_) => None,
            })
            .collect()
    }

    /// Skipped candidate lines (blank lines and comments excluded).
    #[must_use]
    pub fn rejected(&self) -> Vec<(usize, &SkipReason)> {
        self.lines
            .iter()
            .filter_map(|(line, outcome)| match outcome {
                LineOutcome::Skipped(SkipReason::Blank | SkipReason::Comment)
                | LineOutcome::Accepted(_) => None,
                LineOutcome::Skipped(reason) => Some((*line, reason)),
            })
            .collect()
    }

    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.lines.iter().filter(|(_, o)| o.is_accepted()).count()
    }
}

/// Parse a single line, consulting and updating the set of claimed IDs.
///
/// Check order: shape, duplicate id, claim id, status, timestamp. An id is
/// claimed before status and timestamp are validated, so a rejected first
/// occurrence still shadows later lines with the same id.
pub fn parse_line(line: &str, seen: &mut HashSet<String>) -> LineOutcome {
    if line.trim().is_empty() {
        return LineOutcome::Skipped(SkipReason::Blank);
    }
    if line.starts_with(COMMENT_MARKER) {
        return LineOutcome::Skipped(SkipReason::Comment);
    }

    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let (id, title, status, updated_at, description) = match fields.as_slice() {
        [id, title, status, description] => (*id, *title, *status, None, *description),
        [id, title, status, updated_at, description] => {
            (*id, *title, *status, Some(*updated_at), *description)
        }
        other => return LineOutcome::Skipped(SkipReason::FieldCount(other.len())),
    };

    if seen.contains(id) {
        return LineOutcome::Skipped(SkipReason::DuplicateId(id.to_string()));
    }
    seen.insert(id.to_string());

    let Ok(status) = status.parse::<Status>() else {
        return LineOutcome::Skipped(SkipReason::InvalidStatus(status.to_string()));
    };

    let updated_at = match updated_at {
        None | Some("") => None,
        Some(raw) => match parse_instant(raw) {
            Ok(at) => Some(at),
            Err(_) => return LineOutcome::Skipped(SkipReason::InvalidTimestamp(raw.to_string())),
        },
    };

    LineOutcome::Accepted(Issue {
        id: id.to_string(),
        title: title.to_string(),
        status,
        updated_at,
        description: description.to_string(),
    })
}

/// Parse a whole source into per-line outcomes.
#[must_use]
pub fn parse_report(content: &str) -> ParseReport {
    let mut seen = HashSet::new();
    let lines = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, parse_line(line, &mut seen)))
        .collect();
    ParseReport { lines }
}

/// Parse source text into validated, de-duplicated issues in file order.
#[must_use]
pub fn parse(content: &str) -> Vec<Issue> {
    let report = parse_report(content);
    for (line, reason) in report.rejected() {
        tracing::debug!(line, %reason, "Skipping issue source line");
    }
    report.into_issues()
}

/// Read and parse the issue source file.
///
/// A missing or unreadable file yields an empty collection; the failure is
/// logged, not returned.
#[must_use]
pub fn load_source(path: &Path) -> Vec<Issue> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let issues = parse(&content);
            tracing::debug!(path = %path.display(), count = issues.len(), "Loaded issue source");
            issues
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to load issue source");
            Vec::new()
        }
    }
}
