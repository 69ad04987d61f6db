use issues_core::{Issue, LineOutcome, ParseReport, ViewQuery};
use serde::Serialize;

/// Derived view for `list --json`.
#[derive(Debug, Clone, Serialize)]
pub struct ListOutput<'a> {
    /// Shareable location after applying the view parameters.
    pub location: String,
    pub search: &'a str,
    pub status: &'static str,
    pub sort: &'static str,
    pub count: usize,
    pub issues: &'a [Issue],
}

impl<'a> ListOutput<'a> {
    #[must_use]
    pub fn new(location: String, query: &'a ViewQuery, issues: &'a [Issue]) -> Self {
        Self {
            location,
            search: &query.search,
            status: query.status.as_str(),
            sort: query.sort.as_str(),
            count: issues.len(),
            issues,
        }
    }
}

/// One line of a parse report.
#[derive(Debug, Clone, Serialize)]
pub struct ParseLine {
    pub line: usize,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Summary of parsing a source file, for `parse --json`.
#[derive(Debug, Clone, Serialize)]
pub struct ParseSummary {
    pub source: String,
    pub accepted: usize,
    pub skipped: usize,
    pub lines: Vec<ParseLine>,
}

impl ParseSummary {
    #[must_use]
    pub fn from_report(source: String, report: &ParseReport) -> Self {
        let lines: Vec<ParseLine> = report
            .lines
            .iter()
            .map(|(line, outcome)| match outcome {
                LineOutcome::Accepted(issue) => ParseLine {
                    line: *line,
                    accepted: true,
                    id: Some(issue.id.clone()),
                    reason: None,
                },
                LineOutcome::Skipped(reason) => ParseLine {
                    line: *line,
                    accepted: false,
                    id: None,
                    reason: Some(reason.to_string()),
                },
            })
            .collect();
        let accepted = report.accepted_count();
        Self {
            source,
            accepted,
            skipped: lines.len() - accepted,
            lines,
        }
    }
}
