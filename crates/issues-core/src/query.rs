//! View derivation: search, status filter, and null-aware chronological sort.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::IssuesError;
use crate::model::{Issue, Status};

/// Status filter for the derived view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Sentinel: no filtering.
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => issue.status == *status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = IssuesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse::<Status>().map(Self::Only)
        }
    }
}

impl From<Status> for StatusFilter {
    fn from(status: Status) -> Self {
        Self::Only(status)
    }
}

/// Chronological sort direction on `updated_at`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Newest first.
    #[default]
    Desc,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// "Newest" / "Oldest".
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Asc => "Oldest",
            Self::Desc => "Newest",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = IssuesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(IssuesError::InvalidSortOrder {
                order: other.to_string(),
            }),
        }
    }
}

/// Parameters of a derived view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    /// Case-insensitive title substring; whitespace-only means no search.
    pub search: String,
    pub status: StatusFilter,
    pub sort: SortOrder,
}

impl ViewQuery {
    #[must_use]
    pub fn new(search: impl Into<String>, status: StatusFilter, sort: SortOrder) -> Self {
        Self {
            search: search.into(),
            status,
            sort,
        }
    }
}

/// Compare two optional instants; absent values go last in either direction.
#[must_use]
pub fn compare_updated(
    a: Option<&DateTime<Utc>>,
    b: Option<&DateTime<Utc>>,
    order: SortOrder,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match order {
            SortOrder::Asc => a.cmp(b),
            SortOrder::Desc => b.cmp(a),
        },
    }
}

/// Derive the displayed collection. Never mutates `issues`.
#[must_use]
pub fn derive(issues: &[Issue], query: &ViewQuery) -> Vec<Issue> {
    let needle = if query.search.trim().is_empty() {
        None
    } else {
        Some(query.search.to_lowercase())
    };

    let mut results: Vec<Issue> = issues
        .iter()
        .filter(|issue| {
            needle
                .as_deref()
                .is_none_or(|needle| issue.title.to_lowercase().contains(needle))
        })
        .filter(|issue| query.status.matches(issue))
        .cloned()
        .collect();

    // Stable: equal keys (including two absents) keep input order.
    results.sort_by(|a, b| compare_updated(a.updated_at.as_ref(), b.updated_at.as_ref(), query.sort));
    results
}

/// Positional form of [`derive`].
#[must_use]
pub fn derive_view(
    issues: &[Issue],
    search: &str,
    status: StatusFilter,
    sort: SortOrder,
) -> Vec<Issue> {
    derive(issues, &ViewQuery::new(search, status, sort))
}
