//! Core data types for issues-core.
//!
//! The serde format matches the persisted slot payload: camelCase
//! `updatedAt`, snake_case status values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Issue lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Open,
    InProgress,
    Closed,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::Open, Self::InProgress, Self::Closed];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Closed => "closed",
        }
    }

    /// Human-facing label ("In Progress").
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = crate::error::IssuesError;

    /// Exact, case-sensitive match against the three wire values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "closed" => Ok(Self::Closed),
            other => Err(crate::error::IssuesError::InvalidStatus {
                status: other.to_string(),
            }),
        }
    }
}

/// The primary issue entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Issue {
    /// Unique ID within a collection (e.g., "42").
    pub id: String,

    /// Title (at least 3 chars when created through validation).
    pub title: String,

    /// Workflow status.
    pub status: Status,

    /// Last update instant; `None` sorts after every present value.
    #[serde(rename = "updatedAt", default, with = "instant_serde")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Free-form description, possibly empty.
    #[serde(default)]
    pub description: String,
}

impl Issue {
    /// Normalized ISO-8601 form of `updated_at`, if present.
    #[must_use]
    pub fn updated_at_iso(&self) -> Option<String> {
        self.updated_at.map(crate::util::format_instant)
    }
}

/// Input for creating an issue. Status and timestamp are assigned on creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueDraft {
    pub title: String,
    pub description: String,
}

/// Full replacement of an issue's editable fields, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueEdit {
    pub id: String,
    pub title: String,
    pub status: Status,
    pub description: String,
}

impl IssueEdit {
    /// Start an edit from the current state of an issue.
    #[must_use]
    pub fn from_issue(issue: &Issue) -> Self {
        Self {
            id: issue.id.clone(),
            title: issue.title.clone(),
            status: issue.status,
            description: issue.description.clone(),
        }
    }
}

mod instant_serde {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(at) => serializer.serialize_str(&crate::util::format_instant(*at)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(value) => crate::util::parse_instant(value)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
