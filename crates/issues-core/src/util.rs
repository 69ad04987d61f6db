//! ID allocation and instant parsing/formatting utilities.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{IssuesError, Result};
use crate::model::Issue;

// ============================================================================
// ID Allocation
// ============================================================================

/// Allocate the next free numeric issue ID.
///
/// Starts one past the largest ID made only of decimal digits (any length,
/// leading zeros ignored; other IDs are skipped, floor 0) and steps forward
/// until the candidate collides with no existing ID.
#[must_use]
pub fn next_id(issues: &[Issue]) -> String {
    let existing: HashSet<&str> = issues.iter().map(|issue| issue.id.as_str()).collect();

    let max = issues
        .iter()
        .filter_map(|issue| decimal_digits(&issue.id))
        .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
        .unwrap_or("0");

    let mut candidate = increment_decimal(max);
    while existing.contains(candidate.as_str()) {
        candidate = increment_decimal(&candidate);
    }
    candidate
}

/// Digits of a numeric ID with leading zeros stripped, or `None`.
fn decimal_digits(id: &str) -> Option<&str> {
    let digits = id.strip_prefix('+').unwrap_or(id);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let trimmed = digits.trim_start_matches('0');
    Some(if trimmed.is_empty() { "0" } else { trimmed })
}

/// Add one to a string of decimal digits.
fn increment_decimal(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for byte in bytes.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }
    let mut carried = String::with_capacity(bytes.len() + 1);
    carried.push('1');
    carried.push_str(&String::from_utf8_lossy(&bytes));
    carried
}

// ============================================================================
// Instants
// ============================================================================

/// Zoned forms RFC 3339 rejects (minute precision, offsets without a colon).
/// A trailing `Z` is rewritten to `+00:00` before these are tried.
const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a calendar/time value into an absolute instant.
///
/// Accepts RFC 3339 (any offset), other ISO 8601 zoned forms such as
/// `2024-01-01T10:00Z` or `+0530` offsets, naive date-times (taken as UTC)
/// and bare dates (midnight UTC).
///
/// # Errors
///
/// Returns `InvalidTimestamp` if no supported form matches.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(at) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(at.with_timezone(&Utc));
    }

    let zoned = match trimmed.strip_suffix(['Z', 'z']) {
        Some(local) => format!("{local}+00:00"),
        None => trimmed.to_string(),
    };
    for format in ZONED_FORMATS {
        if let Ok(at) = DateTime::parse_from_str(&zoned, format) {
            return Ok(at.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(IssuesError::InvalidTimestamp {
        value: value.to_string(),
    })
}

/// Format an instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
#[must_use]
pub fn format_instant(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
