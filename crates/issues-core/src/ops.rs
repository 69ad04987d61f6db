//! Create and update as pure operations over a collection.
//!
//! Both return a fresh collection; the input slice is never touched.

use chrono::{DateTime, Utc};

use crate::error::{IssuesError, Result};
use crate::model::{Issue, IssueDraft, IssueEdit, Status};
use crate::util::next_id;
use crate::validation::IssueValidator;

/// Create an issue from a draft and prepend it to the collection.
///
/// The new issue is `open`, stamped with `now`, and has its title and
/// description trimmed.
///
/// # Errors
///
/// Returns `Validation` if the draft title is empty or too short.
pub fn create_issue(
    issues: &[Issue],
    draft: &IssueDraft,
    now: DateTime<Utc>,
) -> Result<(Vec<Issue>, Issue)> {
    IssueValidator::validate_draft(draft).map_err(IssuesError::from_validation_errors)?;

    let issue = Issue {
        id: next_id(issues),
        title: draft.title.trim().to_string(),
        status: Status::Open,
        updated_at: Some(now),
        description: draft.description.trim().to_string(),
    };

    let mut updated = Vec::with_capacity(issues.len() + 1);
    updated.push(issue.clone());
    updated.extend_from_slice(issues);
    Ok((updated, issue))
}

/// Replace every editable field of the issue with `edit.id`.
///
/// Title and description are trimmed and `updated_at` becomes `now`.
/// Position in the collection is kept.
///
/// # Errors
///
/// Returns `IssueNotFound` if no issue has `edit.id`.
pub fn update_issue(issues: &[Issue], edit: &IssueEdit, now: DateTime<Utc>) -> Result<Vec<Issue>> {
    if !issues.iter().any(|issue| issue.id == edit.id) {
        return Err(IssuesError::IssueNotFound {
            id: edit.id.clone(),
        });
    }

    Ok(issues
        .iter()
        .map(|issue| {
            if issue.id == edit.id {
                Issue {
                    id: issue.id.clone(),
                    title: edit.title.trim().to_string(),
                    status: edit.status,
                    updated_at: Some(now),
                    description: edit.description.trim().to_string(),
                }
            } else {
                issue.clone()
            }
        })
        .collect())
}
