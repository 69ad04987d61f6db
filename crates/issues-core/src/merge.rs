//! Session-start reconciliation of the persisted local copy with the
//! freshly loaded source.

use std::collections::HashSet;

use crate::model::Issue;

/// Combine a persisted collection with the loaded source collection.
///
/// Without a persisted collection the loaded one is returned as is.
/// Otherwise the persisted records come first, unchanged (local edits win),
/// followed by loaded records whose id is not persisted, in loaded order.
#[must_use]
pub fn reconcile(persisted: Option<Vec<Issue>>, loaded: Vec<Issue>) -> Vec<Issue> {
    let Some(mut merged) = persisted else {
        return loaded;
    };

    let local_ids: HashSet<String> = merged.iter().map(|issue| issue.id.clone()).collect();
    let before = merged.len();
    merged.extend(
        loaded
            .into_iter()
            .filter(|issue| !local_ids.contains(&issue.id)),
    );

    tracing::debug!(
        persisted = before,
        appended = merged.len() - before,
        "Reconciled persisted issues with source"
    );
    merged
}
