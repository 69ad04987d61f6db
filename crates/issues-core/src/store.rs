//! Session-scoped working collection.
//!
//! `IssueSession` owns the authoritative in-memory issues for one session,
//! rehydrates them from the persistence slot at open, and writes them back
//! after every mutation.

use chrono::{DateTime, Utc};

use crate::error::{IssuesError, Result};
use crate::merge::reconcile;
use crate::model::{Issue, IssueDraft, IssueEdit};
use crate::ops;
use crate::persist::{IssueSlot, Persistence};
use crate::query::{self, ViewQuery};

/// Working collection plus its persistence gateway.
pub struct IssueSession<S: IssueSlot> {
    issues: Vec<Issue>,
    persistence: Persistence<S>,
}

impl<S: IssueSlot> IssueSession<S> {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Open a session from freshly loaded source issues.
    ///
    /// Any persisted collection takes precedence; source issues with new ids
    /// are appended.
    pub fn open(loaded: Vec<Issue>, persistence: Persistence<S>) -> Self {
        let persisted = persistence.load();
        let issues = reconcile(persisted, loaded);
        tracing::debug!(count = issues.len(), "Opened issue session");
        Self {
            issues,
            persistence,
        }
    }

    /// Persistence gateway in use.
    #[must_use]
    pub const fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// The working collection, in session order.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Get a single issue by ID.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist.
    pub fn get(&self, id: &str) -> Result<&Issue> {
        self.issues
            .iter()
            .find(|issue| issue.id == id)
            .ok_or_else(|| IssuesError::IssueNotFound { id: id.to_string() })
    }

    /// Derived view of the working collection.
    #[must_use]
    pub fn derive(&self, query: &ViewQuery) -> Vec<Issue> {
        query::derive(&self.issues, query)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Create an issue and persist the collection.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the draft is invalid; nothing is persisted.
    pub fn create_issue(&mut self, draft: &IssueDraft, now: DateTime<Utc>) -> Result<Issue> {
        let (issues, created) = ops::create_issue(&self.issues, draft, now)?;
        self.issues = issues;
        self.persistence.save(&self.issues);
        tracing::info!(id = %created.id, "Created issue");
        Ok(created)
    }

    /// Apply an edit and persist the collection.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist; nothing is persisted.
    pub fn update_issue(&mut self, edit: &IssueEdit, now: DateTime<Utc>) -> Result<Issue> {
        self.issues = ops::update_issue(&self.issues, edit, now)?;
        self.persistence.save(&self.issues);
        tracing::info!(id = %edit.id, "Updated issue");
        self.get(&edit.id).cloned()
    }
}
