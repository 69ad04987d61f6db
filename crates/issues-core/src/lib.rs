//! `issues-core` - in-process issue tracking engine.
//!
//! Turns a flat `|`-separated issue file into validated records, derives
//! searched/filtered/sorted views, and keeps a session-local working copy
//! persisted through a pluggable key-value slot.
//!
//! # Quick Start
//!
//! ```no_run
//! use issues_core::{IssueDraft, IssueSession, MemorySlot, Persistence, ViewQuery};
//!
//! let loaded = issues_core::flatfile::load_source("issues.dat".as_ref());
//! let mut session = IssueSession::open(loaded, Persistence::new(MemorySlot::default()));
//!
//! // Derive the displayed view
//! let view = session.derive(&ViewQuery::default());
//!
//! // Create (validated, id allocated, persisted)
//! let draft = IssueDraft { title: "Fix login".into(), description: String::new() };
//! session.create_issue(&draft, chrono::Utc::now()).unwrap();
//! # let _ = view;
//! ```

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod flatfile;
pub mod merge;
pub mod model;
pub mod ops;
pub mod persist;
pub mod query;
pub mod store;
pub mod url_state;
pub mod util;
pub mod validation;

pub use error::{IssuesError, Result, ValidationError};
pub use flatfile::{LineOutcome, ParseReport, SkipReason, load_source};
pub use merge::reconcile;
pub use model::{Issue, IssueDraft, IssueEdit, Status};
pub use ops::{create_issue, update_issue};
pub use persist::{DEFAULT_SLOT, FileSlot, IssueSlot, MemorySlot, Persistence};
pub use query::{SortOrder, StatusFilter, ViewQuery, derive, derive_view};
pub use store::IssueSession;
pub use url_state::{Location, Navigator, RecordingNavigator, UrlSync};
pub use util::next_id;
