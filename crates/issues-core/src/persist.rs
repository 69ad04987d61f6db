//! Local persistence of the working collection.
//!
//! The collection lives in one named slot of a key-value store. The
//! [`Persistence`] gateway never fails its caller: write errors are logged
//! and dropped, read errors and corrupt payloads read as "absent".

use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{IssuesError, Result};
use crate::model::Issue;

/// Default slot name for the working collection.
pub const DEFAULT_SLOT: &str = "issue-tracker-issues";

/// A single named slot in a durable key-value store.
pub trait IssueSlot {
    /// Slot name, for diagnostics.
    fn name(&self) -> &str;

    /// Read the raw payload; `Ok(None)` if the slot was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the raw payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    fn write(&self, payload: &str) -> Result<()>;
}

/// Slot stored as `<dir>/<name>.json`, replaced atomically.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
    name: String,
}

impl FileSlot {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.name))
    }
}

impl IssueSlot for FileSlot {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(self.path()) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(IssuesError::Io(e)),
        }
    }

    fn write(&self, payload: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path();

        // Write to temp file, then rename over the slot
        let tmp_path = path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(payload.as_bytes())?;
        file.flush()?;
        drop(file);

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

/// In-process slot. Useful for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemorySlot {
    payload: RefCell<Option<String>>,
    writes: RefCell<usize>,
}

impl MemorySlot {
    /// A slot that already holds `payload`.
    #[must_use]
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: RefCell::new(Some(payload.into())),
            writes: RefCell::new(0),
        }
    }

    /// Current raw payload.
    #[must_use]
    pub fn payload(&self) -> Option<String> {
        self.payload.borrow().clone()
    }

    /// Number of successful writes.
    #[must_use]
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl IssueSlot for MemorySlot {
    fn name(&self) -> &str {
        DEFAULT_SLOT
    }

    fn read(&self) -> Result<Option<String>> {
        Ok(self.payload.borrow().clone())
    }

    fn write(&self, payload: &str) -> Result<()> {
        *self.payload.borrow_mut() = Some(payload.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

/// Failure-tolerant gateway over an [`IssueSlot`].
#[derive(Debug)]
pub struct Persistence<S: IssueSlot> {
    slot: S,
}

impl<S: IssueSlot> Persistence<S> {
    #[must_use]
    pub const fn new(slot: S) -> Self {
        Self { slot }
    }

    #[must_use]
    pub const fn slot(&self) -> &S {
        &self.slot
    }

    /// Serialize and store the full collection. Failures are logged only.
    pub fn save(&self, issues: &[Issue]) {
        if let Err(e) = self.try_save(issues) {
            tracing::warn!(slot = self.slot.name(), error = %e, "Failed to save issues");
        }
    }

    /// Load the stored collection, or `None` if absent or unreadable.
    #[must_use]
    pub fn load(&self) -> Option<Vec<Issue>> {
        match self.try_load() {
            Ok(issues) => issues,
            Err(e) => {
                tracing::warn!(slot = self.slot.name(), error = %e, "Failed to load issues");
                None
            }
        }
    }

    fn try_save(&self, issues: &[Issue]) -> Result<()> {
        let payload = serde_json::to_string(issues)?;
        self.slot.write(&payload)
    }

    fn try_load(&self) -> Result<Option<Vec<Issue>>> {
        let Some(payload) = self.slot.read()? else {
            return Ok(None);
        };
        let issues: Vec<Issue> = serde_json::from_str(&payload)?;
        Ok(Some(issues))
    }
}

impl Persistence<FileSlot> {
    /// Gateway over `<dir>/<name>.json`.
    #[must_use]
    pub fn in_dir(dir: &Path, name: &str) -> Self {
        Self::new(FileSlot::new(dir, name))
    }
}
