//! Local key/value storage for the submission hand-off.
//!
//! The form view writes one record into a well-known slot and the
//! confirmation view reads it back. Both views receive the store as a
//! [`SharedStore`] so either side can be exercised against [`MemoryStore`].

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::{PalmistError, PalmistResult};
use crate::types::PersistedSubmission;

/// Key of the single slot holding the latest submission.
pub const SUBMISSION_SLOT: &str = "palmist_submission";

const LOCAL_STORAGE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("local_storage");

/// Text slots addressed by key.
pub trait SubmissionStore: Send + Sync {
    /// Read a slot. `Ok(None)` when nothing was ever written.
    fn read(&self, key: &str) -> PalmistResult<Option<String>>;

    /// Write a slot, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> PalmistResult<()>;
}

pub type SharedStore = Arc<dyn SubmissionStore>;

/// Store backed by a redb file in the data directory.
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<RwLock<Database>>,
}

impl RedbStore {
    /// Open (or create) the store at `path`, creating parent directories.
    pub fn open(path: impl AsRef<Path>) -> PalmistResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
        }
        write_txn.commit()?;

        tracing::info!(path = ?path, "Opened local storage");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl SubmissionStore for RedbStore {
    fn read(&self, key: &str) -> PalmistResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(LOCAL_STORAGE_TABLE)?;

        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    fn write(&self, key: &str, value: &str) -> PalmistResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// In-memory store, used in tests and when the database cannot be opened.
#[derive(Clone, Default)]
pub struct MemoryStore {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }
}

impl SubmissionStore for MemoryStore {
    fn read(&self, key: &str) -> PalmistResult<Option<String>> {
        Ok(self.slots.read().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> PalmistResult<()> {
        self.slots.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Serialize a submission into the slot, overwriting the previous one.
pub fn save_submission(
    store: &dyn SubmissionStore,
    record: &PersistedSubmission,
) -> PalmistResult<()> {
    let json = record.to_json()?;
    store.write(SUBMISSION_SLOT, &json)
}

/// Read the submission slot.
///
/// Unreadable slots and malformed records are treated as absent and only
/// logged; the confirmation view must render either way.
pub fn load_submission(store: &dyn SubmissionStore) -> Option<PersistedSubmission> {
    let raw = match store.read(SUBMISSION_SLOT) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("No submission in local storage");
            return None;
        }
        Err(e) => {
            tracing::warn!(error = %e, "Could not read submission slot");
            return None;
        }
    };

    match PersistedSubmission::from_json(&raw) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(
                error = %PalmistError::from(e),
                "Ignoring malformed submission record"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.read("k").unwrap().is_none());

        store.write("k", "v1").unwrap();
        store.write("k", "v2").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_redb_store_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("palmist.redb");

        let store = RedbStore::open(&path).unwrap();
        assert!(path.exists());
        assert!(store.read(SUBMISSION_SLOT).unwrap().is_none());
    }

    #[test]
    fn test_redb_store_overwrites() {
        let temp = TempDir::new().unwrap();
        let store = RedbStore::open(temp.path().join("palmist.redb")).unwrap();

        store.write(SUBMISSION_SLOT, "first").unwrap();
        store.write(SUBMISSION_SLOT, "second").unwrap();
        assert_eq!(store.read(SUBMISSION_SLOT).unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_malformed_record_reads_as_absent() {
        let store = MemoryStore::new();
        store.write(SUBMISSION_SLOT, "{\"fullName\": 42").unwrap();
        assert!(load_submission(&store).is_none());

        store.write(SUBMISSION_SLOT, "{\"fullName\": \"Jane\"}").unwrap();
        assert!(load_submission(&store).is_none());
    }

    #[test]
    fn test_empty_slot_reads_as_absent() {
        assert!(load_submission(&MemoryStore::new()).is_none());
    }
}
