//! Snapshot holder for directory records.

use crate::models::ContactRecord;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

/// The current snapshot of contact records as of the last successful load.
///
/// The store holds raw records and no derived state; views, vocabulary and
/// summaries are recomputed from it on demand. Readers share the snapshot
/// through a cheap `Arc` clone, and a replacement only ever happens wholesale
/// after a successful load; a failed refresh never touches it.
#[derive(Clone, Default)]
pub struct RecordStore {
    snapshot: Arc<RwLock<Arc<Vec<ContactRecord>>>>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<Vec<ContactRecord>> {
        match self.snapshot.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Replace the snapshot wholesale with a freshly loaded one.
    ///
    /// Record ids must be unique within a snapshot; duplicates are kept (the
    /// store does not second-guess the directory service) but logged so a
    /// misbehaving tenant shows up in the logs.
    pub fn replace(&self, records: Vec<ContactRecord>) {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                tracing::warn!(id = %record.id, "duplicate contact id in snapshot");
            }
        }

        let next = Arc::new(records);
        match self.snapshot.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }

    /// Number of records in the current snapshot.
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Whether the current snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("records", &self.len())
            .finish()
    }
}
