//! The in-memory record collection.
//!
//! Records are kept in insertion order. `student_id` is unique across the
//! collection at all times; every other field may repeat.

use roster_types::{Record, RecordKey, RecordPatch};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

/// Owns the ordered record collection. The only writers are
/// [`RecordStore::insert`] and [`RecordStore::replace_by_key`].
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    /// Bumped on every successful mutation.
    revision: u64,
}

impl RecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, in insertion order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Monotonic change counter, used by derived views to detect staleness.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, key: &RecordKey) -> Option<&Record> {
        self.position(key.as_str()).map(|i| &self.records[i])
    }

    pub fn contains_key(&self, key: &RecordKey) -> bool {
        self.position(key.as_str()).is_some()
    }

    fn position(&self, student_id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.student_id == student_id)
    }

    /// Append a record.
    ///
    /// Fails with [`StoreError::DuplicateKey`] if its `student_id` is already
    /// present; the collection is left unchanged in that case.
    pub fn insert(&mut self, record: Record) -> StoreResult<&Record> {
        if self.position(&record.student_id).is_some() {
            warn!(student_id = %record.student_id, "Rejected insert of duplicate key");
            return Err(StoreError::DuplicateKey(record.key()));
        }
        debug!(student_id = %record.student_id, len = self.records.len() + 1, "Record inserted");
        self.records.push(record);
        self.revision += 1;
        Ok(&self.records[self.records.len() - 1])
    }

    /// Merge `patch` onto the record stored under `key` and replace it in
    /// place.
    ///
    /// Fails with [`StoreError::NotFound`] if `key` is absent, or with
    /// [`StoreError::DuplicateKey`] if the patch changes the `student_id` to
    /// one owned by a different record.
    pub fn replace_by_key(&mut self, key: &RecordKey, patch: &RecordPatch) -> StoreResult<&Record> {
        let Some(index) = self.position(key.as_str()) else {
            warn!(student_id = %key, "Replace target not found");
            return Err(StoreError::NotFound(key.clone()));
        };

        let merged = patch.apply_to(&self.records[index]);
        if merged.student_id != key.as_str() {
            let collides = self
                .records
                .iter()
                .enumerate()
                .any(|(i, r)| i != index && r.student_id == merged.student_id);
            if collides {
                warn!(
                    student_id = %key,
                    new_student_id = %merged.student_id,
                    "Rejected key change onto an existing record"
                );
                return Err(StoreError::DuplicateKey(merged.key()));
            }
        }

        debug!(student_id = %key, position = index, "Record replaced");
        self.records[index] = merged;
        self.revision += 1;
        Ok(&self.records[index])
    }
}
