//! Substring search over the record collection.
//!
//! [`filter`] is the pure scan; [`SearchView`] caches its output for the
//! current query and recomputes whenever the query or the store changes.

use roster_types::Record;
use tracing::trace;

use crate::store::RecordStore;

/// Whether `record` matches `query`.
///
/// The query is matched case-sensitively against `student_id`,
/// `phone_number` and `email`, and case-insensitively against `full_name`.
/// The empty query matches everything.
#[must_use]
pub fn matches(record: &Record, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    record.student_id.contains(query)
        || record.phone_number.contains(query)
        || record.email.contains(query)
        || record.full_name.to_lowercase().contains(&query.to_lowercase())
}

/// The records matching `query`, in collection order.
#[must_use]
pub fn filter(records: &[Record], query: &str) -> Vec<Record> {
    records.iter().filter(|r| matches(r, query)).cloned().collect()
}

/// Always-fresh filtered view of a [`RecordStore`].
#[derive(Debug, Clone, Default)]
pub struct SearchView {
    query: String,
    results: Vec<Record>,
    /// Store revision the results were computed from. `None` until first refresh.
    seen_revision: Option<u64>,
}

impl SearchView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a view over `store` with an empty query.
    #[must_use]
    pub fn over(store: &RecordStore) -> Self {
        let mut view = Self::new();
        view.refresh(store);
        view
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The last computed snapshot.
    pub fn results(&self) -> &[Record] {
        &self.results
    }

    /// Replace the query and recompute against `store`.
    pub fn set_query(&mut self, query: impl Into<String>, store: &RecordStore) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.seen_revision = None;
        }
        self.refresh(store);
    }

    /// Recompute if the store changed since the last refresh. Returns whether
    /// a recompute happened.
    pub fn refresh(&mut self, store: &RecordStore) -> bool {
        if self.seen_revision == Some(store.revision()) {
            return false;
        }
        self.results = filter(store.records(), &self.query);
        self.seen_revision = Some(store.revision());
        trace!(
            query = %self.query,
            revision = store.revision(),
            hits = self.results.len(),
            "Search view recomputed"
        );
        true
    }
}
