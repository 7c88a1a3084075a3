//! Error types for the record store.

use roster_types::RecordKey;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations. A failed operation never
/// leaves a partial mutation behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record with this student id already exists.
    #[error("duplicate student id: {0}")]
    DuplicateKey(RecordKey),

    /// No record has this student id.
    #[error("record not found: {0}")]
    NotFound(RecordKey),
}

impl StoreError {
    /// The key the failing operation was about.
    pub fn key(&self) -> &RecordKey {
        match self {
            StoreError::DuplicateKey(key) | StoreError::NotFound(key) => key,
        }
    }
}
