//! Core type definitions for the student roster.
//!
//! This crate defines the plain data types every other roster crate shares:
//! - [`Field`]: the four editable attributes of a student record
//! - [`Record`]: one student's complete data tuple
//! - [`RecordPatch`]: partially filled form values, merged onto records
//! - [`RecordKey`]: the `studentId` back-reference used by edit sessions
//!
//! Validation rules, storage and search live in their own crates.

mod field;
mod key;
mod record;

pub use field::Field;
pub use key::RecordKey;
pub use record::{Record, RecordPatch};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown field: {0}")]
    UnknownField(String),
}
