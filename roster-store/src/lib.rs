//! In-memory storage and search for student records.
//!
//! # Architecture
//!
//! - [`RecordStore`] owns the ordered collection and enforces `student_id`
//!   uniqueness; it is the only writer
//! - [`filter`] / [`matches`] implement the free-text predicate as a pure scan
//! - [`SearchView`] is the derived, recompute-on-change snapshot handed to the
//!   renderer
//!
//! Nothing here is persisted; the collection lives for the process lifetime.

mod error;
mod search;
mod store;

pub use error::{StoreError, StoreResult};
pub use search::{SearchView, filter, matches};
pub use store::RecordStore;
