//! Validation model for student records.
//!
//! - [`FieldRule`] / [`check_field`]: one field's required + pattern rule
//! - [`RecordSchema`]: the four rules composed into whole-record validation
//! - [`ValidationResult`]: per-field messages plus overall validity
//!
//! Everything here is pure; validating the same input twice always yields the
//! same result.

mod result;
mod rules;
mod schema;

pub use result::ValidationResult;
pub use rules::{FieldRule, NAME_LETTERS, check_field};
pub use schema::RecordSchema;
