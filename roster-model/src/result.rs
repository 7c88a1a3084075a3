use roster_types::Field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-field error messages for one record.
///
/// An absent entry means the field is currently valid. Results are rebuilt
/// from scratch on every validation and never edited in place by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff no field has an error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Number of invalid fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub(crate) fn insert(&mut self, field: Field, message: &str) {
        self.errors.insert(field, message.to_string());
    }

    /// Keep only the errors whose field satisfies `keep`.
    #[must_use]
    pub fn filtered(&self, mut keep: impl FnMut(Field) -> bool) -> Self {
        Self {
            errors: self
                .errors
                .iter()
                .filter(|(f, _)| keep(**f))
                .map(|(f, m)| (*f, m.clone()))
                .collect(),
        }
    }
}
