use serde::{Deserialize, Serialize};

use crate::{Field, RecordKey};

/// One student's four-field data tuple, keyed by `student_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub student_id: String,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
}

impl Record {
    pub fn new(
        student_id: impl Into<String>,
        full_name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            full_name: full_name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
        }
    }

    /// The record's unique key.
    #[must_use]
    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.student_id.as_str())
    }

    /// Read a field's value.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::StudentId => &self.student_id,
            Field::FullName => &self.full_name,
            Field::PhoneNumber => &self.phone_number,
            Field::Email => &self.email,
        }
    }

    /// Overwrite a field's value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::StudentId => self.student_id = value,
            Field::FullName => self.full_name = value,
            Field::PhoneNumber => self.phone_number = value,
            Field::Email => self.email = value,
        }
    }
}

/// Partially filled record values, as submitted by a form.
///
/// Absent fields are treated as empty strings by validation and left
/// untouched by [`RecordPatch::apply_to`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl RecordPatch {
    /// An empty patch (every field absent).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a patch from a JSON object using camelCase field names.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::StudentId => self.student_id.as_deref(),
            Field::FullName => self.full_name.as_deref(),
            Field::PhoneNumber => self.phone_number.as_deref(),
            Field::Email => self.email.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::StudentId => &mut self.student_id,
            Field::FullName => &mut self.full_name,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Email => &mut self.email,
        };
        *slot = Some(value.into());
    }

    /// Value of a field, or `""` when absent.
    #[must_use]
    pub fn value_or_empty(&self, field: Field) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Merge this patch onto `base`; present patch fields win.
    #[must_use]
    pub fn apply_to(&self, base: &Record) -> Record {
        let mut merged = base.clone();
        for field in Field::ALL {
            if let Some(value) = self.get(field) {
                merged.set(field, value);
            }
        }
        merged
    }

    /// Convert to a full record, filling absent fields with empty strings.
    #[must_use]
    pub fn into_record(self) -> Record {
        Record {
            student_id: self.student_id.unwrap_or_default(),
            full_name: self.full_name.unwrap_or_default(),
            phone_number: self.phone_number.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        }
    }
}

impl From<Record> for RecordPatch {
    fn from(record: Record) -> Self {
        Self {
            student_id: Some(record.student_id),
            full_name: Some(record.full_name),
            phone_number: Some(record.phone_number),
            email: Some(record.email),
        }
    }
}

impl From<&Record> for RecordPatch {
    fn from(record: &Record) -> Self {
        Self::from(record.clone())
    }
}
