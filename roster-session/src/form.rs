//! Editable form state: current values, touched flags, live validation.

use roster_model::{RecordSchema, ValidationResult};
use roster_types::{Field, Record, RecordPatch};
use std::collections::BTreeSet;

/// The single editable record behind the input form.
///
/// Validation is recomputed from scratch after every change, blur, seed and
/// reset. A field's error is only *visible* once the field has been touched.
#[derive(Debug, Clone)]
pub struct FormState {
    schema: RecordSchema,
    values: Record,
    touched: BTreeSet<Field>,
    validation: ValidationResult,
}

impl FormState {
    /// An empty, untouched form.
    #[must_use]
    pub fn new(schema: RecordSchema) -> Self {
        let values = Record::default();
        let validation = schema.validate(&RecordPatch::from(&values));
        Self {
            schema,
            values,
            touched: BTreeSet::new(),
            validation,
        }
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    pub fn values(&self) -> &Record {
        &self.values
    }

    /// The current values as a full patch, ready for submit.
    #[must_use]
    pub fn patch(&self) -> RecordPatch {
        RecordPatch::from(&self.values)
    }

    /// Validation of all fields, touched or not.
    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    /// Errors of touched fields only.
    #[must_use]
    pub fn visible_errors(&self) -> ValidationResult {
        self.validation.filtered(|f| self.touched.contains(&f))
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn touched(&self) -> impl Iterator<Item = Field> + '_ {
        self.touched.iter().copied()
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        self.revalidate();
    }

    /// Mark a field as interacted with (blur).
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
        self.revalidate();
    }

    /// Mark every field touched, as a submit attempt does.
    pub fn touch_all(&mut self) {
        self.touched.extend(Field::ALL);
        self.revalidate();
    }

    /// One-time copy of `values` into the form. Absent fields keep their
    /// current value; touched flags are left alone.
    pub fn seed(&mut self, values: &RecordPatch) {
        self.values = values.apply_to(&self.values);
        self.revalidate();
    }

    /// Clear values, touched flags and errors back to the initial state.
    pub fn reset(&mut self) {
        self.values = Record::default();
        self.touched.clear();
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.validation = self.schema.validate(&RecordPatch::from(&self.values));
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(RecordSchema::student())
    }
}
