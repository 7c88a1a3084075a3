use roster_types::{Field, RecordPatch};

use crate::result::ValidationResult;
use crate::rules::{FieldRule, check_field};

/// Composes the per-field rules into whole-record validation.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    rules: [FieldRule; 4],
}

impl RecordSchema {
    /// The fixed student record schema.
    #[must_use]
    pub fn student() -> Self {
        Self {
            rules: Field::ALL.map(FieldRule::for_field),
        }
    }

    /// The rule applied to `field`.
    #[must_use]
    pub fn rule(&self, field: Field) -> &FieldRule {
        // `rules` is built from `Field::ALL`, whose order matches the discriminants.
        &self.rules[field as usize]
    }

    pub fn rules(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.iter()
    }

    /// Validate a single field value.
    #[must_use]
    pub fn validate_field(&self, field: Field, value: &str) -> Option<&'static str> {
        check_field(value, self.rule(field))
    }

    /// Validate all four fields. Missing fields count as empty strings.
    #[must_use]
    pub fn validate(&self, values: &RecordPatch) -> ValidationResult {
        let mut result = ValidationResult::new();
        for rule in &self.rules {
            if let Some(message) = check_field(values.value_or_empty(rule.field), rule) {
                result.insert(rule.field, message);
            }
        }
        result
    }
}

impl Default for RecordSchema {
    fn default() -> Self {
        Self::student()
    }
}
