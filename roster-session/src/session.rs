//! Edit session: create-vs-update reconciliation without I/O.
//!
//! The session is a two-state machine. It decides whether a submit becomes
//! an insert or a replace, and which state follows.

use roster_model::{RecordSchema, ValidationResult};
use roster_store::{RecordStore, StoreError};
use roster_types::{Record, RecordKey, RecordPatch};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Labels;

/// Which action a submit performs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "target", rename_all = "snake_case")]
pub enum SessionState {
    /// Submit inserts a new record.
    #[default]
    Creating,
    /// Submit replaces the record with this key.
    Editing(RecordKey),
}

/// Result of an accepted submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Inserted(Record),
    Updated { key: RecordKey, record: Record },
}

impl SubmitOutcome {
    pub fn record(&self) -> &Record {
        match self {
            SubmitOutcome::Inserted(record) | SubmitOutcome::Updated { record, .. } => record,
        }
    }
}

/// Why a submit was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// At least one field failed validation; nothing was written.
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(ValidationResult),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SubmitError {
    /// Whether the form should still be cleared after this error.
    ///
    /// Only a missing edit target does: the session has already returned to
    /// `Creating`, so the stale values have nowhere to go.
    #[must_use]
    pub fn resets_form(&self) -> bool {
        matches!(self, SubmitError::Store(StoreError::NotFound(_)))
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditSession {
    state: SessionState,
}

impl EditSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, SessionState::Editing(_))
    }

    /// The key being edited, if any.
    pub fn target(&self) -> Option<&RecordKey> {
        match &self.state {
            SessionState::Editing(key) => Some(key),
            SessionState::Creating => None,
        }
    }

    /// Start editing `record`. Returns the values to seed the form with;
    /// the copy is not kept in sync with later store changes.
    pub fn begin_edit(&mut self, record: &Record) -> RecordPatch {
        info!(student_id = %record.student_id, "Editing record");
        self.state = SessionState::Editing(record.key());
        RecordPatch::from(record)
    }

    /// Abandon an edit in progress.
    pub fn cancel(&mut self) {
        if let SessionState::Editing(key) = &self.state {
            debug!(student_id = %key, "Edit cancelled");
        }
        self.state = SessionState::Creating;
    }

    pub fn submit_label<'a>(&self, labels: &'a Labels) -> &'a str {
        match self.state {
            SessionState::Creating => &labels.create,
            SessionState::Editing(_) => &labels.update,
        }
    }

    /// Validate `values` and apply them to `store`.
    ///
    /// - Invalid values: nothing is written and the state is unchanged.
    /// - `Creating`: insert; a duplicate key leaves the state unchanged.
    /// - `Editing(key)`: replace by `key` and return to `Creating`, unless the
    ///   replace was rejected as a duplicate key, which keeps the edit open.
    pub fn submit(
        &mut self,
        schema: &RecordSchema,
        store: &mut RecordStore,
        values: &RecordPatch,
    ) -> Result<SubmitOutcome, SubmitError> {
        let validation = schema.validate(values);
        if !validation.is_valid() {
            debug!(invalid = validation.len(), "Submit blocked by validation");
            return Err(SubmitError::Invalid(validation));
        }

        let Some(key) = self.target().cloned() else {
            let record = store.insert(values.clone().into_record())?.clone();
            info!(student_id = %record.student_id, "Student added");
            return Ok(SubmitOutcome::Inserted(record));
        };

        match store.replace_by_key(&key, values) {
            Ok(record) => {
                let record = record.clone();
                info!(student_id = %key, "Student updated");
                self.state = SessionState::Creating;
                Ok(SubmitOutcome::Updated { key, record })
            }
            Err(e @ StoreError::DuplicateKey(_)) => Err(e.into()),
            Err(e @ StoreError::NotFound(_)) => {
                warn!(student_id = %key, "Edit target vanished from the store");
                self.state = SessionState::Creating;
                Err(e.into())
            }
        }
    }
}
