//! The top-level roster component.
//!
//! `RosterApp` owns every piece of state and is the only entry point the
//! rendering layer calls into. Each `on_*` handler runs to completion,
//! including the search recompute, before returning.

use roster_model::{RecordSchema, ValidationResult};
use roster_store::{RecordStore, SearchView, StoreError};
use roster_types::{Field, Record};
use serde::Serialize;
use tracing::debug;

use crate::config::RosterConfig;
use crate::form::FormState;
use crate::session::{EditSession, SessionState, SubmitError, SubmitOutcome};

/// Read-only snapshot of everything the renderer displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSnapshot {
    pub values: Record,
    /// Errors of touched fields only.
    pub errors: ValidationResult,
    pub touched: Vec<Field>,
    pub is_valid: bool,
    pub query: String,
    pub rows: Vec<Record>,
    pub submit_label: String,
    pub session: SessionState,
}

#[derive(Debug, Clone)]
pub struct RosterApp {
    config: RosterConfig,
    store: RecordStore,
    session: EditSession,
    form: FormState,
    search: SearchView,
}

impl RosterApp {
    #[must_use]
    pub fn new(config: RosterConfig) -> Self {
        let store = RecordStore::new();
        let search = SearchView::over(&store);
        Self {
            config,
            store,
            session: EditSession::new(),
            form: FormState::new(RecordSchema::student()),
            search,
        }
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// The filtered rows for the current query.
    pub fn rows(&self) -> &[Record] {
        self.search.results()
    }

    pub fn submit_label(&self) -> &str {
        self.session.submit_label(&self.config.labels)
    }

    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.form.set_value(field, value);
    }

    pub fn on_field_blur(&mut self, field: Field) {
        self.form.touch(field);
    }

    pub fn on_search_change(&mut self, query: impl Into<String>) {
        self.search.set_query(query, &self.store);
    }

    /// Switch to editing `record` and seed the form from it.
    pub fn on_edit_requested(&mut self, record: &Record) {
        let seed = self.session.begin_edit(record);
        self.form.seed(&seed);
    }

    /// Leave edit mode and clear the form.
    pub fn on_cancel_edit(&mut self) {
        self.session.cancel();
        self.form.reset();
    }

    /// Submit the form.
    ///
    /// The form is cleared on success and when the edit target has vanished;
    /// validation failures and duplicate keys leave it as typed.
    pub fn on_submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        self.form.touch_all();
        let values = self.form.patch();
        let result = self
            .session
            .submit(self.form.schema(), &mut self.store, &values);

        let reset = match &result {
            Ok(_) => true,
            Err(e) => e.resets_form(),
        };
        if reset {
            self.form.reset();
        }
        if self.search.refresh(&self.store) {
            debug!(rows = self.search.results().len(), "Rows refreshed after submit");
        }
        result
    }

    /// User-facing blocking notice for a submit error. Validation errors are
    /// shown inline and have none.
    pub fn notice_for(&self, error: &SubmitError) -> Option<&str> {
        let labels = &self.config.labels;
        match error {
            SubmitError::Invalid(_) => None,
            SubmitError::Store(StoreError::DuplicateKey(_)) => Some(&labels.duplicate_notice),
            SubmitError::Store(StoreError::NotFound(_)) => Some(&labels.missing_notice),
        }
    }

    #[must_use]
    pub fn render(&self) -> RenderSnapshot {
        RenderSnapshot {
            values: self.form.values().clone(),
            errors: self.form.visible_errors(),
            touched: self.form.touched().collect(),
            is_valid: self.form.validation().is_valid(),
            query: self.search.query().to_string(),
            rows: self.search.results().to_vec(),
            submit_label: self.submit_label().to_string(),
            session: self.session.state().clone(),
        }
    }
}

impl Default for RosterApp {
    fn default() -> Self {
        Self::new(RosterConfig::default())
    }
}
