//! Interactive state for the student roster.
//!
//! - [`EditSession`]: create-vs-edit state machine, turns a submit into an
//!   insert or a replace
//! - [`FormState`]: field values, touched flags and live validation
//! - [`RosterApp`]: the top-level component wiring form, session, store and
//!   search together behind the `on_*` handlers a renderer calls
//! - [`RosterConfig`]: labels and logging settings from `roster.toml`
//!
//! Everything runs synchronously on the caller's thread.

mod app;
mod config;
mod form;
mod session;

pub use app::{RenderSnapshot, RosterApp};
pub use config::{DEFAULT_CONFIG_FILE, Labels, LoggingConfig, RosterConfig};
pub use form::FormState;
pub use session::{EditSession, SessionState, SubmitError, SubmitOutcome};
