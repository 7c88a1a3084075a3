//! Command parsing, execution and text rendering for the roster prompt.

mod command;
mod repl;
mod view;

pub use command::{Command, HELP, ParseError};
pub use repl::{Flow, execute};
pub use view::{form_text, rows_table};
