//! Executes parsed commands against a [`RosterApp`].

use anyhow::{Context, Result};
use roster_session::{RosterApp, SubmitError, SubmitOutcome};
use roster_types::Field;
use std::io::Write;
use tracing::debug;

use crate::command::{Command, HELP};
use crate::view::{form_text, rows_table};

/// Whether the prompt keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply one command and print its result to `out`.
pub fn execute(app: &mut RosterApp, command: Command, out: &mut impl Write) -> Result<Flow> {
    debug!(?command, "Executing command");
    match command {
        Command::Set { field, value } => {
            // A committed line is a change followed by leaving the field.
            app.on_field_change(field, value);
            app.on_field_blur(field);
            print_field_error(app, field, out)?;
        }
        Command::Fill(patch) => {
            for field in Field::ALL {
                if let Some(value) = patch.get(field) {
                    app.on_field_change(field, value);
                    app.on_field_blur(field);
                }
            }
            writeln!(out, "{}", form_text(&app.render()))?;
        }
        Command::Submit => match app.on_submit() {
            Ok(SubmitOutcome::Inserted(record)) => {
                writeln!(out, "Added {} ({})", record.student_id, record.full_name)?;
            }
            Ok(SubmitOutcome::Updated { key, record }) => {
                writeln!(out, "Updated {key} ({})", record.full_name)?;
            }
            Err(SubmitError::Invalid(result)) => {
                for (field, message) in result.iter() {
                    writeln!(out, "{}: {message}", field.label())?;
                }
            }
            Err(e) => {
                let notice = app.notice_for(&e).unwrap_or_default();
                writeln!(out, "{notice} ({e})")?;
            }
        },
        Command::Search(query) => {
            app.on_search_change(query);
            writeln!(out, "{}", rows_table(app.rows()))?;
        }
        Command::Edit(key) => match app.store().get(&key).cloned() {
            Some(record) => {
                app.on_edit_requested(&record);
                writeln!(out, "{}", form_text(&app.render()))?;
            }
            None => writeln!(out, "No student with id {key}")?,
        },
        Command::Cancel => {
            app.on_cancel_edit();
            writeln!(out, "{}", form_text(&app.render()))?;
        }
        Command::Show => {
            writeln!(out, "{}", form_text(&app.render()))?;
            writeln!(out, "{}", rows_table(app.rows()))?;
        }
        Command::Json => {
            let json = serde_json::to_string_pretty(&app.render())
                .context("Failed to serialize screen state")?;
            writeln!(out, "{json}")?;
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn print_field_error(app: &RosterApp, field: Field, out: &mut impl Write) -> Result<()> {
    if let Some(message) = app.form().visible_errors().error(field) {
        writeln!(out, "{}: {message}", field.label())?;
    }
    Ok(())
}
