//! Line commands understood by the interactive prompt.

use roster_types::{Field, RecordKey, RecordPatch};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  set <field> <value>   type a value into a field (studentId, fullName, phoneNumber, email)
  fill <json>           fill several fields at once, e.g. fill {\"studentId\":\"123456\"}
  submit                add the student, or save the edit in progress
  search [query]        filter the table; no query shows every student
  edit <studentId>      load a student into the form for editing
  cancel                leave edit mode and clear the form
  show                  print the form and the table
  json                  print the full screen state as JSON
  help                  show this help
  quit                  exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: Field, value: String },
    Fill(RecordPatch),
    Submit,
    Search(String),
    Edit(RecordKey),
    Cancel,
    Show,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0} (try `help`)")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    Field(String),

    #[error("invalid record JSON: {0}")]
    Json(String),
}

impl Command {
    /// Parse one input line. Arguments are trimmed; `set` keeps inner spaces.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseError::Empty);
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb {
            "set" => {
                let (name, value) = match rest.split_once(char::is_whitespace) {
                    Some((name, value)) => (name, value.trim()),
                    None => (rest, ""),
                };
                if name.is_empty() {
                    return Err(ParseError::Usage("set <field> <value>"));
                }
                let field = name
                    .parse::<Field>()
                    .map_err(|e| ParseError::Field(e.to_string()))?;
                Ok(Command::Set {
                    field,
                    value: value.to_string(),
                })
            }
            "fill" => {
                if rest.is_empty() {
                    return Err(ParseError::Usage("fill <json>"));
                }
                RecordPatch::from_json(rest)
                    .map(Command::Fill)
                    .map_err(|e| ParseError::Json(e.to_string()))
            }
            "submit" => Ok(Command::Submit),
            "search" => Ok(Command::Search(rest.to_string())),
            "edit" => {
                if rest.is_empty() {
                    return Err(ParseError::Usage("edit <studentId>"));
                }
                Ok(Command::Edit(RecordKey::new(rest)))
            }
            "cancel" => Ok(Command::Cancel),
            "show" | "ls" => Ok(Command::Show),
            "json" => Ok(Command::Json),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}
