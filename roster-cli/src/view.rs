use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use roster_session::{RenderSnapshot, SessionState};
use roster_types::{Field, Record};
use std::fmt::Write;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// The student table.
pub fn rows_table(rows: &[Record]) -> Table {
    let mut table = Table::new();
    table.set_header(Field::ALL.map(|f| header_cell(f.label())).to_vec());
    apply_table_style(&mut table);
    for record in rows {
        table.add_row(Field::ALL.map(|f| record.get(f).to_string()).to_vec());
    }
    table
}

/// The form: one line per field, with its visible error underneath.
pub fn form_text(snapshot: &RenderSnapshot) -> String {
    let mut out = String::new();
    if let SessionState::Editing(key) = &snapshot.session {
        let _ = writeln!(out, "Editing {key}");
    }
    for field in Field::ALL {
        let _ = writeln!(out, "  {:<14} {}", field.label(), snapshot.values.get(field));
        if let Some(message) = snapshot.errors.error(field) {
            let _ = writeln!(out, "  {:<14} ! {message}", "");
        }
    }
    let _ = write!(out, "  [{}]", snapshot.submit_label);
    out
}
