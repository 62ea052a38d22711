//! Row rendering for the users table.

use egui_extras::TableRow;
use userview_business::{USER_COLUMNS, UserRecord};

use super::cells::{render_highlighted_cell, render_plain_cell};

/// Renders one record, highlighting `query` in the columns that ask for it.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, record: &UserRecord, query: &str) {
    for column in &USER_COLUMNS {
        let text = column.key.cell_text(record);
        row.col(|ui| {
            if column.highlight {
                render_highlighted_cell(ui, text, query);
            } else {
                render_plain_cell(ui, text);
            }
        });
    }
}
