//! Table header rendering for the users table.

use egui::{Button, RichText, Ui};
use egui_extras::TableRow;
use userview_business::{ColumnDef, USER_COLUMNS, ViewAction, ViewParams};

/// Renders the header; sortable columns are frameless buttons.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    params: &ViewParams,
) -> Option<ViewAction> {
    let mut action = None;
    for column in &USER_COLUMNS {
        header.col(|ui| {
            if let Some(clicked) = render_header_cell(ui, column, params) {
                action = Some(clicked);
            }
        });
    }
    action
}

fn render_header_cell(ui: &mut Ui, column: &ColumnDef, params: &ViewParams) -> Option<ViewAction> {
    let label = RichText::new(column.header_label(params)).strong();
    match column.sort_key {
        Some(key) => ui
            .add(Button::new(label).frame(false))
            .on_hover_text("Sort")
            .clicked()
            .then_some(ViewAction::ToggleSort(key)),
        None => {
            ui.label(label);
            None
        }
    }
}
