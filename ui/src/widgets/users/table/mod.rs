//! Table components for the users page.
//!
//! - `columns`: Column widths
//! - `header`: Sortable header rendering
//! - `row`: Individual row rendering
//! - `cells`: Plain and highlighted cell rendering

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;
use userview_business::{UserRecord, ViewAction, ViewParams};

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_user_row;

/// Renders the rows of the current page. Returns the sort action of a clicked header.
pub fn render_users_table(
    ui: &mut Ui,
    rows: &[UserRecord],
    params: &ViewParams,
) -> Option<ViewAction> {
    let mut action = None;

    let mut builder = TableBuilder::new(ui)
        .id_salt("users_table")
        .striped(true)
        .resizable(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            action = render_table_header(&mut header, params);
        })
        .body(|mut body| {
            for record in rows {
                body.row(ROW_HEIGHT, |mut row| {
                    render_user_row(&mut row, record, &params.query);
                });
            }
        });

    action
}
