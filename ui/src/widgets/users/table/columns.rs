//! Column widths for the users table.

use egui_extras::Column;

pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 26.0;
pub const CITY_WIDTH: f32 = 140.0;

/// Name and Email share the free space; City is fixed.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::remainder().at_least(120.0).clip(true), // Name
        Column::remainder().at_least(160.0).clip(true), // Email
        Column::exact(CITY_WIDTH).clip(true),           // City
    ]
}
