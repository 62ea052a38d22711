//! Users table page.
//!
//! - `panel`: toolbar (search, page size, status) and composition
//! - `table`: the grid itself (columns, header, row, cells)
//! - `pagination`: previous / numbered / next page controls
//! - `highlight`: search matches as styled text

mod highlight;
mod pagination;
mod panel;
pub mod table;

pub use highlight::highlight_job;
pub use panel::users_panel;
