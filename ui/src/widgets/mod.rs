mod users;

pub use users::{highlight_job, users_panel};
