//! Domain layer of the user directory viewer.
//!
//! Pure pieces (record model, highlighter, filter/sort/paginate pipeline, parameter reducer)
//! plus the states, computes and commands that wire them into a `userview_states::StateCtx`.
//!
//! UI code should only read via `ctx.cached::<T>()` / `ctx.state::<T>()` and change things via
//! [`apply_view_action`] or `ctx.dispatch::<FetchUsersCommand>()`.

mod columns;
mod config;
mod fetch_users_compute;
mod highlight;
mod params;
mod record;
mod view;
mod view_compute;

pub use columns::{ColumnDef, ColumnKey, USER_COLUMNS};
pub use config::{BusinessConfig, ConfigError, DEFAULT_USERS_URL};
pub use fetch_users_compute::{
    FetchError, FetchStatus, FetchUsersCommand, UsersCompute, parse_users_response,
};
pub use highlight::{Segment, contains_ignore_case, highlight};
pub use params::{DEFAULT_PAGE_SIZE, PAGE_SIZE_CHOICES, ViewAction, ViewParams};
pub use record::{Address, RecordId, UserRecord};
pub use view::{
    DerivedView, SortDirection, SortKey, SortSpec, derive, filter_records, page_slice,
    sort_records, total_pages,
};
pub use view_compute::{
    DerivedViewCompute, ViewParamsState, apply_view_action, reconcile_page, register_user_view,
};
