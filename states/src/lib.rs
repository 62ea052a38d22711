//! Reactive state context for the user directory viewer.
//!
//! - [`State`]: plain values owned by the context (configuration, UI parameters)
//! - [`Compute`]: cached derived values with declared inputs, recomputed when an input changes
//! - [`Command`]: manual-only side effects (network IO) that report back through an [`Updater`]
//!
//! Everything is applied on the thread that owns the [`StateCtx`]; background work only ever
//! talks to it through the `Updater` channel.

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod graph;
mod runtime;
mod state;
mod state_sync_status;
mod updater;

pub use command::Command;
pub use compute::{Compute, ComputeDeps, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use graph::{DepRoute, Graph, TopologyError};
pub use runtime::StateRuntime;
pub use state::{State, state_assign_impl};
pub use state_sync_status::StateSyncStatus;
pub use updater::Updater;
