use std::any::Any;

use crate::{Dep, Updater};

/// A manual-only side effect.
///
/// Commands never run implicitly. They are queued with `StateCtx::dispatch` and executed by
/// `StateCtx::flush_commands`. Results flow back into the context through the `Updater`,
/// which is `Send` and may be moved into a background callback.
pub trait Command: Any {
    fn run(&self, deps: Dep<'_>, updater: Updater);
}
