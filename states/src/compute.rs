use std::any::{Any, TypeId, type_name};

use log::warn;

use crate::{Dep, Updater};

/// Declared inputs of a compute: `(state ids, compute ids)`.
pub type ComputeDeps = (Vec<TypeId>, Vec<TypeId>);

/// A cached, derived value.
///
/// `compute` is pure with respect to the context: it reads its inputs through [`Dep`] and
/// publishes the new value through [`Updater::set`]. The value lands in the context on the
/// next `StateCtx::sync_computes`, which also marks everything downstream dirty.
///
/// Computes run implicitly (startup, dirty propagation), so they must never perform IO.
/// Side effects belong in a [`crate::Command`].
pub trait Compute: Any {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);

    fn as_any(&self) -> &dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `Compute::assign_box` body.
pub fn assign_impl<T: Compute>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(new_compute) => *target = *new_compute,
        Err(_) => warn!(
            "assign_impl: ignored update with mismatched type for {}",
            type_name::<T>()
        ),
    }
}
