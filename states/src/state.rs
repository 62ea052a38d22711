use std::any::{Any, type_name};

use log::warn;

/// A value stored in [`crate::StateCtx`] and read by computes and commands.
///
/// States are mutated from the UI thread (`StateCtx::state_mut` / `StateCtx::update`) or
/// replaced wholesale through an [`crate::Updater`].
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Replace `self` with a value published through an `Updater`.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `State::assign_box` body: downcast and overwrite, ignoring foreign types.
pub fn state_assign_impl<T: State>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(new_state) => *target = *new_state,
        Err(_) => warn!(
            "state_assign_impl: ignored update with mismatched type for {}",
            type_name::<T>()
        ),
    }
}
