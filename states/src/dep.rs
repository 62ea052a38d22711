use std::{
    any::{TypeId, type_name},
    collections::BTreeMap,
};

use crate::{Compute, Error, State};

pub(crate) type StateStore = BTreeMap<TypeId, Box<dyn State>>;
pub(crate) type ComputeStore = BTreeMap<TypeId, Box<dyn Compute>>;

/// Read-only view over the context handed to computes and commands.
#[derive(Clone, Copy)]
pub struct Dep<'a> {
    states: &'a StateStore,
    computes: &'a ComputeStore,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(states: &'a StateStore, computes: &'a ComputeStore) -> Self {
        Self { states, computes }
    }

    pub fn try_state<T: State>(&self) -> Result<&'a T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found::<T>("Dep::try_state"))
    }

    /// # Panics
    /// Panics if `T` was never added to the context.
    pub fn get_state_ref<T: State>(&self) -> &'a T {
        self.try_state::<T>()
            .unwrap_or_else(|err| panic!("{err}, did you forget `add_state::<{}>`?", type_name::<T>()))
    }

    pub fn try_compute<T: Compute>(&self) -> Result<&'a T, Error> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::compute_not_found::<T>("Dep::try_compute"))
    }

    /// # Panics
    /// Panics if `T` was never recorded in the context.
    pub fn get_compute_ref<T: Compute>(&self) -> &'a T {
        self.try_compute::<T>().unwrap_or_else(|err| {
            panic!("{err}, did you forget `record_compute::<{}>`?", type_name::<T>())
        })
    }
}
