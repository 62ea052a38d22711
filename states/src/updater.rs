use std::any::{Any, TypeId, type_name};

use flume::Sender;
use log::warn;

pub(crate) type Update = (TypeId, Box<dyn Any + Send>);

/// Publishes new values for states or computes back into the owning `StateCtx`.
///
/// Cloneable and `Send`, so it can cross into network callbacks. Values are queued and only
/// applied on the UI thread by `StateCtx::sync_computes`, in the order they were sent.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>) -> Self {
        Self { send }
    }

    pub fn set<T: Any + Send>(&self, value: T) {
        let boxed: Box<dyn Any + Send> = Box::new(value);
        if self.send.send((TypeId::of::<T>(), boxed)).is_err() {
            warn!(
                "Updater: state context is gone, dropping update for {}",
                type_name::<T>()
            );
        }
    }
}
