use std::any::TypeId;

use flume::{Receiver, Sender};

use crate::{
    Graph, TopologyError, Updater,
    updater::Update,
};

/// Channel plumbing and dependency bookkeeping behind a `StateCtx`.
#[derive(Debug)]
pub struct StateRuntime {
    send: Sender<Update>,
    recv: Receiver<Update>,

    graph: Graph<TypeId>,
}

impl Default for StateRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRuntime {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            send,
            recv,
            graph: Graph::new(),
        }
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    pub(crate) fn drain(&self) -> impl Iterator<Item = Update> + '_ {
        self.recv.try_iter()
    }

    pub fn record(&mut self, compute: TypeId, states: &[TypeId], computes: &[TypeId]) {
        self.graph.add_node(compute);
        for dep in states.iter().chain(computes) {
            self.graph.route_to(*dep, compute);
        }
    }

    /// Every node in dependency order, or the fault that prevents one.
    pub fn verify_deps(&self) -> Result<Vec<TypeId>, TopologyError<TypeId>> {
        self.graph.topology_sort()
    }

    pub fn downstream(&mut self, id: TypeId) -> Vec<TypeId> {
        self.graph.downstream(id).copied().collect()
    }
}
