use std::{
    any::{TypeId, type_name},
    collections::{BTreeMap, VecDeque},
    fmt,
};

use log::{debug, error, warn};

use crate::{
    Command, Compute, Dep, Error, State, StateRuntime, StateSyncStatus, TopologyError, Updater,
    dep::{ComputeStore, StateStore},
};

/// Upper bound on sync/run rounds in [`StateCtx::settle`].
const SETTLE_ROUNDS: usize = 16;

/// Owner of every state, compute and command of the application.
///
/// The frame loop is:
/// 1. `sync_computes()` applies values published through `Updater`s
/// 2. render, reading `state()` / `cached()` and mutating via `state_mut()`
/// 3. `flush_commands()` runs commands queued by `dispatch()`
/// 4. `run_computed()` recomputes whatever became dirty
pub struct StateCtx {
    runtime: StateRuntime,

    states: StateStore,
    computes: ComputeStore,
    status: BTreeMap<TypeId, StateSyncStatus>,
    // computes in dependency order
    order: Vec<TypeId>,

    commands: BTreeMap<TypeId, Box<dyn Command>>,
    queued: VecDeque<TypeId>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("status", &self.status)
            .field("commands", &self.commands.len())
            .field("queued", &self.queued.len())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        Self {
            runtime: StateRuntime::new(),
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            status: BTreeMap::new(),
            order: Vec::new(),
            commands: BTreeMap::new(),
            queued: VecDeque::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        if self.states.insert(id, Box::new(state)).is_some() {
            debug!("add_state: replaced {}", type_name::<T>());
        }
        self.mark_downstream_dirty(id);
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        let (states, computes) = compute.deps();
        self.runtime.record(id, &states, &computes);
        self.computes.insert(id, Box::new(compute));
        self.status.insert(id, StateSyncStatus::BeforeInit);

        if let Err(err) = self.rebuild_order() {
            error!(
                "record_compute: {} breaks the dependency graph and will not run: {err}",
                type_name::<T>()
            );
        }
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    fn rebuild_order(&mut self) -> Result<(), TopologyError<TypeId>> {
        let sorted = self.runtime.verify_deps()?;
        self.order = sorted
            .into_iter()
            .filter(|id| self.computes.contains_key(id))
            .collect();
        Ok(())
    }

    pub fn verify_deps(&self) -> Result<(), TopologyError<TypeId>> {
        self.runtime.verify_deps().map(|_| ())
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        Dep::new(&self.states, &self.computes).try_state::<T>()
    }

    /// # Panics
    /// Panics if `T` was never added.
    pub fn state<T: State>(&self) -> &T {
        Dep::new(&self.states, &self.computes).get_state_ref::<T>()
    }

    /// Mutable access to a state. Everything downstream of it is marked dirty.
    ///
    /// # Panics
    /// Panics if `T` was never added.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        let id = TypeId::of::<T>();
        self.mark_downstream_dirty(id);
        self.states
            .get_mut(&id)
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("State not found: {}", type_name::<T>()))
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.try_cached::<T>().ok()
    }

    pub fn try_cached<T: Compute>(&self) -> Result<&T, Error> {
        Dep::new(&self.states, &self.computes).try_compute::<T>()
    }

    pub fn status<T: Compute>(&self) -> Option<StateSyncStatus> {
        self.status.get(&TypeId::of::<T>()).copied()
    }

    pub fn is_dirty(&self) -> bool {
        self.status.values().any(|status| status.needs_run())
    }

    pub fn updater(&self) -> Updater {
        self.runtime.updater()
    }

    /// Queue a recorded command; it runs on the next `flush_commands`.
    pub fn dispatch<T: Command>(&mut self) {
        let id = TypeId::of::<T>();
        if self.commands.contains_key(&id) {
            debug!("dispatch: queued {}", type_name::<T>());
            self.queued.push_back(id);
        } else {
            warn!("dispatch: {} was never recorded", type_name::<T>());
        }
    }

    pub fn flush_commands(&mut self) -> usize {
        let mut ran = 0;
        while let Some(id) = self.queued.pop_front() {
            if let Some(command) = self.commands.get(&id) {
                command.run(Dep::new(&self.states, &self.computes), self.runtime.updater());
                ran += 1;
            }
        }
        ran
    }

    /// Apply every value published through an `Updater` since the last call.
    ///
    /// Returns how many updates landed.
    pub fn sync_computes(&mut self) -> usize {
        let updates: Vec<_> = self.runtime.drain().collect();
        let mut applied = 0;

        for (id, value) in updates {
            if let Some(compute) = self.computes.get_mut(&id) {
                compute.assign_box(value);
            } else if let Some(state) = self.states.get_mut(&id) {
                state.assign_box(value);
            } else {
                warn!("sync_computes: dropping update for unregistered type {id:?}");
                continue;
            }
            applied += 1;
            self.mark_downstream_dirty(id);
        }

        applied
    }

    /// Run every dirty compute once, inputs before dependents.
    pub fn run_computed(&mut self) -> usize {
        let mut ran = 0;
        for id in &self.order {
            if !self.status.get(id).is_some_and(|status| status.needs_run()) {
                continue;
            }
            if let Some(compute) = self.computes.get(id) {
                compute.compute(Dep::new(&self.states, &self.computes), self.runtime.updater());
                ran += 1;
            }
            self.status.insert(*id, StateSyncStatus::Clean);
        }
        if ran > 0 {
            debug!("run_computed: ran {ran} compute(s)");
        }
        ran
    }

    /// Alternate commands, computes and syncs until nothing changes.
    ///
    /// Only values that are already available are waited for; a command whose result arrives
    /// later from another thread is picked up by a subsequent `sync_computes`.
    pub fn settle(&mut self) {
        for _ in 0..SETTLE_ROUNDS {
            let ran = self.flush_commands() + self.run_computed();
            let applied = self.sync_computes();
            if ran == 0 && applied == 0 && !self.is_dirty() {
                return;
            }
        }
        warn!("settle: context still changing after {SETTLE_ROUNDS} rounds");
    }

    fn mark_downstream_dirty(&mut self, id: TypeId) {
        for dependent in self.runtime.downstream(id) {
            if let Some(status) = self.status.get_mut(&dependent) {
                *status = StateSyncStatus::Dirty;
            }
        }
    }
}
