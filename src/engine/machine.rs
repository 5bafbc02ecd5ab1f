//! The machine engine: per-tick evaluation over fixed storage.

use crate::core::{
    ModuloIndex, State, StateId, StateIndex, Transition, TransitionLog, TransitionRecord,
};
use crate::engine::error::ConfigError;
use crate::engine::registry::StateRegistry;
use crate::engine::table::TransitionTable;

/// A table-driven state machine with fixed, predictable per-tick cost.
///
/// The machine owns a registry of `StateId::COUNT` state descriptors and a
/// dense transition table. All storage is sized at construction and never
/// grows; [`step`](Self::step), [`is_in_state`](Self::is_in_state), and
/// [`reset`](Self::reset) neither allocate nor fail.
///
/// Construction fires the initial state's entry hook exactly once. Each
/// `step` call then executes one tick: the current state's during hook, a
/// single ascending scan of candidate destinations, and at most one
/// transition.
///
/// The machine is single-threaded by construction: every operation takes the
/// caller's thread to completion, and exclusive borrows make concurrent
/// `step` calls or a hook re-entering its own machine unrepresentable in
/// safe code. Hooks and guards are expected to be cheap and non-blocking.
///
/// # Example
///
/// ```rust
/// use lockstep::builder::guarded;
/// use lockstep::core::State;
/// use lockstep::engine::StateMachine;
/// use lockstep::state_ids;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// state_ids! {
///     enum Motor {
///         Idle,
///         Running,
///     }
/// }
///
/// let start = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&start);
///
/// let mut machine = StateMachine::new(
///     vec![State::new(Motor::Idle), State::new(Motor::Running)],
///     vec![guarded(Motor::Idle, Motor::Running, move || {
///         flag.load(Ordering::Relaxed)
///     })],
///     Motor::Idle,
/// )
/// .unwrap();
///
/// machine.step();
/// assert!(machine.is_in_state(Motor::Idle));
///
/// start.store(true, Ordering::Relaxed);
/// machine.step();
/// assert!(machine.is_in_state(Motor::Running));
/// ```
pub struct StateMachine<S: StateId, I = ModuloIndex> {
    registry: StateRegistry<S>,
    table: TransitionTable,
    indexer: I,
    current: usize,
    initial: usize,
    ticks: u64,
    log: TransitionLog<S>,
}

impl<S: StateId, I> std::fmt::Debug for StateMachine<S, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("registry", &self.registry)
            .field("table", &self.table)
            .field("current", &self.current)
            .field("initial", &self.initial)
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}

impl<S> StateMachine<S, ModuloIndex>
where
    S: StateId + Into<usize>,
{
    /// Construct a machine using the default modulo index function.
    ///
    /// Validates the configuration (see [`ConfigError`]) and fires the
    /// initial state's entry hook exactly once.
    pub fn new(
        states: Vec<State<S>>,
        transitions: Vec<Transition<S>>,
        initial: S,
    ) -> Result<Self, ConfigError> {
        Self::with_indexer(states, transitions, initial, ModuloIndex)
    }
}

impl<S, I> StateMachine<S, I>
where
    S: StateId,
    I: StateIndex<S>,
{
    /// Construct a machine with a caller-supplied index function.
    ///
    /// The function must map the configured identifiers bijectively onto
    /// `0..COUNT`; anything else is rejected with a [`ConfigError`].
    pub fn with_indexer(
        states: Vec<State<S>>,
        transitions: Vec<Transition<S>>,
        initial: S,
        indexer: I,
    ) -> Result<Self, ConfigError> {
        Self::assemble(
            states,
            transitions,
            Some(initial),
            indexer,
            TransitionLog::<S>::DEFAULT_CAPACITY,
        )
    }

    /// Shared construction path for the public constructors and the builder.
    /// `initial = None` selects the state occupying slot 0. The state list
    /// must be non-empty when `initial` is `None`.
    pub(crate) fn assemble(
        states: Vec<State<S>>,
        transitions: Vec<Transition<S>>,
        initial: Option<S>,
        indexer: I,
        log_capacity: usize,
    ) -> Result<Self, ConfigError> {
        let registry = StateRegistry::from_states(states, &indexer)?;
        let table = TransitionTable::from_transitions(transitions, &registry, &indexer)?;

        let initial_id = initial.unwrap_or_else(|| registry.slot(0).id);
        let initial_slot = registry
            .resolve(initial_id, &indexer)
            .ok_or(ConfigError::UnknownInitial {
                state: initial_id.name(),
            })?;

        let mut machine = StateMachine {
            registry,
            table,
            indexer,
            current: initial_slot,
            initial: initial_slot,
            ticks: 0,
            log: TransitionLog::with_capacity(log_capacity),
        };

        tracing::debug!(
            states = machine.registry.len(),
            initial = initial_id.name(),
            "state machine configured"
        );

        // Entry of the initial state models power-on init: it fires here and
        // only here, never again on reset.
        if let Some(hook) = machine.registry.slot_mut(initial_slot).on_entry.as_mut() {
            hook.call();
        }

        Ok(machine)
    }

    /// Execute one tick.
    ///
    /// Fires the current state's during hook, then scans candidate
    /// destination slots in ascending order (skipping the current slot) and
    /// takes the first transition whose guard is present and true: current
    /// state's exit hook, the transition's action, destination's entry hook,
    /// then the slot update. At most one transition fires per tick; when
    /// several guards are simultaneously true, the lowest destination slot
    /// wins. If no guard passes the machine stays put.
    ///
    /// Worst-case cost is one during hook plus `COUNT - 1` guard
    /// evaluations, linear in the state count.
    pub fn step(&mut self) {
        let from = self.current;
        if let Some(hook) = self.registry.slot_mut(from).on_during.as_mut() {
            hook.call();
        }

        let mut next = None;
        for to in 0..self.registry.len() {
            if to == from {
                continue;
            }
            if self.table.guard_passes(from, to) {
                next = Some(to);
                break;
            }
        }

        if let Some(to) = next {
            if let Some(hook) = self.registry.slot_mut(from).on_exit.as_mut() {
                hook.call();
            }
            self.table.fire_action(from, to);
            if let Some(hook) = self.registry.slot_mut(to).on_entry.as_mut() {
                hook.call();
            }
            self.current = to;

            let record = TransitionRecord {
                from: self.registry.slot(from).id,
                to: self.registry.slot(to).id,
                tick: self.ticks,
            };
            self.log.record(record);
            tracing::debug!(
                from = record.from.name(),
                to = record.to.name(),
                tick = self.ticks,
                "transition taken"
            );
        } else {
            tracing::trace!(
                state = self.registry.slot(from).id.name(),
                tick = self.ticks,
                "no guard satisfied"
            );
        }

        self.ticks += 1;
    }

    /// Whether the identifier's slot is the current slot.
    ///
    /// Pure query; the identifier is mapped through the machine's index
    /// function, exactly like at construction.
    pub fn is_in_state(&self, id: S) -> bool {
        self.indexer.slot_of(id) == self.current
    }

    /// Return to the initial state.
    ///
    /// Does **not** re-fire the initial state's entry hook: entry at
    /// construction models power-on init, and reset deliberately skips it.
    /// Calling `reset` while already in the initial state is a no-op.
    pub fn reset(&mut self) {
        self.current = self.initial;
        tracing::debug!(
            state = self.registry.slot(self.initial).id.name(),
            "machine reset"
        );
    }

    /// Identifier of the current state.
    pub fn current_state(&self) -> S {
        self.registry.slot(self.current).id
    }

    /// Number of completed [`step`](Self::step) calls.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The bounded log of recently taken transitions.
    pub fn log(&self) -> &TransitionLog<S> {
        &self.log
    }

    /// Number of state slots (`StateId::COUNT`).
    pub fn state_count(&self) -> usize {
        self.registry.len()
    }
}
