//! Dense transition table.

use crate::core::{Guard, Hook, StateId, StateIndex, Transition};
use crate::engine::error::ConfigError;
use crate::engine::registry::StateRegistry;

/// One cell of the table: the action and guard for a `(from, to)` pair.
///
/// The default cell is empty. An empty guard means the edge never fires, so
/// unmentioned state pairs are simply dead cells.
#[derive(Default)]
struct Cell {
    action: Option<Hook>,
    guard: Option<Guard>,
}

/// Dense `COUNT x COUNT` matrix of transition cells, row-major, indexed by
/// `(from_slot, to_slot)`.
///
/// Dense storage keeps lookup at `O(1)` per candidate and makes the per-tick
/// scan cost depend only on `COUNT`, not on how many transitions were
/// configured.
pub(crate) struct TransitionTable {
    width: usize,
    cells: Box<[Cell]>,
}

impl std::fmt::Debug for TransitionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionTable")
            .field("width", &self.width)
            .field("cells", &self.cells.len())
            .finish()
    }
}

impl TransitionTable {
    /// Resolve each transition's endpoints through the registry and store it
    /// in its cell. Later list entries overwrite earlier ones targeting the
    /// same cell.
    pub(crate) fn from_transitions<S, I>(
        transitions: Vec<Transition<S>>,
        registry: &StateRegistry<S>,
        indexer: &I,
    ) -> Result<Self, ConfigError>
    where
        S: StateId,
        I: StateIndex<S>,
    {
        let width = registry.len();
        let mut cells: Vec<Cell> = (0..width * width).map(|_| Cell::default()).collect();

        for transition in transitions {
            let from = registry
                .resolve(transition.from, indexer)
                .ok_or(ConfigError::UnknownEndpoint {
                    state: transition.from.name(),
                })?;
            let to = registry
                .resolve(transition.to, indexer)
                .ok_or(ConfigError::UnknownEndpoint {
                    state: transition.to.name(),
                })?;
            cells[from * width + to] = Cell {
                action: transition.action,
                guard: transition.guard,
            };
        }

        Ok(TransitionTable {
            width,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Whether the cell's guard is present and currently true.
    pub(crate) fn guard_passes(&self, from: usize, to: usize) -> bool {
        self.cells[from * self.width + to]
            .guard
            .as_ref()
            .is_some_and(|guard| guard.check())
    }

    /// Fire the cell's action, if any.
    pub(crate) fn fire_action(&mut self, from: usize, to: usize) {
        if let Some(action) = self.cells[from * self.width + to].action.as_mut() {
            action.call();
        }
    }
}
