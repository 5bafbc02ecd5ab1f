//! Slot-ordered storage of state descriptors.

use crate::core::{State, StateId, StateIndex};
use crate::engine::error::ConfigError;

/// Fixed storage of exactly `StateId::COUNT` descriptors, ordered so that
/// position `i` holds the state whose index-function output is `i`.
///
/// The ordering lets the engine use index-function outputs directly as array
/// positions instead of keeping a separate identifier-to-slot map. That only
/// works when the index function is a bijection over the configured
/// identifiers, which [`from_states`](StateRegistry::from_states) validates.
pub(crate) struct StateRegistry<S: StateId> {
    slots: Box<[State<S>]>,
}

impl<S: StateId> std::fmt::Debug for StateRegistry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateRegistry")
            .field(
                "slots",
                &self.slots.iter().map(|s| s.id).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<S: StateId> StateRegistry<S> {
    /// Place the caller-supplied states into their slots.
    ///
    /// Rejects lists of the wrong length, slots outside `0..COUNT`, and two
    /// states sharing a slot. Passing all three checks with a list of exactly
    /// `COUNT` states means every slot is filled.
    pub(crate) fn from_states<I>(states: Vec<State<S>>, indexer: &I) -> Result<Self, ConfigError>
    where
        I: StateIndex<S>,
    {
        let count = S::COUNT;
        if states.len() != count {
            return Err(ConfigError::StateCount {
                expected: count,
                found: states.len(),
            });
        }

        let mut slots: Vec<Option<State<S>>> = (0..count).map(|_| None).collect();
        for state in states {
            let slot = indexer.slot_of(state.id);
            if slot >= count {
                return Err(ConfigError::SlotOutOfRange {
                    state: state.id.name(),
                    slot,
                    count,
                });
            }
            if let Some(occupant) = &slots[slot] {
                return Err(ConfigError::SlotCollision {
                    first: occupant.id.name(),
                    second: state.id.name(),
                    slot,
                });
            }
            slots[slot] = Some(state);
        }

        let slots: Box<[State<S>]> = slots.into_iter().flatten().collect();
        debug_assert_eq!(slots.len(), count);

        Ok(StateRegistry { slots })
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn slot(&self, index: usize) -> &State<S> {
        &self.slots[index]
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut State<S> {
        &mut self.slots[index]
    }

    /// Resolve an identifier to its slot, checking that the slot is in range
    /// and actually holds that identifier.
    pub(crate) fn resolve<I>(&self, id: S, indexer: &I) -> Option<usize>
    where
        I: StateIndex<S>,
    {
        let slot = indexer.slot_of(id);
        (slot < self.slots.len() && self.slots[slot].id == id).then_some(slot)
    }
}
