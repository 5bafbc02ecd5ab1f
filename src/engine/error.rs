//! Configuration errors raised when a machine is constructed.

use thiserror::Error;

/// Errors detected while validating a machine's configuration.
///
/// All of these are raised at construction time. A machine that constructs
/// successfully has a bijective identifier-to-slot mapping, so `step`,
/// `is_in_state`, and `reset` never fail afterwards.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The state list's length does not equal `StateId::COUNT`.
    #[error("expected exactly {expected} states, got {found}")]
    StateCount { expected: usize, found: usize },

    /// A state's slot falls outside `0..COUNT`.
    #[error("state '{state}' maps to slot {slot}, outside 0..{count}")]
    SlotOutOfRange {
        state: &'static str,
        slot: usize,
        count: usize,
    },

    /// Two states map to the same slot; the index function is not injective
    /// over the configured identifiers.
    #[error("states '{first}' and '{second}' both map to slot {slot}")]
    SlotCollision {
        first: &'static str,
        second: &'static str,
        slot: usize,
    },

    /// A transition names an endpoint that is not a configured state.
    #[error("transition endpoint '{state}' is not a configured state")]
    UnknownEndpoint { state: &'static str },

    /// The initial state is not a configured state.
    #[error("initial state '{state}' is not a configured state")]
    UnknownInitial { state: &'static str },
}
