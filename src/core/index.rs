//! The index function: mapping state identifiers to dense slots.
//!
//! The engine stores states and transitions in arrays sized to
//! `StateId::COUNT` and addresses them by the output of an index function.
//! Over the set of configured identifiers the function must be deterministic
//! and bijective onto `0..COUNT`; construction rejects configurations that
//! violate this (see [`ConfigError`](crate::engine::ConfigError)).

use super::state::StateId;

/// Strategy for mapping a state identifier to a dense array slot.
///
/// Any closure of shape `Fn(S) -> usize` satisfies this trait through a
/// blanket impl, so an unsuitable strategy is rejected when the machine is
/// type-checked rather than at runtime. Bijectivity over the configured
/// identifiers cannot be expressed in the type system and is validated at
/// construction instead.
///
/// # Example
///
/// ```rust
/// use lockstep::core::{StateId, StateIndex};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum Gear {
///     Reverse,
///     Neutral,
///     Drive,
/// }
///
/// impl StateId for Gear {
///     const COUNT: usize = 3;
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Reverse => "Reverse",
///             Self::Neutral => "Neutral",
///             Self::Drive => "Drive",
///         }
///     }
/// }
///
/// let by_match = |gear: Gear| -> usize {
///     match gear {
///         Gear::Reverse => 0,
///         Gear::Neutral => 1,
///         Gear::Drive => 2,
///     }
/// };
///
/// assert_eq!(by_match.slot_of(Gear::Drive), 2);
/// ```
pub trait StateIndex<S: StateId> {
    /// Map an identifier to its slot.
    fn slot_of(&self, id: S) -> usize;
}

impl<S, F> StateIndex<S> for F
where
    S: StateId,
    F: Fn(S) -> usize,
{
    fn slot_of(&self, id: S) -> usize {
        self(id)
    }
}

/// Default index function: the identifier's integral value modulo `COUNT`.
///
/// Bijective exactly when the identifiers convert to consecutive integers
/// `0..COUNT`, which is what a plain fieldless enum (and the
/// [`state_ids!`](crate::state_ids) macro) produces.
///
/// # Example
///
/// ```rust
/// use lockstep::core::{ModuloIndex, StateId, StateIndex};
/// use lockstep::state_ids;
///
/// state_ids! {
///     enum Phase {
///         Warmup,
///         Steady,
///         Cooldown,
///     }
/// }
///
/// let index = ModuloIndex;
/// assert_eq!(index.slot_of(Phase::Warmup), 0);
/// assert_eq!(index.slot_of(Phase::Cooldown), 2);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ModuloIndex;

impl<S> StateIndex<S> for ModuloIndex
where
    S: StateId + Into<usize>,
{
    fn slot_of(&self, id: S) -> usize {
        id.into() % S::COUNT
    }
}
