//! Transition descriptors.

use super::hook::{Guard, Hook};
use super::state::StateId;

/// One directed edge of the machine: `from` → `to`, with an optional action
/// fired when the transition is taken and an optional guard gating it.
///
/// A transition occupies exactly one cell of the machine's dense table. When
/// the caller supplies several transitions for the same `(from, to)` pair,
/// the last one in list order wins. A transition without a guard never fires
/// on its own; see [`Guard::always`] for an unconditional edge.
///
/// # Example
///
/// ```rust
/// use lockstep::core::{Guard, Transition};
/// use lockstep::state_ids;
///
/// state_ids! {
///     enum Door {
///         Closed,
///         Open,
///     }
/// }
///
/// let open = Transition {
///     from: Door::Closed,
///     to: Door::Open,
///     action: None,
///     guard: Some(Guard::always()),
/// };
/// ```
pub struct Transition<S: StateId> {
    /// State the edge leaves.
    pub from: S,
    /// State the edge enters.
    pub to: S,
    /// Fired when the transition is taken, between the source's exit hook and
    /// the destination's entry hook.
    pub action: Option<Hook>,
    /// Evaluated on each tick spent in `from`; absent means never fire.
    pub guard: Option<Guard>,
}
