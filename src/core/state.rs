//! State identifiers and state descriptors.
//!
//! A state machine is configured from exactly `StateId::COUNT` descriptors,
//! each pairing an identifier with optional entry/during/exit hooks.

use super::hook::Hook;
use std::fmt::Debug;

/// Identifier for one state among a fixed set.
///
/// Identifiers are opaque to the engine: it never inspects them beyond
/// equality and the index function supplied at construction. The set must be
/// enumerable into a known size (`COUNT`), the way a fieldless enum is.
///
/// The [`state_ids!`](crate::state_ids) macro derives this trait (plus the
/// `From<Id> for usize` conversion the default index function relies on) for
/// plain enums.
///
/// # Example
///
/// ```rust
/// use lockstep::core::StateId;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum Valve {
///     Closed,
///     Open,
/// }
///
/// impl StateId for Valve {
///     const COUNT: usize = 2;
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///         }
///     }
/// }
///
/// assert_eq!(Valve::Open.name(), "Open");
/// ```
pub trait StateId: Copy + Eq + Debug + Send + 'static {
    /// Number of distinct identifiers, and therefore the machine's slot
    /// count. Storage is sized to `COUNT` once at construction.
    const COUNT: usize;

    /// The identifier's name, for diagnostics and logging.
    fn name(&self) -> &'static str;
}

/// One state of the machine: an identifier plus optional hooks.
///
/// `on_entry` fires when the machine enters the state (including exactly once
/// at construction for the initial state), `on_during` fires on every tick
/// spent in the state, and `on_exit` fires when a transition leaves it. Any
/// absent hook is a no-op.
///
/// # Example
///
/// ```rust
/// use lockstep::core::{State, StateId};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum Valve {
///     Closed,
///     Open,
/// }
///
/// impl StateId for Valve {
///     const COUNT: usize = 2;
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///         }
///     }
/// }
///
/// let open = State::new(Valve::Open)
///     .entry(|| println!("valve opened"))
///     .exit(|| println!("valve closing"));
/// ```
pub struct State<S: StateId> {
    /// The caller-defined identifier.
    pub id: S,
    /// Fired when the machine enters this state.
    pub on_entry: Option<Hook>,
    /// Fired on every tick spent in this state.
    pub on_during: Option<Hook>,
    /// Fired when a transition leaves this state.
    pub on_exit: Option<Hook>,
}

impl<S: StateId> State<S> {
    /// A state with no hooks.
    pub fn new(id: S) -> Self {
        State {
            id,
            on_entry: None,
            on_during: None,
            on_exit: None,
        }
    }

    /// Attach an entry hook.
    pub fn entry<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_entry = Some(Hook::new(hook));
        self
    }

    /// Attach a during hook.
    pub fn during<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_during = Some(Hook::new(hook));
        self
    }

    /// Attach an exit hook.
    pub fn exit<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_exit = Some(Hook::new(hook));
        self
    }
}
