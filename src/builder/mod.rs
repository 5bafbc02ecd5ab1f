//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders, free helper constructors, and the
//! [`state_ids!`](crate::state_ids) macro for configuring machines with
//! minimal boilerplate while keeping construction validated.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Guard, StateId, Transition};

/// Create a transition that always fires when the machine is in `from`.
///
/// # Example
///
/// ```
/// use lockstep::builder::unconditional;
/// use lockstep::state_ids;
///
/// state_ids! {
///     enum Phase {
///         Start,
///         End,
///     }
/// }
///
/// let transition = unconditional(Phase::Start, Phase::End);
/// assert!(transition.guard.unwrap().check());
/// ```
pub fn unconditional<S: StateId>(from: S, to: S) -> Transition<S> {
    Transition {
        from,
        to,
        action: None,
        guard: Some(Guard::always()),
    }
}

/// Create a transition gated by a predicate.
///
/// # Example
///
/// ```
/// use lockstep::builder::guarded;
/// use lockstep::state_ids;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// state_ids! {
///     enum Phase {
///         Start,
///         End,
///     }
/// }
///
/// let ready = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&ready);
///
/// let transition = guarded(Phase::Start, Phase::End, move || {
///     flag.load(Ordering::Relaxed)
/// });
/// assert!(!transition.guard.unwrap().check());
/// ```
pub fn guarded<S, F>(from: S, to: S, predicate: F) -> Transition<S>
where
    S: StateId,
    F: Fn() -> bool + Send + 'static,
{
    Transition {
        from,
        to,
        action: None,
        guard: Some(Guard::new(predicate)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_ids;

    state_ids! {
        enum TestId {
            Start,
            End,
        }
    }

    #[test]
    fn unconditional_always_passes() {
        let transition = unconditional(TestId::Start, TestId::End);

        assert_eq!(transition.from, TestId::Start);
        assert_eq!(transition.to, TestId::End);
        assert!(transition.guard.unwrap().check());
        assert!(transition.action.is_none());
    }

    #[test]
    fn guarded_respects_its_predicate() {
        let transition = guarded(TestId::Start, TestId::End, || false);

        assert!(!transition.guard.unwrap().check());
    }
}
