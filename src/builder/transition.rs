//! Builder for constructing state transitions.

use crate::builder::error::BuildError;
use crate::core::{Guard, Hook, StateId, Transition};

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: StateId> {
    from: Option<S>,
    to: Option<S>,
    guard: Option<Guard>,
    action: Option<Hook>,
}

impl<S: StateId> TransitionBuilder<S> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            guard: None,
            action: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Add a pre-built guard (optional; an unguarded transition never fires).
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Add an on-transition action using a closure (optional).
    pub fn act<F>(mut self, action: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.action = Some(Hook::new(action));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            from,
            to,
            action: self.action,
            guard: self.guard,
        })
    }
}

impl<S: StateId> Default for TransitionBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_ids;

    state_ids! {
        enum TestId {
            Idle,
            Running,
        }
    }

    #[test]
    fn builder_validates_missing_from() {
        let result = TransitionBuilder::<TestId>::new().to(TestId::Running).build();

        assert!(matches!(result, Err(BuildError::MissingFromState)));
    }

    #[test]
    fn builder_validates_missing_to() {
        let result = TransitionBuilder::new().from(TestId::Idle).build();

        assert!(matches!(result, Err(BuildError::MissingToState)));
    }

    #[test]
    fn guard_and_action_are_optional() {
        let transition = TransitionBuilder::new()
            .from(TestId::Idle)
            .to(TestId::Running)
            .build()
            .unwrap();

        assert!(transition.guard.is_none());
        assert!(transition.action.is_none());
    }

    #[test]
    fn when_attaches_a_guard() {
        let transition = TransitionBuilder::new()
            .from(TestId::Idle)
            .to(TestId::Running)
            .when(|| true)
            .build()
            .unwrap();

        assert!(transition.guard.unwrap().check());
    }

    #[test]
    fn fluent_api_builds_transition() {
        let transition = TransitionBuilder::new()
            .from(TestId::Idle)
            .to(TestId::Running)
            .guard(Guard::always())
            .act(|| {})
            .build()
            .unwrap();

        assert_eq!(transition.from, TestId::Idle);
        assert_eq!(transition.to, TestId::Running);
        assert!(transition.action.is_some());
    }
}
