//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{ModuloIndex, State, StateId, StateIndex, Transition, TransitionLog};
use crate::engine::StateMachine;

/// Builder for constructing state machines with a fluent API.
///
/// The initial state is optional here: when omitted, the machine starts in
/// the state occupying slot 0 (the identifier's zero value under the default
/// index function).
///
/// # Example
///
/// ```rust
/// use lockstep::builder::{unconditional, StateMachineBuilder};
/// use lockstep::core::State;
/// use lockstep::state_ids;
///
/// state_ids! {
///     enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// let machine = StateMachineBuilder::new()
///     .state(State::new(Light::Red))
///     .state(State::new(Light::Green))
///     .add_transition(unconditional(Light::Red, Light::Green))
///     .build()
///     .unwrap();
///
/// assert!(machine.is_in_state(Light::Red));
/// ```
pub struct StateMachineBuilder<S: StateId, I = ModuloIndex> {
    states: Vec<State<S>>,
    transitions: Vec<Transition<S>>,
    initial: Option<S>,
    indexer: I,
    log_capacity: usize,
}

impl<S: StateId> StateMachineBuilder<S, ModuloIndex> {
    /// Create a new builder using the default modulo index function.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            transitions: Vec::new(),
            initial: None,
            indexer: ModuloIndex,
            log_capacity: TransitionLog::<S>::DEFAULT_CAPACITY,
        }
    }
}

impl<S: StateId, I> StateMachineBuilder<S, I> {
    /// Add a state descriptor. Exactly `StateId::COUNT` are required by
    /// `build`.
    pub fn state(mut self, state: State<S>) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple state descriptors at once.
    pub fn states(mut self, states: impl IntoIterator<Item = State<S>>) -> Self {
        self.states.extend(states);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition<S>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Set the initial state (optional; defaults to the state in slot 0).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Replace the index function.
    pub fn indexer<J>(self, indexer: J) -> StateMachineBuilder<S, J>
    where
        J: StateIndex<S>,
    {
        StateMachineBuilder {
            states: self.states,
            transitions: self.transitions,
            initial: self.initial,
            indexer,
            log_capacity: self.log_capacity,
        }
    }

    /// Set the transition log capacity (zero disables logging).
    pub fn log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }
}

impl<S, I> StateMachineBuilder<S, I>
where
    S: StateId,
    I: StateIndex<S>,
{
    /// Build the state machine.
    ///
    /// Runs the engine's configuration validation; any
    /// [`ConfigError`](crate::engine::ConfigError) surfaces as
    /// [`BuildError::Invalid`].
    pub fn build(self) -> Result<StateMachine<S, I>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let machine = StateMachine::assemble(
            self.states,
            self.transitions,
            self.initial,
            self.indexer,
            self.log_capacity,
        )?;

        Ok(machine)
    }
}

impl<S: StateId> Default for StateMachineBuilder<S, ModuloIndex> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::unconditional;
    use crate::engine::ConfigError;
    use crate::state_ids;

    state_ids! {
        enum TestId {
            Idle,
            Running,
            Stopped,
        }
    }

    fn all_states() -> Vec<State<TestId>> {
        vec![
            State::new(TestId::Idle),
            State::new(TestId::Running),
            State::new(TestId::Stopped),
        ]
    }

    #[test]
    fn builder_requires_states() {
        let result = StateMachineBuilder::<TestId>::new().build();

        assert!(matches!(result, Err(BuildError::NoStates)));
    }

    #[test]
    fn incomplete_state_list_surfaces_config_error() {
        let result = StateMachineBuilder::new()
            .state(State::new(TestId::Idle))
            .build();

        assert!(matches!(
            result,
            Err(BuildError::Invalid(ConfigError::StateCount {
                expected: 3,
                found: 1
            }))
        ));
    }

    #[test]
    fn initial_defaults_to_slot_zero() {
        let machine = StateMachineBuilder::new().states(all_states()).build().unwrap();

        assert!(machine.is_in_state(TestId::Idle));
    }

    #[test]
    fn explicit_initial_is_honored() {
        let machine = StateMachineBuilder::new()
            .states(all_states())
            .initial(TestId::Stopped)
            .build()
            .unwrap();

        assert!(machine.is_in_state(TestId::Stopped));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = StateMachineBuilder::new()
            .states(all_states())
            .add_transition(unconditional(TestId::Idle, TestId::Running))
            .initial(TestId::Idle)
            .build();

        assert!(machine.is_ok());
        let mut machine = machine.unwrap();
        machine.step();
        assert!(machine.is_in_state(TestId::Running));
    }

    #[test]
    fn transition_builder_errors_propagate() {
        let result = StateMachineBuilder::new()
            .states(all_states())
            .transition(TransitionBuilder::new().from(TestId::Idle));

        assert!(matches!(result, Err(BuildError::MissingToState)));
    }

    #[test]
    fn custom_indexer_is_used() {
        let reversed = |id: TestId| TestId::COUNT - 1 - id as usize;

        let machine = StateMachineBuilder::new()
            .states(all_states())
            .indexer(reversed)
            .build()
            .unwrap();

        // Slot 0 now holds Stopped, so it becomes the default initial state.
        assert!(machine.is_in_state(TestId::Stopped));
    }

    #[test]
    fn log_capacity_is_applied() {
        let machine = StateMachineBuilder::new()
            .states(all_states())
            .log_capacity(4)
            .build()
            .unwrap();

        assert_eq!(machine.log().capacity(), 4);
    }
}
