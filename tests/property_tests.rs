//! Property-based tests for the engine.
//!
//! These tests use proptest to verify the engine's load-bearing policies
//! (slot mapping, transition precedence, bounded per-tick cost) across many
//! randomly generated configurations.

use lockstep::builder::unconditional;
use lockstep::core::{Guard, ModuloIndex, State, StateId, StateIndex, Transition};
use lockstep::{state_ids, StateMachine};
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

state_ids! {
    enum Quad {
        A,
        B,
        C,
        D,
    }
}

const ALL: [Quad; 4] = [Quad::A, Quad::B, Quad::C, Quad::D];

fn plain_states() -> Vec<State<Quad>> {
    ALL.iter().copied().map(State::new).collect()
}

prop_compose! {
    fn arbitrary_id()(variant in 0..4u8) -> Quad {
        match variant {
            0 => Quad::A,
            1 => Quad::B,
            2 => Quad::C,
            _ => Quad::D,
        }
    }
}

proptest! {
    #[test]
    fn modulo_index_is_bijective_over_consecutive_ids(a in arbitrary_id(), b in arbitrary_id()) {
        let index = ModuloIndex;

        prop_assert!(index.slot_of(a) < Quad::COUNT);
        prop_assert_eq!(index.slot_of(a) == index.slot_of(b), a == b);
    }

    #[test]
    fn lowest_true_destination_wins(flags in prop::collection::vec(any::<bool>(), 3)) {
        let destinations = [Quad::B, Quad::C, Quad::D];
        let transitions: Vec<Transition<Quad>> = destinations
            .iter()
            .zip(&flags)
            .map(|(&to, &flag)| Transition {
                from: Quad::A,
                to,
                action: None,
                guard: Some(Guard::new(move || flag)),
            })
            .collect();

        let mut machine = StateMachine::new(plain_states(), transitions, Quad::A).unwrap();
        machine.step();

        let expected = flags
            .iter()
            .position(|&flag| flag)
            .map_or(Quad::A, |i| destinations[i]);
        prop_assert!(machine.is_in_state(expected));
        prop_assert_eq!(machine.log().len(), usize::from(expected != Quad::A));
    }

    #[test]
    fn at_most_one_transition_per_tick(steps in 0usize..8) {
        let transitions = vec![
            unconditional(Quad::A, Quad::B),
            unconditional(Quad::B, Quad::C),
            unconditional(Quad::C, Quad::D),
        ];

        let mut machine = StateMachine::new(plain_states(), transitions, Quad::A).unwrap();
        for _ in 0..steps {
            machine.step();
        }

        // An unconditional chain advances exactly one edge per tick.
        let travelled = steps.min(ALL.len() - 1);
        prop_assert!(machine.is_in_state(ALL[travelled]));
        prop_assert_eq!(machine.log().len(), travelled);
    }

    #[test]
    fn guard_evaluations_per_tick_are_bounded(flags in prop::collection::vec(any::<bool>(), 3)) {
        let evaluations = Arc::new(AtomicUsize::new(0));
        let destinations = [Quad::B, Quad::C, Quad::D];
        let transitions: Vec<Transition<Quad>> = destinations
            .iter()
            .zip(&flags)
            .map(|(&to, &flag)| {
                let probe = Arc::clone(&evaluations);
                Transition {
                    from: Quad::A,
                    to,
                    action: None,
                    guard: Some(Guard::new(move || {
                        probe.fetch_add(1, Ordering::Relaxed);
                        flag
                    })),
                }
            })
            .collect();

        let mut machine = StateMachine::new(plain_states(), transitions, Quad::A).unwrap();
        machine.step();

        prop_assert!(evaluations.load(Ordering::Relaxed) <= Quad::COUNT - 1);
    }

    #[test]
    fn log_length_never_exceeds_capacity(capacity in 0usize..6, steps in 0usize..16) {
        let transitions = vec![
            unconditional(Quad::A, Quad::B),
            unconditional(Quad::B, Quad::A),
        ];

        let mut machine = lockstep::StateMachineBuilder::new()
            .states(plain_states())
            .transitions(transitions)
            .log_capacity(capacity)
            .build()
            .unwrap();

        for _ in 0..steps {
            machine.step();
            prop_assert!(machine.log().len() <= capacity);
        }

        prop_assert_eq!(machine.log().len(), steps.min(capacity));
    }

    #[test]
    fn exactly_one_state_is_current_after_construction(initial in arbitrary_id()) {
        let machine = StateMachine::new(plain_states(), vec![], initial).unwrap();

        let current: Vec<Quad> = ALL
            .iter()
            .copied()
            .filter(|&id| machine.is_in_state(id))
            .collect();
        prop_assert_eq!(current, vec![initial]);
    }

    #[test]
    fn reset_returns_to_initial_from_anywhere(initial in arbitrary_id(), steps in 0usize..8) {
        let transitions = vec![
            unconditional(Quad::A, Quad::B),
            unconditional(Quad::B, Quad::C),
            unconditional(Quad::C, Quad::D),
            unconditional(Quad::D, Quad::A),
        ];

        let mut machine = StateMachine::new(plain_states(), transitions, initial).unwrap();
        for _ in 0..steps {
            machine.step();
        }

        machine.reset();
        prop_assert!(machine.is_in_state(initial));
    }

    #[test]
    fn identically_configured_machines_agree(flags in prop::collection::vec(any::<bool>(), 3), steps in 0usize..6) {
        let build = |flags: &[bool]| {
            let destinations = [Quad::B, Quad::C, Quad::D];
            let transitions: Vec<Transition<Quad>> = destinations
                .iter()
                .zip(flags)
                .map(|(&to, &flag)| Transition {
                    from: Quad::A,
                    to,
                    action: None,
                    guard: Some(Guard::new(move || flag)),
                })
                .collect();
            StateMachine::new(plain_states(), transitions, Quad::A).unwrap()
        };

        let mut left = build(&flags);
        let mut right = build(&flags);
        for _ in 0..steps {
            left.step();
            right.step();
            prop_assert_eq!(left.current_state(), right.current_state());
        }
    }
}
