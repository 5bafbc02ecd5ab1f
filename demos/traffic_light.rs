//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic transitions driven by a tick-counter guard
//! - During hooks advancing host state
//! - Transition actions resetting host state
//!
//! Run with: cargo run --example traffic_light

use lockstep::builder::{StateMachineBuilder, TransitionBuilder};
use lockstep::core::{State, StateId};
use lockstep::state_ids;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

state_ids! {
    enum Light {
        Red,
        Green,
        Yellow,
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    // Ticks spent in the current light, advanced by each during hook and
    // cleared by each transition action.
    let elapsed = Arc::new(AtomicUsize::new(0));

    let tick = |elapsed: &Arc<AtomicUsize>| {
        let counter = Arc::clone(elapsed);
        move || {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    };
    let dwell_over = |elapsed: &Arc<AtomicUsize>, dwell: usize| {
        let counter = Arc::clone(elapsed);
        move || counter.load(Ordering::Relaxed) >= dwell
    };
    let restart = |elapsed: &Arc<AtomicUsize>| {
        let counter = Arc::clone(elapsed);
        move || counter.store(0, Ordering::Relaxed)
    };

    let transitions = vec![
        TransitionBuilder::new()
            .from(Light::Red)
            .to(Light::Green)
            .when(dwell_over(&elapsed, 3))
            .act(restart(&elapsed))
            .build()
            .unwrap(),
        TransitionBuilder::new()
            .from(Light::Green)
            .to(Light::Yellow)
            .when(dwell_over(&elapsed, 2))
            .act(restart(&elapsed))
            .build()
            .unwrap(),
        TransitionBuilder::new()
            .from(Light::Yellow)
            .to(Light::Red)
            .when(dwell_over(&elapsed, 1))
            .act(restart(&elapsed))
            .build()
            .unwrap(),
    ];

    let mut machine = StateMachineBuilder::new()
        .state(
            State::new(Light::Red)
                .entry(|| println!("  RED    (stop)"))
                .during(tick(&elapsed)),
        )
        .state(
            State::new(Light::Green)
                .entry(|| println!("  GREEN  (go)"))
                .during(tick(&elapsed)),
        )
        .state(
            State::new(Light::Yellow)
                .entry(|| println!("  YELLOW (caution)"))
                .during(tick(&elapsed)),
        )
        .transitions(transitions)
        .initial(Light::Red)
        .build()
        .unwrap();

    println!("\nRunning 12 ticks...\n");
    for _ in 0..12 {
        machine.step();
    }

    println!("\nRecent transitions:");
    for record in machine.log().iter() {
        println!(
            "  tick {:2}: {} -> {}",
            record.tick,
            record.from.name(),
            record.to.name()
        );
    }

    println!("\n=== Example Complete ===");
}
