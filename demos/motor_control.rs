//! Motor Control State Machine
//!
//! This example demonstrates flag-driven transitions and reset semantics.
//!
//! Key concepts:
//! - Guards reading host flags (start/stop commands)
//! - Entry and exit hooks as side-effect boundaries
//! - Reset returning to the initial state without re-running entry
//!
//! Run with: cargo run --example motor_control

use lockstep::builder::guarded;
use lockstep::core::State;
use lockstep::state_ids;
use lockstep::StateMachine;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

state_ids! {
    enum Motor {
        Idle,
        Running,
        Stopped,
    }
}

fn main() {
    println!("=== Motor Control State Machine ===\n");

    let start = Arc::new(AtomicBool::new(false));
    let stop = Arc::new(AtomicBool::new(false));
    let start_flag = Arc::clone(&start);
    let stop_flag = Arc::clone(&stop);

    let states = vec![
        State::new(Motor::Idle)
            .entry(|| println!("  [idle] power-on init"))
            .during(|| println!("  [idle] waiting for start command")),
        State::new(Motor::Running)
            .entry(|| println!("  [running] spinning up"))
            .during(|| println!("  [running] monitoring"))
            .exit(|| println!("  [running] spinning down")),
        State::new(Motor::Stopped).entry(|| println!("  [stopped] brakes engaged")),
    ];
    let transitions = vec![
        guarded(Motor::Idle, Motor::Running, move || {
            start_flag.load(Ordering::Relaxed)
        }),
        guarded(Motor::Running, Motor::Stopped, move || {
            stop_flag.load(Ordering::Relaxed)
        }),
    ];

    let mut machine = StateMachine::new(states, transitions, Motor::Idle).unwrap();

    println!("\nTick with no command:");
    machine.step();

    println!("\nStart command issued:");
    start.store(true, Ordering::Relaxed);
    machine.step();
    assert!(machine.is_in_state(Motor::Running));

    println!("\nStop command issued:");
    stop.store(true, Ordering::Relaxed);
    machine.step();
    assert!(machine.is_in_state(Motor::Stopped));

    println!("\nReset (no entry hook re-runs):");
    machine.reset();
    assert!(machine.is_in_state(Motor::Idle));
    println!("  back in idle after {} ticks", machine.ticks());

    println!("\n=== Example Complete ===");
}
