//! Lockstep: a fixed-capacity, table-driven state machine engine.
//!
//! Lockstep targets control-style code where every state and transition is
//! known at build time and each tick must run at a fixed, predictable cost.
//! All storage is sized once at construction: a registry of exactly
//! `StateId::COUNT` state descriptors and a dense `COUNT x COUNT` transition
//! table, addressed by a caller-supplied index function that maps identifiers
//! to array slots.
//!
//! # Core Concepts
//!
//! - **StateId**: enumerable, comparable identifiers via the [`StateId`]
//!   trait (or the [`state_ids!`] macro)
//! - **Index function**: the [`StateIndex`] capability, a bijection from
//!   identifiers onto `0..COUNT`; [`ModuloIndex`] covers plain enums
//! - **Hooks and guards**: zero-argument callables attached to states and
//!   transitions
//! - **Ticks**: one [`StateMachine::step`] call evaluates the current state's
//!   during hook and at most one transition
//!
//! # Example
//!
//! ```rust
//! use lockstep::builder::{guarded, StateMachineBuilder};
//! use lockstep::core::State;
//! use lockstep::state_ids;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! state_ids! {
//!     enum Light {
//!         Red,
//!         Green,
//!     }
//! }
//!
//! let go = Arc::new(AtomicBool::new(false));
//! let flag = Arc::clone(&go);
//!
//! let mut machine = StateMachineBuilder::new()
//!     .state(State::new(Light::Red).entry(|| println!("stop")))
//!     .state(State::new(Light::Green).entry(|| println!("go")))
//!     .add_transition(guarded(Light::Red, Light::Green, move || {
//!         flag.load(Ordering::Relaxed)
//!     }))
//!     .initial(Light::Red)
//!     .build()
//!     .unwrap();
//!
//! machine.step();
//! assert!(machine.is_in_state(Light::Red));
//!
//! go.store(true, Ordering::Relaxed);
//! machine.step();
//! assert!(machine.is_in_state(Light::Green));
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{guarded, unconditional, BuildError, StateMachineBuilder, TransitionBuilder};
pub use core::{
    Guard, Hook, ModuloIndex, State, StateId, StateIndex, Transition, TransitionLog,
    TransitionRecord,
};
pub use engine::{ConfigError, StateMachine};
