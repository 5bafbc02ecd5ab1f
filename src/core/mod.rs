//! Core data types of the engine.
//!
//! This module contains the plain building blocks a machine is configured
//! from:
//! - State identifiers and descriptors via [`StateId`] and [`State`]
//! - Transition descriptors via [`Transition`]
//! - Zero-argument callable wrappers via [`Hook`] and [`Guard`]
//! - The slot-mapping capability via [`StateIndex`] and [`ModuloIndex`]
//! - Bounded transition history via [`TransitionLog`]
//!
//! Nothing here executes on its own; the [`engine`](crate::engine) module
//! owns these values and drives them.

mod history;
mod hook;
mod index;
mod state;
mod transition;

pub use history::{TransitionLog, TransitionRecord};
pub use hook::{Guard, Hook};
pub use index::{ModuloIndex, StateIndex};
pub use state::{State, StateId};
pub use transition::Transition;
