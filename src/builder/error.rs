//! Build errors for state machine and transition builders.

use crate::engine::ConfigError;
use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no states supplied. Add states before .build()")]
    NoStates,

    #[error("transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("transition target state not specified. Call .to(state)")]
    MissingToState,

    /// The assembled configuration failed engine validation.
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}
