//! Build errors for machine definitions.

use thiserror::Error;

/// Errors that can occur when building or validating a machine definition.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("Initial state '{state}' is not defined")]
    UnknownInitialState { state: String },

    #[error("State '{state}' is defined more than once")]
    DuplicateState { state: String },

    #[error("Transition '{event}' from '{state}' targets undefined state '{target}'")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },
}
