//! Runtime errors raised by the engine.

use thiserror::Error;

/// Errors that can occur when moving a machine between states.
///
/// The machine is left untouched whenever one of these is returned.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FsmError {
    #[error("State '{state}' is not defined in this machine")]
    InvalidState { state: String },

    #[error("No transition for event '{event}' from state '{state}'")]
    InvalidTransition { state: String, event: String },
}
