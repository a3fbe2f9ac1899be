//! The state machine engine.
//!
//! [`Fsm`] interprets a [`StateGraph`](crate::core::StateGraph): it holds the
//! current state, advances it on events or explicit jumps, and keeps an
//! undo/redo history of every committed change.
//!
//! # Key Concepts
//!
//! - **Trigger**: follow a declared edge for an event
//! - **Change state**: jump to any declared state, edges ignored
//! - **Undo / redo**: walk the history; "nothing to do" is `false`, not an error

mod error;
mod fsm;

pub use error::FsmError;
pub use fsm::Fsm;
