//! Core machine definition types.
//!
//! This module contains the plain data the engine interprets:
//! - State and event identifiers with per-state transition tables
//! - The insertion-ordered state graph and machine configuration
//! - Undo/redo history stacks
//!
//! Nothing here performs logging or I/O.

mod graph;
mod history;
mod ordered;
mod state;

pub use graph::{MachineConfig, StateGraph};
pub use history::History;
pub use state::{EventId, StateDef, StateId};
