//! Retrace: a declarative finite state machine with undo/redo history
//!
//! A machine is described as data: an initial state plus a map of states,
//! each naming the events it reacts to and the state each event leads to.
//! The engine tracks the current state, advances it on events or explicit
//! jumps, and keeps a bidirectional history so changes can be undone and
//! redone.
//!
//! # Core Concepts
//!
//! - **Graph**: Insertion-ordered [`StateGraph`] of [`StateDef`] transition tables
//! - **Engine**: [`Fsm`] interprets a graph and owns the current state
//! - **History**: Undo/redo stacks of previously visited states
//! - **Builders**: Validated construction via [`MachineBuilder`] or [`machine!`]
//!
//! # Example
//!
//! ```rust
//! use retrace::{Fsm, FsmError, MachineConfig};
//!
//! let config = MachineConfig::from_json_str(r#"{
//!     "initial": "off",
//!     "states": {
//!         "off": { "transitions": { "turnOn": "on" } },
//!         "on": { "transitions": { "turnOff": "off" } }
//!     }
//! }"#).unwrap();
//!
//! let mut fsm = Fsm::new(config);
//! fsm.trigger("turnOn").unwrap();
//! fsm.trigger("turnOff").unwrap();
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "on");
//! assert!(fsm.redo());
//! assert_eq!(fsm.state(), "off");
//!
//! assert!(matches!(fsm.trigger("turnOff"), Err(FsmError::InvalidTransition { .. })));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder, StateBuilder};
pub use config::ConfigError;
pub use crate::core::{EventId, History, MachineConfig, StateDef, StateGraph, StateId};
pub use machine::{Fsm, FsmError};
