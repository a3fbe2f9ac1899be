//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders and a macro for describing state
//! graphs with minimal boilerplate. Builders validate the definition
//! before handing back a machine.

pub mod error;
pub mod machine;
pub mod macros;
pub mod state;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use state::StateBuilder;

use crate::core::MachineConfig;

/// Create a validated configuration for a simple cycle of states.
///
/// Each state moves to the next one on `event`; the last wraps around to
/// the first, which is also the initial state.
///
/// # Example
///
/// ```
/// use retrace::builder::cycle;
/// use retrace::machine::Fsm;
///
/// let config = cycle("next", ["red", "green", "yellow"]).unwrap();
/// let mut light = Fsm::new(config);
///
/// light.trigger("next").unwrap();
/// light.trigger("next").unwrap();
/// light.trigger("next").unwrap();
/// assert_eq!(light.state(), "red");
/// ```
pub fn cycle<I, S>(event: &str, states: I) -> Result<MachineConfig, BuildError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let ids: Vec<String> = states.into_iter().map(Into::into).collect();
    let first = ids.first().cloned().ok_or(BuildError::NoStates)?;

    let builders = ids.iter().enumerate().map(|(i, id)| {
        let next = ids.get(i + 1).unwrap_or(&first);
        StateBuilder::new(id.as_str()).on(event, next.as_str())
    });

    MachineBuilder::new()
        .initial(first.as_str())
        .states(builders)
        .build_config()
}
