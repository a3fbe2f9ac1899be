//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{MachineConfig, StateDef, StateGraph, StateId};
use crate::machine::Fsm;

/// Builder for constructing state machines with a fluent API.
///
/// Unlike [`Fsm::new`], `build` validates the definition: the initial
/// state must be declared, state ids must be unique, and every transition
/// must target a declared state.
///
/// # Example
///
/// ```rust
/// use retrace::builder::{MachineBuilder, StateBuilder};
///
/// let mut fsm = MachineBuilder::new()
///     .initial("off")
///     .state(StateBuilder::new("off").on("turnOn", "on"))
///     .state(StateBuilder::new("on").on("turnOff", "off"))
///     .build()
///     .unwrap();
///
/// fsm.trigger("turnOn").unwrap();
/// assert_eq!(fsm.state(), "on");
/// ```
#[derive(Default)]
pub struct MachineBuilder {
    initial: Option<StateId>,
    states: Vec<(StateId, StateDef)>,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add a state using a builder.
    pub fn state(mut self, builder: StateBuilder) -> Self {
        self.states.push(builder.build());
        self
    }

    /// Add a pre-built state definition.
    pub fn add_state(mut self, id: impl Into<StateId>, def: StateDef) -> Self {
        self.states.push((id.into(), def));
        self
    }

    /// Add multiple states at once.
    pub fn states(mut self, builders: impl IntoIterator<Item = StateBuilder>) -> Self {
        self.states
            .extend(builders.into_iter().map(StateBuilder::build));
        self
    }

    /// Validate and return the machine definition without creating a machine.
    pub fn build_config(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut graph = StateGraph::new();
        for (id, def) in self.states {
            if graph.contains(id.as_str()) {
                return Err(BuildError::DuplicateState {
                    state: id.to_string(),
                });
            }
            graph.insert(id, def);
        }

        check_targets(&graph)?;

        let config = MachineConfig::new(initial, graph);
        config.validate()?;
        Ok(config)
    }

    /// Build the state machine.
    /// Returns an error if the definition is incomplete or inconsistent.
    pub fn build(self) -> Result<Fsm, BuildError> {
        self.build_config().map(Fsm::new)
    }
}

impl MachineConfig {
    /// Check that the initial state is declared in the graph.
    ///
    /// Construction through [`Fsm::new`] does not call this; it is available
    /// for callers that want to fail fast.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.states.contains(self.initial.as_str()) {
            Ok(())
        } else {
            Err(BuildError::UnknownInitialState {
                state: self.initial.to_string(),
            })
        }
    }
}

fn check_targets(graph: &StateGraph) -> Result<(), BuildError> {
    for (id, def) in graph.iter() {
        for (event, target) in def.transitions() {
            if !graph.contains(target.as_str()) {
                return Err(BuildError::UnknownTarget {
                    state: id.to_string(),
                    event: event.to_string(),
                    target: target.to_string(),
                });
            }
        }
    }
    Ok(())
}
