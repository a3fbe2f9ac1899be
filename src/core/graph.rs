//! State graph and machine configuration.

use super::ordered;
use super::state::{StateDef, StateId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Insertion-ordered mapping from state id to its transition table.
///
/// Iteration follows the order states were first inserted, which is also
/// the key order of the JSON document a graph was read from. Inserting an
/// id that already exists replaces its definition but keeps its position.
///
/// # Example
///
/// ```rust
/// use retrace::core::{StateDef, StateGraph};
///
/// let mut graph = StateGraph::new();
/// graph.insert("off", StateDef::new().on("turnOn", "on"));
/// graph.insert("on", StateDef::new().on("turnOff", "off"));
///
/// let ids: Vec<&str> = graph.ids().map(|id| id.as_str()).collect();
/// assert_eq!(ids, vec!["off", "on"]);
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
pub struct StateGraph {
    states: Vec<(StateId, StateDef)>,
}

impl StateGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a state, returning the definition it replaced.
    pub fn insert(&mut self, id: impl Into<StateId>, def: StateDef) -> Option<StateDef> {
        ordered::upsert(&mut self.states, id.into(), def)
    }

    pub fn get(&self, id: &str) -> Option<&StateDef> {
        self.states
            .iter()
            .find(|(existing, _)| existing.as_str() == id)
            .map(|(_, def)| def)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// State ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &StateId> {
        self.states.iter().map(|(id, _)| id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StateId, &StateDef)> {
        self.states.iter().map(|(id, def)| (id, def))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<K: Into<StateId>> FromIterator<(K, StateDef)> for StateGraph {
    fn from_iter<I: IntoIterator<Item = (K, StateDef)>>(iter: I) -> Self {
        let mut graph = StateGraph::new();
        for (id, def) in iter {
            graph.insert(id, def);
        }
        graph
    }
}

impl Serialize for StateGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ordered::serialize(&self.states, serializer)
    }
}

impl<'de> Deserialize<'de> for StateGraph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ordered::deserialize(deserializer).map(|states| StateGraph { states })
    }
}

/// Declarative machine definition: a starting state plus the state graph.
///
/// Serialized form:
///
/// ```json
/// {
///   "initial": "off",
///   "states": {
///     "off": { "transitions": { "turnOn": "on" } },
///     "on":  { "transitions": { "turnOff": "off" } }
///   }
/// }
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct MachineConfig {
    pub initial: StateId,
    pub states: StateGraph,
}

impl MachineConfig {
    pub fn new(initial: impl Into<StateId>, states: StateGraph) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }
}
