//! Identifiers and per-state transition tables.
//!
//! States and events are named by opaque string tokens. A `StateDef`
//! maps each event a state understands to the state it leads to.

use super::ordered;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Name of a state within a machine definition.
///
/// # Example
///
/// ```rust
/// use retrace::core::StateId;
///
/// let id = StateId::from("idle");
/// assert_eq!(id.as_str(), "idle");
/// assert_eq!(id, "idle");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

/// Name of an event that triggers a transition.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(StateId);
string_id!(EventId);

/// Transition table of a single state.
///
/// Event keys are unique and kept in the order they were declared.
/// Targets may repeat and may point back at the owning state.
///
/// # Example
///
/// ```rust
/// use retrace::core::StateDef;
///
/// let off = StateDef::new().on("turnOn", "on");
///
/// assert!(off.handles("turnOn"));
/// assert_eq!(off.target("turnOn").map(|s| s.as_str()), Some("on"));
/// assert!(off.target("turnOff").is_none());
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct StateDef {
    #[serde(default, with = "ordered")]
    transitions: Vec<(EventId, StateId)>,
}

impl StateDef {
    /// Create a state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the transition taken on `event`.
    pub fn on(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.insert(event, target);
        self
    }

    /// Add (or replace) the transition taken on `event`, returning the
    /// previous target if one existed.
    pub fn insert(
        &mut self,
        event: impl Into<EventId>,
        target: impl Into<StateId>,
    ) -> Option<StateId> {
        ordered::upsert(&mut self.transitions, event.into(), target.into())
    }

    /// State reached on `event`, if this state handles it.
    pub fn target(&self, event: &str) -> Option<&StateId> {
        self.transitions
            .iter()
            .find(|(declared, _)| declared.as_str() == event)
            .map(|(_, target)| target)
    }

    pub fn handles(&self, event: &str) -> bool {
        self.target(event).is_some()
    }

    /// Events this state reacts to, in declaration order.
    pub fn events(&self) -> impl Iterator<Item = &EventId> {
        self.transitions.iter().map(|(event, _)| event)
    }

    pub fn transitions(&self) -> &[(EventId, StateId)] {
        &self.transitions
    }
}

impl<E, T> FromIterator<(E, T)> for StateDef
where
    E: Into<EventId>,
    T: Into<StateId>,
{
    fn from_iter<I: IntoIterator<Item = (E, T)>>(iter: I) -> Self {
        let mut def = StateDef::new();
        for (event, target) in iter {
            def.insert(event, target);
        }
        def
    }
}
