//! Builder for a single state and its outgoing transitions.

use crate::core::{EventId, StateDef, StateId};

/// Fluent builder for one state of a machine.
pub struct StateBuilder {
    id: StateId,
    def: StateDef,
}

impl StateBuilder {
    /// Start describing the state named `id`.
    pub fn new(id: impl Into<StateId>) -> Self {
        Self {
            id: id.into(),
            def: StateDef::new(),
        }
    }

    /// Move to `target` when `event` fires. A repeated event replaces the
    /// earlier target.
    pub fn on(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.def.insert(event, target);
        self
    }

    pub fn id(&self) -> &StateId {
        &self.id
    }

    /// Finish the state, yielding its id and transition table.
    pub fn build(self) -> (StateId, StateDef) {
        (self.id, self.def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_state_with_transitions() {
        let (id, def) = StateBuilder::new("draft")
            .on("submit", "review")
            .on("archive", "archived")
            .build();

        assert_eq!(id, "draft");
        assert_eq!(def.target("submit"), Some(&StateId::from("review")));
        assert_eq!(def.target("archive"), Some(&StateId::from("archived")));
    }

    #[test]
    fn repeated_event_keeps_last_target() {
        let (_, def) = StateBuilder::new("a").on("go", "b").on("go", "c").build();

        assert_eq!(def.target("go"), Some(&StateId::from("c")));
        assert_eq!(def.events().count(), 1);
    }

    #[test]
    fn state_without_transitions_is_terminal() {
        let builder = StateBuilder::new("done");
        assert_eq!(builder.id(), "done");

        let (_, def) = builder.build();
        assert_eq!(def.events().count(), 0);
    }
}
