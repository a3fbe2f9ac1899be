//! Finite state machine that walks a declarative state graph.

use crate::core::{EventId, History, MachineConfig, StateGraph, StateId};
use crate::machine::error::FsmError;
use std::sync::Arc;
use tracing::{debug, warn};

/// Interpreter for a caller-supplied state graph.
///
/// Tracks the current state and an undo/redo history of changes. The
/// graph is held behind an `Arc` and never mutated, so several machines
/// can walk the same definition independently.
///
/// All operations are synchronous. The machine does no internal locking;
/// callers sharing one across threads must serialize access themselves.
///
/// # Example
///
/// ```rust
/// use retrace::core::{MachineConfig, StateDef, StateGraph};
/// use retrace::machine::Fsm;
///
/// let mut states = StateGraph::new();
/// states.insert("off", StateDef::new().on("turnOn", "on"));
/// states.insert("on", StateDef::new().on("turnOff", "off"));
///
/// let mut fsm = Fsm::new(MachineConfig::new("off", states));
/// fsm.trigger("turnOn").unwrap();
/// assert_eq!(fsm.state(), "on");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "off");
/// ```
#[derive(Clone, Debug)]
pub struct Fsm {
    start: StateId,
    current: StateId,
    graph: Arc<StateGraph>,
    history: History,
}

impl Fsm {
    /// Create a machine positioned at the configured initial state.
    ///
    /// The initial state is not checked against the graph. A machine whose
    /// initial state is undeclared still reports it from [`state`](Self::state),
    /// but every [`trigger`](Self::trigger) from it fails.
    pub fn new(config: MachineConfig) -> Self {
        Self::with_graph(config.initial, Arc::new(config.states))
    }

    /// Create a machine over a graph shared with other machines.
    pub fn with_graph(initial: impl Into<StateId>, graph: Arc<StateGraph>) -> Self {
        let initial = initial.into();
        debug!(initial = %initial, states = graph.len(), "state machine created");
        Self {
            start: initial.clone(),
            current: initial,
            graph,
            history: History::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &StateId {
        &self.current
    }

    /// State the machine was constructed in; [`reset`](Self::reset) returns here.
    pub fn start(&self) -> &StateId {
        &self.start
    }

    pub fn graph(&self) -> &StateGraph {
        &self.graph
    }

    /// Shared handle to the graph, for building sibling machines.
    pub fn shared_graph(&self) -> Arc<StateGraph> {
        Arc::clone(&self.graph)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Jump directly to `target`, ignoring transition edges.
    ///
    /// Fails with [`FsmError::InvalidState`] if `target` is not declared.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        let Some(target) = self.graph.ids().find(|id| id.as_str() == target).cloned() else {
            warn!(from = %self.current, to = target, "rejected jump to undeclared state");
            return Err(FsmError::InvalidState {
                state: target.to_string(),
            });
        };

        debug!(from = %self.current, to = %target, "state changed");
        self.commit(target);
        Ok(())
    }

    /// Follow the transition the current state declares for `event`.
    ///
    /// Returns the new current state. Fails with
    /// [`FsmError::InvalidTransition`] when the current state has no rule for
    /// `event` or is itself undeclared.
    pub fn trigger(&mut self, event: &str) -> Result<&StateId, FsmError> {
        let Some(target) = self.target_for(event).cloned() else {
            warn!(state = %self.current, event, "rejected event with no transition");
            return Err(FsmError::InvalidTransition {
                state: self.current.to_string(),
                event: event.to_string(),
            });
        };

        debug!(from = %self.current, to = %target, event, "transition triggered");
        self.commit(target);
        Ok(&self.current)
    }

    /// Return to the construction-time state. History is kept.
    pub fn reset(&mut self) {
        debug!(from = %self.current, to = %self.start, "state machine reset");
        self.current = self.start.clone();
    }

    /// State ids in graph order; with an event, only those that handle it.
    pub fn states(&self, event: Option<&str>) -> Vec<&StateId> {
        match event {
            Some(event) => self
                .graph
                .iter()
                .filter(|(_, def)| def.handles(event))
                .map(|(id, _)| id)
                .collect(),
            None => self.graph.ids().collect(),
        }
    }

    /// Whether `event` would succeed from the current state.
    pub fn can_trigger(&self, event: &str) -> bool {
        self.target_for(event).is_some()
    }

    /// Events the current state reacts to, sorted by name.
    pub fn available_events(&self) -> Vec<&EventId> {
        let mut events: Vec<&EventId> = self
            .graph
            .get(self.current.as_str())
            .map(|def| def.events().collect())
            .unwrap_or_default();
        events.sort();
        events
    }

    /// Step back to the state before the last committed change.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.step_back(self.current.clone()) {
            Some(previous) => {
                debug!(from = %self.current, to = %previous, "undo");
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone change.
    ///
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.step_forward(self.current.clone()) {
            Some(next) => {
                debug!(from = %self.current, to = %next, "redo");
                self.current = next;
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Forget all undo and redo entries. The current state is kept.
    pub fn clear_history(&mut self) {
        debug!(entries = self.history.len(), "history cleared");
        self.history.clear();
    }

    fn target_for(&self, event: &str) -> Option<&StateId> {
        self.graph
            .get(self.current.as_str())
            .and_then(|def| def.target(event))
    }

    fn commit(&mut self, target: StateId) {
        let previous = std::mem::replace(&mut self.current, target);
        self.history.record(previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateDef;

    fn switch() -> Fsm {
        let mut states = StateGraph::new();
        states.insert("off", StateDef::new().on("turnOn", "on"));
        states.insert("on", StateDef::new().on("turnOff", "off"));
        Fsm::new(MachineConfig::new("off", states))
    }

    fn workflow() -> Fsm {
        let mut states = StateGraph::new();
        states.insert(
            "draft",
            StateDef::new().on("submit", "review").on("archive", "archived"),
        );
        states.insert(
            "review",
            StateDef::new()
                .on("approve", "published")
                .on("reject", "draft")
                .on("archive", "archived"),
        );
        states.insert("published", StateDef::new().on("archive", "archived"));
        states.insert("archived", StateDef::new());
        Fsm::new(MachineConfig::new("draft", states))
    }

    #[test]
    fn new_machine_starts_in_initial_state() {
        let fsm = switch();

        assert_eq!(fsm.state(), "off");
        assert_eq!(fsm.start(), "off");
        assert!(fsm.history().is_empty());
    }

    #[test]
    fn trigger_follows_declared_edge() {
        let mut fsm = switch();

        let state = fsm.trigger("turnOn").unwrap().clone();

        assert_eq!(state, "on");
        assert_eq!(fsm.state(), "on");
    }

    #[test]
    fn trigger_without_rule_fails_and_leaves_state() {
        let mut fsm = switch();

        let result = fsm.trigger("turnOff");

        assert_eq!(
            result,
            Err(FsmError::InvalidTransition {
                state: "off".to_string(),
                event: "turnOff".to_string(),
            })
        );
        assert_eq!(fsm.state(), "off");
        assert!(!fsm.can_undo());
    }

    #[test]
    fn change_state_jumps_without_edge() {
        let mut fsm = workflow();

        fsm.change_state("published").unwrap();

        assert_eq!(fsm.state(), "published");
        assert_eq!(fsm.history().undo_stack(), &[StateId::from("draft")]);
    }

    #[test]
    fn change_state_to_unknown_fails_and_leaves_state() {
        let mut fsm = switch();

        let result = fsm.change_state("unknown");

        assert!(matches!(result, Err(FsmError::InvalidState { state }) if state == "unknown"));
        assert_eq!(fsm.state(), "off");
        assert!(fsm.history().is_empty());
    }

    #[test]
    fn change_state_to_current_state_is_recorded() {
        let mut fsm = switch();

        fsm.change_state("off").unwrap();

        assert_eq!(fsm.state(), "off");
        assert!(fsm.can_undo());
    }

    #[test]
    fn failed_operations_keep_redo_stack() {
        let mut fsm = switch();
        fsm.trigger("turnOn").unwrap();
        fsm.undo();

        assert!(fsm.change_state("nowhere").is_err());
        assert!(fsm.trigger("turnOff").is_err());

        assert!(fsm.can_redo());
    }

    #[test]
    fn reset_returns_to_start_and_keeps_history() {
        let mut fsm = workflow();
        fsm.trigger("submit").unwrap();
        fsm.trigger("approve").unwrap();

        fsm.reset();

        assert_eq!(fsm.state(), "draft");
        assert_eq!(fsm.history().undo_stack().len(), 2);

        // Undo after reset moves away from the start state again.
        assert!(fsm.undo());
        assert_eq!(fsm.state(), "review");
    }

    #[test]
    fn reset_does_not_clear_redo() {
        let mut fsm = workflow();
        fsm.trigger("submit").unwrap();
        fsm.undo();

        fsm.reset();

        assert!(fsm.can_redo());
    }

    #[test]
    fn states_without_event_lists_all_in_order() {
        let fsm = workflow();

        let states: Vec<&str> = fsm.states(None).into_iter().map(StateId::as_str).collect();

        assert_eq!(states, vec!["draft", "review", "published", "archived"]);
    }

    #[test]
    fn states_with_event_filters_in_order() {
        let fsm = workflow();

        let archive: Vec<&str> = fsm
            .states(Some("archive"))
            .into_iter()
            .map(StateId::as_str)
            .collect();
        let reject: Vec<&str> = fsm
            .states(Some("reject"))
            .into_iter()
            .map(StateId::as_str)
            .collect();

        assert_eq!(archive, vec!["draft", "review", "published"]);
        assert_eq!(reject, vec!["review"]);
        assert!(fsm.states(Some("launch")).is_empty());
    }

    #[test]
    fn undo_on_fresh_machine_returns_false() {
        let mut fsm = switch();

        assert!(!fsm.undo());
        assert_eq!(fsm.state(), "off");
    }

    #[test]
    fn redo_without_undo_returns_false() {
        let mut fsm = switch();
        fsm.trigger("turnOn").unwrap();

        assert!(!fsm.redo());
        assert_eq!(fsm.state(), "on");
    }

    #[test]
    fn new_change_after_undo_discards_redo() {
        let mut fsm = workflow();
        fsm.trigger("submit").unwrap();
        fsm.undo();

        fsm.trigger("archive").unwrap();

        assert!(!fsm.redo());
        assert_eq!(fsm.state(), "archived");
    }

    #[test]
    fn undo_redo_cycles_are_lossless() {
        let mut fsm = switch();
        fsm.trigger("turnOn").unwrap();

        for _ in 0..3 {
            assert!(fsm.undo());
            assert_eq!(fsm.state(), "off");
            assert!(fsm.redo());
            assert_eq!(fsm.state(), "on");
        }

        assert_eq!(fsm.history().undo_stack().len(), 1);
    }

    #[test]
    fn clear_history_keeps_current_state() {
        let mut fsm = switch();
        fsm.trigger("turnOn").unwrap();
        fsm.trigger("turnOff").unwrap();
        fsm.undo();

        fsm.clear_history();

        assert_eq!(fsm.state(), "on");
        assert!(!fsm.undo());
        assert!(!fsm.redo());
    }

    #[test]
    fn undeclared_initial_state_is_reported_but_cannot_trigger() {
        let mut fsm = Fsm::new(MachineConfig::new("ghost", StateGraph::new()));

        assert_eq!(fsm.state(), "ghost");
        assert!(matches!(
            fsm.trigger("anything"),
            Err(FsmError::InvalidTransition { .. })
        ));
        assert!(fsm.available_events().is_empty());
    }

    #[test]
    fn trigger_follows_edge_to_undeclared_target() {
        let mut states = StateGraph::new();
        states.insert("a", StateDef::new().on("go", "ghost"));
        let mut fsm = Fsm::new(MachineConfig::new("a", states));

        let state = fsm.trigger("go").unwrap().clone();
        assert_eq!(state, "ghost");

        assert!(matches!(
            fsm.trigger("go"),
            Err(FsmError::InvalidTransition { state, event }) if state == "ghost" && event == "go"
        ));
        assert!(matches!(
            fsm.change_state("ghost"),
            Err(FsmError::InvalidState { .. })
        ));
        assert_eq!(fsm.state(), "ghost");
        assert!(fsm.states(None).iter().all(|id| id.as_str() != "ghost"));

        assert!(fsm.undo());
        assert_eq!(fsm.state(), "a");
    }

    #[test]
    fn available_events_are_sorted() {
        let mut fsm = workflow();
        fsm.trigger("submit").unwrap();

        let events: Vec<&str> = fsm
            .available_events()
            .into_iter()
            .map(EventId::as_str)
            .collect();

        assert_eq!(events, vec!["approve", "archive", "reject"]);
        assert!(fsm.can_trigger("approve"));
        assert!(!fsm.can_trigger("submit"));
    }

    #[test]
    fn machines_share_one_graph() {
        let fsm = switch();
        let mut sibling = Fsm::with_graph("on", fsm.shared_graph());

        sibling.trigger("turnOff").unwrap();

        assert_eq!(sibling.state(), "off");
        assert_eq!(fsm.state(), "off");
        assert!(!fsm.can_undo());
        assert!(Arc::ptr_eq(&fsm.shared_graph(), &sibling.shared_graph()));
    }
}
