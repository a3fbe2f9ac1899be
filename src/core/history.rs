//! Undo/redo history of visited states.
//!
//! Two stacks of state ids, most recent entry last. The undo stack holds
//! the states a machine occupied before each committed change; the redo
//! stack is filled only by stepping back and drained by stepping forward.

use super::state::StateId;

/// Bidirectional history of state changes.
///
/// # Example
///
/// ```rust
/// use retrace::core::{History, StateId};
///
/// let mut history = History::new();
/// history.record(StateId::from("off"));
///
/// // Machine is now in "on"; stepping back yields "off".
/// let previous = history.step_back(StateId::from("on"));
/// assert_eq!(previous, Some(StateId::from("off")));
/// assert!(history.can_redo());
///
/// let next = history.step_forward(StateId::from("off"));
/// assert_eq!(next, Some(StateId::from("on")));
/// assert!(history.can_undo());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    undo: Vec<StateId>,
    redo: Vec<StateId>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state a machine is leaving on a committed change.
    ///
    /// A new change starts a new branch, so the redo stack is discarded.
    pub fn record(&mut self, previous: StateId) {
        self.undo.push(previous);
        self.redo.clear();
    }

    /// Pop the most recent undo entry, parking `current` on the redo stack.
    ///
    /// Returns `None` and leaves both stacks untouched when there is nothing
    /// to undo.
    pub fn step_back(&mut self, current: StateId) -> Option<StateId> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Pop the most recent redo entry, pushing `current` back onto the undo
    /// stack so the step can itself be undone.
    pub fn step_forward(&mut self, current: StateId) -> Option<StateId> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Undo entries, oldest first.
    pub fn undo_stack(&self) -> &[StateId] {
        &self.undo
    }

    /// Redo entries; the next state to redo is last.
    pub fn redo_stack(&self) -> &[StateId] {
        &self.redo
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Total number of entries across both stacks.
    pub fn len(&self) -> usize {
        self.undo.len() + self.redo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo.is_empty() && self.redo.is_empty()
    }
}
