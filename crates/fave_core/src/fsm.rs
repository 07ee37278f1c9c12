//! State Machine Runtime
//!
//! Flat, typed state machines for widget phases. States and events are small
//! `Copy` enums; a machine is a lookup table from `(state, event)` to the
//! next state plus a history of the transitions taken.
//!
//! Side effects are not attached to the table. `send` reports whether a
//! transition happened and the owner reacts to the new state, which keeps
//! the owner free to touch its own fields while handling it.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::fmt::Debug;
use std::hash::Hash;

/// Bound for state and event types
pub trait Key: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> Key for T {}

/// A recorded transition: `(from, event, to)`
pub type HistoryEntry<S, E> = (S, E, S);

/// Builder for creating state machines
pub struct StateMachineBuilder<S: Key, E: Key> {
    initial_state: S,
    transitions: FxHashMap<(S, E), S>,
}

impl<S: Key, E: Key> StateMachineBuilder<S, E> {
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            transitions: FxHashMap::default(),
        }
    }

    /// Add a transition (from, event, to)
    pub fn on(mut self, from: S, event: E, to: S) -> Self {
        self.transitions.insert((from, event), to);
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine<S, E> {
        StateMachine {
            current_state: self.initial_state,
            transitions: self.transitions,
            history: SmallVec::new(),
        }
    }
}

/// A state machine instance
pub struct StateMachine<S: Key, E: Key> {
    current_state: S,
    transitions: FxHashMap<(S, E), S>,
    /// History of state transitions, reported when a run ends
    history: SmallVec<[HistoryEntry<S, E>; 4]>,
}

impl<S: Key, E: Key> StateMachine<S, E> {
    /// Create a builder for a state machine
    pub fn builder(initial_state: S) -> StateMachineBuilder<S, E> {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Get transition history
    pub fn history(&self) -> &[HistoryEntry<S, E>] {
        &self.history
    }

    /// Send an event to the state machine.
    ///
    /// Returns the new state if a transition was taken, `None` if the event
    /// has no transition from the current state.
    pub fn send(&mut self, event: E) -> Option<S> {
        let from = self.current_state;
        let Some(&to) = self.transitions.get(&(from, event)) else {
            tracing::trace!(?from, ?event, "fsm: event ignored");
            return None;
        };

        self.current_state = to;
        self.history.push((from, event, to));
        tracing::trace!(?from, ?event, ?to, "fsm: transition");
        Some(to)
    }
}
