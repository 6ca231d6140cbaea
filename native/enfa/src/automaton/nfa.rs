//! Epsilon-free Non-deterministic Finite Automaton.

use crate::automaton::names::Names;
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::SymbolId;
use std::collections::{HashMap, VecDeque};

/// An NFA without epsilon transitions, as produced by
/// [`eliminate`](crate::automaton::eliminate).
///
/// `transitions` never holds an `EPSILON` key and never stores an empty
/// destination set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NFA {
    pub(crate) names: Names,
    pub(crate) start_state: StateId,
    pub(crate) final_states: StateSet,
    pub(crate) transitions: HashMap<(StateId, SymbolId), StateSet>,
}

impl NFA {
    pub fn names(&self) -> &Names {
        &self.names
    }

    pub fn num_states(&self) -> usize {
        self.names.num_states()
    }

    pub fn start_state(&self) -> StateId {
        self.start_state
    }

    pub fn final_states(&self) -> &StateSet {
        &self.final_states
    }

    /// Get the transitions from a state on a symbol.
    pub fn destinations(&self, state: StateId, symbol: SymbolId) -> Option<&StateSet> {
        self.transitions.get(&(state, symbol))
    }

    /// Union of the direct `symbol` destinations of every state in `states`.
    pub fn next_states(&self, states: &StateSet, symbol: SymbolId) -> StateSet {
        let mut next = StateSet::with_capacity(self.num_states());
        for state in states.iter() {
            if let Some(destinations) = self.destinations(state, symbol) {
                next.union_with(destinations);
            }
        }
        next
    }

    /// Check if the NFA accepts no word at all.
    pub fn is_empty(&self) -> bool {
        if self.final_states.is_empty() {
            return true;
        }

        // BFS to find if any final state is reachable
        let mut visited = StateSet::with_capacity(self.num_states());
        let mut queue = VecDeque::from([self.start_state]);

        while let Some(state) = queue.pop_front() {
            if !visited.insert(state) {
                continue;
            }
            if self.final_states.contains(state) {
                return false;
            }
            for symbol in self.names.symbol_ids() {
                if let Some(next) = self.destinations(state, symbol) {
                    queue.extend(next.iter().filter(|&s| !visited.contains(s)));
                }
            }
        }

        true
    }

    /// All transitions as `(source, symbol, destination)` triples.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, SymbolId, StateId)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(&(src, sym), dests)| dests.iter().map(move |dst| (src, sym, dst)))
    }

    pub fn num_transitions(&self) -> usize {
        self.transitions.values().map(StateSet::len).sum()
    }
}
