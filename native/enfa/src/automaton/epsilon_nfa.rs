//! Epsilon Non-deterministic Finite Automaton (ε-NFA) implementation.

use crate::automaton::names::Names;
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::{EPSILON, SymbolId, is_epsilon};
use std::collections::{HashMap, VecDeque};

/// An Epsilon Non-deterministic Finite Automaton.
///
/// Built once through [`EpsilonNFABuilder`](crate::automaton::EpsilonNFABuilder)
/// and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpsilonNFA {
    /// State and symbol tokens
    pub(crate) names: Names,
    pub(crate) start_state: StateId,
    /// Final (accepting) states
    pub(crate) final_states: StateSet,
    /// Transitions: (source, symbol) -> set of destination states.
    /// For epsilon transitions, symbol == EPSILON. Absent means empty.
    pub(crate) transitions: HashMap<(StateId, SymbolId), StateSet>,
}

impl EpsilonNFA {
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

    /// Direct destinations of `state` on `symbol` (which may be `EPSILON`).
    pub fn destinations(&self, state: StateId, symbol: SymbolId) -> Option<&StateSet> {
        self.transitions.get(&(state, symbol))
    }

    /// Get the epsilon closure of a set of states.
    ///
    /// Every state enters the worklist at most once, guarded by the
    /// membership test on the result.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = states.clone();
        let mut stack: Vec<StateId> = states.iter().collect();

        while let Some(s) = stack.pop() {
            if let Some(destinations) = self.transitions.get(&(s, EPSILON)) {
                for dest in destinations.iter() {
                    if closure.insert(dest) {
                        stack.push(dest);
                    }
                }
            }
        }

        closure
    }

    /// Get the states directly reachable from `states` on `symbol`.
    /// No epsilon closure is applied.
    pub fn move_on_symbol(&self, states: &StateSet, symbol: SymbolId) -> StateSet {
        debug_assert!(!is_epsilon(symbol), "use epsilon_closure for epsilon moves");

        let mut reached = StateSet::with_capacity(self.num_states());
        for state in states.iter() {
            if let Some(destinations) = self.transitions.get(&(state, symbol)) {
                reached.union_with(destinations);
            }
        }
        reached
    }

    /// Check if the automaton accepts no word at all.
    /// Uses BFS from the start closure following all transitions.
    pub fn is_empty(&self) -> bool {
        let mut visited = StateSet::with_capacity(self.num_states());
        let start = StateSet::singleton(self.start_state, self.num_states());
        let mut queue: VecDeque<StateId> = self.epsilon_closure(&start).iter().collect();

        while let Some(state) = queue.pop_front() {
            if !visited.insert(state) {
                continue;
            }
            if self.final_states.contains(state) {
                return false;
            }
            for symbol in self.names.symbol_ids() {
                if let Some(destinations) = self.transitions.get(&(state, symbol)) {
                    queue.extend(self.epsilon_closure(destinations).iter());
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
