//! Token <-> id mapping for states and symbols.

use crate::automaton::state::StateId;
use crate::automaton::symbol::{EPSILON, EPSILON_TOKEN, SymbolId};
use indexmap::IndexSet;

/// Interned state and symbol tokens.
///
/// Ids are declaration indices, so a `StateId` indexes `states` and a
/// `SymbolId` indexes `symbols`. `EPSILON` has no entry and always maps to
/// `EPSILON_TOKEN`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Names {
    states: IndexSet<char>,
    symbols: IndexSet<char>,
}

impl Names {
    pub(crate) fn new(states: IndexSet<char>, symbols: IndexSet<char>) -> Self {
        Self { states, symbols }
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn num_symbols(&self) -> usize {
        self.symbols.len()
    }

    pub fn state_id(&self, token: char) -> Option<StateId> {
        self.states.get_index_of(&token).map(|i| i as StateId)
    }

    /// Look up a symbol. `EPSILON_TOKEN` resolves to `EPSILON`.
    pub fn symbol_id(&self, token: char) -> Option<SymbolId> {
        if token == EPSILON_TOKEN {
            return Some(EPSILON);
        }
        self.symbols.get_index_of(&token).map(|i| i as SymbolId)
    }

    /// The token of a state. Panics if `state` was not interned here.
    pub fn state(&self, state: StateId) -> char {
        self.states[state as usize]
    }

    /// The token of a symbol. Panics if `symbol` was not interned here.
    pub fn symbol(&self, symbol: SymbolId) -> char {
        if symbol == EPSILON {
            EPSILON_TOKEN
        } else {
            self.symbols[symbol as usize]
        }
    }

    /// All state ids in declaration order.
    pub fn state_ids(&self) -> impl Iterator<Item = StateId> + '_ {
        (0..self.states.len()).map(|i| i as StateId)
    }

    /// All symbol ids in declaration order. Never yields `EPSILON`.
    pub fn symbol_ids(&self) -> impl Iterator<Item = SymbolId> + '_ {
        (0..self.symbols.len()).map(|i| i as SymbolId)
    }

    /// State ids ordered by their token, for display.
    pub fn sorted_states(&self) -> Vec<StateId> {
        let mut ids: Vec<StateId> = self.state_ids().collect();
        ids.sort_by_key(|&id| self.state(id));
        ids
    }

    /// Symbol ids ordered by their token, for display.
    pub fn sorted_symbols(&self) -> Vec<SymbolId> {
        let mut ids: Vec<SymbolId> = self.symbol_ids().collect();
        ids.sort_by_key(|&id| self.symbol(id));
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Names {
        Names::new(['q', 'a', 'c'].into_iter().collect(), ['y', 'x'].into_iter().collect())
    }

    #[test]
    fn test_lookup_round_trip() {
        let names = names();
        assert_eq!(names.state_id('a'), Some(1));
        assert_eq!(names.state(2), 'c');
        assert_eq!(names.state_id('z'), None);
        assert_eq!(names.symbol_id('x'), Some(1));
        assert_eq!(names.symbol_id('w'), None);
    }

    #[test]
    fn test_epsilon_token() {
        let names = names();
        assert_eq!(names.symbol_id(EPSILON_TOKEN), Some(EPSILON));
        assert_eq!(names.symbol(EPSILON), EPSILON_TOKEN);
        assert!(names.symbol_ids().all(|id| id != EPSILON));
    }

    #[test]
    fn test_sorted_by_token() {
        let names = names();
        let states: Vec<char> = names.sorted_states().into_iter().map(|id| names.state(id)).collect();
        assert_eq!(states, vec!['a', 'c', 'q']);
        let symbols: Vec<char> = names.sorted_symbols().into_iter().map(|id| names.symbol(id)).collect();
        assert_eq!(symbols, vec!['x', 'y']);
    }
}
