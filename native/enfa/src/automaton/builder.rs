//! Collect-then-validate construction of [`EpsilonNFA`] values.

use crate::automaton::epsilon_nfa::EpsilonNFA;
use crate::automaton::error::{BuildError, BuildResult, StateRole};
use crate::automaton::names::Names;
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::{EPSILON, EPSILON_TOKEN, SymbolId};
use indexmap::IndexSet;
use log::debug;
use std::collections::HashMap;

/// Gathers the declared parts of an ε-NFA.
///
/// Nothing is checked until [`build`](Self::build), which either returns a
/// complete automaton or the first problem found. A destination that is not a
/// declared state is rejected rather than silently added.
#[derive(Debug, Clone, Default)]
pub struct EpsilonNFABuilder {
    states: IndexSet<char>,
    symbols: Vec<char>,
    start: Option<char>,
    accepting: Vec<char>,
    /// (source, symbol or None for epsilon, destination)
    transitions: Vec<(char, Option<char>, char)>,
}

impl EpsilonNFABuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a state. Declaring a state twice has no effect.
    pub fn state(&mut self, state: char) -> &mut Self {
        self.states.insert(state);
        self
    }

    pub fn states<I: IntoIterator<Item = char>>(&mut self, states: I) -> &mut Self {
        self.states.extend(states);
        self
    }

    pub fn symbol(&mut self, symbol: char) -> &mut Self {
        self.symbols.push(symbol);
        self
    }

    pub fn symbols<I: IntoIterator<Item = char>>(&mut self, symbols: I) -> &mut Self {
        self.symbols.extend(symbols);
        self
    }

    pub fn start(&mut self, state: char) -> &mut Self {
        self.start = Some(state);
        self
    }

    pub fn accept(&mut self, state: char) -> &mut Self {
        self.accepting.push(state);
        self
    }

    pub fn transition(&mut self, source: char, symbol: char, destination: char) -> &mut Self {
        self.transitions.push((source, Some(symbol), destination));
        self
    }

    pub fn epsilon(&mut self, source: char, destination: char) -> &mut Self {
        self.transitions.push((source, None, destination));
        self
    }

    /// Validate everything collected so far and produce the automaton.
    pub fn build(&self) -> BuildResult<EpsilonNFA> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut symbols = IndexSet::with_capacity(self.symbols.len());
        for &symbol in &self.symbols {
            if symbol == EPSILON_TOKEN {
                return Err(BuildError::ReservedSymbol(symbol));
            }
            if !symbols.insert(symbol) {
                return Err(BuildError::DuplicateSymbol(symbol));
            }
        }

        let names = Names::new(self.states.clone(), symbols);
        let capacity = names.num_states();
        let lookup = |state: char, role: StateRole| -> BuildResult<StateId> {
            names
                .state_id(state)
                .ok_or(BuildError::UndeclaredState { state, role })
        };

        let start_state = lookup(self.start.ok_or(BuildError::MissingStart)?, StateRole::Start)?;

        let mut final_states = StateSet::with_capacity(capacity);
        for &state in &self.accepting {
            final_states.insert(lookup(state, StateRole::Accepting)?);
        }

        let mut transitions: HashMap<(StateId, SymbolId), StateSet> = HashMap::new();
        for &(source, symbol, destination) in &self.transitions {
            let source = lookup(source, StateRole::Source)?;
            let destination = lookup(destination, StateRole::Destination)?;
            let symbol = match symbol {
                None => EPSILON,
                Some(token) if token == EPSILON_TOKEN => EPSILON,
                Some(token) => names
                    .symbol_id(token)
                    .ok_or(BuildError::UndeclaredSymbol(token))?,
            };
            transitions
                .entry((source, symbol))
                .or_insert_with(|| StateSet::with_capacity(capacity))
                .insert(destination);
        }

        let nfa = EpsilonNFA {
            names,
            start_state,
            final_states,
            transitions,
        };
        debug!(
            "built ε-NFA: {} states, {} symbols, {} transitions",
            nfa.num_states(),
            nfa.names().num_symbols(),
            nfa.num_transitions()
        );
        Ok(nfa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> EpsilonNFABuilder {
        let mut builder = EpsilonNFABuilder::new();
        builder.states("012".chars()).symbols(['a', 'b']).start('0');
        builder
    }

    #[test]
    fn test_build_minimal() {
        let nfa = base().accept('2').epsilon('0', '1').transition('1', 'a', '2').build().unwrap();
        assert_eq!(nfa.num_states(), 3);
        assert_eq!(nfa.start_state(), 0);
        assert!(nfa.final_states().contains(2));
        assert!(nfa.destinations(0, EPSILON).unwrap().contains(1));
        assert!(nfa.destinations(0, 0).is_none());
    }

    #[test]
    fn test_epsilon_token_as_symbol_means_epsilon() {
        let nfa = base().transition('0', EPSILON_TOKEN, '2').build().unwrap();
        assert!(nfa.destinations(0, EPSILON).unwrap().contains(2));
    }

    #[test]
    fn test_rejects_undeclared_destination() {
        let err = base().transition('0', 'a', '9').build().unwrap_err();
        assert_eq!(
            err,
            BuildError::UndeclaredState {
                state: '9',
                role: StateRole::Destination
            }
        );
    }

    #[test]
    fn test_rejects_undeclared_start_and_accepting() {
        let err = base().start('x').build().unwrap_err();
        assert_eq!(
            err,
            BuildError::UndeclaredState {
                state: 'x',
                role: StateRole::Start
            }
        );

        let err = base().accept('x').build().unwrap_err();
        assert!(matches!(err, BuildError::UndeclaredState { role: StateRole::Accepting, .. }));
    }

    #[test]
    fn test_rejects_bad_alphabet() {
        assert_eq!(base().symbol('ε').build().unwrap_err(), BuildError::ReservedSymbol('ε'));
        assert_eq!(base().symbol('a').build().unwrap_err(), BuildError::DuplicateSymbol('a'));
        assert_eq!(
            base().transition('0', 'c', '1').build().unwrap_err(),
            BuildError::UndeclaredSymbol('c')
        );
    }

    #[test]
    fn test_requires_states_and_start() {
        assert_eq!(EpsilonNFABuilder::new().build().unwrap_err(), BuildError::NoStates);
        assert_eq!(
            EpsilonNFABuilder::new().state('0').build().unwrap_err(),
            BuildError::MissingStart
        );
    }

    #[test]
    fn test_empty_accepting_set_is_allowed() {
        let nfa = base().build().unwrap();
        assert!(nfa.final_states().is_empty());
    }
}
