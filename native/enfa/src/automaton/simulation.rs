//! Word simulation over sets of active states.

use crate::automaton::epsilon_nfa::EpsilonNFA;
use crate::automaton::names::Names;
use crate::automaton::nfa::NFA;
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::{SymbolId, is_epsilon};
use log::trace;
use std::fmt;

/// The common face of [`EpsilonNFA`] and [`NFA`], used by the simulator and
/// the renderers.
pub trait Automaton {
    fn names(&self) -> &Names;

    fn start_state(&self) -> StateId;

    fn final_states(&self) -> &StateSet;

    /// Direct destinations on `symbol`. `EPSILON` only ever has entries in an
    /// ε-NFA.
    fn destinations(&self, state: StateId, symbol: SymbolId) -> Option<&StateSet>;

    /// Whether the automaton may carry epsilon transitions.
    fn has_epsilon_transitions(&self) -> bool;

    /// The configuration before any input is consumed.
    fn start_configuration(&self) -> StateSet;

    /// The configuration after consuming `symbol` (never `EPSILON`).
    fn next_configuration(&self, configuration: &StateSet, symbol: SymbolId) -> StateSet;

    /// Applied once after the last symbol, before acceptance is tested.
    fn settle(&self, configuration: StateSet) -> StateSet {
        configuration
    }

    fn accepts(&self, word: &str) -> bool
    where
        Self: Sized,
    {
        simulate(self, word).is_accepted()
    }
}

impl Automaton for EpsilonNFA {
    fn names(&self) -> &Names {
        &self.names
    }

    fn start_state(&self) -> StateId {
        self.start_state
    }

    fn final_states(&self) -> &StateSet {
        &self.final_states
    }

    fn destinations(&self, state: StateId, symbol: SymbolId) -> Option<&StateSet> {
        self.transitions.get(&(state, symbol))
    }

    fn has_epsilon_transitions(&self) -> bool {
        true
    }

    fn start_configuration(&self) -> StateSet {
        self.epsilon_closure(&StateSet::singleton(self.start_state, self.num_states()))
    }

    fn next_configuration(&self, configuration: &StateSet, symbol: SymbolId) -> StateSet {
        self.epsilon_closure(&self.move_on_symbol(configuration, symbol))
    }

    fn settle(&self, configuration: StateSet) -> StateSet {
        self.epsilon_closure(&configuration)
    }
}

impl Automaton for NFA {
    fn names(&self) -> &Names {
        &self.names
    }

    fn start_state(&self) -> StateId {
        self.start_state
    }

    fn final_states(&self) -> &StateSet {
        &self.final_states
    }

    fn destinations(&self, state: StateId, symbol: SymbolId) -> Option<&StateSet> {
        self.transitions.get(&(state, symbol))
    }

    fn has_epsilon_transitions(&self) -> bool {
        false
    }

    fn start_configuration(&self) -> StateSet {
        StateSet::singleton(self.start_state, self.num_states())
    }

    fn next_configuration(&self, configuration: &StateSet, symbol: SymbolId) -> StateSet {
        self.next_states(configuration, symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Accepted => "word accepted",
            Verdict::Rejected => "word rejected",
        })
    }
}

/// One consumed input symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub current: StateSet,
    pub symbol: char,
    pub next: StateSet,
}

/// The record of a simulated word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub word: String,
    pub initial_configuration: StateSet,
    pub steps: Vec<Step>,
    /// The configuration acceptance was tested on
    pub final_configuration: StateSet,
    /// Whether a closing epsilon pass ran after the last symbol
    pub epsilon_pass: bool,
    pub verdict: Verdict,
}

impl Trace {
    pub fn is_accepted(&self) -> bool {
        self.verdict == Verdict::Accepted
    }

    /// The active states after each prefix, starting with the empty one.
    pub fn configurations(&self) -> impl Iterator<Item = &StateSet> + '_ {
        std::iter::once(&self.initial_configuration)
            .chain(self.steps.iter().map(|step| &step.next))
    }
}

/// Replay `word` through `automaton`, one symbol at a time.
///
/// A character that is not in the alphabet has no transitions, so the
/// configuration becomes empty and the word is rejected.
pub fn simulate<A: Automaton>(automaton: &A, word: &str) -> Trace {
    let initial_configuration = automaton.start_configuration();
    let mut current = initial_configuration.clone();
    let mut steps = Vec::new();

    for symbol in word.chars() {
        let next = match automaton.names().symbol_id(symbol) {
            Some(id) if !is_epsilon(id) => automaton.next_configuration(&current, id),
            _ => StateSet::default(),
        };
        trace!("{current:?} --{symbol}--> {next:?}");
        steps.push(Step {
            current,
            symbol,
            next: next.clone(),
        });
        current = next;
    }

    let final_configuration = automaton.settle(current);
    let verdict = if final_configuration.intersects(automaton.final_states()) {
        Verdict::Accepted
    } else {
        Verdict::Rejected
    };
    trace!("{word:?}: {verdict} in {final_configuration:?}");

    Trace {
        word: word.to_owned(),
        initial_configuration,
        steps,
        final_configuration,
        epsilon_pass: automaton.has_epsilon_transitions(),
        verdict,
    }
}
