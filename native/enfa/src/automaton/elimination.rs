//! Epsilon elimination: ε-NFA to an equivalent ε-free NFA over the same states.

use crate::automaton::epsilon_nfa::EpsilonNFA;
use crate::automaton::nfa::NFA;
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::SymbolId;
use log::debug;
use std::collections::HashMap;

/// Remove every epsilon transition from `nfa`.
///
/// Each state keeps its identity. A state becomes accepting when its epsilon
/// closure reaches an accepting state, and its transition on `a` goes to the
/// closure of everything its closure reaches on `a`. Empty results are left
/// out of the transition map.
pub fn eliminate(nfa: &EpsilonNFA) -> NFA {
    let capacity = nfa.num_states();
    let mut final_states = StateSet::with_capacity(capacity);
    let mut transitions: HashMap<(StateId, SymbolId), StateSet> = HashMap::new();

    for state in nfa.names().state_ids() {
        let closure = nfa.epsilon_closure(&StateSet::singleton(state, capacity));

        if closure.intersects(nfa.final_states()) {
            final_states.insert(state);
        }

        for symbol in nfa.names().symbol_ids() {
            let reached = nfa.epsilon_closure(&nfa.move_on_symbol(&closure, symbol));
            if !reached.is_empty() {
                transitions.insert((state, symbol), reached);
            }
        }
    }

    let result = NFA {
        names: nfa.names().clone(),
        start_state: nfa.start_state(),
        final_states,
        transitions,
    };
    debug!(
        "eliminated epsilon transitions: {} -> {} transitions, {} -> {} accepting states",
        nfa.num_transitions(),
        result.num_transitions(),
        nfa.final_states().len(),
        result.final_states().len()
    );
    result
}

impl EpsilonNFA {
    /// Shorthand for [`eliminate`].
    pub fn to_nfa(&self) -> NFA {
        eliminate(self)
    }
}
