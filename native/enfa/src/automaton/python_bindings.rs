//! PyO3 bindings for the automaton module.
//!
//! States and symbols are one-character Python strings. `None` stands for
//! epsilon wherever a symbol is expected.

use crate::automaton::builder::EpsilonNFABuilder;
use crate::automaton::epsilon_nfa::EpsilonNFA as RustEpsilonNFA;
use crate::automaton::nfa::NFA as RustNFA;
use crate::automaton::simulation::{Automaton, Trace, simulate};
use crate::automaton::{BuildError, Names};
use crate::render::{TransitionTable, format_set};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PySet;

type PyStep = (Vec<char>, char, Vec<char>);

fn value_error(err: BuildError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn tokens(names: &Names, states: &crate::automaton::StateSet) -> Vec<char> {
    let mut tokens: Vec<char> = states.iter().map(|id| names.state(id)).collect();
    tokens.sort_unstable();
    tokens
}

fn steps(names: &Names, trace: &Trace) -> Vec<PyStep> {
    trace
        .steps
        .iter()
        .map(|step| (tokens(names, &step.current), step.symbol, tokens(names, &step.next)))
        .collect()
}

fn final_states<'py, A: Automaton>(py: Python<'py>, automaton: &A) -> PyResult<Bound<'py, PySet>> {
    let set = PySet::empty(py)?;
    for state in automaton.final_states().iter() {
        set.add(automaton.names().state(state))?;
    }
    Ok(set)
}

/// An Epsilon Non-deterministic Finite Automaton, assembled incrementally.
///
/// The definition is validated each time the automaton is used, so a bad
/// transition surfaces as `ValueError` on the next query.
#[pyclass(name = "EpsilonNFA", module = "enfa.automaton")]
pub struct PyEpsilonNFA {
    builder: EpsilonNFABuilder,
}

impl PyEpsilonNFA {
    fn build(&self) -> PyResult<RustEpsilonNFA> {
        self.builder.build().map_err(value_error)
    }
}

#[pymethods]
impl PyEpsilonNFA {
    #[new]
    fn new() -> Self {
        Self {
            builder: EpsilonNFABuilder::new(),
        }
    }

    fn add_state(&mut self, state: char) {
        self.builder.state(state);
    }

    fn add_symbol(&mut self, symbol: char) {
        self.builder.symbol(symbol);
    }

    fn set_start_state(&mut self, state: char) {
        self.builder.start(state);
    }

    /// Add a final (accepting) state.
    fn add_final_state(&mut self, state: char) {
        self.builder.accept(state);
    }

    /// Add a transition. A `None` symbol adds an epsilon transition.
    #[pyo3(signature = (source, symbol, destination))]
    fn add_transition(&mut self, source: char, symbol: Option<char>, destination: char) {
        match symbol {
            Some(symbol) => self.builder.transition(source, symbol, destination),
            None => self.builder.epsilon(source, destination),
        };
    }

    fn accepts(&self, word: &str) -> PyResult<bool> {
        Ok(self.build()?.accepts(word))
    }

    /// The steps of simulating `word` as `(current, symbol, next)` tuples.
    fn trace(&self, word: &str) -> PyResult<Vec<PyStep>> {
        let nfa = self.build()?;
        Ok(steps(nfa.names(), &simulate(&nfa, word)))
    }

    fn epsilon_closure(&self, states: Vec<char>) -> PyResult<Vec<char>> {
        let nfa = self.build()?;
        let ids = states
            .into_iter()
            .filter_map(|state| nfa.names().state_id(state))
            .collect();
        Ok(tokens(nfa.names(), &nfa.epsilon_closure(&ids)))
    }

    fn is_empty(&self) -> PyResult<bool> {
        Ok(self.build()?.is_empty())
    }

    /// Remove epsilon transitions. Returns an `NFA`.
    fn eliminate(&self) -> PyResult<PyNFA> {
        Ok(PyNFA {
            nfa: self.build()?.to_nfa(),
        })
    }

    #[getter]
    fn final_states<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PySet>> {
        final_states(py, &self.build()?)
    }

    fn table(&self) -> PyResult<String> {
        Ok(TransitionTable::new(&self.build()?, "ε-NFA").to_string())
    }
}

/// An epsilon-free Non-deterministic Finite Automaton.
#[pyclass(name = "NFA", module = "enfa.automaton", frozen)]
pub struct PyNFA {
    nfa: RustNFA,
}

#[pymethods]
impl PyNFA {
    fn accepts(&self, word: &str) -> bool {
        self.nfa.accepts(word)
    }

    fn trace(&self, word: &str) -> Vec<PyStep> {
        steps(self.nfa.names(), &simulate(&self.nfa, word))
    }

    fn is_empty(&self) -> bool {
        self.nfa.is_empty()
    }

    #[getter]
    fn final_states<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PySet>> {
        final_states(py, &self.nfa)
    }

    fn table(&self) -> String {
        TransitionTable::new(&self.nfa, "NFA").to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "NFA(states={}, final={})",
            self.nfa.num_states(),
            format_set(self.nfa.names(), self.nfa.final_states())
        )
    }
}

/// Register the automaton classes.
pub fn automaton(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyEpsilonNFA>()?;
    m.add_class::<PyNFA>()?;
    Ok(())
}
