//! Finite automata with epsilon transitions.
//!
//! This module provides:
//! - Immutable epsilon-NFA construction through a validating builder
//! - Epsilon closure and symbol moves over state sets
//! - Epsilon elimination into an equivalent NFA over the same states
//! - Word simulation with a step-by-step trace for both automaton forms
//! - PyO3 bindings for Python interoperability (`python` feature)

mod builder;
mod elimination;
mod epsilon_nfa;
mod error;
mod names;
mod nfa;
#[cfg(feature = "python")]
mod python_bindings;
mod simulation;
mod state;
mod symbol;

pub use builder::EpsilonNFABuilder;
pub use elimination::eliminate;
pub use epsilon_nfa::EpsilonNFA;
pub use error::{BuildError, BuildResult, StateRole};
pub use names::Names;
pub use nfa::NFA;
#[cfg(feature = "python")]
pub use python_bindings::automaton;
pub use simulation::{Automaton, Step, Trace, Verdict, simulate};
pub use state::{StateId, StateSet};
pub use symbol::{EPSILON, EPSILON_TOKEN, SymbolId, is_epsilon};
