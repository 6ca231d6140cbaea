pub mod automaton;
pub mod reader;
pub mod render;


pub use automaton::{
    Automaton, BuildError, EpsilonNFA, EpsilonNFABuilder, NFA, Trace, Verdict, eliminate, simulate,
};
pub use reader::{DefinitionError, parse_definition, read_definition};
pub use render::{TraceTable, TransitionTable, format_set};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn enfa(m: &Bound<'_, PyModule>) -> PyResult<()> {
    automaton::automaton(m)
}
