use std::fmt;

pub type BuildResult<T> = Result<T, BuildError>;

/// Why an automaton could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The automaton declares no states at all.
    NoStates,
    /// No start state was given.
    MissingStart,
    /// A start, accepting or transition endpoint names an undeclared state.
    UndeclaredState { state: char, role: StateRole },
    /// A transition uses a symbol that is not in the alphabet.
    UndeclaredSymbol(char),
    /// The reserved epsilon token was declared as an alphabet symbol.
    ReservedSymbol(char),
    /// A symbol was declared twice.
    DuplicateSymbol(char),
}

/// Where an undeclared state was referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateRole {
    Start,
    Accepting,
    Source,
    Destination,
}

impl fmt::Display for StateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StateRole::Start => "start state",
            StateRole::Accepting => "accepting state",
            StateRole::Source => "transition source",
            StateRole::Destination => "transition destination",
        })
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::NoStates => write!(f, "automaton has no states"),
            BuildError::MissingStart => write!(f, "automaton has no start state"),
            BuildError::UndeclaredState { state, role } => {
                write!(f, "{role} '{state}' is not a declared state")
            }
            BuildError::UndeclaredSymbol(symbol) => {
                write!(f, "symbol '{symbol}' is not in the alphabet")
            }
            BuildError::ReservedSymbol(symbol) => {
                write!(f, "'{symbol}' is reserved for epsilon and cannot be an alphabet symbol")
            }
            BuildError::DuplicateSymbol(symbol) => {
                write!(f, "symbol '{symbol}' is declared more than once")
            }
        }
    }
}

impl std::error::Error for BuildError {}
