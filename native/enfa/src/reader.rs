//! Comma-separated automaton definitions.
//!
//! ```text
//! start,0
//! accept,2
//! ,a,b,ε
//! 0,,,1
//! 1,2,,
//! 2,,,
//! ```
//!
//! The header's first cell is a label and is ignored; its optional last
//! column (`ε`, `eps` or `epsilon`) announces the epsilon column. Every row
//! after the header declares one state. A cell lists destination states, one
//! character each; whitespace inside a cell is ignored.

use crate::automaton::{BuildError, EPSILON_TOKEN, EpsilonNFA, EpsilonNFABuilder};
use std::collections::HashSet;
use std::fmt;
use std::io;
use std::path::Path;

pub type DefinitionResult<T> = Result<T, DefinitionError>;

#[derive(Debug)]
pub enum DefinitionError {
    Io(io::Error),
    /// A line does not have the expected shape. `line` is 1-based.
    Malformed { line: usize, message: String },
    /// The rows were well formed but do not describe a valid automaton.
    Build(BuildError),
}

impl DefinitionError {
    fn malformed(line: usize, message: impl Into<String>) -> Self {
        DefinitionError::Malformed {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionError::Io(err) => write!(f, "cannot read definition: {err}"),
            DefinitionError::Malformed { line, message } => write!(f, "line {line}: {message}"),
            DefinitionError::Build(err) => write!(f, "invalid automaton: {err}"),
        }
    }
}

impl std::error::Error for DefinitionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DefinitionError::Io(err) => Some(err),
            DefinitionError::Build(err) => Some(err),
            DefinitionError::Malformed { .. } => None,
        }
    }
}

impl From<io::Error> for DefinitionError {
    fn from(err: io::Error) -> Self {
        DefinitionError::Io(err)
    }
}

impl From<BuildError> for DefinitionError {
    fn from(err: BuildError) -> Self {
        DefinitionError::Build(err)
    }
}

fn is_epsilon_header(cell: &str) -> bool {
    matches!(cell, "eps" | "epsilon") || cell.chars().eq([EPSILON_TOKEN])
}

/// A single-character cell, as required for tokens.
fn token(cell: &str, line: usize, what: &str) -> DefinitionResult<char> {
    let mut chars = cell.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err(DefinitionError::malformed(line, format!("missing {what}"))),
        (Some(_), Some(_)) => Err(DefinitionError::malformed(
            line,
            format!("{what} '{cell}' must be a single character"),
        )),
    }
}

/// The row labelled `label`: its cells after the label.
fn keyed_row<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    label: &str,
) -> DefinitionResult<(usize, Vec<&'a str>)> {
    let (line, text) = lines
        .next()
        .ok_or_else(|| DefinitionError::malformed(0, format!("missing '{label}' row")))?;
    let mut cells = text.split(',').map(str::trim);
    if cells.next() != Some(label) {
        return Err(DefinitionError::malformed(
            line,
            format!("expected a '{label}' row"),
        ));
    }
    Ok((line, cells.collect()))
}

/// Parse a definition held in memory.
pub fn parse_definition(text: &str) -> DefinitionResult<EpsilonNFA> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let mut builder = EpsilonNFABuilder::new();

    let (line, cells) = keyed_row(&mut lines, "start")?;
    match cells.as_slice() {
        [state] => builder.start(token(state, line, "start state")?),
        _ => return Err(DefinitionError::malformed(line, "expected exactly one start state")),
    };

    let (line, cells) = keyed_row(&mut lines, "accept")?;
    for cell in cells.into_iter().filter(|cell| !cell.is_empty()) {
        builder.accept(token(cell, line, "accepting state")?);
    }

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| DefinitionError::malformed(0, "missing alphabet header"))?;
    let mut columns: Vec<&str> = header.split(',').map(str::trim).skip(1).collect();
    let has_epsilon_column = columns.last().is_some_and(|cell| is_epsilon_header(cell));
    if has_epsilon_column {
        columns.pop();
    }
    let mut alphabet = Vec::with_capacity(columns.len());
    for cell in columns {
        alphabet.push(token(cell, header_line, "symbol")?);
    }
    builder.symbols(alphabet.iter().copied());

    let mut seen = HashSet::new();
    for (line, text) in lines {
        let mut cells = text.split(',').map(str::trim);
        let state = token(cells.next().unwrap_or_default(), line, "state")?;
        if !seen.insert(state) {
            return Err(DefinitionError::malformed(
                line,
                format!("state '{state}' is declared twice"),
            ));
        }
        builder.state(state);

        let cells: Vec<&str> = cells.collect();
        let max_cells = alphabet.len() + usize::from(has_epsilon_column);
        if cells.len() > max_cells {
            return Err(DefinitionError::malformed(
                line,
                format!(
                    "expected at most {max_cells} cells after the state, found {}",
                    cells.len()
                ),
            ));
        }
        let (symbol_cells, epsilon_cell) = if cells.len() > alphabet.len() {
            (&cells[..alphabet.len()], Some(cells[alphabet.len()]))
        } else {
            (cells.as_slice(), None)
        };

        for (&symbol, cell) in alphabet.iter().zip(symbol_cells) {
            for destination in cell.chars().filter(|c| !c.is_whitespace()) {
                builder.transition(state, symbol, destination);
            }
        }
        for destination in epsilon_cell
            .unwrap_or_default()
            .chars()
            .filter(|c| !c.is_whitespace())
        {
            builder.epsilon(state, destination);
        }
    }

    Ok(builder.build()?)
}

/// Read and parse a definition file.
pub fn read_definition(path: impl AsRef<Path>) -> DefinitionResult<EpsilonNFA> {
    let text = std::fs::read_to_string(path)?;
    parse_definition(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{Automaton, BuildError, EPSILON, StateRole};

    const SCENARIO: &str = "\
start,0
accept,2
,a,b,ε
0,,,1
1,2,,
2,,,
";

    #[test]
    fn test_parse_scenario() {
        let nfa = parse_definition(SCENARIO).unwrap();
        let names = nfa.names();
        assert_eq!(nfa.num_states(), 3);
        assert_eq!(names.state(nfa.start_state()), '0');
        assert_eq!(nfa.final_states().to_vec(), vec![names.state_id('2').unwrap()]);
        assert_eq!(nfa.destinations(0, EPSILON).unwrap().to_vec(), vec![1]);
        assert_eq!(
            nfa.destinations(1, names.symbol_id('a').unwrap()).unwrap().to_vec(),
            vec![2]
        );
        assert!(nfa.accepts("a"));
        assert!(!nfa.accepts(""));
        assert!(!nfa.accepts("b"));
    }

    #[test]
    fn test_multiple_destinations_comments_and_short_rows() {
        let text = "\
# two ways out of A
start,A
accept,C,B
state,x,eps

A,BC,A
B
C,,  A
";
        let nfa = parse_definition(text).unwrap();
        let names = nfa.names();
        let a = names.state_id('A').unwrap();
        let x = names.symbol_id('x').unwrap();
        assert_eq!(nfa.destinations(a, x).unwrap().len(), 2);
        assert!(nfa.destinations(a, EPSILON).unwrap().contains(a));
        assert!(nfa.destinations(names.state_id('B').unwrap(), x).is_none());
        assert!(
            nfa.destinations(names.state_id('C').unwrap(), EPSILON)
                .unwrap()
                .contains(a)
        );
        assert_eq!(nfa.final_states().len(), 2);
    }

    #[test]
    fn test_header_without_epsilon_column() {
        let text = "start,0\naccept,\n,a\n0,0\n";
        let nfa = parse_definition(text).unwrap();
        assert!(nfa.final_states().is_empty());
        assert!(nfa.destinations(0, EPSILON).is_none());
        assert!(nfa.destinations(0, 0).unwrap().contains(0));

        let err = parse_definition("start,0\naccept,\n,a\n0,0,0\n").unwrap_err();
        assert!(matches!(err, DefinitionError::Malformed { line: 4, .. }), "{err}");
    }

    #[test]
    fn test_undeclared_destination_is_rejected() {
        let err = parse_definition("start,0\naccept,0\n,a,ε\n0,9,\n").unwrap_err();
        assert!(matches!(
            err,
            DefinitionError::Build(BuildError::UndeclaredState {
                state: '9',
                role: StateRole::Destination
            })
        ));
    }

    #[test]
    fn test_missing_rows() {
        let err = parse_definition("").unwrap_err();
        assert!(err.to_string().contains("'start'"), "{err}");

        let err = parse_definition("start,0\n").unwrap_err();
        assert!(err.to_string().contains("'accept'"), "{err}");

        let err = parse_definition("accept,0\nstart,0\n").unwrap_err();
        assert!(matches!(err, DefinitionError::Malformed { line: 1, .. }));

        let err = parse_definition("start,0\naccept,0\n").unwrap_err();
        assert!(err.to_string().contains("alphabet"), "{err}");

        let err = parse_definition("start,0\naccept,0\n,a\n").unwrap_err();
        assert!(matches!(err, DefinitionError::Build(BuildError::NoStates)));
    }

    #[test]
    fn test_malformed_rows() {
        let err = parse_definition("start,0,1\naccept,\n,a\n0\n").unwrap_err();
        assert!(matches!(err, DefinitionError::Malformed { line: 1, .. }));

        let err = parse_definition("start,0\naccept,\n,ab\n0\n").unwrap_err();
        assert!(err.to_string().contains("single character"), "{err}");

        let err = parse_definition("start,0\naccept,\n,a\n0\n0\n").unwrap_err();
        assert!(err.to_string().contains("declared twice"), "{err}");

        let err = parse_definition("start,0\naccept,\n,a\nq0,1\n").unwrap_err();
        assert!(matches!(err, DefinitionError::Malformed { line: 4, .. }));
    }

    #[test]
    fn test_bundled_definition() {
        let nfa = parse_definition(include_str!("../definitions/epsilon_chain.csv")).unwrap();
        let eliminated = nfa.to_nfa();
        for (word, expected) in [("a", true), ("ab", false), ("aba", true), ("bba", true), ("", false)] {
            assert_eq!(nfa.accepts(word), expected, "word {word:?}");
            assert_eq!(eliminated.accepts(word), expected, "word {word:?}");
        }
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_definition("/nonexistent/definition.csv").unwrap_err();
        assert!(matches!(err, DefinitionError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
