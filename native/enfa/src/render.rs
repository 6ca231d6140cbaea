//! Plain-text tables for automata and simulation traces.

use crate::automaton::{Automaton, EPSILON, Names, StateSet, Trace};
use std::fmt;

const MIN_COLUMN: usize = 8;
const GAP: usize = 2;

/// `-` for the empty set, otherwise the state tokens sorted and bracketed,
/// e.g. `[0, 1]`.
pub fn format_set(names: &Names, states: &StateSet) -> String {
    if states.is_empty() {
        return "-".to_owned();
    }
    let mut tokens: Vec<char> = states.iter().map(|id| names.state(id)).collect();
    tokens.sort_unstable();
    let body = tokens
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{body}]")
}

fn column_width<'a>(cells: impl IntoIterator<Item = &'a String>) -> usize {
    cells
        .into_iter()
        .map(|cell| cell.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_COLUMN)
        + GAP
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], width: usize) -> fmt::Result {
    let (last, init) = match cells.split_last() {
        Some(split) => split,
        None => return writeln!(f),
    };
    for cell in init {
        write!(f, "{cell:<width$}")?;
    }
    writeln!(f, "{last}")
}

/// The transition table of an automaton: one row per state, one column per
/// symbol, plus an `ε` column when the automaton can have epsilon moves.
///
/// The start state is marked `→` and accepting states `*`.
pub struct TransitionTable<'a, A> {
    automaton: &'a A,
    title: &'a str,
}

impl<'a, A: Automaton> TransitionTable<'a, A> {
    pub fn new(automaton: &'a A, title: &'a str) -> Self {
        Self { automaton, title }
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let automaton = self.automaton;
        let names = automaton.names();
        let mut columns = names.sorted_symbols();
        if automaton.has_epsilon_transitions() {
            columns.push(EPSILON);
        }

        let mut header = vec!["State".to_owned()];
        header.extend(columns.iter().map(|&symbol| names.symbol(symbol).to_string()));

        let mut rows = vec![header];
        for state in names.sorted_states() {
            let start = if state == automaton.start_state() { '→' } else { ' ' };
            let accepting = if automaton.final_states().contains(state) { '*' } else { ' ' };
            let mut row = vec![format!("{start}{accepting} {}", names.state(state))];
            row.extend(columns.iter().map(|&symbol| {
                automaton
                    .destinations(state, symbol)
                    .map_or_else(|| "-".to_owned(), |dests| format_set(names, dests))
            }));
            rows.push(row);
        }
        rows
    }
}

impl<A: Automaton> fmt::Display for TransitionTable<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        let width = column_width(rows.iter().flatten());
        writeln!(f, "{}", self.title)?;
        for row in &rows {
            write_row(f, row, width)?;
        }
        Ok(())
    }
}

/// A simulation trace: one row per consumed symbol, a closing row for the
/// final configuration, then the verdict.
///
/// The closing row is labelled `ε` when a final epsilon pass ran and `-`
/// otherwise.
pub struct TraceTable<'a> {
    trace: &'a Trace,
    names: &'a Names,
}

impl<'a> TraceTable<'a> {
    pub fn new(trace: &'a Trace, names: &'a Names) -> Self {
        Self { trace, names }
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let names = self.names;
        let trace = self.trace;
        let mut rows = vec![vec![
            "Current".to_owned(),
            "Symbol".to_owned(),
            "Next".to_owned(),
        ]];
        rows.extend(trace.steps.iter().map(|step| {
            vec![
                format_set(names, &step.current),
                step.symbol.to_string(),
                format_set(names, &step.next),
            ]
        }));

        let before = trace
            .configurations()
            .last()
            .unwrap_or(&trace.initial_configuration);
        let label = if trace.epsilon_pass { names.symbol(EPSILON) } else { '-' };
        rows.push(vec![
            format_set(names, before),
            label.to_string(),
            format_set(names, &trace.final_configuration),
        ]);
        rows
    }
}

impl fmt::Display for TraceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        let width = column_width(rows.iter().flatten());
        writeln!(f, "Trace of {:?}", self.trace.word)?;
        for row in &rows {
            write_row(f, row, width)?;
        }
        writeln!(f, "{}", self.trace.verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{EpsilonNFA, EpsilonNFABuilder, simulate};

    fn scenario() -> EpsilonNFA {
        EpsilonNFABuilder::new()
            .states("210".chars())
            .symbols(['b', 'a'])
            .start('0')
            .accept('2')
            .epsilon('0', '1')
            .transition('1', 'a', '2')
            .transition('1', 'a', '0')
            .build()
            .unwrap()
    }

    fn squash(text: &str) -> Vec<String> {
        text.lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect()
    }

    #[test]
    fn test_format_set_sorts_by_token() {
        let nfa = scenario();
        let names = nfa.names();
        // declaration order is 2, 1, 0
        let all: StateSet = [0, 1, 2].into_iter().collect();
        assert_eq!(format_set(names, &all), "[0, 1, 2]");
        assert_eq!(format_set(names, &StateSet::default()), "-");
    }

    #[test]
    fn test_epsilon_nfa_table() {
        let nfa = scenario();
        let text = TransitionTable::new(&nfa, "ε-NFA").to_string();
        assert_eq!(
            squash(&text),
            vec![
                "ε-NFA",
                "State a b ε",
                "→ 0 - - [1]",
                "1 [0, 2] - -",
                "* 2 - - -",
            ]
        );
    }

    #[test]
    fn test_nfa_table_has_no_epsilon_column() {
        let nfa = scenario().to_nfa();
        let text = TransitionTable::new(&nfa, "NFA").to_string();
        let lines = squash(&text);
        assert_eq!(lines[1], "State a b");
        assert_eq!(lines[2], "→ 0 [0, 1, 2] -");
        assert_eq!(lines[4], "* 2 - -");
    }

    #[test]
    fn test_columns_are_aligned() {
        let nfa = scenario();
        let text = TransitionTable::new(&nfa, "t").to_string();
        let width = MIN_COLUMN + GAP;
        for line in text.lines().skip(1) {
            let chars: Vec<char> = line.chars().collect();
            assert_ne!(chars[width], ' ', "line {line:?}");
            assert_eq!(chars[width - 1], ' ', "line {line:?}");
        }
        let header = text.lines().nth(1).unwrap();
        assert_eq!(header[..width].trim_end(), "State");
    }

    #[test]
    fn test_trace_table() {
        let nfa = scenario();
        let trace = simulate(&nfa, "ab");
        let text = TraceTable::new(&trace, nfa.names()).to_string();
        assert_eq!(
            squash(&text),
            vec![
                "Trace of \"ab\"",
                "Current Symbol Next",
                "[0, 1] a [0, 1, 2]",
                "[0, 1, 2] b -",
                "- ε -",
                "word rejected",
            ]
        );
    }

    #[test]
    fn test_trace_table_for_nfa_closes_with_dash() {
        let nfa = scenario().to_nfa();
        let trace = simulate(&nfa, "a");
        let text = TraceTable::new(&trace, nfa.names()).to_string();
        let lines = squash(&text);
        assert_eq!(lines[2], "[0] a [0, 1, 2]");
        assert_eq!(lines[3], "[0, 1, 2] - [0, 1, 2]");
        assert_eq!(lines[4], "word accepted");
    }
}
