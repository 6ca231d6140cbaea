//! Symbol types for automata transitions.

/// A symbol identifier: the declaration index of the symbol's token.
/// The special value `EPSILON` marks a silent transition.
pub type SymbolId = u32;

/// Special symbol ID representing epsilon (empty) transitions.
pub const EPSILON: SymbolId = u32::MAX;

/// The reserved token for epsilon. It can never be declared as a symbol.
pub const EPSILON_TOKEN: char = 'ε';

#[inline]
pub fn is_epsilon(symbol: SymbolId) -> bool {
    symbol == EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsilon() {
        assert!(is_epsilon(EPSILON));
        assert!(!is_epsilon(0));
        assert!(!is_epsilon(100));
    }
}
