//! Grammar symbols for the arithmetic-expression grammar.

use std::fmt;

/// Sentinel terminal marking end of input and the bottom of the parse stack.
pub const END_MARKER: char = '#';

/// The nonterminal alphabet. `ExprTail` and `TermTail` are the "rest"
/// nonterminals absorbing the left recursion of `E → E+T` and `T → T*F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonTerminal {
    Expr,
    ExprTail,
    Term,
    TermTail,
    Factor,
}

impl NonTerminal {
    /// Single-letter spelling used in parse tables and traces.
    pub fn letter(self) -> char {
        match self {
            NonTerminal::Expr => 'E',
            NonTerminal::ExprTail => 'G',
            NonTerminal::Term => 'T',
            NonTerminal::TermTail => 'S',
            NonTerminal::Factor => 'F',
        }
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A parse-stack symbol: a literal terminal character or a nonterminal.
/// Compared by value only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Terminal(char),
    NonTerminal(NonTerminal),
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Terminal(ch) => write!(f, "{}", ch),
            Symbol::NonTerminal(nt) => write!(f, "{}", nt),
        }
    }
}

/// Render a sequence of symbols the way traces print them, e.g. `+TG`.
/// An empty sequence renders as the empty-production sign.
pub fn display_symbols(symbols: &[Symbol]) -> String {
    if symbols.is_empty() {
        return "ε".to_string();
    }
    symbols.iter().map(|s| s.to_string()).collect()
}
