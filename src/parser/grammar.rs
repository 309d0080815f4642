//! The arithmetic-expression grammar and its LL(1) parse table.
//!
//! ```text
//! E → TG
//! G → +TG | -TG | ε
//! T → FS
//! S → *FS | /FS | ε
//! F → i | (E)
//! ```
//!
//! Left recursion is already eliminated, so the table has exactly one
//! production per reachable `(nonterminal, terminal)` cell. The table is
//! built once at startup and never mutated; an absent cell is a syntax
//! error, never an epsilon fallback.

use super::symbol::NonTerminal::{self, Expr, ExprTail, Factor, Term, TermTail};
use super::symbol::Symbol;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

const E: Symbol = Symbol::NonTerminal(Expr);
const G: Symbol = Symbol::NonTerminal(ExprTail);
const T: Symbol = Symbol::NonTerminal(Term);
const S: Symbol = Symbol::NonTerminal(TermTail);
const F: Symbol = Symbol::NonTerminal(Factor);

/// Production bodies, leftmost symbol first. The empty slice is the empty
/// derivation.
const TG: &[Symbol] = &[T, G];
const PLUS_TG: &[Symbol] = &[Symbol::Terminal('+'), T, G];
const MINUS_TG: &[Symbol] = &[Symbol::Terminal('-'), T, G];
const FS: &[Symbol] = &[F, S];
const STAR_FS: &[Symbol] = &[Symbol::Terminal('*'), F, S];
const SLASH_FS: &[Symbol] = &[Symbol::Terminal('/'), F, S];
const IDENT: &[Symbol] = &[Symbol::Terminal('i')];
const PAREN_E: &[Symbol] = &[Symbol::Terminal('('), E, Symbol::Terminal(')')];
const EMPTY: &[Symbol] = &[];

static PARSE_TABLE: Lazy<FxHashMap<(NonTerminal, char), &'static [Symbol]>> = Lazy::new(|| {
    let mut table: FxHashMap<(NonTerminal, char), &'static [Symbol]> = FxHashMap::default();

    table.insert((Expr, 'i'), TG);
    table.insert((Expr, '('), TG);

    table.insert((ExprTail, '+'), PLUS_TG);
    table.insert((ExprTail, '-'), MINUS_TG);
    table.insert((ExprTail, ')'), EMPTY);
    table.insert((ExprTail, '#'), EMPTY);

    table.insert((Term, 'i'), FS);
    table.insert((Term, '('), FS);

    table.insert((TermTail, '*'), STAR_FS);
    table.insert((TermTail, '/'), SLASH_FS);
    table.insert((TermTail, '+'), EMPTY);
    table.insert((TermTail, '-'), EMPTY);
    table.insert((TermTail, ')'), EMPTY);
    table.insert((TermTail, '#'), EMPTY);

    table.insert((Factor, 'i'), IDENT);
    table.insert((Factor, '('), PAREN_E);

    table
});

/// Look up the production body for a nonterminal on a lookahead terminal.
/// `None` means no applicable production — a syntax error.
pub fn production(head: NonTerminal, terminal: char) -> Option<&'static [Symbol]> {
    PARSE_TABLE.get(&(head, terminal)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::symbol::display_symbols;

    #[test]
    fn test_reachable_cells() {
        assert_eq!(display_symbols(production(Expr, 'i').unwrap()), "TG");
        assert_eq!(display_symbols(production(ExprTail, '+').unwrap()), "+TG");
        assert_eq!(display_symbols(production(ExprTail, '#').unwrap()), "ε");
        assert_eq!(display_symbols(production(Factor, '(').unwrap()), "(E)");
    }

    #[test]
    fn test_absent_cells_are_errors() {
        assert!(production(Expr, '+').is_none());
        assert!(production(Factor, '#').is_none());
        assert!(production(Term, '#').is_none());
        assert!(production(Expr, 'x').is_none());
    }

    #[test]
    fn test_table_size() {
        // 2 + 4 + 2 + 6 + 2 reachable cells.
        assert_eq!(PARSE_TABLE.len(), 16);
    }
}
