//! Static lexical vocabulary: reserved words, operator spellings, and
//! delimiter characters.
//!
//! The three sets fix the closed vocabulary of the toy language. They are
//! built once, process-wide, and only ever read during scanning.
//!
//! The operator set deliberately declares more multi-character spellings
//! (`++`, `+=`, `&&`, `->`, `<<`, ...) than the scanner's dispatch can reach:
//! only `<=`, `>=`, `==` and `!=` are special-cased when reading an operator,
//! so `++` lexes as two `+` tokens. The declared-but-unreachable spellings
//! are kept as-is rather than wired in.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// Reserved words of the toy language.
pub static KEYWORDS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "main", "printf", "if", "int", "for", "while", "do", "return", "break", "continue",
    ]
    .into_iter()
    .collect()
});

/// Every operator spelling in the vocabulary, single- and multi-character.
pub static OPERATORS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "+", "-", "*", "/", "=", "++", "--", "%", ">", "<", ">=", "<=", "==", "+=", "-=", "!=",
        "/=", "&&", "||", "!", "->", ".", "&", "~", "<<", ">>",
    ]
    .into_iter()
    .collect()
});

/// Single-character delimiters, excluding the string quote marker (handled
/// before delimiter dispatch).
pub static DELIMITERS: Lazy<FxHashSet<char>> =
    Lazy::new(|| ['(', ')', '{', '}', '[', ']', ';', ','].into_iter().collect());

/// Characters that can begin an operator lexeme in the scanner's dispatch.
const OPERATOR_START: &str = "+-*/<>=!%";

pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(text)
}

pub fn is_operator_start(ch: char) -> bool {
    OPERATOR_START.contains(ch)
}

pub fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_closed_vocabulary() {
        assert!(is_keyword("while"));
        assert!(is_keyword("printf"));
        // "else" is not reserved in the toy language
        assert!(!is_keyword("else"));
    }

    #[test]
    fn test_declared_operators_include_unreachable_spellings() {
        for op in ["++", "--", "+=", "-=", "/=", "&&", "||", "->", "<<", ">>"] {
            assert!(OPERATORS.contains(op), "missing {}", op);
        }
    }

    #[test]
    fn test_quote_is_not_a_delimiter() {
        assert!(!is_delimiter('"'));
        assert!(is_delimiter(';'));
    }
}
