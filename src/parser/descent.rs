//! Recursive-descent recognizer for the same expression grammar.
//!
//! Strictly weaker than the table-driven machine: boolean accept/reject
//! only, no derivation trace, no lexical layer. One method per nonterminal
//! of the pre-elimination grammar (`expr`, `term`, `factor`), with the tail
//! loops standing in for the "rest" nonterminals.

use super::symbol::END_MARKER;

/// Decide membership of `input` (which must end with `#`) by recursive
/// descent.
pub fn recognize(input: &str) -> bool {
    if !input.ends_with(END_MARKER) {
        return false;
    }

    let mut parser = Descent::new(input);
    parser.expr() && parser.current() == Some(END_MARKER)
}

struct Descent {
    input: Vec<char>,
    pos: usize,
}

impl Descent {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    fn current(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// expr: term (('+' | '-') term)*
    fn expr(&mut self) -> bool {
        if !self.term() {
            return false;
        }
        while matches!(self.current(), Some('+') | Some('-')) {
            self.advance();
            if !self.term() {
                return false;
            }
        }
        true
    }

    /// term: factor (('*' | '/') factor)*
    fn term(&mut self) -> bool {
        if !self.factor() {
            return false;
        }
        while matches!(self.current(), Some('*') | Some('/')) {
            self.advance();
            if !self.factor() {
                return false;
            }
        }
        true
    }

    /// factor: 'i' | '(' expr ')'
    fn factor(&mut self) -> bool {
        match self.current() {
            Some('i') => {
                self.advance();
                true
            }
            Some('(') => {
                self.advance();
                if !self.expr() {
                    return false;
                }
                if self.current() == Some(')') {
                    self.advance();
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_strings() {
        assert!(recognize("i#"));
        assert!(recognize("i+i*i#"));
        assert!(recognize("(i+i)*i#"));
        assert!(recognize("i/(i-i)#"));
    }

    #[test]
    fn test_rejects_invalid_strings() {
        assert!(!recognize("i+#"));
        assert!(!recognize("(i+i#"));
        assert!(!recognize("i+i"));
        assert!(!recognize("#"));
        assert!(!recognize(""));
    }

    #[test]
    fn test_rejects_trailing_garbage() {
        // expr succeeds but stops before the ')', so the end-marker check
        // fails.
        assert!(!recognize("i)i#"));
    }
}
