//! Token type produced by the scanner.
//!
//! A token is an immutable `(kind, text)` pair plus the source location of
//! its first character. Numbers and identifiers keep their exact spelling;
//! nothing is parsed into numeric or atomic values at this layer.

use super::cursor::SourceLocation;
use std::fmt;

/// The six lexeme classes recognized by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    Operator,
    Delimiter,
    StringLiteral,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::Delimiter => "delimiter",
            TokenKind::StringLiteral => "string",
        };
        write!(f, "{}", name)
    }
}

/// A classified lexeme. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::StringLiteral => write!(f, "({}, {:?})", self.kind, self.text),
            _ => write!(f, "({}, '{}')", self.kind, self.text),
        }
    }
}
