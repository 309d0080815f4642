//! Lexical scanner for the toy language
//!
//! This module converts raw source text into a forward-only stream of
//! classified tokens:
//! - [`cursor`]: character cursor with one-slot pushback
//! - [`vocab`]: static keyword/operator/delimiter vocabulary
//! - [`scanner`]: the tokenizer itself (whitespace skipping, class dispatch,
//!   four sub-recognizers)
//! - [`token`]: token kinds and values
//!
//! # Lexeme classes
//!
//! Identifiers/keywords, numbers (optional single decimal point), operators
//! (with `<= >= == !=` read as pairs), delimiters, and double-quoted string
//! literals with `\n \t \" \\` escapes. No comments, no character literals,
//! no exponents.
//!
//! # Implementation
//!
//! Hand-written character-class dispatch. Each sub-recognizer over-reads by
//! exactly one character and pushes it back, so no lookahead buffer beyond
//! the cursor's single pushback slot is required.

pub mod cursor;
pub mod scanner;
pub mod token;
pub mod vocab;

pub use cursor::{SourceCursor, SourceLocation};
pub use scanner::{LexError, Scanner};
pub use token::{Token, TokenKind};
