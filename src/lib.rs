//! # Introduction
//!
//! lextrace is the front half of a toy imperative-language toolchain: it
//! turns source text into a stream of classified tokens and, independently,
//! decides whether a symbol string belongs to a small arithmetic grammar,
//! logging every derivation step along the way.  The token stream and the
//! derivation trace are browsed through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipelines
//!
//! ```text
//! Source  → SourceCursor → Scanner       → Token stream
//! Symbols → ParseTable   → ParserSession → Verdict + Trace
//! ```
//!
//! 1. [`scanner`] — hand-built tokenizer: character-class dispatch with
//!    one-character pushback over identifiers/keywords, numbers, operators,
//!    delimiters, and string literals.
//! 2. [`parser`] — explicit-stack LL(1) predictive parser over
//!    `i + - * / ( ) #`, plus a recursive-descent recognizer for
//!    cross-checking verdicts.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! The two pipelines share no runtime state: the scanner never feeds the
//! parser, and each `Scanner` or `ParserSession` owns its cursor or stack
//! exclusively.

pub mod parser;
pub mod scanner;
pub mod ui;
