//! Membership checking for the arithmetic-expression grammar
//!
//! This module decides whether a string of terminal symbols (over
//! `i + - * / ( )`, terminated by `#`) belongs to the language of the toy
//! grammar, and produces a full derivation trace while doing so:
//! - [`symbol`]: terminal/nonterminal symbol types
//! - [`grammar`]: the productions and the static LL(1) parse table
//! - [`machine`]: the explicit-stack predictive parser and its trace
//! - [`descent`]: a recursive-descent recognizer over the same grammar
//!   (boolean verdict only, kept for cross-checking)
//!
//! # Parser Implementation
//!
//! Classic table-driven LL(1) simulation: the stack starts as `[#, E]` and
//! is rewritten against the table one step at a time. No AST or parse tree
//! is built; the linear trace of steps is the only artifact besides the
//! verdict.

pub mod descent;
pub mod grammar;
pub mod machine;
pub mod symbol;

pub use machine::{ParserSession, TraceAction, TraceEntry, Verdict};
pub use symbol::{NonTerminal, Symbol, END_MARKER};
