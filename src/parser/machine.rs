//! Table-driven predictive parser (pushdown-automaton simulation).
//!
//! A [`ParserSession`] owns its input, a stack initialized to
//! `[#, E]` (end marker at the bottom), and an append-only derivation trace.
//! [`ParserSession::parse`] rewrites the stack against the static parse
//! table until the input is accepted or an error rejects it. The trace
//! records, for every completed step, the stack and remaining input *before*
//! the action together with the action taken; a failing step records
//! nothing, so the trace up to the failure stays available for display.

use super::grammar;
use super::symbol::{display_symbols, NonTerminal, Symbol, END_MARKER};
use std::fmt;

/// Outcome of a parse: the input either belongs to the language or it does
/// not. No finer-grained error code is surfaced; the trace's last entry is
/// the only additional diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "accepted"),
            Verdict::Rejected => write!(f, "rejected"),
        }
    }
}

/// The action a trace step records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceAction {
    /// Stack-top terminal matched the current input symbol.
    Match(char),
    /// A production was applied to the stack-top nonterminal.
    Apply {
        head: NonTerminal,
        body: &'static [Symbol],
    },
    /// Stack and input both reached the end marker.
    Accept,
}

impl fmt::Display for TraceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceAction::Match(ch) => write!(f, "match {}", ch),
            TraceAction::Apply { head, body } => {
                write!(f, "{}->{}", head, display_symbols(body))
            }
            TraceAction::Accept => write!(f, "accept"),
        }
    }
}

/// One derivation step: the stack and unconsumed input as they were when the
/// step began, plus the action performed. Immutable once appended.
#[derive(Debug, Clone)]
pub struct TraceEntry {
    pub step: usize,
    pub stack: Vec<Symbol>,
    pub remaining: String,
    pub action: TraceAction,
}

impl TraceEntry {
    /// Stack rendered bottom-to-top, e.g. `#GT+`.
    pub fn stack_display(&self) -> String {
        self.stack.iter().map(|s| s.to_string()).collect()
    }
}

/// A single-use predictive-parse run over one symbol string.
pub struct ParserSession {
    input: Vec<char>,
    pos: usize,
    stack: Vec<Symbol>,
    trace: Vec<TraceEntry>,
    step: usize,
}

impl ParserSession {
    /// Create a session for the given symbol string. The string must end
    /// with `#` to stand any chance of acceptance.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
            stack: vec![
                Symbol::Terminal(END_MARKER),
                Symbol::NonTerminal(NonTerminal::Expr),
            ],
            trace: Vec::new(),
            step: 1,
        }
    }

    /// Run the stack machine to a verdict. Input without a trailing `#` is
    /// rejected up front, before the machine runs, with an empty trace.
    pub fn parse(&mut self) -> Verdict {
        if self.input.last() != Some(&END_MARKER) {
            return Verdict::Rejected;
        }

        while self.stack.len() > 1 {
            let top = self.stack[self.stack.len() - 1];
            let current = match self.current() {
                Some(ch) => ch,
                // Input exhausted while the stack still holds work.
                None => return Verdict::Rejected,
            };

            let stack_before = self.stack.clone();
            let remaining: String = self.input[self.pos..].iter().collect();

            match top {
                Symbol::Terminal(expected) => {
                    if expected != current {
                        return Verdict::Rejected;
                    }
                    self.stack.pop();
                    self.pos += 1;
                    if self.at_accept(current) {
                        self.record(stack_before, remaining, TraceAction::Accept);
                        return Verdict::Accepted;
                    }
                    self.record(stack_before, remaining, TraceAction::Match(expected));
                }
                Symbol::NonTerminal(head) => {
                    let body = match grammar::production(head, current) {
                        Some(body) => body,
                        // No applicable production for this lookahead.
                        None => return Verdict::Rejected,
                    };
                    self.stack.pop();
                    for &symbol in body.iter().rev() {
                        self.stack.push(symbol);
                    }
                    if self.at_accept(current) {
                        self.record(stack_before, remaining, TraceAction::Accept);
                        return Verdict::Accepted;
                    }
                    self.record(stack_before, remaining, TraceAction::Apply { head, body });
                }
            }
        }

        // Stack collapsed to the end marker alone without an accept step;
        // accept only if the last consumed symbol was the end marker.
        if self.pos > 0 && self.input[self.pos - 1] == END_MARKER {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }

    /// The derivation steps recorded so far, in step order.
    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    fn current(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    /// Termination test: stack is exactly `[#]` and the symbol just
    /// consumed was the end marker.
    fn at_accept(&self, current: char) -> bool {
        self.stack.len() == 1
            && self.stack[0] == Symbol::Terminal(END_MARKER)
            && current == END_MARKER
    }

    fn record(&mut self, stack: Vec<Symbol>, remaining: String, action: TraceAction) {
        self.trace.push(TraceEntry {
            step: self.step,
            stack,
            remaining,
            action,
        });
        self.step += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (Verdict, Vec<TraceEntry>) {
        let mut session = ParserSession::new(input);
        let verdict = session.parse();
        (verdict, session.trace().to_vec())
    }

    #[test]
    fn test_accepts_sum_of_products() {
        let (verdict, trace) = run("i+i*i#");

        assert_eq!(verdict, Verdict::Accepted);
        assert_eq!(trace[0].step, 1);
        assert_eq!(trace[0].stack_display(), "#E");
        assert_eq!(trace[0].remaining, "i+i*i#");
        assert_eq!(trace.last().unwrap().action, TraceAction::Accept);
    }

    #[test]
    fn test_accepts_single_identifier() {
        let (verdict, trace) = run("i#");
        assert_eq!(verdict, Verdict::Accepted);
        // E→TG, T→FS, F→i, match i, S→ε, then G→ε coincides with accept.
        assert_eq!(trace.len(), 6);
        assert_eq!(trace.last().unwrap().action, TraceAction::Accept);
        assert_eq!(trace.last().unwrap().stack_display(), "#G");
    }

    #[test]
    fn test_accepts_parenthesized_expression() {
        assert_eq!(run("(i+i)*i#").0, Verdict::Accepted);
        assert_eq!(run("(i)#").0, Verdict::Accepted);
    }

    #[test]
    fn test_rejects_dangling_operator() {
        let (verdict, trace) = run("i+#");
        assert_eq!(verdict, Verdict::Rejected);
        // The failing lookup appends nothing; earlier steps survive.
        assert!(!trace.is_empty());
        assert_eq!(
            trace.last().unwrap().action,
            TraceAction::Match('+'),
            "trace should end at the + match preceding the failure"
        );
    }

    #[test]
    fn test_rejects_unbalanced_parenthesis() {
        assert_eq!(run("(i+i#").0, Verdict::Rejected);
    }

    #[test]
    fn test_rejects_missing_end_marker_without_trace() {
        let (verdict, trace) = run("i+i");
        assert_eq!(verdict, Verdict::Rejected);
        assert!(trace.is_empty());
    }

    #[test]
    fn test_rejects_empty_input() {
        let (verdict, trace) = run("");
        assert_eq!(verdict, Verdict::Rejected);
        assert!(trace.is_empty());
    }

    #[test]
    fn test_rejects_foreign_symbol() {
        assert_eq!(run("x#").0, Verdict::Rejected);
    }

    #[test]
    fn test_rejects_lone_end_marker() {
        // Stack top E has no production on '#'.
        let (verdict, trace) = run("#");
        assert_eq!(verdict, Verdict::Rejected);
        assert!(trace.is_empty());
    }

    #[test]
    fn test_trace_is_reproducible() {
        let (_, first) = run("i*(i-i)#");
        let (_, second) = run("i*(i-i)#");

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.stack_display(), b.stack_display());
            assert_eq!(a.remaining, b.remaining);
            assert_eq!(a.action, b.action);
        }
    }

    #[test]
    fn test_steps_are_consecutive() {
        let (_, trace) = run("i+i*i#");
        for (index, entry) in trace.iter().enumerate() {
            assert_eq!(entry.step, index + 1);
        }
    }
}
