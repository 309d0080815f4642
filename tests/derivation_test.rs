// Integration tests for the predictive parser and its derivation trace

use lextrace::parser::descent;
use lextrace::parser::{ParserSession, TraceAction, Verdict};

fn parse(input: &str) -> (Verdict, usize) {
    let mut session = ParserSession::new(input);
    let verdict = session.parse();
    (verdict, session.trace().len())
}

#[test]
fn test_accepts_sum_of_products_with_full_trace() {
    let mut session = ParserSession::new("i+i*i#");
    let verdict = session.parse();
    let trace = session.trace();

    assert_eq!(verdict, Verdict::Accepted);

    let first = &trace[0];
    assert_eq!(first.step, 1);
    assert_eq!(first.stack_display(), "#E");
    assert_eq!(first.remaining, "i+i*i#");

    let last = trace.last().unwrap();
    assert_eq!(last.action, TraceAction::Accept);

    // Every step keeps the end marker at the stack bottom.
    for entry in trace {
        assert!(entry.stack_display().starts_with('#'));
    }
}

#[test]
fn test_rejects_dangling_operator() {
    let (verdict, steps) = parse("i+#");
    assert_eq!(verdict, Verdict::Rejected);
    assert!(steps > 0, "steps before the failure stay recorded");
}

#[test]
fn test_rejects_unbalanced_parenthesis() {
    let (verdict, _) = parse("(i+i#");
    assert_eq!(verdict, Verdict::Rejected);
}

#[test]
fn test_rejects_input_without_end_marker_and_records_nothing() {
    for input in ["i+i", "i", "(i)", ""] {
        let (verdict, steps) = parse(input);
        assert_eq!(verdict, Verdict::Rejected, "{:?}", input);
        assert_eq!(steps, 0, "{:?} must not reach the stack machine", input);
    }
}

#[test]
fn test_nested_parentheses() {
    assert_eq!(parse("((i))#").0, Verdict::Accepted);
    assert_eq!(parse("(i*(i+i))/i#").0, Verdict::Accepted);
    assert_eq!(parse("((i)#").0, Verdict::Rejected);
}

#[test]
fn test_descent_recognizer_agrees_with_stack_machine() {
    let cases = [
        "i#", "i+i*i#", "i+#", "(i+i#", "(i+i)*i#", "i*i/i-i#", "#", "i+i", "ii#", "i)#",
    ];

    for input in cases {
        let (verdict, _) = parse(input);
        let expected = verdict == Verdict::Accepted;
        assert_eq!(
            descent::recognize(input),
            expected,
            "recognizers disagree on {:?}",
            input
        );
    }
}

#[test]
fn test_trace_renders_original_table_shape() {
    // i#: E→TG, T→FS, F→i, match i, S→ε, accept (on G→ε)
    let mut session = ParserSession::new("i#");
    session.parse();

    let rendered: Vec<String> = session
        .trace()
        .iter()
        .map(|e| format!("{}\t{}\t{}\t{}", e.step, e.stack_display(), e.remaining, e.action))
        .collect();

    assert_eq!(
        rendered,
        vec![
            "1\t#E\ti#\tE->TG",
            "2\t#GT\ti#\tT->FS",
            "3\t#GSF\ti#\tF->i",
            "4\t#GSi\ti#\tmatch i",
            "5\t#GS\t#\tS->ε",
            "6\t#G\t#\taccept",
        ]
    );
}
