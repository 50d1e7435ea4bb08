use lispet::{Value, list, parse, parse_all};
use proptest::prelude::*;

// ============================================================================
// Strategies for Generating Expressions
// ============================================================================

/// Symbols that cannot collide with numeric grammar or delimiters.
fn symbol_text() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9?!*+<>=-]{0,7}"
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-1_000_000i64..1_000_000i64).prop_map(|n| Value::Number(n as f64)),
        symbol_text().prop_map(|s| Value::symbol(&s)),
    ]
}

/// Arbitrary nested expressions, lists included.
fn expr() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 48, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(list)
    })
}

// ============================================================================
// Reader Properties
// ============================================================================

proptest! {
    // Printing any expression and reading it back yields the same tree:
    // the reader accepts everything the printer can emit.
    #[test]
    fn printed_expressions_read_back_identically(e in expr()) {
        let text = e.to_string();
        prop_assert_eq!(parse(&text).unwrap(), e);
    }

    // A balanced program is never silently dropped: every printed
    // expression comes back, in order.
    #[test]
    fn parse_all_never_drops_expressions(exprs in prop::collection::vec(expr(), 0..5)) {
        let text = exprs
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let reread = parse_all(&text).unwrap();
        prop_assert_eq!(reread, exprs);
    }

    // Arbitrary printable input either parses or fails with a syntax
    // error; the reader never panics.
    #[test]
    fn reader_never_panics(input in "[ -~]{0,60}") {
        let _ = parse(&input);
        let _ = parse_all(&input);
    }
}
