use lispet::{Environment, Error, Value, eval, parse, standard_env};

// ============================================================================
// Helper Functions
// ============================================================================

fn eval_expr(expr: &str) -> String {
    let env = standard_env();
    match parse(expr).and_then(|parsed| eval(parsed, &env)) {
        Ok(result) => result.to_string(),
        Err(e) => format!("Error: {e}"),
    }
}

/// Evaluate a sequence of expressions in one shared environment and return
/// the last result.
fn eval_program(env: &Environment, exprs: &[&str]) -> Result<Value, Error> {
    let mut last = Value::Unspecified;
    for src in exprs {
        last = eval(parse(src)?, env)?;
    }
    Ok(last)
}

// ============================================================================
// Special Forms
// ============================================================================

#[test]
fn test_quote_returns_argument_unevaluated() {
    assert_eq!(eval_expr("(quote a)"), "a");
    assert_eq!(eval_expr("(quote (1 2 3))"), "(1 2 3)");
    // Zero evaluation: the list (+ 1 2) comes back verbatim, not 3
    assert_eq!(eval_expr("(quote (+ 1 2))"), "(+ 1 2)");
}

#[test]
fn test_if_list_truthiness() {
    // The empty list is falsy, any non-empty list is truthy
    assert_eq!(eval_expr("(if (quote ()) 1 2)"), "2");
    assert_eq!(eval_expr("(if (quote (1)) 1 2)"), "1");
}

#[test]
fn test_if_number_and_symbol_truthiness() {
    assert_eq!(eval_expr("(if 0 1 2)"), "2");
    assert_eq!(eval_expr("(if 7 1 2)"), "1");
    assert_eq!(eval_expr("(if (quote x) 1 2)"), "1");
    assert_eq!(eval_expr("(if (> 1 2) 1 2)"), "2");
}

#[test]
fn test_if_does_not_evaluate_untaken_branch() {
    // The alternative references an unbound symbol but is never reached
    assert_eq!(eval_expr("(if 1 42 (boom))"), "42");
}

#[test]
fn test_define_returns_no_printable_value() {
    assert_eq!(eval_expr("(define x 10)"), "");
    let env = standard_env();
    let result = eval_program(&env, &["(define x 10)"]).unwrap();
    assert_eq!(result, Value::Unspecified);
}

#[test]
fn test_define_then_use() {
    let env = standard_env();
    let result = eval_program(&env, &["(define x 10)", "(+ x 5)"]).unwrap();
    assert_eq!(result, Value::Number(15.0));
}

#[test]
fn test_define_overwrites_in_place() {
    let env = standard_env();
    let result = eval_program(&env, &["(define x 1)", "(define x 2)", "x"]).unwrap();
    assert_eq!(result, Value::Number(2.0));
}

#[test]
fn test_set_mutates_nearest_defining_frame() {
    let env = standard_env();
    let result = eval_program(
        &env,
        &[
            "(define n 0)",
            "(define bump (lambda () (set! n (+ n 1))))",
            "(bump)",
            "(bump)",
            "n",
        ],
    )
    .unwrap();
    assert_eq!(result, Value::Number(2.0));
}

#[test]
fn test_set_on_unbound_name_fails() {
    let env = standard_env();
    let err = eval_program(&env, &["(set! nowhere 1)"]).unwrap_err();
    assert_eq!(err, Error::UnboundSymbol("nowhere".to_string()));
}

#[test]
fn test_set_never_creates_a_binding() {
    let env = standard_env();
    assert!(eval_program(&env, &["(set! ghost 1)"]).is_err());
    let err = eval_program(&env, &["ghost"]).unwrap_err();
    assert_eq!(err, Error::UnboundSymbol("ghost".to_string()));
}

// ============================================================================
// Closures
// ============================================================================

#[test]
fn test_define_and_invoke_closure() {
    let env = standard_env();
    let result = eval_program(
        &env,
        &["(define square (lambda (x) (* x x)))", "(square 5)"],
    )
    .unwrap();
    assert_eq!(result, Value::Number(25.0));
}

#[test]
fn test_closure_captures_defining_environment() {
    let env = standard_env();
    let result = eval_program(
        &env,
        &[
            "(define make-adder (lambda (n) (lambda (x) (+ x n))))",
            "(define add3 (make-adder 3))",
            "(add3 4)",
        ],
    )
    .unwrap();
    // The frame binding n=3 outlived the make-adder call
    assert_eq!(result, Value::Number(7.0));
}

#[test]
fn test_parameter_shadows_outer_binding() {
    let env = standard_env();
    let result = eval_program(
        &env,
        &["(define x 1)", "(define f (lambda (x) x))", "(f 99)"],
    )
    .unwrap();
    assert_eq!(result, Value::Number(99.0));
    // The outer binding is untouched
    assert_eq!(eval_program(&env, &["x"]).unwrap(), Value::Number(1.0));
}

#[test]
fn test_immediate_lambda_application() {
    assert_eq!(eval_expr("((lambda (x y) (+ x y)) 3 4)"), "7");
}

#[test]
fn test_closure_arity_mismatch() {
    let env = standard_env();
    let err = eval_program(&env, &["((lambda (x y) x) 1)"]).unwrap_err();
    assert!(matches!(err, Error::Arity { .. }));
}

// ============================================================================
// Tail Calls
// ============================================================================

#[test]
fn test_deep_tail_recursion_runs_in_constant_stack() {
    let env = standard_env();
    let result = eval_program(
        &env,
        &[
            "(define countdown (lambda (n) (if (= n 0) (quote done) (countdown (- n 1)))))",
            "(countdown 1000000)",
        ],
    )
    .unwrap();
    assert_eq!(result, Value::symbol("done"));
}

#[test]
fn test_mutual_tail_recursion() {
    let env = standard_env();
    let result = eval_program(
        &env,
        &[
            "(define even? (lambda (n) (if (= n 0) (quote yes) (odd? (- n 1)))))",
            "(define odd? (lambda (n) (if (= n 0) (quote no) (even? (- n 1)))))",
            "(even? 100001)",
        ],
    )
    .unwrap();
    assert_eq!(result, Value::symbol("no"));
}

// ============================================================================
// Self-Evaluating Forms
// ============================================================================

#[test]
fn test_atoms_self_evaluate() {
    assert_eq!(eval_expr("42"), "42");
    assert_eq!(eval_expr("-2.5"), "-2.5");
    assert_eq!(eval_expr("()"), "()");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unbound_symbol_names_the_symbol() {
    let env = standard_env();
    let err = eval_program(&env, &["(foo)"]).unwrap_err();
    assert_eq!(err, Error::UnboundSymbol("foo".to_string()));
    assert_eq!(eval_expr("bar"), "Error: Unbound symbol: bar");
}

#[test]
fn test_define_requires_symbol_identifier() {
    let env = standard_env();
    let err = eval_program(&env, &["(define 3 4)"]).unwrap_err();
    assert_eq!(err, Error::InvalidIdentifier("3".to_string()));
}

#[test]
fn test_set_requires_symbol_identifier() {
    let env = standard_env();
    let err = eval_program(&env, &["(set! (a b) 4)"]).unwrap_err();
    assert!(matches!(err, Error::InvalidIdentifier(_)));
}

#[test]
fn test_lambda_requires_symbol_parameter_list() {
    let env = standard_env();
    let err = eval_program(&env, &["(lambda x x)"]).unwrap_err();
    assert!(matches!(err, Error::InvalidParameters(_)));

    let err = eval_program(&env, &["(lambda (x 1) x)"]).unwrap_err();
    assert_eq!(err, Error::InvalidParameters("1".to_string()));
}

#[test]
fn test_applying_non_procedure_fails() {
    let env = standard_env();
    let err = eval_program(&env, &["(1 2 3)"]).unwrap_err();
    assert_eq!(err, Error::NotCallable("1".to_string()));
}

#[test]
fn test_failed_evaluation_leaves_globals_intact() {
    let env = standard_env();
    eval_program(&env, &["(define x 10)"]).unwrap();
    assert!(eval_program(&env, &["(define y (boom))"]).is_err());
    // x survives, y was never bound
    assert_eq!(eval_program(&env, &["x"]).unwrap(), Value::Number(10.0));
    assert!(matches!(
        eval_program(&env, &["y"]).unwrap_err(),
        Error::UnboundSymbol(_)
    ));
}
