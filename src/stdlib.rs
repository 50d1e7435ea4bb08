//! Builtin procedure library.
//!
//! Populates the global environment with the primitive arithmetic,
//! comparison, and list operations. Every builtin validates its own arity
//! and argument types and fails with an error naming the procedure.

use crate::environment::Environment;
use crate::error::Error;
use crate::interner::Symbol;
use crate::interpreter;
use crate::language::{NativeFn, Value, list};

// ============================================================================
// Extraction Helpers
// ============================================================================

fn expect_number(proc: &str, value: &Value) -> Result<f64, Error> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(Error::type_mismatch(proc, "number", other)),
    }
}

fn expect_list<'a>(proc: &str, value: &'a Value) -> Result<&'a [Value], Error> {
    match value {
        Value::List(items) => Ok(items),
        other => Err(Error::type_mismatch(proc, "list", other)),
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

/// Left fold over one-or-more numeric arguments. `identity` is the result
/// of the zero-argument call where one is defined; a single argument is
/// returned unchanged, so `(- 5)` is 5, not -5.
fn fold_numeric(
    proc: &str,
    args: &[Value],
    identity: Option<f64>,
    op: fn(f64, f64) -> f64,
) -> Result<Value, Error> {
    let Some(first) = args.first() else {
        return match identity {
            Some(id) => Ok(Value::Number(id)),
            None => Err(Error::arity(proc, "at least 1", 0)),
        };
    };
    let mut acc = expect_number(proc, first)?;
    for arg in &args[1..] {
        acc = op(acc, expect_number(proc, arg)?);
    }
    Ok(Value::Number(acc))
}

pub fn add(args: &[Value]) -> Result<Value, Error> {
    fold_numeric("+", args, Some(0.0), |a, b| a + b)
}

pub fn sub(args: &[Value]) -> Result<Value, Error> {
    fold_numeric("-", args, None, |a, b| a - b)
}

pub fn mul(args: &[Value]) -> Result<Value, Error> {
    fold_numeric("*", args, Some(1.0), |a, b| a * b)
}

pub fn div(args: &[Value]) -> Result<Value, Error> {
    fold_numeric("/", args, None, |a, b| a / b)
}

pub fn abs(args: &[Value]) -> Result<Value, Error> {
    if args.len() != 1 {
        return Err(Error::arity("abs", "1", args.len()));
    }
    Ok(Value::Number(expect_number("abs", &args[0])?.abs()))
}

pub fn pow(args: &[Value]) -> Result<Value, Error> {
    if args.len() != 2 {
        return Err(Error::arity("pow", "2", args.len()));
    }
    let base = expect_number("pow", &args[0])?;
    let exponent = expect_number("pow", &args[1])?;
    Ok(Value::Number(base.powf(exponent)))
}

// ============================================================================
// Comparisons (binary only)
// ============================================================================

fn compare(proc: &str, args: &[Value], op: fn(f64, f64) -> bool) -> Result<Value, Error> {
    if args.len() != 2 {
        return Err(Error::arity(proc, "2", args.len()));
    }
    let a = expect_number(proc, &args[0])?;
    let b = expect_number(proc, &args[1])?;
    Ok(Value::Bool(op(a, b)))
}

pub fn gt(args: &[Value]) -> Result<Value, Error> {
    compare(">", args, |a, b| a > b)
}

pub fn gte(args: &[Value]) -> Result<Value, Error> {
    compare(">=", args, |a, b| a >= b)
}

pub fn lt(args: &[Value]) -> Result<Value, Error> {
    compare("<", args, |a, b| a < b)
}

pub fn lte(args: &[Value]) -> Result<Value, Error> {
    compare("<=", args, |a, b| a <= b)
}

pub fn num_eq(args: &[Value]) -> Result<Value, Error> {
    compare("=", args, |a, b| a == b)
}

// ============================================================================
// List Operations
// ============================================================================

pub fn car(args: &[Value]) -> Result<Value, Error> {
    if args.len() != 1 {
        return Err(Error::arity("car", "1", args.len()));
    }
    let items = expect_list("car", &args[0])?;
    items
        .first()
        .cloned()
        .ok_or_else(|| Error::type_mismatch("car", "non-empty list", &args[0]))
}

pub fn cdr(args: &[Value]) -> Result<Value, Error> {
    if args.len() != 1 {
        return Err(Error::arity("cdr", "1", args.len()));
    }
    let items = expect_list("cdr", &args[0])?;
    if items.is_empty() {
        return Err(Error::type_mismatch("cdr", "non-empty list", &args[0]));
    }
    Ok(list(items[1..].to_vec()))
}

pub fn cons(args: &[Value]) -> Result<Value, Error> {
    if args.len() != 2 {
        return Err(Error::arity("cons", "2", args.len()));
    }
    let tail = expect_list("cons", &args[1])?;
    let mut items = Vec::with_capacity(tail.len() + 1);
    items.push(args[0].clone());
    items.extend_from_slice(tail);
    Ok(list(items))
}

pub fn list_fn(args: &[Value]) -> Result<Value, Error> {
    Ok(list(args.to_vec()))
}

// ============================================================================
// Predicates and Control
// ============================================================================

pub fn equal_p(args: &[Value]) -> Result<Value, Error> {
    if args.len() != 2 {
        return Err(Error::arity("equal?", "2", args.len()));
    }
    Ok(Value::Bool(args[0] == args[1]))
}

/// Call a procedure with an explicit argument list.
pub fn apply(args: &[Value]) -> Result<Value, Error> {
    if args.len() != 2 {
        return Err(Error::arity("apply", "2", args.len()));
    }
    let call_args = expect_list("apply", &args[1])?;
    interpreter::apply(&args[0], call_args)
}

/// Returns its last argument. Sequencing is incidental: all arguments are
/// already evaluated by the time this runs.
pub fn begin(args: &[Value]) -> Result<Value, Error> {
    args.last()
        .cloned()
        .ok_or_else(|| Error::arity("begin", "at least 1", 0))
}

// ============================================================================
// Registration
// ============================================================================

/// Register the builtin library in the given environment.
pub fn register_stdlib(env: &Environment) {
    let define = |name: &str, f: NativeFn| env.define(Symbol::intern(name), Value::NativeFn(f));

    // Arithmetic
    define("+", add);
    define("-", sub);
    define("*", mul);
    define("/", div);
    define("abs", abs);
    define("pow", pow);

    // Comparisons
    define(">", gt);
    define(">=", gte);
    define("<", lt);
    define("<=", lte);
    define("=", num_eq);

    // List operations
    define("car", car);
    define("cdr", cdr);
    define("cons", cons);
    define("list", list_fn);

    // Predicates and control
    define("equal?", equal_p);
    define("apply", apply);
    define("begin", begin);

    // Constants
    env.define(Symbol::intern("pi"), Value::Number(std::f64::consts::PI));
}

/// The global environment: a fresh frame with the builtin library loaded.
pub fn standard_env() -> Environment {
    let env = Environment::new();
    register_stdlib(&env);
    env
}
