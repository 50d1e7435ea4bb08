//! The evaluator.
//!
//! `eval` is an explicit trampoline: one loop over a mutable
//! (expression, environment) pair. `if` branches and closure bodies feed
//! back into the loop instead of recursing, so tail-recursive user
//! procedures run in constant native stack space. Only argument and
//! sub-expression evaluation recurses.

use std::rc::Rc;

use log::trace;
use once_cell::sync::Lazy;

use crate::environment::Environment;
use crate::error::Error;
use crate::interner::Symbol;
use crate::language::{LambdaCell, Value};

// Reserved words, interned once
static QUOTE: Lazy<Symbol> = Lazy::new(|| Symbol::intern("quote"));
static IF: Lazy<Symbol> = Lazy::new(|| Symbol::intern("if"));
static DEFINE: Lazy<Symbol> = Lazy::new(|| Symbol::intern("define"));
static SET: Lazy<Symbol> = Lazy::new(|| Symbol::intern("set!"));
static LAMBDA: Lazy<Symbol> = Lazy::new(|| Symbol::intern("lambda"));

/// Evaluate an expression in an environment.
pub fn eval(expr: Value, env: &Environment) -> Result<Value, Error> {
    let mut expr = expr;
    let mut env = env.clone();

    loop {
        trace!("eval {expr}");

        let items = match expr {
            // Symbol lookup
            Value::Symbol(name) => {
                return env
                    .lookup(name)
                    .ok_or_else(|| Error::UnboundSymbol(name.name()));
            }
            // Non-empty list: special form or application, handled below
            Value::List(ref items) if !items.is_empty() => Rc::clone(items),
            // Everything else is self-evaluating, the empty list included
            other => return Ok(other),
        };

        if let Value::Symbol(head) = &items[0] {
            let head = *head;

            if head == *QUOTE {
                if items.len() != 2 {
                    return Err(Error::arity("quote", "1", items.len() - 1));
                }
                return Ok(items[1].clone());
            }

            if head == *IF {
                if items.len() != 4 {
                    return Err(Error::arity("if", "3", items.len() - 1));
                }
                let test = eval(items[1].clone(), &env)?;
                // Loop with the chosen branch: tail position
                expr = if test.is_truthy() {
                    items[2].clone()
                } else {
                    items[3].clone()
                };
                continue;
            }

            if head == *DEFINE {
                if items.len() != 3 {
                    return Err(Error::arity("define", "2", items.len() - 1));
                }
                let name = match &items[1] {
                    Value::Symbol(name) => *name,
                    other => return Err(Error::InvalidIdentifier(other.to_string())),
                };
                let value = eval(items[2].clone(), &env)?;
                env.define(name, value);
                return Ok(Value::Unspecified);
            }

            if head == *SET {
                if items.len() != 3 {
                    return Err(Error::arity("set!", "2", items.len() - 1));
                }
                let name = match &items[1] {
                    Value::Symbol(name) => *name,
                    other => return Err(Error::InvalidIdentifier(other.to_string())),
                };
                let value = eval(items[2].clone(), &env)?;
                env.set(name, value)?;
                return Ok(Value::Unspecified);
            }

            if head == *LAMBDA {
                if items.len() != 3 {
                    return Err(Error::arity("lambda", "2", items.len() - 1));
                }
                let params = read_params(&items[1])?;
                return Ok(Value::Lambda(Rc::new(LambdaCell {
                    params,
                    body: items[2].clone(),
                    // Captured by reference: the frame stays alive as long
                    // as this closure does
                    env: env.clone(),
                })));
            }
        }

        // Application: evaluate head, then arguments left to right
        let proc = eval(items[0].clone(), &env)?;
        let mut args = Vec::with_capacity(items.len() - 1);
        for arg in &items[1..] {
            args.push(eval(arg.clone(), &env)?);
        }

        match proc {
            Value::Lambda(lambda) => {
                if args.len() != lambda.params.len() {
                    return Err(Error::arity(
                        "lambda",
                        &lambda.params.len().to_string(),
                        args.len(),
                    ));
                }
                // Tail call: reuse this stack frame instead of recursing
                env = lambda.env.extend(&lambda.params, &args);
                expr = lambda.body.clone();
            }
            // Native procedures return immediately, never tail-looped
            other => return apply(&other, &args),
        }
    }
}

/// Apply an already-evaluated procedure to already-evaluated arguments.
/// This is the entry the `apply` builtin uses; closure bodies evaluated
/// here are not in tail position.
pub fn apply(proc: &Value, args: &[Value]) -> Result<Value, Error> {
    match proc {
        Value::Lambda(lambda) => {
            if args.len() != lambda.params.len() {
                return Err(Error::arity(
                    "lambda",
                    &lambda.params.len().to_string(),
                    args.len(),
                ));
            }
            let frame = lambda.env.extend(&lambda.params, args);
            eval(lambda.body.clone(), &frame)
        }
        Value::NativeFn(f) => f(args),
        other => Err(Error::NotCallable(other.to_string())),
    }
}

fn read_params(expr: &Value) -> Result<Vec<Symbol>, Error> {
    let list = match expr {
        Value::List(items) => items,
        other => return Err(Error::InvalidParameters(other.to_string())),
    };
    let mut params = Vec::with_capacity(list.len());
    for item in list.iter() {
        match item {
            Value::Symbol(name) => params.push(*name),
            other => return Err(Error::InvalidParameters(other.to_string())),
        }
    }
    Ok(params)
}
