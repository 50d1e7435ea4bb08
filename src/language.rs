//! Core value representation.
//!
//! One tagged union serves both as the parsed expression tree and as the
//! result of evaluation. The expression subset is `Symbol`/`Number`/`List`;
//! evaluation additionally produces closures, native procedures, booleans
//! (from comparisons) and the unspecified marker (from `define`/`set!`).

use std::fmt;
use std::rc::Rc;

use crate::environment::Environment;
use crate::error::Error;
use crate::interner::Symbol;

/// Native procedure type - Rust functions callable from Lisp.
pub type NativeFn = fn(&[Value]) -> Result<Value, Error>;

/// A user-defined procedure: parameter names, body expression, and the
/// environment captured at the `lambda` site (shared, not copied).
#[derive(Clone)]
pub struct LambdaCell {
    pub params: Vec<Symbol>,
    pub body: Value,
    pub env: Environment,
}

// Manual impls since Environment carries no Debug/PartialEq
impl fmt::Debug for LambdaCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LambdaCell")
            .field("params", &self.params)
            .field("body", &self.body)
            .field("env", &"<environment>")
            .finish()
    }
}

impl PartialEq for LambdaCell {
    fn eq(&self, other: &Self) -> bool {
        // Compare only params and body, not the captured environment
        self.params == other.params && self.body == other.body
    }
}

#[derive(Clone, Debug)]
pub enum Value {
    Symbol(Symbol),
    Number(f64),
    /// Runtime-only: produced by comparisons and `equal?`. The reader never
    /// yields one, so `true` and `false` in source text are plain symbols.
    Bool(bool),
    List(Rc<Vec<Value>>),
    Lambda(Rc<LambdaCell>),
    NativeFn(NativeFn),
    /// The no-printable-value marker returned by `define` and `set!`.
    Unspecified,
}

// Manual PartialEq because function pointers need identity comparison
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Lambda(a), Value::Lambda(b)) => a == b,
            (Value::NativeFn(a), Value::NativeFn(b)) => std::ptr::eq(*a as *const (), *b as *const ()),
            (Value::Unspecified, Value::Unspecified) => true,
            _ => false,
        }
    }
}

impl Value {
    pub fn symbol(name: &str) -> Self {
        Value::Symbol(Symbol::intern(name))
    }

    /// Conditional test rule: a list is truthy iff non-empty, a number is
    /// falsy only at exactly zero, `false` and the unspecified marker are
    /// falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::List(items) => !items.is_empty(),
            Value::Number(n) => *n != 0.0,
            Value::Bool(b) => *b,
            Value::Unspecified => false,
            _ => true,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Symbol(_) => "symbol",
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::List(_) => "list",
            Value::Lambda(_) => "lambda",
            Value::NativeFn(_) => "native-fn",
            Value::Unspecified => "unspecified",
        }
    }
}

/// Build a list value from already-evaluated items.
pub fn list(items: Vec<Value>) -> Value {
    Value::List(Rc::new(items))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Symbol(s) => write!(f, "{s}"),
            Value::Number(n) => {
                // Integral values print without a fractional part: 6, not 6.0
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Value::Bool(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            Value::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
            Value::Lambda(_) => write!(f, "<lambda>"),
            Value::NativeFn(_) => write!(f, "<native-fn>"),
            Value::Unspecified => Ok(()),
        }
    }
}
