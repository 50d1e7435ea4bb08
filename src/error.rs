//! Error kinds raised by the reader, the environment, and the evaluator.
//!
//! Every error aborts the top-level evaluation in progress; nothing is
//! bound or mutated before validation, so the global environment stays
//! intact across failed inputs.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed token stream: unbalanced parens or empty input.
    Syntax(String),
    /// Lookup or `set!` target not found in any enclosing frame.
    UnboundSymbol(String),
    /// `define`/`set!` first argument was not a symbol.
    InvalidIdentifier(String),
    /// `lambda` first argument was not a list of symbols.
    InvalidParameters(String),
    /// Application head evaluated to a non-procedure value.
    NotCallable(String),
    /// Procedure called with the wrong number of arguments.
    Arity {
        proc: String,
        expected: String,
        got: usize,
    },
    /// Procedure called with an argument of the wrong type.
    Type {
        proc: String,
        expected: String,
        got: String,
    },
}

impl Error {
    pub fn arity(proc: &str, expected: &str, got: usize) -> Self {
        Error::Arity {
            proc: proc.to_string(),
            expected: expected.to_string(),
            got,
        }
    }

    pub fn type_mismatch(proc: &str, expected: &str, got: impl fmt::Display) -> Self {
        Error::Type {
            proc: proc.to_string(),
            expected: expected.to_string(),
            got: got.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax(msg) => write!(f, "{msg}"),
            Error::UnboundSymbol(name) => write!(f, "Unbound symbol: {name}"),
            Error::InvalidIdentifier(got) => write!(f, "Invalid identifier: {got}"),
            Error::InvalidParameters(got) => write!(f, "Invalid parameter list: {got}"),
            Error::NotCallable(got) => write!(f, "Cannot apply non-function: {got}"),
            Error::Arity {
                proc,
                expected,
                got,
            } => write!(f, "{proc}: expected {expected} arguments, got {got}"),
            Error::Type {
                proc,
                expected,
                got,
            } => write!(f, "{proc}: expected {expected}, got {got}"),
        }
    }
}

impl std::error::Error for Error {}
