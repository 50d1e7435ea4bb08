//! A minimal Lisp interpreter.
//!
//! The pipeline is: text -> [`lexer::Lexer`] -> [`parser::parse`] ->
//! [`interpreter::eval`] against an [`Environment`] chain rooted at the
//! global frame built by [`stdlib::standard_env`].

pub mod environment;
pub mod error;
pub mod interner;
pub mod interpreter;
pub mod language;
pub mod lexer;
pub mod parser;
pub mod stdlib;

// Re-export commonly used items for convenience
pub use environment::Environment;
pub use error::Error;
pub use interner::Symbol;
pub use interpreter::{apply, eval};
pub use language::{LambdaCell, NativeFn, Value, list};
pub use parser::{parse, parse_all};
pub use stdlib::standard_env;
