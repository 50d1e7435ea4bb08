//! Environment for variable bindings.
//!
//! An environment is one lexical scope: a map of bindings plus an optional
//! outer scope. Frames form a chain terminating at the single global frame.
//! The interpreter is single-threaded, so interior mutability is a
//! `RefCell`, not a lock; the handle is cheap to clone (an `Rc` increment)
//! and closures keep their defining frame alive by holding one.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::error::Error;
use crate::interner::Symbol;
use crate::language::Value;

struct Frame {
    bindings: FxHashMap<Symbol, Value>,
    outer: Option<Environment>,
}

#[derive(Clone)]
pub struct Environment {
    frame: Rc<RefCell<Frame>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Create a new, empty global frame (no outer link).
    pub fn new() -> Self {
        Environment {
            frame: Rc::new(RefCell::new(Frame {
                bindings: FxHashMap::default(),
                outer: None,
            })),
        }
    }

    /// Create one call frame binding `params` to `args` positionally,
    /// with `self` as the outer scope.
    pub fn extend(&self, params: &[Symbol], args: &[Value]) -> Self {
        let mut bindings = FxHashMap::default();
        for (param, arg) in params.iter().zip(args.iter()) {
            bindings.insert(*param, arg.clone());
        }
        Environment {
            frame: Rc::new(RefCell::new(Frame {
                bindings,
                outer: Some(self.clone()),
            })),
        }
    }

    /// Insert or overwrite `name` in THIS frame only, shadowing any outer
    /// binding of the same name. Never fails.
    pub fn define(&self, name: Symbol, value: Value) {
        self.frame.borrow_mut().bindings.insert(name, value);
    }

    /// Overwrite `name` in the nearest frame that already defines it.
    /// Never creates a binding.
    pub fn set(&self, name: Symbol, value: Value) -> Result<(), Error> {
        let mut frame = self.frame.borrow_mut();
        if frame.bindings.contains_key(&name) {
            frame.bindings.insert(name, value);
            return Ok(());
        }
        match &frame.outer {
            Some(outer) => outer.set(name, value),
            None => Err(Error::UnboundSymbol(name.name())),
        }
    }

    /// Walk the chain outward and return the binding at the first frame
    /// where `name` is present.
    pub fn lookup(&self, name: Symbol) -> Option<Value> {
        let frame = self.frame.borrow();
        if let Some(value) = frame.bindings.get(&name) {
            return Some(value.clone());
        }
        match &frame.outer {
            Some(outer) => outer.lookup(name),
            None => None,
        }
    }
}
