//! Global string interner for symbols.
//!
//! Every identifier in a program is interned once; a [`Symbol`] is a `Copy`
//! key into the interner, so environment lookups hash a small integer
//! instead of a string.

use once_cell::sync::Lazy;
use std::fmt;
use std::sync::RwLock;
use string_interner::{DefaultBackend, DefaultSymbol, StringInterner};

static INTERNER: Lazy<RwLock<StringInterner<DefaultBackend>>> =
    Lazy::new(|| RwLock::new(StringInterner::default()));

/// An interned identifier. Two symbols spelled the same compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(DefaultSymbol);

impl Symbol {
    /// Intern `name`, returning its key.
    pub fn intern(name: &str) -> Self {
        let mut interner = INTERNER.write().unwrap();
        Symbol(interner.get_or_intern(name))
    }

    /// Resolve back to the spelled name, allocating a fresh `String`.
    pub fn name(&self) -> String {
        self.with_str(|s| s.to_string())
    }

    /// Run `f` on the spelled name without allocating.
    pub fn with_str<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&str) -> R,
    {
        let interner = INTERNER.read().unwrap();
        let s = interner
            .resolve(self.0)
            .expect("interned symbol must resolve");
        f(s)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_str(|s| write!(f, "{s}"))
    }
}
