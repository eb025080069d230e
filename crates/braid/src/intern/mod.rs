//! # Rule-Name Interning
//!
//! Grammar rule names are interned so that [`TokenType`](crate::token::TokenType)
//! stays `Copy` and comparisons are key comparisons rather than string
//! comparisons. Every rule name is stored once in a process-global interner
//! and resolved back on demand.
//!
//! ## Usage
//!
//! ```rust
//! use braid::intern::InternedStr;
//!
//! let key1 = InternedStr::new("binary-digit");
//! let key2 = InternedStr::new("binary-digit"); // same key as key1
//! let key3 = InternedStr::new("binary-sequence");
//!
//! assert_eq!(key1, key2);
//! assert_ne!(key1, key3);
//! assert_eq!(key1.as_str(), "binary-digit");
//! ```

use lasso::{Spur, ThreadedRodeo};
use std::fmt;
use std::sync::OnceLock;

fn rodeo() -> &'static ThreadedRodeo {
    static RODEO: OnceLock<ThreadedRodeo> = OnceLock::new();
    RODEO.get_or_init(ThreadedRodeo::new)
}

/// An interned rule-name key.
///
/// Lightweight handle to a string stored in the process-global interner. It
/// can be cheaply copied and compared; two keys are equal exactly when they
/// were created from the same string.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InternedStr(Spur);

impl InternedStr {
    /// Intern a string, returning its key.
    ///
    /// If the string has already been interned, returns the existing key.
    #[must_use]
    pub fn new(s: &str) -> Self {
        Self(rodeo().get_or_intern(s))
    }

    /// Intern a static string, returning its key.
    ///
    /// More efficient for string literals as it avoids copying the content
    /// into the interner's arena.
    #[must_use]
    pub fn from_static(s: &'static str) -> Self {
        Self(rodeo().get_or_intern_static(s))
    }

    /// Resolve this key to its string content.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        rodeo().resolve(&self.0)
    }
}

impl fmt::Debug for InternedStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InternedStr({:?})", self.as_str())
    }
}

impl fmt::Display for InternedStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_string_same_key() {
        let a = InternedStr::new("syntax");
        let b = InternedStr::new("syntax");
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_strings_different_keys() {
        let a = InternedStr::new("rule-name");
        let b = InternedStr::new("rule-char");
        assert_ne!(a, b);
    }

    #[test]
    fn test_resolve_round_trip() {
        let key = InternedStr::from_static("opt-whitespace");
        assert_eq!(key.as_str(), "opt-whitespace");
    }

    #[test]
    fn test_display() {
        let key = InternedStr::new("expression");
        assert_eq!(key.to_string(), "expression");
    }
}
