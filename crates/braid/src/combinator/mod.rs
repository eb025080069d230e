//! # Parser Combinators
//!
//! The combinator engine: a [`Parser`] is a pure function
//! `(text, position) -> Result<TokenNode, ParseError>`, and every combinator
//! builds a new parser from existing ones.
//!
//! ## Overview
//!
//! - Primitives: [`literal`], [`empty`], [`literal_choice`]
//! - Sequencing: [`concat`] (fail-fast, left-to-right)
//! - Alternation: [`or`] (longest match, first-listed tie-break)
//! - Repetition: [`repeat`] (greedy, minimum zero or one)
//! - Left recursion: [`left_recursion`] (`X ::= base | X tail` as `base tail*`)
//!
//! Parsing is single-threaded and synchronous: each parser returns before
//! its caller proceeds, and every invocation constructs its own tree with no
//! shared mutable state.
//!
//! ## Usage
//!
//! ```rust
//! use braid::combinator::{concat, literal};
//! use braid::token::TokenType;
//!
//! let pair = concat(
//!     TokenType::rule("pair"),
//!     vec![literal("0"), literal("1")],
//! );
//! let node = pair.run("01", 0).unwrap();
//! assert_eq!(node.end_at(), 2);
//! ```

mod concat;
mod left_recursion;
mod literal;
mod or;
mod repeat;

pub use concat::concat;
pub use left_recursion::left_recursion;
pub use literal::{empty, literal, literal_choice};
pub use or::or;
pub use repeat::{repeat, RepeatMinimum};

use crate::error::ParseError;
use crate::token::TokenNode;
use std::fmt;
use std::sync::Arc;

/// Outcome of running a parser at a position.
pub type ParseOutcome = Result<TokenNode, ParseError>;

/// A composable parser: a pure function of `(text, position)`.
///
/// `Parser` is a cheap-to-clone handle; combinators take parsers by value
/// and capture them, so grammars clone freely when a rule is referenced from
/// several places.
#[derive(Clone)]
pub struct Parser {
    run: Arc<dyn Fn(&str, usize) -> ParseOutcome + Send + Sync>,
}

impl Parser {
    /// Wrap a closure as a parser.
    #[must_use]
    pub fn new(f: impl Fn(&str, usize) -> ParseOutcome + Send + Sync + 'static) -> Self {
        Self { run: Arc::new(f) }
    }

    /// Wrap a plain rule function as a parser.
    ///
    /// This is how mutually recursive grammar rules reference each other:
    /// each rule is a `fn` item that builds its combinator and runs it, and
    /// rules name one another directly. Resolution happens at call time, so
    /// no lazy initialization is needed.
    #[must_use]
    pub fn from_fn(f: fn(&str, usize) -> ParseOutcome) -> Self {
        Self { run: Arc::new(f) }
    }

    /// Run this parser on `text` starting at byte offset `position`.
    pub fn run(&self, text: &str, position: usize) -> ParseOutcome {
        (self.run)(text, position)
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Parser(..)")
    }
}

/// The character at `position`, for error reporting.
///
/// Positions handed to parsers always sit on character boundaries (they come
/// from previous match ends); the fallback only guards against misuse.
pub(crate) fn char_at(text: &str, position: usize) -> char {
    text.get(position..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}
