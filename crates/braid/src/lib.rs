//! # Braid
//!
//! A parser combinator library for small formal grammars, producing labeled
//! parse trees with byte-offset spans.
//!
//! ## Overview
//!
//! Braid builds recursive-descent parsers out of a closed set of
//! combinators:
//!
//! - **Primitives**: fixed-string matching ([`literal`]), the epsilon parser
//!   ([`empty`]), and single-comparison character classes
//!   ([`literal_choice`])
//! - **Sequencing**: fail-fast concatenation ([`concat`])
//! - **Alternation**: longest-match choice with first-listed tie-breaking
//!   ([`or`])
//! - **Repetition**: greedy repetition with a zero or one minimum
//!   ([`repeat`]) and a rewrite for left-recursive rules
//!   ([`left_recursion`])
//!
//! Successful parses produce [`TokenNode`] trees whose nodes carry a
//! [`TokenType`] label and a half-open `[start_at, end_at)` byte span. The
//! [`normalize`] passes canonicalize raw trees (inline `$temp` wrappers,
//! flatten self-recursive chains, prune zero-width children), and
//! [`parser::parse`] ties everything together: run the start rule at
//! position 0, canonicalize, and require full input consumption.
//!
//! ## Quick Start
//!
//! ```rust
//! use braid::{literal, or, parse, repeat, RepeatMinimum, TokenType};
//!
//! // bits ::= ("0" | "1")+
//! let bit = or(TokenType::rule("bit"), vec![literal("0"), literal("1")]);
//! let bits = repeat(TokenType::rule("bits"), bit, RepeatMinimum::One);
//!
//! let tree = parse(&bits, "1011").unwrap();
//! assert_eq!(tree.token_type(), TokenType::rule("bits"));
//! assert_eq!(tree.end_at(), 4);
//! ```
//!
//! Mutually recursive rules are written as plain `fn` items wrapped with
//! [`Parser::from_fn`]; the modules under [`grammar`] show the pattern on
//! three complete grammars, including BNF itself.
//!
//! ## Modules
//!
//! - [`combinator`]: the parser type and the combinator set
//! - [`normalize`]: tree canonicalization passes
//! - [`parser`]: the top-level, whole-input entry point
//! - [`token`]: parse tree nodes, labels, and JSON serialization
//! - [`error`]: the parse failure taxonomy
//! - [`intern`]: string interning for rule names
//! - [`grammar`]: grammars built on the engine
//!
//! ## Features
//!
//! - `serialize` (default): `serde` support and [`TokenNode::to_json`]
//! - `diagnostics`: `miette` diagnostic codes on [`ParseError`]

pub mod combinator;
pub mod error;
pub mod grammar;
pub mod intern;
pub mod normalize;
pub mod parser;
pub mod token;

pub use combinator::{
    concat, empty, left_recursion, literal, literal_choice, or, repeat,
    ParseOutcome, Parser, RepeatMinimum,
};
pub use error::{FatalError, ParseError, ROOT_RULE_NAME};
pub use intern::InternedStr;
pub use normalize::{
    canonicalize, flatten_self_recursive, inline_temp_nodes, prune_empty,
};
pub use parser::parse;
pub use token::{LiteralTokenNode, NamedTokenNode, TokenNode, TokenType};
