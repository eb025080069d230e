//! # Client Grammars
//!
//! Grammars built on top of the combinator engine. Each grammar module
//! follows the same pattern:
//!
//! - a closed `RuleName` enum mapping rule identifiers to their
//!   [`TokenType`](crate::token::TokenType) tags,
//! - one plain `fn` per rule, so mutually recursive rules reference each
//!   other by name with resolution at call time,
//! - an `entry()` parser for the start rule and a module-level `parse()`
//!   that validates full-input consumption.
//!
//! The grammars add no engine behavior; they exercise the combinators and
//! the normalization pipeline.

pub mod binary_number;
pub mod binary_real_number;
pub mod bnf;
