//! # Error Types
//!
//! Failure values for parsing, and the fatal configuration errors raised
//! when a combinator is misconstructed.
//!
//! ## Overview
//!
//! - [`ParseError`]: parse-time failures, returned as ordinary `Result`
//!   values and propagated by each combinator's policy (`concat` fails fast,
//!   `or` keeps the first-listed failure).
//! - [`FatalError`]: programmer errors caught at combinator construction
//!   time — an empty literal pattern or an empty parser list. These panic
//!   immediately; they are never produced during a parse.
//!
//! When the `diagnostics` feature is enabled, [`ParseError`] derives
//! [`miette::Diagnostic`] for rich reporting.

use compact_str::CompactString;
use thiserror::Error;

#[cfg(feature = "diagnostics")]
use miette::Diagnostic;

/// Rule name reported when the top-level parse finds trailing input.
pub const ROOT_RULE_NAME: &str = "$root";

/// A parse-time failure.
///
/// Carries enough context (rule name, offending character, position) to
/// produce a human-readable diagnostic. These are return values, never
/// panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
pub enum ParseError {
    /// A literal match was attempted against zero-length input.
    #[error("cannot parse empty text")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(braid::empty_text)))]
    EmptyText,

    /// The requested start position is at or beyond the end of the text.
    #[error("cursor position exceeds text length (position: {position}, rule: {rule})")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(braid::position_exceeded)))]
    PositionExceeded {
        rule: CompactString,
        position: usize,
    },

    /// The character at `position` does not match what `rule` required.
    #[error("unexpected token {found:?} at position {position} while parsing by rule \"{rule}\"")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(braid::unexpected_token)))]
    UnexpectedToken {
        rule: CompactString,
        found: char,
        position: usize,
    },
}

impl ParseError {
    /// Create a position-exceeded error for the given rule.
    #[must_use]
    pub fn position_exceeded(rule: impl Into<CompactString>, position: usize) -> Self {
        Self::PositionExceeded {
            rule: rule.into(),
            position,
        }
    }

    /// Create an unexpected-token error for the given rule.
    #[must_use]
    pub fn unexpected_token(rule: impl Into<CompactString>, found: char, position: usize) -> Self {
        Self::UnexpectedToken {
            rule: rule.into(),
            found,
            position,
        }
    }

    /// The input position this error refers to, if it carries one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyText => None,
            Self::PositionExceeded { position, .. } | Self::UnexpectedToken { position, .. } => {
                Some(*position)
            }
        }
    }

    /// The rule name this error refers to, if it carries one.
    #[must_use]
    pub fn rule(&self) -> Option<&str> {
        match self {
            Self::EmptyText => None,
            Self::PositionExceeded { rule, .. } | Self::UnexpectedToken { rule, .. } => Some(rule),
        }
    }
}

/// A combinator-construction error.
///
/// Raised by panicking before any input is parsed; misconfigured combinators
/// are programmer errors and are not recoverable within a parse call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FatalError {
    #[error("literal pattern must not be empty")]
    EmptyPattern,

    #[error("`{combinator}` requires at least one parser")]
    EmptyParserList { combinator: &'static str },

    #[error("`literal_choice` requires at least one literal")]
    EmptyLiteralList,

    #[error("`literal_choice` literals must all have the same length")]
    MixedLiteralLengths,
}
