//! Signed binary decimals.
//!
//! ```text
//! <binary-number>         ::= <binary-integer> | <binary-decimal>
//! <binary-decimal>        ::= <binary-integer> "." <binary-sequence>
//! <binary-integer>        ::= "0" | "-" <binary-natural-number> | <binary-natural-number>
//! <binary-natural-number> ::= <binary-digit> | "1" <binary-sequence>
//! <binary-sequence>       ::= <binary-digit> | <binary-digit> <binary-sequence>
//! <binary-digit>          ::= "0" | "1"
//! ```
//!
//! The integer/decimal ambiguity (every decimal starts with an integer) is
//! resolved by the longest-match rule of `or`: `"10.01"` parses as a decimal
//! because the decimal alternative consumes more input.

use crate::combinator::{
    concat, literal, or, repeat, ParseOutcome, Parser, RepeatMinimum,
};
use crate::error::ParseError;
use crate::token::{TokenNode, TokenType};

/// Rule identifiers of the binary-real-number grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    BinaryNumber,
    BinaryDecimal,
    BinaryInteger,
    BinaryNaturalNumber,
    BinarySequence,
    BinaryDigit,
}

impl RuleName {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BinaryNumber => "binary-number",
            Self::BinaryDecimal => "binary-decimal",
            Self::BinaryInteger => "binary-integer",
            Self::BinaryNaturalNumber => "binary-natural-number",
            Self::BinarySequence => "binary-sequence",
            Self::BinaryDigit => "binary-digit",
        }
    }

    #[must_use]
    pub fn token_type(self) -> TokenType {
        TokenType::rule(self.name())
    }
}

/// `<binary-number> ::= <binary-integer> | <binary-decimal>`
fn binary_number(text: &str, position: usize) -> ParseOutcome {
    or(
        RuleName::BinaryNumber.token_type(),
        vec![
            Parser::from_fn(binary_integer),
            Parser::from_fn(binary_decimal),
        ],
    )
    .run(text, position)
}

/// `<binary-decimal> ::= <binary-integer> "." <binary-sequence>`
fn binary_decimal(text: &str, position: usize) -> ParseOutcome {
    concat(
        RuleName::BinaryDecimal.token_type(),
        vec![
            Parser::from_fn(binary_integer),
            literal("."),
            Parser::from_fn(binary_sequence),
        ],
    )
    .run(text, position)
}

/// `<binary-integer> ::= "0" | "-" <binary-natural-number> | <binary-natural-number>`
fn binary_integer(text: &str, position: usize) -> ParseOutcome {
    or(
        RuleName::BinaryInteger.token_type(),
        vec![
            literal("0"),
            concat(
                TokenType::Temp,
                vec![literal("-"), Parser::from_fn(binary_natural_number)],
            ),
            Parser::from_fn(binary_natural_number),
        ],
    )
    .run(text, position)
}

/// `<binary-natural-number> ::= <binary-digit> | "1" <binary-sequence>`
fn binary_natural_number(text: &str, position: usize) -> ParseOutcome {
    or(
        RuleName::BinaryNaturalNumber.token_type(),
        vec![
            Parser::from_fn(binary_digit),
            concat(
                TokenType::Temp,
                vec![literal("1"), Parser::from_fn(binary_sequence)],
            ),
        ],
    )
    .run(text, position)
}

/// `<binary-sequence> ::= <binary-digit> | <binary-digit> <binary-sequence>`
fn binary_sequence(text: &str, position: usize) -> ParseOutcome {
    repeat(
        RuleName::BinarySequence.token_type(),
        Parser::from_fn(binary_digit),
        RepeatMinimum::One,
    )
    .run(text, position)
}

/// `<binary-digit> ::= "0" | "1"`
fn binary_digit(text: &str, position: usize) -> ParseOutcome {
    or(
        RuleName::BinaryDigit.token_type(),
        vec![literal("0"), literal("1")],
    )
    .run(text, position)
}

/// The grammar's start rule as a parser.
#[must_use]
pub fn entry() -> Parser {
    Parser::from_fn(binary_number)
}

/// Parse a whole input as a signed binary decimal or integer.
pub fn parse(text: &str) -> Result<TokenNode, ParseError> {
    crate::parser::parse(&entry(), text)
}
