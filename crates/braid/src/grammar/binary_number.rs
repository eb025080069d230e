//! Binary numerals: the regular language `0|1[01]*`.
//!
//! ```text
//! <binary-number>   ::= <binary-digit> | "1" <binary-sequence>
//! <binary-sequence> ::= <binary-digit> | <binary-digit> <binary-sequence>
//! <binary-digit>    ::= "0" | "1"
//! ```

use crate::combinator::{
    concat, literal, or, repeat, ParseOutcome, Parser, RepeatMinimum,
};
use crate::error::ParseError;
use crate::token::{TokenNode, TokenType};

/// Rule identifiers of the binary-number grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    BinaryNumber,
    BinarySequence,
    BinaryDigit,
}

impl RuleName {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BinaryNumber => "binary-number",
            Self::BinarySequence => "binary-sequence",
            Self::BinaryDigit => "binary-digit",
        }
    }

    #[must_use]
    pub fn token_type(self) -> TokenType {
        TokenType::rule(self.name())
    }
}

/// `<binary-number> ::= <binary-digit> | "1" <binary-sequence>`
fn binary_number(text: &str, position: usize) -> ParseOutcome {
    or(
        RuleName::BinaryNumber.token_type(),
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

/// Parse a whole input as a binary numeral.
pub fn parse(text: &str) -> Result<TokenNode, ParseError> {
    crate::parser::parse(&entry(), text)
}
