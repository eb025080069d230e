//! Alternation combinator with longest-match disambiguation.

use super::Parser;
use crate::error::FatalError;
use crate::token::{TokenNode, TokenType};

/// Run every parser at the same position and keep the longest match.
///
/// All alternatives run regardless of earlier successes. If every parser
/// fails, the *first-listed* parser's failure is returned (no best-error
/// selection). Otherwise the successful result with the greatest `end_at`
/// wins, and ties go to the earliest-listed alternative. The winner becomes
/// the single child of a new node of `token_type`.
///
/// Left recursion is not supported here: an alternative that re-enters the
/// same rule at the same position recurses without bound. Left-recursive
/// rules must use [`left_recursion`](super::left_recursion).
///
/// # Panics
///
/// Panics if `parsers` is empty.
#[must_use]
pub fn or(token_type: TokenType, parsers: Vec<Parser>) -> Parser {
    assert!(
        !parsers.is_empty(),
        "{}",
        FatalError::EmptyParserList { combinator: "or" }
    );

    Parser::new(move |text, position| {
        let mut first_failure = None;
        let mut winner: Option<TokenNode> = None;
        for parser in &parsers {
            match parser.run(text, position) {
                Ok(node) => {
                    // Strict comparison keeps the earliest alternative on ties.
                    let is_longer = winner
                        .as_ref()
                        .is_none_or(|best| node.end_at() > best.end_at());
                    if is_longer {
                        winner = Some(node);
                    }
                }
                Err(failure) => {
                    if first_failure.is_none() {
                        first_failure = Some(failure);
                    }
                }
            }
        }

        match (winner, first_failure) {
            (Some(node), _) => {
                let end_at = node.end_at();
                Ok(TokenNode::named(token_type, position, end_at, vec![node]))
            }
            (None, Some(failure)) => Err(failure),
            (None, None) => unreachable!("`or` always runs at least one parser"),
        }
    })
}
