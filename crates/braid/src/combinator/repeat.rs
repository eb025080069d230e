//! Bounded repetition combinator.

use super::Parser;
use crate::token::{TokenNode, TokenType};

/// How many repetitions a [`repeat`] parser must produce to succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatMinimum {
    /// Zero-or-more: the node may be zero-width at the start position.
    Zero,
    /// One-or-more: zero repetitions propagate the sub-parser's failure.
    One,
}

/// Greedily apply `parser` until it fails, collecting each match as a child.
///
/// Each repetition starts at the previous match's `end_at`. The failure that
/// ends the loop is discarded unless the minimum is
/// [`RepeatMinimum::One`] and nothing matched, in which case that first
/// failure is propagated. This is the combinator for `zero-or-more` /
/// `one-or-more` rules; the equivalent right-recursive encoding would nest
/// one level per repetition.
///
/// A zero-width match cannot make progress, so repetition stops after
/// collecting it once.
#[must_use]
pub fn repeat(token_type: TokenType, parser: Parser, minimum: RepeatMinimum) -> Parser {
    Parser::new(move |text, position| {
        let mut children = Vec::new();
        let mut cursor = position;
        loop {
            match parser.run(text, cursor) {
                Ok(node) => {
                    let advanced = node.end_at() > cursor;
                    cursor = node.end_at();
                    children.push(node);
                    if !advanced {
                        break;
                    }
                }
                Err(failure) => {
                    if minimum == RepeatMinimum::One && children.is_empty() {
                        return Err(failure);
                    }
                    break;
                }
            }
        }

        Ok(TokenNode::named(token_type, position, cursor, children))
    })
}
