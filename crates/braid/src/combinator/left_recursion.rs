//! Left-recursion rewrite combinator.

use super::Parser;
use crate::token::{TokenNode, TokenType};

/// Parse a left-recursive rule `X ::= base | X tail` as `X ::= base tail*`.
///
/// `base` runs once at the start position; its failure propagates. Then
/// `tail` runs repeatedly from the previous match's end, accumulating
/// successes as siblings of the base result. The tail failure that ends the
/// loop is not an error condition, it marks the end of repetition.
///
/// The children come out flat — `[base, tail, tail, ...]` — rather than
/// nested one level per step, which is what the left-recursive reading of
/// the rule means. This is the only supported encoding for left-recursive
/// rules; routing them through [`or`](super::or) recurses without bound.
#[must_use]
pub fn left_recursion(token_type: TokenType, base: Parser, tail: Parser) -> Parser {
    Parser::new(move |text, position| {
        let base_node = base.run(text, position)?;
        let mut cursor = base_node.end_at();
        let mut children = vec![base_node];

        while let Ok(node) = tail.run(text, cursor) {
            let advanced = node.end_at() > cursor;
            cursor = node.end_at();
            children.push(node);
            if !advanced {
                break;
            }
        }

        Ok(TokenNode::named(token_type, position, cursor, children))
    })
}
