//! Sequencing combinator.

use super::Parser;
use crate::error::FatalError;
use crate::token::{TokenNode, TokenType};

/// Run `parsers` in order, each starting where the previous match ended.
///
/// The first parser starts at the caller's position; each later parser
/// starts at the previous result's `end_at`. The first sub-failure is
/// propagated unchanged and no partial results are kept. On success the
/// children are the ordered results and the node spans from the caller's
/// position to the last child's end.
///
/// # Panics
///
/// Panics if `parsers` is empty.
#[must_use]
pub fn concat(token_type: TokenType, parsers: Vec<Parser>) -> Parser {
    assert!(
        !parsers.is_empty(),
        "{}",
        FatalError::EmptyParserList {
            combinator: "concat"
        }
    );

    Parser::new(move |text, position| {
        let mut children = Vec::with_capacity(parsers.len());
        let mut cursor = position;
        for parser in &parsers {
            let node = parser.run(text, cursor)?;
            cursor = node.end_at();
            children.push(node);
        }
        Ok(TokenNode::named(token_type, position, cursor, children))
    })
}
