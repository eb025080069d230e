//! # Top-Level Parse
//!
//! The grammar-level entry point: run a start rule against a whole input and
//! return the canonical tree.

use crate::combinator::{char_at, Parser};
use crate::error::{ParseError, ROOT_RULE_NAME};
use crate::normalize::canonicalize;
use crate::token::TokenNode;

/// Parse `text` from position 0 with the grammar's start rule and
/// canonicalize the result.
///
/// The normalization passes run in their fixed order, and the canonical
/// root must cover the entire input: trailing unconsumed input fails with
/// an [`ParseError::UnexpectedToken`] naming the character at the first
/// unconsumed position under the reserved `$root` rule. No partial trees
/// are returned on failure.
pub fn parse(entry: &Parser, text: &str) -> Result<TokenNode, ParseError> {
    let node = canonicalize(entry.run(text, 0)?);

    if node.end_at() != text.len() {
        return Err(ParseError::unexpected_token(
            ROOT_RULE_NAME,
            char_at(text, node.end_at()),
            node.end_at(),
        ));
    }

    Ok(node)
}
