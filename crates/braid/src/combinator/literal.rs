//! Primitive parsers: fixed-string matching and the epsilon parser.

use super::{char_at, Parser};
use crate::error::{FatalError, ParseError};
use crate::token::{TokenNode, TokenType};
use compact_str::CompactString;
use hashbrown::HashSet;

/// Match the fixed string `pattern` exactly at the current position.
///
/// On success the node spans `position .. position + pattern.len()` and its
/// value is the matched substring. Failures, in priority order: empty input
/// text, position at or past the end of the text, substring mismatch.
///
/// # Panics
///
/// Panics if `pattern` is empty; use [`empty`] for epsilon productions.
#[must_use]
pub fn literal(pattern: &str) -> Parser {
    assert!(!pattern.is_empty(), "{}", FatalError::EmptyPattern);

    let pattern = CompactString::from(pattern);
    Parser::new(move |text, position| {
        if text.is_empty() {
            return Err(ParseError::EmptyText);
        }

        if position >= text.len() {
            return Err(ParseError::position_exceeded(
                TokenType::Literal.name(),
                position,
            ));
        }

        match text.get(position..position + pattern.len()) {
            Some(found) if found == pattern => Ok(TokenNode::literal(
                found,
                position,
                position + pattern.len(),
            )),
            _ => Err(ParseError::unexpected_token(
                TokenType::Literal.name(),
                char_at(text, position),
                position,
            )),
        }
    })
}

/// The epsilon parser: always succeeds with a zero-width literal leaf.
///
/// Grammars use this for empty productions such as `<opt-whitespace> ::= ""`.
/// The zero-width leaves it produces are removed by
/// [`prune_empty`](crate::normalize::prune_empty) during normalization.
#[must_use]
pub fn empty() -> Parser {
    Parser::new(|_text, position| Ok(TokenNode::literal("", position, position)))
}

/// Alternation over same-length literal alternatives with a single slice
/// comparison.
///
/// Produces the same tree shape as `or` over individual [`literal`] parsers
/// (a named node wrapping one literal leaf) without running one parser per
/// alternative; grammars use it for character classes like `<letter>` and
/// `<digit>`.
///
/// # Panics
///
/// Panics if `literals` is empty or its entries do not share one length.
#[must_use]
pub fn literal_choice(token_type: TokenType, literals: &[&str]) -> Parser {
    let Some(first) = literals.first() else {
        panic!("{}", FatalError::EmptyLiteralList);
    };
    let len = first.len();
    assert!(
        len > 0 && literals.iter().all(|lit| lit.len() == len),
        "{}",
        FatalError::MixedLiteralLengths
    );

    let alternatives: HashSet<CompactString> =
        literals.iter().copied().map(CompactString::from).collect();
    Parser::new(move |text, position| {
        if text.is_empty() {
            return Err(ParseError::EmptyText);
        }

        if position >= text.len() {
            return Err(ParseError::position_exceeded(token_type.name(), position));
        }

        match text.get(position..position + len) {
            Some(found) if alternatives.contains(found) => {
                let leaf = TokenNode::literal(found, position, position + len);
                Ok(TokenNode::named(
                    token_type,
                    position,
                    position + len,
                    vec![leaf],
                ))
            }
            _ => Err(ParseError::unexpected_token(
                token_type.name(),
                char_at(text, position),
                position,
            )),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_matches_at_position() {
        let parse = literal("1");
        let node = parse.run("01", 1).unwrap();
        assert_eq!(node.start_at(), 1);
        assert_eq!(node.end_at(), 2);
        assert!(node.is_literal());
    }

    #[test]
    fn test_literal_multi_char_pattern() {
        let parse = literal("::=");
        let node = parse.run("a ::= b", 2).unwrap();
        assert_eq!(node.start_at(), 2);
        assert_eq!(node.end_at(), 5);
        match node {
            TokenNode::Literal(leaf) => assert_eq!(leaf.value(), "::="),
            TokenNode::Named(_) => panic!("expected literal leaf"),
        }
    }

    #[test]
    fn test_literal_empty_text() {
        let parse = literal("a");
        assert_eq!(parse.run("", 0), Err(ParseError::EmptyText));
    }

    #[test]
    fn test_literal_position_exceeded() {
        let parse = literal("a");
        assert_eq!(
            parse.run("a", 1),
            Err(ParseError::position_exceeded("$literal", 1))
        );
    }

    #[test]
    fn test_literal_mismatch_names_found_char() {
        let parse = literal("a");
        assert_eq!(
            parse.run("xyz", 0),
            Err(ParseError::unexpected_token("$literal", 'x', 0))
        );
    }

    #[test]
    fn test_literal_pattern_longer_than_rest() {
        let parse = literal("abc");
        assert!(matches!(
            parse.run("ab", 0),
            Err(ParseError::UnexpectedToken { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "literal pattern must not be empty")]
    fn test_literal_empty_pattern_is_fatal() {
        let _ = literal("");
    }

    #[test]
    fn test_empty_parser_zero_width() {
        let parse = empty();
        let node = parse.run("abc", 2).unwrap();
        assert_eq!(node.start_at(), 2);
        assert_eq!(node.end_at(), 2);
        assert!(node.is_empty_span());
    }

    #[test]
    fn test_literal_choice_wraps_leaf() {
        let digit = TokenType::rule("digit");
        let parse = literal_choice(digit, &["0", "1"]);
        let node = parse.run("10", 0).unwrap();
        let named = node.as_named().unwrap();
        assert_eq!(named.token_type(), digit);
        assert_eq!(named.child_count(), 1);
        assert!(named.children()[0].is_literal());
    }

    #[test]
    fn test_literal_choice_rejects_other_chars() {
        let parse = literal_choice(TokenType::rule("digit"), &["0", "1"]);
        assert_eq!(
            parse.run("2", 0),
            Err(ParseError::unexpected_token("digit", '2', 0))
        );
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_literal_choice_mixed_lengths_is_fatal() {
        let _ = literal_choice(TokenType::rule("broken"), &["a", "bb"]);
    }

    #[test]
    #[should_panic(expected = "at least one literal")]
    fn test_literal_choice_empty_list_is_fatal() {
        let _ = literal_choice(TokenType::rule("broken"), &[]);
    }
}
