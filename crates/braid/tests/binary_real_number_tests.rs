//! Whole-input tests for the signed binary decimal grammar.

use braid::grammar::binary_real_number;
use braid::{ParseError, TokenType};

fn rule(name: &str) -> TokenType {
    TokenType::rule(name)
}

#[test]
fn test_plain_integers() {
    for text in ["0", "1", "10", "110"] {
        let tree = binary_real_number::parse(text).unwrap();
        assert_eq!(tree.token_type(), rule("binary-number"));
        assert_eq!(tree.end_at(), text.len());
        // An integer parse wraps a single binary-integer.
        let root = tree.as_named().unwrap();
        assert_eq!(root.child_count(), 1);
        assert_eq!(root.children()[0].token_type(), rule("binary-integer"));
    }
}

#[test]
fn test_negative_integer() {
    let tree = binary_real_number::parse("-101").unwrap();
    let integer = tree.as_named().unwrap().children()[0].as_named().unwrap();
    assert_eq!(integer.token_type(), rule("binary-integer"));
    // The sign and the magnitude sit side by side after normalization.
    assert_eq!(integer.child_count(), 2);
    assert!(integer.children()[0].is_literal());
    assert_eq!(
        integer.children()[1].token_type(),
        rule("binary-natural-number")
    );
}

#[test]
fn test_decimal_wins_over_its_integer_prefix() {
    // "10" alone is a valid integer, but the decimal reading consumes more.
    let tree = binary_real_number::parse("10.01").unwrap();
    let decimal = tree.as_named().unwrap().children()[0].as_named().unwrap();
    assert_eq!(decimal.token_type(), rule("binary-decimal"));
    assert_eq!(decimal.end_at(), 5);

    let types: Vec<TokenType> = decimal
        .children()
        .iter()
        .map(braid::TokenNode::token_type)
        .collect();
    assert_eq!(
        types,
        vec![
            rule("binary-integer"),
            TokenType::Literal,
            rule("binary-sequence"),
        ]
    );
}

#[test]
fn test_negative_decimal() {
    let tree = binary_real_number::parse("-0.1").unwrap();
    let decimal = tree.as_named().unwrap().children()[0].as_named().unwrap();
    assert_eq!(decimal.token_type(), rule("binary-decimal"));
    assert_eq!(decimal.end_at(), 4);
}

#[test]
fn test_zero_tie_prefers_the_bare_zero_alternative() {
    // "0" matches both the literal-zero and the natural-number alternatives
    // at the same length; the first-listed literal wins, so the integer's
    // child is a bare leaf rather than a natural-number node.
    let tree = binary_real_number::parse("0").unwrap();
    let integer = tree.as_named().unwrap().children()[0].as_named().unwrap();
    assert_eq!(integer.child_count(), 1);
    assert!(integer.children()[0].is_literal());
}

#[test]
fn test_dangling_fraction_point_is_trailing_input() {
    // The decimal alternative fails at the missing fraction digits, so the
    // integer reading wins and the "." is left unconsumed.
    let err = binary_real_number::parse("10.").unwrap_err();
    assert_eq!(err, ParseError::unexpected_token("$root", '.', 2));
}

#[test]
fn test_fraction_requires_at_least_one_digit() {
    let err = binary_real_number::parse("1.x").unwrap_err();
    assert_eq!(err, ParseError::unexpected_token("$root", '.', 1));
}

#[test]
fn test_bare_sign_is_rejected() {
    let err = binary_real_number::parse("-").unwrap_err();
    assert_eq!(err.position(), Some(0));
}

#[test]
fn test_empty_text() {
    assert_eq!(binary_real_number::parse(""), Err(ParseError::EmptyText));
}
