//! Whole-input tests for the binary numeral grammar (`0|1[01]*`).

use braid::grammar::binary_number;
use braid::{ParseError, TokenNode, TokenType};

#[test]
fn test_single_digits() {
    for text in ["0", "1"] {
        let tree = binary_number::parse(text).unwrap();
        assert_eq!(tree.token_type(), TokenType::rule("binary-number"));
        assert_eq!(tree.end_at(), 1);
    }
}

#[test]
fn test_multi_digit_number_shape() {
    let tree = binary_number::parse("1011").unwrap();
    let root = tree.as_named().unwrap();
    assert_eq!(root.token_type(), TokenType::rule("binary-number"));
    assert_eq!(root.end_at(), 4);

    // After normalization: the leading "1" leaf, then one flat sequence.
    assert_eq!(root.child_count(), 2);
    assert!(root.children()[0].is_literal());
    let sequence = root.children()[1].as_named().unwrap();
    assert_eq!(sequence.token_type(), TokenType::rule("binary-sequence"));
    assert_eq!(sequence.child_count(), 3);
    for digit in sequence.children() {
        assert_eq!(digit.token_type(), TokenType::rule("binary-digit"));
    }
}

#[test]
fn test_leading_zero_is_rejected_as_trailing_input() {
    // "0" parses alone; anything after it is unconsumed input.
    let err = binary_number::parse("01").unwrap_err();
    assert_eq!(err, ParseError::unexpected_token("$root", '1', 1));
}

#[test]
fn test_empty_text() {
    assert_eq!(binary_number::parse(""), Err(ParseError::EmptyText));
}

#[test]
fn test_non_digit_input() {
    let err = binary_number::parse("2").unwrap_err();
    assert_eq!(err, ParseError::unexpected_token("$literal", '2', 0));
}

#[test]
fn test_trailing_garbage_reports_first_unconsumed_position() {
    let err = binary_number::parse("10x0").unwrap_err();
    assert_eq!(err, ParseError::unexpected_token("$root", 'x', 2));
}

#[test]
fn test_spans_cover_input_contiguously() {
    let tree = binary_number::parse("110101").unwrap();
    assert_eq!(tree.start_at(), 0);
    assert_eq!(tree.end_at(), 6);
    assert_contiguous(&tree);
}

fn assert_contiguous(node: &TokenNode) {
    let Some(named) = node.as_named() else {
        return;
    };
    let mut cursor = named.start_at();
    for child in named.children() {
        assert_eq!(child.start_at(), cursor);
        cursor = child.end_at();
        assert_contiguous(child);
    }
    assert_eq!(cursor, named.end_at());
}

#[cfg(feature = "serialize")]
#[test]
fn test_json_interchange_shape() {
    let tree = binary_number::parse("0").unwrap();
    assert_eq!(
        tree.to_json(),
        serde_json::json!({
            "type": "binary-number",
            "startAt": 0,
            "endAt": 1,
            "children": [{
                "type": "binary-digit",
                "startAt": 0,
                "endAt": 1,
                "children": [{
                    "type": "$literal",
                    "value": "0",
                    "startAt": 0,
                    "endAt": 1,
                }],
            }],
        })
    );
}
