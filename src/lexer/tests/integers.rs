//! Tests for integer literal recognition.

use super::*;

#[test]
fn test_single_digit() {
    let tokens = tokenize("5");
    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].raw, "5");
}

#[test]
fn test_zero() {
    let tokens = tokenize("0");
    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].raw, "0");
}

#[test]
fn test_multi_digit() {
    let tokens = tokenize("12345");
    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].raw, "12345");
}

#[test]
fn test_leading_zeros_kept_in_raw() {
    let tokens = tokenize("007");
    assert_eq!(tokens[0].raw, "007");
}

#[test]
fn test_integers_separated_by_operator() {
    let kinds = tokenize_kinds("5+3");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Integer,
            TokenKind::PlusSign,
            TokenKind::Integer,
            TokenKind::EndOfStream
        ]
    );
}

#[test]
fn test_no_negative_literal() {
    // The minus sign is its own token; negative literals do not exist.
    let kinds = tokenize_kinds("-5");
    assert_eq!(
        kinds,
        vec![
            TokenKind::MinusSign,
            TokenKind::Integer,
            TokenKind::EndOfStream
        ]
    );
}
