//! Tests for identifier recognition.

use super::*;

#[test]
fn test_simple_identifier() {
    let tokens = tokenize("main");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].raw, "main");
}

#[test]
fn test_single_letter_identifier() {
    let tokens = tokenize("a");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].raw, "a");
}

#[test]
fn test_identifier_with_digits() {
    let tokens = tokenize("loop2");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].raw, "loop2");
}

#[test]
fn test_identifier_stops_at_punctuation() {
    let kinds = tokenize_kinds("foo(");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::LeftParen,
            TokenKind::EndOfStream
        ]
    );
}

#[test]
fn test_two_identifiers() {
    let tokens = tokenize("foo bar");
    assert_eq!(tokens[0].raw, "foo");
    assert_eq!(tokens[1].raw, "bar");
}

#[test]
fn test_digit_initial_run_is_integer_then_identifier() {
    // A digit-initial run lexes as INTEGER; the letters that follow
    // start a fresh identifier token.
    let kinds = tokenize_kinds("2abc");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Integer,
            TokenKind::Identifier,
            TokenKind::EndOfStream
        ]
    );
}
