//! Tests for keyword classification.

use super::*;

#[test]
fn test_keyword_function() {
    let kinds = tokenize_kinds("function");
    assert_eq!(kinds, vec![TokenKind::Function, TokenKind::EndOfStream]);
}

#[test]
fn test_keyword_return() {
    let kinds = tokenize_kinds("return");
    assert_eq!(kinds, vec![TokenKind::Return, TokenKind::EndOfStream]);
}

#[test]
fn test_keyword_print() {
    let kinds = tokenize_kinds("print");
    assert_eq!(kinds, vec![TokenKind::Print, TokenKind::EndOfStream]);
}

#[test]
fn test_keyword_val() {
    let kinds = tokenize_kinds("val");
    assert_eq!(kinds, vec![TokenKind::Val, TokenKind::EndOfStream]);
}

#[test]
fn test_type_keywords() {
    let kinds = tokenize_kinds("integer boolean string void");
    assert_eq!(
        kinds,
        vec![
            TokenKind::IntegerType,
            TokenKind::BooleanType,
            TokenKind::StringType,
            TokenKind::VoidType,
            TokenKind::EndOfStream
        ]
    );
}

#[test]
fn test_boolean_literals() {
    let kinds = tokenize_kinds("true false");
    assert_eq!(
        kinds,
        vec![TokenKind::True, TokenKind::False, TokenKind::EndOfStream]
    );
}

#[test]
fn test_control_flow_keywords() {
    let kinds = tokenize_kinds("if while");
    assert_eq!(
        kinds,
        vec![TokenKind::If, TokenKind::While, TokenKind::EndOfStream]
    );
}

#[test]
fn test_keyword_raw_lexeme_preserved() {
    let tokens = tokenize("function");
    assert_eq!(tokens[0].raw, "function");
}

#[test]
fn test_keyword_prefix_is_identifier() {
    // "functions" is not the keyword "function"
    let tokens = tokenize("functions");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].raw, "functions");
}

#[test]
fn test_case_sensitive_keywords() {
    let tokens = tokenize("Function");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
}
