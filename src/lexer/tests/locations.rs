//! Tests for token location tracking.

use super::*;

#[test]
fn test_first_token_location() {
    let tokens = tokenize("foo");
    assert_eq!(tokens[0].span.start_loc.row, 1);
    assert_eq!(tokens[0].span.start_loc.column, 1);
    assert_eq!(tokens[0].span.end_loc.column, 3);
}

#[test]
fn test_byte_offsets() {
    let tokens = tokenize("foo");
    assert_eq!(tokens[0].span.start, 0);
    assert_eq!(tokens[0].span.end, 3);
}

#[test]
fn test_location_after_spaces() {
    let tokens = tokenize("   foo");
    assert_eq!(tokens[0].span.start, 3);
    assert_eq!(tokens[0].span.start_loc.column, 4);
    assert_eq!(tokens[0].span.end_loc.column, 6);
}

#[test]
fn test_newline_advances_row_and_resets_column() {
    let tokens = tokenize("a\nb");
    assert_eq!(tokens[0].span.start_loc.row, 1);
    assert_eq!(tokens[0].span.start_loc.column, 1);
    assert_eq!(tokens[1].span.start_loc.row, 2);
    assert_eq!(tokens[1].span.start_loc.column, 1);
}

#[test]
fn test_single_char_token_start_equals_end_location() {
    let tokens = tokenize(";");
    assert_eq!(tokens[0].span.start_loc, tokens[0].span.end_loc);
}

#[test]
fn test_string_literal_location_spans_quotes() {
    let tokens = tokenize(r#"  "hi""#);
    assert_eq!(tokens[0].span.start_loc.column, 3);
    assert_eq!(tokens[0].span.end_loc.column, 6);
}

#[test]
fn test_locations_are_one_based_everywhere() {
    let source = "function integer main() {\n    print(5);\n    return 0;\n};";
    for token in tokenize(source) {
        assert!(token.span.start_loc.row >= 1);
        assert!(token.span.start_loc.column >= 1);
        assert!(token.span.end_loc.row >= 1);
        assert!(token.span.end_loc.column >= 1);
    }
}

#[test]
fn test_end_at_or_after_start_within_row() {
    let source = "integer abc;\nabc = 5;";
    for token in tokenize(source) {
        if token.span.start_loc.row == token.span.end_loc.row {
            assert!(
                token.span.end_loc.column >= token.span.start_loc.column,
                "token {:?} ends before it starts",
                token
            );
        }
    }
}

#[test]
fn test_end_of_stream_location() {
    let tokens = tokenize("ab\n");
    let eof = tokens.last().unwrap();
    assert_eq!(eof.span.start, eof.span.end);
    assert_eq!(eof.span.start_loc, eof.span.end_loc);
    assert_eq!(eof.span.start_loc.row, 2);
}

#[test]
fn test_carriage_return_is_whitespace() {
    let tokens = tokenize("a\r\nb");
    assert_eq!(tokens[1].span.start_loc.row, 2);
}
