//! Parse error types.

use crate::token::{Token, TokenKind};

/// An error that occurred during parsing.
///
/// `ParseError` carries the offending token, the set of token kinds
/// that would have been acceptable in its place, and the formatted
/// diagnostic built from both. The parser converts these into
/// [`ErrorLog`](crate::ast::ErrorLog) entries and recovery
/// [`BadStmt`](crate::ast::BadStmt) nodes at statement boundaries.
///
/// # See Also
///
/// * [`crate::lexer::LexError`] - Similar error type for lexical errors
#[derive(Debug)]
pub struct ParseError {
    /// The token that triggered the error.
    pub offender: Token,
    /// The token kinds that were acceptable instead.
    pub expected: Vec<TokenKind>,
    /// The formatted diagnostic message.
    pub message: String,
}

impl ParseError {
    /// Creates an error from an unexpected token and the acceptable set.
    ///
    /// The message reads
    /// `Expected: <KINDS> at line R, column C, but found "<lexeme>".`
    /// with the kinds joined by `, ` and R/C taken from the offender's
    /// start location.
    ///
    /// # Panics
    ///
    /// Panics if `expected` is empty, or if it contains the offender's
    /// own kind. Either would make the diagnostic nonsense, so both are
    /// programmer errors, not user errors.
    pub fn new(offender: Token, expected: Vec<TokenKind>) -> Self {
        assert!(
            !expected.is_empty(),
            "Cannot construct a syntax error with an empty list of expected token kinds"
        );
        assert!(
            !expected.contains(&offender.kind),
            "Cannot construct a syntax error where the expected kinds contain the offender {}",
            offender.kind
        );

        let kinds = expected
            .iter()
            .map(|kind| kind.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let start = offender.span.start_loc;
        let message = format!(
            "Expected: {} at line {}, column {}, but found \"{}\".",
            kinds, start.row, start.column, offender.raw
        );

        ParseError {
            offender,
            expected,
            message,
        }
    }

    /// Creates an error with a preformatted message and no expected set.
    ///
    /// Used for defects that are not a matter of the wrong token kind,
    /// such as an integer literal too large to represent.
    pub fn with_message(offender: Token, message: impl Into<String>) -> Self {
        ParseError {
            offender,
            expected: Vec::new(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ParseError {}
