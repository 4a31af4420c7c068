//! Lexical analysis error types.
//!
//! This module defines [`LexError`], which represents errors that can
//! occur during tokenization.

use crate::token::Span;

/// An error that occurred during lexical analysis.
///
/// `LexError` contains a human-readable message and the source location
/// where the error occurred, enabling rich error reporting with tools
/// like [`ariadne`].
///
/// The lexer does not recover: the first `LexError` aborts the scan and
/// propagates out of the compilation.
///
/// [`ariadne`]: https://docs.rs/ariadne
#[derive(Debug)]
pub struct LexError {
    /// A human-readable description of the error.
    pub message: String,
    /// The source location where the error occurred.
    pub span: Span,
}

impl LexError {
    /// An unrecognized character, reported by its byte offset.
    pub(super) fn unexpected_character(c: char, offset: usize, span: Span) -> Self {
        LexError {
            message: format!("Lexer could not parse character '{c}' at offset {offset}"),
            span,
        }
    }

    /// A string literal whose closing quote never arrived.
    pub(super) fn unterminated_string(span: Span) -> Self {
        LexError {
            message: "Unterminated string literal".to_string(),
            span,
        }
    }

    /// The scanner was asked for a token with no input left.
    pub(super) fn unexpected_end_of_input(span: Span) -> Self {
        LexError {
            message: "Unexpected end of input".to_string(),
            span,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.start_loc.row, self.span.start_loc.column, self.message
        )
    }
}

impl std::error::Error for LexError {}
