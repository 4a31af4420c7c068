//! Lexical analyzer for the Anchor programming language.
//!
//! This module provides the [`Lexer`] struct which converts source code
//! text into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer performs the following tasks:
//! - Scans the input character by character
//! - Recognizes keywords, identifiers, integer and string literals, and
//!   punctuation
//! - Tracks 1-based row/column positions for error reporting
//! - Skips whitespace (newlines advance the row and reset the column)
//!
//! # Supported Tokens
//!
//! - **Keywords**: `function`, `return`, `print`, `if`, `while`, `val`,
//!   `true`, `false`, and the type names `integer`, `boolean`, `string`,
//!   `void`
//! - **Identifiers**: a letter followed by alphanumeric characters
//! - **Integer literals**: runs of ASCII digits (unsigned decimal)
//! - **String literals**: enclosed in double quotes; the raw lexeme keeps
//!   both quotes, and a backslash-escaped `\"` does not terminate the
//!   literal
//! - **Punctuation**: `= == ; ( ) { } + - * < > ,` — note that `,` is
//!   scanned as a [`TokenKind::Semicolon`], so source-level lists
//!   separate with either character
//!
//! The token vector always ends with a single
//! [`TokenKind::EndOfStream`] token.
//!
//! # Examples
//!
//! ```
//! use anchor::lexer::Lexer;
//! use anchor::token::TokenKind;
//!
//! let tokens = Lexer::new("print(5);").tokenize().unwrap();
//!
//! assert_eq!(tokens[0].kind, TokenKind::Print);
//! assert_eq!(tokens[1].kind, TokenKind::LeftParen);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfStream);
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for lexical analysis
//! - [`cursor`] - Position tracking and character navigation
//! - [`tokens`] - Token recognition and reading
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod error;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::LexError;

use crate::token::{Location, Span, Token, TokenKind};

/// A lexical analyzer that tokenizes Anchor source code.
///
/// The `Lexer` maintains its position within the input and tracks
/// row/column numbers for error reporting. It is designed to be used
/// once per source buffer.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    pub(super) input: &'a str,
    /// Current byte position in the input.
    pub(super) pos: usize,
    /// Current row number (1-indexed).
    pub(super) row: usize,
    /// Current column number (1-indexed).
    pub(super) column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    ///
    /// The lexer starts at the beginning of the input with row and
    /// column numbers initialized to 1.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            row: 1,
            column: 1,
        }
    }

    /// Tokenizes the entire input and returns a vector of tokens.
    ///
    /// This method consumes the input from start to end, producing
    /// tokens until the end of input is reached. The returned vector
    /// always ends with a [`TokenKind::EndOfStream`] token.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if an unrecognized character is
    /// encountered or a string literal is not terminated before the end
    /// of input. The lexer does not recover; the first error aborts the
    /// scan.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_eof() {
                let here = Location::new(self.row, self.column);
                let span = Span::new(self.pos, self.pos, here, here);
                tokens.push(Token::new(TokenKind::EndOfStream, "", span));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }
}
