//! Cursor position management for the lexer.
//!
//! This module provides methods for tracking and advancing the lexer's
//! position within the input source code.

use super::Lexer;
use crate::token::{Location, Span};

impl<'a> Lexer<'a> {
    /// Returns the current character without consuming it.
    ///
    /// Returns `None` if the end of input has been reached.
    pub(super) fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns `true` if the end of input has been reached.
    pub(super) fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Advances the lexer by one character.
    ///
    /// Updates the position, row, and column tracking. Handles
    /// multi-byte UTF-8 characters correctly; a newline advances the row
    /// and resets the column to 1.
    pub(super) fn advance(&mut self) {
        if let Some(c) = self.current_char() {
            self.pos += c.len_utf8();
            if c == '\n' {
                self.row += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Skips whitespace (space, tab, newline, carriage return).
    pub(super) fn skip_whitespace(&mut self) {
        while self
            .current_char()
            .is_some_and(|c| matches!(c, ' ' | '\t' | '\n' | '\r'))
        {
            self.advance();
        }
    }

    /// Builds the span for a token whose last character was just consumed.
    ///
    /// The end location is the position of the last consumed character,
    /// which is one column behind the cursor. Token lexemes never end in
    /// a newline, so the cursor's column is always at least 2 here.
    pub(super) fn span_from(&self, start_pos: usize, start_loc: Location) -> Span {
        Span::new(
            start_pos,
            self.pos,
            start_loc,
            Location::new(self.row, self.column - 1),
        )
    }
}
