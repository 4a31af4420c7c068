//! Token reading and recognition for the lexer.
//!
//! This module provides methods for reading the various token types from
//! the input: punctuation and operators, integer and string literals,
//! and keywords or identifiers.

use super::Lexer;
use super::error::LexError;
use crate::token::{Location, Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Creates a single-character token and advances the lexer.
    fn single_char_token(
        &mut self,
        kind: TokenKind,
        start_pos: usize,
        start_loc: Location,
    ) -> Token {
        self.advance();
        let span = self.span_from(start_pos, start_loc);
        Token::new(kind, &self.input[start_pos..self.pos], span)
    }

    /// Reads and returns the next token from the input.
    ///
    /// This method is called repeatedly by
    /// [`tokenize`](super::Lexer::tokenize) to produce the token stream.
    /// It assumes that whitespace has already been skipped and that at
    /// least one character remains.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if an unrecognized character is
    /// encountered or a string literal is malformed.
    pub(super) fn next_token(&mut self) -> Result<Token, LexError> {
        let c = self.current_char().ok_or_else(|| {
            let here = Location::new(self.row, self.column);
            LexError::unexpected_end_of_input(Span::new(self.pos, self.pos, here, here))
        })?;

        let start_pos = self.pos;
        let start_loc = Location::new(self.row, self.column);

        match c {
            ';' | ',' => Ok(self.single_char_token(TokenKind::Semicolon, start_pos, start_loc)),
            '(' => Ok(self.single_char_token(TokenKind::LeftParen, start_pos, start_loc)),
            ')' => Ok(self.single_char_token(TokenKind::RightParen, start_pos, start_loc)),
            '{' => Ok(self.single_char_token(TokenKind::LeftBracket, start_pos, start_loc)),
            '}' => Ok(self.single_char_token(TokenKind::RightBracket, start_pos, start_loc)),
            '+' => Ok(self.single_char_token(TokenKind::PlusSign, start_pos, start_loc)),
            '-' => Ok(self.single_char_token(TokenKind::MinusSign, start_pos, start_loc)),
            '*' => Ok(self.single_char_token(TokenKind::MultSign, start_pos, start_loc)),
            '<' => Ok(self.single_char_token(TokenKind::LessThanSign, start_pos, start_loc)),
            '>' => Ok(self.single_char_token(TokenKind::GreaterThanSign, start_pos, start_loc)),
            '=' => {
                self.advance();
                let kind = if self.current_char() == Some('=') {
                    self.advance();
                    TokenKind::DoubleEquals
                } else {
                    TokenKind::Equals
                };
                let span = self.span_from(start_pos, start_loc);
                Ok(Token::new(kind, &self.input[start_pos..self.pos], span))
            }
            '"' => self.read_string(start_pos, start_loc),
            _ if c.is_ascii_digit() => Ok(self.read_number(start_pos, start_loc)),
            _ if c.is_ascii_alphabetic() => Ok(self.read_keyword_or_identifier(start_pos, start_loc)),
            _ => {
                let here = Location::new(self.row, self.column);
                let span = Span::new(self.pos, self.pos + c.len_utf8(), here, here);
                Err(LexError::unexpected_character(c, self.pos, span))
            }
        }
    }

    /// Reads a string literal from the input.
    ///
    /// The opening double quote must be at the current position. The
    /// scan consumes every character up to and including the next
    /// unescaped closing quote; a backslash keeps its following
    /// character (so `\"` does not terminate the literal). The returned
    /// token's raw lexeme includes both quotes.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if the input ends before the closing quote.
    fn read_string(&mut self, start_pos: usize, start_loc: Location) -> Result<Token, LexError> {
        self.advance(); // opening "

        loop {
            match self.current_char() {
                Some('"') => {
                    self.advance(); // closing "
                    let span = self.span_from(start_pos, start_loc);
                    return Ok(Token::new(
                        TokenKind::String,
                        &self.input[start_pos..self.pos],
                        span,
                    ));
                }
                Some('\\') => {
                    self.advance();
                    if self.current_char().is_some() {
                        self.advance();
                    }
                }
                Some(_) => self.advance(),
                None => {
                    let here = Location::new(self.row, self.column);
                    return Err(LexError::unterminated_string(Span::new(
                        start_pos, self.pos, start_loc, here,
                    )));
                }
            }
        }
    }

    /// Reads an integer literal: a run of ASCII digits.
    fn read_number(&mut self, start_pos: usize, start_loc: Location) -> Token {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let span = self.span_from(start_pos, start_loc);
        Token::new(TokenKind::Integer, &self.input[start_pos..self.pos], span)
    }

    /// Reads a keyword or identifier from the input.
    ///
    /// A letter-initial run of alphanumeric characters is classified via
    /// the keyword table; anything not in the table is an
    /// [`TokenKind::Identifier`].
    fn read_keyword_or_identifier(&mut self, start_pos: usize, start_loc: Location) -> Token {
        while self.current_char().is_some_and(|c| c.is_ascii_alphanumeric()) {
            self.advance();
        }

        let raw = &self.input[start_pos..self.pos];
        let span = self.span_from(start_pos, start_loc);

        let kind = match raw {
            "val" => TokenKind::Val,
            "return" => TokenKind::Return,
            "function" => TokenKind::Function,
            "print" => TokenKind::Print,
            "integer" => TokenKind::IntegerType,
            "boolean" => TokenKind::BooleanType,
            "string" => TokenKind::StringType,
            "void" => TokenKind::VoidType,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "if" => TokenKind::If,
            "while" => TokenKind::While,
            _ => TokenKind::Identifier,
        };

        Token::new(kind, raw, span)
    }
}
