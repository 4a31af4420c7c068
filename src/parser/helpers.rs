//! Parser helper methods for token navigation and basic operations.

use super::Parser;
use super::error::ParseError;
use crate::ast::Type;
use crate::token::{Token, TokenKind};

impl Parser {
    /// Returns a reference to the current token.
    ///
    /// This method is safe to call at any time; once the cursor reaches
    /// the final `END_OF_STREAM` token it stays there.
    pub(super) fn peek(&self) -> &Token {
        // new() ensures tokens is non-empty, and pop() never advances
        // past the last token, so the index is always in bounds.
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Removes and returns the current token.
    ///
    /// The `END_OF_STREAM` token is never consumed: popping at the end
    /// of the stream returns it again, which lets recovery loops treat
    /// it as a fuse instead of running off the stream.
    pub(super) fn pop(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::EndOfStream {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if it has the given kind.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] naming `kind` as the only acceptable
    /// kind if the current token does not match.
    pub(super) fn consume(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.peek().kind == kind {
            Ok(self.pop())
        } else {
            Err(ParseError::new(self.peek().clone(), vec![kind]))
        }
    }

    /// Consumes an identifier token and returns it.
    pub(super) fn identifier(&mut self) -> Result<Token, ParseError> {
        let token = self.pop();
        if token.kind != TokenKind::Identifier {
            return Err(ParseError::new(token, vec![TokenKind::Identifier]));
        }
        Ok(token)
    }

    /// Consumes a type keyword and returns the tag with its token.
    pub(super) fn type_name(&mut self) -> Result<(Type, Token), ParseError> {
        let token = self.pop();
        let ty = match token.kind {
            TokenKind::IntegerType => Type::Integer,
            TokenKind::BooleanType => Type::Boolean,
            TokenKind::StringType => Type::String,
            TokenKind::VoidType => Type::Void,
            _ => {
                return Err(ParseError::new(
                    token,
                    vec![
                        TokenKind::IntegerType,
                        TokenKind::BooleanType,
                        TokenKind::StringType,
                        TokenKind::VoidType,
                    ],
                ));
            }
        };
        Ok((ty, token))
    }
}
