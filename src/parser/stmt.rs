//! Statement parsing, scope management, and panic-mode recovery.

use super::Parser;
use super::error::ParseError;
use crate::ast::{BadStmt, ErrorLog, FunctionArg, FunctionDecl, Stmt, StmtKind};
use crate::token::{Span, TokenKind};

impl Parser {
    /// Parses a single statement, recovering on syntax errors.
    ///
    /// The first token decides which production to enter: type keywords
    /// open a variable declaration, `function` opens a function
    /// declaration, `return`/`print`/`if`/`while` are obvious, and
    /// anything else begins an expression statement (the primary
    /// vehicle for assignments).
    ///
    /// A syntax error anywhere in the attempted production appends a
    /// diagnostic, yields a [`BadStmt`] in place of the statement, and
    /// synchronizes by discarding tokens through the next `;` or the
    /// end of the stream.
    pub(super) fn stmt(&mut self) -> Stmt {
        let result = match self.peek().kind {
            TokenKind::Return => self.return_stmt(),
            TokenKind::Print => self.print_stmt(),
            TokenKind::If => self.if_stmt(),
            TokenKind::While => self.while_stmt(),
            TokenKind::IntegerType | TokenKind::BooleanType | TokenKind::StringType => {
                self.var_decl_stmt()
            }
            TokenKind::Function => self.function_stmt(),
            _ => self.expr_stmt(),
        };

        match result {
            Ok(stmt) => stmt,
            Err(error) => self.recover(error),
        }
    }

    /// Converts a syntax error into a [`BadStmt`] and synchronizes.
    fn recover(&mut self, error: ParseError) -> Stmt {
        let span = error.offender.span;
        self.errors.push(ErrorLog::new(error.message.clone(), span));

        let bad = BadStmt {
            offender: error.offender,
            expected: error.expected,
            message: error.message,
        };

        self.synchronize();
        Stmt::new(StmtKind::Bad(bad), span)
    }

    /// Discards tokens through the next `;` or `END_OF_STREAM` inclusive.
    fn synchronize(&mut self) {
        loop {
            let popped = self.pop();
            if matches!(popped.kind, TokenKind::Semicolon | TokenKind::EndOfStream) {
                break;
            }
        }
    }

    /// Parses a function declaration.
    ///
    /// # Grammar
    ///
    /// ```text
    /// functionDecl → "function" type IDENTIFIER "(" args ")" block ";"
    /// ```
    ///
    /// The parameters and body are parsed in a fresh child scope; the
    /// function's name is bound to its return type in the restored
    /// outer scope once the body is done, so a function becomes callable
    /// after (but not within) its own declaration.
    fn function_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.consume(TokenKind::Function)?;

        let (return_type, _) = self.type_name()?;
        let name = self.identifier()?;

        self.context.enter();
        let parsed = self.function_args_and_body();
        self.context.exit();
        let (args, body) = parsed?;

        self.context.set_function_type(&name.raw, return_type);

        let semi = self.consume(TokenKind::Semicolon)?;
        Ok(Stmt::new(
            StmtKind::Function(FunctionDecl {
                name: name.raw,
                return_type,
                args,
                body,
            }),
            Span::merge(start.span, semi.span),
        ))
    }

    /// Parses a function's parameter list and body.
    ///
    /// Split out of [`Parser::function_stmt`] so the caller can wrap the
    /// whole thing between one scope enter/exit pair even when parsing
    /// bails early.
    fn function_args_and_body(&mut self) -> Result<(Vec<FunctionArg>, Vec<Stmt>), ParseError> {
        let args = self.args()?;
        let body = self.block()?;
        Ok((args, body))
    }

    /// Parses a parenthesized parameter list.
    ///
    /// # Grammar
    ///
    /// ```text
    /// args → (type IDENTIFIER (";" type IDENTIFIER)*)?
    /// ```
    ///
    /// Each parameter is bound in the current (function) scope as it is
    /// parsed. The separator is `;` — which `,` also lexes to.
    fn args(&mut self) -> Result<Vec<FunctionArg>, ParseError> {
        self.consume(TokenKind::LeftParen)?;

        let mut args = Vec::new();
        while !matches!(
            self.peek().kind,
            TokenKind::RightParen | TokenKind::EndOfStream
        ) {
            let (ty, ty_token) = self.type_name()?;
            let name = self.identifier()?;

            self.context.set_type(&name.raw, ty);
            args.push(FunctionArg {
                name: name.raw,
                ty,
                span: Span::merge(ty_token.span, name.span),
            });

            if self.peek().kind == TokenKind::Semicolon {
                self.consume(TokenKind::Semicolon)?;
            }
        }

        self.consume(TokenKind::RightParen)?;
        Ok(args)
    }

    /// Parses a braced statement block in a fresh child scope.
    ///
    /// # Grammar
    ///
    /// ```text
    /// block → "{" stmt* "}"
    /// ```
    ///
    /// Statements inside the block recover individually, so one bad
    /// statement does not abandon the rest of the block. The loop also
    /// stops at `END_OF_STREAM` so a truncated input cannot spin.
    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.consume(TokenKind::LeftBracket)?;

        self.context.enter();
        let mut stmts = Vec::new();
        while !matches!(
            self.peek().kind,
            TokenKind::RightBracket | TokenKind::EndOfStream
        ) {
            stmts.push(self.stmt());
        }
        self.context.exit();

        self.consume(TokenKind::RightBracket)?;
        Ok(stmts)
    }

    /// Parses a return statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// returnStmt → "return" expr ";"
    /// ```
    fn return_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.consume(TokenKind::Return)?;
        let expr = self.expr()?;
        let semi = self.consume(TokenKind::Semicolon)?;

        Ok(Stmt::new(
            StmtKind::Return(expr),
            Span::merge(start.span, semi.span),
        ))
    }

    /// Parses a print statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// printStmt → "print" "(" expr ")" ";"
    /// ```
    ///
    /// After the statement parses, the argument expression is checked
    /// for a type mismatch; a mismatch is a diagnostic, not a parse
    /// failure.
    fn print_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.consume(TokenKind::Print)?;
        self.consume(TokenKind::LeftParen)?;

        let peeked = self.peek().clone();
        let expr = self.expr()?;

        self.consume(TokenKind::RightParen)?;
        let semi = self.consume(TokenKind::Semicolon)?;

        self.check_expr_types(&peeked, &expr);

        Ok(Stmt::new(
            StmtKind::Print(expr),
            Span::merge(start.span, semi.span),
        ))
    }

    /// Parses an if statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// ifStmt → "if" "(" expr ")" block ";"
    /// ```
    ///
    /// There is no else branch in the language.
    fn if_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.consume(TokenKind::If)?;

        self.consume(TokenKind::LeftParen)?;
        let condition = self.expr()?;
        self.consume(TokenKind::RightParen)?;

        let body = self.block()?;
        let semi = self.consume(TokenKind::Semicolon)?;

        Ok(Stmt::new(
            StmtKind::If { condition, body },
            Span::merge(start.span, semi.span),
        ))
    }

    /// Parses a while statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// whileStmt → "while" "(" expr ")" block ";"
    /// ```
    fn while_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.consume(TokenKind::While)?;

        self.consume(TokenKind::LeftParen)?;
        let condition = self.expr()?;
        self.consume(TokenKind::RightParen)?;

        let body = self.block()?;
        let semi = self.consume(TokenKind::Semicolon)?;

        Ok(Stmt::new(
            StmtKind::While { condition, body },
            Span::merge(start.span, semi.span),
        ))
    }

    /// Parses a variable declaration.
    ///
    /// # Grammar
    ///
    /// ```text
    /// varDecl → type IDENTIFIER ";"
    /// ```
    ///
    /// The variable is bound in the innermost scope so later references
    /// in the same or nested scopes resolve to its type.
    fn var_decl_stmt(&mut self) -> Result<Stmt, ParseError> {
        let (ty, ty_token) = self.type_name()?;
        let name = self.identifier()?;
        let semi = self.consume(TokenKind::Semicolon)?;

        self.context.set_type(&name.raw, ty);

        Ok(Stmt::new(
            StmtKind::VarDecl { name: name.raw, ty },
            Span::merge(ty_token.span, semi.span),
        ))
    }

    /// Parses an expression used as a statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// exprStmt → expr ";"
    /// ```
    ///
    /// This is the path assignments take. Like print arguments, the
    /// expression is type-checked after parsing.
    fn expr_stmt(&mut self) -> Result<Stmt, ParseError> {
        let peeked = self.peek().clone();
        let expr = self.expr()?;
        let semi = self.consume(TokenKind::Semicolon)?;

        self.check_expr_types(&peeked, &expr);

        let span = Span::merge(peeked.span, semi.span);
        Ok(Stmt::new(StmtKind::Expr(expr), span))
    }
}
