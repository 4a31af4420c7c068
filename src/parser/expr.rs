//! Expression parsing and type annotation.

use super::Parser;
use super::error::ParseError;
use crate::ast::{BinaryOperator, ErrorLog, Expr, ExprKind, Type};
use crate::token::{Span, Token, TokenKind};

impl Parser {
    /// Parses an expression.
    ///
    /// # Grammar
    ///
    /// ```text
    /// expr → atom (binOp expr)?
    /// ```
    ///
    /// Binary operations recurse into `expr` on the right-hand side, so
    /// every operator is right-associative and none has precedence:
    /// `a + b * c` groups as `a + (b * c)` and `1 - 2 - 3` as
    /// `1 - (2 - 3)`.
    ///
    /// Type annotation happens here as well: arithmetic results are
    /// `STRING` if either side is a string (string concatenation) and
    /// `INTEGER` otherwise; comparisons are `BOOLEAN`.
    pub(super) fn expr(&mut self) -> Result<Expr, ParseError> {
        let lhs = self.atom()?;

        if Self::is_arithmetic_op(self.peek().kind) {
            let op = self.operation()?;
            let right = self.expr()?;

            let return_type =
                if lhs.return_type == Type::String || right.return_type == Type::String {
                    Type::String
                } else {
                    Type::Integer
                };

            let span = Span::merge(lhs.span, right.span);
            return Ok(Expr::new(
                ExprKind::Binary {
                    left: Box::new(lhs),
                    op,
                    right: Box::new(right),
                },
                return_type,
                span,
            ));
        }

        if Self::is_comparison_op(self.peek().kind) {
            let op = self.operation()?;
            let right = self.expr()?;

            let span = Span::merge(lhs.span, right.span);
            return Ok(Expr::new(
                ExprKind::Binary {
                    left: Box::new(lhs),
                    op,
                    right: Box::new(right),
                },
                Type::Boolean,
                span,
            ));
        }

        Ok(lhs)
    }

    fn is_arithmetic_op(kind: TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::PlusSign | TokenKind::MinusSign | TokenKind::MultSign
        )
    }

    fn is_comparison_op(kind: TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::LessThanSign | TokenKind::GreaterThanSign | TokenKind::DoubleEquals
        )
    }

    /// Parses an atom: a literal or an identifier-led expression.
    fn atom(&mut self) -> Result<Expr, ParseError> {
        match self.peek().kind {
            TokenKind::String => self.string_literal(),
            TokenKind::Integer => self.integer_literal(),
            TokenKind::True | TokenKind::False => self.boolean_literal(),
            TokenKind::Identifier => self.call_or_var_or_assign(),
            _ => Err(ParseError::new(
                self.peek().clone(),
                vec![
                    TokenKind::String,
                    TokenKind::Integer,
                    TokenKind::True,
                    TokenKind::False,
                    TokenKind::Identifier,
                ],
            )),
        }
    }

    /// Parses a string literal, stripping the surrounding quotes.
    fn string_literal(&mut self) -> Result<Expr, ParseError> {
        let token = self.pop();
        let literal = token.raw[1..token.raw.len() - 1].to_string();

        Ok(Expr::new(
            ExprKind::StringLiteral(literal),
            Type::String,
            token.span,
        ))
    }

    /// Parses an integer literal.
    fn integer_literal(&mut self) -> Result<Expr, ParseError> {
        let token = self.pop();
        let value: i64 = token.raw.parse().map_err(|_| {
            let start = token.span.start_loc;
            ParseError::with_message(
                token.clone(),
                format!(
                    "Integer literal \"{}\" at line {}, column {} does not fit in a 64-bit integer.",
                    token.raw, start.row, start.column
                ),
            )
        })?;

        Ok(Expr::new(
            ExprKind::IntegerLiteral(value),
            Type::Integer,
            token.span,
        ))
    }

    /// Parses a boolean literal.
    fn boolean_literal(&mut self) -> Result<Expr, ParseError> {
        let token = self.pop();
        match token.kind {
            TokenKind::True => Ok(Expr::new(
                ExprKind::BooleanLiteral(true),
                Type::Boolean,
                token.span,
            )),
            TokenKind::False => Ok(Expr::new(
                ExprKind::BooleanLiteral(false),
                Type::Boolean,
                token.span,
            )),
            _ => Err(ParseError::new(
                token,
                vec![TokenKind::True, TokenKind::False],
            )),
        }
    }

    /// Parses an identifier-led expression: a call, an assignment, or a
    /// plain variable reference.
    ///
    /// # Grammar
    ///
    /// ```text
    /// callOrVarOrAssign → IDENTIFIER ("(" callArgs ")" | "=" expr | ε)
    /// callArgs          → (expr (";" expr)*)?
    /// ```
    ///
    /// The annotation comes from the scope stack: a call gets the
    /// callee's recorded return type; a reference or assignment gets the
    /// variable's declared type. Unknown identifiers annotate as
    /// `NOT_FOUND`.
    fn call_or_var_or_assign(&mut self) -> Result<Expr, ParseError> {
        let name = self.identifier()?;

        match self.peek().kind {
            TokenKind::LeftParen => {
                self.consume(TokenKind::LeftParen)?;

                let mut args = Vec::new();
                while !matches!(
                    self.peek().kind,
                    TokenKind::RightParen | TokenKind::EndOfStream
                ) {
                    args.push(self.expr()?);

                    if self.peek().kind == TokenKind::Semicolon {
                        self.consume(TokenKind::Semicolon)?;
                    }
                }

                let close = self.consume(TokenKind::RightParen)?;
                let return_type = self.context.get_function_type(&name.raw);
                let span = Span::merge(name.span, close.span);

                Ok(Expr::new(
                    ExprKind::Call {
                        callee: name.raw,
                        args,
                    },
                    return_type,
                    span,
                ))
            }
            TokenKind::Equals => {
                self.consume(TokenKind::Equals)?;
                let value = self.expr()?;

                let return_type = self.context.get_type(&name.raw);
                let span = Span::merge(name.span, value.span);

                Ok(Expr::new(
                    ExprKind::Assign {
                        name: name.raw,
                        value: Box::new(value),
                    },
                    return_type,
                    span,
                ))
            }
            _ => {
                let return_type = self.context.get_type(&name.raw);
                Ok(Expr::new(
                    ExprKind::VarRef(name.raw.clone()),
                    return_type,
                    name.span,
                ))
            }
        }
    }

    /// Consumes a binary operator token and maps it to its operator.
    fn operation(&mut self) -> Result<BinaryOperator, ParseError> {
        let token = self.pop();
        match token.kind {
            TokenKind::PlusSign => Ok(BinaryOperator::Add),
            TokenKind::MinusSign => Ok(BinaryOperator::Sub),
            TokenKind::MultSign => Ok(BinaryOperator::Mul),
            TokenKind::LessThanSign => Ok(BinaryOperator::LessThan),
            TokenKind::GreaterThanSign => Ok(BinaryOperator::GreaterThan),
            TokenKind::DoubleEquals => Ok(BinaryOperator::Equals),
            TokenKind::Equals => Ok(BinaryOperator::Assign),
            _ => Err(ParseError::new(
                token,
                vec![
                    TokenKind::PlusSign,
                    TokenKind::MinusSign,
                    TokenKind::MultSign,
                    TokenKind::LessThanSign,
                    TokenKind::GreaterThanSign,
                    TokenKind::DoubleEquals,
                ],
            )),
        }
    }

    /// Records a diagnostic when an expression's two sides disagree.
    ///
    /// Only the outermost node is inspected: a `Binary` whose operand
    /// types differ, or an `Assign` whose variable and value types
    /// differ. The reported location is that of the expression's first
    /// token, captured by the caller before parsing it.
    pub(super) fn check_expr_types(&mut self, peeked: &Token, expr: &Expr) {
        let mismatch = match &expr.kind {
            ExprKind::Binary { left, right, .. } if left.return_type != right.return_type => {
                Some((left.return_type, right.return_type))
            }
            ExprKind::Assign { value, .. } if expr.return_type != value.return_type => {
                Some((expr.return_type, value.return_type))
            }
            _ => None,
        };

        if let Some((left_type, right_type)) = mismatch {
            let start = peeked.span.start_loc;
            self.errors.push(ErrorLog::new(
                format!(
                    "Type Error: Expression at line {}, column {} had {} on left, {} on right.",
                    start.row, start.column, left_type, right_type
                ),
                peeked.span,
            ));
        }
    }
}
