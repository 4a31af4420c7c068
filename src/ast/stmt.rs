//! Statement nodes for the Anchor AST.

use crate::token::{Span, Token, TokenKind};

use super::expr::Expr;
use super::types::Type;

/// A function declaration.
///
/// Functions are the only top-level construct; a runnable program has a
/// `main` returning `integer`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// The function name.
    pub name: String,
    /// The declared return type.
    pub return_type: Type,
    /// The parameters, in source order.
    pub args: Vec<FunctionArg>,
    /// The statements of the function body.
    pub body: Vec<Stmt>,
}

/// A single function parameter: its name and declared type.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionArg {
    /// The parameter name.
    pub name: String,
    /// The declared type.
    pub ty: Type,
    /// The source location of the parameter.
    pub span: Span,
}

/// A recovery node standing in for a statement that failed to parse.
///
/// The parser synchronizes past the failed statement and records what it
/// saw: the offending token, the kinds that would have been acceptable
/// at that point, and the formatted diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct BadStmt {
    /// The token that triggered the syntax error.
    pub offender: Token,
    /// The token kinds that were acceptable instead.
    pub expected: Vec<TokenKind>,
    /// The formatted diagnostic message.
    pub message: String,
}

/// The kind of a statement in the Anchor language.
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// A function declaration.
    Function(FunctionDecl),

    /// A conditional statement. There is no else branch.
    If {
        /// The condition expression.
        condition: Expr,
        /// The statements of the guarded block.
        body: Vec<Stmt>,
    },

    /// A while loop.
    While {
        /// The loop condition, re-evaluated before every iteration.
        condition: Expr,
        /// The statements of the loop body.
        body: Vec<Stmt>,
    },

    /// A return statement.
    Return(Expr),

    /// A print statement (`print(expr);`).
    Print(Expr),

    /// A variable declaration (`integer a;`).
    ///
    /// Declarations carry no initializer; the variable starts at its
    /// type's default and is set by assignment expressions.
    VarDecl {
        /// The variable name.
        name: String,
        /// The declared type.
        ty: Type,
    },

    /// An expression used as a statement; the value is discarded.
    ///
    /// This is the primary vehicle for assignments and bare calls.
    Expr(Expr),

    /// A recovery node for a statement that failed to parse.
    Bad(BadStmt),
}

/// A statement with its source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    /// The kind of statement.
    pub kind: StmtKind,
    /// The source location of this statement.
    pub span: Span,
}

impl Stmt {
    /// Creates a new statement with the given kind and span.
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}
