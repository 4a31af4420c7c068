//! Expression nodes for the Anchor AST.

use crate::token::Span;

use super::types::Type;

/// A binary operator.
///
/// Arithmetic operators combine integers (or concatenate strings, for
/// [`BinaryOperator::Add`]); the comparison operators produce booleans.
/// [`BinaryOperator::Assign`] exists because `=` is a member of the
/// operator token set, but assignments are parsed into
/// [`ExprKind::Assign`] nodes, so it never reaches a `Binary` node in a
/// well-formed tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`), or string concatenation when either side is a string.
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Signed less-than comparison (`<`).
    LessThan,
    /// Signed greater-than comparison (`>`).
    GreaterThan,
    /// Equality comparison (`==`).
    Equals,
    /// Assignment (`=`).
    Assign,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::LessThan => "<",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::Equals => "==",
            BinaryOperator::Assign => "=",
        };
        f.write_str(symbol)
    }
}

/// The kind of an expression in the Anchor language.
///
/// This enum represents the different types of expressions without the
/// type annotation or source location. Use [`Expr`] for the full AST
/// node.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// An integer literal value.
    IntegerLiteral(i64),

    /// A boolean literal value (`true` or `false`).
    BooleanLiteral(bool),

    /// A string literal value, with the surrounding quotes stripped.
    StringLiteral(String),

    /// A variable reference.
    ///
    /// The type annotation on the enclosing [`Expr`] is resolved from
    /// the scope in effect where the reference appears.
    VarRef(String),

    /// A binary operation.
    ///
    /// Expression parsing is right-associative with no precedence, so
    /// `a + b + c` groups as `a + (b + c)`.
    Binary {
        /// The left operand.
        left: Box<Expr>,
        /// The operator.
        op: BinaryOperator,
        /// The right operand.
        right: Box<Expr>,
    },

    /// A function call expression.
    Call {
        /// The name of the function being called.
        callee: String,
        /// The arguments, in source order.
        args: Vec<Expr>,
    },

    /// A variable assignment expression (`a = expr`).
    ///
    /// The annotation on the enclosing [`Expr`] is the declared type of
    /// the assigned variable, not the type of the right-hand side; a
    /// mismatch between the two is a type diagnostic.
    Assign {
        /// The name of the variable being assigned.
        name: String,
        /// The right-hand side.
        value: Box<Expr>,
    },
}

/// An expression with its type annotation and source location.
///
/// The parser records a `return_type` on every expression it builds
/// (literal types, scope lookups for references and calls, and the
/// arithmetic/comparison rules for binary operations), so later phases
/// never re-derive types.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    /// The kind of expression.
    pub kind: ExprKind,
    /// The type this expression evaluates to.
    pub return_type: Type,
    /// The source location of this expression.
    pub span: Span,
}

impl Expr {
    /// Creates a new expression with the given kind, type, and span.
    pub fn new(kind: ExprKind, return_type: Type, span: Span) -> Self {
        Expr {
            kind,
            return_type,
            span,
        }
    }
}
