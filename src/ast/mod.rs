//! Abstract Syntax Tree definitions for the Anchor programming language.
//!
//! This module defines the data structures that represent parsed Anchor
//! programs. The AST is produced by the [`crate::parser`] and consumed by
//! the [`crate::codegen`].
//!
//! # Structure
//!
//! - [`Program`] - The root node: top-level statements plus accumulated
//!   diagnostics
//! - [`Stmt`] / [`StmtKind`] - Statements (function declarations,
//!   control flow, declarations, recovery nodes)
//! - [`Expr`] / [`ExprKind`] - Expressions, each annotated with the
//!   [`Type`] it evaluates to
//! - [`Type`] - The primitive type tags of the language
//! - [`Context`] - The lexical scope stack the parser threads through
//!   declarations and lookups
//!
//! Each AST node includes source location information
//! ([`Span`](crate::token::Span)) for error reporting.
//!
//! # Module Structure
//!
//! - [`types`] - Primitive type tags
//! - [`expr`] - Expression nodes and kinds
//! - [`stmt`] - Statement nodes and kinds
//! - [`program`] - Top-level program structure and the error log
//! - [`context`] - Lexical scope frames
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::codegen`] - Generates LLVM IR from the AST

mod context;
mod expr;
mod program;
mod stmt;
mod types;


pub use context::Context;
pub use expr::{BinaryOperator, Expr, ExprKind};
pub use program::{ErrorLog, Program};
pub use stmt::{BadStmt, FunctionArg, FunctionDecl, Stmt, StmtKind};
pub use types::Type;
