//! Unit tests for parsing.
//!
//! Tests are organized by parser concern:
//! - [`stmt`]: Statement parsing and spans
//! - [`functions`]: Function declarations, parameters, call annotation
//! - [`expr`]: Expression parsing, associativity, type annotation
//! - [`scope`]: Scope visibility and shadowing
//! - [`types`]: Type-mismatch diagnostics
//! - [`errors`]: Error construction and message quality
//! - [`recovery`]: Panic-mode recovery and BadStmt substitution

use super::*;
use crate::ast::{Expr, ExprKind, FunctionDecl, Stmt, StmtKind, Type};
use crate::lexer::Lexer;

mod functions;
mod recovery;
mod scope;
mod types;

/// Helper function to lex and parse input into a Program.
pub(super) fn parse(input: &str) -> Program {
    let tokens = Lexer::new(input)
        .tokenize()
        .unwrap_or_else(|e| panic!("Lexer failed on parser test input {:?}: {}", input, e));
    Parser::new(tokens).parse()
}

/// Helper that parses input and asserts no diagnostics were produced.
pub(super) fn parse_clean(input: &str) -> Program {
    let program = parse(input);
    assert!(
        program.is_syntactically_correct(),
        "Input {:?} produced diagnostics: {:?}",
        input,
        program
            .errors
            .iter()
            .map(|e| e.message().to_string())
            .collect::<Vec<_>>()
    );
    program
}

/// Helper extracting the first top-level function declaration.
pub(super) fn first_function(program: &Program) -> &FunctionDecl {
    match &program.stmts.first().expect("program has no statements").kind {
        StmtKind::Function(decl) => decl,
        other => panic!("Expected a function declaration, got {:?}", other),
    }
}

/// Helper parsing a function body and returning its statements.
///
/// Wraps `body` in `function void test() { ... };`.
pub(super) fn parse_body(body: &str) -> Vec<Stmt> {
    let input = format!("function void test() {{ {} }};", body);
    let program = parse_clean(&input);
    first_function(&program).body.clone()
}

/// Helper extracting the expression from a body's first statement,
/// which must be an expression statement.
pub(super) fn parse_first_expr(body: &str) -> Expr {
    let stmts = parse_body(body);
    match &stmts.first().expect("body has no statements").kind {
        StmtKind::Expr(expr) => expr.clone(),
        other => panic!("Expected expression statement, got {:?}", other),
    }
}
