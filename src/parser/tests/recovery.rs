//! Panic-mode recovery tests.

use super::*;
use crate::ast::BadStmt;
use crate::token::TokenKind;

fn function_body(program: &Program, index: usize) -> &Vec<Stmt> {
    match &program.stmts[index].kind {
        StmtKind::Function(decl) => &decl.body,
        other => panic!("Expected function, got {:?}", other),
    }
}

#[test]
fn test_missing_paren_recovers_to_next_statement() {
    let source = "\nfunction void foo() {\n        print\"Hello World!\");\n        print(\"Hello World!\");\n};";
    let program = parse(source);

    // Exactly one diagnostic, with the offending lexeme quoted.
    assert_eq!(program.errors.len(), 1);
    assert_eq!(
        program.errors[0].message(),
        "Expected: LEFT_PAREN at line 3, column 14, but found \"\"Hello World!\"\"."
    );

    // The function still contains two statements: the recovery node,
    // then the correctly parsed print.
    let body = function_body(&program, 0);
    assert_eq!(body.len(), 2);
    assert!(matches!(body[0].kind, StmtKind::Bad(_)));
    assert!(matches!(body[1].kind, StmtKind::Print(_)));
}

#[test]
fn test_bad_stmt_records_offender_and_expected() {
    let source = "function void foo() { print\"x\"); print(\"y\"); };";
    let program = parse(source);

    let body = function_body(&program, 0);
    let bad: &BadStmt = match &body[0].kind {
        StmtKind::Bad(bad) => bad,
        other => panic!("Expected BadStmt, got {:?}", other),
    };
    assert_eq!(bad.offender.kind, TokenKind::String);
    assert_eq!(bad.offender.raw, "\"x\"");
    assert_eq!(bad.expected, vec![TokenKind::LeftParen]);
    assert_eq!(bad.message, program.errors[0].message());
}

#[test]
fn test_sync_discards_through_semicolon() {
    // Everything between the offender and the `;` disappears; the next
    // statement parses normally.
    let program = parse("function void foo() { return + + + 1; return 0; };");
    let body = function_body(&program, 0);
    assert_eq!(body.len(), 2);
    assert!(matches!(body[0].kind, StmtKind::Bad(_)));
    assert!(matches!(body[1].kind, StmtKind::Return(_)));
}

#[test]
fn test_two_bad_statements_two_diagnostics() {
    let program = parse("function void foo() { print\"a\"); print\"b\"); };");
    assert_eq!(program.errors.len(), 2);
    let body = function_body(&program, 0);
    assert_eq!(body.len(), 2);
    assert!(matches!(body[0].kind, StmtKind::Bad(_)));
    assert!(matches!(body[1].kind, StmtKind::Bad(_)));
}

#[test]
fn test_recovery_at_top_level() {
    let program = parse("print(1); function integer main() { return 0; };");
    // `print` at top level is a statement, so it parses; the grammar
    // allows it even though codegen will not. No diagnostic expected.
    assert!(program.is_syntactically_correct());
    assert_eq!(program.stmts.len(), 2);
}

#[test]
fn test_top_level_garbage_produces_bad_stmt() {
    let program = parse("= ; function integer main() { return 0; };");
    assert_eq!(program.errors.len(), 1);
    assert!(matches!(program.stmts[0].kind, StmtKind::Bad(_)));
    assert!(matches!(program.stmts[1].kind, StmtKind::Function(_)));
}

#[test]
fn test_sync_stops_at_end_of_stream() {
    // No semicolon anywhere after the error; recovery must not spin.
    let program = parse("function void foo() { print\"x\"");
    assert!(!program.errors.is_empty());
}

#[test]
fn test_truncated_block_reports_missing_brace() {
    let program = parse("function void foo() { return 0;");
    assert!(!program.is_syntactically_correct());
    assert!(
        program
            .errors
            .iter()
            .any(|e| e.message().contains("RIGHT_BRACKET")),
        "expected a missing-brace diagnostic, got: {:?}",
        program
            .errors
            .iter()
            .map(|e| e.message().to_string())
            .collect::<Vec<_>>()
    );
}
