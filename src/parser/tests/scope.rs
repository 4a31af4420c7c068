//! Scope visibility and shadowing tests.
//!
//! The parser annotates variable references from the scope in effect
//! where they appear, so these tests pin scope behavior by inspecting
//! annotations in the produced AST.

use super::*;

fn body_of(program: &Program, index: usize) -> &Vec<Stmt> {
    match &program.stmts[index].kind {
        StmtKind::Function(decl) => &decl.body,
        other => panic!("Expected function, got {:?}", other),
    }
}

fn expr_of(stmt: &Stmt) -> &Expr {
    match &stmt.kind {
        StmtKind::Expr(expr) => expr,
        other => panic!("Expected Expr statement, got {:?}", other),
    }
}

#[test]
fn test_variable_visible_in_nested_block() {
    let program = parse_clean("function void test() { integer a; if (true) { a = 5; }; };");
    let body = body_of(&program, 0);
    let if_body = match &body[1].kind {
        StmtKind::If { body, .. } => body,
        other => panic!("Expected If, got {:?}", other),
    };
    assert_eq!(expr_of(&if_body[0]).return_type, Type::Integer);
}

#[test]
fn test_block_binding_invisible_after_exit() {
    let program =
        parse_clean("function void test() { if (true) { integer inner; }; inner; };");
    let body = body_of(&program, 0);
    // After the block ends, `inner` is gone.
    assert_eq!(expr_of(&body[1]).return_type, Type::NotFound);
}

#[test]
fn test_shadowing_reverts_after_block() {
    let program = parse_clean(
        "function void test() { integer a; if (true) { string a; a = \"x\"; }; a = 5; };",
    );
    let body = body_of(&program, 0);

    let if_body = match &body[1].kind {
        StmtKind::If { body, .. } => body,
        other => panic!("Expected If, got {:?}", other),
    };
    // Inside the block the shadow wins...
    assert_eq!(expr_of(&if_body[1]).return_type, Type::String);
    // ...and outside, the outer binding is back.
    assert_eq!(expr_of(&body[2]).return_type, Type::Integer);
}

#[test]
fn test_locals_do_not_leak_between_functions() {
    let program = parse_clean(
        "function void one() { integer a; };\nfunction void two() { a; };",
    );
    let body = body_of(&program, 1);
    assert_eq!(expr_of(&body[0]).return_type, Type::NotFound);
}

#[test]
fn test_function_names_visible_across_declarations() {
    let program = parse_clean(
        "function string greet() { return \"hi\"; };\nfunction void test() { greet(); };",
    );
    let body = body_of(&program, 1);
    assert_eq!(expr_of(&body[0]).return_type, Type::String);
}

#[test]
fn test_while_body_has_its_own_scope() {
    let program = parse_clean(
        "function void test() { integer i; while (i < 3) { integer tmp; }; tmp; };",
    );
    let body = body_of(&program, 0);
    assert_eq!(expr_of(&body[2]).return_type, Type::NotFound);
}
