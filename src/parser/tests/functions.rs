//! Function declaration parsing tests.

use super::*;

#[test]
fn test_function_no_args() {
    let program = parse_clean("function integer main() { return 0; };");
    let decl = first_function(&program);
    assert_eq!(decl.name, "main");
    assert_eq!(decl.return_type, Type::Integer);
    assert!(decl.args.is_empty());
    assert_eq!(decl.body.len(), 1);
}

#[test]
fn test_function_void_return_type() {
    let program = parse_clean("function void foo() { };");
    assert_eq!(first_function(&program).return_type, Type::Void);
}

#[test]
fn test_function_one_arg() {
    let program = parse_clean("function integer bar(integer a) { return a; };");
    let decl = first_function(&program);
    assert_eq!(decl.args.len(), 1);
    assert_eq!(decl.args[0].name, "a");
    assert_eq!(decl.args[0].ty, Type::Integer);
}

#[test]
fn test_function_two_args_comma_separated() {
    // `,` lexes as SEMICOLON, so comma-separated lists parse.
    let program = parse_clean("function integer bar(integer a, integer b) { return a + b; };");
    let decl = first_function(&program);
    assert_eq!(decl.args.len(), 2);
    assert_eq!(decl.args[1].name, "b");
}

#[test]
fn test_function_two_args_semicolon_separated() {
    let program = parse_clean("function integer bar(integer a; integer b) { return a; };");
    assert_eq!(first_function(&program).args.len(), 2);
}

#[test]
fn test_function_arg_types_mixed() {
    let program =
        parse_clean("function void f(integer n; boolean flag; string s) { };");
    let decl = first_function(&program);
    let types: Vec<_> = decl.args.iter().map(|a| a.ty).collect();
    assert_eq!(types, vec![Type::Integer, Type::Boolean, Type::String]);
}

#[test]
fn test_args_visible_in_body() {
    let program = parse_clean("function integer bar(integer a) { return a + 1; };");
    let decl = first_function(&program);
    match &decl.body[0].kind {
        StmtKind::Return(expr) => match &expr.kind {
            ExprKind::Binary { left, .. } => {
                assert_eq!(left.return_type, Type::Integer);
            }
            other => panic!("Expected Binary, got {:?}", other),
        },
        other => panic!("Expected Return, got {:?}", other),
    }
}

#[test]
fn test_call_annotated_with_recorded_return_type() {
    let program = parse_clean(
        "function integer bar() { return 2; };\nfunction integer main() { return bar(); };",
    );
    let main_fn = match &program.stmts[1].kind {
        StmtKind::Function(decl) => decl,
        other => panic!("Expected function, got {:?}", other),
    };
    match &main_fn.body[0].kind {
        StmtKind::Return(expr) => {
            assert!(matches!(expr.kind, ExprKind::Call { .. }));
            assert_eq!(expr.return_type, Type::Integer);
        }
        other => panic!("Expected Return, got {:?}", other),
    }
}

#[test]
fn test_function_not_callable_within_its_own_body() {
    // The name is recorded only after the body parses, so a recursive
    // call annotates as NOT_FOUND.
    let program = parse_clean("function integer f() { return f(); };");
    let decl = first_function(&program);
    match &decl.body[0].kind {
        StmtKind::Return(expr) => assert_eq!(expr.return_type, Type::NotFound),
        other => panic!("Expected Return, got {:?}", other),
    }
}

#[test]
fn test_multiple_functions() {
    let program = parse_clean(
        "function integer bar() { return 2; };\nfunction integer main() { return 0; };",
    );
    assert_eq!(program.stmts.len(), 2);
}

#[test]
fn test_args_not_visible_after_function() {
    let program = parse_clean(
        "function integer bar(integer a) { return a; };\nfunction integer main() { return a; };",
    );
    let main_fn = match &program.stmts[1].kind {
        StmtKind::Function(decl) => decl,
        other => panic!("Expected function, got {:?}", other),
    };
    match &main_fn.body[0].kind {
        StmtKind::Return(expr) => assert_eq!(expr.return_type, Type::NotFound),
        other => panic!("Expected Return, got {:?}", other),
    }
}
