//! Type-mismatch diagnostic tests.

use super::*;

#[test]
fn test_matching_binary_types_produce_no_diagnostic() {
    let program = parse("function void test() { print(5 + 3); };");
    assert!(program.is_syntactically_correct());
}

#[test]
fn test_string_plus_integer_in_print_reports_mismatch() {
    let program =
        parse("function void test() { string a; integer b; print(a + b); };");
    assert_eq!(program.errors.len(), 1);
    let message = program.errors[0].message();
    assert!(message.starts_with("Type Error: Expression at line 1"));
    assert!(message.ends_with("had STRING on left, INTEGER on right."));
}

#[test]
fn test_mismatch_message_exact_format() {
    let program = parse("function void test() {\n    string a;\n    integer b;\n    print(a + b);\n};");
    assert_eq!(
        program.errors[0].message(),
        "Type Error: Expression at line 4, column 11 had STRING on left, INTEGER on right."
    );
}

#[test]
fn test_assignment_mismatch_reports_declared_type_on_left() {
    let program = parse("function void test() { integer a; a = \"oops\"; };");
    assert_eq!(program.errors.len(), 1);
    assert!(
        program.errors[0]
            .message()
            .ends_with("had INTEGER on left, STRING on right."),
        "got: {}",
        program.errors[0].message()
    );
}

#[test]
fn test_assignment_match_produces_no_diagnostic() {
    let program = parse("function void test() { boolean b; b = true; };");
    assert!(program.is_syntactically_correct());
}

#[test]
fn test_type_error_does_not_halt_parsing() {
    let program = parse(
        "function void test() { integer a; a = \"x\"; a = \"y\"; return 0; };",
    );
    // Both mismatches are reported and the function still parses whole.
    assert_eq!(program.errors.len(), 2);
    assert_eq!(program.stmts.len(), 1);
    match &program.stmts[0].kind {
        StmtKind::Function(decl) => assert_eq!(decl.body.len(), 4),
        other => panic!("Expected function, got {:?}", other),
    }
}

#[test]
fn test_type_errors_count_against_syntactic_correctness() {
    let program = parse("function void test() { integer a; a = \"x\"; };");
    assert!(!program.is_syntactically_correct());
}

#[test]
fn test_comparison_of_mismatched_types_reports() {
    let program = parse("function void test() { string s; print(s == 3); };");
    assert_eq!(program.errors.len(), 1);
    assert!(
        program.errors[0]
            .message()
            .contains("had STRING on left, INTEGER on right."),
    );
}

#[test]
fn test_only_outermost_expression_is_checked() {
    let nested = parse("function void test() { string s; integer i; i = 1 + s + 2; };");
    // The disagreement inside the right-hand side is not visited; the
    // single diagnostic comes from the outermost node, the assignment
    // of a string-valued chain to an integer variable.
    assert_eq!(nested.errors.len(), 1);
    assert!(
        nested.errors[0]
            .message()
            .contains("had INTEGER on left, STRING on right.")
    );
}
