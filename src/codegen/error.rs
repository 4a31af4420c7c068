//! Code generation error types.
//!
//! This module defines [`CodegenError`], which represents errors that
//! can occur during LLVM IR generation.
//!
//! Every error here is internal: the parser gates code generation on a
//! clean program, so reaching one of these means an AST shape the
//! generator does not handle, a violated generator invariant, or a
//! failed builder call — a compiler bug, not a user mistake.

use crate::ast::{BinaryOperator, Type};
use crate::token::Span;

/// An error that occurred during code generation.
///
/// Contains a human-readable message and optionally the source location
/// where the error occurred, enabling rich error reporting.
#[derive(Debug)]
pub struct CodegenError {
    /// A human-readable description of the error.
    pub message: String,
    /// The source location where the error occurred, if available.
    pub span: Option<Span>,
}

impl CodegenError {
    /// Creates a new error with a message and source location.
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        CodegenError {
            message: message.into(),
            span: Some(span),
        }
    }

    /// Creates a new error with only a message (no source location).
    pub fn without_span(message: impl Into<String>) -> Self {
        CodegenError {
            message: message.into(),
            span: None,
        }
    }

    pub(super) fn internal_unexpected_top_level(span: Span) -> Self {
        CodegenError::new(
            "Internal error: only function declarations may appear at the top level. \
             The grammar should have rejected this. This is a compiler bug.",
            span,
        )
    }

    pub(super) fn internal_bad_stmt_reached_codegen(span: Span) -> Self {
        CodegenError::new(
            "Internal error: recovery statement reached code generation. \
             Compilation should have been gated on a clean parse. This is a compiler bug.",
            span,
        )
    }

    pub(super) fn internal_unsupported_value_type(ty: Type, span: Span) -> Self {
        CodegenError::new(
            format!(
                "Internal error: the type {} has no value representation. \
                 This is a compiler bug.",
                ty
            ),
            span,
        )
    }

    pub(super) fn internal_missing_return(name: &str, ty: Type) -> Self {
        CodegenError::without_span(format!(
            "Internal error: function '{}' with return type {} fell off the end of its body \
             without a return statement.",
            name, ty
        ))
    }

    pub(super) fn internal_param_missing(name: &str, index: usize, span: Span) -> Self {
        CodegenError::new(
            format!(
                "Internal error: parameter {} of function '{}' is missing from the declared \
                 signature. This is a compiler bug.",
                index, name
            ),
            span,
        )
    }

    pub(super) fn internal_no_current_function(span: Span) -> Self {
        CodegenError::new(
            "Internal error: no current function while emitting control flow. \
             This is a compiler bug.",
            span,
        )
    }

    pub(super) fn internal_no_variable_scope(span: Span) -> Self {
        CodegenError::new(
            "Internal error: no variable scope is active. This is a compiler bug.",
            span,
        )
    }

    pub(super) fn internal_variable_not_found(name: &str, span: Span) -> Self {
        CodegenError::new(
            format!(
                "Internal error: variable '{}' has no stack slot. \
                 Its declaration should have been emitted first. This is a compiler bug.",
                name
            ),
            span,
        )
    }

    pub(super) fn internal_variable_type_mismatch(
        name: &str,
        annotated: Type,
        declared: Type,
        span: Span,
    ) -> Self {
        CodegenError::new(
            format!(
                "Internal error: variable '{}' was annotated {} but declared {}. \
                 This is a compiler bug.",
                name, annotated, declared
            ),
            span,
        )
    }

    pub(super) fn internal_function_not_found(name: &str, span: Span) -> Self {
        CodegenError::new(
            format!(
                "Internal error: function '{}' is not defined in the module. \
                 Functions must be declared before they are called.",
                name
            ),
            span,
        )
    }

    pub(super) fn internal_call_arg_count(
        name: &str,
        declared: usize,
        supplied: usize,
        span: Span,
    ) -> Self {
        CodegenError::new(
            format!(
                "Internal error: call to '{}' supplies {} arguments but the function declares {}.",
                name, supplied, declared
            ),
            span,
        )
    }

    pub(super) fn internal_runtime_missing(name: &str, span: Span) -> Self {
        CodegenError::new(
            format!(
                "Internal error: runtime function '{}' was not declared. \
                 This is a compiler bug.",
                name
            ),
            span,
        )
    }

    pub(super) fn internal_void_value(span: Span) -> Self {
        CodegenError::new(
            "Internal error: a void function call was used where a value is required.",
            span,
        )
    }

    pub(super) fn internal_string_operator(op: BinaryOperator, span: Span) -> Self {
        CodegenError::new(
            format!(
                "Internal error: operator '{}' is not defined for string operands; \
                 only '+' concatenates.",
                op
            ),
            span,
        )
    }

    pub(super) fn internal_assign_operator(span: Span) -> Self {
        CodegenError::new(
            "Internal error: assignment operator in a binary operation node. \
             Assignments parse as their own node kind. This is a compiler bug.",
            span,
        )
    }

    pub(super) fn internal_non_integer_operand(op: BinaryOperator, span: Span) -> Self {
        CodegenError::new(
            format!(
                "Internal error: operator '{}' received a non-integer operand. \
                 This is a compiler bug.",
                op
            ),
            span,
        )
    }

    pub(super) fn internal_unsupported_print_type(ty: Type, span: Span) -> Self {
        CodegenError::new(
            format!("Internal error: print has no format for a {} expression.", ty),
            span,
        )
    }

    pub(super) fn internal_instruction_failed(what: &str, detail: &str, span: Span) -> Self {
        CodegenError::new(
            format!("Internal error: failed to emit {}: {}", what, detail),
            span,
        )
    }

    pub(super) fn internal_verification_failed(detail: &str) -> Self {
        CodegenError::without_span(format!(
            "Internal error: generated module failed LLVM verification: {}",
            detail
        ))
    }
}

impl std::fmt::Display for CodegenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(span) = &self.span {
            write!(
                f,
                "{}:{}: {}",
                span.start_loc.row, span.start_loc.column, self.message
            )
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for CodegenError {}
