//! Expression code generation.
//!
//! This module lowers Anchor expressions to LLVM values: literals,
//! variable references and assignments, calls, and binary operations
//! (including the string concatenation special case).

use super::Codegen;
use super::error::CodegenError;
use crate::ast::{BinaryOperator, Expr, ExprKind, Type};
use crate::token::Span;
use inkwell::IntPredicate;
use inkwell::values::{BasicMetadataValueEnum, BasicValueEnum, IntValue, ValueKind};

impl<'ctx> Codegen<'ctx> {
    /// Generates LLVM IR for an expression.
    ///
    /// Returns the produced value, or `None` for a call to a `void`
    /// function — the one expression shape with no value. Statement
    /// position discards the result either way.
    pub(super) fn generate_expr(
        &mut self,
        expr: &Expr,
    ) -> Result<Option<BasicValueEnum<'ctx>>, CodegenError> {
        match &expr.kind {
            ExprKind::IntegerLiteral(value) => Ok(Some(
                self.context
                    .i32_type()
                    .const_int(*value as u64, true)
                    .into(),
            )),
            ExprKind::BooleanLiteral(value) => Ok(Some(
                self.context
                    .bool_type()
                    .const_int(*value as u64, false)
                    .into(),
            )),
            ExprKind::StringLiteral(literal) => {
                Ok(Some(self.build_string_literal(literal, expr.span)?.into()))
            }
            ExprKind::VarRef(name) => self.generate_var_ref(name, expr).map(Some),
            ExprKind::Assign { name, value } => {
                self.generate_assign(name, value, expr.span).map(Some)
            }
            ExprKind::Call { callee, args } => self.generate_call(callee, args, expr.span),
            ExprKind::Binary { left, op, right } => {
                self.generate_binary(left, *op, right, expr).map(Some)
            }
        }
    }

    /// Generates an expression in a position that requires a value.
    pub(super) fn generate_expr_value(
        &mut self,
        expr: &Expr,
        span: Span,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        self.generate_expr(expr)?
            .ok_or_else(|| CodegenError::internal_void_value(span))
    }

    /// Loads a variable from its named stack slot.
    ///
    /// The load is typed by the binding's declared type, which must
    /// agree with the reference's annotation; a disagreement means the
    /// parser's scopes and the generator's scopes diverged.
    fn generate_var_ref(
        &mut self,
        name: &str,
        expr: &Expr,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        let binding = self
            .lookup_variable(name)
            .ok_or_else(|| CodegenError::internal_variable_not_found(name, expr.span))?
            .clone();

        if binding.ty() != expr.return_type {
            return Err(CodegenError::internal_variable_type_mismatch(
                name,
                expr.return_type,
                binding.ty(),
                expr.span,
            ));
        }

        self.basic_type(binding.ty(), expr.span)?;
        self.builder
            .build_load(binding.alloca(), &format!("{}_load", name))
            .map_err(|e| {
                CodegenError::internal_instruction_failed(
                    &format!("load of '{}'", name),
                    &e.to_string(),
                    expr.span,
                )
            })
    }

    /// Generates an assignment: evaluates the right-hand side and
    /// stores it into the variable's stack slot. The stored value is
    /// the expression's result.
    fn generate_assign(
        &mut self,
        name: &str,
        value: &Expr,
        span: Span,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        let result = self.generate_expr_value(value, value.span)?;

        let binding = self
            .lookup_variable(name)
            .ok_or_else(|| CodegenError::internal_variable_not_found(name, span))?
            .clone();

        self.builder.build_store(binding.alloca(), result).map_err(|e| {
            CodegenError::internal_instruction_failed(
                &format!("store to '{}'", name),
                &e.to_string(),
                span,
            )
        })?;

        Ok(result)
    }

    /// Generates a function call.
    ///
    /// Arguments are evaluated in source order and passed by value; the
    /// callee must already be defined in the module, and its declared
    /// parameter count must match the call site.
    fn generate_call(
        &mut self,
        callee: &str,
        args: &[Expr],
        span: Span,
    ) -> Result<Option<BasicValueEnum<'ctx>>, CodegenError> {
        let function = self
            .module
            .get_function(callee)
            .ok_or_else(|| CodegenError::internal_function_not_found(callee, span))?;

        if function.count_params() as usize != args.len() {
            return Err(CodegenError::internal_call_arg_count(
                callee,
                function.count_params() as usize,
                args.len(),
                span,
            ));
        }

        let mut values: Vec<BasicMetadataValueEnum<'ctx>> = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.generate_expr_value(arg, arg.span)?.into());
        }

        let call = self
            .builder
            .build_call(function, &values, "")
            .map_err(|e| {
                CodegenError::internal_instruction_failed(
                    &format!("call to '{}'", callee),
                    &e.to_string(),
                    span,
                )
            })?;

        match call.try_as_basic_value() {
            ValueKind::Basic(value) => Ok(Some(value)),
            ValueKind::Instruction(_) => Ok(None),
        }
    }

    /// Generates a binary operation.
    ///
    /// A string-typed result concatenates (only `+` is defined on
    /// strings). Everything else works on integers: signed arithmetic
    /// without overflow checking, and signed comparisons producing
    /// `i1`.
    fn generate_binary(
        &mut self,
        left: &Expr,
        op: BinaryOperator,
        right: &Expr,
        expr: &Expr,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        if expr.return_type == Type::String {
            if op != BinaryOperator::Add {
                return Err(CodegenError::internal_string_operator(op, expr.span));
            }

            let lhs = self.string_operand(left)?;
            let rhs = self.string_operand(right)?;
            return Ok(self.build_string_concat(lhs, rhs, expr.span)?.into());
        }

        let lhs = self.integer_operand(left, op)?;
        let rhs = self.integer_operand(right, op)?;

        let result: IntValue<'ctx> = match op {
            BinaryOperator::Add => self.builder.build_int_add(lhs, rhs, "add_tmp"),
            BinaryOperator::Sub => self.builder.build_int_sub(lhs, rhs, "sub_tmp"),
            BinaryOperator::Mul => self.builder.build_int_mul(lhs, rhs, "mul_tmp"),
            BinaryOperator::LessThan => {
                self.builder
                    .build_int_compare(IntPredicate::SLT, lhs, rhs, "lt_tmp")
            }
            BinaryOperator::GreaterThan => {
                self.builder
                    .build_int_compare(IntPredicate::SGT, lhs, rhs, "gt_tmp")
            }
            BinaryOperator::Equals => {
                self.builder
                    .build_int_compare(IntPredicate::EQ, lhs, rhs, "eq_tmp")
            }
            BinaryOperator::Assign => {
                return Err(CodegenError::internal_assign_operator(expr.span));
            }
        }
        .map_err(|e| {
            CodegenError::internal_instruction_failed(
                &format!("'{}' operation", op),
                &e.to_string(),
                expr.span,
            )
        })?;

        Ok(result.into())
    }

    /// Evaluates an operand that must be a boxed string pointer.
    fn string_operand(
        &mut self,
        operand: &Expr,
    ) -> Result<inkwell::values::PointerValue<'ctx>, CodegenError> {
        match self.generate_expr_value(operand, operand.span)? {
            BasicValueEnum::PointerValue(pointer) => Ok(pointer),
            _ => Err(CodegenError::internal_unsupported_value_type(
                operand.return_type,
                operand.span,
            )),
        }
    }

    /// Evaluates an operand that must be an integer value.
    fn integer_operand(
        &mut self,
        operand: &Expr,
        op: BinaryOperator,
    ) -> Result<IntValue<'ctx>, CodegenError> {
        match self.generate_expr_value(operand, operand.span)? {
            BasicValueEnum::IntValue(value) => Ok(value),
            _ => Err(CodegenError::internal_non_integer_operand(op, operand.span)),
        }
    }
}
