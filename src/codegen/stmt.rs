//! Statement code generation.
//!
//! This module lowers Anchor statements: variable declarations with
//! zero/default initialization, returns, prints, and the `if`/`while`
//! control-flow shapes.

use super::Codegen;
use super::binding::VarBinding;
use super::error::CodegenError;
use crate::ast::{Expr, Stmt, StmtKind, Type};
use crate::token::Span;
use inkwell::values::{BasicMetadataValueEnum, BasicValueEnum};

impl<'ctx> Codegen<'ctx> {
    /// Generates LLVM IR for a single statement.
    pub(super) fn generate_stmt(&mut self, stmt: &Stmt) -> Result<(), CodegenError> {
        match &stmt.kind {
            StmtKind::Expr(expr) => {
                self.generate_expr(expr)?;
                Ok(())
            }
            StmtKind::VarDecl { name, ty } => self.generate_var_decl(name, *ty, stmt.span),
            StmtKind::Return(expr) => self.generate_return(expr, stmt.span),
            StmtKind::Print(expr) => self.generate_print(expr, stmt.span),
            StmtKind::If { condition, body } => self.generate_if(condition, body, stmt.span),
            StmtKind::While { condition, body } => self.generate_while(condition, body, stmt.span),
            StmtKind::Function(decl) => {
                // A function declared inside a body still becomes an
                // ordinary module-level function. The emitter saves and
                // restores the insertion point itself; the enclosing
                // function's bindings are parked here so the nested
                // body cannot see or clobber them.
                let saved = std::mem::take(&mut self.variables);
                let result = self.generate_function(decl, stmt.span);
                self.variables = saved;
                result
            }
            StmtKind::Bad(_) => Err(CodegenError::internal_bad_stmt_reached_codegen(stmt.span)),
        }
    }

    /// Generates a variable declaration.
    ///
    /// Allocates a stack cell of the declared primitive type, named
    /// after the variable, and stores the type's default: `0` for
    /// integers, `false` for booleans, and an empty boxed string for
    /// strings.
    fn generate_var_decl(&mut self, name: &str, ty: Type, span: Span) -> Result<(), CodegenError> {
        let binding =
            VarBinding::new(&self.builder, self.context, self.string_type, ty, name, span)?;

        let default: BasicValueEnum<'ctx> = match ty {
            Type::Integer => self.context.i32_type().const_int(0, false).into(),
            Type::Boolean => self.context.bool_type().const_int(0, false).into(),
            Type::String => self.build_string_literal("", span)?.into(),
            Type::Void | Type::NotFound => {
                return Err(CodegenError::internal_unsupported_value_type(ty, span));
            }
        };

        self.builder.build_store(binding.alloca(), default).map_err(|e| {
            CodegenError::internal_instruction_failed(
                &format!("default store for '{}'", name),
                &e.to_string(),
                span,
            )
        })?;

        self.define_variable(name, binding, span)
    }

    /// Generates a return statement.
    fn generate_return(&mut self, expr: &Expr, span: Span) -> Result<(), CodegenError> {
        let value = self.generate_expr_value(expr, span)?;
        self.builder.build_return(Some(&value)).map_err(|e| {
            CodegenError::internal_instruction_failed("return", &e.to_string(), span)
        })?;
        Ok(())
    }

    /// Generates a print statement.
    ///
    /// Chooses the format string from the argument's annotated type
    /// (`%s` for strings, `%d` for integers and booleans), materializes
    /// it as a global, and calls `printf`. String arguments pass their
    /// heap character buffer, loaded out of the boxed struct; boolean
    /// arguments are zero-extended to `i32` so the vararg slot receives
    /// a full word.
    fn generate_print(&mut self, expr: &Expr, span: Span) -> Result<(), CodegenError> {
        let format = match expr.return_type {
            Type::String => "%s",
            Type::Integer | Type::Boolean => "%d",
            Type::Void | Type::NotFound => {
                return Err(CodegenError::internal_unsupported_print_type(
                    expr.return_type,
                    span,
                ));
            }
        };

        let format_ptr = self
            .builder
            .build_global_string_ptr(format, "format")
            .map_err(|e| {
                CodegenError::internal_instruction_failed("format string", &e.to_string(), span)
            })?
            .as_pointer_value();

        let value = self.generate_expr_value(expr, span)?;
        let argument: BasicMetadataValueEnum<'ctx> = match expr.return_type {
            Type::String => {
                let BasicValueEnum::PointerValue(boxed) = value else {
                    return Err(CodegenError::internal_unsupported_value_type(
                        expr.return_type,
                        span,
                    ));
                };
                self.load_string_buffer(boxed, span)?.into()
            }
            Type::Boolean => {
                let BasicValueEnum::IntValue(flag) = value else {
                    return Err(CodegenError::internal_unsupported_value_type(
                        expr.return_type,
                        span,
                    ));
                };
                self.builder
                    .build_int_z_extend(flag, self.context.i32_type(), "print_wide")
                    .map_err(|e| {
                        CodegenError::internal_instruction_failed(
                            "boolean widening",
                            &e.to_string(),
                            span,
                        )
                    })?
                    .into()
            }
            _ => value.into(),
        };

        let printf = self.runtime_function("printf", span)?;
        self.builder
            .build_call(printf, &[format_ptr.into(), argument], "printf_call")
            .map_err(|e| {
                CodegenError::internal_instruction_failed("printf call", &e.to_string(), span)
            })?;

        Ok(())
    }

    /// Generates an if statement.
    ///
    /// Creates `if_then` and `if_end` blocks, conditionally branches
    /// between them, and leaves the insertion point in `if_end` so
    /// subsequent statements flow there. There is no else branch in the
    /// language.
    fn generate_if(
        &mut self,
        condition: &Expr,
        body: &[Stmt],
        span: Span,
    ) -> Result<(), CodegenError> {
        let function = self
            .builder
            .get_insert_block()
            .and_then(|block| block.get_parent())
            .ok_or_else(|| CodegenError::internal_no_current_function(span))?;

        let then_block = self.context.append_basic_block(function, "if_then");
        let end_block = self.context.append_basic_block(function, "if_end");

        let condition_value = self.generate_expr_value(condition, condition.span)?;
        let BasicValueEnum::IntValue(condition_value) = condition_value else {
            return Err(CodegenError::internal_unsupported_value_type(
                condition.return_type,
                condition.span,
            ));
        };

        self.builder
            .build_conditional_branch(condition_value, then_block, end_block)
            .map_err(|e| {
                CodegenError::internal_instruction_failed("branch", &e.to_string(), span)
            })?;

        self.builder.position_at_end(then_block);
        self.enter_variable_scope();
        for stmt in body {
            if self.current_block_terminated() {
                break;
            }
            self.generate_stmt(stmt)?;
        }
        self.exit_variable_scope(span)?;

        if !self.current_block_terminated() {
            self.builder
                .build_unconditional_branch(end_block)
                .map_err(|e| {
                    CodegenError::internal_instruction_failed("branch", &e.to_string(), span)
                })?;
        }

        self.builder.position_at_end(end_block);
        Ok(())
    }

    /// Generates a while statement.
    ///
    /// Creates `while_head`, `while_body`, and `while_end` blocks. The
    /// head re-evaluates the condition on every iteration; the body
    /// loops back to the head; the insertion point ends up in
    /// `while_end`.
    fn generate_while(
        &mut self,
        condition: &Expr,
        body: &[Stmt],
        span: Span,
    ) -> Result<(), CodegenError> {
        let function = self
            .builder
            .get_insert_block()
            .and_then(|block| block.get_parent())
            .ok_or_else(|| CodegenError::internal_no_current_function(span))?;

        let head_block = self.context.append_basic_block(function, "while_head");
        let body_block = self.context.append_basic_block(function, "while_body");
        let end_block = self.context.append_basic_block(function, "while_end");

        self.builder
            .build_unconditional_branch(head_block)
            .map_err(|e| {
                CodegenError::internal_instruction_failed("branch", &e.to_string(), span)
            })?;

        self.builder.position_at_end(head_block);
        let condition_value = self.generate_expr_value(condition, condition.span)?;
        let BasicValueEnum::IntValue(condition_value) = condition_value else {
            return Err(CodegenError::internal_unsupported_value_type(
                condition.return_type,
                condition.span,
            ));
        };
        self.builder
            .build_conditional_branch(condition_value, body_block, end_block)
            .map_err(|e| {
                CodegenError::internal_instruction_failed("branch", &e.to_string(), span)
            })?;

        self.builder.position_at_end(body_block);
        self.enter_variable_scope();
        for stmt in body {
            if self.current_block_terminated() {
                break;
            }
            self.generate_stmt(stmt)?;
        }
        self.exit_variable_scope(span)?;

        if !self.current_block_terminated() {
            self.builder
                .build_unconditional_branch(head_block)
                .map_err(|e| {
                    CodegenError::internal_instruction_failed("branch", &e.to_string(), span)
                })?;
        }

        self.builder.position_at_end(end_block);
        Ok(())
    }
}
