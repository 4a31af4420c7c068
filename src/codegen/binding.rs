//! Variable binding management for code generation.
//!
//! This module defines [`VarBinding`], which represents a variable's
//! stack allocation and declared type during code generation.

use super::error::CodegenError;
use crate::ast::Type;
use crate::token::Span;
use inkwell::AddressSpace;
use inkwell::context::Context;
use inkwell::types::{BasicTypeEnum, StructType};
use inkwell::values::PointerValue;

/// A variable binding in the generator's symbol table.
///
/// Stores the stack allocation pointer and declared type for a
/// variable, enabling name lookups and typed loads during code
/// generation.
///
/// # Invariants
///
/// The LLVM type of `alloca` corresponds to `ty`:
/// - [`Type::Integer`] → `alloca` points to an LLVM `i32`
/// - [`Type::Boolean`] → `alloca` points to an LLVM `i1`
/// - [`Type::String`] → `alloca` points to an LLVM `ptr` (the boxed
///   string struct pointer)
///
/// This holds because bindings are created only through
/// [`VarBinding::new`], which allocates the matching LLVM type and
/// rejects types with no value representation.
#[derive(Clone, Debug)]
pub(super) struct VarBinding<'ctx> {
    /// The stack allocation for this variable.
    alloca: PointerValue<'ctx>,
    /// The declared type of this variable.
    ty: Type,
}

impl<'ctx> VarBinding<'ctx> {
    /// Creates a new variable binding with a stack allocation named
    /// after the variable.
    ///
    /// # Errors
    ///
    /// Returns a [`CodegenError`] if `ty` has no value representation
    /// (`VOID` or the `NOT_FOUND` sentinel) or if LLVM fails to create
    /// the alloca instruction.
    pub(super) fn new(
        builder: &inkwell::builder::Builder<'ctx>,
        context: &'ctx Context,
        string_type: StructType<'ctx>,
        ty: Type,
        name: &str,
        span: Span,
    ) -> Result<Self, CodegenError> {
        let llvm_type: BasicTypeEnum = match ty {
            Type::Integer => context.i32_type().into(),
            Type::Boolean => context.bool_type().into(),
            Type::String => string_type.ptr_type(AddressSpace::default()).into(),
            Type::Void | Type::NotFound => {
                return Err(CodegenError::internal_unsupported_value_type(ty, span));
            }
        };

        let alloca = builder.build_alloca(llvm_type, name).map_err(|e| {
            CodegenError::internal_instruction_failed(
                &format!("stack allocation for '{}'", name),
                &e.to_string(),
                span,
            )
        })?;

        Ok(VarBinding { alloca, ty })
    }

    /// Returns the stack allocation pointer for this variable.
    pub(super) fn alloca(&self) -> PointerValue<'ctx> {
        self.alloca
    }

    /// Returns the declared type of this variable.
    pub(super) fn ty(&self) -> Type {
        self.ty
    }
}
