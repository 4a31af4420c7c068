//! Boxed string construction and concatenation.
//!
//! A source-level string value is a pointer to a stack struct
//! `{ ptr, i32 }`: a heap character buffer and its length including the
//! trailing null byte. Literals copy their module-level global into a
//! fresh `malloc` buffer so every string value owns heap storage and
//! concatenation never has to distinguish literals from computed
//! strings. Buffers are never freed.

use super::Codegen;
use super::error::CodegenError;
use crate::token::Span;
use inkwell::values::{BasicValueEnum, IntValue, PointerValue, ValueKind};

impl<'ctx> Codegen<'ctx> {
    /// Builds a boxed string from a literal.
    ///
    /// Emits, at the current insertion point:
    /// 1. a module-level global holding the characters and null byte,
    /// 2. `malloc(len + 1)` for the heap buffer,
    /// 3. `memcpy` of the global into the buffer,
    /// 4. a stack struct whose fields are set to the buffer pointer and
    ///    the null-including length.
    ///
    /// The returned pointer to the stack struct is the string value.
    pub(super) fn build_string_literal(
        &mut self,
        literal: &str,
        span: Span,
    ) -> Result<PointerValue<'ctx>, CodegenError> {
        let global = self
            .builder
            .build_global_string_ptr(literal, "str_data")
            .map_err(|e| {
                CodegenError::internal_instruction_failed(
                    "string literal global",
                    &e.to_string(),
                    span,
                )
            })?;

        let length = self
            .context
            .i32_type()
            .const_int(literal.len() as u64 + 1, false);

        let buffer = self.call_malloc(length, span)?;
        self.call_memcpy(buffer, global.as_pointer_value(), length, span)?;

        self.build_boxed_string(buffer, length, span)
    }

    /// Concatenates two boxed strings into a fresh one.
    ///
    /// With `sizeL`/`sizeR` the null-including lengths of the operands:
    /// 1. `newSize = sizeL + sizeR - 1` (the two null bytes collapse
    ///    into one),
    /// 2. `dst = malloc(newSize)`,
    /// 3. copy the left characters without their null byte
    ///    (`sizeL - 1`),
    /// 4. copy the right characters including their null byte at offset
    ///    `sizeL - 1`,
    /// 5. box `dst` with length `newSize`.
    pub(super) fn build_string_concat(
        &mut self,
        left: PointerValue<'ctx>,
        right: PointerValue<'ctx>,
        span: Span,
    ) -> Result<PointerValue<'ctx>, CodegenError> {
        let left_size = self.load_string_length(left, "left_size", span)?;
        let right_size = self.load_string_length(right, "right_size", span)?;
        let left_buffer = self.load_string_buffer_named(left, "left_buffer", span)?;
        let right_buffer = self.load_string_buffer_named(right, "right_buffer", span)?;

        let one = self.context.i32_type().const_int(1, false);

        let summed = self
            .builder
            .build_int_add(left_size, right_size, "concat_size_sum")
            .map_err(|e| {
                CodegenError::internal_instruction_failed("concat size", &e.to_string(), span)
            })?;
        let new_size = self
            .builder
            .build_int_sub(summed, one, "concat_size")
            .map_err(|e| {
                CodegenError::internal_instruction_failed("concat size", &e.to_string(), span)
            })?;

        let destination = self.call_malloc(new_size, span)?;

        let left_bytes = self
            .builder
            .build_int_sub(left_size, one, "left_bytes")
            .map_err(|e| {
                CodegenError::internal_instruction_failed("concat size", &e.to_string(), span)
            })?;
        self.call_memcpy(destination, left_buffer, left_bytes, span)?;

        // The right half lands just past the left characters.
        let tail = unsafe {
            self.builder.build_in_bounds_gep(
                destination,
                &[left_bytes],
                "concat_tail",
            )
        }
        .map_err(|e| {
            CodegenError::internal_instruction_failed("concat offset", &e.to_string(), span)
        })?;
        self.call_memcpy(tail, right_buffer, right_size, span)?;

        self.build_boxed_string(destination, new_size, span)
    }

    /// Loads the heap character buffer out of a boxed string.
    ///
    /// Used by print, which hands `printf` the raw `i8` buffer rather
    /// than the box.
    pub(super) fn load_string_buffer(
        &mut self,
        boxed: PointerValue<'ctx>,
        span: Span,
    ) -> Result<PointerValue<'ctx>, CodegenError> {
        self.load_string_buffer_named(boxed, "str_buffer", span)
    }

    fn load_string_buffer_named(
        &mut self,
        boxed: PointerValue<'ctx>,
        name: &str,
        span: Span,
    ) -> Result<PointerValue<'ctx>, CodegenError> {
        let slot = self
            .builder
            .build_struct_gep(boxed, 0, &format!("{name}_slot"))
            .map_err(|e| {
                CodegenError::internal_instruction_failed("string field", &e.to_string(), span)
            })?;
        let loaded = self
            .builder
            .build_load(slot, name)
            .map_err(|e| {
                CodegenError::internal_instruction_failed("string field", &e.to_string(), span)
            })?;
        match loaded {
            BasicValueEnum::PointerValue(pointer) => Ok(pointer),
            _ => Err(CodegenError::internal_instruction_failed(
                "string field",
                "buffer slot did not load a pointer",
                span,
            )),
        }
    }

    fn load_string_length(
        &mut self,
        boxed: PointerValue<'ctx>,
        name: &str,
        span: Span,
    ) -> Result<IntValue<'ctx>, CodegenError> {
        let slot = self
            .builder
            .build_struct_gep(boxed, 1, &format!("{name}_slot"))
            .map_err(|e| {
                CodegenError::internal_instruction_failed("string field", &e.to_string(), span)
            })?;
        let loaded = self
            .builder
            .build_load(slot, name)
            .map_err(|e| {
                CodegenError::internal_instruction_failed("string field", &e.to_string(), span)
            })?;
        match loaded {
            BasicValueEnum::IntValue(value) => Ok(value),
            _ => Err(CodegenError::internal_instruction_failed(
                "string field",
                "length slot did not load an integer",
                span,
            )),
        }
    }

    /// Allocates a stack struct and fills in the buffer and length
    /// fields.
    fn build_boxed_string(
        &mut self,
        buffer: PointerValue<'ctx>,
        length: IntValue<'ctx>,
        span: Span,
    ) -> Result<PointerValue<'ctx>, CodegenError> {
        let boxed = self
            .builder
            .build_alloca(self.string_type, "anchor_string")
            .map_err(|e| {
                CodegenError::internal_instruction_failed("string box", &e.to_string(), span)
            })?;

        let buffer_slot = self
            .builder
            .build_struct_gep(boxed, 0, "buffer_slot")
            .map_err(|e| {
                CodegenError::internal_instruction_failed("string box", &e.to_string(), span)
            })?;
        self.builder.build_store(buffer_slot, buffer).map_err(|e| {
            CodegenError::internal_instruction_failed("string box", &e.to_string(), span)
        })?;

        let length_slot = self
            .builder
            .build_struct_gep(boxed, 1, "length_slot")
            .map_err(|e| {
                CodegenError::internal_instruction_failed("string box", &e.to_string(), span)
            })?;
        self.builder.build_store(length_slot, length).map_err(|e| {
            CodegenError::internal_instruction_failed("string box", &e.to_string(), span)
        })?;

        Ok(boxed)
    }

    fn call_malloc(
        &mut self,
        size: IntValue<'ctx>,
        span: Span,
    ) -> Result<PointerValue<'ctx>, CodegenError> {
        let malloc = self.runtime_function("malloc", span)?;
        let call = self
            .builder
            .build_call(malloc, &[size.into()], "heap_buffer")
            .map_err(|e| {
                CodegenError::internal_instruction_failed("malloc call", &e.to_string(), span)
            })?;

        match call.try_as_basic_value() {
            ValueKind::Basic(BasicValueEnum::PointerValue(pointer)) => Ok(pointer),
            _ => Err(CodegenError::internal_instruction_failed(
                "malloc call",
                "did not produce a pointer",
                span,
            )),
        }
    }

    fn call_memcpy(
        &mut self,
        destination: PointerValue<'ctx>,
        source: PointerValue<'ctx>,
        bytes: IntValue<'ctx>,
        span: Span,
    ) -> Result<(), CodegenError> {
        let memcpy = self.runtime_function("memcpy", span)?;
        self.builder
            .build_call(
                memcpy,
                &[destination.into(), source.into(), bytes.into()],
                "",
            )
            .map_err(|e| {
                CodegenError::internal_instruction_failed("memcpy call", &e.to_string(), span)
            })?;
        Ok(())
    }
}
