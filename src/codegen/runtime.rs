//! C runtime declarations for generated code.
//!
//! Generated programs lean on four C library functions: `printf` for
//! output, `malloc`/`memcpy` for heap string buffers, and `free`, which
//! is declared for completeness but never called — heap strings are
//! intentionally leaked.

use super::Codegen;
use super::error::CodegenError;
use crate::token::Span;
use inkwell::AddressSpace;
use inkwell::module::Linkage;
use inkwell::values::FunctionValue;

impl<'ctx> Codegen<'ctx> {
    /// Declares the C runtime functions with external linkage.
    ///
    /// Called once at construction, before any user function is
    /// emitted:
    ///
    /// - `printf(ptr, ...) -> i32` (variadic)
    /// - `malloc(i32) -> ptr`
    /// - `free(...) -> void` (variadic, unused by generated code)
    /// - `memcpy(ptr, ptr, i32) -> void`
    pub(super) fn declare_runtime(&self) {
        let i32_type = self.context.i32_type();
        let ptr_type = self.context.i8_type().ptr_type(AddressSpace::default());
        let void_type = self.context.void_type();

        let printf_type = i32_type.fn_type(&[ptr_type.into()], true);
        self.module
            .add_function("printf", printf_type, Some(Linkage::External));

        let malloc_type = ptr_type.fn_type(&[i32_type.into()], false);
        self.module
            .add_function("malloc", malloc_type, Some(Linkage::External));

        let free_type = void_type.fn_type(&[], true);
        self.module
            .add_function("free", free_type, Some(Linkage::External));

        let memcpy_type = void_type.fn_type(
            &[ptr_type.into(), ptr_type.into(), i32_type.into()],
            false,
        );
        self.module
            .add_function("memcpy", memcpy_type, Some(Linkage::External));
    }

    /// Looks up a runtime function declared by
    /// [`declare_runtime`](Self::declare_runtime).
    pub(super) fn runtime_function(
        &self,
        name: &str,
        span: Span,
    ) -> Result<FunctionValue<'ctx>, CodegenError> {
        self.module
            .get_function(name)
            .ok_or_else(|| CodegenError::internal_runtime_missing(name, span))
    }
}
