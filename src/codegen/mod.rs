//! LLVM code generation for the Anchor programming language.
//!
//! This module provides the [`Codegen`] struct which lowers a parsed
//! Anchor [`Program`] into LLVM IR.
//!
//! # Overview
//!
//! The code generator uses [Inkwell](https://github.com/TheDan64/inkwell),
//! a safe Rust wrapper around the LLVM C API. It performs the following
//! tasks:
//!
//! - Creates an LLVM module and builder
//! - Declares the C runtime functions generated code calls (`printf`,
//!   `malloc`, `free`, `memcpy`) and the boxed string struct type
//! - Emits one LLVM function per source function declaration, with
//!   by-value parameters of the declared primitive types and a return
//!   type that strictly follows the declared source type
//! - Lowers statements and expressions, maintaining a scope stack of
//!   named stack slots so variable references resolve to their allocas
//! - Produces the module's textual IR dump for an external
//!   interpreter/JIT to execute
//!
//! # Block discipline
//!
//! Every basic block the generator leaves behind is terminated exactly
//! once. Statement loops stop as soon as the current block gains a
//! terminator, `if`/`while` lowering branches each arm into its join
//! block only when the arm did not already terminate, and a trailing
//! `ret void` is synthesized only for void functions.
//!
//! # Strings
//!
//! Source strings are boxed: a stack struct `{ ptr, i32 }` holding a
//! heap buffer pointer and the buffer length including the trailing
//! null byte. Concatenation allocates a fresh buffer sized
//! `left + right - 1` and copies both halves. Buffers are never freed.
//!
//! # Example
//!
//! ```no_run
//! use anchor::codegen::Codegen;
//! use anchor::lexer::Lexer;
//! use anchor::parser::Parser;
//! use inkwell::context::Context;
//!
//! let tokens = Lexer::new("function integer main() { return 0; };")
//!     .tokenize()
//!     .unwrap();
//! let program = Parser::new(tokens).parse();
//! assert!(program.is_syntactically_correct());
//!
//! let context = Context::create();
//! let mut codegen = Codegen::new(&context, "anchor");
//! codegen.compile(&program).unwrap();
//! println!("{}", codegen.ir_to_string());
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for code generation
//! - [`binding`] - Variable binding management
//! - [`runtime`] - C runtime declarations
//! - [`stmt`] - Statement code generation
//! - [`expr`] - Expression code generation
//! - [`strings`] - Boxed string construction and concatenation
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::ast`] - The AST types consumed by this module
//! * [Inkwell documentation](https://thedan64.github.io/inkwell/)
//! * [LLVM Language Reference](https://llvm.org/docs/LangRef.html)

mod binding;
mod error;
mod expr;
mod runtime;
mod stmt;
mod strings;


pub use error::CodegenError;

use crate::ast::{FunctionDecl, Program, StmtKind, Type};
use crate::token::Span;
use binding::VarBinding;
use inkwell::AddressSpace;
use inkwell::context::Context;
use inkwell::types::{BasicMetadataTypeEnum, BasicTypeEnum, StructType};
use std::collections::HashMap;

/// LLVM code generator for Anchor programs.
///
/// `Codegen` holds the LLVM context reference, module, and builder
/// required for generating LLVM IR, plus the scope stack of variable
/// bindings for the function currently being emitted.
///
/// # Lifetime
///
/// The `'ctx` lifetime parameter ties this struct to an LLVM
/// [`Context`]. The context must outlive the code generator.
///
/// # Thread Safety
///
/// LLVM contexts are not thread-safe. Each thread should have its own
/// context and code generator.
pub struct Codegen<'ctx> {
    /// Reference to the LLVM context.
    context: &'ctx Context,
    /// The LLVM module being built.
    module: inkwell::module::Module<'ctx>,
    /// The IR builder holding the current insertion point.
    builder: inkwell::builder::Builder<'ctx>,
    /// The boxed string struct type: `{ ptr, i32 }` — heap buffer
    /// pointer and length including the trailing null byte.
    string_type: StructType<'ctx>,
    /// Stack of variable scopes (innermost scope is at the end).
    ///
    /// Reset at the start of each function body and extended around
    /// `if`/`while` bodies to mirror the source scoping.
    variables: Vec<HashMap<String, VarBinding<'ctx>>>,
}

impl<'ctx> Codegen<'ctx> {
    /// Creates a new code generator with the given LLVM context and
    /// module name.
    ///
    /// The returned generator already has the C runtime declarations
    /// and the boxed string type installed in its module.
    pub fn new(context: &'ctx Context, module_name: &str) -> Self {
        let module = context.create_module(module_name);
        let builder = context.create_builder();

        let string_type = context.opaque_struct_type("AnchorString");
        string_type.set_body(
            &[
                context.i8_type().ptr_type(AddressSpace::default()).into(),
                context.i32_type().into(),
            ],
            false,
        );

        let codegen = Codegen {
            context,
            module,
            builder,
            string_type,
            variables: Vec::new(),
        };
        codegen.declare_runtime();
        codegen
    }

    /// Compiles a program into the LLVM module.
    ///
    /// Top-level statements are function declarations; the grammar
    /// admits nothing else at the top level, so any other kind is an
    /// internal error. Call [`ir_to_string`](Self::ir_to_string)
    /// afterwards for the textual dump.
    ///
    /// # Errors
    ///
    /// Returns a [`CodegenError`] on internal inconsistencies: AST
    /// shapes the generator does not handle, calls to functions that
    /// were never declared, or failed LLVM builder calls.
    pub fn compile(&mut self, program: &Program) -> Result<(), CodegenError> {
        for stmt in &program.stmts {
            match &stmt.kind {
                StmtKind::Function(decl) => self.generate_function(decl, stmt.span)?,
                _ => return Err(CodegenError::internal_unexpected_top_level(stmt.span)),
            }
        }
        Ok(())
    }

    /// Returns the textual LLVM IR dump of the compiled module.
    pub fn ir_to_string(&self) -> String {
        self.module.print_to_string().to_string()
    }

    /// Runs the LLVM verifier over the compiled module.
    ///
    /// Verification catches malformed IR — above all a basic block
    /// without exactly one terminator — before the dump is handed to an
    /// external interpreter.
    pub fn verify(&self) -> Result<(), CodegenError> {
        self.module
            .verify()
            .map_err(|e| CodegenError::internal_verification_failed(&e.to_string()))
    }

    /// Emits one LLVM function for a source function declaration.
    ///
    /// The IR signature follows the declaration: one by-value parameter
    /// per source parameter with its declared primitive type, and the
    /// declared return type, non-variadic. Parameters are named after
    /// their source identifiers and spilled into allocas of the same
    /// name, so references in the body resolve them exactly like
    /// locals.
    ///
    /// The previous insertion point is saved before the body is emitted
    /// into a fresh `entry` block, and restored afterwards.
    fn generate_function(
        &mut self,
        decl: &FunctionDecl,
        span: Span,
    ) -> Result<(), CodegenError> {
        let param_types = decl
            .args
            .iter()
            .map(|arg| self.basic_type(arg.ty, arg.span).map(Into::into))
            .collect::<Result<Vec<BasicMetadataTypeEnum<'ctx>>, CodegenError>>()?;

        let fn_type = match decl.return_type {
            Type::Void => self.context.void_type().fn_type(&param_types, false),
            Type::Integer => self.context.i32_type().fn_type(&param_types, false),
            Type::Boolean => self.context.bool_type().fn_type(&param_types, false),
            Type::String => self
                .string_type
                .ptr_type(AddressSpace::default())
                .fn_type(&param_types, false),
            Type::NotFound => {
                return Err(CodegenError::internal_unsupported_value_type(
                    decl.return_type,
                    span,
                ));
            }
        };

        let function = self.module.add_function(&decl.name, fn_type, None);
        for (index, arg) in decl.args.iter().enumerate() {
            if let Some(param) = function.get_nth_param(index as u32) {
                param.set_name(&arg.name);
            }
        }

        let previous_block = self.builder.get_insert_block();
        let entry = self.context.append_basic_block(function, "entry");
        self.builder.position_at_end(entry);

        self.variables.clear();
        self.enter_variable_scope();

        for (index, arg) in decl.args.iter().enumerate() {
            let param = function
                .get_nth_param(index as u32)
                .ok_or_else(|| CodegenError::internal_param_missing(&decl.name, index, arg.span))?;
            let binding = VarBinding::new(
                &self.builder,
                self.context,
                self.string_type,
                arg.ty,
                &arg.name,
                arg.span,
            )?;
            self.builder.build_store(binding.alloca(), param).map_err(|e| {
                CodegenError::internal_instruction_failed(
                    &format!("parameter spill for '{}'", arg.name),
                    &e.to_string(),
                    arg.span,
                )
            })?;
            self.define_variable(&arg.name, binding, arg.span)?;
        }

        for stmt in &decl.body {
            if self.current_block_terminated() {
                break;
            }
            self.generate_stmt(stmt)?;
        }

        if !self.current_block_terminated() {
            if decl.return_type == Type::Void {
                self.builder.build_return(None).map_err(|e| {
                    CodegenError::internal_instruction_failed(
                        &format!("implicit return for '{}'", decl.name),
                        &e.to_string(),
                        span,
                    )
                })?;
            } else {
                return Err(CodegenError::internal_missing_return(
                    &decl.name,
                    decl.return_type,
                ));
            }
        }

        self.exit_variable_scope(span)?;

        if let Some(block) = previous_block {
            self.builder.position_at_end(block);
        }

        Ok(())
    }

    /// Returns the LLVM value type corresponding to an Anchor type.
    ///
    /// # Type Mapping
    ///
    /// - [`Type::Integer`] → LLVM `i32`
    /// - [`Type::Boolean`] → LLVM `i1`
    /// - [`Type::String`] → LLVM `ptr` (pointer to the boxed string
    ///   struct)
    ///
    /// `VOID` and `NOT_FOUND` have no value representation and produce
    /// an internal error.
    fn basic_type(&self, ty: Type, span: Span) -> Result<BasicTypeEnum<'ctx>, CodegenError> {
        match ty {
            Type::Integer => Ok(self.context.i32_type().into()),
            Type::Boolean => Ok(self.context.bool_type().into()),
            Type::String => Ok(self.string_type.ptr_type(AddressSpace::default()).into()),
            Type::Void | Type::NotFound => {
                Err(CodegenError::internal_unsupported_value_type(ty, span))
            }
        }
    }

    /// Returns `true` when the block at the insertion point already has
    /// a terminator.
    fn current_block_terminated(&self) -> bool {
        self.builder
            .get_insert_block()
            .and_then(|block| block.get_terminator())
            .is_some()
    }

    fn enter_variable_scope(&mut self) {
        self.variables.push(HashMap::new());
    }

    fn exit_variable_scope(&mut self, span: Span) -> Result<(), CodegenError> {
        self.variables
            .pop()
            .map(|_| ())
            .ok_or_else(|| CodegenError::internal_no_variable_scope(span))
    }

    fn define_variable(
        &mut self,
        name: &str,
        binding: VarBinding<'ctx>,
        span: Span,
    ) -> Result<(), CodegenError> {
        let scope = self
            .variables
            .last_mut()
            .ok_or_else(|| CodegenError::internal_no_variable_scope(span))?;
        scope.insert(name.to_string(), binding);
        Ok(())
    }

    fn lookup_variable(&self, name: &str) -> Option<&VarBinding<'ctx>> {
        self.variables
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
    }
}
