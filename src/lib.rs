//! The Anchor programming language compiler library.
//!
//! This library provides the core components of the Anchor compiler:
//! lexical analysis, parsing with error recovery and inline type
//! checking, and LLVM IR generation.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`parser`] - Recursive descent parser
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`codegen`] - LLVM code generation
//!
//! # Example
//!
//! ```
//! let source = r#"
//! function integer main() {
//!     print("Hello, World!");
//!     return 0;
//! };"#;
//!
//! let output = anchor::compile(source).expect("compilation failed");
//! assert!(output.contains("define i32 @main()"));
//! ```

pub mod ast;
pub mod codegen;
pub mod lexer;
pub mod parser;
pub mod token;

use codegen::{Codegen, CodegenError};
use inkwell::context::Context;
use lexer::{LexError, Lexer};
use parser::Parser;

/// A fatal compilation error.
///
/// Syntax and type diagnostics are not fatal — they accumulate in the
/// program and become the (successful) output of [`compile`]. The two
/// error kinds that do abort are lexer errors, which have no recovery,
/// and code generation errors, which indicate a compiler bug.
#[derive(Debug)]
pub enum CompileError {
    /// The lexer hit input it cannot tokenize.
    Lex(LexError),
    /// Code generation failed on a clean parse.
    Codegen(CodegenError),
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Lex(error) => write!(f, "{}", error),
            CompileError::Codegen(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for CompileError {}

impl From<LexError> for CompileError {
    fn from(error: LexError) -> Self {
        CompileError::Lex(error)
    }
}

impl From<CodegenError> for CompileError {
    fn from(error: CodegenError) -> Self {
        CompileError::Codegen(error)
    }
}

/// Compiles Anchor source text.
///
/// Runs the full pipeline: lexing, parsing (with recovery and inline
/// type checking), and — when the program is clean — code generation.
///
/// # Returns
///
/// - A clean program yields the LLVM module's textual IR dump, ready
///   for an external interpreter such as `lli`.
/// - A program with syntax or type diagnostics yields their messages
///   concatenated, one per line, and no IR.
///
/// # Errors
///
/// Returns a [`CompileError`] for the non-recoverable kinds: lexer
/// errors and internal code generation failures (including a generated
/// module that fails LLVM verification).
pub fn compile(source: &str) -> Result<String, CompileError> {
    let tokens = Lexer::new(source).tokenize()?;
    let program = Parser::new(tokens).parse();

    if program.is_syntactically_correct() {
        let context = Context::create();
        let mut codegen = Codegen::new(&context, "anchor");
        codegen.compile(&program)?;
        codegen.verify()?;
        Ok(codegen.ir_to_string())
    } else {
        let mut output = String::new();
        for error in &program.errors {
            output.push_str(error.message());
            output.push('\n');
        }
        Ok(output)
    }
}
