//! Lexical scope tracking for the parser.
//!
//! This module defines [`Context`], the stack of scope frames the parser
//! maintains while walking function bodies and blocks. Each frame maps
//! identifiers to their declared types, keeping variables and functions
//! in separate namespaces.

use std::collections::HashMap;

use super::types::Type;

/// One lexical scope: variable and function bindings declared in it.
#[derive(Debug, Default)]
struct ScopeFrame {
    variables: HashMap<String, Type>,
    functions: HashMap<String, Type>,
}

/// A stack of lexical scopes.
///
/// A fresh frame is entered for every function body and every `{ ... }`
/// block, and left when the block ends. Insertions always go into the
/// innermost frame; lookups walk the stack from innermost to outermost
/// and return the first hit, or [`Type::NotFound`] when no frame binds
/// the identifier.
///
/// # Examples
///
/// ```
/// use anchor::ast::{Context, Type};
///
/// let mut context = Context::new();
/// context.set_type("a", Type::Integer);
/// context.enter();
/// context.set_type("a", Type::String); // shadows the outer binding
/// assert_eq!(context.get_type("a"), Type::String);
/// context.exit();
/// assert_eq!(context.get_type("a"), Type::Integer);
/// ```
#[derive(Debug)]
pub struct Context {
    frames: Vec<ScopeFrame>,
}

impl Context {
    /// Creates a context holding a single root scope.
    pub fn new() -> Self {
        Context {
            frames: vec![ScopeFrame::default()],
        }
    }

    /// Enters a child scope.
    pub fn enter(&mut self) {
        self.frames.push(ScopeFrame::default());
    }

    /// Leaves the innermost scope, dropping its bindings.
    ///
    /// # Panics
    ///
    /// Panics if called on the root scope; enter/exit calls must pair up.
    pub fn exit(&mut self) {
        assert!(
            self.frames.len() > 1,
            "Cannot exit the root scope; enter/exit calls are unbalanced"
        );
        self.frames.pop();
    }

    /// Binds a variable in the innermost scope.
    pub fn set_type(&mut self, identifier: &str, ty: Type) {
        self.innermost().variables.insert(identifier.to_string(), ty);
    }

    /// Looks up a variable, walking scopes innermost-first.
    ///
    /// Returns [`Type::NotFound`] when no scope binds the identifier.
    pub fn get_type(&self, identifier: &str) -> Type {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.variables.get(identifier).copied())
            .unwrap_or(Type::NotFound)
    }

    /// Binds a function's return type in the innermost scope.
    pub fn set_function_type(&mut self, identifier: &str, ty: Type) {
        self.innermost().functions.insert(identifier.to_string(), ty);
    }

    /// Looks up a function's return type, walking scopes innermost-first.
    ///
    /// Returns [`Type::NotFound`] when no scope binds the identifier.
    pub fn get_function_type(&self, identifier: &str) -> Type {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.functions.get(identifier).copied())
            .unwrap_or(Type::NotFound)
    }

    fn innermost(&mut self) -> &mut ScopeFrame {
        self.frames
            .last_mut()
            .expect("Context always holds at least the root scope")
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}
