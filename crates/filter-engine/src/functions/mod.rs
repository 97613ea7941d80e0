pub mod phrase;
pub mod starts_with;

use crate::{
    compile::FilterCompiler,
    error::{CompileError, Result},
};
use model::FilterSink;
use query_syntax::{Expression, Span};
use std::collections::HashMap;

/// Call site handed to a function compiler.
#[derive(Debug, Clone, Copy)]
pub struct FunctionCall<'a> {
    pub name: &'a str,
    pub arguments: &'a [Expression],
    pub span: Span,
}

impl FunctionCall<'_> {
    pub(crate) fn arity_error(&self, expected: &str) -> CompileError {
        CompileError::malformed(
            format!(
                "{} expects {}, got {} argument(s)",
                self.name,
                expected,
                self.arguments.len()
            ),
            self.span,
        )
    }
}

/// Type alias for function compilers
pub type FunctionImpl = fn(&FilterCompiler, &mut dyn FilterSink, &FunctionCall<'_>) -> Result<()>;

/// Registry of filter functions, keyed case-insensitively
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    functions: HashMap<String, FunctionImpl>,
}

impl FunctionRegistry {
    /// Create a new function registry with all built-in functions
    pub fn new() -> Self {
        let mut registry = Self {
            functions: HashMap::new(),
        };

        registry.register(phrase::NAME, phrase::compile_phrase);
        registry.register(starts_with::NAME, starts_with::compile_starts_with);

        registry
    }

    pub fn register(&mut self, name: &str, func: FunctionImpl) {
        self.functions.insert(name.to_lowercase(), func);
    }

    pub fn get(&self, name: &str) -> Option<FunctionImpl> {
        self.functions.get(&name.to_lowercase()).copied()
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(&name.to_lowercase())
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
