//! Compiles a query expression tree into a search filter tree.
//!
//! The entry point is [`FilterCompiler::compile`]; with no sink it only
//! validates, with a sink it emits the filter tree into it. Either way the
//! expression is checked in full before the sink sees a single call.

pub mod bindings;
pub mod compile;
pub mod error;
pub mod eval;
pub mod functions;
pub mod options;
pub mod resolve;

pub use bindings::Bindings;
pub use compile::FilterCompiler;
pub use error::{CompileError, ErrorKind, Result};
pub use functions::FunctionRegistry;
pub use options::{CompilerOptions, ConfigError, NegatedMembership};
pub use resolve::AttributePath;
