mod comparison;
mod logical;
mod membership;
mod truthy;

use crate::{
    bindings::Bindings,
    error::{CompileError, Result},
    functions::{FunctionCall, FunctionRegistry},
    options::{CompilerOptions, ConfigError},
    resolve::AttributePath,
};
use model::{
    Bounds, FieldName, Filter, FilterBuilder, FilterSink, NumericEncoder, PhraseTerm, ScalarValue,
    Term, ValueType,
};
use query_syntax::{Expression, ExpressionKind};
use tracing::{debug, trace};

/// Compiles filter expressions for one set of bound variables.
///
/// The compiler holds no per-call state: the same instance may compile any
/// number of expressions, from any number of threads, each call with its own
/// sink.
#[derive(Debug)]
pub struct FilterCompiler {
    bindings: Bindings,
    options: CompilerOptions,
    encoder: NumericEncoder,
    functions: FunctionRegistry,
}

impl FilterCompiler {
    pub fn new(bindings: Bindings) -> Self {
        Self {
            bindings,
            options: CompilerOptions::default(),
            encoder: NumericEncoder::default(),
            functions: FunctionRegistry::new(),
        }
    }

    pub fn with_options(bindings: Bindings, options: CompilerOptions) -> std::result::Result<Self, ConfigError> {
        let encoder = options.numeric_encoder()?;
        Ok(Self {
            bindings,
            options,
            encoder,
            functions: FunctionRegistry::new(),
        })
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    pub fn functions_mut(&mut self) -> &mut FunctionRegistry {
        &mut self.functions
    }

    /// Compiles `expr` into `sink`, or only validates it when `sink` is `None`.
    ///
    /// The whole expression is validated before the sink receives any call,
    /// so on failure the sink is left exactly as it was passed in.
    pub fn compile(&self, sink: Option<&mut dyn FilterSink>, expr: &Expression) -> Result<()> {
        debug!(
            "Compiling filter {} (sink: {})",
            expr.describe(),
            if sink.is_some() { "present" } else { "absent" }
        );

        if let Err(err) = self.emit(&mut Discard, expr) {
            debug!("Filter rejected: {}", err);
            return Err(err);
        }

        if let Some(sink) = sink {
            self.emit(sink, expr)?;
        }

        debug!("Filter compiled");
        Ok(())
    }

    pub fn validate(&self, expr: &Expression) -> Result<()> {
        self.compile(None, expr)
    }

    /// Compiles `expr` into an owned [`Filter`].
    pub fn build(&self, expr: &Expression) -> Result<Filter> {
        let mut builder = FilterBuilder::new();
        self.compile(Some(&mut builder), expr)?;
        Ok(builder.finish()?)
    }

    /// Emits the filter for `expr` into `sink`, dispatching on the node kind.
    pub(crate) fn emit(&self, sink: &mut dyn FilterSink, expr: &Expression) -> Result<()> {
        match &expr.kind {
            ExpressionKind::Logical { operator, operands } => {
                trace!("Dispatching {} with {} operand(s)", operator, operands.len());
                logical::compile_logical(self, sink, expr, *operator, operands)
            }
            ExpressionKind::Comparison {
                left,
                operator,
                right,
            } if operator.is_membership() => {
                trace!("Dispatching membership '{}'", operator);
                membership::compile_membership(self, sink, left, *operator, right)
            }
            ExpressionKind::Comparison {
                left,
                operator,
                right,
            } => {
                trace!("Dispatching comparison '{}'", operator);
                comparison::compile_comparison(self, sink, left, *operator, right)
            }
            ExpressionKind::FunctionCall { name, arguments } => {
                trace!("Dispatching call to '{}'", name);
                let call = FunctionCall {
                    name,
                    arguments,
                    span: expr.span,
                };
                let function = self.functions.get(name).ok_or_else(|| {
                    CompileError::unsupported(format!("unknown function '{}'", name), expr.span)
                })?;
                function(self, sink, &call)
            }
            _ => truthy::compile_truthy(sink, expr),
        }
    }

    /// Emits a range leaf over the column of `value_type` under `path`.
    /// Numbers become a graded range, everything else a plain range.
    pub(crate) fn emit_bounds(
        &self,
        sink: &mut dyn FilterSink,
        path: &AttributePath,
        value_type: ValueType,
        bounds: Bounds<ScalarValue>,
    ) {
        let field = FieldName::mangled(&path.joined(), value_type);
        match value_type {
            ValueType::Number => {
                sink.add_graded_range(field, bounds.map(|value| self.graded_terms(&value)))
            }
            ValueType::String | ValueType::Bool | ValueType::Null => {
                sink.add_range(field, bounds.map(|value| Term::from_scalar(&value)))
            }
        }
    }

    /// Exact-match term leaf for `value` under `path`.
    pub(crate) fn emit_term(&self, sink: &mut dyn FilterSink, path: &AttributePath, value: &ScalarValue) {
        sink.add_term(
            FieldName::mangled(&path.joined(), value.value_type()),
            Term::from_scalar(value),
        );
    }

    fn graded_terms(&self, value: &ScalarValue) -> Vec<Term> {
        match value {
            ScalarValue::Number(n) => self.encoder.encode(*n),
            other => vec![Term::from_scalar(other)],
        }
    }
}

/// Sink used for the validation pass; drops every call.
struct Discard;

impl FilterSink for Discard {
    fn add_all(&mut self) {}
    fn add_empty(&mut self) {}
    fn add_term(&mut self, _field: FieldName, _term: Term) {}
    fn add_range(&mut self, _field: FieldName, _bounds: Bounds<Term>) {}
    fn add_graded_range(&mut self, _field: FieldName, _bounds: Bounds<Vec<Term>>) {}
    fn add_phrase(&mut self, _field: FieldName, _terms: Vec<PhraseTerm>) {}
    fn add_prefix(&mut self, _field: FieldName, _term: Term, _scored_terms_limit: usize) {}
    fn begin_and(&mut self) {}
    fn begin_or(&mut self) {}
    fn begin_not(&mut self) {}
    fn end(&mut self) {}
}
