//! `ir::starts_with(attr, prefix [, limit])`: prefix match on the analyzed
//! field, scoring at most `limit` matching terms.

use super::FunctionCall;
use crate::{
    compile::FilterCompiler,
    error::{CompileError, Result},
    eval::eval_scalar,
    resolve::resolve,
};
use model::{FieldName, FilterSink, ScalarValue, Term};

pub const NAME: &str = "ir::starts_with";

pub(crate) fn compile_starts_with(
    compiler: &FilterCompiler,
    sink: &mut dyn FilterSink,
    call: &FunctionCall<'_>,
) -> Result<()> {
    let (attribute, prefix, limit) = match call.arguments {
        [attribute, prefix] => (attribute, prefix, None),
        [attribute, prefix, limit] => (attribute, prefix, Some(limit)),
        _ => return Err(call.arity_error("an attribute, a prefix and an optional limit")),
    };

    let path = resolve(attribute, compiler.bindings())?;

    let term = match eval_scalar(prefix)? {
        ScalarValue::String(s) => Term::from(s.as_str()),
        other => {
            return Err(CompileError::type_mismatch(
                format!("prefix must be a string, got {}", other.value_type()),
                prefix.span,
            ));
        }
    };

    let scored_terms_limit = match limit {
        None => compiler.options().prefix_scored_terms_limit,
        Some(node) => match eval_scalar(node)? {
            ScalarValue::Number(n) => n as usize,
            other => {
                return Err(CompileError::type_mismatch(
                    format!("scored terms limit must be a number, got {}", other.value_type()),
                    node.span,
                ));
            }
        },
    };

    sink.add_prefix(FieldName::analyzed(&path.joined()), term, scored_terms_limit);
    Ok(())
}
