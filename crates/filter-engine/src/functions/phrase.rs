//! `ir::phrase(attr, term [, offset, term]*)`: an ordered sequence of terms
//! on the analyzed field, each offset giving the positions skipped before
//! the next term.

use super::FunctionCall;
use crate::{
    compile::FilterCompiler,
    error::{CompileError, Result},
    eval::eval_scalar,
    resolve::resolve,
};
use model::{FieldName, FilterSink, PhraseTerm, ScalarValue, Term};
use query_syntax::Expression;

pub const NAME: &str = "ir::phrase";

pub(crate) fn compile_phrase(
    compiler: &FilterCompiler,
    sink: &mut dyn FilterSink,
    call: &FunctionCall<'_>,
) -> Result<()> {
    let (attribute, first, rest) = match call.arguments {
        [attribute, first, rest @ ..] if rest.len() % 2 == 0 => (attribute, first, rest),
        _ => return Err(call.arity_error("an attribute, a term and (offset, term) pairs")),
    };

    let path = resolve(attribute, compiler.bindings())?;

    let mut terms = Vec::with_capacity(1 + rest.len() / 2);
    terms.push(PhraseTerm::new(phrase_term(first)?, 0));
    for pair in rest.chunks_exact(2) {
        let offset = phrase_offset(&pair[0])?;
        terms.push(PhraseTerm::new(phrase_term(&pair[1])?, offset));
    }

    sink.add_phrase(FieldName::analyzed(&path.joined()), terms);
    Ok(())
}

fn phrase_term(node: &Expression) -> Result<Term> {
    match eval_scalar(node)? {
        ScalarValue::String(s) => Ok(Term::from(s.as_str())),
        other => Err(CompileError::type_mismatch(
            format!("phrase term must be a string, got {}", other.value_type()),
            node.span,
        )),
    }
}

/// Offsets are truncated toward zero; negative offsets become 0.
fn phrase_offset(node: &Expression) -> Result<usize> {
    match eval_scalar(node)? {
        ScalarValue::Number(n) => Ok(n as usize),
        other => Err(CompileError::type_mismatch(
            format!("phrase offset must be a number, got {}", other.value_type()),
            node.span,
        )),
    }
}
