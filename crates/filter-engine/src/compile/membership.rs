use super::FilterCompiler;
use crate::{
    error::{CompileError, Result},
    eval::{eval_array, eval_range, eval_scalar},
    options::NegatedMembership,
    resolve::resolve,
};
use model::{Bound, Bounds, FilterSink};
use query_syntax::{ComparisonOperator, Expression, ExpressionKind};
use tracing::trace;

/// Compiles `attr IN set` and `attr NOT IN set` where the set is a constant
/// array or range.
pub(crate) fn compile_membership(
    compiler: &FilterCompiler,
    sink: &mut dyn FilterSink,
    left: &Expression,
    operator: ComparisonOperator,
    right: &Expression,
) -> Result<()> {
    let negated = operator == ComparisonOperator::NotIn;
    let path = resolve(left, compiler.bindings())?;

    match &right.kind {
        ExpressionKind::Array(_) => {
            let values = eval_array(right)?;
            if values.is_empty() {
                trace!("Empty set on {}", path);
                if negated {
                    sink.add_all();
                } else {
                    sink.add_empty();
                }
                return Ok(());
            }

            if negated {
                sink.begin_not();
                match compiler.options().negated_membership {
                    NegatedMembership::Conjunction => sink.begin_and(),
                    NegatedMembership::Disjunction => sink.begin_or(),
                }
            } else {
                sink.begin_or();
            }
            for value in &values {
                compiler.emit_term(sink, &path, value);
            }
            sink.end();
            if negated {
                sink.end();
            }
            Ok(())
        }
        ExpressionKind::Range { .. } => {
            let range = eval_range(right)?;
            let value_type = range.value_type();
            let bounds = Bounds::between(Bound::new(range.low, true), Bound::new(range.high, true));

            if negated {
                sink.begin_not();
                sink.begin_or();
            }
            compiler.emit_bounds(sink, &path, value_type, bounds);
            if negated {
                sink.end();
                sink.end();
            }
            Ok(())
        }
        _ => {
            let value = eval_scalar(right)?;
            Err(CompileError::type_mismatch(
                format!(
                    "'{}' expects an array or a range, got {} value {}",
                    operator,
                    value.value_type(),
                    value
                ),
                right.span,
            ))
        }
    }
}
