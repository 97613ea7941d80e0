use super::{
    FilterCompiler,
    comparison::{BoundComparison, Side, bind},
};
use crate::error::{CompileError, Result};
use model::{Bounds, FilterSink, ScalarValue};
use query_syntax::{Expression, ExpressionKind, LogicalOperator};
use tracing::trace;

pub(crate) fn compile_logical(
    compiler: &FilterCompiler,
    sink: &mut dyn FilterSink,
    node: &Expression,
    operator: LogicalOperator,
    operands: &[Expression],
) -> Result<()> {
    match operator {
        LogicalOperator::Not => {
            let [operand] = operands else {
                return Err(CompileError::malformed(
                    format!("NOT takes one operand, got {}", operands.len()),
                    node.span,
                ));
            };
            sink.begin_not();
            compiler.emit(sink, operand)?;
            sink.end();
            Ok(())
        }
        LogicalOperator::And | LogicalOperator::Or => {
            if operands.is_empty() {
                return Err(CompileError::malformed(
                    format!("{} without operands", operator),
                    node.span,
                ));
            }

            if let (LogicalOperator::And, [first, second]) = (operator, operands) {
                if let Some((comparison, bounds)) = fuse(compiler, first, second) {
                    trace!("Fusing bounds on {} into one range", comparison.path);
                    compiler.emit_bounds(sink, &comparison.path, comparison.value_type(), bounds);
                    return Ok(());
                }
            }

            match operator {
                LogicalOperator::And => sink.begin_and(),
                _ => sink.begin_or(),
            }
            for operand in operands {
                compiler.emit(sink, operand)?;
            }
            sink.end();
            Ok(())
        }
    }
}

/// Two one-sided comparisons on the same attribute and value type bounding
/// opposite ends, merged into a two-sided range.
fn fuse(
    compiler: &FilterCompiler,
    first: &Expression,
    second: &Expression,
) -> Option<(BoundComparison, Bounds<ScalarValue>)> {
    let a = bound_comparison(compiler, first)?;
    let b = bound_comparison(compiler, second)?;

    if !a.path.same_attribute(&b.path) || a.value_type() != b.value_type() {
        trace!("Not fusing {} and {}: different columns", a.path, b.path);
        return None;
    }

    let (min, max) = match (a.side()?, b.side()?) {
        (Side::Min, Side::Max) => (&a, &b),
        (Side::Max, Side::Min) => (&b, &a),
        _ => return None,
    };
    let bounds = Bounds::between(min.bound()?, max.bound()?);
    Some((a, bounds))
}

fn bound_comparison(compiler: &FilterCompiler, node: &Expression) -> Option<BoundComparison> {
    let ExpressionKind::Comparison {
        left,
        operator,
        right,
    } = &node.kind
    else {
        return None;
    };
    let comparison = bind(compiler, left, *operator, right).ok()?;
    comparison.side().map(|_| comparison)
}
