use super::FilterCompiler;
use crate::{
    error::Result,
    eval::eval_scalar,
    resolve::{AttributePath, resolve},
};
use model::{Bound, Bounds, FilterSink, ScalarValue, ValueType};
use query_syntax::{ComparisonOperator, Expression};

/// Which end of a range a one-sided comparison constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Min,
    Max,
}

/// `attr OP value` with the attribute resolved and the value evaluated,
/// normalised so the attribute is on the left.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BoundComparison {
    pub path: AttributePath,
    pub operator: ComparisonOperator,
    pub value: ScalarValue,
}

impl BoundComparison {
    pub fn value_type(&self) -> ValueType {
        self.value.value_type()
    }

    pub fn side(&self) -> Option<Side> {
        match self.operator {
            ComparisonOperator::GreaterThan | ComparisonOperator::GreaterOrEqual => Some(Side::Min),
            ComparisonOperator::LessThan | ComparisonOperator::LessOrEqual => Some(Side::Max),
            _ => None,
        }
    }

    /// The single bound of an ordering comparison.
    pub fn bound(&self) -> Option<Bound<ScalarValue>> {
        let inclusive = matches!(
            self.operator,
            ComparisonOperator::GreaterOrEqual | ComparisonOperator::LessOrEqual
        );
        self.side()
            .map(|_| Bound::new(self.value.clone(), inclusive))
    }
}

/// Resolves the attribute side and evaluates the value side of a comparison.
/// A literal on the left is accepted by mirroring the operator. Any failure
/// is reported as an invalid attribute.
pub(crate) fn bind(
    compiler: &FilterCompiler,
    left: &Expression,
    operator: ComparisonOperator,
    right: &Expression,
) -> Result<BoundComparison> {
    let bindings = compiler.bindings();

    let (path, operator, value_node) = match resolve(left, bindings) {
        Ok(path) => (path, operator, right),
        Err(err) => match (operator.mirrored(), resolve(right, bindings)) {
            (Some(mirrored), Ok(path)) => (path, mirrored, left),
            _ => return Err(err),
        },
    };

    let value = eval_scalar(value_node).map_err(|err| err.into_invalid_attribute())?;
    Ok(BoundComparison {
        path,
        operator,
        value,
    })
}

pub(crate) fn compile_comparison(
    compiler: &FilterCompiler,
    sink: &mut dyn FilterSink,
    left: &Expression,
    operator: ComparisonOperator,
    right: &Expression,
) -> Result<()> {
    let comparison = bind(compiler, left, operator, right)?;
    emit_comparison(compiler, sink, &comparison);
    Ok(())
}

pub(crate) fn emit_comparison(
    compiler: &FilterCompiler,
    sink: &mut dyn FilterSink,
    comparison: &BoundComparison,
) {
    let BoundComparison {
        path,
        operator,
        value,
    } = comparison;

    match (operator, comparison.side(), comparison.bound()) {
        (ComparisonOperator::Equal, _, _) => compiler.emit_term(sink, path, value),
        (ComparisonOperator::NotEqual, _, _) => {
            sink.begin_not();
            compiler.emit_term(sink, path, value);
            sink.end();
        }
        (_, Some(Side::Min), Some(bound)) => compiler.emit_bounds(
            sink,
            path,
            comparison.value_type(),
            Bounds {
                min: Some(bound),
                max: None,
            },
        ),
        (_, Some(Side::Max), Some(bound)) => compiler.emit_bounds(
            sink,
            path,
            comparison.value_type(),
            Bounds {
                min: None,
                max: Some(bound),
            },
        ),
        (ComparisonOperator::In | ComparisonOperator::NotIn, _, _) => {
            unreachable!("membership is dispatched before comparisons")
        }
        (_, None, _) | (_, _, None) => unreachable!("ordering operators always bound one side"),
    }
}
