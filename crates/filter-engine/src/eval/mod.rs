mod fold;

use crate::error::{CompileError, Result};
use fold::ArithmeticFolder;
use model::{ScalarValue, ValueType};
use query_syntax::{Expression, ExpressionKind};

/// Constant `low..high` with endpoints of one value type.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantRange {
    pub low: ScalarValue,
    pub high: ScalarValue,
}

impl ConstantRange {
    pub fn value_type(&self) -> ValueType {
        self.low.value_type()
    }
}

/// Evaluates a constant scalar, folding negation and arithmetic over numbers.
pub fn eval_scalar(node: &Expression) -> Result<ScalarValue> {
    match &node.kind {
        ExpressionKind::Literal(literal) => Ok(ScalarValue::from(literal)),
        ExpressionKind::Negate(operand) => match eval_scalar(operand)? {
            ScalarValue::Number(n) => Ok(ScalarValue::Number(-n)),
            other => Err(CompileError::type_mismatch(
                format!("cannot negate {} value {}", other.value_type(), other),
                node.span,
            )),
        },
        ExpressionKind::Arithmetic {
            left,
            operator,
            right,
        } => {
            let l = eval_scalar(left)?;
            let r = eval_scalar(right)?;
            let folder = ArithmeticFolder::new(&l, &r, *operator);
            if !folder.operands_are_numbers() {
                return Err(CompileError::type_mismatch(
                    format!(
                        "'{}' needs numeric operands, got {} and {}",
                        operator,
                        l.value_type(),
                        r.value_type()
                    ),
                    node.span,
                ));
            }
            folder.evaluate().ok_or_else(|| {
                CompileError::not_constant(format!("{} {} {} has no value", l, operator, r), node.span)
            })
        }
        ExpressionKind::Array(_) | ExpressionKind::Object(_) | ExpressionKind::Range { .. } => {
            Err(CompileError::type_mismatch(
                format!("{} is not a scalar", node.describe()),
                node.span,
            ))
        }
        ExpressionKind::Reference(_)
        | ExpressionKind::AttributeAccess { .. }
        | ExpressionKind::Comparison { .. }
        | ExpressionKind::Logical { .. }
        | ExpressionKind::FunctionCall { .. } => Err(CompileError::not_constant(
            format!("{} is not a constant", node.describe()),
            node.span,
        )),
    }
}

/// Evaluates an array literal element by element. An empty array is valid.
pub fn eval_array(node: &Expression) -> Result<Vec<ScalarValue>> {
    match &node.kind {
        ExpressionKind::Array(items) => items.iter().map(eval_scalar).collect(),
        _ => Err(CompileError::type_mismatch(
            format!("expected an array, found {}", node.describe()),
            node.span,
        )),
    }
}

/// Evaluates a range literal whose endpoints are constants of one type.
pub fn eval_range(node: &Expression) -> Result<ConstantRange> {
    let ExpressionKind::Range { low, high } = &node.kind else {
        return Err(CompileError::type_mismatch(
            format!("expected a range, found {}", node.describe()),
            node.span,
        ));
    };

    for endpoint in [low, high] {
        if matches!(endpoint.kind, ExpressionKind::Range { .. }) {
            return Err(CompileError::malformed(
                "range has more than two endpoints",
                node.span,
            ));
        }
    }

    let low = eval_scalar(low)?;
    let high = eval_scalar(high)?;
    if low.value_type() != high.value_type() {
        return Err(CompileError::type_mismatch(
            format!(
                "range endpoints differ in type: {} and {}",
                low.value_type(),
                high.value_type()
            ),
            node.span,
        ));
    }

    Ok(ConstantRange { low, high })
}

/// Query-language truthiness of a constant node.
pub fn truthiness(node: &Expression) -> Result<bool> {
    match &node.kind {
        ExpressionKind::Array(_) | ExpressionKind::Object(_) | ExpressionKind::Range { .. } => {
            Ok(true)
        }
        _ => eval_scalar(node).map(|value| value.is_truthy()),
    }
}
