use model::ScalarValue;
use query_syntax::ArithmeticOperator;
use tracing::trace;

/// Folds one arithmetic node over two constant operands.
pub(crate) struct ArithmeticFolder<'a> {
    left: &'a ScalarValue,
    right: &'a ScalarValue,
    op: ArithmeticOperator,
}

impl<'a> ArithmeticFolder<'a> {
    pub fn new(left: &'a ScalarValue, right: &'a ScalarValue, op: ArithmeticOperator) -> Self {
        Self { left, right, op }
    }

    /// `None` when the operands cannot be folded: a non-numeric operand or a
    /// zero divisor.
    pub fn evaluate(&self) -> Option<ScalarValue> {
        match (self.left, self.right) {
            (ScalarValue::Number(l), ScalarValue::Number(r)) => self.eval_number(*l, *r),
            _ => None,
        }
    }

    pub fn operands_are_numbers(&self) -> bool {
        self.left.as_f64().is_some() && self.right.as_f64().is_some()
    }

    fn eval_number(&self, l: f64, r: f64) -> Option<ScalarValue> {
        use ArithmeticOperator::*;

        let value = match self.op {
            Add => l + r,
            Subtract => l - r,
            Multiply => l * r,
            Divide | Modulo if r == 0.0 => {
                trace!("Refusing to fold {} {} {}", l, self.op, r);
                return None;
            }
            Divide => l / r,
            Modulo => l % r,
        };
        Some(ScalarValue::Number(value))
    }
}
