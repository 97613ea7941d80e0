//! Constructors for expression trees.
//!
//! Nodes are created with a default span; use [`Expression::at`] to attach a
//! source location.

use crate::ast::{
    expr::{Expression, ExpressionKind, ObjectMember},
    literal::Literal,
    operator::{ArithmeticOperator, ComparisonOperator, LogicalOperator},
    span::Span,
};

fn node(kind: ExpressionKind) -> Expression {
    Expression::new(kind, Span::default())
}

pub fn reference(name: &str) -> Expression {
    node(ExpressionKind::Reference(name.to_string()))
}

/// Builds an attribute access chain from a dotted path: `attr("d.a.b")` is
/// `(d).a` accessed by `.b`. A single segment yields a bare reference.
pub fn attr(path: &str) -> Expression {
    let mut segments = path.split('.');
    let root = reference(segments.next().unwrap_or_default());
    segments.fold(root, access)
}

pub fn access(object: Expression, attribute: &str) -> Expression {
    node(ExpressionKind::AttributeAccess {
        object: Box::new(object),
        attribute: attribute.to_string(),
    })
}

pub fn literal(value: Literal) -> Expression {
    node(ExpressionKind::Literal(value))
}

pub fn string(value: &str) -> Expression {
    literal(Literal::from(value))
}

pub fn number(value: f64) -> Expression {
    literal(Literal::Number(value))
}

pub fn boolean(value: bool) -> Expression {
    literal(Literal::Boolean(value))
}

pub fn null() -> Expression {
    literal(Literal::Null)
}

pub fn array(items: Vec<Expression>) -> Expression {
    node(ExpressionKind::Array(items))
}

pub fn object(members: Vec<(&str, Expression)>) -> Expression {
    node(ExpressionKind::Object(
        members
            .into_iter()
            .map(|(key, value)| ObjectMember {
                key: key.to_string(),
                value,
            })
            .collect(),
    ))
}

pub fn range(low: Expression, high: Expression) -> Expression {
    node(ExpressionKind::Range {
        low: Box::new(low),
        high: Box::new(high),
    })
}

pub fn compare(left: Expression, operator: ComparisonOperator, right: Expression) -> Expression {
    node(ExpressionKind::Comparison {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })
}

pub fn eq(left: Expression, right: Expression) -> Expression {
    compare(left, ComparisonOperator::Equal, right)
}

pub fn ne(left: Expression, right: Expression) -> Expression {
    compare(left, ComparisonOperator::NotEqual, right)
}

pub fn lt(left: Expression, right: Expression) -> Expression {
    compare(left, ComparisonOperator::LessThan, right)
}

pub fn le(left: Expression, right: Expression) -> Expression {
    compare(left, ComparisonOperator::LessOrEqual, right)
}

pub fn gt(left: Expression, right: Expression) -> Expression {
    compare(left, ComparisonOperator::GreaterThan, right)
}

pub fn ge(left: Expression, right: Expression) -> Expression {
    compare(left, ComparisonOperator::GreaterOrEqual, right)
}

pub fn is_in(left: Expression, right: Expression) -> Expression {
    compare(left, ComparisonOperator::In, right)
}

pub fn not_in(left: Expression, right: Expression) -> Expression {
    compare(left, ComparisonOperator::NotIn, right)
}

pub fn logical(operator: LogicalOperator, operands: Vec<Expression>) -> Expression {
    node(ExpressionKind::Logical { operator, operands })
}

pub fn and(operands: Vec<Expression>) -> Expression {
    logical(LogicalOperator::And, operands)
}

pub fn or(operands: Vec<Expression>) -> Expression {
    logical(LogicalOperator::Or, operands)
}

pub fn not(operand: Expression) -> Expression {
    logical(LogicalOperator::Not, vec![operand])
}

pub fn arithmetic(left: Expression, operator: ArithmeticOperator, right: Expression) -> Expression {
    node(ExpressionKind::Arithmetic {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })
}

pub fn negate(operand: Expression) -> Expression {
    node(ExpressionKind::Negate(Box::new(operand)))
}

pub fn call(name: &str, arguments: Vec<Expression>) -> Expression {
    node(ExpressionKind::FunctionCall {
        name: name.to_string(),
        arguments,
    })
}
