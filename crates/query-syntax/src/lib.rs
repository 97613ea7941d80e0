//! Expression tree handed to the filter compiler by the query parser.

pub mod ast;
pub mod build;

pub use ast::{
    expr::{Expression, ExpressionKind, ObjectMember},
    literal::Literal,
    operator::{ArithmeticOperator, ComparisonOperator, LogicalOperator},
    span::Span,
};
