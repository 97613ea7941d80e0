use crate::ast::{
    literal::Literal,
    operator::{ArithmeticOperator, ComparisonOperator, LogicalOperator},
    span::Span,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub kind: ExpressionKind,
    #[serde(default)]
    pub span: Span,
}

impl Expression {
    pub fn new(kind: ExpressionKind, span: Span) -> Self {
        Expression { kind, span }
    }

    /// Short node description used in diagnostics.
    pub fn describe(&self) -> String {
        match &self.kind {
            ExpressionKind::Literal(lit) => format!("{} literal {}", lit.type_name(), lit),
            ExpressionKind::Array(items) => format!("array of {} element(s)", items.len()),
            ExpressionKind::Object(_) => "object literal".to_string(),
            ExpressionKind::Range { .. } => "range".to_string(),
            ExpressionKind::Reference(name) => format!("reference '{}'", name),
            ExpressionKind::AttributeAccess { attribute, .. } => {
                format!("attribute access '.{}'", attribute)
            }
            ExpressionKind::Comparison { operator, .. } => format!("'{}' comparison", operator),
            ExpressionKind::Logical { operator, .. } => format!("{} expression", operator),
            ExpressionKind::Arithmetic { operator, .. } => {
                format!("'{}' arithmetic", operator)
            }
            ExpressionKind::Negate(_) => "negation".to_string(),
            ExpressionKind::FunctionCall { name, .. } => format!("call to '{}'", name),
        }
    }
}

/// Expression node kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpressionKind {
    Literal(Literal),
    Array(Vec<Expression>),
    Object(Vec<ObjectMember>),
    Range {
        low: Box<Expression>,
        high: Box<Expression>,
    },
    /// Bare variable, e.g. the loop variable `d`
    Reference(String),
    /// `object.attribute`
    AttributeAccess {
        object: Box<Expression>,
        attribute: String,
    },
    Comparison {
        left: Box<Expression>,
        operator: ComparisonOperator,
        right: Box<Expression>,
    },
    Logical {
        operator: LogicalOperator,
        operands: Vec<Expression>,
    },
    Arithmetic {
        left: Box<Expression>,
        operator: ArithmeticOperator,
        right: Box<Expression>,
    },
    Negate(Box<Expression>),
    FunctionCall {
        name: String,
        arguments: Vec<Expression>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectMember {
    pub key: String,
    pub value: Expression,
}
