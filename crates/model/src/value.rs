use query_syntax::Literal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag of a scalar; selects the index column a value lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    String,
    Bool,
    Null,
    Number,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::String => write!(f, "string"),
            ValueType::Bool => write!(f, "bool"),
            ValueType::Null => write!(f, "null"),
            ValueType::Number => write!(f, "number"),
        }
    }
}

/// Constant scalar produced by evaluating a literal sub-expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScalarValue {
    String(String),
    Bool(bool),
    Null,
    Number(f64),
}

impl ScalarValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            ScalarValue::String(_) => ValueType::String,
            ScalarValue::Bool(_) => ValueType::Bool,
            ScalarValue::Null => ValueType::Null,
            ScalarValue::Number(_) => ValueType::Number,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            ScalarValue::String(s) => !s.is_empty(),
            ScalarValue::Bool(b) => *b,
            ScalarValue::Null => false,
            ScalarValue::Number(n) => *n != 0.0,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScalarValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&Literal> for ScalarValue {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::String(s) => ScalarValue::String(s.clone()),
            Literal::Number(n) => ScalarValue::Number(*n),
            Literal::Boolean(b) => ScalarValue::Bool(*b),
            Literal::Null => ScalarValue::Null,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::String(s) => write!(f, "'{}'", s),
            ScalarValue::Bool(b) => write!(f, "{}", b),
            ScalarValue::Null => write!(f, "null"),
            ScalarValue::Number(n) => write!(f, "{}", n),
        }
    }
}
