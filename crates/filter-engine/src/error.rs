use model::SinkError;
use query_syntax::Span;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error("Invalid attribute at {span}: {message}")]
    InvalidAttribute { message: String, span: Span },

    #[error("Expected a constant at {span}: {message}")]
    NotConstant { message: String, span: Span },

    #[error("Type mismatch at {span}: {message}")]
    TypeMismatch { message: String, span: Span },

    #[error("Malformed expression at {span}: {message}")]
    MalformedShape { message: String, span: Span },

    #[error("Unsupported filter expression at {span}: {message}")]
    UnsupportedExpression { message: String, span: Span },

    #[error("Filter sink rejected the emitted tree: {0}")]
    Sink(#[from] SinkError),
}

/// Coarse classification of a [`CompileError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidAttribute,
    NotConstant,
    TypeMismatch,
    MalformedShape,
    UnsupportedExpression,
    Sink,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidAttribute => "invalid attribute",
            ErrorKind::NotConstant => "not constant",
            ErrorKind::TypeMismatch => "type mismatch",
            ErrorKind::MalformedShape => "malformed shape",
            ErrorKind::UnsupportedExpression => "unsupported expression",
            ErrorKind::Sink => "sink",
        };
        write!(f, "{}", name)
    }
}

impl CompileError {
    pub fn invalid_attribute(message: impl Into<String>, span: Span) -> Self {
        CompileError::InvalidAttribute {
            message: message.into(),
            span,
        }
    }

    pub fn not_constant(message: impl Into<String>, span: Span) -> Self {
        CompileError::NotConstant {
            message: message.into(),
            span,
        }
    }

    pub fn type_mismatch(message: impl Into<String>, span: Span) -> Self {
        CompileError::TypeMismatch {
            message: message.into(),
            span,
        }
    }

    pub fn malformed(message: impl Into<String>, span: Span) -> Self {
        CompileError::MalformedShape {
            message: message.into(),
            span,
        }
    }

    pub fn unsupported(message: impl Into<String>, span: Span) -> Self {
        CompileError::UnsupportedExpression {
            message: message.into(),
            span,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::InvalidAttribute { .. } => ErrorKind::InvalidAttribute,
            CompileError::NotConstant { .. } => ErrorKind::NotConstant,
            CompileError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            CompileError::MalformedShape { .. } => ErrorKind::MalformedShape,
            CompileError::UnsupportedExpression { .. } => ErrorKind::UnsupportedExpression,
            CompileError::Sink(_) => ErrorKind::Sink,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            CompileError::InvalidAttribute { span, .. }
            | CompileError::NotConstant { span, .. }
            | CompileError::TypeMismatch { span, .. }
            | CompileError::MalformedShape { span, .. }
            | CompileError::UnsupportedExpression { span, .. } => Some(*span),
            CompileError::Sink(_) => None,
        }
    }

    /// Reclassifies an operand failure as `InvalidAttribute`, keeping the
    /// original reason in the message.
    pub(crate) fn into_invalid_attribute(self) -> Self {
        match self {
            CompileError::InvalidAttribute { .. } | CompileError::Sink(_) => self,
            CompileError::NotConstant { message, span }
            | CompileError::TypeMismatch { message, span }
            | CompileError::MalformedShape { message, span }
            | CompileError::UnsupportedExpression { message, span } => {
                CompileError::InvalidAttribute { message, span }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CompileError>;
