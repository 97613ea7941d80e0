use crate::{
    bindings::Bindings,
    error::{CompileError, Result},
};
use query_syntax::{Expression, ExpressionKind};
use std::fmt;

/// Attribute path rooted at a bound variable, e.g. `d.a.b` is root `d` with
/// segments `[a, b]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributePath {
    pub root: String,
    pub segments: Vec<String>,
}

impl AttributePath {
    /// Segments joined with `.`, the form used for field names.
    pub fn joined(&self) -> String {
        self.segments.join(".")
    }

    /// Same root and same segments.
    pub fn same_attribute(&self, other: &AttributePath) -> bool {
        self == other
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)?;
        for segment in &self.segments {
            write!(f, ".{}", segment)?;
        }
        Ok(())
    }
}

/// Resolves an access chain such as `d.a.b` into an [`AttributePath`].
pub fn resolve(node: &Expression, bindings: &Bindings) -> Result<AttributePath> {
    let mut segments = Vec::new();
    let mut current = node;

    loop {
        match &current.kind {
            ExpressionKind::AttributeAccess { object, attribute } => {
                segments.push(attribute.clone());
                current = object.as_ref();
            }
            ExpressionKind::Reference(name) => {
                if segments.is_empty() {
                    return Err(CompileError::invalid_attribute(
                        format!("bare reference '{}' does not select an attribute", name),
                        node.span,
                    ));
                }
                if !bindings.is_bound(name) {
                    return Err(CompileError::invalid_attribute(
                        format!("'{}' is not a bound variable", name),
                        current.span,
                    ));
                }
                segments.reverse();
                return Ok(AttributePath {
                    root: name.clone(),
                    segments,
                });
            }
            _ => {
                return Err(CompileError::invalid_attribute(
                    format!("expected an attribute path, found {}", current.describe()),
                    current.span,
                ));
            }
        }
    }
}
