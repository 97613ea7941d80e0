use crate::sink::Combinator;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("Invalid numeric precision step {0}: expected a value in 1..=64")]
    InvalidPrecisionStep(u32),
}

/// Structural misuse of a [`FilterBuilder`](crate::sink::FilterBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    #[error("{0} scope closed without children")]
    EmptyCombinator(Combinator),

    #[error("NOT scope must wrap exactly one filter, got {0}")]
    NotArity(usize),

    #[error("end() called without an open scope")]
    UnbalancedEnd,

    #[error("{0} scope(s) left open")]
    UnclosedScope(usize),

    #[error("No filter was emitted")]
    NothingEmitted,

    #[error("Expected a single root filter, got {0}")]
    MultipleRoots(usize),
}
