use crate::{field::FieldName, term::Term};
use serde::Serialize;

/// One side of a range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bound<T> {
    pub value: T,
    pub inclusive: bool,
}

impl<T> Bound<T> {
    pub fn new(value: T, inclusive: bool) -> Self {
        Self { value, inclusive }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Bound<U> {
        Bound {
            value: f(self.value),
            inclusive: self.inclusive,
        }
    }
}

/// Range limits; at least one side is set on every emitted range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bounds<T> {
    pub min: Option<Bound<T>>,
    pub max: Option<Bound<T>>,
}

impl<T> Bounds<T> {
    pub fn min(value: T, inclusive: bool) -> Self {
        Self {
            min: Some(Bound::new(value, inclusive)),
            max: None,
        }
    }

    pub fn max(value: T, inclusive: bool) -> Self {
        Self {
            min: None,
            max: Some(Bound::new(value, inclusive)),
        }
    }

    pub fn between(min: Bound<T>, max: Bound<T>) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Bounds<U> {
        Bounds {
            min: self.min.map(|b| b.map(&mut f)),
            max: self.max.map(|b| b.map(&mut f)),
        }
    }
}

/// Phrase member and the number of positions skipped before it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhraseTerm {
    pub term: Term,
    pub offset: usize,
}

impl PhraseTerm {
    pub fn new(term: impl Into<Term>, offset: usize) -> Self {
        Self {
            term: term.into(),
            offset,
        }
    }
}

/// Filter tree executed by the search engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Filter {
    All,
    Empty,
    Term {
        field: FieldName,
        term: Term,
    },
    Range {
        field: FieldName,
        bounds: Bounds<Term>,
    },
    /// Numeric range; each bound carries the graded term sequence of its value.
    GradedRange {
        field: FieldName,
        bounds: Bounds<Vec<Term>>,
    },
    Phrase {
        field: FieldName,
        terms: Vec<PhraseTerm>,
    },
    Prefix {
        field: FieldName,
        term: Term,
        scored_terms_limit: usize,
    },
    And(Vec<Filter>),
    Or(Vec<Filter>),
    Not(Box<Filter>),
}

impl Filter {
    pub fn term(field: FieldName, term: impl Into<Term>) -> Self {
        Filter::Term {
            field,
            term: term.into(),
        }
    }

    pub fn not(filter: Filter) -> Self {
        Filter::Not(Box::new(filter))
    }

    /// Field of a leaf filter; `None` for `All`, `Empty` and combinators.
    pub fn field(&self) -> Option<&FieldName> {
        match self {
            Filter::Term { field, .. }
            | Filter::Range { field, .. }
            | Filter::GradedRange { field, .. }
            | Filter::Phrase { field, .. }
            | Filter::Prefix { field, .. } => Some(field),
            Filter::All | Filter::Empty | Filter::And(_) | Filter::Or(_) | Filter::Not(_) => None,
        }
    }
}
