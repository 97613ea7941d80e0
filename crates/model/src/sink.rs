use crate::{
    error::SinkError,
    field::FieldName,
    filter::{Bounds, Filter, PhraseTerm},
    term::Term,
};
use std::fmt;

/// Receiver of a compiled filter tree, emitted in pre-order. Every
/// `begin_*` is matched by exactly one `end`.
pub trait FilterSink {
    fn add_all(&mut self);
    fn add_empty(&mut self);
    fn add_term(&mut self, field: FieldName, term: Term);
    fn add_range(&mut self, field: FieldName, bounds: Bounds<Term>);
    fn add_graded_range(&mut self, field: FieldName, bounds: Bounds<Vec<Term>>);
    fn add_phrase(&mut self, field: FieldName, terms: Vec<PhraseTerm>);
    fn add_prefix(&mut self, field: FieldName, term: Term, scored_terms_limit: usize);
    fn begin_and(&mut self);
    fn begin_or(&mut self);
    fn begin_not(&mut self);
    fn end(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    And,
    Or,
    Not,
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::And => write!(f, "AND"),
            Combinator::Or => write!(f, "OR"),
            Combinator::Not => write!(f, "NOT"),
        }
    }
}

#[derive(Debug)]
struct Scope {
    combinator: Combinator,
    children: Vec<Filter>,
}

/// Sink that assembles the emitted calls into an owned [`Filter`].
#[derive(Debug, Default)]
pub struct FilterBuilder {
    scopes: Vec<Scope>,
    roots: Vec<Filter>,
    error: Option<SinkError>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing has been emitted yet.
    pub fn is_untouched(&self) -> bool {
        self.scopes.is_empty() && self.roots.is_empty() && self.error.is_none()
    }

    pub fn finish(self) -> Result<Filter, SinkError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if !self.scopes.is_empty() {
            return Err(SinkError::UnclosedScope(self.scopes.len()));
        }

        let mut roots = self.roots;
        match roots.len() {
            0 => Err(SinkError::NothingEmitted),
            1 => Ok(roots.remove(0)),
            n => Err(SinkError::MultipleRoots(n)),
        }
    }

    fn push(&mut self, filter: Filter) {
        match self.scopes.last_mut() {
            Some(scope) => scope.children.push(filter),
            None => self.roots.push(filter),
        }
    }

    fn open(&mut self, combinator: Combinator) {
        self.scopes.push(Scope {
            combinator,
            children: Vec::new(),
        });
    }

    fn fail(&mut self, err: SinkError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}

impl FilterSink for FilterBuilder {
    fn add_all(&mut self) {
        self.push(Filter::All);
    }

    fn add_empty(&mut self) {
        self.push(Filter::Empty);
    }

    fn add_term(&mut self, field: FieldName, term: Term) {
        self.push(Filter::Term { field, term });
    }

    fn add_range(&mut self, field: FieldName, bounds: Bounds<Term>) {
        self.push(Filter::Range { field, bounds });
    }

    fn add_graded_range(&mut self, field: FieldName, bounds: Bounds<Vec<Term>>) {
        self.push(Filter::GradedRange { field, bounds });
    }

    fn add_phrase(&mut self, field: FieldName, terms: Vec<PhraseTerm>) {
        self.push(Filter::Phrase { field, terms });
    }

    fn add_prefix(&mut self, field: FieldName, term: Term, scored_terms_limit: usize) {
        self.push(Filter::Prefix {
            field,
            term,
            scored_terms_limit,
        });
    }

    fn begin_and(&mut self) {
        self.open(Combinator::And);
    }

    fn begin_or(&mut self) {
        self.open(Combinator::Or);
    }

    fn begin_not(&mut self) {
        self.open(Combinator::Not);
    }

    fn end(&mut self) {
        let Some(Scope {
            combinator,
            mut children,
        }) = self.scopes.pop()
        else {
            self.fail(SinkError::UnbalancedEnd);
            return;
        };

        let filter = match combinator {
            _ if children.is_empty() => {
                self.fail(SinkError::EmptyCombinator(combinator));
                return;
            }
            Combinator::And => Filter::And(children),
            Combinator::Or => Filter::Or(children),
            Combinator::Not if children.len() == 1 => Filter::not(children.remove(0)),
            Combinator::Not => {
                self.fail(SinkError::NotArity(children.len()));
                return;
            }
        };
        self.push(filter);
    }
}
