use std::collections::BTreeSet;

/// Variables an attribute path may be rooted at. One of them is the
/// document variable of the enclosing loop; the rest are other loop
/// variables in scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    document: String,
    others: BTreeSet<String>,
}

impl Bindings {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            others: BTreeSet::new(),
        }
    }

    pub fn with_variable(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if name != self.document {
            self.others.insert(name);
        }
        self
    }

    pub fn is_bound(&self, name: &str) -> bool {
        name == self.document || self.others.contains(name)
    }

    /// All bound names, document variable first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.document.as_str()).chain(self.others.iter().map(String::as_str))
    }
}

impl Default for Bindings {
    fn default() -> Self {
        Self::new("d")
    }
}
