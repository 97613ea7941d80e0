use crate::{numeric, value::ScalarValue};
use serde::{Serialize, Serializer};
use std::fmt;

/// Term byte encodings for non-string scalars, matching what the indexer
/// writes into the `_b` and `_n` columns.
pub const TRUE_TERM: &[u8] = &[0xFF];
pub const FALSE_TERM: &[u8] = &[0x00];
pub const NULL_TERM: &[u8] = &[];

/// Raw term bytes as stored in the term dictionary.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Term(Vec<u8>);

impl Term {
    pub fn new(bytes: Vec<u8>) -> Self {
        Term(bytes)
    }

    /// Exact-match term for a scalar. Numbers use the full-precision term of
    /// the numeric encoding.
    pub fn from_scalar(value: &ScalarValue) -> Self {
        match value {
            ScalarValue::String(s) => Term::from(s.as_str()),
            ScalarValue::Bool(true) => Term::from(TRUE_TERM),
            ScalarValue::Bool(false) => Term::from(FALSE_TERM),
            ScalarValue::Null => Term::from(NULL_TERM),
            ScalarValue::Number(n) => numeric::leading_term(*n),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn as_printable(&self) -> Option<&str> {
        std::str::from_utf8(&self.0)
            .ok()
            .filter(|s| !s.chars().any(char::is_control))
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Term(value.as_bytes().to_vec())
    }
}

impl From<&[u8]> for Term {
    fn from(value: &[u8]) -> Self {
        Term(value.to_vec())
    }
}

impl From<Vec<u8>> for Term {
    fn from(value: Vec<u8>) -> Self {
        Term(value)
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_printable() {
            Some(s) => write!(f, "Term({:?})", s),
            None => write!(f, "Term({:02x?})", self.0),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_printable() {
            Some(s) => write!(f, "{}", s),
            None => {
                write!(f, "0x")?;
                for byte in &self.0 {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }
    }
}

impl Serialize for Term {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_printable() {
            Some(s) => serializer.serialize_str(s),
            None => serializer.collect_seq(self.0.iter()),
        }
    }
}
