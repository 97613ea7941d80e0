use crate::value::ValueType;
use serde::Serialize;
use std::fmt;

/// Separates the attribute path from the type suffix in a mangled name.
pub const DELIMITER: char = '\0';
pub const BOOL_SUFFIX: &str = "_b";
pub const NULL_SUFFIX: &str = "_n";
pub const NUMERIC_SUFFIX: &str = "_d";

/// Name of an index column. Always derived from an attribute path, never the
/// raw path of a typed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FieldName(String);

impl FieldName {
    /// Column holding values of `value_type` under `path`. Strings are stored
    /// under the bare path, every other type under `path\0<suffix>`.
    pub fn mangled(path: &str, value_type: ValueType) -> Self {
        let suffix = match value_type {
            ValueType::String => return FieldName(path.to_string()),
            ValueType::Bool => BOOL_SUFFIX,
            ValueType::Null => NULL_SUFFIX,
            ValueType::Number => NUMERIC_SUFFIX,
        };

        let mut name = String::with_capacity(path.len() + 1 + suffix.len());
        name.push_str(path);
        name.push(DELIMITER);
        name.push_str(suffix);
        FieldName(name)
    }

    /// Column with analyzed text, used by phrase and prefix filters.
    pub fn analyzed(path: &str) -> Self {
        FieldName(path.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.split_once(DELIMITER) {
            Some((path, suffix)) => write!(f, "{}\\0{}", path, suffix),
            None => write!(f, "{}", self.0),
        }
    }
}
