use model::{EncodingError, NumericEncoder, numeric::DEFAULT_PRECISION_STEP};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error;

pub const DEFAULT_PREFIX_SCORED_TERMS_LIMIT: usize = 128;

/// Expansion of `attr NOT IN [..]` over a non-empty array.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NegatedMembership {
    /// `Not(And(terms))`
    #[default]
    Conjunction,
    /// `Not(Or(terms))`
    Disjunction,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerOptions {
    /// Scored terms limit of `ir::starts_with` when the call omits one.
    pub prefix_scored_terms_limit: usize,
    /// Bits dropped between consecutive graded terms of a number.
    pub numeric_precision_step: u32,
    pub negated_membership: NegatedMembership,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            prefix_scored_terms_limit: DEFAULT_PREFIX_SCORED_TERMS_LIMIT,
            numeric_precision_step: DEFAULT_PRECISION_STEP,
            negated_membership: NegatedMembership::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read options file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse options: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid options: {0}")]
    Invalid(#[from] EncodingError),
}

impl CompilerOptions {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let options: CompilerOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.numeric_encoder().map(|_| ())
    }

    pub(crate) fn numeric_encoder(&self) -> Result<NumericEncoder, ConfigError> {
        Ok(NumericEncoder::new(self.numeric_precision_step)?)
    }
}
