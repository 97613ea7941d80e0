use filter_engine::{CompileError, ConfigError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to deserialize the expression file as JSON: {0}")]
    ExpressionDeserialize(#[from] serde_json::Error),

    #[error("Failed to load compiler options: {0}")]
    Options(#[from] ConfigError),

    #[error("Failed to compile the filter: {0}")]
    Compile(#[from] CompileError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("At least one --bind variable is required")]
    NoBindings,
}
