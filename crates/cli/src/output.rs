use crate::error::CliError;
use filter_engine::CompileError;
use serde::Serialize;

/// Outcome of `filterc validate`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationReport {
    pub fn from_result(result: &Result<(), CompileError>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                kind: None,
                error: None,
            },
            Err(err) => Self {
                valid: false,
                kind: Some(err.kind().to_string()),
                error: Some(err.to_string()),
            },
        }
    }
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(CliError::JsonSerialize)
}

/// Writes `json` to `path`, or prints it when no path is given.
pub fn emit(json: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}
