use crate::commands::{EXIT_FAILURE, EXIT_PARSE_ERROR};
use modsum_schema::ErrorList;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Parse(#[from] ErrorList),
    #[error("config error: {0}")]
    Config(String),
    #[error("invalid argument: {0}")]
    Usage(String),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Parse(_) => EXIT_PARSE_ERROR,
            _ => EXIT_FAILURE,
        }
    }
}
