//! Error types for configuration, logging setup and the CLI.
//!
//! Generation itself is total and never returns these.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TracegenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid log format: {0} (must be 'json' or 'text')")]
    InvalidLogFormat(String),

    #[error("Invalid log output: {0} (must be 'stdout', 'stderr' or 'file')")]
    InvalidLogOutput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for TracegenError {
    fn from(err: config::ConfigError) -> Self {
        TracegenError::Config(err.to_string())
    }
}
