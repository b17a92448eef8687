//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Run file could not be parsed.
    #[error("Invalid run file {path}: {reason}")]
    Config {
        /// Path of the run file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// A view needs scenarios the session does not have.
    #[error("No scenarios to show: {0}")]
    NoScenarios(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
