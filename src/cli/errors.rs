//! CLI-specific error types
//!
//! Everything that can stop a command: a bad limits profile, a broken
//! input channel, or a caller contract violation surfaced by the rules
//! subsystem.

use thiserror::Error;

use crate::rules::{ContractError, LimitsError};

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Limits profile unreadable or structurally invalid
    #[error("{0}")]
    Limits(#[from] LimitsError),

    /// Caller contract violation from the rules subsystem
    #[error("{0}")]
    Contract(#[from] ContractError),

    /// stdin/stdout failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input was not parseable JSON
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Get the error code string for responses and logs
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Limits(err) => err.code(),
            CliError::Contract(err) => err.code().code(),
            CliError::Io(_) => "SHIP_CLI_IO_ERROR",
            CliError::Json(_) => "SHIP_CLI_INVALID_JSON",
        }
    }
}
