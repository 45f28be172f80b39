//! Error types for the hdrstamp CLI.
//!
//! Uses thiserror for derive macros. Every variant is terminal for the
//! invocation and maps to a distinct process exit code.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for artifact generation.
#[derive(Error, Debug)]
pub enum GenError {
    /// The output path argument was not supplied.
    #[error("missing required argument: output file path")]
    MissingArgument,

    /// The artifact (or its parent directory) could not be created or written.
    #[error("failed to write '{}': {reason}", path.display())]
    WriteFailure { path: PathBuf, reason: String },

    /// Git could not be run or returned a non-zero status.
    #[error("Git operation failed: {0}")]
    GitFailure(String),
}

impl GenError {
    /// Build a `WriteFailure` for `path` from any displayable cause.
    pub fn write_failure(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        GenError::WriteFailure {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenError::MissingArgument => exit_codes::USAGE_ERROR,
            GenError::WriteFailure { .. } => exit_codes::WRITE_FAILURE,
            GenError::GitFailure(_) => exit_codes::GIT_FAILURE,
        }
    }
}

/// Result type alias for hdrstamp operations.
pub type Result<T> = std::result::Result<T, GenError>;
