//! Error types and exit codes for lintbridge

use std::process::ExitCode;
use std::time::Duration;

use thiserror::Error;

use crate::types::Linter;

/// Main error type for lintbridge operations
#[derive(Error, Debug)]
pub enum LintBridgeError {
    #[error("\"{name}\" is not a valid javascript linter")]
    UnsupportedLinter { name: String },

    #[error("{linter} cannot be found")]
    ExecutableNotFound { linter: Linter },

    #[error("Unparseable output from {linter}: {raw}")]
    MalformedOutput { linter: Linter, raw: String },

    #[error("Record {index} from {linter} is missing required field '{field}'")]
    MissingField {
        linter: Linter,
        index: usize,
        field: &'static str,
    },

    #[error("{linter} produced more than {limit} bytes of output")]
    OutputTooLarge { linter: Linter, limit: usize },

    #[error("{linter} did not finish within {timeout:?}")]
    Timeout { linter: Linter, timeout: Duration },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LintBridgeError {
    /// Convert error to an exit code:
    /// - 0: Success
    /// - 1: IO error
    /// - 2: Unknown linter identity (configuration error)
    /// - 3: Linter executable missing
    /// - 4: Linter output could not be parsed
    /// - 5: Linter timed out
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io(_) => ExitCode::from(1),
            Self::UnsupportedLinter { .. } => ExitCode::from(2),
            Self::ExecutableNotFound { .. } => ExitCode::from(3),
            Self::MalformedOutput { .. } => ExitCode::from(4),
            Self::MissingField { .. } => ExitCode::from(4),
            Self::OutputTooLarge { .. } => ExitCode::from(4),
            Self::Timeout { .. } => ExitCode::from(5),
        }
    }
}

/// Result type alias for lintbridge operations
pub type Result<T> = std::result::Result<T, LintBridgeError>;
