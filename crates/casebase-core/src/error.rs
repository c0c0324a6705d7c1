//! Error types and exit codes for casebase
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage or configuration error (bad flags, invalid weights)
//! - 3: Data error (query not found, unusable corpus)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage or configuration error (2)
    Usage = 2,
    /// Data error - missing item, unusable corpus (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during casebase operations
#[derive(Error, Debug)]
pub enum CasebaseError {
    // Usage and configuration errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid weight for {attribute}: {value} (must be finite and non-negative)")]
    InvalidWeight { attribute: String, value: f64 },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("invalid corpus {path:?}: {reason}")]
    InvalidCorpus { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperation {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl CasebaseError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        CasebaseError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        CasebaseError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        CasebaseError::FailedOperation {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CasebaseError::UnknownFormat(_)
            | CasebaseError::UsageError(_)
            | CasebaseError::InvalidWeight { .. }
            | CasebaseError::InvalidValue { .. } => ExitCode::Usage,

            CasebaseError::NotFound { .. } | CasebaseError::InvalidCorpus { .. } => ExitCode::Data,

            CasebaseError::Io(_)
            | CasebaseError::Json(_)
            | CasebaseError::Toml(_)
            | CasebaseError::FailedOperation { .. }
            | CasebaseError::Other(_) => ExitCode::Failure,
        }
    }

    /// Stable identifier used in structured error output
    pub fn error_type(&self) -> &'static str {
        match self {
            CasebaseError::UnknownFormat(_) => "unknown_format",
            CasebaseError::UsageError(_) => "usage_error",
            CasebaseError::InvalidWeight { .. } => "invalid_weight",
            CasebaseError::InvalidValue { .. } => "invalid_value",
            CasebaseError::NotFound { .. } => "not_found",
            CasebaseError::InvalidCorpus { .. } => "invalid_corpus",
            CasebaseError::Io(_) => "io_error",
            CasebaseError::Json(_) => "json_error",
            CasebaseError::Toml(_) => "toml_error",
            CasebaseError::FailedOperation { .. } => "failed_operation",
            CasebaseError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for casebase operations
pub type Result<T> = std::result::Result<T, CasebaseError>;
