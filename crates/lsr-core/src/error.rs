//! Error types and exit codes for lsr
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed network line, empty field)
//! - 3: Data error (unknown node, missing network file)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the lsr binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args or input (2)
    Usage = 2,
    /// Data error - unknown node, missing file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during lsr operations
#[derive(Error, Debug)]
pub enum LsrError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("malformed line {line:?}: {reason}")]
    MalformedLine { line: String, reason: String },

    #[error("empty field: {field}")]
    EmptyInput { field: String },

    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("network file not found: {path:?}")]
    FileNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl LsrError {
    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        LsrError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a line that does not follow `NAME: NEIGHBOR:COST ...`
    pub fn malformed_line(line: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        LsrError::MalformedLine {
            line: line.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        LsrError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            LsrError::UnknownFormat(_)
            | LsrError::UsageError(_)
            | LsrError::MalformedLine { .. }
            | LsrError::EmptyInput { .. } => ExitCode::Usage,

            LsrError::NotFound { .. } | LsrError::FileNotFound { .. } => ExitCode::Data,

            LsrError::Io(_)
            | LsrError::Json(_)
            | LsrError::Toml(_)
            | LsrError::FailedOperationWithTarget { .. }
            | LsrError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            LsrError::UnknownFormat(_) => "unknown_format",
            LsrError::UsageError(_) => "usage_error",
            LsrError::MalformedLine { .. } => "malformed_line",
            LsrError::EmptyInput { .. } => "empty_input",
            LsrError::NotFound { .. } => "not_found",
            LsrError::FileNotFound { .. } => "file_not_found",
            LsrError::Io(_) => "io_error",
            LsrError::Json(_) => "json_error",
            LsrError::Toml(_) => "toml_error",
            LsrError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            LsrError::Other(_) => "other",
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

/// Result type alias for lsr operations
pub type Result<T> = std::result::Result<T, LsrError>;
