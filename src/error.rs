//! Error types for the `iss` binary.
//!
//! Library failures pass through as `AppError::Issues`; the rest covers
//! configuration, logging setup and output.

use std::path::PathBuf;
use thiserror::Error;

pub use issues_core::error::IssuesError;

/// Top-level error for command execution.
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the issue engine.
    #[error(transparent)]
    Issues(#[from] IssuesError),

    // === Configuration Errors ===
    /// Config file exists but is not valid YAML for the expected shape.
    #[error("Invalid config file {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(String),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_errors_pass_through() {
        let err: AppError = IssuesError::IssueNotFound { id: "9".into() }.into();
        assert_eq!(err.to_string(), IssuesError::IssueNotFound { id: "9".into() }.to_string());
    }

    #[test]
    fn config_parse_message_names_file() {
        let err = AppError::ConfigParse {
            path: PathBuf::from(".issues/config.yaml"),
            reason: "unknown field `sauce`".into(),
        };
        assert!(err.to_string().contains(".issues/config.yaml"));
    }
}
