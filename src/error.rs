//! Error types for todo operations.
//!
//! This module defines [`TodoError`], the error type returned by every
//! command, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Nothing is recovered locally: commands return the error to `main`,
//!   which prints it and exits non-zero
//! - Use `anyhow::Error` (via `TodoError::Other`) for unexpected errors
//! - Messages should tell the user what to do next where possible

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for todo operations.
#[derive(Debug, Error)]
pub enum TodoError {
    /// No configuration file at the expected location.
    #[error("Configuration not found at {path}. Run `todo init` to create one.")]
    ConfigMissing { path: PathBuf },

    /// Configuration file exists but is unusable.
    #[error("Invalid configuration at {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    /// `init` was asked to overwrite an existing configuration.
    #[error("Configuration already exists at {path}")]
    ConfigAlreadyExists { path: PathBuf },

    /// Wrong or missing command arguments.
    #[error("Usage: {message}")]
    Usage { message: String },

    /// Transport failure or unexpected HTTP status.
    #[error("Request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// Response body could not be decoded.
    #[error("Could not decode response from {url}: {message}")]
    Decode { url: String, message: String },

    /// The service did not accept a new task.
    #[error("Task was rejected by the server (HTTP {status}): {body}")]
    SubmissionRejected { status: u16, body: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TodoError {
    /// Process exit code for this error: 2 for usage errors, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage { .. } => 2,
            _ => 1,
        }
    }
}

/// Result type alias for todo operations.
pub type Result<T> = std::result::Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_missing_tells_user_to_run_init() {
        let err = TodoError::ConfigMissing {
            path: PathBuf::from("/home/me/.todo.cfg"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/home/me/.todo.cfg"));
        assert!(msg.contains("todo init"));
    }

    #[test]
    fn config_invalid_displays_path_and_message() {
        let err = TodoError::ConfigInvalid {
            path: PathBuf::from("/cfg"),
            message: "url is not set".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/cfg"));
        assert!(msg.contains("url is not set"));
    }

    #[test]
    fn config_already_exists_displays_path() {
        let err = TodoError::ConfigAlreadyExists {
            path: PathBuf::from("/cfg"),
        };
        assert!(err.to_string().contains("/cfg"));
    }

    #[test]
    fn network_error_displays_url_and_message() {
        let err = TodoError::Network {
            url: "http://localhost:9000/api/tasks/".into(),
            message: "connection refused".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("http://localhost:9000/api/tasks/"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn submission_rejected_displays_status_and_body() {
        let err = TodoError::SubmissionRejected {
            status: 400,
            body: "bad task".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("bad task"));
    }

    #[test]
    fn usage_errors_exit_with_two() {
        let usage = TodoError::Usage {
            message: "missing id".into(),
        };
        assert_eq!(usage.exit_code(), 2);

        let missing = TodoError::ConfigMissing {
            path: PathBuf::from("cfg"),
        };
        assert_eq!(missing.exit_code(), 1);
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: TodoError = io_err.into();
        assert!(matches!(err, TodoError::Io(_)));
    }
}
