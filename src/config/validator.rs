//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - `url` must be set
//! - `url` must be an absolute http(s) URL
//! - `url` must contain the required path, when one is configured

use crate::config::schema::TodoConfig;
use crate::error::{Result, TodoError};
use reqwest::Url;
use std::path::Path;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Optional, stricter checks on top of the default rules.
#[derive(Debug, Clone, Default)]
pub struct ValidationRules {
    /// Substring the base URL must contain (e.g. `/todo`).
    pub required_path: Option<String>,
}

impl ValidationRules {
    /// Require the base URL to contain `segment`.
    pub fn require_path(segment: impl Into<String>) -> Self {
        Self {
            required_path: Some(segment.into()),
        }
    }
}

/// Validate a configuration with the default rules and return all errors.
pub fn validate_config(config: &TodoConfig) -> Vec<ValidationError> {
    validate_config_with(config, &ValidationRules::default())
}

/// Validate a configuration against `rules` and return all errors.
///
/// An unset URL short-circuits the remaining checks, since they would
/// only repeat the same problem.
pub fn validate_config_with(config: &TodoConfig, rules: &ValidationRules) -> Vec<ValidationError> {
    let url = config.url.trim();
    if url.is_empty() {
        return vec![ValidationError::new("missing-url", "url is not set")];
    }

    let mut errors = Vec::new();

    match Url::parse(url) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                errors.push(ValidationError::new(
                    "unsupported-scheme",
                    format!("url '{}' must use http or https", url),
                ));
            }
        }
        Err(e) => errors.push(ValidationError::new(
            "invalid-url",
            format!("url '{}' is not a valid URL: {}", url, e),
        )),
    }

    if let Some(required) = &rules.required_path {
        if !url.contains(required.as_str()) {
            errors.push(ValidationError::new(
                "missing-path",
                format!("url '{}' must contain '{}'", url, required),
            ));
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// `path` is the file the config was read from, used for error reporting.
///
/// # Errors
///
/// Returns `ConfigInvalid` if any validation rules fail.
pub fn validate(config: &TodoConfig, path: &Path) -> Result<()> {
    validate_with(config, &ValidationRules::default(), path)
}

/// Validate against `rules` and return Result.
///
/// # Errors
///
/// Returns `ConfigInvalid` if any validation rules fail.
pub fn validate_with(config: &TodoConfig, rules: &ValidationRules, path: &Path) -> Result<()> {
    let errors = validate_config_with(config, rules);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(TodoError::ConfigInvalid {
            path: path.to_path_buf(),
            message: messages.join("; "),
        })
    }
}
