//! Configuration schema definitions for todo.
//!
//! This module contains the struct that maps to the YAML configuration
//! file format.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timeout applied to requests when the config does not set one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Root configuration structure for `~/.todo.cfg`.
///
/// Unknown keys are ignored so older and newer config files stay readable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Base URL of the task service, e.g. `http://localhost:9000`
    pub url: String,

    /// Request timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl TodoConfig {
    /// Create a config pointing at the given base URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    /// Set the request timeout in seconds.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Some(secs);
        self
    }

    /// Base URL without a trailing slash, ready for path suffixes.
    pub fn base_url(&self) -> &str {
        self.url.trim().trim_end_matches('/')
    }

    /// Request timeout, falling back to [`DEFAULT_TIMEOUT_SECS`].
    ///
    /// A timeout of zero is treated as unset.
    pub fn timeout_duration(&self) -> Duration {
        let secs = self
            .timeout
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}
