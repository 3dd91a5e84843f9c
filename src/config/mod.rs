//! Configuration loading, parsing, and validation for todo.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File location, loading, and `init` in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use todo::config::{initialize, resolve};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join(".todo.cfg");
//! fs::write(&path, "url: http://localhost:9000\ntimeout: 5\n").unwrap();
//!
//! let config = resolve(&path).unwrap();
//! assert_eq!(config.url, "http://localhost:9000");
//!
//! // init refuses to overwrite
//! assert!(initialize(&path).is_err());
//! ```
//!
//! # Configuration File Location
//!
//! The file lives at `~/.todo.cfg` unless overridden with `--config` or
//! the `TODO_CONFIG` environment variable.

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    default_config_path, initialize, load_config_file, parse_config, resolve, CONFIG_FILE_NAME,
    CONFIG_TEMPLATE,
};
pub use schema::{TodoConfig, DEFAULT_TIMEOUT_SECS};
pub use validator::{
    validate, validate_config, validate_config_with, validate_with, ValidationError,
    ValidationRules,
};
