//! Configuration file location, loading, and creation.
//!
//! Every command except `init` resolves the config through [`resolve`];
//! `init` writes the commented-out [`CONFIG_TEMPLATE`] through
//! [`initialize`].

use crate::config::schema::TodoConfig;
use crate::config::validator::validate;
use crate::error::{Result, TodoError};
use anyhow::anyhow;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name of the per-user config, relative to the home directory.
pub const CONFIG_FILE_NAME: &str = ".todo.cfg";

/// Written by `todo init`. Every field is commented out so the user has
/// to edit it before other commands will run.
pub const CONFIG_TEMPLATE: &str = "\
# todo configuration
#
# Base URL of the task service (required):
# url: \"http://localhost:9000\"
#
# Request timeout in seconds (optional, default 30):
# timeout: 30
";

/// Default config location: `~/.todo.cfg`.
pub fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("could not determine home directory"))?;
    Ok(home.join(CONFIG_FILE_NAME))
}

/// Load and validate the config at `path`.
///
/// # Errors
///
/// Returns `ConfigMissing` if the file doesn't exist.
/// Returns `ConfigInvalid` if it doesn't parse or has no usable URL.
pub fn resolve(path: &Path) -> Result<TodoConfig> {
    let config = load_config_file(path)?;
    validate(&config, path)?;
    tracing::debug!("Resolved config from {}: url={}", path.display(), config.url);
    Ok(config)
}

/// Load a single config file without validating it.
///
/// # Errors
///
/// Returns `ConfigMissing` if the file doesn't exist.
/// Returns `ConfigInvalid` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<TodoConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TodoError::ConfigMissing {
                path: path.to_path_buf(),
            }
        } else {
            TodoError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`TodoConfig`].
///
/// A document holding nothing but comments (such as a fresh template)
/// parses as the default, empty config.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<TodoConfig> {
    let only_comments = content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    });
    if only_comments {
        return Ok(TodoConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| TodoError::ConfigInvalid {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Write [`CONFIG_TEMPLATE`] to `path`.
///
/// # Errors
///
/// Returns `ConfigAlreadyExists` if a file is already there; it is left
/// untouched.
pub fn initialize(path: &Path) -> Result<()> {
    let already_exists = || TodoError::ConfigAlreadyExists {
        path: path.to_path_buf(),
    };

    if path.exists() {
        return Err(already_exists());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::AlreadyExists {
                already_exists()
            } else {
                TodoError::Io(e)
            }
        })?;
    file.write_all(CONFIG_TEMPLATE.as_bytes())?;

    tracing::debug!("Wrote config template to {}", path.display());
    Ok(())
}
