//! Init command implementation.
//!
//! The `todo init` command writes a commented-out config template.

use std::path::{Path, PathBuf};

use crate::config::initialize;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// The init command implementation.
pub struct InitCommand {
    config_path: PathBuf,
}

impl InitCommand {
    /// Create a new init command writing to `config_path`.
    pub fn new(config_path: &Path) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
        }
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        initialize(&self.config_path)?;

        ui.success(&format!("Created {}", self.config_path.display()));
        ui.show_hint("Uncomment `url` and point it at your task server, e.g.");
        ui.show_hint("url: \"http://localhost:9000\"");

        Ok(())
    }
}
