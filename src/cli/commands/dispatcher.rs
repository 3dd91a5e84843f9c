//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandDispatcher`] for routing CLI subcommands
//! - [`report_error`] for turning a failed command into output and an exit code

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::client::TaskClient;
use crate::config::{default_config_path, resolve, TodoConfig};
use crate::error::{Result, TodoError};
use crate::ui::UserInterface;

use super::display::host_label;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Errors
    ///
    /// Any failure is returned as-is; commands never exit the process.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()>;
}

/// Print a command failure and return the process exit code for it.
pub fn report_error(ui: &mut dyn UserInterface, err: &TodoError) -> u8 {
    ui.error(&format!("Error: {}", err));
    err.exit_code()
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config_path: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher reading config from `config_path`.
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Create a dispatcher for the config named on the command line, or
    /// `~/.todo.cfg`.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => default_config_path()?,
        };
        Ok(Self::new(config_path))
    }

    /// Get the config file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load and validate the config.
    pub fn resolve_config(&self) -> Result<TodoConfig> {
        resolve(&self.config_path)
    }

    /// Resolve the config and build a client for it.
    fn connect(&self) -> Result<(TodoConfig, TaskClient)> {
        let config = self.resolve_config()?;
        let client = TaskClient::new(&config)?;
        Ok((config, client))
    }

    /// Dispatch and execute a command.
    ///
    /// `init` and `completions` run without a config; everything else
    /// resolves it first and fails if it is missing or invalid.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<()> {
        match &cli.command {
            Commands::Init => {
                let cmd = super::init::InitCommand::new(&self.config_path);
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            Commands::List(args) => {
                let (config, client) = self.connect()?;
                let cmd =
                    super::list::ListCommand::new(&client, host_label(&config), args.clone());
                cmd.execute(ui)
            }
            Commands::Add(args) => {
                let (_, client) = self.connect()?;
                let cmd = super::add::AddCommand::new(&client, args.joined_name());
                cmd.execute(ui)
            }
            Commands::Done(args) => {
                let (_, client) = self.connect()?;
                let cmd = super::done::DoneCommand::new(&client, args.id.clone());
                cmd.execute(ui)
            }
            Commands::Del(args) => {
                let (_, client) = self.connect()?;
                let cmd = super::delete::DeleteCommand::new(&client, args.id.clone());
                cmd.execute(ui)
            }
            Commands::System => {
                let (_, client) = self.connect()?;
                let cmd = super::system::SystemCommand::new(&client);
                cmd.execute(ui)
            }
        }
    }
}
