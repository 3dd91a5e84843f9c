//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// todo - Command-line client for a remote task server.
#[derive(Debug, Parser)]
#[command(name = "todo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ~/.todo.cfg)
    #[arg(short, long, global = true, env = "TODO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a config file template at ~/.todo.cfg
    Init,

    /// List all tasks
    List(ListArgs),

    /// Add a new task
    Add(AddArgs),

    /// Delete a task by id
    #[command(visible_alias = "delete")]
    Del(IdArgs),

    /// Mark a task as done by id
    Done(IdArgs),

    /// Show which server is answering
    System,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Hide completed tasks
    #[arg(long)]
    pub pending: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AddArgs {
    /// Task name; multiple words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub name: Vec<String>,
}

impl AddArgs {
    /// The task name as one string.
    pub fn joined_name(&self) -> String {
        self.name.join(" ")
    }
}

/// Arguments for commands that act on one task.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct IdArgs {
    /// Task id, as shown by `todo list`
    pub id: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Names of every subcommand, in declaration order.
pub fn valid_commands() -> Vec<String> {
    Cli::command()
        .get_subcommands()
        .map(|cmd| cmd.get_name().to_string())
        .collect()
}
