//! Command-line interface for todo.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{valid_commands, AddArgs, Cli, Commands, CompletionsArgs, IdArgs, ListArgs};
pub use commands::{report_error, Command, CommandDispatcher};
