//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which resolves the
//! config (for everything but `init` and `completions`) and routes CLI
//! subcommands to their implementations.

pub mod add;
pub mod completions;
pub mod delete;
pub mod dispatcher;
pub mod display;
pub mod done;
pub mod init;
pub mod list;
pub mod system;

pub use dispatcher::{report_error, Command, CommandDispatcher};
