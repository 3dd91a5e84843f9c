//! todo - Command-line client for a remote task server.
//!
//! `todo` lists, adds, completes, and deletes tasks on a task service
//! over HTTP. Connection settings come from `~/.todo.cfg`, created with
//! `todo init`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, argument parsing, and dispatch
//! - [`client`] - Blocking HTTP client for the task service
//! - [`config`] - Configuration loading, validation, and `init`
//! - [`error`] - Error types and result aliases
//! - [`task`] - Task records and id assignment
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use todo::task::{fnv1a_32, HashedIds, Task};
//!
//! let task = Task::new("buy milk", &HashedIds);
//! assert_eq!(task.id, fnv1a_32("buy milk").to_string());
//! assert!(!task.complete);
//! ```
//!
//! For talking to a server, see the integration tests.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod task;
pub mod ui;

pub use error::{Result, TodoError};
