//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for capturing output in tests
//! - [`TodoTheme`] for styling
//!
//! # Example
//!
//! ```
//! use todo::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Task added");
//! assert!(ui.has_success("Task added"));
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, TodoTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Styles used when rendering.
    fn theme(&self) -> &TodoTheme;

    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Write `text` to the output exactly as given, with no newline added.
    fn write_raw(&mut self, text: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display a hint about what to do next.
    fn show_hint(&mut self, hint: &str);
}
