//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.
//!
//! # Example
//!
//! ```
//! use todo::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("TODO: buy milk");
//! ui.success("Done!");
//!
//! assert!(ui.messages().contains(&"TODO: buy milk".to_string()));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use super::{TodoTheme, UserInterface};

/// Mock UI implementation for testing.
///
/// Uses the plain theme so captured lines carry no escape codes.
#[derive(Debug)]
pub struct MockUI {
    theme: TodoTheme,
    messages: Vec<String>,
    raw: String,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    hints: Vec<String>,
}

impl Default for MockUI {
    fn default() -> Self {
        Self::new()
    }
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self {
            theme: TodoTheme::plain(),
            messages: Vec::new(),
            raw: String::new(),
            successes: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
            hints: Vec::new(),
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Everything written with `write_raw`, concatenated.
    pub fn raw_output(&self) -> &str {
        &self.raw
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn theme(&self) -> &TodoTheme {
        &self.theme
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn write_raw(&mut self, text: &str) {
        self.raw.push_str(text);
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();

        ui.message("Hello");
        ui.write_raw("a\n");
        ui.write_raw("b");
        ui.success("Done");
        ui.warning("Be careful");
        ui.error("Oops");
        ui.show_hint("Try again");

        assert_eq!(ui.messages(), &["Hello"]);
        assert_eq!(ui.raw_output(), "a\nb");
        assert_eq!(ui.successes(), &["Done"]);
        assert_eq!(ui.warnings(), &["Be careful"]);
        assert_eq!(ui.errors(), &["Oops"]);
        assert_eq!(ui.hints(), &["Try again"]);
    }

    #[test]
    fn mock_ui_has_helpers() {
        let mut ui = MockUI::new();
        ui.message("TODO: buy milk");
        ui.warning("Server responded with HTTP 404");

        assert!(ui.has_message("buy milk"));
        assert!(ui.has_warning("404"));
        assert!(!ui.has_hint("anything"));
    }
}
