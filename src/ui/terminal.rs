//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, TodoTheme, UserInterface};

/// Writes command output to stdout and problems to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: TodoTheme,
}

impl TerminalUI {
    /// Create a terminal UI, coloured unless `plain` is set or colours
    /// are unavailable.
    pub fn new(plain: bool) -> Self {
        let theme = if !plain && should_use_colors() {
            TodoTheme::new()
        } else {
            TodoTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn theme(&self) -> &TodoTheme {
        &self.theme
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn write_raw(&mut self, text: &str) {
        self.out.write_all(text.as_bytes()).ok();
        self.out.flush().ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_hint(&mut self, hint: &str) {
        writeln!(self.out, "  {}", self.theme.format_hint(hint)).ok();
    }
}

/// Create the UI used by the binary.
pub fn create_ui(no_color: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(no_color))
}
