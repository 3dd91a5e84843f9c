//! Add command implementation.
//!
//! Leading and trailing whitespace is stripped from the name before it is
//! sent, so `todo add " nap "` and `todo add nap` submit the same task and
//! the same hashed id.

use crate::client::TaskClient;
use crate::error::{Result, TodoError};
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// The add command implementation.
pub struct AddCommand<'a> {
    client: &'a TaskClient,
    name: String,
}

impl<'a> AddCommand<'a> {
    /// Create a new add command for a task called `name`.
    pub fn new(client: &'a TaskClient, name: String) -> Self {
        Self { client, name }
    }
}

impl Command for AddCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(TodoError::Usage {
                message: "todo add <name>: task name must not be empty".to_string(),
            });
        }

        let task = self.client.add_task(name)?;

        if task.id.is_empty() {
            ui.success(&format!("Added \"{}\"", task.name));
        } else {
            ui.success(&format!("Added \"{}\" ({})", task.name, task.id));
        }

        Ok(())
    }
}
