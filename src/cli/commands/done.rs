//! Done command implementation.
//!
//! `todo done <id>` marks a task as complete and echoes the server's reply.

use crate::client::TaskClient;
use crate::error::{Result, TodoError};
use crate::ui::UserInterface;

use super::dispatcher::Command;
use super::display::show_echo;

/// The done command implementation.
pub struct DoneCommand<'a> {
    client: &'a TaskClient,
    id: String,
}

impl<'a> DoneCommand<'a> {
    /// Create a new done command for task `id`.
    pub fn new(client: &'a TaskClient, id: String) -> Self {
        Self { client, id }
    }
}

impl Command for DoneCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(TodoError::Usage {
                message: "todo done <id>: id must not be empty".to_string(),
            });
        }

        let echo = self.client.complete_task(id)?;
        show_echo(ui, &echo);

        Ok(())
    }
}
