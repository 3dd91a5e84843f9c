//! Delete command implementation.
//!
//! `todo del <id>` removes a task and echoes the server's reply.

use crate::client::TaskClient;
use crate::error::{Result, TodoError};
use crate::ui::UserInterface;

use super::dispatcher::Command;
use super::display::show_echo;

/// The delete command implementation.
pub struct DeleteCommand<'a> {
    client: &'a TaskClient,
    id: String,
}

impl<'a> DeleteCommand<'a> {
    /// Create a new delete command for task `id`.
    pub fn new(client: &'a TaskClient, id: String) -> Self {
        Self { client, id }
    }
}

impl Command for DeleteCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(TodoError::Usage {
                message: "todo del <id>: id must not be empty".to_string(),
            });
        }

        let echo = self.client.delete_task(id)?;
        show_echo(ui, &echo);

        Ok(())
    }
}
