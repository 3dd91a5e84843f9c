//! List command implementation.
//!
//! The `todo list` command shows every task on the server.

use anyhow::Context;

use crate::cli::args::ListArgs;
use crate::client::TaskClient;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::Command;
use super::display::show_task_list;

/// The list command implementation.
pub struct ListCommand<'a> {
    client: &'a TaskClient,
    host: String,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command. `host` is shown in the banner.
    pub fn new(client: &'a TaskClient, host: String, args: ListArgs) -> Self {
        Self { client, host, args }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let tasks = self.client.list_tasks()?;
        tracing::debug!("Fetched {} tasks", tasks.len());

        if self.args.json {
            let tasks: Vec<_> = tasks
                .into_iter()
                .filter(|t| !(self.args.pending && t.complete))
                .collect();
            let json = serde_json::to_string_pretty(&tasks).context("Failed to encode tasks")?;
            ui.message(&json);
        } else {
            show_task_list(ui, &self.host, &tasks, !self.args.pending);
        }

        Ok(())
    }
}
