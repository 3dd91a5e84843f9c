//! System command implementation.
//!
//! `todo system` asks the server for its hostname and prints the banner.

use crate::client::TaskClient;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::Command;
use super::display::show_banner;

/// The system command implementation.
pub struct SystemCommand<'a> {
    client: &'a TaskClient,
}

impl<'a> SystemCommand<'a> {
    /// Create a new system command.
    pub fn new(client: &'a TaskClient) -> Self {
        Self { client }
    }
}

impl Command for SystemCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let info = self.client.system_info()?;
        show_banner(ui, &info.hostname);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TodoConfig;
    use crate::ui::MockUI;
    use httpmock::prelude::*;

    #[test]
    fn shows_server_hostname() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/system");
            then.status(200).body(r#"{"hostname":"tasks-01"}"#);
        });
        let client = TaskClient::new(&TodoConfig::new(server.base_url())).unwrap();
        let mut ui = MockUI::new();

        SystemCommand::new(&client).execute(&mut ui).unwrap();

        assert!(ui.has_message("Todo Server [tasks-01]"));
    }
}
