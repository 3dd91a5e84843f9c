//! Shared display helpers for task output.
//!
//! Listings print incomplete tasks first, then completed ones, each group
//! in the order the server returned them.

use reqwest::Url;

use crate::client::Echo;
use crate::config::TodoConfig;
use crate::task::Task;
use crate::ui::{TodoTheme, UserInterface};

/// Extra columns added to the longest task name.
pub const NAME_PADDING: usize = 10;

/// Title shown in the banner.
pub const BANNER_TITLE: &str = "Todo Server";

const BANNER_RULE: &str = "---------------------------------";

/// Width of the name column: longest name plus [`NAME_PADDING`].
pub fn name_column_width(tasks: &[Task]) -> usize {
    tasks
        .iter()
        .map(|t| t.name.chars().count())
        .max()
        .unwrap_or(0)
        + NAME_PADDING
}

/// Host shown in the banner for a config: the URL's host, or the raw URL
/// if it has none.
pub fn host_label(config: &TodoConfig) -> String {
    Url::parse(config.base_url())
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| config.base_url().to_string())
}

/// Banner lines: title with host, then a rule.
pub fn banner_lines(theme: &TodoTheme, host: &str) -> Vec<String> {
    vec![
        String::new(),
        format!(
            "{} [{}]",
            theme.title.apply_to(BANNER_TITLE),
            theme.host.apply_to(host)
        ),
        BANNER_RULE.to_string(),
        String::new(),
    ]
}

/// One task row: `STATUS: name<padding>  id`.
///
/// Padding is applied before styling so escape codes don't skew columns.
pub fn task_line(theme: &TodoTheme, task: &Task, width: usize) -> String {
    format!(
        "{}: {}  {}",
        theme.status.apply_to(task.status_label()),
        theme.name.apply_to(format!("{:<width$}", task.name, width = width)),
        task.id
    )
}

/// Full listing: banner, incomplete tasks, then completed tasks unless
/// `show_completed` is false.
pub fn render_task_list(
    theme: &TodoTheme,
    host: &str,
    tasks: &[Task],
    show_completed: bool,
) -> Vec<String> {
    let mut lines = banner_lines(theme, host);

    if tasks.is_empty() {
        lines.push(format!("{}", theme.dim.apply_to("No tasks.")));
        lines.push(String::new());
        return lines;
    }

    let width = name_column_width(tasks);

    lines.extend(
        tasks
            .iter()
            .filter(|t| !t.complete)
            .map(|t| task_line(theme, t, width)),
    );

    if show_completed && tasks.iter().any(|t| t.complete) {
        lines.push(String::new());
        lines.extend(
            tasks
                .iter()
                .filter(|t| t.complete)
                .map(|t| task_line(theme, t, width)),
        );
    }

    lines.push(String::new());
    lines
}

/// Print a task listing.
pub fn show_task_list(
    ui: &mut dyn UserInterface,
    host: &str,
    tasks: &[Task],
    show_completed: bool,
) {
    for line in render_task_list(ui.theme(), host, tasks, show_completed) {
        ui.message(&line);
    }
}

/// Print the banner on its own.
pub fn show_banner(ui: &mut dyn UserInterface, host: &str) {
    for line in banner_lines(ui.theme(), host) {
        ui.message(&line);
    }
}

/// Echo a server reply byte for byte, warning when the status wasn't 2xx.
pub fn show_echo(ui: &mut dyn UserInterface, echo: &Echo) {
    ui.write_raw(&echo.body);
    if !echo.is_success() {
        ui.warning(&format!("Server responded with HTTP {}", echo.status));
    }
}
