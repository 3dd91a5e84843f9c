//! todo CLI entry point.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use todo::cli::{report_error, valid_commands, Cli, CommandDispatcher};
use todo::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so stdout only carries command output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("todo=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("todo=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Report an argument error. Unknown subcommands also list the valid ones.
fn usage_error(err: clap::Error) -> ExitCode {
    if err.kind() != ErrorKind::InvalidSubcommand {
        err.exit();
    }
    let _ = err.print();
    eprintln!("\nValid commands: {}", valid_commands().join(", "));
    ExitCode::from(2)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_error(err),
    };
    init_tracing(cli.debug);

    tracing::debug!("todo starting with args: {:?}", cli);

    let mut ui = create_ui(cli.no_color);

    let result = CommandDispatcher::from_cli(&cli)
        .and_then(|dispatcher| dispatcher.dispatch(&cli, ui.as_mut()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(report_error(ui.as_mut(), &e)),
    }
}
