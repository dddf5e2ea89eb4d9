//! logcfg: logging configuration checker
//!
//! Entry point for the logcfg application.

use logcfg::BackendState;
use logcfg::config::{Cli, Command, apply, init, write_default_config};
use std::process::ExitCode;

mod app;

use app::{exit_code, print_config_hint, render_state, setup_tracing, warn_missing_output_dir};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    setup_tracing(cli.verbose);

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    // Defaults first, so the backend is configured even if the user config is sparse
    let mut backend = BackendState::new();
    let defaults = init(&mut backend);
    apply(&config, &defaults, &mut backend);

    warn_missing_output_dir(&backend);

    match render_state(&backend) {
        Ok(rendered) => {
            println!("{rendered}");
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}
