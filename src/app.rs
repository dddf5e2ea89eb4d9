//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, error hints and state
//! rendering that support the main entry point.

use logcfg::BackendState;
use logcfg::backend::Severity;
use logcfg::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - unreadable or malformed config file.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'logcfg init' to generate a configuration template.");
        }
        ConfigError::UnsupportedFormat { .. } => {
            eprintln!("\nRename the file to end in .toml or .json.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Warns when file output is enabled but the log directory does not exist.
///
/// Applying a configuration never checks this; the backend would only fail
/// on its first write.
pub fn warn_missing_output_dir(state: &BackendState) {
    if !state.writes_to_file() {
        return;
    }

    if let Some(dir) = state.log_dir() {
        if !dir.is_dir() {
            tracing::warn!("Log directory '{}' does not exist", dir.display());
        }
    }
}

/// Returns the severities whose records reach standard error.
pub fn stderr_severities(state: &BackendState) -> Vec<Severity> {
    Severity::ALL
        .into_iter()
        .filter(|&severity| state.writes_to_stderr(severity))
        .collect()
}

/// Renders the backend state as pretty-printed JSON.
///
/// Alongside the raw state, lists which severities end up on standard error
/// and whether log files are written at all.
pub fn render_state(state: &BackendState) -> Result<String, serde_json::Error> {
    let report = serde_json::json!({
        "state": state,
        "writes_to_file": state.writes_to_file(),
        "stderr_severities": stderr_severities(state),
    });
    serde_json::to_string_pretty(&report)
}
