//! Pushing a resolved configuration into the logging backend.

use crate::backend::{BackendError, LogBackend};
use crate::output::OutputType;

use super::model::{Config, Defaults, ResolvedConfig};

/// Applies `config` to `backend`, filling unset fields from `defaults`.
///
/// Every backend setting is written, in a fixed order: stderr-only flag,
/// also-to-stderr flag, stderr threshold, verbosity, per-module verbosity,
/// log directories. The directory list is replaced by the single resolved
/// directory.
///
/// Nothing is validated here. A value the backend rejects is logged and the
/// remaining settings are still written; a missing output directory only
/// surfaces when the backend first writes a file.
///
/// Call during initialization, before any logging happens. Not safe to run
/// concurrently with itself or with code reading the backend.
pub fn apply<B: LogBackend + ?Sized>(config: &Config, defaults: &Defaults, backend: &mut B) {
    let resolved = config.resolve(defaults);
    tracing::debug!("Applying {resolved}");
    write_resolved(&resolved, backend);
}

/// Establishes the built-in defaults on `backend` and returns them.
///
/// Calling this more than once is harmless: each call re-applies the same
/// values. Keep the returned [`Defaults`] and pass it to later [`apply`]
/// calls.
pub fn init<B: LogBackend + ?Sized>(backend: &mut B) -> Defaults {
    let defaults = Defaults::builtin();
    apply(&defaults.to_config(), &defaults, backend);
    defaults
}

fn write_resolved<B: LogBackend + ?Sized>(config: &ResolvedConfig, backend: &mut B) {
    backend.set_to_stderr(config.output == OutputType::StdErr);
    backend.set_also_to_stderr(config.output == OutputType::Both);

    report(backend.set_stderr_threshold(&config.stderr_threshold.to_string()));
    report(backend.set_verbosity(&config.verbosity.to_string()));
    report(backend.set_vmodule(&config.vmodule_pattern()));

    backend.set_log_dirs(vec![config.output_dir.clone()]);
}

fn report(result: Result<(), BackendError>) {
    if let Err(e) = result {
        tracing::warn!("Logging backend rejected a setting: {e}");
    }
}
