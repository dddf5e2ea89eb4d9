//! Built-in default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.
//! These seed [`Defaults::builtin`](super::Defaults::builtin); normalization
//! reads the `Defaults` value it is handed, never these constants directly.

use std::path::PathBuf;

use crate::output::OutputType;

/// Default global verbosity. High enough that verbose logging is effectively off.
pub const VERBOSITY: i32 = 9000;

/// Default stderr threshold (`FATAL`).
pub const STDERR_THRESHOLD: i32 = 3;

/// Default output medium.
pub const OUTPUT: OutputType = OutputType::StdErr;

/// Default directory for log files: the platform's temporary directory.
#[must_use]
pub fn output_dir() -> PathBuf {
    std::env::temp_dir()
}
