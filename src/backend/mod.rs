//! The narrow surface of the logging backend that configuration writes into.
//!
//! This module provides:
//! - The backend seam ([`LogBackend`])
//! - An in-memory backend with flag-style setters ([`BackendState`])
//! - Severity names accepted by the threshold setter ([`Severity`])
//!
//! Formatting, buffering, rotation and per-module pattern matching live in
//! the backend proper and are out of reach of this surface.

mod state;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use state::{BackendState, ModulePattern, Severity};

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the textual setters of a [`LogBackend`].
///
/// A rejected value never partially applies; the previous value stays.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The stderr threshold is neither a severity name nor an integer.
    #[error("Invalid stderr threshold '{value}': expected a severity name or an integer")]
    InvalidThreshold {
        /// The rejected input
        value: String,
    },

    /// The verbosity level is not an integer.
    #[error("Invalid verbosity '{value}': expected an integer")]
    InvalidVerbosity {
        /// The rejected input
        value: String,
    },

    /// The per-module verbosity list is malformed.
    #[error("Invalid vmodule '{value}': {reason}")]
    InvalidVmodule {
        /// The rejected input
        value: String,
        /// What is wrong with it
        reason: &'static str,
    },
}

/// Mutable runtime state of a leveled logging backend.
///
/// The textual setters mirror command-line flag handling: values arrive as
/// strings and the backend parses them. Implementations are not expected to
/// synchronize; configuration is applied once, before logging starts.
pub trait LogBackend {
    /// Sets whether records go to standard error instead of files.
    fn set_to_stderr(&mut self, enabled: bool);

    /// Sets whether records go to standard error in addition to files.
    fn set_also_to_stderr(&mut self, enabled: bool);

    /// Sets the severity at or above which records are echoed to standard error.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be parsed.
    fn set_stderr_threshold(&mut self, value: &str) -> Result<(), BackendError>;

    /// Sets the global verbosity level.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be parsed.
    fn set_verbosity(&mut self, value: &str) -> Result<(), BackendError>;

    /// Sets the per-module verbosity list (`pattern=N,pattern=N`).
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be parsed.
    fn set_vmodule(&mut self, value: &str) -> Result<(), BackendError>;

    /// Replaces the candidate directories for log files.
    fn set_log_dirs(&mut self, dirs: Vec<PathBuf>);
}
