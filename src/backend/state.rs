//! In-memory backend state with flag-style setters.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{BackendError, LogBackend};

/// Record severities, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    /// Informational.
    Info = 0,
    /// Something unexpected, but recoverable.
    Warning = 1,
    /// An operation failed.
    Error = 2,
    /// The process cannot continue.
    Fatal = 3,
}

impl Severity {
    /// All severities, in ascending order.
    pub const ALL: [Self; 4] = [Self::Info, Self::Warning, Self::Error, Self::Fatal];

    /// Returns the upper-case name used in flags and log prefixes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Looks a severity up by name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One parsed `pattern=N` entry of the per-module verbosity list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModulePattern {
    /// Module name or glob, kept as written
    pub pattern: String,
    /// Verbosity level for matching modules
    pub level: i32,
}

/// Runtime state of the logging backend.
///
/// Starts from the usual leveled-logger flag defaults: file output, an
/// `ERROR` stderr threshold, verbosity 0, no module overrides and no log
/// directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendState {
    to_stderr: bool,
    also_to_stderr: bool,
    stderr_threshold: i32,
    verbosity: i32,
    vmodule: Vec<ModulePattern>,
    log_dirs: Vec<PathBuf>,
}

impl Default for BackendState {
    fn default() -> Self {
        Self {
            to_stderr: false,
            also_to_stderr: false,
            stderr_threshold: Severity::Error as i32,
            verbosity: 0,
            vmodule: Vec::new(),
            log_dirs: Vec::new(),
        }
    }
}

impl BackendState {
    /// Creates a backend in its initial, unconfigured state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if records go to standard error only.
    #[must_use]
    pub const fn to_stderr(&self) -> bool {
        self.to_stderr
    }

    /// Returns true if records go to standard error as well as files.
    #[must_use]
    pub const fn also_to_stderr(&self) -> bool {
        self.also_to_stderr
    }

    /// Returns the severity at or above which records are echoed to stderr.
    #[must_use]
    pub const fn stderr_threshold(&self) -> i32 {
        self.stderr_threshold
    }

    /// Returns the global verbosity level.
    #[must_use]
    pub const fn verbosity(&self) -> i32 {
        self.verbosity
    }

    /// Returns the per-module verbosity overrides, in the order given.
    #[must_use]
    pub fn vmodule(&self) -> &[ModulePattern] {
        &self.vmodule
    }

    /// Returns the candidate directories for log files.
    #[must_use]
    pub fn log_dirs(&self) -> &[PathBuf] {
        &self.log_dirs
    }

    /// Returns the directory log files are created in, if any is configured.
    #[must_use]
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dirs.first().map(PathBuf::as_path)
    }

    /// Returns true if a record of `severity` is written to standard error.
    #[must_use]
    pub fn writes_to_stderr(&self, severity: Severity) -> bool {
        self.to_stderr || self.also_to_stderr || severity as i32 >= self.stderr_threshold
    }

    /// Returns true if records are written to log files.
    #[must_use]
    pub const fn writes_to_file(&self) -> bool {
        !self.to_stderr
    }
}

impl LogBackend for BackendState {
    fn set_to_stderr(&mut self, enabled: bool) {
        self.to_stderr = enabled;
    }

    fn set_also_to_stderr(&mut self, enabled: bool) {
        self.also_to_stderr = enabled;
    }

    fn set_stderr_threshold(&mut self, value: &str) -> Result<(), BackendError> {
        self.stderr_threshold = parse_threshold(value)?;
        Ok(())
    }

    fn set_verbosity(&mut self, value: &str) -> Result<(), BackendError> {
        self.verbosity = value
            .parse()
            .map_err(|_| BackendError::InvalidVerbosity {
                value: value.to_string(),
            })?;
        Ok(())
    }

    fn set_vmodule(&mut self, value: &str) -> Result<(), BackendError> {
        self.vmodule = parse_vmodule(value)?;
        Ok(())
    }

    fn set_log_dirs(&mut self, dirs: Vec<PathBuf>) {
        self.log_dirs = dirs;
    }
}

fn parse_threshold(value: &str) -> Result<i32, BackendError> {
    if let Some(severity) = Severity::from_name(value) {
        return Ok(severity as i32);
    }

    value
        .parse()
        .map_err(|_| BackendError::InvalidThreshold {
            value: value.to_string(),
        })
}

/// Parses a `pattern=N,pattern=N` list.
///
/// Empty items (a trailing comma) are skipped and level-0 entries are
/// dropped, since 0 is what an unmatched module gets anyway.
fn parse_vmodule(value: &str) -> Result<Vec<ModulePattern>, BackendError> {
    let syntax_error = |reason| BackendError::InvalidVmodule {
        value: value.to_string(),
        reason,
    };

    let mut patterns = Vec::new();
    for item in value.split(',').filter(|item| !item.is_empty()) {
        let Some((pattern, level)) = item.split_once('=') else {
            return Err(syntax_error("expected comma-separated list of pattern=N"));
        };
        if pattern.is_empty() || level.is_empty() || level.contains('=') {
            return Err(syntax_error("expected comma-separated list of pattern=N"));
        }

        let level: i32 = level
            .parse()
            .map_err(|_| syntax_error("level must be an integer"))?;
        if level < 0 {
            return Err(syntax_error("level must not be negative"));
        }
        if level == 0 {
            continue;
        }

        patterns.push(ModulePattern {
            pattern: pattern.to_string(),
            level,
        });
    }

    Ok(patterns)
}
