//! Declarative logging configuration and its normalization against defaults.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::output::OutputType;

use super::defaults;

/// Desired logging behavior, as written by a caller or a config file.
///
/// Every field may be left unset. Unset fields are filled from a
/// [`Defaults`] value when the configuration is resolved; set fields are
/// honored even when they hold `0` or an empty path.
///
/// `stderr_threshold` is never read from or written to config files. Keys
/// this struct does not know are ignored, so a logging section can sit
/// inside a larger application config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Output medium (default: file only)
    #[serde(default)]
    pub output: OutputType,

    /// Directory log files are written to. Must already exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Global verbosity level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<i32>,

    /// Per-module verbosity overrides, in priority order
    #[serde(default)]
    pub verbosity_modules: Vec<ModuleVerbosity>,

    /// Severity at or above which records are also echoed to stderr
    #[serde(skip)]
    pub stderr_threshold: Option<i32>,
}

/// A verbosity override for modules matching `module`.
///
/// The backend owns pattern matching; `module` is passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleVerbosity {
    /// Module name or pattern
    pub module: String,
    /// Verbosity level for matching modules
    pub verbosity: i32,
}

impl ModuleVerbosity {
    /// Creates a new module override.
    #[must_use]
    pub fn new(module: impl Into<String>, verbosity: i32) -> Self {
        Self {
            module: module.into(),
            verbosity,
        }
    }
}

/// Renders as `module=verbosity`, the backend's per-entry pattern form.
impl fmt::Display for ModuleVerbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.module, self.verbosity)
    }
}

impl Config {
    /// Creates an empty configuration: file output, everything else unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output medium.
    #[must_use]
    pub fn with_output(mut self, output: OutputType) -> Self {
        self.output = output;
        self
    }

    /// Sets the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Sets the global verbosity level.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: i32) -> Self {
        self.verbosity = Some(verbosity);
        self
    }

    /// Appends a per-module verbosity override.
    #[must_use]
    pub fn with_module(mut self, module: impl Into<String>, verbosity: i32) -> Self {
        self.verbosity_modules
            .push(ModuleVerbosity::new(module, verbosity));
        self
    }

    /// Sets the stderr threshold.
    #[must_use]
    pub fn with_stderr_threshold(mut self, threshold: i32) -> Self {
        self.stderr_threshold = Some(threshold);
        self
    }

    /// Fills unset fields from `defaults`, leaving `self` untouched.
    ///
    /// `verbosity_modules` is never defaulted: an empty list is an explicit
    /// request for no overrides. `output` has no unset state and is copied.
    #[must_use]
    pub fn resolve(&self, defaults: &Defaults) -> ResolvedConfig {
        ResolvedConfig {
            output: self.output,
            output_dir: self
                .output_dir
                .clone()
                .unwrap_or_else(|| defaults.output_dir.clone()),
            verbosity: self.verbosity.unwrap_or(defaults.verbosity),
            verbosity_modules: self.verbosity_modules.clone(),
            stderr_threshold: self.stderr_threshold.unwrap_or(defaults.stderr_threshold),
        }
    }
}

/// Baseline values that unset [`Config`] fields resolve to.
///
/// Created once at process start (usually through [`init`](super::init))
/// and passed by reference to every [`apply`](super::apply) call. Changing a
/// field changes what later calls resolve to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    /// Output medium used when the defaults themselves are applied
    pub output: OutputType,
    /// Fallback output directory
    pub output_dir: PathBuf,
    /// Fallback global verbosity
    pub verbosity: i32,
    /// Fallback stderr threshold
    pub stderr_threshold: i32,
}

impl Defaults {
    /// Returns the built-in defaults: stderr output to the temporary
    /// directory, verbosity 9000, stderr threshold 3.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            output: defaults::OUTPUT,
            output_dir: defaults::output_dir(),
            verbosity: defaults::VERBOSITY,
            stderr_threshold: defaults::STDERR_THRESHOLD,
        }
    }

    /// Returns a configuration with every field set to these defaults.
    #[must_use]
    pub fn to_config(&self) -> Config {
        Config {
            output: self.output,
            output_dir: Some(self.output_dir.clone()),
            verbosity: Some(self.verbosity),
            verbosity_modules: Vec::new(),
            stderr_threshold: Some(self.stderr_threshold),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A [`Config`] with every field resolved, ready to push into a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Output medium
    pub output: OutputType,
    /// Output directory
    pub output_dir: PathBuf,
    /// Global verbosity level
    pub verbosity: i32,
    /// Per-module verbosity overrides
    pub verbosity_modules: Vec<ModuleVerbosity>,
    /// Stderr threshold
    pub stderr_threshold: i32,
}

impl ResolvedConfig {
    /// Renders the module overrides as the backend's `module=N,module=N` list.
    #[must_use]
    pub fn vmodule_pattern(&self) -> String {
        self.verbosity_modules
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LogConfig {{ output: {}, output_dir: {}, verbosity: {}, vmodule: [{}], stderr_threshold: {} }}",
            self.output,
            self.output_dir.display(),
            self.verbosity,
            self.vmodule_pattern(),
            self.stderr_threshold,
        )
    }
}
