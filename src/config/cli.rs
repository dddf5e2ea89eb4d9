//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use crate::output::OutputType;

use super::ConfigError;
use super::model::{Config, ModuleVerbosity};

/// logcfg: logging configuration checker
///
/// Loads a logging configuration, applies it on top of the built-in
/// defaults and prints the resulting backend state.
#[derive(Debug, Parser)]
#[command(name = "logcfg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file (.toml or .json)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Output medium: file, stderr, or both (case-insensitive)
    #[arg(long, value_parser = OutputType::from_str)]
    pub output: Option<OutputType>,

    /// Directory for log files (must exist)
    #[arg(long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Global verbosity level
    #[arg(long)]
    pub verbosity: Option<i32>,

    /// Per-module verbosity in 'module=N' format (can be specified multiple times)
    #[arg(long = "vmodule", value_name = "MODULE=N", value_parser = parse_module_verbosity)]
    pub vmodule: Vec<ModuleVerbosity>,

    /// Severity at or above which records are also written to stderr
    #[arg(long = "stderr-threshold")]
    pub stderr_threshold: Option<i32>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for logcfg
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "logcfg.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Builds the configuration: the config file if given, then CLI overrides.
    ///
    /// Explicit CLI values win over the file. `--vmodule` entries replace the
    /// file's `verbosity_modules` entirely rather than merging with them.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let base = match self.config {
            Some(ref path) => Config::load(path)?,
            None => Config::new(),
        };

        Ok(self.apply_overrides(base))
    }

    /// Layers explicit CLI values over `config`.
    #[must_use]
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(ref dir) = self.output_dir {
            config.output_dir = Some(dir.clone());
        }
        if let Some(verbosity) = self.verbosity {
            config.verbosity = Some(verbosity);
        }
        if !self.vmodule.is_empty() {
            config.verbosity_modules.clone_from(&self.vmodule);
        }
        if let Some(threshold) = self.stderr_threshold {
            config.stderr_threshold = Some(threshold);
        }
        config
    }
}

/// Parses a `module=N` argument.
fn parse_module_verbosity(s: &str) -> Result<ModuleVerbosity, String> {
    let (module, level) = s
        .split_once('=')
        .ok_or_else(|| format!("expected 'module=N', got '{s}'"))?;

    let module = module.trim();
    if module.is_empty() {
        return Err(format!("missing module name in '{s}'"));
    }

    let verbosity = level
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid verbosity in '{s}': {e}"))?;

    Ok(ModuleVerbosity::new(module, verbosity))
}
