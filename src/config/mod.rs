//! Configuration layer for the logging backend.
//!
//! This module provides:
//! - The declarative configuration ([`Config`], [`ModuleVerbosity`])
//! - Baseline values for unset fields ([`Defaults`], [`defaults`])
//! - Applying a configuration to a backend ([`apply`], [`init`])
//! - TOML / JSON configuration files ([`Config::load`], [`default_config_template`])
//! - CLI argument parsing ([`Cli`], [`Command`])
//!
//! # Lifecycle
//!
//! At process start, [`init`] applies the built-in defaults so the backend is
//! never left unconfigured, and returns them as a [`Defaults`] value. The
//! application may then call [`apply`] once more with its own [`Config`],
//! passing those defaults along. Both steps belong to single-threaded
//! startup; neither may overlap with logging.
//!
//! # Unset Fields
//!
//! `output_dir`, `verbosity` and `stderr_threshold` are optional. An unset
//! field resolves to the matching [`Defaults`] field at the time of the
//! call. A set field is used as-is, including `0` and an empty directory.
//! `verbosity_modules` is never defaulted.
//!
//! # Priority
//!
//! For the CLI, values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **Config file** (TOML or JSON)
//! 3. **Defaults**
//!
//! `--vmodule` entries **replace** the file's `verbosity_modules` entirely.

mod apply;
mod cli;
pub mod defaults;
mod error;
mod file;
mod model;

#[cfg(test)]
mod apply_tests;
#[cfg(test)]
mod cli_tests;

pub use apply::{apply, init};
pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use file::{FileFormat, default_config_template, write_default_config};
pub use model::{Config, Defaults, ModuleVerbosity, ResolvedConfig};
