//! logcfg: declarative configuration for a leveled logging backend.
//!
//! A library for describing where log records go (files, standard error,
//! or both), how verbose logging is globally and per module, and for
//! applying that description to the backend once at startup.

pub mod backend;
pub mod config;
pub mod output;

pub use backend::{BackendState, LogBackend};
pub use config::{Config, Defaults, ModuleVerbosity, apply, init};
pub use output::OutputType;
