//! Configuration file parsing.
//!
//! A [`Config`] can be written as TOML or JSON; the format is picked from the
//! file extension.

use std::path::Path;

use super::ConfigError;
use super::model::Config;

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl FileFormat {
    /// Picks the format from the extension of `path`, ignoring case.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("toml") {
            Some(Self::Toml)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

impl Config {
    /// Loads configuration from a TOML or JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is not `.toml` or `.json`, or if the
    /// file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = FileFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        match format {
            FileFormat::Toml => Self::parse_toml(&content),
            FileFormat::Json => Self::parse_json(&content),
        }
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    /// Parses configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn parse_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Logging configuration
#
# Every setting is optional. Unset values fall back to the built-in defaults.

# Output medium: "file", "stderr", or "both" (case-insensitive).
# Unrecognized values are ignored and leave file-only output in place.
output = "stderr"

# Directory for log files. Must already exist; it is not created.
# Default: the system temporary directory.
# output_dir = "/var/log/myapp"

# Global verbosity. Higher values admit more detailed log statements.
# Default: 9000
# verbosity = 2

# Per-module verbosity overrides, passed to the backend as "module=N".
# [[verbosity_modules]]
# module = "net"
# verbosity = 2
#
# [[verbosity_modules]]
# module = "auth*"
# verbosity = 5
"#
    .to_string()
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, default_config_template()).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
