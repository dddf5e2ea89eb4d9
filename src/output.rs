//! Output medium selection and its text encoding.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Where log records are written.
///
/// `File` is the zero value: a configuration that never mentions an output
/// medium writes to files only.
///
/// # Text Form
///
/// Encodes as `"File"`, `"StdErr"` or `"Both"`. Decoding is case-insensitive
/// and lenient: see [`OutputType::unmarshal_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u16)]
pub enum OutputType {
    /// Write log records to a file only.
    #[default]
    File = 0,
    /// Write log records to standard error only.
    StdErr = 1,
    /// Write log records to a file and to standard error.
    Both = 2,
}

/// Text form of a discriminant outside the defined variants.
pub const UNKNOWN_NAME: &str = "Unknown";

impl OutputType {
    /// All defined variants, in discriminant order.
    pub const ALL: [Self; 3] = [Self::File, Self::StdErr, Self::Both];

    /// Returns the canonical text form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "File",
            Self::StdErr => "StdErr",
            Self::Both => "Both",
        }
    }

    /// Converts a raw discriminant into a variant, if it names one.
    #[must_use]
    pub const fn from_raw(raw: u16) -> Option<Self> {
        match raw {
            0 => Some(Self::File),
            1 => Some(Self::StdErr),
            2 => Some(Self::Both),
            _ => None,
        }
    }

    /// Returns the text form of a raw discriminant.
    ///
    /// Any value outside the defined variants renders as `"Unknown"`.
    #[must_use]
    pub const fn name_of_raw(raw: u16) -> &'static str {
        match Self::from_raw(raw) {
            Some(output) => output.as_str(),
            None => UNKNOWN_NAME,
        }
    }

    /// Encodes the text form as UTF-8 bytes. Never fails.
    #[must_use]
    pub fn marshal_text(self) -> Vec<u8> {
        self.as_str().as_bytes().to_vec()
    }

    /// Decodes `text` into `self`.
    ///
    /// Matching is case-insensitive against `file`, `stderr` and `both`.
    /// Unrecognized input, including bytes that are not valid UTF-8, leaves
    /// `self` untouched. There is no failure case; compare against the
    /// previous value to learn whether the input was recognized.
    pub fn unmarshal_text(&mut self, text: &[u8]) {
        let Ok(text) = std::str::from_utf8(text) else {
            return;
        };

        if let Some(output) = match_token(text) {
            *self = output;
        }
    }
}

fn match_token(text: &str) -> Option<OutputType> {
    match text.to_lowercase().as_str() {
        "file" => Some(OutputType::File),
        "stderr" => Some(OutputType::StdErr),
        "both" => Some(OutputType::Both),
        _ => None,
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by the strict [`FromStr`] parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid output type '{value}': expected file, stderr, or both")]
pub struct ParseOutputTypeError {
    /// The rejected input
    pub value: String,
}

impl FromStr for OutputType {
    type Err = ParseOutputTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_token(s).ok_or_else(|| ParseOutputTypeError {
            value: s.to_string(),
        })
    }
}

impl Serialize for OutputType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OutputType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(OutputTypeVisitor)
    }
}

/// Decodes through [`OutputType::unmarshal_text`], starting from the zero value.
struct OutputTypeVisitor;

impl Visitor<'_> for OutputTypeVisitor {
    type Value = OutputType;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an output type string (file, stderr, or both)")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        self.visit_bytes(v.as_bytes())
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        let mut output = OutputType::default();
        output.unmarshal_text(v);
        Ok(output)
    }
}
