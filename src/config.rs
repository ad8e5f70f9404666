//! Configuration for value parsing
//!
//! Defaults match plain SVG input. A configuration can also be loaded from
//! TOML, e.g.
//!
//! ```toml
//! position_delimiter = ";"
//! decimal_comma = false
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("position delimiter must not be empty")]
    EmptyDelimiter,
}

/// Configuration options for typed value parsing
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Separator between the two coordinates of a point value
    pub position_delimiter: String,

    /// Accept `,` as a decimal separator in lengths and numbers
    pub decimal_comma: bool,

    /// Log when a lenient enumeration falls back to its default
    pub log_fallbacks: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            position_delimiter: ",".to_string(),
            decimal_comma: true,
            log_fallbacks: true,
        }
    }
}

impl ParserConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: ParserConfig = toml::from_str(content)?;
        if config.position_delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        Ok(config)
    }

    /// Set the separator used by point values
    pub fn with_position_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.position_delimiter = delimiter.into();
        self
    }

    /// Enable or disable comma decimal separators
    pub fn with_decimal_comma(mut self, enabled: bool) -> Self {
        self.decimal_comma = enabled;
        self
    }

    /// Enable or disable logging of lenient enumeration fallbacks
    pub fn with_log_fallbacks(mut self, enabled: bool) -> Self {
        self.log_fallbacks = enabled;
        self
    }
}
