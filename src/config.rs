//! Configuration management and validation.
//!
//! Configuration is layered: built-in defaults, then an optional YAML file,
//! then environment variables. Command-line flags are applied last by the CLI.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DELIMITER, DEFAULT_EVENT_COLUMN,
    DEFAULT_PROCESS_COLUMN, ENV_DELIMITER, ENV_EVENT_COLUMN, ENV_PROCESS_COLUMN, QUOTE_CHAR,
};
use crate::{Error, Result};

/// Which header columns hold the two timestamps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    /// Column holding the client-reported event time
    pub event_column: String,

    /// Column holding the server-side processing time
    pub process_column: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            event_column: DEFAULT_EVENT_COLUMN.to_string(),
            process_column: DEFAULT_PROCESS_COLUMN.to_string(),
        }
    }
}

/// Input parsing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Single-character field delimiter
    pub delimiter: char,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// How reports are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain report text with headings
    #[default]
    Human,
    /// One JSON document per analyzed file
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when RUST_LOG is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Global configuration for clockskew
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub columns: ColumnConfig,
    pub parsing: ParsingConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Platform default location of the configuration file
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::configuration("Could not determine user configuration directory")
        })?;

        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Read a YAML configuration file; missing sections keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        debug!("Loaded config file {}", path.display());
        Ok(config)
    }

    /// Defaults, then the config file if given, then environment overrides
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from an environment lookup function
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_EVENT_COLUMN) {
            debug!("{} overrides event column: {}", ENV_EVENT_COLUMN, value);
            self.columns.event_column = value;
        }

        if let Some(value) = lookup(ENV_PROCESS_COLUMN) {
            debug!("{} overrides process column: {}", ENV_PROCESS_COLUMN, value);
            self.columns.process_column = value;
        }

        if let Some(value) = lookup(ENV_DELIMITER) {
            self.parsing.delimiter = parse_delimiter(&value)?;
        }

        Ok(())
    }

    /// Check the configuration for values the parser cannot work with
    pub fn validate(&self) -> Result<()> {
        let event = self.columns.event_column.trim();
        let process = self.columns.process_column.trim();

        if event.is_empty() || process.is_empty() {
            return Err(Error::configuration(
                "Event and process column names must not be empty",
            ));
        }

        if event.to_lowercase() == process.to_lowercase() {
            return Err(Error::configuration(format!(
                "Event and process columns must differ (both are '{}')",
                event
            )));
        }

        let delimiter = self.parsing.delimiter;
        if delimiter == QUOTE_CHAR || delimiter == '\n' || delimiter == '\r' {
            return Err(Error::configuration(format!(
                "Delimiter {:?} cannot be used as a field separator",
                delimiter
            )));
        }

        Ok(())
    }
}

/// Parse a delimiter given as one character, `\t`, or `tab`
pub fn parse_delimiter(value: &str) -> Result<char> {
    match value {
        "\\t" | "tab" | "TAB" => return Ok('\t'),
        _ => {}
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::configuration(format!(
            "Delimiter must be a single character, got '{}'",
            value
        ))),
    }
}
