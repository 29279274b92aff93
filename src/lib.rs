//! clockskew library
//!
//! A Rust library for auditing delimited timestamp exports: it pulls an
//! "event" time and a "process" time out of every row of a CSV-like file and
//! reports the rows where the event was recorded after it was processed.
//!
//! This library provides tools for:
//! - Tokenizing delimited lines with doubled-quote escaping
//! - Resolving the two timestamp columns against the header row
//! - Normalizing timestamps written in a fixed, ordered set of formats
//! - Extracting aligned timestamp series with lenient per-row handling
//! - Detecting and reporting event/process time discrepancies

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod discrepancy_detector;
        pub mod session;
        pub mod timestamp_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod discovery;
}

// Re-export commonly used types
pub use app::models::{AnalysisModule, Timestamp, TimestampSeries};
pub use app::services::discrepancy_detector::{Discrepancy, DiscrepancyReport, detect_discrepancies};
pub use app::services::session::AnalysisSession;
pub use app::services::timestamp_parser::{ParseResult, ParseStats, ParserOptions, TimestampParser};
pub use config::Config;

/// Result type alias for clockskew operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for timestamp extraction and analysis
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The input file could not be opened or read
    #[error("Could not open the file '{path}': {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The input contains no lines at all
    #[error("File is empty.")]
    EmptySource { path: String },

    /// One or both timestamp columns are absent from the header
    #[error("Required columns '{event_column}' and '{process_column}' not found. Found columns: {found}")]
    MissingColumns {
        event_column: String,
        process_column: String,
        found: String,
    },

    /// Parsing finished without a single usable row
    #[error("No valid data rows found in the file.")]
    NoValidRows { path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File type the analysis session does not read
    #[error("Unsupported file type '{extension}' for '{path}' (expected one of: csv, tsv, txt)")]
    UnsupportedFile { path: String, extension: String },

    /// Analysis requested before any file was loaded
    #[error("Please load a file first.")]
    NoFileLoaded,

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Report serialization failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl Error {
    /// Create a source unavailable error
    pub fn source_unavailable(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create an empty source error
    pub fn empty_source(path: impl Into<String>) -> Self {
        Self::EmptySource { path: path.into() }
    }

    /// Create a missing columns error listing the header that was actually found
    pub fn missing_columns(
        event_column: impl Into<String>,
        process_column: impl Into<String>,
        found: &[String],
    ) -> Self {
        Self::MissingColumns {
            event_column: event_column.into(),
            process_column: process_column.into(),
            found: found.join(", "),
        }
    }

    /// Create a no valid rows error
    pub fn no_valid_rows(path: impl Into<String>) -> Self {
        Self::NoValidRows { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an unsupported file error
    pub fn unsupported_file(path: impl Into<String>, extension: impl Into<String>) -> Self {
        Self::UnsupportedFile {
            path: path.into(),
            extension: extension.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// True for the failures that mean "this file holds no usable data"
    pub fn is_pipeline_failure(&self) -> bool {
        matches!(
            self,
            Self::SourceUnavailable { .. }
                | Self::EmptySource { .. }
                | Self::MissingColumns { .. }
                | Self::NoValidRows { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: error.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(error: serde_yaml::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid configuration file: {}", error),
        }
    }
}
