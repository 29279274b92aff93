//! Core timestamp file parser
//!
//! This module handles file reading, line splitting and the row loop that
//! turns a delimited export into a [`TimestampSeries`].

use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use super::column_mapping::ColumnMapping;
use super::record_parser::{RowOutcome, parse_timestamp_record};
use super::stats::{ParseResult, ParseStats};
use super::tokenizer::tokenize_line;
use crate::app::models::TimestampSeries;
use crate::config::Config;
use crate::constants::{DEFAULT_DELIMITER, DEFAULT_EVENT_COLUMN, DEFAULT_PROCESS_COLUMN, UTF8_BOM};
use crate::{Error, Result};

/// Which columns to read and how fields are separated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    pub event_column: String,
    pub process_column: String,
    pub delimiter: char,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            event_column: DEFAULT_EVENT_COLUMN.to_string(),
            process_column: DEFAULT_PROCESS_COLUMN.to_string(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl ParserOptions {
    /// Options for the given column names with the default delimiter
    pub fn new(event_column: impl Into<String>, process_column: impl Into<String>) -> Self {
        Self {
            event_column: event_column.into(),
            process_column: process_column.into(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Options taken from the effective configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            event_column: config.columns.event_column.clone(),
            process_column: config.columns.process_column.clone(),
            delimiter: config.parsing.delimiter,
        }
    }
}

/// Parser extracting event/process timestamp pairs from delimited text
///
/// Each parser owns only its options; parsing state lives on the stack of a
/// single call, so one parser can serve any number of files.
#[derive(Debug, Clone, Default)]
pub struct TimestampParser {
    options: ParserOptions,
}

impl TimestampParser {
    /// Create a new parser
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Parse a file from disk
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing timestamp file: {}", file_path.display());

        let source_name = file_path.display().to_string();
        let bytes = std::fs::read(file_path)
            .map_err(|e| Error::source_unavailable(source_name.clone(), e))?;

        let content = String::from_utf8_lossy(&bytes);
        let result = self.parse_content(&content, &source_name)?;

        info!(
            "Parsed {} rows from {} data lines ({} skipped)",
            result.stats.rows_parsed,
            result.stats.total_lines,
            result.stats.records_skipped()
        );

        Ok(result)
    }

    /// Parse everything a reader yields
    pub fn parse_reader<R: Read>(&self, mut reader: R, source_name: &str) -> Result<ParseResult> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| Error::source_unavailable(source_name, e))?;

        self.parse_content(&String::from_utf8_lossy(&bytes), source_name)
    }

    /// Parse in-memory text
    pub fn parse_str(&self, content: &str) -> Result<ParseResult> {
        self.parse_content(content, "<input>")
    }

    fn parse_content(&self, content: &str, source_name: &str) -> Result<ParseResult> {
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
        let mut lines = split_lines(content);

        let header_line = lines
            .next()
            .ok_or_else(|| Error::empty_source(source_name))?;

        let headers = tokenize_line(header_line, self.options.delimiter);
        let mapping = ColumnMapping::analyze(&headers);
        let columns = mapping.resolve(&self.options.event_column, &self.options.process_column)?;
        debug!(
            "Resolved columns: {}={}, {}={} ({} header fields)",
            self.options.event_column,
            columns.event_index,
            self.options.process_column,
            columns.process_index,
            headers.len()
        );

        let mut series = TimestampSeries::new();
        let mut stats = ParseStats::new();

        // Header is line 1
        for (line_number, line) in (2usize..).zip(lines) {
            stats.total_lines += 1;

            match parse_timestamp_record(line, self.options.delimiter, &columns) {
                RowOutcome::Parsed {
                    event_time,
                    process_time,
                } => {
                    series.push(event_time, process_time);
                    stats.rows_parsed += 1;
                }
                RowOutcome::Blank => {
                    stats.blank_lines_skipped += 1;
                }
                RowOutcome::TooShort {
                    field_count,
                    required,
                } => {
                    stats.short_rows_skipped += 1;
                    let message = format!(
                        "Line {}: insufficient fields ({} found, {} required)",
                        line_number, field_count, required
                    );
                    debug!("{}", message);
                    stats.errors.push(message);
                }
                RowOutcome::InvalidTimestamp {
                    event_value,
                    process_value,
                } => {
                    stats.invalid_timestamp_rows_skipped += 1;
                    if let Some(value) = event_value {
                        let message =
                            format!("Line {}: invalid event time '{}'", line_number, value);
                        debug!("{}", message);
                        stats.errors.push(message);
                    }
                    if let Some(value) = process_value {
                        let message =
                            format!("Line {}: invalid process time '{}'", line_number, value);
                        debug!("{}", message);
                        stats.errors.push(message);
                    }
                }
            }
        }

        if series.is_empty() {
            return Err(Error::no_valid_rows(source_name));
        }

        Ok(ParseResult { series, stats })
    }
}

/// Split text into lines on LF, CRLF or a lone CR
///
/// A terminator at the very end does not produce a trailing empty line.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;

    std::iter::from_fn(move || {
        let current: &str = rest;
        if current.is_empty() {
            return None;
        }

        match current.find(['\r', '\n']) {
            Some(pos) => {
                let terminator = if current[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &current[pos + terminator..];
                Some(&current[..pos])
            }
            None => {
                rest = "";
                Some(current)
            }
        }
    })
}
