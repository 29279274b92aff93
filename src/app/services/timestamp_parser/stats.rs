//! Parsing statistics and result structures for timestamp extraction
//!
//! Statistics describe what the row extractor skipped and why. They are
//! diagnostic only and never change whether a parse succeeds.

use crate::app::models::TimestampSeries;
use crate::constants::PARSE_SUCCESS_THRESHOLD;

/// Parsing result with the extracted series and statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Index-aligned event and process times
    pub series: TimestampSeries,

    /// Row-level parsing statistics
    pub stats: ParseStats,
}

/// Row-level parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of data lines after the header, blank lines included
    pub total_lines: usize,

    /// Rows whose two timestamps were both accepted
    pub rows_parsed: usize,

    /// Lines containing only whitespace
    pub blank_lines_skipped: usize,

    /// Rows without enough fields to reach both timestamp columns
    pub short_rows_skipped: usize,

    /// Rows where at least one timestamp matched no known format
    pub invalid_timestamp_rows_skipped: usize,

    /// Diagnostic messages for skipped rows
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            rows_parsed: 0,
            blank_lines_skipped: 0,
            short_rows_skipped: 0,
            invalid_timestamp_rows_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Non-blank rows that were dropped
    pub fn records_skipped(&self) -> usize {
        self.short_rows_skipped + self.invalid_timestamp_rows_skipped
    }

    /// Accepted rows as a percentage of non-blank data rows
    pub fn success_rate(&self) -> f64 {
        let candidates = self.rows_parsed + self.records_skipped();
        if candidates == 0 {
            0.0
        } else {
            (self.rows_parsed as f64 / candidates as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful
    pub fn is_successful(&self) -> bool {
        self.success_rate() > PARSE_SUCCESS_THRESHOLD
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
