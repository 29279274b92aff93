//! Timestamp parser for delimited event/process time exports
//!
//! This module turns a CSV-like file into two index-aligned timestamp
//! sequences. Malformed rows are skipped rather than failing the file; only a
//! missing file, an empty file, missing columns, or a file without a single
//! usable row is an error.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`tokenizer`] - Quote-aware splitting of one line into fields
//! - [`column_mapping`] - Header analysis and timestamp column resolution
//! - [`datetime`] - Ordered multi-format timestamp normalization
//! - [`record_parser`] - Individual data row processing
//! - [`parser`] - File reading and row loop orchestration
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use clockskew::app::services::timestamp_parser::{ParserOptions, TimestampParser};
//!
//! # fn example() -> clockskew::Result<()> {
//! let parser = TimestampParser::new(ParserOptions::default());
//! let result = parser.parse_str(
//!     "event_time,process_time\n2024-01-01 10:00:00,2024-01-01 09:59:00\n",
//! )?;
//!
//! assert_eq!(result.series.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod column_mapping;
pub mod datetime;
pub mod parser;
pub mod record_parser;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::{ColumnMapping, ResolvedColumns, resolve_columns};
pub use datetime::{DATETIME_FORMATS, DateTimeFormat, normalize_datetime};
pub use parser::{ParserOptions, TimestampParser};
pub use stats::{ParseResult, ParseStats};
pub use tokenizer::tokenize_line;
