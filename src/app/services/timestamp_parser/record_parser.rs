//! Individual data row processing
//!
//! A row either yields both timestamps or is dropped whole; one valid value is
//! never kept without its partner.

use super::column_mapping::ResolvedColumns;
use super::datetime::normalize_datetime;
use super::tokenizer::tokenize_line;
use crate::app::models::Timestamp;

/// What happened to a single data line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Both timestamps parsed
    Parsed {
        event_time: Timestamp,
        process_time: Timestamp,
    },

    /// Whitespace-only line
    Blank,

    /// Row ends before one of the timestamp columns
    TooShort { field_count: usize, required: usize },

    /// At least one timestamp matched no format; the raw text of each bad value
    InvalidTimestamp {
        event_value: Option<String>,
        process_value: Option<String>,
    },
}

/// Parse a single data line into an event/process pair
pub fn parse_timestamp_record(
    line: &str,
    delimiter: char,
    columns: &ResolvedColumns,
) -> RowOutcome {
    if line.trim().is_empty() {
        return RowOutcome::Blank;
    }

    let fields = tokenize_line(line, delimiter);
    if fields.len() <= columns.max_index() {
        return RowOutcome::TooShort {
            field_count: fields.len(),
            required: columns.max_index() + 1,
        };
    }

    let event_value = fields[columns.event_index].trim();
    let process_value = fields[columns.process_index].trim();

    match (
        normalize_datetime(event_value),
        normalize_datetime(process_value),
    ) {
        (Some(event_time), Some(process_time)) => RowOutcome::Parsed {
            event_time,
            process_time,
        },
        (event, process) => RowOutcome::InvalidTimestamp {
            event_value: event.is_none().then(|| event_value.to_string()),
            process_value: process.is_none().then(|| process_value.to_string()),
        },
    }
}
