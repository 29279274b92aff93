//! Header analysis and resolution of the two timestamp columns
//!
//! Column names are matched after trimming and case folding. When a name is
//! repeated in the header the last occurrence wins; this mirrors how exports
//! with duplicated columns have always been read and is kept as-is.

use std::collections::HashMap;
use tracing::warn;

use crate::{Error, Result};

/// Normalized header name to position mapping
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Normalized column name to index mapping (last occurrence wins)
    pub name_to_index: HashMap<String, usize>,

    /// Header fields as tokenized, in file order
    pub headers: Vec<String>,
}

/// Positions of the event and process columns within a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub event_index: usize,
    pub process_index: usize,
}

impl ResolvedColumns {
    /// Largest index a row must reach to carry both columns
    pub fn max_index(&self) -> usize {
        self.event_index.max(self.process_index)
    }
}

/// Normalize a column name for comparison
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase()
}

impl ColumnMapping {
    /// Build the mapping from tokenized header fields
    pub fn analyze(headers: &[String]) -> Self {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            name_to_index.insert(normalize_column_name(header), index);
        }

        ColumnMapping {
            name_to_index,
            headers: headers.to_vec(),
        }
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index
            .get(&normalize_column_name(column_name))
            .copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.get_index(column_name).is_some()
    }

    /// Number of header fields matching a column name
    pub fn occurrences(&self, column_name: &str) -> usize {
        let wanted = normalize_column_name(column_name);
        self.headers
            .iter()
            .filter(|header| normalize_column_name(header) == wanted)
            .count()
    }

    /// Resolve the event and process columns, failing if either is absent
    pub fn resolve(&self, event_column: &str, process_column: &str) -> Result<ResolvedColumns> {
        for column in [event_column, process_column] {
            let count = self.occurrences(column);
            if count > 1 {
                warn!(
                    "Column '{}' appears {} times in the header; using the last occurrence",
                    column, count
                );
            }
        }

        match (self.get_index(event_column), self.get_index(process_column)) {
            (Some(event_index), Some(process_index)) => Ok(ResolvedColumns {
                event_index,
                process_index,
            }),
            _ => Err(Error::missing_columns(
                event_column,
                process_column,
                &self.headers,
            )),
        }
    }
}

/// Resolve both timestamp columns directly from header fields
pub fn resolve_columns(
    headers: &[String],
    event_column: &str,
    process_column: &str,
) -> Result<ResolvedColumns> {
    ColumnMapping::analyze(headers).resolve(event_column, process_column)
}
