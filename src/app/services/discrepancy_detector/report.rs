//! Discrepancy report structures and text rendering

use serde::Serialize;
use std::fmt;

use crate::app::models::Timestamp;
use crate::constants::{DISCREPANCY_EXPLANATION, NO_DISCREPANCIES_MESSAGE, REPORT_DATETIME_FORMAT};

/// One row whose event time is ahead of its process time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discrepancy {
    /// Zero-based position in the timestamp series
    pub row: usize,
    pub event_time: Timestamp,
    pub process_time: Timestamp,
    /// How far the event time runs ahead, in whole seconds
    pub lead_seconds: i64,
}

impl Discrepancy {
    pub fn new(row: usize, event_time: Timestamp, process_time: Timestamp) -> Self {
        Self {
            row,
            event_time,
            process_time,
            lead_seconds: (event_time - process_time).num_seconds(),
        }
    }

    /// Report line for this row
    pub fn describe(&self) -> String {
        format!(
            "Event time is ahead of process time on {}. {}",
            self.event_time.format(REPORT_DATETIME_FORMAT),
            DISCREPANCY_EXPLANATION
        )
    }
}

/// Outcome of comparing a whole series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscrepancyReport {
    /// Number of row pairs compared
    pub rows_checked: usize,

    /// Flagged rows in series order
    pub discrepancies: Vec<Discrepancy>,
}

impl DiscrepancyReport {
    pub fn has_discrepancies(&self) -> bool {
        !self.discrepancies.is_empty()
    }

    /// Largest lead among flagged rows
    pub fn max_lead_seconds(&self) -> Option<i64> {
        self.discrepancies.iter().map(|d| d.lead_seconds).max()
    }

    /// Report text: one line per flagged row, or the fixed all-clear message
    pub fn render(&self) -> String {
        if !self.has_discrepancies() {
            return NO_DISCREPANCIES_MESSAGE.to_string();
        }

        self.discrepancies
            .iter()
            .map(|d| format!("{}\n", d.describe()))
            .collect()
    }
}

impl fmt::Display for DiscrepancyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
