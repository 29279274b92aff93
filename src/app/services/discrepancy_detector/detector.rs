//! Pairwise comparison of event and process times

use tracing::{debug, warn};

use super::report::{Discrepancy, DiscrepancyReport};
use crate::app::models::{Timestamp, TimestampSeries};

/// Compare two aligned sequences and collect rows whose event time is later
///
/// Both slices are expected to have equal length; extra entries on the longer
/// side are ignored.
pub fn detect_discrepancies(
    event_times: &[Timestamp],
    process_times: &[Timestamp],
) -> DiscrepancyReport {
    if event_times.len() != process_times.len() {
        warn!(
            "Comparing unequal sequences: {} event times, {} process times",
            event_times.len(),
            process_times.len()
        );
    }

    let discrepancies: Vec<Discrepancy> = event_times
        .iter()
        .zip(process_times)
        .enumerate()
        .filter(|(_, (event_time, process_time))| event_time > process_time)
        .map(|(row, (event_time, process_time))| Discrepancy::new(row, *event_time, *process_time))
        .collect();

    let rows_checked = event_times.len().min(process_times.len());
    debug!(
        "Checked {} rows, {} discrepancies",
        rows_checked,
        discrepancies.len()
    );

    DiscrepancyReport {
        rows_checked,
        discrepancies,
    }
}

/// Discrepancy detection over a parsed series
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscrepancyDetector;

impl DiscrepancyDetector {
    pub fn new() -> Self {
        Self
    }

    /// Detect rows where the event time is strictly after the process time
    pub fn detect(&self, series: &TimestampSeries) -> DiscrepancyReport {
        detect_discrepancies(series.event_times(), series.process_times())
    }
}
