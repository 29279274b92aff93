//! Core data models for timestamp extraction and analysis
//!
//! The central type is [`TimestampSeries`], the pair of index-aligned event and
//! process time sequences produced by the parser and consumed by the detector.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A parsed timestamp, compared exactly as written (no timezone normalization)
pub type Timestamp = NaiveDateTime;

/// Two parallel timestamp sequences, one entry per accepted source row
///
/// Entries are only ever added in pairs, so `event_times().len()` always
/// equals `process_times().len()` and index `i` of both refers to the same
/// source row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampSeries {
    event_times: Vec<Timestamp>,
    process_times: Vec<Timestamp>,
}

impl TimestampSeries {
    /// Create an empty series
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series from two sequences, rejecting mismatched lengths
    pub fn from_pairs(event_times: Vec<Timestamp>, process_times: Vec<Timestamp>) -> Result<Self> {
        if event_times.len() != process_times.len() {
            return Err(Error::configuration(format!(
                "Timestamp series length mismatch: {} event times, {} process times",
                event_times.len(),
                process_times.len()
            )));
        }

        Ok(Self {
            event_times,
            process_times,
        })
    }

    /// Append one row's event and process time
    pub fn push(&mut self, event_time: Timestamp, process_time: Timestamp) {
        self.event_times.push(event_time);
        self.process_times.push(process_time);
    }

    pub fn event_times(&self) -> &[Timestamp] {
        &self.event_times
    }

    pub fn process_times(&self) -> &[Timestamp] {
        &self.process_times
    }

    /// Iterate over `(event_time, process_time)` pairs in row order
    pub fn pairs(&self) -> impl Iterator<Item = (&Timestamp, &Timestamp)> {
        self.event_times.iter().zip(self.process_times.iter())
    }

    /// Number of rows in the series
    pub fn len(&self) -> usize {
        self.event_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.event_times.is_empty()
    }

    /// Split the series back into its two sequences
    pub fn into_parts(self) -> (Vec<Timestamp>, Vec<Timestamp>) {
        (self.event_times, self.process_times)
    }
}

/// Analyses that can be run against a loaded file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisModule {
    /// Flag rows whose event time is ahead of their process time
    TimeDiscrepancy,
}

impl AnalysisModule {
    /// All modules in display order
    pub const ALL: &'static [AnalysisModule] = &[AnalysisModule::TimeDiscrepancy];

    /// Human-readable module name
    pub fn display_name(&self) -> &'static str {
        match self {
            AnalysisModule::TimeDiscrepancy => "Time Discrepancy",
        }
    }
}

impl fmt::Display for AnalysisModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for AnalysisModule {
    type Err = Error;

    /// Accepts the display name or its kebab-case form, ignoring case
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace(['-', '_'], " ");
        AnalysisModule::ALL
            .iter()
            .copied()
            .find(|module| module.display_name().to_lowercase() == wanted)
            .ok_or_else(|| Error::configuration(format!("Unknown analysis module: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(h: u32, m: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_series_push_keeps_alignment() {
        let mut series = TimestampSeries::new();
        assert!(series.is_empty());

        series.push(ts(10, 0), ts(9, 59));
        series.push(ts(11, 0), ts(11, 5));

        assert_eq!(series.len(), 2);
        assert_eq!(series.event_times().len(), series.process_times().len());
        let pairs: Vec<_> = series.pairs().collect();
        assert_eq!(pairs[1], (&ts(11, 0), &ts(11, 5)));
    }

    #[test]
    fn test_series_from_pairs_rejects_mismatch() {
        let result = TimestampSeries::from_pairs(vec![ts(1, 0), ts(2, 0)], vec![ts(1, 0)]);
        assert!(matches!(result, Err(Error::Configuration { .. })));

        let series = TimestampSeries::from_pairs(vec![ts(1, 0)], vec![ts(2, 0)]).unwrap();
        let (events, processes) = series.into_parts();
        assert_eq!(events, vec![ts(1, 0)]);
        assert_eq!(processes, vec![ts(2, 0)]);
    }

    #[test]
    fn test_analysis_module_names() {
        assert_eq!(AnalysisModule::TimeDiscrepancy.to_string(), "Time Discrepancy");
        assert_eq!(
            "Time Discrepancy".parse::<AnalysisModule>().unwrap(),
            AnalysisModule::TimeDiscrepancy
        );
        assert_eq!(
            "time-discrepancy".parse::<AnalysisModule>().unwrap(),
            AnalysisModule::TimeDiscrepancy
        );
        assert!("Hash Check".parse::<AnalysisModule>().is_err());
    }
}
