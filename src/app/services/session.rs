//! Analysis session state
//!
//! An [`AnalysisSession`] holds what a front end needs between user actions:
//! the file currently loaded, the directory it came from, and the series and
//! report of the last successful analysis. It does no rendering of its own;
//! callers decide when to load, analyze, or reset and how to show the result.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::app::models::{AnalysisModule, TimestampSeries};
use crate::app::services::discrepancy_detector::{DiscrepancyDetector, DiscrepancyReport};
use crate::app::services::timestamp_parser::{ParseStats, ParserOptions, TimestampParser};
use crate::constants::SUPPORTED_EXTENSIONS;
use crate::{Error, Result};

/// Result of running one analysis module
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub module: AnalysisModule,
    pub report: DiscrepancyReport,
    pub stats: ParseStats,
}

/// State carried between load, analyze and reset actions
#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    parser: TimestampParser,
    current_file: Option<PathBuf>,
    last_directory: Option<PathBuf>,
    series: Option<TimestampSeries>,
    last_report: Option<DiscrepancyReport>,
}

/// Whether a path has one of the supported text extensions
pub fn is_supported_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

impl AnalysisSession {
    /// Create a session that parses with the given options
    pub fn new(options: ParserOptions) -> Self {
        Self {
            parser: TimestampParser::new(options),
            ..Default::default()
        }
    }

    /// Select the file to analyze, discarding results of any earlier file
    ///
    /// Only the extension is checked here; the file is read by [`Self::analyze`].
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if !is_supported_file(path) {
            let extension = path
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_default();
            return Err(Error::unsupported_file(path.display().to_string(), extension));
        }

        info!("Loaded file: {}", path.display());
        self.last_directory = path.parent().map(Path::to_path_buf);
        self.current_file = Some(path.to_path_buf());
        self.series = None;
        self.last_report = None;

        Ok(())
    }

    /// Run an analysis module against the loaded file
    ///
    /// On failure the previous series and report are cleared, so stale
    /// results are never presented as belonging to this file.
    pub fn analyze(&mut self, module: AnalysisModule) -> Result<AnalysisOutcome> {
        let path = self.current_file.clone().ok_or(Error::NoFileLoaded)?;
        debug!("Running {} on {}", module, path.display());

        self.series = None;
        self.last_report = None;

        let result = self.parser.parse_file(&path)?;

        let report = match module {
            AnalysisModule::TimeDiscrepancy => DiscrepancyDetector::new().detect(&result.series),
        };

        info!(
            "{}: {} of {} rows flagged",
            module,
            report.discrepancies.len(),
            report.rows_checked
        );

        self.series = Some(result.series);
        self.last_report = Some(report.clone());

        Ok(AnalysisOutcome {
            module,
            report,
            stats: result.stats,
        })
    }

    /// Forget the loaded file and all results; the last directory is kept
    pub fn reset(&mut self) {
        debug!("Resetting analysis session");
        self.current_file = None;
        self.series = None;
        self.last_report = None;
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    /// Directory of the most recently loaded file, for the next file picker
    pub fn last_directory(&self) -> Option<&Path> {
        self.last_directory.as_deref()
    }

    /// Series from the last successful analysis of the current file
    pub fn series(&self) -> Option<&TimestampSeries> {
        self.series.as_ref()
    }

    pub fn last_report(&self) -> Option<&DiscrepancyReport> {
        self.last_report.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", content).unwrap();
        path
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_file(Path::new("export.csv")));
        assert!(is_supported_file(Path::new("EXPORT.CSV")));
        assert!(is_supported_file(Path::new("dir/export.tsv")));
        assert!(is_supported_file(Path::new("export.txt")));
        assert!(!is_supported_file(Path::new("export.xlsx")));
        assert!(!is_supported_file(Path::new("export")));
    }

    #[test]
    fn test_analyze_without_file() {
        let mut session = AnalysisSession::default();
        let error = session.analyze(AnalysisModule::TimeDiscrepancy).unwrap_err();

        assert!(matches!(error, Error::NoFileLoaded));
        assert_eq!(error.to_string(), "Please load a file first.");
    }

    #[test]
    fn test_load_rejects_spreadsheets() {
        let mut session = AnalysisSession::default();
        let error = session.load_file("report.xlsx").unwrap_err();

        assert!(matches!(error, Error::UnsupportedFile { .. }));
        assert!(session.current_file().is_none());
    }

    #[test]
    fn test_load_analyze_reset_cycle() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "events.csv",
            "event_time,process_time\n2024-01-01 10:00:00,2024-01-01 09:59:00\n",
        );

        let mut session = AnalysisSession::new(ParserOptions::default());
        session.load_file(&path).unwrap();
        assert_eq!(session.current_file(), Some(path.as_path()));
        assert_eq!(session.last_directory(), Some(dir.path()));

        let outcome = session.analyze(AnalysisModule::TimeDiscrepancy).unwrap();
        assert!(outcome.report.has_discrepancies());
        assert!(outcome.report.render().contains("2024-01-01 10:00:00"));
        assert_eq!(outcome.stats.rows_parsed, 1);
        assert_eq!(session.series().map(|s| s.len()), Some(1));
        assert!(session.last_report().is_some());

        session.reset();
        assert!(session.current_file().is_none());
        assert!(session.series().is_none());
        assert!(session.last_report().is_none());
        assert_eq!(session.last_directory(), Some(dir.path()));
    }

    #[test]
    fn test_failed_analysis_clears_previous_series() {
        let dir = TempDir::new().unwrap();
        let good = write_file(
            &dir,
            "good.csv",
            "event_time,process_time\n2024-01-01,2024-01-01\n",
        );
        let bad = write_file(&dir, "bad.csv", "event_time,process_time\n");

        let mut session = AnalysisSession::default();
        session.load_file(&good).unwrap();
        session.analyze(AnalysisModule::TimeDiscrepancy).unwrap();
        assert!(session.series().is_some());

        session.load_file(&bad).unwrap();
        assert!(session.series().is_none());

        let error = session.analyze(AnalysisModule::TimeDiscrepancy).unwrap_err();
        assert!(matches!(error, Error::NoValidRows { .. }));
        assert!(session.series().is_none());
        assert!(session.last_report().is_none());
    }

    #[test]
    fn test_missing_file_fails_cleanly() {
        let dir = TempDir::new().unwrap();
        let mut session = AnalysisSession::default();
        session.load_file(dir.path().join("gone.csv")).unwrap();

        let error = session.analyze(AnalysisModule::TimeDiscrepancy).unwrap_err();
        assert!(matches!(error, Error::SourceUnavailable { .. }));
    }
}
