//! Command-line argument definitions for clockskew
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::app::models::AnalysisModule;
use crate::config::{OutputFormat, parse_delimiter};
use crate::{Error, Result};

/// CLI arguments for the timestamp discrepancy auditor
///
/// Reads delimited exports holding an event time and a process time per row
/// and reports rows where the event time is ahead of the process time.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "clockskew",
    version,
    about = "Flag rows where the recorded event time is ahead of the processing time",
    long_about = "Reads CSV-like exports that carry an event timestamp (reported by a client) and a \
                  process timestamp (recorded by the server) on every row, and lists the rows where \
                  the event claims to have happened after it was processed. Rows with missing fields \
                  or unreadable timestamps are skipped rather than failing the file."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Analyze one or more files or directories
    Analyze(AnalyzeArgs),
    /// List the accepted timestamp formats in priority order
    Formats,
}

/// Arguments for the analyze command
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    /// Files or directories to analyze
    ///
    /// Directories are searched recursively for .csv, .tsv and .txt files.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Header name of the event time column
    #[arg(long = "event-column", value_name = "NAME")]
    pub event_column: Option<String>,

    /// Header name of the process time column
    #[arg(long = "process-column", value_name = "NAME")]
    pub process_column: Option<String>,

    /// Field delimiter: a single character, `tab` or `\t`
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR", value_parser = parse_delimiter_arg)]
    pub delimiter: Option<char>,

    /// Analysis to run
    #[arg(
        long = "module",
        value_enum,
        default_value_t = AnalysisModule::TimeDiscrepancy,
        help = "Analysis module to run"
    )]
    pub module: AnalysisModule,

    /// Output format for reports
    #[arg(short = 'f', long = "format", value_enum, value_name = "FORMAT")]
    pub output_format: Option<OutputFormat>,

    /// Path to configuration file
    ///
    /// YAML configuration file. If not specified, looks for
    /// <config dir>/clockskew/config.yaml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (YAML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors. Overrides verbose settings.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

fn parse_delimiter_arg(value: &str) -> std::result::Result<char, String> {
    parse_delimiter(value).map_err(|e| e.to_string())
}

impl AnalyzeArgs {
    /// Validate the analyze arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        for name in [&self.event_column, &self.process_column].into_iter().flatten() {
            if name.trim().is_empty() {
                return Err(Error::configuration("Column names must not be empty"));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            event_column: None,
            process_column: None,
            delimiter: None,
            module: AnalysisModule::TimeDiscrepancy,
            output_format: None,
            config_file: None,
            verbose: 0,
            quiet: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_command() {
        let args = Args::try_parse_from([
            "clockskew",
            "analyze",
            "a.csv",
            "exports/",
            "--event-column",
            "client_ts",
            "-d",
            "tab",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();

        let Some(Commands::Analyze(analyze)) = args.command else {
            panic!("expected analyze command");
        };

        assert_eq!(analyze.paths.len(), 2);
        assert_eq!(analyze.event_column.as_deref(), Some("client_ts"));
        assert_eq!(analyze.process_column, None);
        assert_eq!(analyze.delimiter, Some('\t'));
        assert_eq!(analyze.output_format, Some(OutputFormat::Json));
        assert_eq!(analyze.module, AnalysisModule::TimeDiscrepancy);
        assert_eq!(analyze.get_log_level(), "debug");
    }

    #[test]
    fn test_analyze_requires_path() {
        assert!(Args::try_parse_from(["clockskew", "analyze"]).is_err());
    }

    #[test]
    fn test_bad_delimiter_rejected() {
        assert!(Args::try_parse_from(["clockskew", "analyze", "a.csv", "-d", ";;"]).is_err());
    }

    #[test]
    fn test_quiet_log_level() {
        let args = AnalyzeArgs {
            quiet: true,
            ..Default::default()
        };
        assert_eq!(args.get_log_level(), "error");
        assert!(!args.show_progress());
    }

    #[test]
    fn test_validate_missing_config_file() {
        let args = AnalyzeArgs {
            paths: vec![PathBuf::from("a.csv")],
            config_file: Some(PathBuf::from("/definitely/not/here.yaml")),
            ..Default::default()
        };
        assert!(args.validate().is_err());

        let args = AnalyzeArgs {
            event_column: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_formats_command() {
        let args = Args::try_parse_from(["clockskew", "formats"]).unwrap();
        assert!(matches!(args.command, Some(Commands::Formats)));
    }
}
