//! Command implementations for the clockskew CLI
//!
//! This module contains the command execution logic, report printing, and
//! progress reporting for the CLI interface.

use anyhow::Context;
use colored::*;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use crate::app::services::session::{AnalysisOutcome, AnalysisSession};
use crate::app::services::timestamp_parser::{DATETIME_FORMATS, ParserOptions};
use crate::cli::args::{AnalyzeArgs, Args, Commands};
use crate::cli::discovery::discover_files;
use crate::config::{Config, OutputFormat};
use crate::{Error, Result};

/// Totals across one invocation of the analyze command
#[derive(Debug, Clone, Default)]
pub struct AnalysisSummary {
    /// Files analyzed without error
    pub files_analyzed: usize,
    /// Files that could not be analyzed
    pub files_failed: usize,
    /// Failed files that were readable but held no usable rows or columns
    pub files_without_data: usize,
    /// Files with at least one flagged row
    pub files_with_discrepancies: usize,
    /// Row pairs compared across all files
    pub rows_checked: usize,
    /// Flagged rows across all files
    pub discrepancies_found: usize,
    pub processing_time: Duration,
}

impl AnalysisSummary {
    /// Whether every requested file was analyzed
    pub fn all_succeeded(&self) -> bool {
        self.files_failed == 0
    }

    fn record(&mut self, outcome: &AnalysisOutcome) {
        self.files_analyzed += 1;
        self.rows_checked += outcome.report.rows_checked;
        self.discrepancies_found += outcome.report.discrepancies.len();
        if outcome.report.has_discrepancies() {
            self.files_with_discrepancies += 1;
        }
    }

    fn record_failure(&mut self, file: &Path, error: &Error) {
        self.files_failed += 1;
        if error.is_pipeline_failure() {
            warn!("No usable data in {}: {}", file.display(), error);
            self.files_without_data += 1;
        } else {
            error!("Failed to analyze {}: {}", file.display(), error);
        }
    }
}

/// Main command runner
pub fn run(args: Args) -> anyhow::Result<AnalysisSummary> {
    match args.command {
        Some(Commands::Analyze(analyze_args)) => run_analyze(analyze_args),
        Some(Commands::Formats) => {
            print_formats();
            Ok(AnalysisSummary::default())
        }
        None => Ok(AnalysisSummary::default()),
    }
}

/// Analyze every file named by the arguments
///
/// A failure in one file is reported and counted; the remaining files are
/// still analyzed.
pub fn run_analyze(args: AnalyzeArgs) -> anyhow::Result<AnalysisSummary> {
    let start_time = Instant::now();

    args.validate()?;

    let config = load_configuration(&args)?;
    setup_logging(&args, &config)?;

    info!("Starting clockskew");
    debug!("Command line arguments: {:?}", args);
    debug!("Loaded configuration: {:?}", config);

    let files = discover_files(&args.paths)?;
    info!("Analyzing {} files", files.len());

    let format = config.output.format;
    let options = ParserOptions::from_config(&config);
    let mut session = AnalysisSession::new(options);

    let progress_bar = if files.len() > 1 && format == OutputFormat::Human && args.show_progress()
    {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut summary = AnalysisSummary::default();
    let mut json_reports = Vec::new();

    for file in &files {
        if let Some(pb) = &progress_bar {
            pb.set_message(file.display().to_string());
        }

        let result = session
            .load_file(file)
            .and_then(|()| session.analyze(args.module));

        match &result {
            Ok(outcome) => summary.record(outcome),
            Err(e) => summary.record_failure(file, e),
        }

        match format {
            OutputFormat::Human => match &progress_bar {
                Some(pb) => pb.suspend(|| print_human_result(file, &result)),
                None => print_human_result(file, &result),
            },
            OutputFormat::Json => json_reports.push(file_json(file, &result)),
        }

        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }

    summary.processing_time = start_time.elapsed();

    match format {
        OutputFormat::Human => {
            if files.len() > 1 {
                print_human_summary(&summary);
            }
        }
        OutputFormat::Json => {
            let output = serde_json::to_string_pretty(&json_reports)?;
            println!("{}", output);
        }
    }

    info!(
        "Finished: {} analyzed, {} failed, {} discrepancies",
        summary.files_analyzed, summary.files_failed, summary.discrepancies_found
    );

    Ok(summary)
}

/// Set up structured logging based on CLI arguments and configuration
fn setup_logging(args: &AnalyzeArgs, config: &Config) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = if args.quiet || args.verbose > 0 {
        args.get_log_level()
    } else {
        config.logging.level.as_str()
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("clockskew={}", log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
fn load_configuration(args: &AnalyzeArgs) -> Result<Config> {
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    let mut config = Config::load_layered(config_file)?;

    apply_cli_overrides(&mut config, args);

    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, args: &AnalyzeArgs) {
    if let Some(event_column) = &args.event_column {
        config.columns.event_column = event_column.clone();
    }

    if let Some(process_column) = &args.process_column {
        config.columns.process_column = process_column.clone();
    }

    if let Some(delimiter) = args.delimiter {
        config.parsing.delimiter = delimiter;
    }

    if let Some(format) = args.output_format {
        config.output.format = format;
    }

    if args.quiet || args.verbose > 0 {
        config.logging.level = args.get_log_level().to_string();
    }
}

fn print_human_result(file: &Path, result: &Result<AnalysisOutcome>) {
    match result {
        Ok(outcome) => {
            println!(
                "{} {}",
                outcome.module.display_name().bold(),
                file.display().to_string().cyan()
            );

            let text = outcome.report.render();
            if outcome.report.has_discrepancies() {
                for line in text.lines() {
                    println!("  {}", line.yellow());
                }
            } else {
                println!("  {}", text.green());
            }

            let stats = &outcome.stats;
            println!(
                "  {}",
                format!(
                    "{} rows parsed, {} skipped ({} short, {} invalid), {} blank lines",
                    stats.rows_parsed,
                    stats.records_skipped(),
                    stats.short_rows_skipped,
                    stats.invalid_timestamp_rows_skipped,
                    stats.blank_lines_skipped
                )
                .dimmed()
            );
            println!();
        }
        Err(e) => {
            eprintln!("{} {}: {}", "Error:".red().bold(), file.display(), e);
        }
    }
}

fn print_human_summary(summary: &AnalysisSummary) {
    println!("{}", "Summary".bold());
    println!("  Files analyzed: {}", summary.files_analyzed);
    println!(
        "  Files with discrepancies: {}",
        summary.files_with_discrepancies
    );
    println!("  Rows checked: {}", summary.rows_checked);
    println!("  Discrepancies found: {}", summary.discrepancies_found);
    if summary.files_failed > 0 {
        println!(
            "  {}",
            format!(
                "Files failed: {} ({} without usable data)",
                summary.files_failed, summary.files_without_data
            )
            .red()
        );
    }
    println!("  Time: {}", HumanDuration(summary.processing_time));
}

/// JSON document for one analyzed file
fn file_json(file: &Path, result: &Result<AnalysisOutcome>) -> serde_json::Value {
    match result {
        Ok(outcome) => serde_json::json!({
            "file": file.display().to_string(),
            "module": outcome.module,
            "rows_checked": outcome.report.rows_checked,
            "has_discrepancies": outcome.report.has_discrepancies(),
            "report": outcome.report.render(),
            "discrepancies": outcome.report.discrepancies,
            "stats": outcome.stats,
        }),
        Err(e) => serde_json::json!({
            "file": file.display().to_string(),
            "error": e.to_string(),
        }),
    }
}

/// Print the timestamp format table in the order formats are tried
pub fn print_formats() {
    println!("{}", "Accepted timestamp formats (tried in order)".bold());
    for (i, format) in DATETIME_FORMATS.iter().enumerate() {
        println!("  {:>2}. {:<28} {}", i + 1, format.name, format.pattern.dimmed());
    }
    println!(
        "  {:>2}. {:<28} {}",
        DATETIME_FORMATS.len() + 1,
        "ISO-8601",
        "offset accepted, wall-clock time kept".dimmed()
    );
}
