//! Application constants for clockskew
//!
//! This module contains default values, report wording and file-type
//! conventions used throughout the application.

// =============================================================================
// Column and Delimiter Defaults
// =============================================================================

/// Header name of the column holding the client-reported event time
pub const DEFAULT_EVENT_COLUMN: &str = "event_time";

/// Header name of the column holding the server-side processing time
pub const DEFAULT_PROCESS_COLUMN: &str = "process_time";

/// Field delimiter used when none is configured
pub const DEFAULT_DELIMITER: char = ',';

/// Quote character recognised by the field tokenizer
pub const QUOTE_CHAR: char = '"';

// =============================================================================
// Report Wording
// =============================================================================

/// Rendering used for event times in discrepancy reports
pub const REPORT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Report text when no row has its event time ahead of its process time
pub const NO_DISCREPANCIES_MESSAGE: &str = "No time discrepancies found.";

/// Explanation appended to every flagged row
pub const DISCREPANCY_EXPLANATION: &str =
    "The client clock was ahead of the server, which suggests clock manipulation.";

// =============================================================================
// Input Files
// =============================================================================

/// File extensions accepted by the analysis session (compared case-insensitively)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "tsv", "txt"];

/// UTF-8 byte order mark skipped at the start of input files
pub const UTF8_BOM: char = '\u{feff}';

// =============================================================================
// Configuration
// =============================================================================

/// Directory name under the platform config directory
pub const CONFIG_DIR_NAME: &str = "clockskew";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Environment variable overriding the event column name
pub const ENV_EVENT_COLUMN: &str = "CLOCKSKEW_EVENT_COLUMN";

/// Environment variable overriding the process column name
pub const ENV_PROCESS_COLUMN: &str = "CLOCKSKEW_PROCESS_COLUMN";

/// Environment variable overriding the field delimiter
pub const ENV_DELIMITER: &str = "CLOCKSKEW_DELIMITER";

/// Success rate (percent) above which a parse counts as clean
pub const PARSE_SUCCESS_THRESHOLD: f64 = 90.0;
