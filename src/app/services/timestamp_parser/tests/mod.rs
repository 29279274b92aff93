//! Test utilities for timestamp parser testing
//!
//! This module provides sample exports and helper functions used across the
//! different parser test modules.

use chrono::{NaiveDate, NaiveDateTime};
use std::io::Write;
use tempfile::NamedTempFile;

// Test modules
mod column_mapping_tests;
mod stats_tests;
mod tokenizer_tests;

/// Helper to build a timestamp from its parts
pub fn ts(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, min, sec)
        .unwrap()
}

/// Helper to create a representative export with mixed formats and noise
pub fn create_test_export() -> String {
    r#"id,player,event_time,process_time,note
1,alice,2024-01-01 10:00:00,2024-01-01 09:59:00,"ahead, by a minute"
2,bob,2024-01-01 11:00:00,2024-01-01 11:00:05,normal

3,carol,not-a-date,2024-01-01 12:00:00,bad event
4,dave
5,erin,02/01/2024 08:00:00,2024-01-02 08:00:00,"day first"
6,frank,2024-01-03T07:30:00,2024-01-03,"iso vs date only""#
        .to_string()
}

/// Helper to create a minimal export with a single clean row
pub fn create_minimal_export() -> String {
    "event_time,process_time\n2024-01-01 10:00:00,2024-01-01 10:00:00".to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
