//! Tests for parsing statistics functionality

use super::super::stats::ParseStats;

#[test]
fn test_parse_stats_calculation() {
    let stats = ParseStats {
        total_lines: 105,
        rows_parsed: 95,
        blank_lines_skipped: 5,
        short_rows_skipped: 2,
        invalid_timestamp_rows_skipped: 3,
        errors: vec!["Line 7: insufficient fields".to_string()],
    };

    assert_eq!(stats.records_skipped(), 5);
    assert_eq!(stats.success_rate(), 95.0);
    assert!(stats.is_successful());

    let poor_stats = ParseStats {
        total_lines: 100,
        rows_parsed: 80,
        blank_lines_skipped: 0,
        short_rows_skipped: 10,
        invalid_timestamp_rows_skipped: 10,
        errors: vec![],
    };

    assert_eq!(poor_stats.success_rate(), 80.0);
    assert!(!poor_stats.is_successful());
}

#[test]
fn test_parse_stats_empty() {
    let empty_stats = ParseStats::new();

    assert_eq!(empty_stats.total_lines, 0);
    assert_eq!(empty_stats.rows_parsed, 0);
    assert_eq!(empty_stats.records_skipped(), 0);
    assert!(empty_stats.errors.is_empty());
    assert_eq!(empty_stats.success_rate(), 0.0);
    assert!(!empty_stats.is_successful());
}

#[test]
fn test_blank_lines_do_not_affect_success_rate() {
    let stats = ParseStats {
        total_lines: 60,
        rows_parsed: 50,
        blank_lines_skipped: 10,
        ..ParseStats::default()
    };

    assert_eq!(stats.success_rate(), 100.0);
    assert!(stats.is_successful());
}
