//! Tests for header analysis and column resolution

use super::super::column_mapping::{ColumnMapping, ResolvedColumns, resolve_columns};
use crate::Error;

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_resolves_exact_names() {
    let columns = resolve_columns(
        &headers(&["id", "event_time", "process_time"]),
        "event_time",
        "process_time",
    )
    .unwrap();

    assert_eq!(
        columns,
        ResolvedColumns {
            event_index: 1,
            process_index: 2
        }
    );
    assert_eq!(columns.max_index(), 2);
}

#[test]
fn test_case_insensitive_and_whitespace_tolerant() {
    let columns = resolve_columns(
        &headers(&[" Event_Time ", "PROCESS_TIME"]),
        "event_time",
        "process_time",
    )
    .unwrap();

    assert_eq!(columns.event_index, 0);
    assert_eq!(columns.process_index, 1);
}

#[test]
fn test_last_duplicate_wins() {
    let mapping = ColumnMapping::analyze(&headers(&[
        "event_time",
        "process_time",
        "Event_Time",
    ]));

    assert_eq!(mapping.occurrences("event_time"), 2);
    assert_eq!(mapping.get_index("event_time"), Some(2));

    let columns = mapping.resolve("event_time", "process_time").unwrap();
    assert_eq!(columns.event_index, 2);
    assert_eq!(columns.process_index, 1);
}

#[test]
fn test_same_name_for_both_columns() {
    let columns = resolve_columns(&headers(&["id", "ts"]), "ts", "TS").unwrap();
    assert_eq!(columns.event_index, 1);
    assert_eq!(columns.process_index, 1);
}

#[test]
fn test_missing_column_names_both_requested() {
    let result = resolve_columns(
        &headers(&["id", "event_time", "created"]),
        "event_time",
        "process_time",
    );

    let error = result.unwrap_err();
    assert!(matches!(error, Error::MissingColumns { .. }));

    let message = error.to_string();
    assert!(message.contains("event_time"));
    assert!(message.contains("process_time"));
    assert!(message.contains("id, event_time, created"));
}

#[test]
fn test_missing_both_columns() {
    let error = resolve_columns(&headers(&["a", "b"]), "event_time", "process_time").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Required columns 'event_time' and 'process_time' not found. Found columns: a, b"
    );
}

#[test]
fn test_has_column() {
    let mapping = ColumnMapping::analyze(&headers(&["Event_Time"]));
    assert!(mapping.has_column("event_time"));
    assert!(mapping.has_column("  EVENT_TIME"));
    assert!(!mapping.has_column("process_time"));
}
