//! Tests for quote-aware line tokenization

use super::super::tokenizer::{join_fields, tokenize_line};

#[test]
fn test_plain_fields() {
    let fields = tokenize_line("a,b,c", ',');
    assert_eq!(fields, vec!["a", "b", "c"]);
}

#[test]
fn test_field_count_matches_delimiters() {
    let lines = [
        "",
        "single",
        "a,b",
        ",,",
        "1, 2 ,3,,5",
        "2024-01-01 10:00:00,2024-01-01 09:59:00,x",
    ];

    for line in lines {
        let delimiters = line.matches(',').count();
        assert_eq!(
            tokenize_line(line, ',').len(),
            delimiters + 1,
            "line: {:?}",
            line
        );
    }
}

#[test]
fn test_quoted_delimiter_is_preserved() {
    let fields = tokenize_line(r#"x,"a,b",y"#, ',');
    assert_eq!(fields, vec!["x", "a,b", "y"]);
}

#[test]
fn test_doubled_quotes_become_literal() {
    let fields = tokenize_line(r#""he said ""hi""""#, ',');
    assert_eq!(fields, vec![r#"he said "hi""#]);
}

#[test]
fn test_trim_happens_before_quote_strip() {
    let fields = tokenize_line(r#"  "a,b"  ,c"#, ',');
    assert_eq!(fields, vec!["a,b", "c"]);
}

#[test]
fn test_outer_quote_pair_stripped_once() {
    // """a""" leaves "a" after quote handling, then the outer pair goes
    let fields = tokenize_line("\"\"\"a\"\"\"", ',');
    assert_eq!(fields, vec!["a"]);

    // """""a""""" leaves ""a"" and only one pair is removed
    let fields = tokenize_line("\"\"\"\"\"a\"\"\"\"\"", ',');
    assert_eq!(fields, vec!["\"a\""]);
}

#[test]
fn test_single_quote_character_field_kept() {
    // `""` is one literal quote; a one-character field is too short to strip
    let fields = tokenize_line(r#"a,"","#, ',');
    assert_eq!(fields, vec!["a", "\"", ""]);
}

#[test]
fn test_unterminated_quote_runs_to_end_of_line() {
    let fields = tokenize_line(r#"a,"b,c"#, ',');
    assert_eq!(fields, vec!["a", "b,c"]);
}

#[test]
fn test_custom_delimiters() {
    assert_eq!(tokenize_line("a;b;c", ';'), vec!["a", "b", "c"]);
    assert_eq!(tokenize_line("a\tb\t c ", '\t'), vec!["a", "b", "c"]);
    assert_eq!(tokenize_line("a,b;c", ';'), vec!["a,b", "c"]);
}

#[test]
fn test_whitespace_trimmed() {
    let fields = tokenize_line("  event_time , process_time  ", ',');
    assert_eq!(fields, vec!["event_time", "process_time"]);
}

#[test]
fn test_round_trip_without_special_characters() {
    let lines = [
        "event_time,process_time",
        "1,alice,2024-01-01 10:00:00,2024-01-01 09:59:00",
        "a,,c,",
    ];

    for line in lines {
        let fields = tokenize_line(line, ',');
        let rejoined = join_fields(&fields, ',');
        assert_eq!(tokenize_line(&rejoined, ','), fields);
    }

    let fields = tokenize_line("x|y|z", '|');
    assert_eq!(tokenize_line(&join_fields(&fields, '|'), '|'), fields);
}
