//! Multi-format timestamp normalization
//!
//! Raw field values are tried against [`DATETIME_FORMATS`] strictly in table
//! order and the first format that parses wins. Day-first patterns come before
//! month-first ones, so `01/02/2024 00:00:00` is read as 1 February. Values
//! no table entry accepts get one last chance as generic ISO-8601.
//!
//! chrono's strftime parser accepts short numbers and optional whitespace, so
//! every value is first checked against a fixed character layout. `24-01-01`
//! is not a four-digit year and `2024-1-1` is not a two-digit month.
//!
//! Offsets accepted by the ISO-8601 fallback are dropped after parsing: the
//! written wall-clock time is kept and never shifted to another zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::app::models::Timestamp;

/// Digit placeholder in a format layout
const DIGIT: u8 = b'#';

/// How a format's pattern is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// Pattern carries both date and time of day
    DateTime,
    /// Pattern carries only a date; the time is midnight
    DateOnly,
}

/// One entry of the timestamp format table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeFormat {
    /// Pattern as written in user-facing documentation
    pub name: &'static str,
    /// chrono strftime pattern
    pub pattern: &'static str,
    /// Exact character layout; `#` is any ASCII digit
    pub layout: &'static str,
    pub kind: FormatKind,
}

impl DateTimeFormat {
    const fn new(
        name: &'static str,
        pattern: &'static str,
        layout: &'static str,
        kind: FormatKind,
    ) -> Self {
        Self {
            name,
            pattern,
            layout,
            kind,
        }
    }

    /// Parse a value with this format only
    pub fn parse(&self, raw: &str) -> Option<Timestamp> {
        if !matches_layout(raw.as_bytes(), self.layout.as_bytes()) {
            return None;
        }

        match self.kind {
            FormatKind::DateTime => NaiveDateTime::parse_from_str(raw, self.pattern).ok(),
            FormatKind::DateOnly => NaiveDate::parse_from_str(raw, self.pattern)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0)),
        }
    }
}

/// Supported timestamp formats in priority order
///
/// Reordering this table changes how ambiguous day/month values are read.
pub static DATETIME_FORMATS: [DateTimeFormat; 8] = [
    DateTimeFormat::new(
        "yyyy-MM-dd HH:mm:ss",
        "%Y-%m-%d %H:%M:%S",
        "####-##-## ##:##:##",
        FormatKind::DateTime,
    ),
    DateTimeFormat::new(
        "yyyy-MM-dd HH:mm:ss.SSS",
        "%Y-%m-%d %H:%M:%S%.3f",
        "####-##-## ##:##:##.###",
        FormatKind::DateTime,
    ),
    DateTimeFormat::new(
        "yyyy/MM/dd HH:mm:ss",
        "%Y/%m/%d %H:%M:%S",
        "####/##/## ##:##:##",
        FormatKind::DateTime,
    ),
    DateTimeFormat::new(
        "dd-MM-yyyy HH:mm:ss",
        "%d-%m-%Y %H:%M:%S",
        "##-##-#### ##:##:##",
        FormatKind::DateTime,
    ),
    DateTimeFormat::new(
        "dd/MM/yyyy HH:mm:ss",
        "%d/%m/%Y %H:%M:%S",
        "##/##/#### ##:##:##",
        FormatKind::DateTime,
    ),
    DateTimeFormat::new(
        "MM/dd/yyyy HH:mm:ss",
        "%m/%d/%Y %H:%M:%S",
        "##/##/#### ##:##:##",
        FormatKind::DateTime,
    ),
    DateTimeFormat::new(
        "yyyy-MM-ddTHH:mm:ss",
        "%Y-%m-%dT%H:%M:%S",
        "####-##-##T##:##:##",
        FormatKind::DateTime,
    ),
    DateTimeFormat::new("yyyy-MM-dd", "%Y-%m-%d", "####-##-##", FormatKind::DateOnly),
];

/// ISO-8601 layouts with an explicit numeric offset, tried after RFC 3339
const ISO_OFFSET_PATTERNS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
];

/// ISO-8601 layouts without any offset
const ISO_NAIVE_PATTERNS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Normalize a raw field into a timestamp, or `None` if no format accepts it
pub fn normalize_datetime(raw: &str) -> Option<Timestamp> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| format.parse(raw))
        .or_else(|| parse_iso8601(raw))
}

/// Table entry that accepts a value, if any
pub fn matching_format(raw: &str) -> Option<&'static DateTimeFormat> {
    DATETIME_FORMATS
        .iter()
        .find(|format| format.parse(raw).is_some())
}

/// Generic ISO-8601 parse keeping the written local time
///
/// Accepts `T` or a single space between date and time, optional seconds
/// with up to nine fractional digits, and an optional `Z` or numeric offset.
pub fn parse_iso8601(raw: &str) -> Option<Timestamp> {
    if !has_iso8601_layout(raw.as_bytes()) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    if let Some(dt) = ISO_OFFSET_PATTERNS
        .iter()
        .find_map(|pattern| DateTime::parse_from_str(raw, pattern).ok())
    {
        return Some(dt.naive_local());
    }

    // A trailing designator is UTC, which needs no shifting
    let naive = raw
        .strip_suffix('Z')
        .or_else(|| raw.strip_suffix('z'))
        .unwrap_or(raw);

    ISO_NAIVE_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(naive, pattern).ok())
}

fn matches_layout(raw: &[u8], layout: &[u8]) -> bool {
    raw.len() == layout.len()
        && raw.iter().zip(layout).all(|(&c, &l)| {
            if l == DIGIT {
                c.is_ascii_digit()
            } else {
                c == l
            }
        })
}

fn all_digits(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_digit)
}

/// Check `yyyy-MM-dd(T| )HH:mm[:ss[.f]][Z|±HH[:]mm]` before chrono sees it
fn has_iso8601_layout(raw: &[u8]) -> bool {
    let Some((head, rest)) = raw.split_at_checked(16) else {
        return false;
    };

    if !matches_layout(&head[..10], b"####-##-##")
        || !matches!(head[10], b'T' | b't' | b' ')
        || !matches_layout(&head[11..], b"##:##")
    {
        return false;
    }

    let mut rest = rest;
    if let [b':', s1, s2, tail @ ..] = rest {
        if !(s1.is_ascii_digit() && s2.is_ascii_digit()) {
            return false;
        }
        rest = tail;

        if let [b'.', fraction @ ..] = rest {
            let digits = fraction.iter().take_while(|c| c.is_ascii_digit()).count();
            if !(1..=9).contains(&digits) {
                return false;
            }
            rest = &fraction[digits..];
        }
    }

    match rest {
        [] | [b'Z' | b'z'] => true,
        [b'+' | b'-', hours @ .., b':', m1, m2] if hours.len() == 2 => {
            all_digits(hours) && m1.is_ascii_digit() && m2.is_ascii_digit()
        }
        [b'+' | b'-', offset @ ..] if offset.len() == 4 => all_digits(offset),
        _ => false,
    }
}
