//! Quote-aware field tokenizer for delimited lines
//!
//! Quoting follows the doubled-quote convention: `"` toggles quoted mode and
//! `""` is a literal quote. Backslash escapes are not recognised. Malformed
//! quoting never fails; an unterminated quote simply runs to the end of the
//! line.

use crate::constants::QUOTE_CHAR;

/// Split one line into trimmed, unquoted fields
///
/// The number of returned fields is always the number of delimiters found
/// outside quotes plus one.
pub fn tokenize_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quote = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == QUOTE_CHAR {
            if chars.peek() == Some(&QUOTE_CHAR) {
                field.push(QUOTE_CHAR);
                chars.next();
            } else {
                in_quote = !in_quote;
            }
        } else if c == delimiter && !in_quote {
            fields.push(std::mem::take(&mut field));
        } else {
            field.push(c);
        }
    }

    // Unterminated quotes still close the last field
    fields.push(field);

    fields.into_iter().map(|f| clean_field(&f)).collect()
}

/// Trim a raw field, then strip one enclosing quote pair if present
fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let quoted = trimmed.len() >= 2
        && trimmed.starts_with(QUOTE_CHAR)
        && trimmed.ends_with(QUOTE_CHAR);

    if quoted {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}

/// Join fields back into a line; the inverse of [`tokenize_line`] for fields
/// that contain neither the delimiter nor a quote
pub fn join_fields(fields: &[String], delimiter: char) -> String {
    fields.join(delimiter.to_string().as_str())
}
