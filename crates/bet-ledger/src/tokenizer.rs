//! Quote-aware splitting of one CSV line.
//!
//! Covers what spreadsheet exports actually produce: double-quoted fields,
//! `""` as an escaped quote and commas inside quotes. Embedded newlines are
//! not supported; callers split on line boundaries first.

/// Split a single line into trimmed fields.
///
/// An unterminated quote is closed implicitly at end of line.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quote = !in_quote,
            ',' if !in_quote => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}
