//! Sheet export → `BetRecord`s.
//!
//! Tolerant by design: the sheets are maintained by hand, so a ragged row is
//! dropped and an unreadable number becomes 0 rather than failing the load.

use tracing::debug;

use crate::outcome::classify;
use crate::tokenizer::split_csv_line;
use crate::types::BetRecord;

// ── Column contract ─────────────────────────────────────────────────────────
// Fixed positions; the header row is never inspected.

const COL_DATE: usize = 0;
const COL_COMPETITION: usize = 1;
const COL_TIPSTER: usize = 2;
const COL_HOME: usize = 3;
const COL_AWAY: usize = 4;
const COL_MARKET: usize = 5;
const COL_UNITS: usize = 6;
const COL_ODDS: usize = 7;
const COL_RESULT: usize = 8;
const COL_PROFIT: usize = 9;
const COL_PROFIT_PERCENT: usize = 10;

/// Rows with fewer fields than this are skipped.
pub const MIN_FIELDS: usize = 5;

// ── Field helpers ───────────────────────────────────────────────────────────

/// Strip one layer of surrounding quotes, then trim.
fn clean(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    let value = value.strip_suffix('"').unwrap_or(value);
    value.trim()
}

/// Longest leading slice that reads as a decimal number (`-1.5e3xyz` → `-1.5e3`).
fn numeric_prefix(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    Some(&s[..end])
}

/// Parse a sheet number that may use either decimal separator.
///
/// The first `,` becomes `.`, then the leading numeric part is read, so
/// `"1,5"` → 1.5 and `"2.5u"` → 2.5. Anything unreadable (or non-finite) → 0.
pub fn parse_decimal(raw: &str) -> f64 {
    let normalized = raw.trim().replacen(',', ".", 1);
    numeric_prefix(&normalized)
        .and_then(|p| p.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Like [`parse_decimal`] but tolerates a trailing `%`.
pub fn parse_percent(raw: &str) -> f64 {
    let raw = raw.trim();
    parse_decimal(raw.strip_suffix('%').unwrap_or(raw))
}

// ── Parser ──────────────────────────────────────────────────────────────────

/// Parse a full CSV export (header + data rows) into records, in source order.
///
/// Blank lines are discarded before counting, the first remaining line is the
/// header, and ids are `row-<n>` where `n` is the 1-based data line index.
pub fn parse_csv_data(text: &str) -> Vec<BetRecord> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let mut records = Vec::with_capacity(lines.len() - 1);
    let mut dropped = 0usize;

    for (i, line) in lines.iter().enumerate().skip(1) {
        let values = split_csv_line(line);
        if values.len() < MIN_FIELDS {
            dropped += 1;
            continue;
        }

        let field = |idx: usize| values.get(idx).map(String::as_str).map(clean).unwrap_or("");

        let profit_units = parse_decimal(field(COL_PROFIT));

        records.push(BetRecord {
            id: format!("row-{}", i),
            date: field(COL_DATE).to_string(),
            competition: field(COL_COMPETITION).to_string(),
            tipster: field(COL_TIPSTER).to_string(),
            home: field(COL_HOME).to_string(),
            away: field(COL_AWAY).to_string(),
            market: field(COL_MARKET).to_string(),
            units: parse_decimal(field(COL_UNITS)),
            odds: parse_decimal(field(COL_ODDS)),
            result: classify(field(COL_RESULT), profit_units),
            profit_units,
            profit_percent: parse_percent(field(COL_PROFIT_PERCENT)),
        });
    }

    if dropped > 0 {
        debug!("Skipped {} row(s) with fewer than {} fields", dropped, MIN_FIELDS);
    }

    records
}
