//! Form-value coercion helpers.
//!
//! Numeric fields arrive as raw text. They are read the lenient way a form
//! would: leading whitespace is skipped, an optional sign and a run of digits
//! are taken, and everything after the digits is ignored. Text with no leading
//! digits does not parse.

use medstudy_core::ids::MIN_DAILY_GOAL;

/// Parse the leading base-10 integer of `raw`.
///
/// `"12"`, `" 12 "`, `"12abc"` and `"12.9"` all yield `12`. Returns `None`
/// when no digit follows the optional sign. Magnitudes beyond `i64` saturate.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].bytes().fold(0_i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Coerce a count field (questions, minutes). Unparseable text and negative
/// values become 0.
#[must_use]
pub fn coerce_count(raw: &str) -> u32 {
    parse_leading_int(raw).map_or(0, |n| u32::try_from(n.max(0)).unwrap_or(u32::MAX))
}

/// Coerce a daily goal. Unparseable text and values below 1 become 1.
#[must_use]
pub fn coerce_daily_goal(raw: &str) -> u32 {
    parse_leading_int(raw)
        .filter(|n| *n >= i64::from(MIN_DAILY_GOAL))
        .map_or(MIN_DAILY_GOAL, |n| u32::try_from(n).unwrap_or(u32::MAX))
}

/// Split a comma-separated topic list, trimming entries and dropping blanks.
#[must_use]
pub fn split_topics(raw_csv: &str) -> Vec<String> {
    raw_csv
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
