//! ID generation and well-known constants.
//!
//! Entity IDs are millisecond timestamps taken at creation time. Two entities
//! created within the same millisecond would collide, so [`next_id`] bumps the
//! candidate past the largest ID already in use.

use chrono::Utc;

/// Key under which the whole application document is persisted.
pub const STORAGE_KEY: &str = "medstudy-data";

/// Topic assigned to a discipline created without any topics.
pub const DEFAULT_TOPIC: &str = "General";

/// Topic recorded when the user picks "enter a custom topic" but leaves it blank.
pub const OTHER_TOPIC_LABEL: &str = "Other";

/// Daily goal used when no settings were persisted.
pub const DEFAULT_DAILY_GOAL: u32 = 3;

/// Lowest accepted daily goal.
pub const MIN_DAILY_GOAL: u32 = 1;

/// Current wall-clock time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Pick a new ID from a timestamp candidate and the largest ID already taken.
///
/// Returns `now_millis` unless it is not strictly greater than `taken_max`, in
/// which case `taken_max + 1` is used. IDs therefore keep creation order and
/// never repeat within one document.
#[must_use]
pub fn next_id(now_millis: i64, taken_max: Option<i64>) -> i64 {
    match taken_max {
        Some(max) if max >= now_millis => max.saturating_add(1),
        _ => now_millis,
    }
}
