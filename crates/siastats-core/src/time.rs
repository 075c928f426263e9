//! Millisecond-epoch conversion helpers.
//!
//! The historical series embed their timestamps as millisecond Unix epochs
//! (`time` or `date` fields). These helpers turn them into calendar time;
//! the client itself never converts timestamps.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Convert a millisecond Unix timestamp into a UTC-aware point in time.
///
/// `None` for values outside the representable date range.
pub fn readable_timestamp(unix_ms: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(unix_ms)
}

/// Timezone-unset variant of [`readable_timestamp`]: the same instant with
/// no timezone metadata attached.
pub fn readable_timestamp_naive(unix_ms: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(unix_ms).map(|dt| dt.naive_utc())
}
