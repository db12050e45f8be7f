//! Timestamp encoding
//!
//! Timestamps are stored as integer microseconds since the Unix epoch so
//! that ordering in SQL is exact. Equal timestamps are ordered by row id.

use chrono::{DateTime, Utc};
use melodia_core::{MelodiaError, Result};

/// Current time in storage encoding
pub(crate) fn now_micros() -> i64 {
    Utc::now().timestamp_micros()
}

/// Decode a stored timestamp
pub(crate) fn from_micros(micros: i64) -> Result<DateTime<Utc>> {
    let secs = micros.div_euclid(1_000_000);
    let nanos = (micros.rem_euclid(1_000_000) * 1_000) as u32;

    DateTime::from_timestamp(secs, nanos)
        .ok_or_else(|| MelodiaError::storage(format!("Invalid timestamp: {micros}")))
}
