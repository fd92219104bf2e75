// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Last value handed out by [`now_rfc3339`], in nanoseconds since the epoch.
static LAST_ISSUED_NANOS: AtomicI64 = AtomicI64::new(i64::MIN);

/// Format a UTC timestamp as RFC3339 with nanosecond precision and a `Z` suffix.
///
/// Fixed width, so stored timestamps sort lexicographically in time order.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Current time in the stored timestamp format.
///
/// Strictly increasing within the process: two calls never return the same
/// value, even when the clock has not advanced in between.
pub fn now_rfc3339() -> String {
    let wall = Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX);
    let previous = LAST_ISSUED_NANOS
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(wall.max(last.saturating_add(1)))
        })
        .unwrap_or_else(|last| last);
    let issued = wall.max(previous.saturating_add(1));

    format_utc_rfc3339(DateTime::from_timestamp_nanos(issued))
}
