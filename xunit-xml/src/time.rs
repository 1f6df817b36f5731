// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Formats a duration as seconds: whole milliseconds divided by 1000.
///
/// The value is printed with the shortest decimal representation that round-trips, with no
/// fixed precision: 5ms is `0.005`, 2s is `2`, and zero is `0`.
pub fn format_seconds(duration: Duration) -> String {
    let seconds = duration.as_millis() as f64 / 1000.0;
    seconds.to_string()
}

/// Formats a timestamp in the RFC 1123 form used by HTTP dates, e.g.
/// `Sun, 18 Oct 2026 09:05:03 GMT`.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
