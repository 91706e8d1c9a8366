// src/utils/date.rs

use chrono::Local;

/// Today's date from server wall-clock time, zero-padded `YYYY-MM-DD`.
///
/// Server-local, not visitor-local: visitors in other time zones see the
/// daily question set and leaderboard roll over at an offset from their own
/// midnight. Kept as-is pending a product decision.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
