//! ISO-8601 uptime formatting for the service metadata endpoint.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::types::Timestamp;

/// Format the time between `started_at` and `now` as an ISO-8601 duration,
/// e.g. `P0Y0M1DT1H1M1S`.
///
/// Elapsed seconds are laid onto the calendar starting at the Unix epoch, so
/// a "month" is as long as the corresponding month of 1970 and so on. A
/// `now` earlier than `started_at` yields a zero duration.
pub fn iso8601_uptime(started_at: Timestamp, now: Timestamp) -> String {
    let elapsed = (now - started_at).num_seconds().max(0);
    format_elapsed(elapsed)
}

/// Format a number of elapsed seconds as an ISO-8601 duration.
pub fn format_elapsed(elapsed_secs: i64) -> String {
    let t: DateTime<Utc> = DateTime::from_timestamp(elapsed_secs.max(0), 0).unwrap_or_default();

    format!(
        "P{}Y{}M{}DT{}H{}M{}S",
        t.year() - 1970,
        t.month0(),
        t.day0(),
        t.hour(),
        t.minute(),
        t.second()
    )
}
