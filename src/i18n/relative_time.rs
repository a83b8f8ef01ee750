//! Relative-time display formatting.

use chrono::{DateTime, Utc};

/// How many days ago a timestamp may be before we fall back to a date.
const RELATIVE_WINDOW_DAYS: i64 = 30;

/// Formats how long ago `then` was, relative to `now`.
///
/// Timestamps in the future (clock skew) and ages under a minute render as
/// "moments ago". Ages beyond thirty days fall back to the calendar date.
#[must_use]
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);

    if elapsed.num_seconds() < 60 {
        return "moments ago".to_owned();
    }

    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }

    let days = elapsed.num_days();
    if days <= RELATIVE_WINDOW_DAYS {
        return plural(days, "day");
    }

    format!("on {}", then.format("%-d %B %Y"))
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
