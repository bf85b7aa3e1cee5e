//! Display helpers for derived records.

use chrono::Timelike;

use crate::event::LogEvent;
use crate::session::FocusSession;

/// Hour range shown when there is nothing to size the axis from.
pub const DEFAULT_HOUR_RANGE: (u32, u32) = (8, 18);

/// Formats a minute count for display.
///
/// Under a minute shows `<1m`, under an hour `Nm`, otherwise `Hh Mm` (or `Hh`
/// on the hour). Rounds to the nearest minute; negative and NaN input show `<1m`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is finite, non-negative and rounded"
)]
pub fn format_minutes(minutes: f64) -> String {
    if minutes.is_nan() || minutes < 1.0 {
        return "<1m".to_string();
    }
    let rounded = minutes.round().min(f64::from(u32::MAX)) as u64;
    let hours = rounded / 60;
    let mins = rounded % 60;

    match (hours, mins) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Hours spanned by the log, padded by one hour on each side.
pub fn active_hour_range(events: &[LogEvent]) -> (u32, u32) {
    let hours = events.iter().map(|e| e.time.hour());
    padded_range(hours.clone().min(), hours.max())
}

/// Hours spanned by the sessions, padded by one hour on each side.
///
/// A session ending past the top of an hour extends the range into that hour.
pub fn timeline_hour_range(sessions: &[FocusSession]) -> (u32, u32) {
    let first = sessions.iter().map(|s| s.start_time.hour()).min();
    let last = sessions
        .iter()
        .map(|s| s.end_time.hour() + u32::from(s.end_time.minute() > 0))
        .max();
    padded_range(first, last)
}

fn padded_range(first: Option<u32>, last: Option<u32>) -> (u32, u32) {
    match (first, last) {
        (Some(first), Some(last)) => (first.saturating_sub(1), (last + 1).min(23)),
        _ => DEFAULT_HOUR_RANGE,
    }
}
