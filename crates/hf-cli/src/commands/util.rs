//! Shared utilities for CLI commands.

use std::sync::LazyLock;

use anyhow::Context;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone};
use hf_core::Timestamp;
use regex::Regex;

use crate::cli::ReportArgs;

/// Pre-compiled regex for relative time parsing.
static RELATIVE_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s+(minute|hour|day|week)s?\s+ago$").expect("relative time regex is valid")
});

/// Conservative bounds for relative time parsing (~1000 years in minutes).
const MAX_RELATIVE_MINUTES: i64 = 1000 * 365 * 24 * 60;

/// Parse a datetime string as either ISO 8601 or relative to `now`.
///
/// Supports:
/// - ISO 8601: "2026-01-15T10:30:00Z"
/// - Relative: "2 hours ago", "30 minutes ago", "1 day ago", "1 week ago"
pub fn parse_datetime(s: &str, now: Timestamp) -> anyhow::Result<Timestamp> {
    // Try ISO 8601 first
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }

    // Try relative time: "N hours/minutes/days/weeks ago"
    let Some(caps) = RELATIVE_TIME_RE.captures(s) else {
        anyhow::bail!(
            "Invalid datetime: {s}. Use ISO 8601 (e.g., 2026-01-15T10:30:00Z) or relative (e.g., '2 hours ago')"
        );
    };

    let n: i64 = caps[1]
        .parse()
        .context("failed to parse number in relative time")?;

    let (max_for_unit, minutes_per_unit) = match &caps[2] {
        "minute" => (MAX_RELATIVE_MINUTES, 1),
        "hour" => (MAX_RELATIVE_MINUTES / 60, 60),
        "day" => (MAX_RELATIVE_MINUTES / (60 * 24), 60 * 24),
        "week" => (MAX_RELATIVE_MINUTES / (60 * 24 * 7), 60 * 24 * 7),
        unit => anyhow::bail!("Unknown time unit: {unit}"),
    };

    if n > max_for_unit {
        anyhow::bail!("Relative time value too large: {n} {}", &caps[2]);
    }

    // Safe to create Duration now that we've validated the range
    let duration = Duration::minutes(n * minutes_per_unit);
    Ok(now - duration)
}

// ========== Report Period ==========

/// Which part of the log a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Yesterday,
    Date(NaiveDate),
    All,
}

impl Period {
    pub fn from_args(args: &ReportArgs) -> Self {
        if args.all {
            Self::All
        } else if let Some(date) = args.date {
            Self::Date(date)
        } else if args.yesterday {
            Self::Yesterday
        } else {
            Self::Day
        }
    }

    /// The calendar day covered, relative to `today`. `None` for the whole log.
    pub fn date(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Day => Some(today),
            Self::Yesterday => Some(today - Duration::days(1)),
            Self::Date(date) => Some(date),
            Self::All => None,
        }
    }
}

/// Midnight-to-midnight boundaries of `day` in the offset of `reference`, as a
/// half-open interval.
pub fn day_boundaries(day: NaiveDate, reference: Timestamp) -> (Timestamp, Timestamp) {
    let offset = *reference.offset();
    let start_local = day.and_time(NaiveTime::MIN);
    let utc = |local: chrono::NaiveDateTime| {
        offset.from_utc_datetime(&(local - Duration::seconds(i64::from(offset.local_minus_utc()))))
    };
    (utc(start_local), utc(start_local + Duration::days(1)))
}

// ========== Progress Bar ==========

/// Generates a 10-character progress bar.
/// Values <5% of max get a single block for visibility.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "ratio is clamped to [0, 1] before scaling"
)]
pub fn progress_bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value.is_nan() {
        return "░░░░░░░░░░".to_string();
    }

    let ratio = (value / max).clamp(0.0, 1.0);
    let filled = if ratio < 0.05 && value > 0.0 {
        1
    } else {
        (ratio * 10.0).round() as usize
    };

    let empty = 10 - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
