//! Activity-log analytics for the focus tracker.
//!
//! This crate turns the tracker's append-only log of task lifecycle events
//! into derived views:
//! - Focus sessions: per-task focus intervals replayed from the log
//! - Aggregates: per-task totals, hourly activity and focus-switch histograms
//! - Slot utilization: historical active-task counts by backward replay
//! - Score: daily statistics and a bounded productivity score
//!
//! Every function is pure. The caller passes the reference time and the
//! current active-task count explicitly.

mod aggregate;
mod analytics;
pub mod demo;
mod event;
pub mod event_kind;
pub mod format;
mod score;
mod session;
mod slots;
mod types;

#[cfg(test)]
mod test_support;

pub use aggregate::{
    HOURS_PER_DAY, HourlyActivity, PALETTE, SwitchData, TaskFocusTime, TimelineLane,
    hourly_activity, palette_color, switch_frequency, task_focus_times, timeline_lanes,
};
pub use analytics::Analytics;
pub use event::{LogEvent, chronological, events_between};
pub use event_kind::EventKind;
pub use score::{DailyStats, ScoreBreakdown, ScoreRating, daily_stats, score_breakdown};
pub use session::{FocusSession, clip_sessions, focus_sessions};
pub use slots::{SlotData, SlotSnapshot, slot_utilization};
pub use types::{CoreError, SLOT_CAPACITY, TaskId, Timestamp};
