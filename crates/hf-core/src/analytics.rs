//! The full analytics pass over one log snapshot.

use serde::Serialize;

use crate::aggregate::{
    HOURS_PER_DAY, HourlyActivity, SwitchData, TaskFocusTime, hourly_activity, switch_frequency,
    task_focus_times,
};
use crate::event::LogEvent;
use crate::score::{DailyStats, ScoreBreakdown, daily_stats, score_breakdown};
use crate::session::{FocusSession, focus_sessions};
use crate::slots::{SlotData, slot_utilization};
use crate::types::Timestamp;

/// Every derived view of a log snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analytics {
    pub sessions: Vec<FocusSession>,
    pub task_focus: Vec<TaskFocusTime>,
    pub hourly: [HourlyActivity; HOURS_PER_DAY],
    pub switches: [SwitchData; HOURS_PER_DAY],
    pub slots: SlotData,
    pub stats: DailyStats,
    pub breakdown: ScoreBreakdown,
}

impl Analytics {
    /// Runs session reconstruction once and derives everything else from it.
    ///
    /// `now` closes a session still open at the end of the log and stamps the
    /// latest slot snapshot. `current_active` is the number of tasks active
    /// right now.
    pub fn compute(events: &[LogEvent], now: Timestamp, current_active: u8) -> Self {
        Self::with_sessions(events, focus_sessions(events, now), now, current_active)
    }

    /// Derives every view from sessions the caller already reconstructed.
    ///
    /// Counts, histograms and slot history come from `events`; focus figures
    /// come from `sessions`. Used when sessions were cut to a window that
    /// `events` alone cannot reproduce.
    pub fn with_sessions(
        events: &[LogEvent],
        sessions: Vec<FocusSession>,
        now: Timestamp,
        current_active: u8,
    ) -> Self {
        let stats = daily_stats(events, &sessions);

        Self {
            task_focus: task_focus_times(&sessions),
            hourly: hourly_activity(events),
            switches: switch_frequency(events),
            slots: slot_utilization(events, current_active, now),
            breakdown: score_breakdown(&sessions, stats.switches),
            stats,
            sessions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_kind::EventKind;
    use crate::test_support::{at, event, mins, switch};

    #[test]
    fn empty_log_is_all_zero() {
        let analytics = Analytics::compute(&[], at(12, 0), 0);

        assert!(analytics.sessions.is_empty());
        assert!(analytics.task_focus.is_empty());
        assert!(analytics.hourly.iter().all(|h| h.count == 0));
        assert!(analytics.switches.iter().all(|h| h.count == 0));
        assert_eq!(analytics.slots.snapshots.len(), 1);
        assert_eq!(analytics.stats, DailyStats::default());
    }

    #[test]
    fn recomputing_the_same_snapshot_is_identical() {
        let events = vec![
            event(mins(-30), EventKind::TaskCreated, 1),
            switch(mins(0), 1),
            switch(mins(20), 2),
            event(mins(65), EventKind::TaskDone, 2),
            event(mins(70), EventKind::MoveToLater, 1),
        ];
        let first = Analytics::compute(&events, mins(120), 2);
        let second = Analytics::compute(&events, mins(120), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn score_matches_breakdown_total() {
        let events = vec![switch(mins(0), 1), event(mins(50), EventKind::TaskDone, 1)];
        let analytics = Analytics::compute(&events, mins(60), 1);

        assert!((analytics.stats.score - analytics.breakdown.total()).abs() < f64::EPSILON);
        assert_eq!(analytics.breakdown.deep_work_sessions, 1);
        assert_eq!(analytics.task_focus.len(), 1);
    }

    #[test]
    fn open_focus_closes_at_now_with_penalty() {
        let events: Vec<_> = (0..6).map(|i| switch(mins(i * 10), i.unsigned_abs())).collect();
        let analytics = Analytics::compute(&events, mins(90), 3);

        assert_eq!(analytics.stats.switches, 6);
        assert!((analytics.breakdown.switch_penalty - 2.0).abs() < f64::EPSILON);
        assert_eq!(analytics.sessions.last().map(|s| s.end_time), Some(mins(90)));
    }
}
