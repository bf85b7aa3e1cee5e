//! Daily statistics and the composite focus score.
//!
//! The score rewards total focus time and long sessions, penalizes excessive
//! context switching and adds a bonus for deep work:
//!
//! | component       | rule                                   | range     |
//! |-----------------|----------------------------------------|-----------|
//! | focus time      | `total / 240 * 50`                     | 0..=50    |
//! | average session | `avg / 30 * 30`                        | 0..=30    |
//! | switch penalty  | `(switches - 5) * 2`, first 5 are free | 0..       |
//! | deep work bonus | 10 per session of 45 minutes or more   | 0..=20    |
//!
//! The sum is clamped to `0..=100`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::event::LogEvent;
use crate::event_kind::EventKind;
use crate::session::FocusSession;

/// Total focus minutes at which the focus-time component saturates.
pub const FOCUS_TIME_TARGET_MINUTES: f64 = 240.0;
/// Average session length at which the session component saturates.
pub const AVG_SESSION_TARGET_MINUTES: f64 = 30.0;
/// Switches that cost nothing.
pub const FREE_SWITCHES: u32 = 5;
/// Minimum length of a deep work session.
pub const DEEP_WORK_MINUTES: f64 = 45.0;

const FOCUS_TIME_MAX: f64 = 50.0;
const AVG_SESSION_MAX: f64 = 30.0;
const SWITCH_PENALTY_PER_SWITCH: f64 = 2.0;
const DEEP_WORK_BONUS_PER_SESSION: f64 = 10.0;
const DEEP_WORK_BONUS_MAX: f64 = 20.0;
const SCORE_MAX: f64 = 100.0;

/// Summary of one log window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyStats {
    /// Tasks done or deleted.
    pub cleared: u32,
    /// `SWITCH_FOCUS` events.
    pub switches: u32,
    pub total_focus_minutes: f64,
    pub avg_focus_minutes: f64,
    pub longest_focus_minutes: f64,
    /// Composite score in `0..=100`.
    pub score: f64,
}

/// The individual score components before clamping.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub focus_time: f64,
    pub avg_session: f64,
    pub switch_penalty: f64,
    pub deep_work_bonus: f64,
    pub deep_work_sessions: u32,
}

impl ScoreBreakdown {
    /// Combines the components into the clamped score.
    pub fn total(&self) -> f64 {
        (self.focus_time + self.avg_session - self.switch_penalty + self.deep_work_bonus)
            .clamp(0.0, SCORE_MAX)
    }
}

/// Qualitative label for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRating {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl ScoreRating {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Fair
        } else {
            Self::NeedsWork
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsWork => "Needs Work",
        }
    }
}

impl fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default)]
struct EventCounts {
    cleared: u32,
    switches: u32,
}

fn count_events(events: &[LogEvent]) -> EventCounts {
    let mut counts = EventCounts::default();
    for event in events {
        match event.kind {
            EventKind::TaskDone | EventKind::TaskDeleted => counts.cleared += 1,
            EventKind::SwitchFocus => counts.switches += 1,
            EventKind::TaskCreated
            | EventKind::TaskEdited
            | EventKind::MoveToActive
            | EventKind::MoveToLater
            | EventKind::ClearFocus => {}
        }
    }
    counts
}

/// Session-derived figures shared by the statistics and the score.
#[derive(Debug, Default)]
struct FocusFigures {
    total: f64,
    avg: f64,
    longest: f64,
    deep_work_sessions: u32,
}

impl FocusFigures {
    #[expect(clippy::cast_precision_loss, reason = "session counts are tiny")]
    fn from_sessions(sessions: &[FocusSession]) -> Self {
        // Accumulate from +0.0: an empty f64 sum() yields -0.0
        let mut figures = Self::default();
        for session in sessions {
            figures.total += session.duration_minutes;
            figures.longest = figures.longest.max(session.duration_minutes);
            if session.duration_minutes >= DEEP_WORK_MINUTES {
                figures.deep_work_sessions = figures.deep_work_sessions.saturating_add(1);
            }
        }
        if !sessions.is_empty() {
            figures.avg = figures.total / sessions.len() as f64;
        }
        figures
    }

    fn breakdown(&self, switches: u32) -> ScoreBreakdown {
        ScoreBreakdown {
            focus_time: (self.total / FOCUS_TIME_TARGET_MINUTES * FOCUS_TIME_MAX)
                .min(FOCUS_TIME_MAX),
            avg_session: (self.avg / AVG_SESSION_TARGET_MINUTES * AVG_SESSION_MAX)
                .min(AVG_SESSION_MAX),
            switch_penalty: f64::from(switches.saturating_sub(FREE_SWITCHES))
                * SWITCH_PENALTY_PER_SWITCH,
            deep_work_bonus: (f64::from(self.deep_work_sessions) * DEEP_WORK_BONUS_PER_SESSION)
                .min(DEEP_WORK_BONUS_MAX),
            deep_work_sessions: self.deep_work_sessions,
        }
    }
}

/// Computes the score components from the sessions and the switch count.
pub fn score_breakdown(sessions: &[FocusSession], switches: u32) -> ScoreBreakdown {
    FocusFigures::from_sessions(sessions).breakdown(switches)
}

/// Computes daily statistics and the focus score.
///
/// Counts come from `events`; focus figures come from `sessions`, which should
/// be the reconstruction of the same events. An empty log scores 0.
pub fn daily_stats(events: &[LogEvent], sessions: &[FocusSession]) -> DailyStats {
    let counts = count_events(events);
    let figures = FocusFigures::from_sessions(sessions);

    DailyStats {
        cleared: counts.cleared,
        switches: counts.switches,
        total_focus_minutes: figures.total,
        avg_focus_minutes: figures.avg,
        longest_focus_minutes: figures.longest,
        score: figures.breakdown(counts.switches).total(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::focus_sessions;
    use crate::test_support::{at, clear, event, mins, switch};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "zero is exact")]
    fn empty_log_scores_zero() {
        let stats = daily_stats(&[], &[]);
        assert_eq!(stats, DailyStats::default());
        assert_eq!(stats.score, 0.0);
        assert_eq!(stats.avg_focus_minutes, 0.0);
    }

    #[test]
    fn empty_log_figures_are_positive_zero() {
        let stats = daily_stats(&[], &[]);
        assert!(stats.total_focus_minutes.is_sign_positive());
        assert!(stats.avg_focus_minutes.is_sign_positive());
        assert!(stats.longest_focus_minutes.is_sign_positive());
        assert!(score_breakdown(&[], 0).focus_time.is_sign_positive());

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"total_focus_minutes\":0.0"), "{json}");
        assert!(!json.contains("-0.0"), "{json}");
    }

    #[test]
    fn stats_score_agrees_with_breakdown() {
        let events = vec![
            switch(mins(0), 1),
            switch(mins(50), 2),
            event(mins(70), EventKind::TaskDone, 2),
        ];
        let sessions = focus_sessions(&events, mins(90));
        let stats = daily_stats(&events, &sessions);
        let breakdown = score_breakdown(&sessions, stats.switches);

        assert!(close(stats.score, breakdown.total()));
        assert!(close(stats.avg_focus_minutes, 35.0));
        assert!(close(breakdown.avg_session, 30.0));
    }

    #[test]
    fn single_deep_session() {
        let events = vec![switch(at(9, 0), 1), event(at(9, 45), EventKind::TaskDone, 1)];
        let sessions = focus_sessions(&events, at(12, 0));
        let stats = daily_stats(&events, &sessions);
        let breakdown = score_breakdown(&sessions, stats.switches);

        assert_eq!(stats.cleared, 1);
        assert_eq!(stats.switches, 1);
        assert!(close(stats.total_focus_minutes, 45.0));
        assert!(close(stats.avg_focus_minutes, 45.0));
        assert!(close(stats.longest_focus_minutes, 45.0));
        assert!(close(breakdown.deep_work_bonus, 10.0));
        assert_eq!(breakdown.deep_work_sessions, 1);
        // 45/240*50 + 30 + 10
        assert!(close(stats.score, 9.375 + 30.0 + 10.0));
    }

    #[test]
    fn six_switches_cost_two_points() {
        let events: Vec<_> = (0..6).map(|i| switch(mins(i * 5), 1)).collect();
        let sessions = focus_sessions(&events, mins(60));
        let stats = daily_stats(&events, &sessions);
        let breakdown = score_breakdown(&sessions, stats.switches);

        assert_eq!(stats.switches, 6);
        assert!(close(breakdown.switch_penalty, 2.0));
        assert_eq!(sessions.len(), 6);
        assert_eq!(sessions.last().map(|s| s.end_time), Some(mins(60)));
    }

    #[test]
    fn cleared_counts_done_and_deleted() {
        let events = vec![
            event(mins(0), EventKind::TaskDone, 1),
            event(mins(1), EventKind::TaskDeleted, 2),
            event(mins(2), EventKind::MoveToLater, 3),
            clear(mins(3)),
        ];
        let stats = daily_stats(&events, &[]);
        assert_eq!(stats.cleared, 2);
        assert_eq!(stats.switches, 0);
    }

    #[test]
    fn components_saturate() {
        let events = vec![
            switch(mins(0), 1),
            switch(mins(120), 2),
            switch(mins(240), 3),
            clear(mins(360)),
        ];
        let sessions = focus_sessions(&events, mins(400));
        let breakdown = score_breakdown(&sessions, 3);

        assert!(close(breakdown.focus_time, 50.0));
        assert!(close(breakdown.avg_session, 30.0));
        assert!(close(breakdown.deep_work_bonus, 20.0));
        assert_eq!(breakdown.deep_work_sessions, 3);
        assert!(close(breakdown.total(), 100.0));
    }

    #[test]
    fn heavy_switching_floors_at_zero() {
        let events: Vec<_> = (0..40).map(|i| switch(mins(i), i.unsigned_abs())).collect();
        let sessions = focus_sessions(&events, mins(40));
        let stats = daily_stats(&events, &sessions);
        assert!(close(stats.score, 0.0));
    }

    #[test]
    fn score_stays_in_range() {
        for switches in [0, 5, 6, 20, 200] {
            for minutes in [0, 1, 44, 45, 300, 2000] {
                let events = vec![switch(mins(0), 1), clear(mins(minutes))];
                let sessions = focus_sessions(&events, mins(minutes));
                let score = score_breakdown(&sessions, switches).total();
                assert!((0.0..=100.0).contains(&score), "score {score} out of range");
            }
        }
    }

    #[test]
    fn rating_thresholds() {
        assert_eq!(ScoreRating::from_score(100.0), ScoreRating::Excellent);
        assert_eq!(ScoreRating::from_score(80.0), ScoreRating::Excellent);
        assert_eq!(ScoreRating::from_score(79.9), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(60.0), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(40.0), ScoreRating::Fair);
        assert_eq!(ScoreRating::from_score(39.99), ScoreRating::NeedsWork);
        assert_eq!(ScoreRating::NeedsWork.to_string(), "Needs Work");
    }
}
