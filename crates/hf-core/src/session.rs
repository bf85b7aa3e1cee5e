//! Focus session reconstruction.
//!
//! Replays the activity log forward and cuts it into discrete intervals during
//! which exactly one task was the designated focus.
//!
//! # Rules
//!
//! 1. `SWITCH_FOCUS` closes the open session (if any) and opens a new one, even
//!    when the task does not change.
//! 2. `CLEAR_FOCUS`, `TASK_DONE` and `TASK_DELETED` close the open session,
//!    whichever task they name.
//! 3. A session still open after the last event is closed at the caller's `now`.
//! 4. Sessions of zero or negative length are dropped.

use serde::{Deserialize, Serialize};

use crate::event::{LogEvent, chronological};
use crate::event_kind::EventKind;
use crate::types::{TaskId, Timestamp};

const MS_PER_MINUTE: f64 = 60_000.0;

/// A closed interval `[start_time, end_time)` of focus on one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusSession {
    pub task_id: TaskId,
    /// Task text as recorded by the `SWITCH_FOCUS` that opened the session.
    pub task_name: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    /// Always strictly positive.
    pub duration_minutes: f64,
}

/// Current focus state during replay.
#[derive(Debug, Clone)]
enum FocusState {
    /// A task is focused since `started_at`.
    Focused {
        task_id: TaskId,
        task_name: String,
        started_at: Timestamp,
    },
    /// Nothing is focused.
    Unfocused,
}

impl FocusState {
    /// Closes the open session at `end` and pushes it if it has positive length.
    fn close(self, end: Timestamp, sessions: &mut Vec<FocusSession>) {
        if let Self::Focused {
            task_id,
            task_name,
            started_at,
        } = self
        {
            let duration_minutes = minutes_between(started_at, end);
            if duration_minutes > 0.0 {
                sessions.push(FocusSession {
                    task_id,
                    task_name,
                    start_time: started_at,
                    end_time: end,
                    duration_minutes,
                });
            }
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "millisecond spans of a personal log stay far below 2^52"
)]
fn minutes_between(start: Timestamp, end: Timestamp) -> f64 {
    (end - start).num_milliseconds() as f64 / MS_PER_MINUTE
}

/// Reconstructs focus sessions from the log.
///
/// `events` may be in any order. Events that need a task id but lack one can
/// neither open nor close a session. `now` closes a session left open at the
/// end of the log.
pub fn focus_sessions(events: &[LogEvent], now: Timestamp) -> Vec<FocusSession> {
    let mut sessions = Vec::new();
    let mut state = FocusState::Unfocused;

    for event in chronological(events) {
        match event.kind {
            EventKind::SwitchFocus => {
                let Some(task_id) = event.required_task() else {
                    continue;
                };
                std::mem::replace(
                    &mut state,
                    FocusState::Focused {
                        task_id,
                        task_name: event.task_name.clone(),
                        started_at: event.time,
                    },
                )
                .close(event.time, &mut sessions);
            }
            EventKind::TaskDone | EventKind::TaskDeleted => {
                if event.required_task().is_some() {
                    std::mem::replace(&mut state, FocusState::Unfocused)
                        .close(event.time, &mut sessions);
                }
            }
            EventKind::ClearFocus => {
                std::mem::replace(&mut state, FocusState::Unfocused)
                    .close(event.time, &mut sessions);
            }
            EventKind::TaskCreated
            | EventKind::TaskEdited
            | EventKind::MoveToActive
            | EventKind::MoveToLater => {}
        }
    }

    state.close(now, &mut sessions);
    sessions
}

/// Restricts sessions to the half-open window `[start, end)`.
///
/// Sessions crossing a boundary are cut at it and their duration recomputed.
/// Sessions left with no length inside the window are dropped.
pub fn clip_sessions(
    sessions: &[FocusSession],
    start: Timestamp,
    end: Timestamp,
) -> Vec<FocusSession> {
    sessions
        .iter()
        .filter_map(|s| {
            let start_time = s.start_time.max(start);
            let end_time = s.end_time.min(end);
            let duration_minutes = minutes_between(start_time, end_time);
            (duration_minutes > 0.0).then(|| FocusSession {
                task_id: s.task_id,
                task_name: s.task_name.clone(),
                start_time,
                end_time,
                duration_minutes,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{at, clear, event, mins, switch};

    fn ids(sessions: &[FocusSession]) -> Vec<u64> {
        sessions.iter().map(|s| s.task_id.get()).collect()
    }

    #[test]
    fn empty_log_has_no_sessions() {
        assert!(focus_sessions(&[], at(12, 0)).is_empty());
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "whole-minute spans are exact")]
    fn switch_then_done_is_one_session() {
        let events = vec![switch(at(9, 0), 1), event(at(9, 45), EventKind::TaskDone, 1)];
        let sessions = focus_sessions(&events, at(12, 0));

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].task_id, TaskId::new(1));
        assert_eq!(sessions[0].start_time, at(9, 0));
        assert_eq!(sessions[0].end_time, at(9, 45));
        assert_eq!(sessions[0].duration_minutes, 45.0);
    }

    #[test]
    fn switching_tasks_closes_previous_session() {
        let events = vec![switch(mins(0), 1), switch(mins(20), 2), clear(mins(50))];
        let sessions = focus_sessions(&events, mins(120));

        assert_eq!(ids(&sessions), vec![1, 2]);
        assert_eq!(sessions[0].end_time, mins(20));
        assert_eq!(sessions[1].start_time, mins(20));
        assert_eq!(sessions[1].end_time, mins(50));
    }

    #[test]
    fn repeated_switch_to_same_task_is_not_merged() {
        let events = vec![switch(mins(0), 1), switch(mins(10), 1), clear(mins(30))];
        let sessions = focus_sessions(&events, mins(60));

        assert_eq!(ids(&sessions), vec![1, 1]);
        assert_eq!(sessions[0].end_time, mins(10));
        assert_eq!(sessions[1].start_time, mins(10));
    }

    #[test]
    fn open_session_closes_at_now() {
        let events = vec![switch(mins(0), 3)];
        let sessions = focus_sessions(&events, mins(90));

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].end_time, mins(90));
        assert!((sessions[0].duration_minutes - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn now_before_open_session_start_emits_nothing() {
        let events = vec![switch(mins(30), 3)];
        assert!(focus_sessions(&events, mins(10)).is_empty());
    }

    #[test]
    fn done_on_other_task_still_ends_focus() {
        let events = vec![switch(mins(0), 1), event(mins(15), EventKind::TaskDeleted, 7)];
        let sessions = focus_sessions(&events, mins(60));

        assert_eq!(ids(&sessions), vec![1]);
        assert_eq!(sessions[0].end_time, mins(15));
    }

    #[test]
    fn zero_length_sessions_are_dropped() {
        let events = vec![switch(mins(0), 1), switch(mins(0), 2), clear(mins(5))];
        let sessions = focus_sessions(&events, mins(60));

        assert_eq!(ids(&sessions), vec![2]);
    }

    #[test]
    fn input_order_does_not_matter() {
        let events = vec![clear(mins(40)), switch(mins(25), 2), switch(mins(0), 1)];
        let sessions = focus_sessions(&events, mins(60));

        assert_eq!(ids(&sessions), vec![1, 2]);
        assert_eq!(sessions[1].end_time, mins(40));
    }

    #[test]
    fn events_without_task_id_are_ignored() {
        let mut orphan_switch = switch(mins(10), 2);
        orphan_switch.task_id = None;
        let mut orphan_done = event(mins(20), EventKind::TaskDone, 1);
        orphan_done.task_id = None;

        let events = vec![switch(mins(0), 1), orphan_switch, orphan_done, clear(mins(30))];
        let sessions = focus_sessions(&events, mins(60));

        assert_eq!(ids(&sessions), vec![1]);
        assert_eq!(sessions[0].end_time, mins(30));
    }

    #[test]
    fn other_kinds_do_not_touch_focus() {
        let events = vec![
            switch(mins(0), 1),
            event(mins(5), EventKind::TaskCreated, 2),
            event(mins(6), EventKind::TaskEdited, 1),
            event(mins(7), EventKind::MoveToLater, 2),
            event(mins(8), EventKind::MoveToActive, 2),
            clear(mins(20)),
        ];
        let sessions = focus_sessions(&events, mins(60));

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].end_time, mins(20));
    }

    #[test]
    fn sessions_never_overlap() {
        let events = vec![
            switch(mins(0), 1),
            switch(mins(12), 2),
            event(mins(30), EventKind::TaskDone, 2),
            switch(mins(31), 3),
            switch(mins(31), 1),
            clear(mins(55)),
            switch(mins(70), 4),
        ];
        let sessions = focus_sessions(&events, mins(100));

        assert!(sessions.iter().all(|s| s.duration_minutes > 0.0));
        for pair in sessions.windows(2) {
            assert!(pair[0].end_time <= pair[1].start_time);
        }
    }

    #[test]
    fn clipping_cuts_sessions_at_window_edges() {
        let events = vec![
            switch(mins(-30), 1),
            switch(mins(30), 2),
            switch(mins(90), 3),
            clear(mins(150)),
        ];
        let sessions = focus_sessions(&events, mins(200));
        let clipped = clip_sessions(&sessions, mins(0), mins(120));

        assert_eq!(ids(&clipped), vec![1, 2, 3]);
        assert_eq!(clipped[0].start_time, mins(0));
        assert!((clipped[0].duration_minutes - 30.0).abs() < f64::EPSILON);
        assert_eq!(clipped[2].end_time, mins(120));
        assert!((clipped[2].duration_minutes - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn clipping_drops_sessions_outside_window() {
        let events = vec![switch(mins(0), 1), switch(mins(60), 2), clear(mins(90))];
        let sessions = focus_sessions(&events, mins(200));

        let clipped = clip_sessions(&sessions, mins(60), mins(120));
        assert_eq!(ids(&clipped), vec![2]);
        assert!(clip_sessions(&sessions, mins(90), mins(120)).is_empty());
    }
}
