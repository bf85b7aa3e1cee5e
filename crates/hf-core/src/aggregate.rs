//! Aggregations over the log and its focus sessions.
//!
//! All functions here are single linear passes. Hour buckets always cover the
//! full day (0-23), empty hours included.

use std::collections::HashMap;

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::event::LogEvent;
use crate::event_kind::EventKind;
use crate::session::FocusSession;
use crate::types::TaskId;

/// Hours in a day, and the length of every hourly histogram.
pub const HOURS_PER_DAY: usize = 24;

/// Display colors handed out to tasks by first-seen order.
pub const PALETTE: [&str; 8] = [
    "#f97316", // orange
    "#3b82f6", // blue
    "#10b981", // emerald
    "#8b5cf6", // violet
    "#ec4899", // pink
    "#06b6d4", // cyan
    "#f59e0b", // amber
    "#6366f1", // indigo
];

/// Palette color for the task first seen at position `index`.
pub const fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Total focus time for one task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskFocusTime {
    pub task_id: TaskId,
    /// Most recently seen name of the task.
    pub task_name: String,
    pub total_minutes: f64,
    pub color: &'static str,
}

/// Event counts for one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HourlyActivity {
    pub hour: u32,
    /// Every event in this hour.
    pub count: u32,
    /// `TASK_DONE` events.
    pub done_count: u32,
    /// `SWITCH_FOCUS` events.
    pub focus_count: u32,
}

/// Focus switches in one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SwitchData {
    pub hour: u32,
    pub count: u32,
}

/// Sessions of one task, for drawing a timeline row.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLane<'a> {
    pub task_id: TaskId,
    /// Name from the task's first session.
    pub task_name: &'a str,
    pub color: &'static str,
    pub sessions: Vec<&'a FocusSession>,
}

/// Sums focus minutes per task.
///
/// Colors follow first-appearance order. The result is sorted by total time,
/// descending; equal totals keep first-appearance order.
pub fn task_focus_times(sessions: &[FocusSession]) -> Vec<TaskFocusTime> {
    let mut totals: Vec<TaskFocusTime> = Vec::new();
    let mut index: HashMap<TaskId, usize> = HashMap::new();

    for session in sessions {
        if let Some(&i) = index.get(&session.task_id) {
            let entry = &mut totals[i];
            entry.total_minutes += session.duration_minutes;
            entry.task_name.clone_from(&session.task_name);
        } else {
            index.insert(session.task_id, totals.len());
            totals.push(TaskFocusTime {
                task_id: session.task_id,
                task_name: session.task_name.clone(),
                total_minutes: session.duration_minutes,
                color: palette_color(totals.len()),
            });
        }
    }

    totals.sort_by(|a, b| b.total_minutes.total_cmp(&a.total_minutes));
    totals
}

/// Counts events per hour of day, using the hour in each timestamp's own offset.
pub fn hourly_activity(events: &[LogEvent]) -> [HourlyActivity; HOURS_PER_DAY] {
    let mut hours: [HourlyActivity; HOURS_PER_DAY] = std::array::from_fn(|h| HourlyActivity {
        hour: hour_label(h),
        ..HourlyActivity::default()
    });

    for event in events {
        let bucket = &mut hours[hour_index(event)];
        bucket.count += 1;
        match event.kind {
            EventKind::TaskDone => bucket.done_count += 1,
            EventKind::SwitchFocus => bucket.focus_count += 1,
            EventKind::TaskCreated
            | EventKind::TaskDeleted
            | EventKind::TaskEdited
            | EventKind::MoveToActive
            | EventKind::MoveToLater
            | EventKind::ClearFocus => {}
        }
    }

    hours
}

/// Counts `SWITCH_FOCUS` events per hour of day.
pub fn switch_frequency(events: &[LogEvent]) -> [SwitchData; HOURS_PER_DAY] {
    let mut hours: [SwitchData; HOURS_PER_DAY] = std::array::from_fn(|h| SwitchData {
        hour: hour_label(h),
        count: 0,
    });

    for event in events {
        match event.kind {
            EventKind::SwitchFocus => hours[hour_index(event)].count += 1,
            EventKind::TaskCreated
            | EventKind::TaskDone
            | EventKind::TaskDeleted
            | EventKind::TaskEdited
            | EventKind::MoveToActive
            | EventKind::MoveToLater
            | EventKind::ClearFocus => {}
        }
    }

    hours
}

/// Groups sessions into one lane per task, in first-seen order.
pub fn timeline_lanes(sessions: &[FocusSession]) -> Vec<TimelineLane<'_>> {
    let mut lanes: Vec<TimelineLane<'_>> = Vec::new();
    let mut index: HashMap<TaskId, usize> = HashMap::new();

    for session in sessions {
        if let Some(&i) = index.get(&session.task_id) {
            lanes[i].sessions.push(session);
        } else {
            index.insert(session.task_id, lanes.len());
            lanes.push(TimelineLane {
                task_id: session.task_id,
                task_name: &session.task_name,
                color: palette_color(lanes.len()),
                sessions: vec![session],
            });
        }
    }

    lanes
}

fn hour_index(event: &LogEvent) -> usize {
    // hour() is always < 24
    event.time.hour() as usize
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "index is below HOURS_PER_DAY"
)]
const fn hour_label(index: usize) -> u32 {
    index as u32
}
