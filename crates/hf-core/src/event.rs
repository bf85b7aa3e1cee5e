//! Activity log entries.

use serde::{Deserialize, Serialize};

use crate::event_kind::EventKind;
use crate::types::{TaskId, Timestamp};

/// One immutable entry of the append-only activity log.
///
/// The `prev_*` fields describe the state before the event and exist for the
/// tracker's undo feature. Analytics never reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// When the event occurred.
    pub time: Timestamp,
    /// What happened.
    #[serde(rename = "event")]
    pub kind: EventKind,
    /// The task the event refers to. Absent for `CLEAR_FOCUS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<TaskId>,
    /// Task text at the time of the event.
    #[serde(rename = "task", default)]
    pub task_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_focus: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_focus_id: Option<TaskId>,
}

impl LogEvent {
    /// Creates an event about a task.
    pub fn new(time: Timestamp, kind: EventKind, task_id: TaskId, task_name: impl Into<String>) -> Self {
        Self {
            time,
            kind,
            task_id: Some(task_id),
            task_name: task_name.into(),
            prev_status: None,
            prev_text: None,
            prev_focus: None,
            prev_focus_id: None,
        }
    }

    /// Creates an event that names no task.
    pub fn taskless(time: Timestamp, kind: EventKind) -> Self {
        Self {
            time,
            kind,
            task_id: None,
            task_name: String::new(),
            prev_status: None,
            prev_text: None,
            prev_focus: None,
            prev_focus_id: None,
        }
    }

    /// Returns the task id when this event carries the task its kind requires.
    ///
    /// `CLEAR_FOCUS` never needs one, so it always yields `None` here.
    pub const fn required_task(&self) -> Option<TaskId> {
        if self.kind.requires_task() {
            self.task_id
        } else {
            None
        }
    }
}

/// Returns the events in ascending time order.
///
/// The sort is stable, so entries sharing a timestamp keep their log order.
pub fn chronological(events: &[LogEvent]) -> Vec<&LogEvent> {
    let mut sorted: Vec<&LogEvent> = events.iter().collect();
    sorted.sort_by_key(|e| e.time);
    sorted
}

/// Returns copies of the events with `start <= time < end`, in log order.
pub fn events_between(events: &[LogEvent], start: Timestamp, end: Timestamp) -> Vec<LogEvent> {
    events
        .iter()
        .filter(|e| e.time >= start && e.time < end)
        .cloned()
        .collect()
}
