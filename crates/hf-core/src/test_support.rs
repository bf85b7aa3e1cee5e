//! Fixtures shared by the unit tests.

use chrono::{Duration, FixedOffset, TimeZone};

use crate::event::LogEvent;
use crate::event_kind::EventKind;
use crate::types::{TaskId, Timestamp};

/// 2025-01-15 at `hour:minute`, UTC.
pub fn at(hour: u32, minute: u32) -> Timestamp {
    FixedOffset::east_opt(0)
        .expect("zero offset is valid")
        .with_ymd_and_hms(2025, 1, 15, hour, minute, 0)
        .single()
        .expect("valid test timestamp")
}

/// Minutes after 09:00 on the test day.
pub fn mins(minutes: i64) -> Timestamp {
    at(9, 0) + Duration::minutes(minutes)
}

pub fn event(time: Timestamp, kind: EventKind, task: u64) -> LogEvent {
    LogEvent::new(time, kind, TaskId::new(task), format!("task {task}"))
}

pub fn switch(time: Timestamp, task: u64) -> LogEvent {
    event(time, EventKind::SwitchFocus, task)
}

pub fn clear(time: Timestamp) -> LogEvent {
    LogEvent::taskless(time, EventKind::ClearFocus)
}
