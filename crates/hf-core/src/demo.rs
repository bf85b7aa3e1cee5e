//! A realistic sample work day for demos and previews.

use chrono::{Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone};

use crate::event::LogEvent;
use crate::event_kind::EventKind;
use crate::types::{TaskId, Timestamp};

const TASKS: [(u64, &str); 6] = [
    (1, "Implement user authentication"),
    (2, "Fix database connection bug"),
    (3, "Write unit tests"),
    (4, "Review pull requests"),
    (5, "Update documentation"),
    (6, "Refactor API endpoints"),
];

/// (hour, minute, task index, kind). `None` marks a `CLEAR_FOCUS`.
const WORK_DAY: [(i64, i64, Option<usize>, EventKind); 15] = [
    (8, 30, Some(0), EventKind::SwitchFocus),
    (10, 15, Some(1), EventKind::SwitchFocus),
    (10, 45, Some(1), EventKind::TaskDone),
    (10, 50, Some(2), EventKind::SwitchFocus),
    (11, 30, Some(0), EventKind::SwitchFocus),
    (12, 0, None, EventKind::ClearFocus),
    (13, 0, Some(3), EventKind::SwitchFocus),
    (13, 45, Some(3), EventKind::TaskDone),
    (14, 0, Some(0), EventKind::SwitchFocus),
    (15, 30, Some(4), EventKind::SwitchFocus),
    (16, 0, Some(5), EventKind::SwitchFocus),
    (16, 45, Some(0), EventKind::SwitchFocus),
    (17, 30, Some(0), EventKind::TaskDone),
    (17, 35, Some(2), EventKind::SwitchFocus),
    (18, 15, Some(2), EventKind::TaskDone),
];

/// Number of tasks left active at the end of the sample day.
pub const SAMPLE_ACTIVE_COUNT: u8 = 3;

/// Builds the sample log for `day`, with wall-clock times in `offset`.
///
/// Six tasks are created in the morning, worked on through the day with a
/// lunch break, and one is parked in "later" for a few hours.
pub fn sample_log(day: NaiveDate, offset: FixedOffset) -> Vec<LogEvent> {
    let at = |hour: i64, minute: i64| -> Timestamp {
        let local = day.and_time(NaiveTime::MIN) + Duration::minutes(hour * 60 + minute);
        offset.from_utc_datetime(&(local - Duration::seconds(i64::from(offset.local_minus_utc()))))
    };
    let task_event = |time: Timestamp, kind: EventKind, index: usize| {
        let (id, name) = TASKS[index];
        LogEvent::new(time, kind, TaskId::new(id), name)
    };

    let mut logs = Vec::with_capacity(TASKS.len() + WORK_DAY.len() + 2);

    for (i, minute) in (0..TASKS.len()).zip((0_i64..).step_by(5)) {
        logs.push(task_event(at(8, minute), EventKind::TaskCreated, i));
    }

    let mut prev_focus: Option<TaskId> = None;
    for (hour, minute, task, kind) in WORK_DAY {
        let time = at(hour, minute);
        match (kind, task) {
            (EventKind::SwitchFocus, Some(i)) => {
                let mut event = task_event(time, kind, i);
                event.prev_focus_id = prev_focus;
                prev_focus = event.task_id;
                logs.push(event);
            }
            (EventKind::ClearFocus, _) => {
                let mut event = LogEvent::taskless(time, kind);
                event.prev_focus_id = prev_focus.take();
                logs.push(event);
            }
            (_, Some(i)) => logs.push(task_event(time, kind, i)),
            (_, None) => {}
        }
    }

    let mut parked = task_event(at(9, 0), EventKind::MoveToLater, 4);
    parked.prev_status = Some("active".to_string());
    logs.push(parked);

    let mut resumed = task_event(at(14, 30), EventKind::MoveToActive, 4);
    resumed.prev_status = Some("later".to_string());
    logs.push(resumed);

    logs.sort_by_key(|e| e.time);
    logs
}
