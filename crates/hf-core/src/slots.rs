//! Slot utilization history by backward replay.
//!
//! The log never records how many tasks were active. Starting from the count
//! the caller knows to be true now, each event is undone in reverse
//! chronological order to recover the count just before it happened.
//!
//! # Known limitation
//!
//! Every `TASK_CREATED` is assumed to have landed in the active list. Tasks
//! created straight into "later" therefore inflate the reconstructed history
//! by one until the replay passes their creation. The log holds no record of
//! where a task was created, so this approximation is kept as is.

use serde::{Deserialize, Serialize};

use crate::event::{LogEvent, chronological};
use crate::event_kind::EventKind;
use crate::types::{SLOT_CAPACITY, Timestamp};

/// Active task count at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSnapshot {
    pub time: Timestamp,
    /// Always within `0..=SLOT_CAPACITY`.
    pub active_count: u8,
}

/// Reconstructed active-count history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotData {
    pub current_active: u8,
    /// Chronological; the last entry is the current count at `now`.
    pub snapshots: Vec<SlotSnapshot>,
}

impl SlotData {
    /// Highest count reached in the history.
    pub fn peak(&self) -> u8 {
        self.snapshots
            .iter()
            .map(|s| s.active_count)
            .max()
            .unwrap_or(self.current_active)
    }
}

/// How an event changed the active count when it happened.
const fn forward_delta(kind: EventKind) -> i8 {
    match kind {
        EventKind::TaskCreated | EventKind::MoveToActive => 1,
        EventKind::TaskDone | EventKind::TaskDeleted | EventKind::MoveToLater => -1,
        EventKind::TaskEdited | EventKind::SwitchFocus | EventKind::ClearFocus => 0,
    }
}

/// Undoes one event's effect, staying within slot capacity.
const fn undo(count: u8, kind: EventKind) -> u8 {
    match forward_delta(kind) {
        1 => count.saturating_sub(1),
        -1 => {
            if count < SLOT_CAPACITY {
                count + 1
            } else {
                SLOT_CAPACITY
            }
        }
        _ => count,
    }
}

/// Reconstructs the active-count history.
///
/// `current_active` is clamped to the slot capacity. The returned snapshots
/// hold, for every event, the count immediately before that event, followed
/// by `current_active` at `now`.
pub fn slot_utilization(events: &[LogEvent], current_active: u8, now: Timestamp) -> SlotData {
    let current_active = current_active.min(SLOT_CAPACITY);
    let mut snapshots = Vec::with_capacity(events.len() + 1);
    snapshots.push(SlotSnapshot {
        time: now,
        active_count: current_active,
    });

    let mut count = current_active;
    for event in chronological(events).into_iter().rev() {
        count = undo(count, event.kind);
        snapshots.push(SlotSnapshot {
            time: event.time,
            active_count: count,
        });
    }

    snapshots.reverse();
    SlotData {
        current_active,
        snapshots,
    }
}
