//! Core type definitions shared across the analytics engine.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An absolute point in time that remembers the offset it was recorded in.
///
/// Hour-of-day bucketing reads the hour in this offset, so the engine never
/// has to consult the machine's time zone.
pub type Timestamp = DateTime<FixedOffset>;

/// Number of concurrent "active" task slots.
pub const SLOT_CAPACITY: u8 = 5;

/// Errors raised when converting external values into engine types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The event kind string is not one of the known lifecycle events.
    #[error("unknown event kind: {0}")]
    UnknownEventKind(String),

    /// The timestamp string could not be interpreted.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Identifier of a task in the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
