//! Lifecycle event kinds as the single source of truth for stored kind strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::CoreError;

/// Task lifecycle events recorded in the activity log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    TaskCreated,
    TaskDone,
    TaskDeleted,
    TaskEdited,
    MoveToActive,
    MoveToLater,
    SwitchFocus,
    ClearFocus,
}

impl EventKind {
    /// Every kind, in the order the tracker declares them.
    pub const ALL: [Self; 8] = [
        Self::TaskCreated,
        Self::TaskDone,
        Self::TaskDeleted,
        Self::TaskEdited,
        Self::MoveToActive,
        Self::MoveToLater,
        Self::SwitchFocus,
        Self::ClearFocus,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TaskCreated => "TASK_CREATED",
            Self::TaskDone => "TASK_DONE",
            Self::TaskDeleted => "TASK_DELETED",
            Self::TaskEdited => "TASK_EDITED",
            Self::MoveToActive => "MOVE_TO_ACTIVE",
            Self::MoveToLater => "MOVE_TO_LATER",
            Self::SwitchFocus => "SWITCH_FOCUS",
            Self::ClearFocus => "CLEAR_FOCUS",
        }
    }

    /// Whether an event of this kind must name a task.
    #[must_use]
    pub const fn requires_task(&self) -> bool {
        match self {
            Self::ClearFocus => false,
            Self::TaskCreated
            | Self::TaskDone
            | Self::TaskDeleted
            | Self::TaskEdited
            | Self::MoveToActive
            | Self::MoveToLater
            | Self::SwitchFocus => true,
        }
    }

    /// Whether this event closes a task for good (done or deleted).
    #[must_use]
    pub const fn clears_task(&self) -> bool {
        match self {
            Self::TaskDone | Self::TaskDeleted => true,
            Self::TaskCreated
            | Self::TaskEdited
            | Self::MoveToActive
            | Self::MoveToLater
            | Self::SwitchFocus
            | Self::ClearFocus => false,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TASK_CREATED" => Ok(Self::TaskCreated),
            "TASK_DONE" => Ok(Self::TaskDone),
            "TASK_DELETED" => Ok(Self::TaskDeleted),
            "TASK_EDITED" => Ok(Self::TaskEdited),
            "MOVE_TO_ACTIVE" => Ok(Self::MoveToActive),
            "MOVE_TO_LATER" => Ok(Self::MoveToLater),
            "SWITCH_FOCUS" => Ok(Self::SwitchFocus),
            "CLEAR_FOCUS" => Ok(Self::ClearFocus),
            _ => Err(CoreError::UnknownEventKind(s.to_string())),
        }
    }
}

impl Serialize for EventKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
