//! Read-only access to the focus tracker's data file.
//!
//! The desktop application owns the file and writes it as a single JSON
//! document:
//!
//! ```json
//! {
//!   "tasks": [{ "id": 1, "text": "...", "status": "active", "isFocus": true }],
//!   "logs": [{ "time": "2025-01-15T09:00:00", "event": "SWITCH_FOCUS", "task": "...", "task_id": 1 }],
//!   "next_id": 2
//! }
//! ```
//!
//! # Timestamp Format
//!
//! Log times are written as naive local wall-clock time
//! (`%Y-%m-%dT%H:%M:%S`). Older files and demo data use RFC 3339 with an
//! offset. Naive times are pinned to a fixed offset at load time, so the
//! analytics engine never consults the machine's time zone.
//!
//! Entries with an event kind this crate does not know are skipped with a
//! warning rather than failing the whole load.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDateTime, TimeZone};
use hf_core::{CoreError, EventKind, LogEvent, SLOT_CAPACITY, TaskId, Timestamp};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The data file is not valid JSON for the expected layout.
    #[error("invalid data file: {0}")]
    Json(#[from] serde_json::Error),
    /// A log entry carries a timestamp that cannot be interpreted.
    #[error("invalid timestamp in log entry {index}")]
    Timestamp {
        index: usize,
        #[source]
        source: CoreError,
    },
}

/// Status string of tasks occupying an active slot.
pub const ACTIVE_STATUS: &str = "active";

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A task as stored by the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: u64,
    pub text: String,
    pub status: String,
    #[serde(rename = "isFocus", default)]
    pub is_focus: bool,
}

/// A raw log entry as stored by the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub time: String,
    pub event: String,
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub task_id: Option<u64>,
    #[serde(default)]
    pub prev_status: Option<String>,
    #[serde(default)]
    pub prev_text: Option<String>,
    #[serde(default)]
    pub prev_focus: Option<bool>,
    #[serde(default)]
    pub prev_focus_id: Option<u64>,
}

/// The tracker's persisted state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFile {
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
    #[serde(default)]
    pub logs: Vec<EntryRecord>,
    #[serde(default)]
    pub next_id: u64,
}

impl DataFile {
    /// Reads the data file at `path`.
    ///
    /// A missing file is an empty tracker, not an error.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "data file not found, starting empty");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let data = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            tasks = data.tasks.len(),
            logs = data.logs.len(),
            "loaded data file"
        );
        Ok(data)
    }

    /// Parses the data file contents.
    pub fn from_json(content: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Number of tasks currently in the active list, capped at slot capacity.
    pub fn active_task_count(&self) -> u8 {
        let active = self
            .tasks
            .iter()
            .filter(|t| t.status == ACTIVE_STATUS)
            .count();
        u8::try_from(active).map_or(SLOT_CAPACITY, |n| n.min(SLOT_CAPACITY))
    }

    /// Converts the stored log into engine events, resolving naive times in
    /// the machine's local time zone.
    pub fn log_events(&self) -> Result<Vec<LogEvent>, StoreError> {
        self.log_events_in(&Local)
    }

    /// Converts the stored log into engine events, resolving naive times in `tz`.
    pub fn log_events_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<Vec<LogEvent>, StoreError> {
        let mut events = Vec::with_capacity(self.logs.len());
        for (index, entry) in self.logs.iter().enumerate() {
            let kind = match entry.event.parse::<EventKind>() {
                Ok(kind) => kind,
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping log entry");
                    continue;
                }
            };
            let time = parse_log_time_in(&entry.time, tz)
                .map_err(|source| StoreError::Timestamp { index, source })?;
            events.push(LogEvent {
                time,
                kind,
                task_id: entry.task_id.map(TaskId::new),
                task_name: entry.task.clone(),
                prev_status: entry.prev_status.clone(),
                prev_text: entry.prev_text.clone(),
                prev_focus: entry.prev_focus,
                prev_focus_id: entry.prev_focus_id.map(TaskId::new),
            });
        }
        Ok(events)
    }
}

/// Parses a stored log time, resolving naive times in the local time zone.
pub fn parse_log_time(s: &str) -> Result<Timestamp, CoreError> {
    parse_log_time_in(s, &Local)
}

/// Parses a stored log time, resolving naive times in `tz`.
///
/// Ambiguous wall-clock times (DST fall-back) take the earlier instant. Times
/// inside a DST gap are moved forward by an hour.
pub fn parse_log_time_in<Tz: TimeZone>(s: &str, tz: &Tz) -> Result<Timestamp, CoreError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }

    let naive = NaiveDateTime::parse_from_str(s, NAIVE_FORMAT)
        .map_err(|_| CoreError::InvalidTimestamp(s.to_string()))?;

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt.fixed_offset()),
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .map(|dt| dt.fixed_offset())
            .ok_or_else(|| CoreError::InvalidTimestamp(s.to_string())),
    }
}
