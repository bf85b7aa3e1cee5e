//! Loading the log snapshot a report is computed from.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use hf_core::demo::{SAMPLE_ACTIVE_COUNT, sample_log};
use hf_core::{
    Analytics, LogEvent, Timestamp, clip_sessions, events_between, focus_sessions,
    slot_utilization,
};
use hf_store::DataFile;
use serde::Serialize;

use crate::Config;
use crate::cli::ReportArgs;
use crate::commands::util::{Period, day_boundaries, parse_datetime};

/// Where the events came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Live,
    Demo,
}

impl DataSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Live => "LIVE",
            Self::Demo => "DEMO",
        }
    }
}

/// A log snapshot plus everything needed to analyze it.
#[derive(Debug, Clone)]
pub struct ReportInput {
    pub source: DataSource,
    /// Reference time for closing open sessions.
    pub now: Timestamp,
    /// The whole log.
    pub events: Vec<LogEvent>,
    pub current_active: u8,
    /// Day covered by the report; `None` covers the whole log.
    pub day: Option<NaiveDate>,
}

impl ReportInput {
    /// Loads the data file (or the sample day) according to the report options.
    pub fn load(config: &Config, args: &ReportArgs) -> Result<Self> {
        let wall_clock = Local::now().fixed_offset();
        let now = match &args.now {
            Some(s) => parse_datetime(s, wall_clock)?,
            None => wall_clock,
        };
        let day = Period::from_args(args).date(now.date_naive());

        let (source, events, current_active) = if args.demo {
            demo_snapshot(day, now)
        } else {
            let data = DataFile::open(&config.data_path)
                .with_context(|| format!("failed to load {}", config.data_path.display()))?;
            let events = data.log_events().context("failed to read activity log")?;
            if events.is_empty() && config.demo_when_empty {
                tracing::info!("activity log is empty, showing the sample day");
                demo_snapshot(day, now)
            } else {
                (DataSource::Live, events, data.active_task_count())
            }
        };

        let now = match source {
            // The sample day may end after the wall clock
            DataSource::Demo => events.iter().map(|e| e.time).fold(now, Timestamp::max),
            DataSource::Live => now,
        };

        Ok(Self {
            source,
            now,
            events,
            current_active: args.active.unwrap_or(current_active),
            day,
        })
    }

    /// The `[start, end)` window the report covers.
    pub fn window(&self) -> Option<(Timestamp, Timestamp)> {
        self.day.map(|day| day_boundaries(day, self.now))
    }

    /// Events inside the report window.
    pub fn window_events(&self) -> Vec<LogEvent> {
        match self.window() {
            Some((start, end)) => events_between(&self.events, start, end),
            None => self.events.clone(),
        }
    }

    /// Runs the analytics pass over the report window.
    ///
    /// Sessions are rebuilt from everything logged before the window ends, then
    /// cut to the window, so focus crossing midnight counts on both days. Slot
    /// history is replayed from the present back to the window start, then
    /// trimmed to the window, since the only known count is the current one.
    pub fn analyze(&self) -> Analytics {
        let Some((start, end)) = self.window() else {
            return Analytics::compute(&self.events, self.now, self.current_active);
        };

        let closed_at = self.now.min(end);
        let before_end: Vec<LogEvent> =
            self.events.iter().filter(|e| e.time < end).cloned().collect();
        let sessions = clip_sessions(&focus_sessions(&before_end, closed_at), start, end);

        let in_window = events_between(&self.events, start, end);
        let mut analytics =
            Analytics::with_sessions(&in_window, sessions, closed_at, self.current_active);

        let since_start: Vec<LogEvent> = self
            .events
            .iter()
            .filter(|e| e.time >= start)
            .cloned()
            .collect();
        let mut slots = slot_utilization(&since_start, self.current_active, self.now);
        slots.snapshots.retain(|s| s.time < end);
        analytics.slots = slots;

        tracing::debug!(
            events = in_window.len(),
            sessions = analytics.sessions.len(),
            "analyzed report window"
        );
        analytics
    }

    /// Human-readable description of the covered period.
    pub fn period_label(&self) -> String {
        self.day.map_or_else(
            || "All time".to_string(),
            |day| day.format("%A, %b %-d, %Y").to_string(),
        )
    }
}

fn demo_snapshot(day: Option<NaiveDate>, now: Timestamp) -> (DataSource, Vec<LogEvent>, u8) {
    let day = day.unwrap_or_else(|| now.date_naive());
    (
        DataSource::Demo,
        sample_log(day, *now.offset()),
        SAMPLE_ACTIVE_COUNT,
    )
}
