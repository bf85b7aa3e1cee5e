//! Stats command: the full focus dashboard.
//!
//! Sections, top to bottom: score card, focus timeline, focus by task,
//! hourly activity with switch counts, and slot utilization.

use std::fmt::{self, Write};

use anyhow::Result;
use hf_core::{Analytics, Timestamp};
use serde::Serialize;

use crate::Config;
use crate::cli::ReportArgs;
use crate::commands::input::{DataSource, ReportInput};
use crate::commands::render;

#[derive(Serialize)]
struct JsonStats<'a> {
    period: String,
    source: DataSource,
    now: Timestamp,
    timezone: String,
    #[serde(flatten)]
    analytics: &'a Analytics,
}

/// Formats the human-readable dashboard.
pub fn format_stats(input: &ReportInput, analytics: &Analytics) -> Result<String, fmt::Error> {
    let mut out = String::new();
    render::header(&mut out, "FOCUS STATS", input)?;

    let events = input.window_events();
    if events.is_empty() && analytics.sessions.is_empty() {
        writeln!(out)?;
        writeln!(out, "No events recorded for this period.")?;
        return Ok(out);
    }

    render::score(&mut out, &analytics.stats)?;
    render::timeline(&mut out, &analytics.sessions)?;
    render::task_totals(&mut out, &analytics.task_focus)?;
    render::hourly(&mut out, &events, &analytics.hourly, &analytics.switches)?;
    render::slots(&mut out, &analytics.slots)?;
    Ok(out)
}

/// Formats the dashboard data as JSON.
pub fn format_stats_json(input: &ReportInput, analytics: &Analytics) -> Result<String> {
    let stats = JsonStats {
        period: input.period_label(),
        source: input.source,
        now: input.now,
        timezone: iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string()),
        analytics,
    };
    Ok(serde_json::to_string_pretty(&stats)?)
}

/// Runs the stats command.
pub fn run(config: &Config, args: &ReportArgs) -> Result<()> {
    let input = ReportInput::load(config, args)?;
    let analytics = input.analyze();

    if args.json {
        println!("{}", format_stats_json(&input, &analytics)?);
    } else {
        print!("{}", format_stats(&input, &analytics)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    use hf_core::EventKind;

    use crate::commands::input::tests::{at, event, input};
    use crate::commands::render::tests::morning;

    #[test]
    fn test_stats_for_a_morning() {
        let report = morning();
        let output = format_stats(&report, &report.analyze()).unwrap();
        assert_snapshot!(output, @r"
FOCUS STATS: Wednesday, Jan 15, 2025 [LIVE]

SCORE
─────
55/100  Fair
Total focus   1h 10m
Avg session   35m
Longest       50m
Switches      2
Cleared       1

TIMELINE 08:00-12:00
────────────────────
Write report
  09:00-09:50  50m
Review PRs
  10:00-10:20  20m

FOCUS BY TASK
─────────────
██████████      50m  Write report
████░░░░░░      20m  Review PRs

HOURLY ACTIVITY
───────────────
08:00  ░░░░░░░░░░    0 events  0 done  0 switches
09:00  ██████████    3 events  1 done  1 switches
10:00  ███████░░░    2 events  0 done  1 switches
11:00  ░░░░░░░░░░    0 events  0 done  0 switches

SLOT UTILIZATION
────────────────
Now 1/5 active, peak 2/5
09:00  ■□□□□  1
09:00  ■■□□□  2
09:50  ■■□□□  2
10:00  ■□□□□  1
10:20  ■□□□□  1
12:00  ■□□□□  1
");
    }

    #[test]
    fn test_stats_empty_period() {
        let report = input(vec![], at(15, 12, 0), Some(15));
        let output = format_stats(&report, &report.analyze()).unwrap();
        assert_snapshot!(output, @r"
FOCUS STATS: Wednesday, Jan 15, 2025 [LIVE]

No events recorded for this period.
");
    }

    #[test]
    fn test_stats_shows_focus_carried_over_midnight() {
        let events = vec![event(at(14, 23, 0), EventKind::SwitchFocus, 1, "Night shift")];
        let report = input(events, at(15, 2, 0), Some(15));
        let output = format_stats(&report, &report.analyze()).unwrap();

        assert!(!output.contains("No events recorded"));
        assert!(output.contains("Total focus   2h"));
        assert!(output.contains("  00:00-02:00  2h"));
    }

    #[test]
    fn test_stats_json_has_all_views() {
        let report = morning();
        let output = format_stats_json(&report, &report.analyze()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["period"], "Wednesday, Jan 15, 2025");
        assert_eq!(value["source"], "live");
        assert!(value["timezone"].is_string());
        assert_eq!(value["sessions"].as_array().unwrap().len(), 2);
        assert_eq!(value["task_focus"][0]["color"], "#f97316");
        assert_eq!(value["hourly"].as_array().unwrap().len(), 24);
        assert_eq!(value["switches"][10]["count"], 1);
        assert_eq!(value["slots"]["current_active"], 1);
        assert_eq!(value["stats"]["cleared"], 1);
        assert_eq!(value["breakdown"]["deep_work_sessions"], 1);
    }
}
