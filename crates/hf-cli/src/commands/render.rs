//! Text sections shared by the report commands.

use std::fmt::{self, Write};

use hf_core::format::{active_hour_range, format_minutes, timeline_hour_range};
use hf_core::{
    DailyStats, FocusSession, HourlyActivity, LogEvent, SLOT_CAPACITY, ScoreBreakdown,
    ScoreRating, SlotData, SwitchData, TaskFocusTime, timeline_lanes,
};

use crate::commands::input::ReportInput;
use crate::commands::util::progress_bar;

/// Report title line, e.g. `FOCUS STATS: Wednesday, Jan 15, 2025 [LIVE]`.
pub fn header(out: &mut String, title: &str, input: &ReportInput) -> fmt::Result {
    writeln!(
        out,
        "{title}: {} [{}]",
        input.period_label(),
        input.source.label()
    )
}

fn section(out: &mut String, title: &str) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "─".repeat(title.chars().count()))
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "score is clamped to [0, 100]"
)]
fn whole_score(score: f64) -> u32 {
    score.round() as u32
}

fn clock(time: hf_core::Timestamp) -> String {
    time.format("%H:%M").to_string()
}

pub fn score(out: &mut String, stats: &DailyStats) -> fmt::Result {
    section(out, "SCORE")?;
    writeln!(
        out,
        "{}/100  {}",
        whole_score(stats.score),
        ScoreRating::from_score(stats.score)
    )?;
    writeln!(out, "Total focus   {}", format_minutes(stats.total_focus_minutes))?;
    writeln!(out, "Avg session   {}", format_minutes(stats.avg_focus_minutes))?;
    writeln!(out, "Longest       {}", format_minutes(stats.longest_focus_minutes))?;
    writeln!(out, "Switches      {}", stats.switches)?;
    writeln!(out, "Cleared       {}", stats.cleared)
}

pub fn breakdown(out: &mut String, breakdown: &ScoreBreakdown) -> fmt::Result {
    section(out, "BREAKDOWN")?;
    writeln!(out, "Focus time      +{:.1}", breakdown.focus_time)?;
    writeln!(out, "Avg session     +{:.1}", breakdown.avg_session)?;
    writeln!(out, "Switch penalty  -{:.1}", breakdown.switch_penalty)?;
    let noun = if breakdown.deep_work_sessions == 1 {
        "session"
    } else {
        "sessions"
    };
    writeln!(
        out,
        "Deep work       +{:.1}  ({} {noun} of 45m+)",
        breakdown.deep_work_bonus, breakdown.deep_work_sessions
    )
}

pub fn timeline(out: &mut String, sessions: &[FocusSession]) -> fmt::Result {
    let (start, end) = timeline_hour_range(sessions);
    section(out, &format!("TIMELINE {start:02}:00-{end:02}:00"))?;

    if sessions.is_empty() {
        return writeln!(out, "(no focus sessions)");
    }

    for lane in timeline_lanes(sessions) {
        writeln!(out, "{}", lane.task_name)?;
        for session in lane.sessions {
            writeln!(
                out,
                "  {}-{}  {}",
                clock(session.start_time),
                clock(session.end_time),
                format_minutes(session.duration_minutes)
            )?;
        }
    }
    Ok(())
}

pub fn task_totals(out: &mut String, totals: &[TaskFocusTime]) -> fmt::Result {
    section(out, "FOCUS BY TASK")?;

    let max = totals.first().map_or(0.0, |t| t.total_minutes);
    if totals.is_empty() {
        return writeln!(out, "(no focus time)");
    }
    for task in totals {
        writeln!(
            out,
            "{}  {:>7}  {}",
            progress_bar(task.total_minutes, max),
            format_minutes(task.total_minutes),
            task.task_name
        )?;
    }
    Ok(())
}

pub fn hourly(
    out: &mut String,
    events: &[LogEvent],
    hours: &[HourlyActivity],
    switches: &[SwitchData],
) -> fmt::Result {
    section(out, "HOURLY ACTIVITY")?;

    let (start, end) = active_hour_range(events);
    let max = hours.iter().map(|h| h.count).max().unwrap_or(0);
    for (activity, switch) in hours.iter().zip(switches) {
        if activity.hour < start || activity.hour > end {
            continue;
        }
        writeln!(
            out,
            "{:02}:00  {}  {:>3} events  {} done  {} switches",
            activity.hour,
            progress_bar(f64::from(activity.count), f64::from(max)),
            activity.count,
            activity.done_count,
            switch.count
        )?;
    }
    Ok(())
}

pub fn slots(out: &mut String, slots: &SlotData) -> fmt::Result {
    section(out, "SLOT UTILIZATION")?;
    writeln!(
        out,
        "Now {}/{SLOT_CAPACITY} active, peak {}/{SLOT_CAPACITY}",
        slots.current_active,
        slots.peak()
    )?;
    for snapshot in &slots.snapshots {
        let filled = usize::from(snapshot.active_count.min(SLOT_CAPACITY));
        writeln!(
            out,
            "{}  {}{}  {}",
            clock(snapshot.time),
            "■".repeat(filled),
            "□".repeat(usize::from(SLOT_CAPACITY) - filled),
            snapshot.active_count
        )?;
    }
    Ok(())
}
