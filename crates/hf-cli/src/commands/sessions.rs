//! Sessions command: list reconstructed focus sessions.

use std::fmt::{self, Write};

use anyhow::Result;
use hf_core::FocusSession;
use hf_core::format::format_minutes;

use crate::Config;
use crate::cli::ReportArgs;
use crate::commands::input::ReportInput;
use crate::commands::render;

/// Formats the session list.
pub fn format_sessions(input: &ReportInput, sessions: &[FocusSession]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    render::header(&mut out, "FOCUS SESSIONS", input)?;
    writeln!(out)?;

    if sessions.is_empty() {
        writeln!(out, "No focus sessions recorded.")?;
        return Ok(out);
    }

    for session in sessions {
        writeln!(
            out,
            "{}-{}  {:>7}  {}",
            session.start_time.format("%H:%M"),
            session.end_time.format("%H:%M"),
            format_minutes(session.duration_minutes),
            session.task_name
        )?;
    }

    let total: f64 = sessions.iter().map(|s| s.duration_minutes).sum();
    let noun = if sessions.len() == 1 { "session" } else { "sessions" };
    writeln!(out)?;
    writeln!(out, "{} {noun}, {} total", sessions.len(), format_minutes(total))?;
    Ok(out)
}

/// Runs the sessions command.
pub fn run(config: &Config, args: &ReportArgs) -> Result<()> {
    let input = ReportInput::load(config, args)?;
    let sessions = input.analyze().sessions;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sessions)?);
    } else {
        print!("{}", format_sessions(&input, &sessions)?);
    }
    Ok(())
}
