//! Score command: daily statistics and how the score was reached.

use std::fmt;

use anyhow::Result;
use hf_core::{Analytics, DailyStats, ScoreBreakdown, ScoreRating};
use serde::Serialize;

use crate::Config;
use crate::cli::ReportArgs;
use crate::commands::input::ReportInput;
use crate::commands::render;

#[derive(Serialize)]
struct JsonScore<'a> {
    period: String,
    rating: ScoreRating,
    stats: &'a DailyStats,
    breakdown: &'a ScoreBreakdown,
}

/// Formats the score card with its breakdown.
pub fn format_score(input: &ReportInput, analytics: &Analytics) -> Result<String, fmt::Error> {
    let mut out = String::new();
    render::header(&mut out, "FOCUS SCORE", input)?;
    render::score(&mut out, &analytics.stats)?;
    render::breakdown(&mut out, &analytics.breakdown)?;
    Ok(out)
}

/// Formats the score as JSON.
pub fn format_score_json(input: &ReportInput, analytics: &Analytics) -> Result<String> {
    let score = JsonScore {
        period: input.period_label(),
        rating: ScoreRating::from_score(analytics.stats.score),
        stats: &analytics.stats,
        breakdown: &analytics.breakdown,
    };
    Ok(serde_json::to_string_pretty(&score)?)
}

/// Runs the score command.
pub fn run(config: &Config, args: &ReportArgs) -> Result<()> {
    let input = ReportInput::load(config, args)?;
    let analytics = input.analyze();

    if args.json {
        println!("{}", format_score_json(&input, &analytics)?);
    } else {
        print!("{}", format_score(&input, &analytics)?);
    }
    Ok(())
}
