//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Focus statistics for the heyfocus task tracker.
///
/// Reads the tracker's activity log and derives focus sessions, per-task
/// totals, hourly activity, slot utilization and a daily focus score.
#[derive(Debug, Parser)]
#[command(name = "hf", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the full statistics dashboard.
    Stats(ReportArgs),

    /// List focus sessions.
    Sessions(ReportArgs),

    /// Show the daily focus score and its components.
    Score(ReportArgs),
}

/// Options shared by every report.
#[derive(Debug, Clone, Default, Args)]
pub struct ReportArgs {
    /// Report on today (default).
    #[arg(long, conflicts_with_all = ["yesterday", "all", "date"])]
    pub day: bool,

    /// Report on yesterday.
    #[arg(long, conflicts_with_all = ["all", "date"])]
    pub yesterday: bool,

    /// Report on the whole log.
    #[arg(long, conflicts_with = "date")]
    pub all: bool,

    /// Report on a specific local date (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Reference time: ISO 8601 or relative (e.g., '2 hours ago'). Defaults to now.
    #[arg(long)]
    pub now: Option<String>,

    /// Override the current number of active tasks.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=5))]
    pub active: Option<u8>,

    /// Use the built-in sample day instead of the data file.
    #[arg(long)]
    pub demo: bool,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}
