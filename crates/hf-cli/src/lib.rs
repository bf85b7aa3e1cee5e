//! Focus tracker statistics CLI library.
//!
//! This crate provides the CLI interface over the analytics engine.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, ReportArgs};
pub use config::Config;
