//! CLI subcommand implementations.

pub mod input;
mod render;
pub mod score;
pub mod sessions;
pub mod stats;
pub mod util;
