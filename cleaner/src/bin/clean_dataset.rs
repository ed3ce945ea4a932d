//! Training-data cleaner
//!
//! Reads the games and profiles JSON dumps, cleans them and writes the
//! training CSV. Takes no arguments.
//!
//! # Usage
//!
//! ```bash
//! # Default locations under nfl-football-player-stats/
//! cargo run --bin clean-dataset
//!
//! # Custom locations
//! NFL_CLEANER_CONFIG=cleaner.toml cargo run --bin clean-dataset
//! ```
//!
//! # Environment Variables
//!
//! - `NFL_CLEANER_CONFIG`: config file path (default: `./cleaner.toml` if present)
//! - `RUST_LOG`: Log level (default: warn)

use anyhow::Context;
use env_logger::Env;
use log::info;

use nfl_cleaner::{CleanConfig, CleaningPipeline};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = CleanConfig::load().context("Failed to load configuration")?;
    info!(
        "Cleaning {} + {} -> {}",
        config.paths.games.display(),
        config.paths.profiles.display(),
        config.paths.output.display()
    );

    println!("Starting to clean data...");
    let report = CleaningPipeline::with_config(config)
        .run()
        .context("Failed to clean data")?;
    println!("Finished cleaning data...");

    info!(
        "Wrote {} of {} merged rows ({} deceased) with {} columns",
        report.written_rows,
        report.merged_rows,
        report.deceased_rows,
        report.columns.len()
    );

    Ok(())
}
