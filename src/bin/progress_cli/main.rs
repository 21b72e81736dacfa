// ABOUTME: Progress CLI - command-line front end for the progress analytics engine
// ABOUTME: Loads entries and a profile from JSON files and prints analytics as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Whole-history progress report
//! progress-cli --entries entries.json --profile profile.json stats
//!
//! # Weight analytics for the last quarter, as of a fixed date
//! progress-cli --entries entries.json --today 2025-03-31 analytics --period quarter --metric weight
//!
//! # Goal suggestions
//! progress-cli --entries entries.json --profile profile.json goals
//!
//! # Trends for selected metrics
//! progress-cli --entries entries.json trends --metric waist --metric hips
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use progress_analytics::{
    errors::{AppError, AppResult},
    input,
    intelligence::ProgressAnalyzer,
    logging::{AppLogger, LoggingConfig},
    models::SubjectProfile,
};
use tracing::info;

use commands::analytics::CommandContext;
use helpers::display::print_json;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "progress-cli",
    about = "Body-measurement progress analytics",
    long_about = "Computes streaks, trends, summary statistics, BMI progression, period analytics, and goal suggestions from a JSON list of progress entries."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON file with progress entries (array, or object with an `entries` array)
    #[arg(long, global = true)]
    entries: Option<PathBuf>,

    /// JSON file with the subject profile (height, fitness goal)
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD), defaults to the local date
    #[arg(long, global = true)]
    today: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Whole-history progress report
    Stats,

    /// Analytics of one metric over a trailing period
    Analytics {
        /// Period: week, month, quarter, or year
        #[arg(long, default_value = "month")]
        period: String,

        /// Metric name, e.g. weight or body_fat
        #[arg(long, default_value = "weight")]
        metric: String,
    },

    /// Goal suggestions from the most recent entry
    Goals,

    /// Consecutive logged days ending today
    Streak,

    /// Per-metric trends
    Trends {
        /// Metrics to include (repeatable), defaults to weight, body fat, and muscle mass
        #[arg(long = "metric")]
        metrics: Vec<String>,
    },

    /// Per-metric summary statistics
    Summary {
        /// Metrics to include (repeatable), defaults to every metric
        #[arg(long = "metric")]
        metrics: Vec<String>,
    },

    /// BMI progression for the profile height
    Bmi,
}

impl Command {
    const fn name(&self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::Analytics { .. } => "analytics",
            Self::Goals => "goals",
            Self::Streak => "streak",
            Self::Trends { .. } => "trends",
            Self::Summary { .. } => "summary",
            Self::Bmi => "bmi",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let analyzer = ProgressAnalyzer::from_env()?;
    info!("Progress analytics CLI");

    let entries = match &cli.entries {
        Some(path) => {
            let entries = input::load_entries(path)?;
            AppLogger::log_input_loaded("entries", &path.display().to_string(), entries.len());
            entries
        }
        None => Vec::new(),
    };

    let profile = match &cli.profile {
        Some(path) => {
            let profile = input::load_profile(path)?;
            AppLogger::log_input_loaded("profile", &path.display().to_string(), 1);
            profile
        }
        None => SubjectProfile::default(),
    };

    let today = match cli.today.as_deref() {
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")?,
        None => Local::now().date_naive(),
    };

    let context = CommandContext {
        analyzer: &analyzer,
        entries: &entries,
        profile: &profile,
        today,
    };

    let started = Instant::now();
    let command_name = cli.command.name();
    let outcome = match cli.command {
        Command::Stats => Ok(commands::analytics::stats(&context)),
        Command::Analytics { period, metric } => {
            commands::analytics::period(&context, &period, &metric)
        }
        Command::Goals => Ok(commands::analytics::goals(&context)),
        Command::Streak => Ok(commands::analytics::streak(&context)),
        Command::Trends { metrics } => commands::analytics::trends(&context, &metrics),
        Command::Summary { metrics } => commands::analytics::summary(&context, &metrics),
        Command::Bmi => Ok(commands::analytics::bmi(&context)),
    };

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    AppLogger::log_command(command_name, entries.len(), outcome.is_ok(), elapsed_ms);

    print_json(&outcome?)
}
