// ABOUTME: Benchmark fixtures generating deterministic progress histories
// ABOUTME: Produces daily entries with gaps and partial measurements for reproducible runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures generating deterministic progress histories.

use chrono::{Duration, NaiveDate};
use progress_analytics::models::{FitnessGoal, ProgressEntry, SubjectProfile};

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// One month of logging
    Month,
    /// One year of logging
    Year,
    /// Several years of logging
    Multiyear,
}

impl HistorySize {
    #[must_use]
    pub const fn days(self) -> usize {
        match self {
            Self::Month => 30,
            Self::Year => 365,
            Self::Multiyear => 1500,
        }
    }
}

/// Fixed reference date so runs are comparable
#[must_use]
pub fn bench_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap_or_default()
}

/// Generate a history ending at [`bench_today`]
///
/// Every seventh day is skipped and circumferences are only logged weekly,
/// which mirrors how people actually record measurements.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_history(size: HistorySize) -> Vec<ProgressEntry> {
    let today = bench_today();
    let days = size.days();

    (0..days)
        .filter(|offset| offset % 7 != 3)
        .map(|offset| {
            let date = today - Duration::days(offset as i64);
            let drift = (days - offset) as f64 * 0.01;
            let wobble = ((offset * 37) % 10) as f64 / 20.0;

            let mut entry = ProgressEntry::new(date)
                .with_weight(90.0 - drift + wobble)
                .with_body_fat(24.0 - drift / 4.0)
                .with_muscle_mass(38.0 + drift / 10.0);
            if offset % 7 == 0 {
                entry = entry
                    .with_chest(100.0 + wobble)
                    .with_waist(92.0 - drift / 2.0)
                    .with_hips(102.0)
                    .with_arms(33.0 + drift / 20.0)
                    .with_thighs(58.0);
            }
            entry
        })
        .collect()
}

/// Profile with a height and weight-loss goal
#[must_use]
pub fn bench_profile() -> SubjectProfile {
    SubjectProfile::new("bench")
        .with_height(178.0)
        .with_goal(FitnessGoal::WeightLoss)
}
