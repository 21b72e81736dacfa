// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, date helpers, and progress entry builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `progress_analytics`

use std::env;
use std::sync::Once;

use chrono::{Duration, NaiveDate};
use progress_analytics::models::{FitnessGoal, ProgressEntry, SubjectProfile};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Calendar date shorthand
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Reference date used across the suite
pub fn reference_today() -> NaiveDate {
    day(2025, 3, 31)
}

/// `today - offset` days
pub fn days_ago(today: NaiveDate, offset: i64) -> NaiveDate {
    today - Duration::days(offset)
}

/// Entry with only a weight
pub fn weight_entry(date: NaiveDate, weight: f64) -> ProgressEntry {
    ProgressEntry::new(date).with_weight(weight)
}

/// One weight entry per consecutive day ending `today`, oldest first
pub fn daily_weights(today: NaiveDate, weights: &[f64]) -> Vec<ProgressEntry> {
    let count = weights.len() as i64;
    weights
        .iter()
        .enumerate()
        .map(|(index, weight)| weight_entry(days_ago(today, count - 1 - index as i64), *weight))
        .collect()
}

/// Profile with a stated goal and a height
pub fn profile_with_goal(goal: FitnessGoal) -> SubjectProfile {
    SubjectProfile::new("Test Subject")
        .with_height(175.0)
        .with_goal(goal)
}

/// Float comparison with a tolerance suited to one- and two-decimal outputs
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
