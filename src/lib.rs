// ABOUTME: Main library entry point for the progress analytics toolkit
// ABOUTME: Re-exports the core models and analytics engine and adds input loading and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Progress Analytics
//!
//! Deterministic analytics over a subject's body-measurement history: logging
//! streaks, per-metric trends and summaries, BMI progression, period insights,
//! goal suggestions, and a whole-history progress report.
//!
//! ## Architecture
//!
//! - **`progress-core`**: Errors, models, and domain constants
//! - **`progress-intelligence`**: The analytics computations and their configuration
//! - **This crate**: JSON input loading, logging setup, and the `progress-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{Duration, NaiveDate};
//! use progress_analytics::intelligence::compute_streak;
//! use progress_analytics::models::ProgressEntry;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
//! let entries: Vec<ProgressEntry> = (0..3)
//!     .map(|offset| ProgressEntry::new(today - Duration::days(offset)).with_weight(80.0))
//!     .collect();
//!
//! assert_eq!(compute_streak(&entries, today), 3);
//! ```

/// Domain constants (BMI bands, consistency ratios, goal factors)
pub use progress_core::constants;
/// Unified error handling
pub use progress_core::errors;
/// Progress entries, subject profiles, metrics, and periods
pub use progress_core::models;

/// Analytics engine
pub mod intelligence;

/// JSON input loading and validation
pub mod input;

/// Structured logging configuration
pub mod logging;
