// ABOUTME: Core data models for body-measurement progress analytics
// ABOUTME: Re-exports ProgressEntry, SubjectProfile, Metric, AnalyticsPeriod and related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain records supplied by the surrounding service. The analytics engine only
//! reads them; it never creates, mutates, or deletes entries.
//!
//! ## Core Models
//!
//! - `ProgressEntry`: One dated measurement record for a subject
//! - `SubjectProfile`: Height and stated fitness goal of the subject
//! - `Metric`: Closed set of named measurement fields
//! - `AnalyticsPeriod`: Trailing calendar window used to scope analytics

mod metric;
mod period;
mod profile;
mod progress;

pub use metric::Metric;
pub use period::AnalyticsPeriod;
pub use profile::{FitnessGoal, SubjectProfile};
pub use progress::{validate_entries, BodyMeasurements, ProgressEntry};
