// ABOUTME: Dated body-measurement records and boundary validation for entry lists
// ABOUTME: ProgressEntry mirrors the stored record layout with nested circumferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Metric;
use crate::errors::{AppError, AppResult};

/// Body circumferences in centimetres
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    /// Chest circumference
    #[serde(default)]
    pub chest: Option<f64>,
    /// Waist circumference
    #[serde(default)]
    pub waist: Option<f64>,
    /// Hip circumference
    #[serde(default)]
    pub hips: Option<f64>,
    /// Arm circumference
    #[serde(default)]
    pub arms: Option<f64>,
    /// Thigh circumference
    #[serde(default)]
    pub thighs: Option<f64>,
}

/// One dated measurement record for a subject
///
/// At most one entry exists per subject per date; the external store enforces
/// this and the engine assumes it.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use progress_core::models::{Metric, ProgressEntry};
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let entry = ProgressEntry::new(date).with_weight(80.5).with_waist(88.0);
/// assert_eq!(entry.metric_value(Metric::Weight), Some(80.5));
/// assert_eq!(entry.metric_value(Metric::Chest), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// Calendar date of the measurement
    pub date: NaiveDate,
    /// Body weight (kg)
    #[serde(default)]
    pub weight: Option<f64>,
    /// Body fat (%)
    #[serde(default)]
    pub body_fat: Option<f64>,
    /// Muscle mass (kg)
    #[serde(default)]
    pub muscle_mass: Option<f64>,
    /// Body circumferences (cm)
    #[serde(default)]
    pub measurements: BodyMeasurements,
    /// Free text, ignored by analytics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ProgressEntry {
    /// Create an entry with no measurements
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weight: None,
            body_fat: None,
            muscle_mass: None,
            measurements: BodyMeasurements::default(),
            notes: None,
        }
    }

    /// Set body weight (kg)
    #[must_use]
    pub const fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set body fat (%)
    #[must_use]
    pub const fn with_body_fat(mut self, body_fat: f64) -> Self {
        self.body_fat = Some(body_fat);
        self
    }

    /// Set muscle mass (kg)
    #[must_use]
    pub const fn with_muscle_mass(mut self, muscle_mass: f64) -> Self {
        self.muscle_mass = Some(muscle_mass);
        self
    }

    /// Set chest circumference (cm)
    #[must_use]
    pub const fn with_chest(mut self, chest: f64) -> Self {
        self.measurements.chest = Some(chest);
        self
    }

    /// Set waist circumference (cm)
    #[must_use]
    pub const fn with_waist(mut self, waist: f64) -> Self {
        self.measurements.waist = Some(waist);
        self
    }

    /// Set hip circumference (cm)
    #[must_use]
    pub const fn with_hips(mut self, hips: f64) -> Self {
        self.measurements.hips = Some(hips);
        self
    }

    /// Set arm circumference (cm)
    #[must_use]
    pub const fn with_arms(mut self, arms: f64) -> Self {
        self.measurements.arms = Some(arms);
        self
    }

    /// Set thigh circumference (cm)
    #[must_use]
    pub const fn with_thighs(mut self, thighs: f64) -> Self {
        self.measurements.thighs = Some(thighs);
        self
    }

    /// Value of `metric` on this entry, `None` when unset
    #[must_use]
    pub const fn metric_value(&self, metric: Metric) -> Option<f64> {
        metric.extract_value(self)
    }

    /// Whether any of the eight measurement fields is set
    #[must_use]
    pub fn has_measurements(&self) -> bool {
        Metric::ALL
            .iter()
            .any(|metric| self.metric_value(*metric).is_some())
    }
}

/// Validate an entry list supplied by a caller
///
/// Rejects non-finite or negative measurements and repeated dates. The analytics
/// functions assume lists that pass this check.
///
/// # Errors
///
/// Returns `VALUE_OUT_OF_RANGE` for a bad measurement and `INVALID_INPUT` for a
/// duplicated date.
pub fn validate_entries(entries: &[ProgressEntry]) -> AppResult<()> {
    let mut seen = HashSet::with_capacity(entries.len());

    for entry in entries {
        if !seen.insert(entry.date) {
            return Err(AppError::invalid_input(format!(
                "Duplicate progress entry for {}",
                entry.date
            )));
        }

        for metric in Metric::ALL {
            if let Some(value) = entry.metric_value(metric) {
                if !value.is_finite() || value < 0.0 {
                    return Err(AppError::value_out_of_range(format!(
                        "{} on {} must be a non-negative number, got {value}",
                        metric.as_str(),
                        entry.date
                    )));
                }
            }
        }
    }

    Ok(())
}
