// ABOUTME: BMI projection across progress entries using the subject's profile height
// ABOUTME: Classifies each BMI value into underweight, normal, overweight, or obese
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::NaiveDate;
use progress_core::constants::bmi::{CM_PER_METER, NORMAL_UPPER, OVERWEIGHT_UPPER, UNDERWEIGHT_UPPER};
use progress_core::constants::precision::MEASUREMENT_DECIMALS;
use progress_core::models::ProgressEntry;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metrics_extractor::sorted_by_date;
use crate::statistical_analysis::round_to;

/// BMI classification band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_UPPER {
            Self::Underweight
        } else if bmi < NORMAL_UPPER {
            Self::Normal
        } else if bmi < OVERWEIGHT_UPPER {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// BMI of one entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiPoint {
    /// Entry date
    pub date: NaiveDate,
    /// BMI rounded to one decimal
    pub bmi: f64,
    /// Band of the unrounded BMI
    pub category: BmiCategory,
}

/// Body Mass Index for a weight (kg) and height (cm)
///
/// Returns `None` unless both values are positive.
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / CM_PER_METER;
    Some(weight_kg / (height_m * height_m))
}

/// BMI progression over `entries`, in date order
///
/// Entries without a weight are skipped. Without a known height the result is
/// empty.
#[must_use]
pub fn compute_bmi_progression(entries: &[ProgressEntry], height_cm: Option<f64>) -> Vec<BmiPoint> {
    let Some(height_cm) = height_cm else {
        return Vec::new();
    };

    let progression: Vec<BmiPoint> = sorted_by_date(entries)
        .into_iter()
        .filter_map(|entry| {
            let bmi = calculate_bmi(entry.weight?, height_cm)?;
            Some(BmiPoint {
                date: entry.date,
                bmi: round_to(bmi, MEASUREMENT_DECIMALS),
                category: BmiCategory::from_bmi(bmi),
            })
        })
        .collect();

    debug!(points = progression.len(), height_cm, "computed BMI progression");
    progression
}
