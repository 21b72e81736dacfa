// ABOUTME: Trailing analysis windows (week, month, quarter, year)
// ABOUTME: Maps each period to its day count and computes the inclusive window start
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::periods::{MONTH_DAYS, QUARTER_DAYS, WEEK_DAYS, YEAR_DAYS};
use crate::errors::AppError;

/// Trailing calendar window used to scope period analytics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsPeriod {
    /// Last 7 days
    Week,
    /// Last 30 days
    #[default]
    Month,
    /// Last 90 days
    Quarter,
    /// Last 365 days
    Year,
}

impl AnalyticsPeriod {
    /// Number of trailing days covered by this period
    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::Week => WEEK_DAYS,
            Self::Month => MONTH_DAYS,
            Self::Quarter => QUARTER_DAYS,
            Self::Year => YEAR_DAYS,
        }
    }

    /// First date of the window ending at `today` (both ends inclusive)
    #[must_use]
    pub fn start_date(self, today: NaiveDate) -> NaiveDate {
        today - Duration::days(self.days())
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for AnalyticsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalyticsPeriod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            other => Err(AppError::invalid_input(format!(
                "Invalid period '{other}': expected one of week, month, quarter, year"
            ))),
        }
    }
}
