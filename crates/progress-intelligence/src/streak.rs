// ABOUTME: Consecutive-day logging streak counted backward from a reference date
// ABOUTME: The reference date is injected so results never depend on the wall clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use progress_core::models::ProgressEntry;
use tracing::debug;

/// Count consecutive calendar days with an entry, walking backward from `today`
///
/// Entries are visited newest first. The n-th visited entry (0-based) extends
/// the streak only if it is dated exactly `today - n` days; the walk stops at
/// the first mismatch. A streak that ended yesterday therefore counts as 0.
#[must_use]
pub fn compute_streak(entries: &[ProgressEntry], today: NaiveDate) -> u32 {
    let mut dates: Vec<NaiveDate> = entries.iter().map(|entry| entry.date).collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));

    let mut streak: u32 = 0;
    for date in dates {
        let days_diff = (today - date).num_days();
        if days_diff != i64::from(streak) {
            break;
        }
        streak += 1;
    }

    debug!(streak, entries = entries.len(), %today, "computed logging streak");
    streak
}
