// ABOUTME: Weekly recovery and performance survey, one record per training week
// ABOUTME: Append-only time series consumed by deload detection and fatigue scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Aggregated survey for one training week. Ratings use a 1-5 scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPerformanceData {
    /// Week index within the training history (ascending)
    pub week_number: u32,
    /// Perceived fatigue (1 = fresh, 5 = exhausted)
    pub perceived_fatigue: u8,
    /// Sleep quality (1 = very poor, 5 = excellent)
    pub sleep_quality: u8,
    /// Motivation to train (1 = none, 5 = high)
    pub motivation: u8,
    /// Prescribed reps not completed across the week
    pub missed_reps: u32,
    /// Joint pain reported during the week
    pub joint_pain: bool,
    /// Lifts trending down compared to previous weeks
    pub strength_decline: bool,
}

impl WeeklyPerformanceData {
    /// Reject surveys with ratings outside 1-5
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the first offending rating
    pub fn validate(&self) -> AppResult<()> {
        for (field, value) in [
            ("perceived_fatigue", self.perceived_fatigue),
            ("sleep_quality", self.sleep_quality),
            ("motivation", self.motivation),
        ] {
            if !(1..=5).contains(&value) {
                return Err(AppError::out_of_range(
                    field,
                    format!("{field} must be between 1 and 5, got {value}"),
                ));
            }
        }
        Ok(())
    }
}
