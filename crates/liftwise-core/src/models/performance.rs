// ABOUTME: Per-session best-set performance snapshot used for trend and plateau analysis
// ABOUTME: Derived, append-only, one per exercise per session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use crate::constants::effort::{MAX_RPE, MIN_RPE};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Best working set of one exercise in one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSnapshot {
    /// Catalog exercise id
    pub exercise_id: String,
    /// Session date
    pub date: DateTime<Utc>,
    /// Load of the best set (kg)
    pub weight: f64,
    /// Reps of the best set
    pub reps: u32,
    /// RPE of the best set
    pub rpe: f64,
    /// Estimated one-rep max derived from the best set
    pub e1rm: f64,
    /// Working sets performed for the exercise in that session
    pub sets: u32,
}

impl PerformanceSnapshot {
    /// Reject malformed snapshots before they reach trend analysis
    ///
    /// # Errors
    ///
    /// Returns an error when the exercise id is empty, the weight or E1RM is
    /// negative or non-finite, or the RPE is outside 1-10
    pub fn validate(&self) -> AppResult<()> {
        if self.exercise_id.trim().is_empty() {
            return Err(AppError::missing_field("exercise_id"));
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(AppError::out_of_range(
                "weight",
                format!("Weight must be a non-negative number, got {}", self.weight),
            )
            .with_resource_id(&self.exercise_id));
        }
        if !(MIN_RPE..=MAX_RPE).contains(&self.rpe) {
            return Err(AppError::out_of_range(
                "rpe",
                format!("RPE must be between {MIN_RPE} and {MAX_RPE}, got {}", self.rpe),
            )
            .with_resource_id(&self.exercise_id));
        }
        if !self.e1rm.is_finite() || self.e1rm < 0.0 {
            return Err(AppError::out_of_range(
                "e1rm",
                format!("E1RM must be a non-negative number, got {}", self.e1rm),
            )
            .with_resource_id(&self.exercise_id));
        }
        Ok(())
    }
}
