// ABOUTME: Logged working and warmup sets with effort, quality label, and optional feedback
// ABOUTME: SetLog, SetQuality, SetFeedback, and bodyweight effective-load modelling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use crate::constants::effort::{MAX_RPE, MIN_RPE};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Training stimulus value of a single set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetQuality {
    /// Too far from failure to drive adaptation
    Junk,
    /// Counts toward volume but below the productive effort band
    Effective,
    /// Inside the productive effort band
    Stimulative,
    /// Failure reached before the last set
    Excessive,
}

impl SetQuality {
    /// Whether the set counts toward productive weekly volume
    #[must_use]
    pub const fn counts_as_volume(self) -> bool {
        matches!(self, Self::Effective | Self::Stimulative)
    }
}

impl fmt::Display for SetQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Junk => "junk",
            Self::Effective => "effective",
            Self::Stimulative => "stimulative",
            Self::Excessive => "excessive",
        };
        f.write_str(label)
    }
}

/// Lifter's rating of their own technique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormFeedback {
    /// Clean repetitions throughout
    Clean,
    /// Some breakdown on the final reps
    SomeBreakdown,
    /// Technique broke down noticeably
    Ugly,
}

/// Lifter's rating of how hard the set felt relative to expectation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyFeedback {
    /// Easier than expected
    TooEasy,
    /// As expected
    AsExpected,
    /// Harder than expected
    TooHard,
}

/// Optional qualitative feedback attached to a set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetFeedback {
    /// Technique rating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<FormFeedback>,
    /// Difficulty rating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<DifficultyFeedback>,
    /// Free-form note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Load modifiers for bodyweight movements (dips, pull-ups, push-ups)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyweightModification {
    /// Lifter's bodyweight (kg)
    pub bodyweight_kg: f64,
    /// Share of bodyweight moved by the exercise (1.0 for pull-ups, ~0.65 for push-ups)
    pub bodyweight_fraction: f64,
    /// External load added with a belt or vest (kg)
    #[serde(default)]
    pub added_kg: f64,
    /// Machine or band assistance subtracted from the load (kg)
    #[serde(default)]
    pub assistance_kg: f64,
}

impl BodyweightModification {
    /// Load actually moved, floored at zero
    #[must_use]
    pub fn effective_load(&self) -> f64 {
        self.bodyweight_kg
            .mul_add(self.bodyweight_fraction, self.added_kg - self.assistance_kg)
            .max(0.0)
    }
}

/// One logged set. Created once; only an explicit correction replaces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetLog {
    /// Unique identifier
    pub id: Uuid,
    /// Exercise block (exercise slot within a session) this set belongs to
    pub exercise_block_id: String,
    /// Catalog exercise id
    pub exercise_id: String,
    /// 1-based position within the block
    pub set_number: u32,
    /// External load (kg)
    pub weight: f64,
    /// Completed repetitions
    pub reps: u32,
    /// Reported RPE (1-10); RIR = 10 - RPE
    pub rpe: f64,
    /// Warmup sets never count toward volume or performance
    #[serde(default)]
    pub is_warmup: bool,
    /// Quality label computed when the set was logged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<SetQuality>,
    /// Explanation of the quality label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_reason: Option<String>,
    /// Optional form/difficulty feedback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<SetFeedback>,
    /// Bodyweight modification data, when the exercise moves bodyweight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bodyweight: Option<BodyweightModification>,
    /// When the set was logged
    pub logged_at: DateTime<Utc>,
}

impl SetLog {
    /// Load used for estimation: bodyweight effective load when present, else `weight`
    #[must_use]
    pub fn load(&self) -> f64 {
        self.bodyweight
            .as_ref()
            .map_or(self.weight, BodyweightModification::effective_load)
    }

    /// Reject malformed records before they reach the engine
    ///
    /// # Errors
    ///
    /// Returns an error when ids are empty, the set number is zero, the weight is
    /// negative or non-finite, or the RPE is outside 1-10
    pub fn validate(&self) -> AppResult<()> {
        if self.exercise_id.trim().is_empty() {
            return Err(AppError::missing_field("exercise_id"));
        }
        if self.set_number == 0 {
            return Err(AppError::out_of_range("set_number", "Set numbers start at 1")
                .with_resource_id(self.id.to_string()));
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(AppError::out_of_range(
                "weight",
                format!("Weight must be a non-negative number, got {}", self.weight),
            )
            .with_resource_id(self.id.to_string()));
        }
        if !(MIN_RPE..=MAX_RPE).contains(&self.rpe) {
            return Err(AppError::out_of_range(
                "rpe",
                format!("RPE must be between {MIN_RPE} and {MAX_RPE}, got {}", self.rpe),
            )
            .with_resource_id(self.id.to_string()));
        }
        if let Some(bw) = &self.bodyweight {
            if bw.bodyweight_kg <= 0.0 || !(0.0..=1.0).contains(&bw.bodyweight_fraction) {
                return Err(AppError::out_of_range(
                    "bodyweight",
                    "Bodyweight must be positive and fraction within 0-1",
                )
                .with_resource_id(self.id.to_string()));
            }
        }
        Ok(())
    }
}
