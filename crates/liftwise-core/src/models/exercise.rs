// ABOUTME: Exercise catalog reference data (muscles, movement pattern, mechanic, defaults)
// ABOUTME: Exercise, RepRange, Mechanic, MuscleGroup, MovementPattern, and Equipment definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use crate::constants::effort::MAX_TARGET_RIR;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a movement trains several joints or one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mechanic {
    /// Multi-joint movement (squat, bench press, row)
    Compound,
    /// Single-joint movement (curl, lateral raise)
    Isolation,
}

/// Muscle groups used for volume accounting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats, rhomboids, mid traps
    Back,
    /// Deltoids
    Shoulders,
    /// Elbow flexors
    Biceps,
    /// Elbow extensors
    Triceps,
    /// Quadriceps
    Quads,
    /// Hamstrings
    Hamstrings,
    /// Gluteals
    Glutes,
    /// Gastrocnemius and soleus
    Calves,
    /// Trunk musculature
    Core,
    /// Grip and wrist musculature
    Forearms,
    /// Upper trapezius
    Traps,
}

/// Fundamental movement pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementPattern {
    /// Bench press, push-up
    HorizontalPush,
    /// Overhead press
    VerticalPush,
    /// Rows
    HorizontalPull,
    /// Pull-ups, pulldowns
    VerticalPull,
    /// Squat variations
    Squat,
    /// Deadlift, hip hinge variations
    Hinge,
    /// Split squats, lunges
    Lunge,
    /// Loaded carries
    Carry,
    /// Single-joint work
    Isolation,
}

/// Equipment needed to perform an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    /// Olympic barbell
    Barbell,
    /// Dumbbells
    Dumbbell,
    /// Cable stack
    Cable,
    /// Selectorized or plate-loaded machine
    Machine,
    /// No external load
    Bodyweight,
    /// Kettlebell
    Kettlebell,
    /// Resistance band
    Band,
}

/// Inclusive rep range (`min..=max`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepRange {
    /// Lowest acceptable rep count
    pub min: u32,
    /// Highest rep count before load should increase
    pub max: u32,
}

impl RepRange {
    /// Create a rep range
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether `reps` falls inside the range
    #[must_use]
    pub const fn contains(&self, reps: u32) -> bool {
        reps >= self.min && reps <= self.max
    }

    /// Validate that the range is non-empty and starts at one rep or more
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `min` is zero or exceeds `max`
    pub fn validate(&self) -> AppResult<()> {
        if self.min == 0 {
            return Err(AppError::out_of_range(
                "rep_range.min",
                "Rep range must start at 1 or more",
            ));
        }
        if self.min > self.max {
            return Err(AppError::out_of_range(
                "rep_range",
                format!("Rep range min {} exceeds max {}", self.min, self.max),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for RepRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Exercise catalog record. Immutable reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Muscles receiving full volume credit
    pub primary_muscles: Vec<MuscleGroup>,
    /// Muscles receiving partial volume credit
    #[serde(default)]
    pub secondary_muscles: Vec<MuscleGroup>,
    /// Movement pattern
    pub movement_pattern: MovementPattern,
    /// Compound or isolation
    pub mechanic: Mechanic,
    /// Rep range used outside of periodization adjustments
    pub default_rep_range: RepRange,
    /// Reps in reserve targeted by default
    pub default_target_rir: u8,
    /// Smallest load jump available (kg)
    pub min_weight_increment: f64,
    /// Equipment needed
    #[serde(default)]
    pub equipment: Vec<Equipment>,
}

impl Exercise {
    /// Validate catalog invariants before the record is used by the engine
    ///
    /// # Errors
    ///
    /// Returns an error when the id is empty, the rep range is malformed,
    /// the default RIR exceeds 4, or the increment is not positive
    pub fn validate(&self) -> AppResult<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::missing_field("exercise.id"));
        }
        self.default_rep_range.validate()?;
        if self.default_target_rir > MAX_TARGET_RIR {
            return Err(AppError::out_of_range(
                "default_target_rir",
                format!(
                    "Target RIR {} exceeds maximum of {MAX_TARGET_RIR}",
                    self.default_target_rir
                ),
            )
            .with_resource_id(&self.id));
        }
        if !self.min_weight_increment.is_finite() || self.min_weight_increment <= 0.0 {
            return Err(AppError::out_of_range(
                "min_weight_increment",
                "Minimum weight increment must be positive",
            )
            .with_resource_id(&self.id));
        }
        Ok(())
    }
}
