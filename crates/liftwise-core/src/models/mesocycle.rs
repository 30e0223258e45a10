// ABOUTME: Mesocycle week templates and periodization plans consumed by the scheduler
// ABOUTME: MesocycleWeek, SessionTemplate, ExercisePrescription, PeriodizationPlan, DeloadType
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use super::exercise::RepRange;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of reduced-load week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeloadType {
    /// Cut sets, keep load
    #[default]
    Volume,
    /// Cut load and some sets
    Intensity,
    /// Cut both sets and load substantially
    Full,
}

impl fmt::Display for DeloadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Volume => "volume",
            Self::Intensity => "intensity",
            Self::Full => "full",
        };
        f.write_str(label)
    }
}

/// Periodization model for a training block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodizationModel {
    /// Hypertrophy first, then strength, then a short peak
    #[default]
    Linear,
    /// Phases proportioned across equal thirds of the block
    Block,
}

/// Training phase resolved for a given week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingPhase {
    /// Moderate loads, wider rep ranges
    Hypertrophy,
    /// Heavier loads, narrower rep ranges
    Strength,
    /// Heaviest loads, lowest reps
    Peaking,
    /// Reduced-load recovery week
    Deload,
}

impl fmt::Display for TrainingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Hypertrophy => "hypertrophy",
            Self::Strength => "strength",
            Self::Peaking => "peaking",
            Self::Deload => "deload",
        };
        f.write_str(label)
    }
}

/// Mesocycle plan parameters relevant to deload scheduling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodizationPlan {
    /// Periodization model
    pub model: PeriodizationModel,
    /// Weeks in the block, deload included
    pub total_weeks: u32,
    /// Planned weeks between deloads
    pub deload_frequency_weeks: u32,
    /// Weeks elapsed since the mesocycle started
    pub weeks_since_start: u32,
}

/// One exercise slot inside a session template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePrescription {
    /// Catalog exercise id
    pub exercise_id: String,
    /// Working sets
    pub sets: u32,
    /// Rep range
    pub rep_range: RepRange,
    /// Target reps in reserve
    pub target_rir: u8,
    /// Planned load (kg), when already known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// One session inside a week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTemplate {
    /// Session label ("Upper A", "Lower B")
    pub name: String,
    /// Day index within the week (0 = first training day)
    pub day: u8,
    /// Exercise slots
    pub exercises: Vec<ExercisePrescription>,
}

/// Inclusive RPE target band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RpeRange {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

/// Session templates for one week of a mesocycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MesocycleWeek {
    /// Week index within the mesocycle (1-based)
    pub week_number: u32,
    /// Sessions planned this week
    pub sessions: Vec<SessionTemplate>,
    /// Total working sets across the week
    pub total_sets: u32,
    /// Multiplier applied to planned volume (1.0 = as programmed)
    pub volume_modifier: f64,
    /// Multiplier applied to planned load (1.0 = as programmed)
    pub intensity_modifier: f64,
    /// RPE band targeted this week
    pub rpe_target: RpeRange,
    /// Whether this is a reduced-load week
    #[serde(default)]
    pub is_deload: bool,
    /// Kind of deload applied, when `is_deload`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deload_type: Option<DeloadType>,
}

impl MesocycleWeek {
    /// Sum of working sets across every session slot
    #[must_use]
    pub fn prescribed_sets(&self) -> u32 {
        self.sessions
            .iter()
            .flat_map(|session| &session.exercises)
            .map(|slot| slot.sets)
            .sum()
    }

    /// Reject templates with malformed slots
    ///
    /// # Errors
    ///
    /// Returns an error when a slot has an invalid rep range or the modifiers are not positive
    pub fn validate(&self) -> AppResult<()> {
        if self.volume_modifier <= 0.0 || self.intensity_modifier <= 0.0 {
            return Err(AppError::out_of_range(
                "modifier",
                "Volume and intensity modifiers must be positive",
            ));
        }
        for slot in self.sessions.iter().flat_map(|session| &session.exercises) {
            slot.rep_range
                .validate()
                .map_err(|e| e.with_resource_id(&slot.exercise_id))?;
        }
        Ok(())
    }
}
