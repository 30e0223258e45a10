// ABOUTME: Progression calculator configuration for next-session prescriptions
// ABOUTME: Readiness, deload, fatigue thresholds, and load-step percentages per experience tier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Progression Configuration
//!
//! Reference values: readiness threshold 60/100, systemic fatigue 80%, weekly
//! fatigue score high above 8/10 and moderate from 5/10.

use crate::models::ExperienceLevel;
use serde::{Deserialize, Serialize};

/// Progression calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Readiness and fatigue thresholds
    pub thresholds: ProgressionThresholds,
    /// Load and volume adjustments
    pub adjustments: ProgressionAdjustments,
    /// Percentage load step per experience tier
    pub load_steps: LoadStepConfig,
}

/// Thresholds that switch the calculator into a protective branch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionThresholds {
    /// Readiness score (0-100) below which load and volume are reduced
    pub low_readiness: f64,
    /// Systemic fatigue percentage above which target RIR rises by one
    pub high_systemic_fatigue_percent: f64,
    /// Weekly fatigue score (0-10) above which load is held
    pub high_weekly_fatigue: f64,
    /// Weekly fatigue score (0-10) from which a monitoring note is added
    pub moderate_weekly_fatigue: f64,
    /// RIR shortfall tolerated before last session's effort counts as too hard
    pub effort_tolerance_rir: f64,
}

/// Multipliers and caps applied by the calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionAdjustments {
    /// Share of last load used during a deload week (0.8-0.9)
    pub deload_load_factor: f64,
    /// Set cap during a deload week
    pub deload_max_sets: u32,
    /// Target RIR during a deload week
    pub deload_target_rir: u8,
    /// Largest proportional reduction applied at zero readiness
    pub max_readiness_reduction: f64,
    /// Share of a related exercise's working weight used as a starting point
    pub related_exercise_factor: f64,
    /// Sets prescribed when no history exists
    pub default_sets: u32,
    /// Upper bound when adding sets
    pub max_sets: u32,
}

/// Percentage of last load added when progressing load, per experience tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadStepConfig {
    /// Novice step (fraction of last load)
    pub novice: f64,
    /// Intermediate step
    pub intermediate: f64,
    /// Advanced step
    pub advanced: f64,
}

impl LoadStepConfig {
    /// Step fraction for a tier
    #[must_use]
    pub const fn for_experience(&self, experience: ExperienceLevel) -> f64 {
        match experience {
            ExperienceLevel::Novice => self.novice,
            ExperienceLevel::Intermediate => self.intermediate,
            ExperienceLevel::Advanced => self.advanced,
        }
    }
}

impl Default for ProgressionThresholds {
    fn default() -> Self {
        Self {
            low_readiness: 60.0,
            high_systemic_fatigue_percent: 80.0,
            high_weekly_fatigue: 8.0,
            moderate_weekly_fatigue: 5.0,
            effort_tolerance_rir: 1.0,
        }
    }
}

impl Default for ProgressionAdjustments {
    fn default() -> Self {
        Self {
            deload_load_factor: 0.85,
            deload_max_sets: 2,
            deload_target_rir: 4,
            max_readiness_reduction: 0.20,
            related_exercise_factor: 0.90,
            default_sets: 3,
            max_sets: 5,
        }
    }
}

impl Default for LoadStepConfig {
    fn default() -> Self {
        Self {
            novice: 0.05,
            intermediate: 0.025,
            advanced: 0.015,
        }
    }
}
