// ABOUTME: Lifter profile used by deload gating and deload frequency planning
// ABOUTME: ExperienceLevel tiers plus age, training age, sleep, and stress ratings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Training experience tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// Under roughly a year of consistent training
    Novice,
    /// One to several years of structured training
    #[default]
    Intermediate,
    /// Many years of training, slow progress
    Advanced,
}

/// Lifter profile supplied by the host application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Experience tier
    pub experience: ExperienceLevel,
    /// Age in years
    pub age: u32,
    /// Years of consistent training
    pub training_age_years: f64,
    /// Typical sleep quality (1 = very poor, 5 = excellent)
    pub sleep_quality: u8,
    /// Typical life stress (1 = very low, 5 = very high)
    pub stress_level: u8,
}

impl UserProfile {
    /// Reject malformed profiles
    ///
    /// # Errors
    ///
    /// Returns an error when ratings fall outside 1-5 or training age is negative
    pub fn validate(&self) -> AppResult<()> {
        if !(1..=5).contains(&self.sleep_quality) {
            return Err(AppError::out_of_range("sleep_quality", "Sleep quality must be 1-5"));
        }
        if !(1..=5).contains(&self.stress_level) {
            return Err(AppError::out_of_range("stress_level", "Stress level must be 1-5"));
        }
        if !self.training_age_years.is_finite() || self.training_age_years < 0.0 {
            return Err(AppError::out_of_range(
                "training_age_years",
                "Training age must be a non-negative number of years",
            ));
        }
        Ok(())
    }
}
