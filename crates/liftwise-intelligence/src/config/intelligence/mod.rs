// ABOUTME: Engine configuration for progression, deload, plateau, calibration, and discomfort
// ABOUTME: Orchestrates section configs and provides unified validation and environment loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Intelligence Configuration Module
//!
//! Every engine component takes its section by reference. Defaults match the
//! reference constants in [`crate::constants`]; operators may override
//! individual values through `LIFTWISE_*` environment variables.
//!
//! # Module Structure
//!
//! - `progression` - Readiness, deload, and fatigue thresholds for prescriptions
//! - `deload` - Trigger counts required per experience tier
//! - `plateau` - Stagnation window and improvement margin
//! - `calibration` - AMRAP matching window, tolerance, and confidence cut-offs
//! - `discomfort` - Trailing window and injury prompt threshold

/// AMRAP matching and confidence settings for effort calibration
pub mod calibration;
/// Trigger counts per experience tier
pub mod deload;
/// Discomfort window and injury prompt threshold
pub mod discomfort;
/// Configuration loading and validation errors
pub mod error;
/// Stagnation window settings
pub mod plateau;
/// Readiness and fatigue thresholds plus load steps for prescriptions
pub mod progression;

pub use calibration::CalibrationConfig;
pub use deload::DeloadConfig;
pub use discomfort::DiscomfortConfig;
pub use error::ConfigError;
pub use plateau::PlateauConfig;
pub use progression::{
    LoadStepConfig, ProgressionAdjustments, ProgressionConfig, ProgressionThresholds,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Next-session prescription thresholds
    pub progression: ProgressionConfig,
    /// Deload trigger gating
    pub deload: DeloadConfig,
    /// Plateau detection windows
    pub plateau: PlateauConfig,
    /// Effort calibration matching and confidence
    pub calibration: CalibrationConfig,
    /// Discomfort pattern window
    pub discomfort: DiscomfortConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRange`] or [`ConfigError::ValueOutOfRange`]
    /// naming the first inconsistent value
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_progression()?;
        self.validate_plateau()?;
        self.validate_calibration()?;

        let deload = &self.deload;
        if deload.novice_min_reasons == 0
            || deload.intermediate_min_reasons == 0
            || deload.advanced_min_reasons == 0
        {
            return Err(ConfigError::ValueOutOfRange(
                "deload minimum reasons must be at least 1",
            ));
        }

        let discomfort = &self.discomfort;
        if discomfort.window_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "discomfort window_days must be positive",
            ));
        }
        if discomfort.min_pattern_occurrences == 0
            || discomfort.injury_occurrences < discomfort.min_pattern_occurrences
        {
            return Err(ConfigError::InvalidRange(
                "discomfort injury_occurrences must be >= min_pattern_occurrences >= 1",
            ));
        }

        Ok(())
    }

    fn validate_progression(&self) -> Result<(), ConfigError> {
        let thresholds = &self.progression.thresholds;
        let adjustments = &self.progression.adjustments;

        if !(0.0..=100.0).contains(&thresholds.low_readiness) {
            return Err(ConfigError::ValueOutOfRange(
                "low_readiness must be between 0 and 100",
            ));
        }
        if !(0.0..=100.0).contains(&thresholds.high_systemic_fatigue_percent) {
            return Err(ConfigError::ValueOutOfRange(
                "high_systemic_fatigue_percent must be between 0 and 100",
            ));
        }
        if thresholds.moderate_weekly_fatigue > thresholds.high_weekly_fatigue {
            return Err(ConfigError::InvalidRange(
                "moderate_weekly_fatigue must be <= high_weekly_fatigue",
            ));
        }
        if adjustments.deload_load_factor <= 0.0 || adjustments.deload_load_factor > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "deload_load_factor must be in (0, 1]",
            ));
        }
        if !(0.0..1.0).contains(&adjustments.max_readiness_reduction) {
            return Err(ConfigError::ValueOutOfRange(
                "max_readiness_reduction must be in [0, 1)",
            ));
        }
        if adjustments.related_exercise_factor <= 0.0 || adjustments.related_exercise_factor > 1.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "related_exercise_factor must be in (0, 1]",
            ));
        }
        if adjustments.deload_max_sets == 0 || adjustments.default_sets == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "deload_max_sets and default_sets must be at least 1",
            ));
        }
        if adjustments.default_sets > adjustments.max_sets {
            return Err(ConfigError::InvalidRange("default_sets must be <= max_sets"));
        }

        let steps = &self.progression.load_steps;
        if [steps.novice, steps.intermediate, steps.advanced]
            .iter()
            .any(|step| !(0.0..=0.25).contains(step))
        {
            return Err(ConfigError::ValueOutOfRange(
                "load steps must be between 0 and 0.25",
            ));
        }

        Ok(())
    }

    fn validate_plateau(&self) -> Result<(), ConfigError> {
        let plateau = &self.plateau;
        if plateau.window < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "plateau window must be at least 2 snapshots",
            ));
        }
        if plateau.min_improvement_percent < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "plateau min_improvement_percent must be non-negative",
            ));
        }
        if plateau.stagnant_weeks <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "plateau stagnant_weeks must be positive",
            ));
        }
        Ok(())
    }

    fn validate_calibration(&self) -> Result<(), ConfigError> {
        let calibration = &self.calibration;
        if calibration.max_history == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "calibration max_history must be at least 1",
            ));
        }
        if calibration.match_window_days <= 0 || calibration.stale_after_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "calibration windows must be positive",
            ));
        }
        if !(0.0..1.0).contains(&calibration.weight_tolerance) {
            return Err(ConfigError::ValueOutOfRange(
                "calibration weight_tolerance must be in [0, 1)",
            ));
        }
        if calibration.medium_confidence_samples == 0
            || calibration.medium_confidence_samples >= calibration.high_confidence_samples
        {
            return Err(ConfigError::InvalidRange(
                "calibration confidence cut-offs must satisfy 1 <= medium < high",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(error) => Err(error.into()),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Progression overrides
        Self::apply_env_var(
            "LIFTWISE_PROGRESSION_READINESS_THRESHOLD",
            &mut self.progression.thresholds.low_readiness,
        )?;
        Self::apply_env_var(
            "LIFTWISE_PROGRESSION_SYSTEMIC_FATIGUE_HIGH",
            &mut self.progression.thresholds.high_systemic_fatigue_percent,
        )?;
        Self::apply_env_var(
            "LIFTWISE_PROGRESSION_WEEKLY_FATIGUE_HIGH",
            &mut self.progression.thresholds.high_weekly_fatigue,
        )?;
        Self::apply_env_var(
            "LIFTWISE_PROGRESSION_WEEKLY_FATIGUE_MODERATE",
            &mut self.progression.thresholds.moderate_weekly_fatigue,
        )?;
        Self::apply_env_var(
            "LIFTWISE_PROGRESSION_DELOAD_LOAD_FACTOR",
            &mut self.progression.adjustments.deload_load_factor,
        )?;
        Self::apply_env_var(
            "LIFTWISE_PROGRESSION_MAX_SETS",
            &mut self.progression.adjustments.max_sets,
        )?;

        // Deload overrides
        Self::apply_env_var(
            "LIFTWISE_DELOAD_NOVICE_MIN_REASONS",
            &mut self.deload.novice_min_reasons,
        )?;

        // Plateau overrides
        Self::apply_env_var("LIFTWISE_PLATEAU_WINDOW", &mut self.plateau.window)?;
        Self::apply_env_var(
            "LIFTWISE_PLATEAU_MIN_IMPROVEMENT_PERCENT",
            &mut self.plateau.min_improvement_percent,
        )?;
        Self::apply_env_var(
            "LIFTWISE_PLATEAU_STAGNANT_WEEKS",
            &mut self.plateau.stagnant_weeks,
        )?;

        // Calibration overrides
        Self::apply_env_var(
            "LIFTWISE_CALIBRATION_MAX_HISTORY",
            &mut self.calibration.max_history,
        )?;
        Self::apply_env_var(
            "LIFTWISE_CALIBRATION_MATCH_WINDOW_DAYS",
            &mut self.calibration.match_window_days,
        )?;
        Self::apply_env_var(
            "LIFTWISE_CALIBRATION_STALE_DAYS",
            &mut self.calibration.stale_after_days,
        )?;

        // Discomfort overrides
        Self::apply_env_var(
            "LIFTWISE_DISCOMFORT_WINDOW_DAYS",
            &mut self.discomfort.window_days,
        )?;
        Self::apply_env_var(
            "LIFTWISE_DISCOMFORT_INJURY_OCCURRENCES",
            &mut self.discomfort.injury_occurrences,
        )?;

        Ok(self)
    }
}
