// ABOUTME: Next-session prescription calculator: weight, reps, sets, target RIR, and rest
// ABOUTME: Ordered decisions (new exercise, deload, readiness, periodized progression) then fatigue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Progression Calculator
//!
//! Decisions are taken in a fixed order and the first match wins:
//!
//! 1. no prior performance: start from a calibrated or related-exercise estimate,
//!    or from an empty bar
//! 2. deload week: lighter load, capped sets, RIR 4
//! 3. low readiness: proportional reduction of load and sets
//! 4. normal week: periodized load, reps, or sets progression
//!
//! Fatigue adjustments are layered on top of whichever branch produced the targets.
//! Every result carries a reason describing the decision that was taken.
//!
//! # Scientific References
//!
//! - Helms, E.R., et al. (2018). "RPE vs. percentage 1RM loading in periodized programs matched
//!   for sets and repetitions." *Frontiers in Physiology*, 9, 247.
//! - Rhea, M.R., et al. (2002). "A comparison of linear and daily undulating periodized programs
//!   with equated volume and intensity for strength." *J Strength Cond Res*, 16(2), 250-255.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::algorithms::{floor_to_increment, round_to_increment, rpe_to_rir, weight_for_reps};
use crate::config::intelligence::ProgressionConfig;
use crate::constants::effort::{MAX_RPE, MAX_TARGET_RIR, MIN_RPE};
use crate::errors::{AppError, AppResult};
use crate::models::{Exercise, ExperienceLevel, PeriodizationModel, RepRange, TrainingPhase};
use crate::periodization::Periodization;

/// Kind of progression prescribed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressionType {
    /// Hold or reduce load and focus on execution
    Technique,
    /// Add weight
    Load,
    /// Add reps at the same weight
    Reps,
    /// Add a working set
    Sets,
}

impl fmt::Display for ProgressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Technique => "technique",
            Self::Load => "load",
            Self::Reps => "reps",
            Self::Sets => "sets",
        };
        f.write_str(label)
    }
}

/// Summary of the last session for the exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LastPerformance {
    /// Working weight
    pub weight: f64,
    /// Reps achieved on the top working set
    pub reps: u32,
    /// Reported RPE on that set
    pub rpe: f64,
    /// Working sets performed
    pub sets: u32,
    /// Whether every prescribed set was completed
    pub all_sets_completed: bool,
}

/// Everything the calculator needs for one exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionInput {
    /// Exercise being prescribed
    pub exercise: Exercise,
    /// Last session, when one exists
    pub last_performance: Option<LastPerformance>,
    /// Lifter experience tier
    pub experience: ExperienceLevel,
    /// Week within the current block (1-based)
    pub week_in_meso: u32,
    /// Weeks in the block, including the deload week
    pub total_weeks: u32,
    /// Whether the scheduler marked this week as a deload
    pub is_deload_week: bool,
    /// Readiness (0-100)
    pub readiness: f64,
    /// Calibrated E1RM for this exercise
    #[serde(default)]
    pub calibrated_e1rm: Option<f64>,
    /// E1RM of a closely related exercise
    #[serde(default)]
    pub related_exercise_e1rm: Option<f64>,
    /// Systemic fatigue percentage (0-100)
    #[serde(default)]
    pub systemic_fatigue_percent: Option<f64>,
    /// Weekly fatigue score (0-10)
    #[serde(default)]
    pub weekly_fatigue_score: Option<f64>,
    /// Periodization model for the block
    #[serde(default)]
    pub periodization: PeriodizationModel,
}

impl LastPerformance {
    /// Reject a malformed last-session summary
    ///
    /// # Errors
    ///
    /// Returns an error when the weight is negative or non-finite or the RPE is outside 1-10
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(AppError::out_of_range(
                "last_performance.weight",
                format!("Weight must be a non-negative number, got {}", self.weight),
            ));
        }
        if !(MIN_RPE..=MAX_RPE).contains(&self.rpe) {
            return Err(AppError::out_of_range(
                "last_performance.rpe",
                format!("RPE must be between {MIN_RPE} and {MAX_RPE}, got {}", self.rpe),
            ));
        }
        Ok(())
    }
}

impl ProgressionInput {
    /// Reject inputs the calculator cannot prescribe from
    ///
    /// # Errors
    ///
    /// Returns an error when the exercise record or last performance is malformed,
    /// the week is zero, readiness or fatigue lie outside their scales, or an
    /// E1RM estimate is negative or non-finite
    pub fn validate(&self) -> AppResult<()> {
        self.exercise.validate()?;
        if let Some(last) = &self.last_performance {
            last.validate()?;
        }
        if self.week_in_meso == 0 || self.total_weeks == 0 {
            return Err(AppError::out_of_range(
                "week_in_meso",
                "Weeks are counted from 1",
            ));
        }
        if !(0.0..=100.0).contains(&self.readiness) {
            return Err(AppError::out_of_range(
                "readiness",
                format!("Readiness must be between 0 and 100, got {}", self.readiness),
            ));
        }
        if self
            .systemic_fatigue_percent
            .is_some_and(|value| !(0.0..=100.0).contains(&value))
        {
            return Err(AppError::out_of_range(
                "systemic_fatigue_percent",
                "Systemic fatigue must be between 0 and 100",
            ));
        }
        if self
            .weekly_fatigue_score
            .is_some_and(|value| !(0.0..=10.0).contains(&value))
        {
            return Err(AppError::out_of_range(
                "weekly_fatigue_score",
                "Weekly fatigue score must be between 0 and 10",
            ));
        }
        for (field, estimate) in [
            ("calibrated_e1rm", self.calibrated_e1rm),
            ("related_exercise_e1rm", self.related_exercise_e1rm),
        ] {
            if estimate.is_some_and(|value| !value.is_finite() || value < 0.0) {
                return Err(AppError::out_of_range(
                    field,
                    "E1RM estimates must be non-negative numbers",
                ));
            }
        }
        Ok(())
    }
}

/// Next-session prescription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionTargets {
    /// Exercise prescribed
    pub exercise_id: String,
    /// Target weight, never negative
    pub weight: f64,
    /// Phase-adjusted rep range
    pub rep_range: RepRange,
    /// Reps to aim for on each working set
    pub target_reps: u32,
    /// Target reps in reserve (0-4)
    pub target_rir: u8,
    /// Working sets
    pub sets: u32,
    /// Rest between sets
    pub rest_seconds: u32,
    /// Kind of progression
    pub progression_type: ProgressionType,
    /// Resolved training phase
    pub phase: TrainingPhase,
    /// Why these targets were chosen
    pub reason: String,
}

/// Phase-adjusted context shared by every branch
struct PhaseContext {
    phase: TrainingPhase,
    rep_range: RepRange,
    target_rir: u8,
    rest_seconds: u32,
}

/// Next-session prescription calculator
pub struct ProgressionCalculator;

impl ProgressionCalculator {
    /// Compute next-session targets
    #[must_use]
    pub fn calculate(input: &ProgressionInput, config: &ProgressionConfig) -> ProgressionTargets {
        let exercise = &input.exercise;
        let phase = if input.is_deload_week {
            TrainingPhase::Deload
        } else {
            Periodization::resolve_phase(input.periodization, input.week_in_meso, input.total_weeks)
        };
        let context = PhaseContext {
            phase,
            rep_range: Periodization::adjust_rep_range(
                exercise.default_rep_range,
                phase,
                exercise.mechanic,
            ),
            target_rir: Periodization::target_rir(exercise.default_target_rir, phase)
                .min(MAX_TARGET_RIR),
            rest_seconds: Periodization::rest_seconds(phase, exercise.mechanic),
        };

        let mut targets = match &input.last_performance {
            None => Self::first_session(input, &context, config),
            Some(last) if phase == TrainingPhase::Deload => {
                Self::deload_session(exercise, last, &context, config)
            }
            Some(last) if input.readiness < config.thresholds.low_readiness => {
                Self::low_readiness_session(input, last, &context, config)
            }
            Some(last) => Self::progress(input, last, &context, config),
        };

        Self::apply_fatigue_adjustments(&mut targets, input, config);
        targets.weight = targets.weight.max(0.0);
        targets.target_rir = targets.target_rir.min(MAX_TARGET_RIR);

        debug!(
            exercise_id = %targets.exercise_id,
            progression_type = %targets.progression_type,
            phase = %targets.phase,
            weight = targets.weight,
            sets = targets.sets,
            "calculated progression targets"
        );

        targets
    }

    fn base_targets(
        exercise: &Exercise,
        context: &PhaseContext,
        weight: f64,
        sets: u32,
        progression_type: ProgressionType,
        reason: String,
    ) -> ProgressionTargets {
        ProgressionTargets {
            exercise_id: exercise.id.clone(),
            weight,
            rep_range: context.rep_range,
            target_reps: context.rep_range.min,
            target_rir: context.target_rir,
            sets,
            rest_seconds: context.rest_seconds,
            progression_type,
            phase: context.phase,
            reason,
        }
    }

    fn first_session(
        input: &ProgressionInput,
        context: &PhaseContext,
        config: &ProgressionConfig,
    ) -> ProgressionTargets {
        let exercise = &input.exercise;
        let increment = exercise.min_weight_increment;
        let reps = context.rep_range.max;
        let rir = f64::from(context.target_rir);

        let (weight, reason) = match (input.calibrated_e1rm, input.related_exercise_e1rm) {
            (Some(e1rm), _) if e1rm > 0.0 => (
                floor_to_increment(weight_for_reps(e1rm, reps, rir), increment),
                format!("First session using calibrated estimate (E1RM {e1rm:.1})"),
            ),
            (_, Some(related)) if related > 0.0 => {
                let e1rm = related * config.adjustments.related_exercise_factor;
                (
                    floor_to_increment(weight_for_reps(e1rm, reps, rir), increment),
                    format!(
                        "First session estimated from related exercise ({:.0}% of E1RM {related:.1})",
                        config.adjustments.related_exercise_factor * 100.0
                    ),
                )
            }
            _ => (
                0.0,
                "New exercise - learn technique first with a light load".to_owned(),
            ),
        };

        Self::base_targets(
            exercise,
            context,
            weight,
            config.adjustments.default_sets,
            ProgressionType::Technique,
            reason,
        )
    }

    fn deload_session(
        exercise: &Exercise,
        last: &LastPerformance,
        context: &PhaseContext,
        config: &ProgressionConfig,
    ) -> ProgressionTargets {
        let adjustments = &config.adjustments;
        let weight = round_to_increment(
            last.weight * adjustments.deload_load_factor,
            exercise.min_weight_increment,
        );
        let sets = last.sets.clamp(1, adjustments.deload_max_sets);

        let mut targets = Self::base_targets(
            exercise,
            context,
            weight,
            sets,
            ProgressionType::Technique,
            format!(
                "Deload week: {:.0}% load, {sets} sets, stop well short of failure",
                adjustments.deload_load_factor * 100.0
            ),
        );
        targets.target_rir = adjustments.deload_target_rir;
        targets
    }

    fn low_readiness_session(
        input: &ProgressionInput,
        last: &LastPerformance,
        context: &PhaseContext,
        config: &ProgressionConfig,
    ) -> ProgressionTargets {
        let threshold = config.thresholds.low_readiness;
        let readiness = input.readiness.max(0.0);
        let reduction = if threshold > 0.0 {
            (threshold - readiness) / threshold * config.adjustments.max_readiness_reduction
        } else {
            0.0
        };

        let weight = round_to_increment(
            last.weight * (1.0 - reduction),
            input.exercise.min_weight_increment,
        );
        let sets = ((f64::from(last.sets) * (1.0 - reduction)).round() as u32).max(1);

        let mut targets = Self::base_targets(
            &input.exercise,
            context,
            weight,
            sets,
            ProgressionType::Technique,
            format!(
                "Low readiness ({readiness:.0}/100): load and volume reduced by {:.0}%",
                reduction * 100.0
            ),
        );
        targets.target_reps = last.reps.clamp(context.rep_range.min, context.rep_range.max);
        targets
    }

    fn progress(
        input: &ProgressionInput,
        last: &LastPerformance,
        context: &PhaseContext,
        config: &ProgressionConfig,
    ) -> ProgressionTargets {
        let exercise = &input.exercise;
        let range = context.rep_range;
        let last_rir = rpe_to_rir(last.rpe);
        let effort_appropriate = last_rir
            >= f64::from(context.target_rir) - config.thresholds.effort_tolerance_rir;

        if last.reps < range.max {
            let mut targets = Self::base_targets(
                exercise,
                context,
                last.weight,
                last.sets.max(1),
                ProgressionType::Reps,
                format!(
                    "{} reps is below the top of the {range} range: same weight, aim for {}",
                    last.reps,
                    last.reps + 1
                ),
            );
            targets.target_reps = last.reps + 1;
            return targets;
        }

        if !effort_appropriate {
            let mut targets = Self::base_targets(
                exercise,
                context,
                last.weight,
                last.sets.max(1),
                ProgressionType::Reps,
                format!(
                    "Rep target met but effort ran high (RIR {last_rir:.0}): consolidate {} reps at the same weight",
                    range.max
                ),
            );
            targets.target_reps = range.max;
            return targets;
        }

        // Volume below the baseline is restored before the load moves
        let add_set = last.all_sets_completed
            && last.sets < config.adjustments.default_sets
            && input.experience != ExperienceLevel::Novice
            && context.phase == TrainingPhase::Hypertrophy;

        if add_set {
            let sets = (last.sets + 1).min(config.adjustments.max_sets);
            let mut targets = Self::base_targets(
                exercise,
                context,
                last.weight,
                sets,
                ProgressionType::Sets,
                format!(
                    "Hit {} reps with RIR {last_rir:.0} on {} sets: add a set ({sets} total) before adding load",
                    last.reps, last.sets
                ),
            );
            targets.target_reps = range.max;
            return targets;
        }

        let increment = exercise.min_weight_increment;
        let step =
            (last.weight * config.load_steps.for_experience(input.experience)).max(increment);
        let weight = round_to_increment(last.weight + step, increment).max(last.weight);
        Self::base_targets(
            exercise,
            context,
            weight,
            last.sets.max(1),
            ProgressionType::Load,
            format!(
                "Hit {} reps at the top of the {range} range with RIR {last_rir:.0}: \
                 increase load to {weight}",
                last.reps
            ),
        )
    }

    fn apply_fatigue_adjustments(
        targets: &mut ProgressionTargets,
        input: &ProgressionInput,
        config: &ProgressionConfig,
    ) {
        let thresholds = &config.thresholds;

        if let Some(systemic) = input.systemic_fatigue_percent {
            if systemic > thresholds.high_systemic_fatigue_percent {
                targets.target_rir = targets.target_rir.saturating_add(1).min(MAX_TARGET_RIR);
                targets
                    .reason
                    .push_str(&format!("; elevated systemic fatigue ({systemic:.0}%): RIR +1"));
            }
        }

        if let Some(score) = input.weekly_fatigue_score {
            if score > thresholds.high_weekly_fatigue {
                targets.progression_type = ProgressionType::Technique;
                if let Some(last) = &input.last_performance {
                    targets.weight = targets.weight.min(last.weight);
                }
                targets
                    .reason
                    .push_str(&format!("; high fatigue score ({score:.1}/10): holding load"));
            } else if score >= thresholds.moderate_weekly_fatigue {
                targets.reason.push_str(&format!(
                    "; moderate fatigue score ({score:.1}/10): monitor recovery"
                ));
            }
        }
    }
}
