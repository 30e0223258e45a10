// ABOUTME: Deload trigger evaluation over weekly surveys, deload week generation, and cadence
// ABOUTME: Experience-gated trigger counting and a static set/load modifier table per deload type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Deload Engine
//!
//! Triggers are evaluated against the two most recent weekly surveys. Each
//! trigger appends one reason; some also force the suggested deload type:
//!
//! | Trigger | Type |
//! |---|---|
//! | fatigue >= 4 now and >= 3 before | volume (default) |
//! | strength decline or missed reps > 5 | intensity |
//! | sleep <= 2 both weeks | full |
//! | motivation <= 2 now and <= 3 before | unchanged |
//! | joint pain | intensity |
//! | weeks since start >= frequency + 2 | unchanged |
//!
//! # Scientific References
//!
//! - Bell, L., et al. (2022). "Deloading practices in strength and physique sports: a
//!   cross-sectional survey." *Sports Medicine - Open*, 8(1), 1-13.
//! - Pritchard, H., et al. (2015). "Effects and mechanisms of tapering in maximizing muscular
//!   strength." *Strength Cond J*, 37(2), 72-83.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::intelligence::DeloadConfig;
use crate::constants::deload::{
    DELOAD_RPE_MAX, DELOAD_RPE_MIN, FATIGUE_CURRENT_MIN, FATIGUE_PREVIOUS_MIN, MIN_SETS,
    MIN_WEEKS, MISSED_REPS_MAX, MOTIVATION_CURRENT_MAX, MOTIVATION_PREVIOUS_MAX,
    OVERDUE_GRACE_WEEKS, POOR_SLEEP_MAX, RIR_INCREASE,
};
use crate::constants::deload_frequency;
use crate::constants::effort::MAX_TARGET_RIR;
use crate::models::{
    DeloadType, MesocycleWeek, PeriodizationPlan, RpeRange, UserProfile, WeeklyPerformanceData,
};

/// `(type, set multiplier, load multiplier)`
const DELOAD_MODIFIERS: [(DeloadType, f64, f64); 3] = [
    (DeloadType::Volume, 0.5, 1.0),
    (DeloadType::Intensity, 0.7, 0.85),
    (DeloadType::Full, 0.5, 0.6),
];

/// Outcome of a deload check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeloadTriggers {
    /// Whether a deload is recommended
    pub should_deload: bool,
    /// Reasons in evaluation order
    pub reasons: Vec<String>,
    /// Suggested deload style
    pub deload_type: DeloadType,
}

impl DeloadTriggers {
    fn insufficient_data() -> Self {
        Self {
            should_deload: false,
            reasons: Vec::new(),
            deload_type: DeloadType::default(),
        }
    }
}

/// Deload trigger evaluation and deload week construction
pub struct DeloadEngine;

impl DeloadEngine {
    /// Evaluate deload triggers against the two most recent weeks
    ///
    /// Returns `should_deload = false` with no reasons when fewer than two weeks exist.
    /// Novices need at least two independent reasons (configurable per tier).
    #[must_use]
    pub fn check_deload_triggers(
        history: &[WeeklyPerformanceData],
        profile: &UserProfile,
        plan: &PeriodizationPlan,
        config: &DeloadConfig,
    ) -> DeloadTriggers {
        if history.len() < MIN_WEEKS {
            return DeloadTriggers::insufficient_data();
        }

        let mut ordered: Vec<&WeeklyPerformanceData> = history.iter().collect();
        ordered.sort_by_key(|week| week.week_number);
        let (previous, current) = match ordered.as_slice() {
            [.., previous, current] => (*previous, *current),
            _ => return DeloadTriggers::insufficient_data(),
        };

        let mut reasons = Vec::new();
        let mut deload_type: Option<DeloadType> = None;

        if current.perceived_fatigue >= FATIGUE_CURRENT_MIN
            && previous.perceived_fatigue >= FATIGUE_PREVIOUS_MIN
        {
            reasons.push(format!(
                "Fatigue elevated for two weeks ({} then {})",
                previous.perceived_fatigue, current.perceived_fatigue
            ));
            deload_type.get_or_insert(DeloadType::Volume);
        }

        if current.strength_decline || current.missed_reps > MISSED_REPS_MAX {
            reasons.push(format!(
                "Performance declining ({} missed reps{})",
                current.missed_reps,
                if current.strength_decline {
                    ", strength trending down"
                } else {
                    ""
                }
            ));
            deload_type = Some(DeloadType::Intensity);
        }

        if current.sleep_quality <= POOR_SLEEP_MAX && previous.sleep_quality <= POOR_SLEEP_MAX {
            reasons.push("Poor sleep quality for two consecutive weeks".to_owned());
            deload_type = Some(DeloadType::Full);
        }

        if current.motivation <= MOTIVATION_CURRENT_MAX
            && previous.motivation <= MOTIVATION_PREVIOUS_MAX
        {
            reasons.push("Motivation has dropped over the last two weeks".to_owned());
        }

        if current.joint_pain {
            reasons.push("Joint pain reported this week".to_owned());
            deload_type = Some(DeloadType::Intensity);
        }

        let frequency = if plan.deload_frequency_weeks == 0 {
            Self::calculate_deload_frequency(profile)
        } else {
            plan.deload_frequency_weeks
        };
        if plan.weeks_since_start >= frequency + OVERDUE_GRACE_WEEKS {
            reasons.push(format!(
                "Deload overdue: {} weeks since the block started (planned every {frequency})",
                plan.weeks_since_start
            ));
        }

        let required = config.min_reasons(profile.experience);
        let should_deload = !reasons.is_empty() && reasons.len() >= required;

        debug!(
            reasons = reasons.len(),
            required,
            should_deload,
            experience = ?profile.experience,
            "evaluated deload triggers"
        );

        DeloadTriggers {
            should_deload,
            reasons,
            deload_type: deload_type.unwrap_or_default(),
        }
    }

    /// `(set multiplier, load multiplier)` for a deload type
    #[must_use]
    pub fn modifiers(deload_type: DeloadType) -> (f64, f64) {
        DELOAD_MODIFIERS
            .iter()
            .find(|(entry, _, _)| *entry == deload_type)
            .map_or((1.0, 1.0), |(_, sets, load)| (*sets, *load))
    }

    /// Build a deload copy of a week; the input is never modified
    ///
    /// Set counts are floored at 1, every target RIR rises by 2 (capped at 4),
    /// prescribed weights are scaled by the load multiplier, and the RPE band is 5-6.
    #[must_use]
    pub fn generate_deload_week(base: &MesocycleWeek, deload_type: DeloadType) -> MesocycleWeek {
        let (set_modifier, load_modifier) = Self::modifiers(deload_type);
        let mut week = base.clone();

        for slot in week
            .sessions
            .iter_mut()
            .flat_map(|session| session.exercises.iter_mut())
        {
            slot.sets = scale_sets(slot.sets, set_modifier);
            slot.target_rir = slot
                .target_rir
                .saturating_add(RIR_INCREASE)
                .min(MAX_TARGET_RIR);
            slot.weight = slot.weight.map(|weight| weight * load_modifier);
        }

        week.total_sets = scale_sets(base.total_sets, set_modifier);
        week.volume_modifier = base.volume_modifier * set_modifier;
        week.intensity_modifier = base.intensity_modifier * load_modifier;
        week.rpe_target = RpeRange {
            min: DELOAD_RPE_MIN,
            max: DELOAD_RPE_MAX,
        };
        week.is_deload = true;
        week.deload_type = Some(deload_type);

        debug!(
            week = week.week_number,
            %deload_type,
            total_sets = week.total_sets,
            slot_sets = week.prescribed_sets(),
            "generated deload week"
        );

        week
    }

    /// Weeks between deloads for a lifter profile, within 3-8
    #[must_use]
    pub fn calculate_deload_frequency(profile: &UserProfile) -> u32 {
        let mut weeks = if profile.training_age_years < 1.0 {
            deload_frequency::BEGINNER_WEEKS
        } else {
            match profile.age {
                0..=24 => deload_frequency::YOUNG_WEEKS,
                25..=44 => deload_frequency::BASE_WEEKS,
                45..=54 => deload_frequency::MASTERS_WEEKS,
                _ => deload_frequency::SENIOR_WEEKS,
            }
        };

        if profile.training_age_years >= deload_frequency::VETERAN_TRAINING_YEARS {
            weeks = weeks.saturating_sub(1);
        }
        if profile.sleep_quality <= deload_frequency::POOR_SLEEP_MAX
            || profile.stress_level >= deload_frequency::HIGH_STRESS_MIN
        {
            weeks = weeks.saturating_sub(1);
        }

        weeks.clamp(deload_frequency::MIN_WEEKS, deload_frequency::MAX_WEEKS)
    }
}

fn scale_sets(sets: u32, modifier: f64) -> u32 {
    let scaled = (f64::from(sets) * modifier).floor();
    if scaled < f64::from(MIN_SETS) {
        MIN_SETS
    } else {
        scaled as u32
    }
}
