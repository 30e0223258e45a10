// ABOUTME: Resolves the training phase for a week of a mesocycle and its prescription tables
// ABOUTME: Static phase boundaries for linear and block models plus per-phase rep/RIR/rest tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Periodization
//!
//! The final week of a block is always a deload. The remaining training weeks
//! are split by fraction of the block completed:
//!
//! | Model | Hypertrophy | Strength | Peaking |
//! |---|---|---|---|
//! | Linear | <= 50% | <= 80% | remainder |
//! | Block | first third | second third | final third |

use crate::models::{Mechanic, PeriodizationModel, RepRange, TrainingPhase};

/// Upper bound (fraction of training weeks, inclusive) for each phase
const LINEAR_BOUNDARIES: [(f64, TrainingPhase); 3] = [
    (0.5, TrainingPhase::Hypertrophy),
    (0.8, TrainingPhase::Strength),
    (1.0, TrainingPhase::Peaking),
];

const BLOCK_BOUNDARIES: [(f64, TrainingPhase); 3] = [
    (1.0 / 3.0, TrainingPhase::Hypertrophy),
    (2.0 / 3.0, TrainingPhase::Strength),
    (1.0, TrainingPhase::Peaking),
];

/// Rest between sets in seconds: `(compound, isolation)`
const REST_SECONDS: [(TrainingPhase, u32, u32); 4] = [
    (TrainingPhase::Hypertrophy, 120, 60),
    (TrainingPhase::Strength, 180, 90),
    (TrainingPhase::Peaking, 240, 120),
    (TrainingPhase::Deload, 120, 60),
];

/// Target RIR used during deload weeks
const DELOAD_TARGET_RIR: u8 = 4;

/// Phase resolution and per-phase prescription tables
pub struct Periodization;

impl Periodization {
    /// Resolve the phase for `week` (1-based) of a block of `total_weeks`
    ///
    /// Week 0 is treated as week 1. Any week at or past the final week is a deload.
    /// A block of one week is a single deload week.
    #[must_use]
    pub fn resolve_phase(model: PeriodizationModel, week: u32, total_weeks: u32) -> TrainingPhase {
        let week = week.max(1);
        if total_weeks <= 1 || week >= total_weeks {
            return TrainingPhase::Deload;
        }

        let training_weeks = f64::from(total_weeks - 1);
        let fraction = f64::from(week) / training_weeks;

        let table = match model {
            PeriodizationModel::Linear => &LINEAR_BOUNDARIES,
            PeriodizationModel::Block => &BLOCK_BOUNDARIES,
        };

        table
            .iter()
            .find(|(upper, _)| fraction <= *upper + f64::EPSILON)
            .map_or(TrainingPhase::Peaking, |(_, phase)| *phase)
    }

    /// Adjust an exercise's base rep range for a phase
    ///
    /// Hypertrophy widens the top of the range, strength narrows it toward heavier
    /// loads, peaking drops to low reps. Every adjusted range keeps `min >= 1` and
    /// `min <= max`.
    #[must_use]
    pub fn adjust_rep_range(base: RepRange, phase: TrainingPhase, mechanic: Mechanic) -> RepRange {
        let (min, max) = match (phase, mechanic) {
            (TrainingPhase::Hypertrophy, Mechanic::Compound) => (base.min, base.max + 2),
            (TrainingPhase::Hypertrophy, Mechanic::Isolation) => (base.min + 2, base.max + 4),
            (TrainingPhase::Strength, Mechanic::Compound) => {
                let min = base.min.saturating_sub(2).max(3);
                (min, base.max.saturating_sub(3).max(min + 2))
            }
            (TrainingPhase::Strength, Mechanic::Isolation) => {
                let min = base.min.saturating_sub(1).max(1);
                (min, base.max.saturating_sub(2).max(min + 2))
            }
            (TrainingPhase::Peaking, Mechanic::Compound) => {
                let min = base.min.saturating_sub(3).max(1);
                (min, base.max.saturating_sub(5).max(min + 1))
            }
            (TrainingPhase::Peaking, Mechanic::Isolation) => {
                (base.min, base.max.saturating_sub(2).max(base.min))
            }
            (TrainingPhase::Deload, _) => (base.min, base.max),
        };

        let min = min.max(1);
        RepRange::new(min, max.max(min))
    }

    /// Target RIR for a phase given the exercise's default
    #[must_use]
    pub const fn target_rir(base_rir: u8, phase: TrainingPhase) -> u8 {
        match phase {
            TrainingPhase::Hypertrophy | TrainingPhase::Strength => base_rir,
            TrainingPhase::Peaking => base_rir.saturating_sub(1),
            TrainingPhase::Deload => DELOAD_TARGET_RIR,
        }
    }

    /// Rest between sets for a phase and mechanic
    #[must_use]
    pub fn rest_seconds(phase: TrainingPhase, mechanic: Mechanic) -> u32 {
        REST_SECONDS
            .iter()
            .find(|(entry, _, _)| *entry == phase)
            .map_or(120, |(_, compound, isolation)| match mechanic {
                Mechanic::Compound => *compound,
                Mechanic::Isolation => *isolation,
            })
    }
}
