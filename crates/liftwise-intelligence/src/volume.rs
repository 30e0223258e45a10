// ABOUTME: Weekly volume landmarks (MEV / MAV / MRV) per muscle group and set counting
// ABOUTME: Credits primary muscles fully and secondary muscles half, skipping warmups and junk sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Volume Landmarks
//!
//! # Scientific References
//!
//! - Israetel, M., Hoffmann, J., Smith, C.W. (2019). *Scientific Principles of Hypertrophy
//!   Training*. Renaissance Periodization.
//! - Schoenfeld, B.J., et al. (2017). "Dose-response relationship between weekly resistance
//!   training volume and increases in muscle mass." *J Sports Sci*, 35(11), 1073-1082.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::constants::set_quality::JUNK_MAX_RPE;
use crate::models::{Exercise, MuscleGroup, SetLog, SetQuality};

/// Credit a secondary muscle receives per working set
const SECONDARY_MUSCLE_CREDIT: f64 = 0.5;

/// Weekly set landmarks for a muscle group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeLandmarks {
    /// Minimum effective volume
    pub mev: f64,
    /// Upper end of maximum adaptive volume
    pub mav: f64,
    /// Maximum recoverable volume
    pub mrv: f64,
}

/// `(muscle, MEV, MAV, MRV)` in hard sets per week
const DEFAULT_LANDMARKS: [(MuscleGroup, f64, f64, f64); 12] = [
    (MuscleGroup::Chest, 8.0, 16.0, 22.0),
    (MuscleGroup::Back, 10.0, 18.0, 25.0),
    (MuscleGroup::Shoulders, 8.0, 19.0, 26.0),
    (MuscleGroup::Biceps, 8.0, 17.0, 26.0),
    (MuscleGroup::Triceps, 6.0, 12.0, 18.0),
    (MuscleGroup::Quads, 8.0, 15.0, 20.0),
    (MuscleGroup::Hamstrings, 6.0, 13.0, 20.0),
    (MuscleGroup::Glutes, 0.0, 8.0, 16.0),
    (MuscleGroup::Calves, 8.0, 14.0, 20.0),
    (MuscleGroup::Core, 0.0, 20.0, 25.0),
    (MuscleGroup::Forearms, 2.0, 10.0, 20.0),
    (MuscleGroup::Traps, 0.0, 20.0, 30.0),
];

/// Where a week's volume sits relative to the landmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeStatus {
    /// Fewer sets than MEV
    BelowMev,
    /// Between MEV and MAV
    Productive,
    /// Between MAV and MRV
    ApproachingMrv,
    /// More sets than MRV
    AboveMrv,
}

impl VolumeLandmarks {
    /// Default landmarks for a muscle group
    #[must_use]
    pub fn for_muscle(muscle: MuscleGroup) -> Self {
        DEFAULT_LANDMARKS
            .iter()
            .find(|(entry, _, _, _)| *entry == muscle)
            .map_or(
                Self {
                    mev: 6.0,
                    mav: 14.0,
                    mrv: 20.0,
                },
                |(_, mev, mav, mrv)| Self {
                    mev: *mev,
                    mav: *mav,
                    mrv: *mrv,
                },
            )
    }

    /// Classify a weekly set count against these landmarks
    #[must_use]
    pub fn assess(&self, weekly_sets: f64) -> VolumeStatus {
        if weekly_sets < self.mev {
            VolumeStatus::BelowMev
        } else if weekly_sets <= self.mav {
            VolumeStatus::Productive
        } else if weekly_sets <= self.mrv {
            VolumeStatus::ApproachingMrv
        } else {
            VolumeStatus::AboveMrv
        }
    }
}

/// Hard sets per muscle group for one week of logs
///
/// Sets whose exercise is not in `exercises` are ignored. Sets without a stored
/// quality label count unless their RPE is in the junk band.
#[must_use]
pub fn count_weekly_sets(sets: &[SetLog], exercises: &[Exercise]) -> BTreeMap<MuscleGroup, f64> {
    let catalog: HashMap<&str, &Exercise> = exercises
        .iter()
        .map(|exercise| (exercise.id.as_str(), exercise))
        .collect();

    let mut totals: BTreeMap<MuscleGroup, f64> = BTreeMap::new();
    for set in sets.iter().filter(|set| counts_toward_volume(set)) {
        let Some(exercise) = catalog.get(set.exercise_id.as_str()) else {
            continue;
        };
        for muscle in &exercise.primary_muscles {
            *totals.entry(*muscle).or_default() += 1.0;
        }
        for muscle in &exercise.secondary_muscles {
            *totals.entry(*muscle).or_default() += SECONDARY_MUSCLE_CREDIT;
        }
    }
    totals
}

/// Status per muscle group using the default landmarks
#[must_use]
pub fn assess_volume(weekly_sets: &BTreeMap<MuscleGroup, f64>) -> BTreeMap<MuscleGroup, VolumeStatus> {
    weekly_sets
        .iter()
        .map(|(muscle, sets)| (*muscle, VolumeLandmarks::for_muscle(*muscle).assess(*sets)))
        .collect()
}

fn counts_toward_volume(set: &SetLog) -> bool {
    if set.is_warmup {
        return false;
    }
    set.quality.map_or(set.rpe > JUNK_MAX_RPE, |quality| {
        quality != SetQuality::Junk
    })
}
