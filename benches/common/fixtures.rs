// ABOUTME: Benchmark fixtures for generating realistic training histories
// ABOUTME: Snapshots, set logs, AMRAP logs, and weekly surveys derived from an index, never the clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Benchmark fixtures for generating realistic training histories.
//!
//! Every value is derived from its index so runs are reproducible.

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
    dead_code
)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use liftwise::algorithms::estimate_one_rep_max;
use liftwise::models::{
    Equipment, Exercise, Mechanic, MovementPattern, MuscleGroup, PerformanceSnapshot, RepRange,
    SetLog, WeeklyPerformanceData,
};
use liftwise::rpe_calibration::CalibrationSetLog;
use uuid::Uuid;

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// One training block (8 weeks)
    Block,
    /// A year of weekly sessions
    Year,
}

impl HistorySize {
    #[must_use]
    pub const fn weeks(self) -> usize {
        match self {
            Self::Block => 8,
            Self::Year => 52,
        }
    }
}

const EXERCISES: [(&str, MuscleGroup, MuscleGroup); 6] = [
    ("back_squat", MuscleGroup::Quads, MuscleGroup::Glutes),
    ("bench_press", MuscleGroup::Chest, MuscleGroup::Triceps),
    ("deadlift", MuscleGroup::Hamstrings, MuscleGroup::Back),
    ("overhead_press", MuscleGroup::Shoulders, MuscleGroup::Triceps),
    ("barbell_row", MuscleGroup::Back, MuscleGroup::Biceps),
    ("lateral_raise", MuscleGroup::Shoulders, MuscleGroup::Traps),
];

fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Reference instant just after the longest generated history
#[must_use]
pub fn reference_now() -> DateTime<Utc> {
    base_date() + Duration::weeks(HistorySize::Year.weeks() as i64 + 1)
}

/// Catalog entries matching the generated exercise ids
#[must_use]
pub fn catalog() -> Vec<Exercise> {
    EXERCISES
        .iter()
        .map(|(id, primary, secondary)| Exercise {
            id: (*id).to_owned(),
            name: id.replace('_', " "),
            primary_muscles: vec![*primary],
            secondary_muscles: vec![*secondary],
            movement_pattern: MovementPattern::Isolation,
            mechanic: Mechanic::Compound,
            default_rep_range: RepRange::new(6, 10),
            default_target_rir: 2,
            min_weight_increment: 2.5,
            equipment: vec![Equipment::Barbell],
        })
        .collect()
}

/// Per-exercise weekly snapshots; every third exercise stalls halfway through
#[must_use]
pub fn snapshot_histories(size: HistorySize) -> Vec<(String, Vec<PerformanceSnapshot>)> {
    EXERCISES
        .iter()
        .enumerate()
        .map(|(exercise_index, (id, _, _))| {
            let snapshots = (0..size.weeks())
                .map(|week| {
                    let progressing_weeks = if exercise_index % 3 == 0 {
                        week.min(size.weeks() / 2)
                    } else {
                        week
                    };
                    let weight = 2.5f64.mul_add(progressing_weeks as f64, 60.0);
                    let reps = 6 + (week % 4) as u32;
                    let rpe = 7.5 + (week % 3) as f64 * 0.5;
                    PerformanceSnapshot {
                        exercise_id: (*id).to_owned(),
                        date: base_date() + Duration::weeks(week as i64),
                        weight,
                        reps,
                        rpe,
                        e1rm: estimate_one_rep_max(weight, reps, rpe),
                        sets: 3 + (week % 2) as u32,
                    }
                })
                .collect();
            ((*id).to_owned(), snapshots)
        })
        .collect()
}

/// One week of working sets: four per exercise, with some easy and some warmup sets
#[must_use]
pub fn weekly_sets(sessions: usize) -> Vec<SetLog> {
    let mut sets = Vec::new();
    for session in 0..sessions {
        for (id, _, _) in &EXERCISES {
            for set_number in 1..=4u32 {
                sets.push(SetLog {
                    id: Uuid::new_v4(),
                    exercise_block_id: format!("{id}-{session}"),
                    exercise_id: (*id).to_owned(),
                    set_number,
                    weight: 80.0,
                    reps: 8,
                    rpe: 5.5 + f64::from(set_number),
                    is_warmup: set_number == 1,
                    quality: None,
                    quality_reason: None,
                    feedback: None,
                    bodyweight: None,
                    logged_at: base_date() + Duration::days(session as i64),
                });
            }
        }
    }
    sets
}

/// Submaximal sets with an AMRAP test every fourth week, per exercise
#[must_use]
pub fn calibration_logs(size: HistorySize) -> Vec<CalibrationSetLog> {
    let mut logs = Vec::new();
    for week in 0..size.weeks() {
        for (id, _, _) in &EXERCISES {
            let was_amrap = week % 4 == 3;
            logs.push(CalibrationSetLog {
                exercise_id: (*id).to_owned(),
                weight: 100.0,
                actual_reps: if was_amrap { 11 } else { 8 },
                reported_rir: if was_amrap { 0.0 } else { 2.0 },
                prescribed_reps: 8,
                was_amrap,
                timestamp: base_date() + Duration::weeks(week as i64),
            });
        }
    }
    logs
}

/// Weekly surveys cycling through the rating scale
#[must_use]
pub fn weekly_surveys(size: HistorySize) -> Vec<WeeklyPerformanceData> {
    (0..size.weeks())
        .map(|week| WeeklyPerformanceData {
            week_number: week as u32 + 1,
            perceived_fatigue: 1 + (week % 5) as u8,
            sleep_quality: 5 - (week % 5) as u8,
            motivation: 1 + ((week + 2) % 5) as u8,
            missed_reps: (week % 7) as u32,
            joint_pain: week % 6 == 5,
            strength_decline: week % 4 == 3,
        })
        .collect()
}
