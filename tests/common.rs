// ABOUTME: Shared test fixtures and setup helpers for integration tests
// ABOUTME: Builds exercises, set logs, snapshots, weekly surveys, and discomfort entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::too_many_arguments,
    clippy::fn_params_excessive_bools,
    clippy::unwrap_used
)]
//! Shared test utilities for `liftwise`
//!
//! Every fixture is deterministic: timestamps are offsets from [`base_time`],
//! never the wall clock.

use std::env;
use std::sync::Once;

use chrono::{DateTime, Duration, TimeZone, Utc};
use liftwise::algorithms::estimate_one_rep_max;
use liftwise::models::{
    BodyPart, DiscomfortEntry, DiscomfortSeverity, Equipment, Exercise, ExercisePrescription,
    ExperienceLevel, Mechanic, MesocycleWeek, MovementPattern, MuscleGroup, PerformanceSnapshot,
    PeriodizationModel, PeriodizationPlan, RepRange, RpeRange, SessionTemplate, SetLog,
    UserProfile, WeeklyPerformanceData,
};
use liftwise::rpe_calibration::CalibrationSetLog;
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Fixed reference instant for window-based analyses
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).unwrap()
}

/// `base_time()` plus a number of days
pub fn days_after(days: i64) -> DateTime<Utc> {
    base_time() + Duration::days(days)
}

/// Barbell back squat: compound, 6-10 reps, RIR 2, 2.5 kg jumps
pub fn back_squat() -> Exercise {
    Exercise {
        id: "back_squat".to_owned(),
        name: "Barbell Back Squat".to_owned(),
        primary_muscles: vec![MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary_muscles: vec![MuscleGroup::Hamstrings, MuscleGroup::Core],
        movement_pattern: MovementPattern::Squat,
        mechanic: Mechanic::Compound,
        default_rep_range: RepRange::new(6, 10),
        default_target_rir: 2,
        min_weight_increment: 2.5,
        equipment: vec![Equipment::Barbell],
    }
}

/// Dumbbell lateral raise: isolation, 12-15 reps, RIR 1, 1 kg jumps
pub fn lateral_raise() -> Exercise {
    Exercise {
        id: "lateral_raise".to_owned(),
        name: "Dumbbell Lateral Raise".to_owned(),
        primary_muscles: vec![MuscleGroup::Shoulders],
        secondary_muscles: vec![MuscleGroup::Traps],
        movement_pattern: MovementPattern::Isolation,
        mechanic: Mechanic::Isolation,
        default_rep_range: RepRange::new(12, 15),
        default_target_rir: 1,
        min_weight_increment: 1.0,
        equipment: vec![Equipment::Dumbbell],
    }
}

/// Working set logged `minutes` after `base_time()`
pub fn set_log(exercise_id: &str, set_number: u32, weight: f64, reps: u32, rpe: f64) -> SetLog {
    SetLog {
        id: Uuid::new_v4(),
        exercise_block_id: format!("{exercise_id}-block"),
        exercise_id: exercise_id.to_owned(),
        set_number,
        weight,
        reps,
        rpe,
        is_warmup: false,
        quality: None,
        quality_reason: None,
        feedback: None,
        bodyweight: None,
        logged_at: base_time() + Duration::minutes(i64::from(set_number) * 3),
    }
}

/// Warmup set
pub fn warmup(exercise_id: &str, set_number: u32, weight: f64, reps: u32) -> SetLog {
    SetLog {
        is_warmup: true,
        ..set_log(exercise_id, set_number, weight, reps, 4.0)
    }
}

/// Snapshot `weeks` after `base_time()` with E1RM derived from the set
pub fn snapshot(
    exercise_id: &str,
    weeks: i64,
    weight: f64,
    reps: u32,
    rpe: f64,
) -> PerformanceSnapshot {
    PerformanceSnapshot {
        exercise_id: exercise_id.to_owned(),
        date: base_time() + Duration::weeks(weeks),
        weight,
        reps,
        rpe,
        e1rm: estimate_one_rep_max(weight, reps, rpe),
        sets: 3,
    }
}

/// Snapshot with an explicit E1RM and set count
pub fn snapshot_with_e1rm(
    exercise_id: &str,
    weeks: i64,
    e1rm: f64,
    sets: u32,
) -> PerformanceSnapshot {
    PerformanceSnapshot {
        exercise_id: exercise_id.to_owned(),
        date: base_time() + Duration::weeks(weeks),
        weight: e1rm * 0.75,
        reps: 8,
        rpe: 8.0,
        e1rm,
        sets,
    }
}

/// Neutral survey week (nothing triggers)
pub fn calm_week(week_number: u32) -> WeeklyPerformanceData {
    WeeklyPerformanceData {
        week_number,
        perceived_fatigue: 2,
        sleep_quality: 4,
        motivation: 4,
        missed_reps: 0,
        joint_pain: false,
        strength_decline: false,
    }
}

/// Survey week with an explicit fatigue rating
pub fn week_with_fatigue(week_number: u32, perceived_fatigue: u8) -> WeeklyPerformanceData {
    WeeklyPerformanceData {
        perceived_fatigue,
        ..calm_week(week_number)
    }
}

/// 30-year-old lifter with three years of training, average sleep and stress
pub fn profile(experience: ExperienceLevel) -> UserProfile {
    UserProfile {
        experience,
        age: 30,
        training_age_years: 3.0,
        sleep_quality: 3,
        stress_level: 3,
    }
}

/// Linear plan early in its block
pub fn fresh_plan() -> PeriodizationPlan {
    PeriodizationPlan {
        model: PeriodizationModel::Linear,
        total_weeks: 6,
        deload_frequency_weeks: 5,
        weeks_since_start: 2,
    }
}

/// One-session week: squat 4x6-10 @ 100 kg RIR 2, raises 3x12-15 RIR 3
pub fn base_week() -> MesocycleWeek {
    MesocycleWeek {
        week_number: 3,
        sessions: vec![SessionTemplate {
            name: "Lower A".to_owned(),
            day: 0,
            exercises: vec![
                ExercisePrescription {
                    exercise_id: "back_squat".to_owned(),
                    sets: 4,
                    rep_range: RepRange::new(6, 10),
                    target_rir: 2,
                    weight: Some(100.0),
                },
                ExercisePrescription {
                    exercise_id: "lateral_raise".to_owned(),
                    sets: 3,
                    rep_range: RepRange::new(12, 15),
                    target_rir: 3,
                    weight: None,
                },
            ],
        }],
        total_sets: 7,
        volume_modifier: 1.0,
        intensity_modifier: 1.0,
        rpe_target: RpeRange { min: 7.0, max: 9.0 },
        is_deload: false,
        deload_type: None,
    }
}

/// Discomfort report `days` after `base_time()`
pub fn discomfort(
    body_part: BodyPart,
    severity: DiscomfortSeverity,
    days: i64,
    exercise_id: Option<&str>,
) -> DiscomfortEntry {
    DiscomfortEntry {
        id: Uuid::new_v4(),
        body_part,
        severity,
        exercise_id: exercise_id.map(str::to_owned),
        logged_at: days_after(days),
        notes: None,
    }
}

/// Submaximal (non-AMRAP) set for calibration
pub fn reported_set(
    exercise_id: &str,
    weight: f64,
    reps: u32,
    rir: f64,
    days: i64,
) -> CalibrationSetLog {
    CalibrationSetLog {
        exercise_id: exercise_id.to_owned(),
        weight,
        actual_reps: reps,
        reported_rir: rir,
        prescribed_reps: reps,
        was_amrap: false,
        timestamp: days_after(days),
    }
}

/// AMRAP test set for calibration
pub fn amrap_set(exercise_id: &str, weight: f64, reps: u32, days: i64) -> CalibrationSetLog {
    CalibrationSetLog {
        exercise_id: exercise_id.to_owned(),
        weight,
        actual_reps: reps,
        reported_rir: 0.0,
        prescribed_reps: reps,
        was_amrap: true,
        timestamp: days_after(days),
    }
}

/// Float comparison with a small tolerance
pub fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-6
}
