// ABOUTME: Tests for record validation and JSON shapes of the shared data models
// ABOUTME: Covers exercises, set logs, bodyweight loads, surveys, profiles, and mesocycle weeks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use common::{
    back_squat, base_week, calm_week, discomfort, profile, set_log, snapshot_with_e1rm,
};
use liftwise::errors::ErrorCode;
use liftwise::models::{
    BodyPart, BodyweightModification, DiscomfortEntry, DiscomfortSeverity, Exercise,
    ExperienceLevel, MuscleGroup, RepRange, SetQuality, TrainingPhase, WeeklyPerformanceData,
};
use serde_json::json;

// ============================================================================
// Exercise catalog
// ============================================================================

#[test]
fn test_exercise_validation() {
    assert!(back_squat().validate().is_ok());

    let mut unnamed = back_squat();
    unnamed.id = "  ".to_owned();
    assert_eq!(
        unnamed.validate().unwrap_err().code,
        ErrorCode::MissingRequiredField
    );

    let mut inverted = back_squat();
    inverted.default_rep_range = RepRange::new(10, 6);
    let error = inverted.validate().unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.context.field.as_deref(), Some("rep_range"));

    let mut lazy = back_squat();
    lazy.default_target_rir = 5;
    assert_eq!(
        lazy.validate().unwrap_err().context.resource_id.as_deref(),
        Some("back_squat")
    );

    let mut fixed = back_squat();
    fixed.min_weight_increment = 0.0;
    assert!(fixed.validate().is_err());
}

#[test]
fn test_rep_range_helpers() {
    let range = RepRange::new(6, 10);
    assert!(range.contains(6));
    assert!(range.contains(10));
    assert!(!range.contains(11));
    assert_eq!(range.to_string(), "6-10");
    assert!(RepRange::new(0, 5).validate().is_err());
    assert!(RepRange::new(5, 5).validate().is_ok());
}

#[test]
fn test_exercise_json_defaults_optional_lists() {
    let exercise: Exercise = serde_json::from_value(json!({
        "id": "pull_up",
        "name": "Pull-up",
        "primary_muscles": ["back", "biceps"],
        "movement_pattern": "vertical_pull",
        "mechanic": "compound",
        "default_rep_range": { "min": 5, "max": 10 },
        "default_target_rir": 2,
        "min_weight_increment": 1.25
    }))
    .unwrap();

    assert_eq!(
        exercise.primary_muscles,
        vec![MuscleGroup::Back, MuscleGroup::Biceps]
    );
    assert!(exercise.secondary_muscles.is_empty());
    assert!(exercise.equipment.is_empty());
    assert!(exercise.validate().is_ok());
}

// ============================================================================
// Set logs
// ============================================================================

#[test]
fn test_set_log_validation() {
    assert!(set_log("back_squat", 1, 100.0, 8, 8.0).validate().is_ok());

    let zero_set = set_log("back_squat", 0, 100.0, 8, 8.0);
    assert_eq!(
        zero_set.validate().unwrap_err().context.field.as_deref(),
        Some("set_number")
    );

    assert!(set_log("back_squat", 1, -1.0, 8, 8.0).validate().is_err());
    assert!(set_log("back_squat", 1, f64::NAN, 8, 8.0).validate().is_err());
    assert!(set_log("back_squat", 1, 100.0, 8, 0.5).validate().is_err());
    assert!(set_log("back_squat", 1, 100.0, 8, 10.5).validate().is_err());
    assert!(set_log("", 1, 100.0, 8, 8.0).validate().is_err());
}

#[test]
fn test_set_log_bodyweight_load() {
    let mut set = set_log("dip", 1, 0.0, 10, 8.5);
    assert_eq!(set.load(), 0.0);

    set.bodyweight = Some(BodyweightModification {
        bodyweight_kg: 80.0,
        bodyweight_fraction: 0.9,
        added_kg: 0.0,
        assistance_kg: 20.0,
    });
    assert!((set.load() - 52.0).abs() < 1e-9);
    assert!(set.validate().is_ok());

    set.bodyweight = Some(BodyweightModification {
        bodyweight_kg: 80.0,
        bodyweight_fraction: 1.5,
        added_kg: 0.0,
        assistance_kg: 0.0,
    });
    assert!(set.validate().is_err());
}

#[test]
fn test_assisted_load_never_goes_negative() {
    let assisted = BodyweightModification {
        bodyweight_kg: 60.0,
        bodyweight_fraction: 1.0,
        added_kg: 0.0,
        assistance_kg: 80.0,
    };
    assert_eq!(assisted.effective_load(), 0.0);
}

#[test]
fn test_set_log_json_skips_empty_optionals() {
    let value = serde_json::to_value(set_log("back_squat", 1, 100.0, 8, 8.0)).unwrap();
    assert!(value.get("quality").is_none());
    assert!(value.get("bodyweight").is_none());
    assert_eq!(value["is_warmup"], json!(false));
}

#[test]
fn test_set_quality_labels() {
    assert!(SetQuality::Stimulative.counts_as_volume());
    assert!(SetQuality::Effective.counts_as_volume());
    assert!(!SetQuality::Junk.counts_as_volume());
    assert!(!SetQuality::Excessive.counts_as_volume());
    assert_eq!(
        serde_json::to_value(SetQuality::Stimulative).unwrap(),
        json!("stimulative")
    );
}

// ============================================================================
// Surveys, profiles, and templates
// ============================================================================

#[test]
fn test_weekly_survey_ratings_must_be_one_to_five() {
    assert!(calm_week(1).validate().is_ok());

    let exhausted = WeeklyPerformanceData {
        perceived_fatigue: 6,
        ..calm_week(1)
    };
    let error = exhausted.validate().unwrap_err();
    assert_eq!(error.context.field.as_deref(), Some("perceived_fatigue"));

    let sleepless = WeeklyPerformanceData {
        sleep_quality: 0,
        ..calm_week(1)
    };
    assert!(sleepless.validate().is_err());
}

#[test]
fn test_profile_validation() {
    assert!(profile(ExperienceLevel::Novice).validate().is_ok());

    let mut stressed = profile(ExperienceLevel::Novice);
    stressed.stress_level = 9;
    assert!(stressed.validate().is_err());

    let mut negative = profile(ExperienceLevel::Novice);
    negative.training_age_years = -1.0;
    assert!(negative.validate().is_err());
}

#[test]
fn test_mesocycle_week_helpers() {
    let week = base_week();
    assert_eq!(week.prescribed_sets(), 7);
    assert!(week.validate().is_ok());

    let mut broken = base_week();
    broken.sessions[0].exercises[1].rep_range = RepRange::new(15, 12);
    assert_eq!(
        broken.validate().unwrap_err().context.resource_id.as_deref(),
        Some("lateral_raise")
    );

    let mut zeroed = base_week();
    zeroed.volume_modifier = 0.0;
    assert!(zeroed.validate().is_err());
}

#[test]
fn test_enum_wire_names() {
    assert_eq!(
        serde_json::to_value(BodyPart::LowerBack).unwrap(),
        json!("lower_back")
    );
    assert_eq!(
        serde_json::to_value(TrainingPhase::Hypertrophy).unwrap(),
        json!("hypertrophy")
    );
    assert_eq!(
        serde_json::from_value::<ExperienceLevel>(json!("advanced")).unwrap(),
        ExperienceLevel::Advanced
    );
}

#[test]
fn test_discomfort_severity_levels() {
    assert_eq!(DiscomfortSeverity::Twinge.level(), 1);
    assert_eq!(DiscomfortSeverity::Pain.level(), 3);
    assert_eq!(DiscomfortSeverity::from_level(0), DiscomfortSeverity::Twinge);
    assert_eq!(DiscomfortSeverity::from_level(2), DiscomfortSeverity::Discomfort);
    assert_eq!(DiscomfortSeverity::from_level(7), DiscomfortSeverity::Pain);
    assert!(DiscomfortSeverity::Pain > DiscomfortSeverity::Twinge);
}

#[test]
fn test_discomfort_entry_json() {
    let entry: DiscomfortEntry = serde_json::from_value(json!({
        "id": "6f1c2d7e-8a0b-4c3d-9e5f-1a2b3c4d5e6f",
        "body_part": "knee",
        "severity": "pain",
        "logged_at": "2025-01-10T18:30:00Z"
    }))
    .unwrap();

    assert_eq!(entry.body_part, BodyPart::Knee);
    assert_eq!(entry.severity, DiscomfortSeverity::Pain);
    assert!(entry.exercise_id.is_none());
    assert!(entry.notes.is_none());
}

#[test]
fn test_performance_snapshot_validation() {
    assert!(snapshot_with_e1rm("back_squat", 0, 140.0, 3).validate().is_ok());

    let mut anonymous = snapshot_with_e1rm("back_squat", 0, 140.0, 3);
    anonymous.exercise_id = String::new();
    assert_eq!(
        anonymous.validate().unwrap_err().code,
        ErrorCode::MissingRequiredField
    );

    let mut overreported = snapshot_with_e1rm("back_squat", 0, 140.0, 3);
    overreported.rpe = 11.0;
    let error = overreported.validate().unwrap_err();
    assert_eq!(error.context.field.as_deref(), Some("rpe"));
    assert_eq!(error.context.resource_id.as_deref(), Some("back_squat"));

    let mut corrupt = snapshot_with_e1rm("back_squat", 0, 140.0, 3);
    corrupt.e1rm = f64::NAN;
    assert_eq!(
        corrupt.validate().unwrap_err().context.field.as_deref(),
        Some("e1rm")
    );

    let mut negative = snapshot_with_e1rm("back_squat", 0, 140.0, 3);
    negative.weight = -20.0;
    assert!(negative.validate().is_err());
}

#[test]
fn test_discomfort_entry_validation() {
    assert!(discomfort(BodyPart::Knee, DiscomfortSeverity::Pain, 0, None)
        .validate()
        .is_ok());
    assert!(
        discomfort(BodyPart::Knee, DiscomfortSeverity::Pain, 0, Some("back_squat"))
            .validate()
            .is_ok()
    );

    let blank = discomfort(BodyPart::Knee, DiscomfortSeverity::Pain, 0, Some(" "));
    let error = blank.validate().unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.context.field.as_deref(), Some("exercise_id"));
}
