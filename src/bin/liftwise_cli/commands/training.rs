// ABOUTME: Training subcommands: one-rep-max estimates, set classification, progression, volume
// ABOUTME: Loads and validates JSON records before handing them to the calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use std::path::Path;

use anyhow::{ensure, Context, Result};
use liftwise::algorithms::{rpe_to_rir, E1rmAlgorithm};
use liftwise::config::intelligence::ProgressionConfig;
use liftwise::models::{Exercise, MuscleGroup, SetLog};
use liftwise::progression::{ProgressionCalculator, ProgressionInput};
use liftwise::set_quality::{SetQualityClassifier, SetQualityInput};
use liftwise::volume::{count_weekly_sets, VolumeLandmarks, VolumeStatus};
use serde::Serialize;
use tracing::info;

use crate::helpers::io::{print_json, read_json, validate_all};

#[derive(Serialize)]
struct E1rmOutput {
    algorithm: E1rmAlgorithm,
    formula: &'static str,
    weight: f64,
    reps: u32,
    rpe: f64,
    rir: f64,
    e1rm: f64,
}

#[derive(Serialize)]
struct MuscleVolume {
    muscle: MuscleGroup,
    sets: f64,
    status: VolumeStatus,
    landmarks: VolumeLandmarks,
}

/// Estimate a one-rep max from a single set
pub fn e1rm(weight: f64, reps: u32, rpe: f64, algorithm: E1rmAlgorithm) -> Result<()> {
    ensure!(
        weight.is_finite() && weight >= 0.0,
        "Weight must be a non-negative number"
    );
    ensure!((1.0..=10.0).contains(&rpe), "RPE must be between 1 and 10");

    print_json(&E1rmOutput {
        algorithm,
        formula: algorithm.formula(),
        weight,
        reps,
        rpe,
        rir: rpe_to_rir(rpe),
        e1rm: algorithm.estimate(weight, reps, rpe),
    })
}

/// Classify one set against its targets
pub fn classify_set(input: &SetQualityInput) -> Result<()> {
    input
        .target_rep_range
        .validate()
        .context("Invalid target rep range")?;
    ensure!(
        (1.0..=10.0).contains(&input.rpe),
        "RPE must be between 1 and 10"
    );

    print_json(&SetQualityClassifier::classify(input))
}

/// Compute next-session targets from a `ProgressionInput` document
pub fn progress(path: &Path, config: &ProgressionConfig) -> Result<()> {
    let input: ProgressionInput = read_json(path)?;
    input
        .validate()
        .context("Progression input failed validation")?;

    let targets = ProgressionCalculator::calculate(&input, config);
    info!(
        exercise_id = %targets.exercise_id,
        progression_type = %targets.progression_type,
        "prescribed next session"
    );
    print_json(&targets)
}

/// Weekly hard sets and landmark status per muscle group
pub fn volume(sets_path: &Path, exercises_path: &Path) -> Result<()> {
    let sets: Vec<SetLog> = read_json(sets_path)?;
    let exercises: Vec<Exercise> = read_json(exercises_path)?;
    validate_all(&sets, SetLog::validate)?;
    validate_all(&exercises, Exercise::validate)?;

    let report: Vec<MuscleVolume> = count_weekly_sets(&sets, &exercises)
        .into_iter()
        .map(|(muscle, sets)| {
            let landmarks = VolumeLandmarks::for_muscle(muscle);
            MuscleVolume {
                muscle,
                sets,
                status: landmarks.assess(sets),
                landmarks,
            }
        })
        .collect();

    print_json(&report)
}

