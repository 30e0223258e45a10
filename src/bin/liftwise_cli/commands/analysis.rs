// ABOUTME: Analysis subcommands: plateau detection and effort-reporting calibration
// ABOUTME: Groups snapshots per exercise and replays AMRAP logs through a fresh calibration engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use liftwise::config::intelligence::{CalibrationConfig, PlateauConfig};
use liftwise::models::PerformanceSnapshot;
use liftwise::plateau::{PlateauAlert, PlateauDetector};
use liftwise::rpe_calibration::{
    BiasAnalysis, CalibrationPriority, CalibrationResult, CalibrationSetLog, RpeCalibrationEngine,
};
use serde::Serialize;
use tracing::info;

use crate::helpers::io::{print_json, read_json, validate_all};

#[derive(Serialize)]
struct PlateauReport {
    alerts: Vec<PlateauAlert>,
    plateaued: Vec<String>,
    progress_score: f64,
}

#[derive(Serialize)]
struct CalibrationReport {
    calibrations: Vec<CalibrationResult>,
    bias: BiasAnalysis,
    priorities: Vec<(String, CalibrationPriority)>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    adjusted_rir: BTreeMap<String, u8>,
}

/// Detect plateaus for every exercise found in a snapshot file
pub fn plateau(path: &Path, now: DateTime<Utc>, config: &PlateauConfig) -> Result<()> {
    let snapshots: Vec<PerformanceSnapshot> = read_json(path)?;
    validate_all(&snapshots, PerformanceSnapshot::validate)?;

    let mut grouped: BTreeMap<String, Vec<PerformanceSnapshot>> = BTreeMap::new();
    for snapshot in snapshots {
        grouped
            .entry(snapshot.exercise_id.clone())
            .or_default()
            .push(snapshot);
    }
    let histories: Vec<(String, Vec<PerformanceSnapshot>)> = grouped.into_iter().collect();

    let alerts = PlateauDetector::detect_batch(&histories, now, config);
    let plateaued = PlateauDetector::plateaued_exercises(&alerts)
        .into_iter()
        .map(|alert| alert.exercise_id.clone())
        .collect();

    print_json(&PlateauReport {
        progress_score: PlateauDetector::progress_score(&alerts),
        plateaued,
        alerts,
    })
}

/// Replay AMRAP logs through the calibration engine
pub fn calibrate(
    path: &Path,
    prescribed_rir: Option<u8>,
    now: DateTime<Utc>,
    config: &CalibrationConfig,
) -> Result<()> {
    let mut logs: Vec<CalibrationSetLog> = read_json(path)?;
    validate_all(&logs, CalibrationSetLog::validate)?;
    logs.sort_by_key(|log| log.timestamp);

    let exercise_ids: Vec<String> = logs
        .iter()
        .map(|log| log.exercise_id.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut engine = RpeCalibrationEngine::new(config.clone());
    for log in logs {
        engine.add_set_log(log);
    }

    let bias = engine.analyze_overall_bias();
    info!(
        exercises_calibrated = bias.exercises_calibrated,
        weighted_bias = bias.weighted_bias,
        "replayed calibration history"
    );

    let adjusted_rir = prescribed_rir
        .map(|rir| {
            exercise_ids
                .iter()
                .map(|id| (id.clone(), engine.get_adjusted_rir(id, rir)))
                .collect()
        })
        .unwrap_or_default();

    print_json(&CalibrationReport {
        calibrations: engine.calibrations().cloned().collect(),
        priorities: engine.get_calibration_priorities(&exercise_ids, now),
        bias,
        adjusted_rir,
    })
}
