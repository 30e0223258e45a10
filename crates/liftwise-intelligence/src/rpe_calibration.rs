// ABOUTME: Learns each lifter's effort-reporting bias from AMRAP sets and corrects prescribed RIR
// ABOUTME: Bounded per-instance history, confidence-weighted overall bias, staleness and priorities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! RPE Calibration Engine
//!
//! Every AMRAP set is compared with recent submaximal sets at a similar load.
//! Each of those sets implies an E1RM through `weight * (1 + (reps + RIR) / 30)`,
//! and that E1RM predicts how many reps the AMRAP load should have allowed.
//! The difference between the reps actually achieved and the average prediction
//! is the lifter's bias:
//!
//! - positive bias: more reps in the tank than reported (sandbagging)
//! - negative bias: fewer reps than reported (overreaching)
//!
//! The engine owns its history. Callers that share one instance across
//! concurrent requests must serialize calls to [`RpeCalibrationEngine::add_set_log`].

use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithms::{estimate_one_rep_max, predict_max_reps, rir_to_rpe};
use crate::config::intelligence::CalibrationConfig;
use crate::constants::calibration::{
    HIGH_WEIGHT, LOW_WEIGHT, MEDIUM_WEIGHT, OVERREACHING_BIAS, SANDBAGGING_BIAS,
};
use crate::constants::effort::MAX_ADJUSTED_RIR;
use crate::errors::{AppError, AppResult};

/// One logged set as seen by the calibration engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationSetLog {
    /// Exercise performed
    pub exercise_id: String,
    /// Load used
    pub weight: f64,
    /// Reps completed
    pub actual_reps: u32,
    /// Reps in reserve the lifter reported
    pub reported_rir: f64,
    /// Reps prescribed
    pub prescribed_reps: u32,
    /// Whether the set was taken to failure as a test
    pub was_amrap: bool,
    /// When the set was logged
    pub timestamp: DateTime<Utc>,
}

impl CalibrationSetLog {
    /// Reject malformed records before they reach the engine
    ///
    /// # Errors
    ///
    /// Returns an error when the exercise id is empty, the weight is negative or
    /// non-finite, or the reported RIR is negative or non-finite
    pub fn validate(&self) -> AppResult<()> {
        if self.exercise_id.trim().is_empty() {
            return Err(AppError::missing_field("exercise_id"));
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(AppError::out_of_range(
                "weight",
                format!("Weight must be a non-negative number, got {}", self.weight),
            )
            .with_resource_id(&self.exercise_id));
        }
        if !self.reported_rir.is_finite() || self.reported_rir < 0.0 {
            return Err(AppError::out_of_range(
                "reported_rir",
                format!("Reported RIR must be non-negative, got {}", self.reported_rir),
            )
            .with_resource_id(&self.exercise_id));
        }
        Ok(())
    }
}

/// How much a calibration can be trusted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalibrationConfidence {
    /// 0-2 matched sets
    Low,
    /// 3-5 matched sets
    Medium,
    /// 6 or more matched sets
    High,
}

impl CalibrationConfidence {
    /// Weight used when averaging bias across exercises
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::Low => LOW_WEIGHT,
            Self::Medium => MEDIUM_WEIGHT,
            Self::High => HIGH_WEIGHT,
        }
    }
}

/// Latest calibration for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationResult {
    /// Exercise calibrated
    pub exercise_id: String,
    /// Actual minus predicted max reps (positive means sandbagging)
    pub bias: f64,
    /// Average predicted max reps at the AMRAP load
    pub predicted_max_reps: f64,
    /// Reps achieved on the AMRAP set
    pub actual_max_reps: u32,
    /// Matched submaximal sets
    pub data_points: usize,
    /// Trust in the bias
    pub confidence: CalibrationConfidence,
    /// Timestamp of the AMRAP set
    pub calibrated_at: DateTime<Utc>,
}

/// Bias across every calibrated exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasAnalysis {
    /// Confidence-weighted mean bias (0 when nothing is calibrated)
    pub weighted_bias: f64,
    /// Calibrations with at least one matched set
    pub exercises_calibrated: usize,
    /// Weighted bias >= 2
    pub sandbagging_detected: bool,
    /// Weighted bias <= -2
    pub overreaching_detected: bool,
    /// Advice for the lifter
    pub recommendation: String,
}

/// Urgency of running a new AMRAP test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalibrationPriority {
    /// Never calibrated or low confidence
    High,
    /// Calibration is stale
    Medium,
    /// Fresh and trusted
    Low,
}

/// Per-lifter effort calibration state
#[derive(Debug, Clone)]
pub struct RpeCalibrationEngine {
    config: CalibrationConfig,
    history: VecDeque<CalibrationSetLog>,
    calibrations: BTreeMap<String, CalibrationResult>,
}

impl RpeCalibrationEngine {
    /// Empty engine
    #[must_use]
    pub fn new(config: CalibrationConfig) -> Self {
        Self {
            config,
            history: VecDeque::new(),
            calibrations: BTreeMap::new(),
        }
    }

    /// Restore an engine from persisted history and calibrations
    ///
    /// History beyond the configured capacity keeps only the most recent entries.
    /// When two calibrations share an exercise the later one wins.
    #[must_use]
    pub fn with_state(
        config: CalibrationConfig,
        history: Vec<CalibrationSetLog>,
        calibrations: Vec<CalibrationResult>,
    ) -> Self {
        let mut history: VecDeque<CalibrationSetLog> = history.into();
        while history.len() > config.max_history {
            history.pop_front();
        }
        let calibrations = calibrations
            .into_iter()
            .map(|result| (result.exercise_id.clone(), result))
            .collect();
        Self {
            config,
            history,
            calibrations,
        }
    }

    /// Logged sets, oldest first
    pub fn history(&self) -> impl Iterator<Item = &CalibrationSetLog> {
        self.history.iter()
    }

    /// Calibrations ordered by exercise id
    pub fn calibrations(&self) -> impl Iterator<Item = &CalibrationResult> {
        self.calibrations.values()
    }

    /// Latest calibration for an exercise
    #[must_use]
    pub fn calibration(&self, exercise_id: &str) -> Option<&CalibrationResult> {
        self.calibrations.get(exercise_id)
    }

    /// Record a set; AMRAP sets produce a new calibration for their exercise
    ///
    /// The set joins the history after matching, so an AMRAP never matches itself.
    /// An AMRAP with no matched sets is returned but does not replace an existing
    /// calibration for the exercise.
    pub fn add_set_log(&mut self, log: CalibrationSetLog) -> Option<CalibrationResult> {
        let result = log.was_amrap.then(|| self.calibrate(&log));

        if let Some(result) = &result {
            let keep_previous =
                result.data_points == 0 && self.calibrations.contains_key(&result.exercise_id);
            if keep_previous {
                debug!(
                    exercise_id = %result.exercise_id,
                    "AMRAP had no matching sets, keeping previous calibration"
                );
            } else {
                self.calibrations
                    .insert(result.exercise_id.clone(), result.clone());
            }
        }

        self.history.push_back(log);
        while self.history.len() > self.config.max_history {
            self.history.pop_front();
        }

        result
    }

    fn calibrate(&self, amrap: &CalibrationSetLog) -> CalibrationResult {
        let window_start = amrap.timestamp - Duration::days(self.config.match_window_days);
        let tolerance = amrap.weight * self.config.weight_tolerance;

        let predictions: Vec<f64> = self
            .history
            .iter()
            .filter(|set| {
                !set.was_amrap
                    && set.exercise_id == amrap.exercise_id
                    && set.timestamp >= window_start
                    && set.timestamp <= amrap.timestamp
                    && (set.weight - amrap.weight).abs() <= tolerance
            })
            .map(|set| {
                let e1rm = estimate_one_rep_max(
                    set.weight,
                    set.actual_reps,
                    rir_to_rpe(set.reported_rir),
                );
                predict_max_reps(e1rm, amrap.weight)
            })
            .collect();

        let data_points = predictions.len();
        let (predicted_max_reps, bias) = if data_points == 0 {
            (0.0, 0.0)
        } else {
            let predicted = round1(predictions.iter().sum::<f64>() / data_points as f64);
            (predicted, round1(f64::from(amrap.actual_reps) - predicted))
        };
        let confidence = self.confidence_for(data_points);

        debug!(
            exercise_id = %amrap.exercise_id,
            data_points,
            bias,
            ?confidence,
            "calibrated effort reporting"
        );

        CalibrationResult {
            exercise_id: amrap.exercise_id.clone(),
            bias,
            predicted_max_reps,
            actual_max_reps: amrap.actual_reps,
            data_points,
            confidence,
            calibrated_at: amrap.timestamp,
        }
    }

    const fn confidence_for(&self, data_points: usize) -> CalibrationConfidence {
        if data_points >= self.config.high_confidence_samples {
            CalibrationConfidence::High
        } else if data_points >= self.config.medium_confidence_samples {
            CalibrationConfidence::Medium
        } else {
            CalibrationConfidence::Low
        }
    }

    /// Confidence-weighted bias across all calibrated exercises
    #[must_use]
    pub fn analyze_overall_bias(&self) -> BiasAnalysis {
        let (weighted_sum, weight_total, count) = self
            .calibrations
            .values()
            .filter(|result| result.data_points > 0)
            .fold((0.0, 0.0, 0_usize), |(sum, total, count), result| {
                let weight = result.confidence.weight();
                (
                    result.bias.mul_add(weight, sum),
                    total + weight,
                    count + 1,
                )
            });

        let weighted_bias = if weight_total > 0.0 {
            round1(weighted_sum / weight_total)
        } else {
            0.0
        };
        let sandbagging_detected = count > 0 && weighted_bias >= SANDBAGGING_BIAS;
        let overreaching_detected = count > 0 && weighted_bias <= OVERREACHING_BIAS;

        let recommendation = if count == 0 {
            "Log an AMRAP set on a main lift to calibrate effort ratings".to_owned()
        } else if sandbagging_detected {
            format!(
                "You tend to stop about {weighted_bias:.1} reps short of what you report. \
                 Push working sets closer to your stated RIR."
            )
        } else if overreaching_detected {
            format!(
                "You tend to overestimate reps in reserve by about {:.1}. \
                 Leave more in the tank on working sets.",
                weighted_bias.abs()
            )
        } else {
            "Your effort ratings match your performance well".to_owned()
        };

        BiasAnalysis {
            weighted_bias,
            exercises_calibrated: count,
            sandbagging_detected,
            overreaching_detected,
            recommendation,
        }
    }

    /// RIR to tell the lifter so their true effort matches the prescription
    ///
    /// Unchanged when uncalibrated or low confidence. High confidence shifts by the
    /// rounded bias, medium by half of it. Never below 0.
    #[must_use]
    pub fn get_adjusted_rir(&self, exercise_id: &str, prescribed_rir: u8) -> u8 {
        let Some(result) = self.calibrations.get(exercise_id) else {
            return prescribed_rir;
        };

        let adjustment = match result.confidence {
            CalibrationConfidence::Low => return prescribed_rir,
            CalibrationConfidence::Medium => (result.bias / 2.0).round(),
            CalibrationConfidence::High => result.bias.round(),
        };

        (f64::from(prescribed_rir) - adjustment).clamp(0.0, MAX_ADJUSTED_RIR) as u8
    }

    /// Whether an exercise should get a new AMRAP test as of `now`
    #[must_use]
    pub fn needs_calibration(&self, exercise_id: &str, now: DateTime<Utc>) -> bool {
        self.calibrations.get(exercise_id).is_none_or(|result| {
            result.confidence == CalibrationConfidence::Low
                || now - result.calibrated_at > Duration::days(self.config.stale_after_days)
        })
    }

    /// Rank exercises by calibration urgency, most urgent first, ties by id
    #[must_use]
    pub fn get_calibration_priorities(
        &self,
        exercise_ids: &[String],
        now: DateTime<Utc>,
    ) -> Vec<(String, CalibrationPriority)> {
        let mut priorities: Vec<(String, CalibrationPriority)> = exercise_ids
            .iter()
            .map(|id| {
                let priority = match self.calibrations.get(id) {
                    None => CalibrationPriority::High,
                    Some(result) if result.confidence == CalibrationConfidence::Low => {
                        CalibrationPriority::High
                    }
                    Some(_) if self.needs_calibration(id, now) => CalibrationPriority::Medium,
                    Some(_) => CalibrationPriority::Low,
                };
                (id.clone(), priority)
            })
            .collect();

        priorities.sort_by(|(a_id, a), (b_id, b)| a.cmp(b).then_with(|| a_id.cmp(b_id)));
        priorities.dedup_by(|a, b| a.0 == b.0);
        priorities
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
