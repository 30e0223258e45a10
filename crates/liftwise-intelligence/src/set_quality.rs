// ABOUTME: Labels a single set's training stimulus from its effort level and position in the session
// ABOUTME: Junk, effective, stimulative, or excessive, with a reason string and session summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Set Quality Classifier
//!
//! RPE bands, checked in order:
//!
//! | RPE | Label |
//! |---|---|
//! | <= 5 | junk |
//! | 10 on a non-final set | excessive |
//! | 7.5 - 9.5 | stimulative |
//! | anything else | effective |
//!
//! # Scientific References
//!
//! - Zourdos, M.C., et al. (2016). "Novel resistance training-specific rating of perceived exertion
//!   scale measuring repetitions in reserve." *J Strength Cond Res*, 30(1), 267-275.
//! - Baz-Valle, E., et al. (2021). "Total number of sets as a training volume quantification
//!   method for muscle hypertrophy." *J Strength Cond Res*, 36(3), 870-878.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::set_quality::{
    FAILURE_RPE, JUNK_MAX_RPE, STIMULATIVE_MAX_RPE, STIMULATIVE_MIN_RPE,
};
use crate::models::{RepRange, SetLog, SetQuality};

/// Everything the classifier needs to label one set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetQualityInput {
    /// Reported RPE (1-10)
    pub rpe: f64,
    /// Prescribed reps in reserve
    pub target_rir: u8,
    /// Completed reps
    pub reps: u32,
    /// Prescribed rep range
    pub target_rep_range: RepRange,
    /// Whether this was the session's final set for the exercise
    pub is_last_set: bool,
}

/// Classification outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetQualityAssessment {
    /// Stimulus label
    pub quality: SetQuality,
    /// Human-readable explanation
    pub reason: String,
}

/// Per-session counts by label (warmups excluded)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionQualitySummary {
    /// Junk sets
    pub junk: u32,
    /// Effective sets
    pub effective: u32,
    /// Stimulative sets
    pub stimulative: u32,
    /// Excessive sets
    pub excessive: u32,
}

impl SessionQualitySummary {
    /// Sets that count toward productive volume (effective + stimulative)
    #[must_use]
    pub const fn effective_set_count(&self) -> u32 {
        self.effective + self.stimulative
    }

    /// Total classified sets
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.junk + self.effective + self.stimulative + self.excessive
    }

    const fn record(&mut self, quality: SetQuality) {
        match quality {
            SetQuality::Junk => self.junk += 1,
            SetQuality::Effective => self.effective += 1,
            SetQuality::Stimulative => self.stimulative += 1,
            SetQuality::Excessive => self.excessive += 1,
        }
    }
}

/// Stateless set classifier
pub struct SetQualityClassifier;

impl SetQualityClassifier {
    /// Label a single set
    #[must_use]
    pub fn classify(input: &SetQualityInput) -> SetQualityAssessment {
        let rpe = input.rpe;

        let (quality, mut reason) = if rpe <= JUNK_MAX_RPE {
            (
                SetQuality::Junk,
                format!("RPE {rpe} is too far from failure to drive adaptation"),
            )
        } else if rpe >= FAILURE_RPE && !input.is_last_set {
            (
                SetQuality::Excessive,
                "Reached failure prematurely; remaining sets will suffer".to_owned(),
            )
        } else if (STIMULATIVE_MIN_RPE..=STIMULATIVE_MAX_RPE).contains(&rpe) {
            (
                SetQuality::Stimulative,
                format!("RPE {rpe} is in the productive range close to failure"),
            )
        } else if rpe >= FAILURE_RPE {
            (
                SetQuality::Effective,
                "Failure on the final set is acceptable".to_owned(),
            )
        } else {
            (
                SetQuality::Effective,
                format!(
                    "RPE {rpe} provides stimulus; target RIR is {}",
                    input.target_rir
                ),
            )
        };

        if quality == SetQuality::Effective && input.reps < input.target_rep_range.min {
            reason.push_str(&format!(". Below target {}", input.target_rep_range));
        }

        debug!(rpe, reps = input.reps, %quality, "classified set");

        SetQualityAssessment { quality, reason }
    }

    /// Classify every working set of one exercise in a session
    ///
    /// Sets are ordered by set number; the highest-numbered working set is the final set.
    /// Warmups are skipped and do not appear in the output.
    #[must_use]
    pub fn classify_session(
        sets: &[SetLog],
        target_rep_range: RepRange,
        target_rir: u8,
    ) -> Vec<(u32, SetQualityAssessment)> {
        let mut working: Vec<&SetLog> = sets.iter().filter(|set| !set.is_warmup).collect();
        working.sort_by_key(|set| set.set_number);
        let last_index = working.len().saturating_sub(1);

        working
            .iter()
            .enumerate()
            .map(|(index, set)| {
                let input = SetQualityInput {
                    rpe: set.rpe,
                    target_rir,
                    reps: set.reps,
                    target_rep_range,
                    is_last_set: index == last_index,
                };
                (set.set_number, Self::classify(&input))
            })
            .collect()
    }

    /// Count labels across a session's working sets
    #[must_use]
    pub fn summarize_session(
        sets: &[SetLog],
        target_rep_range: RepRange,
        target_rir: u8,
    ) -> SessionQualitySummary {
        let mut summary = SessionQualitySummary::default();
        for (_, assessment) in Self::classify_session(sets, target_rep_range, target_rir) {
            summary.record(assessment.quality);
        }
        summary
    }
}
