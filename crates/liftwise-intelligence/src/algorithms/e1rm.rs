// ABOUTME: Estimated one-rep-max algorithms (Epley, Brzycki) with RPE-adjusted effective reps
// ABOUTME: Also provides the inverse relation, rounding to plate increments, and best-set snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::e1rm::{
    BRZYCKI_BASE, BRZYCKI_MAX_EFFECTIVE_REPS, BRZYCKI_SLOPE, EPLEY_DIVISOR,
};
use crate::constants::effort::MAX_RPE;
use crate::errors::AppError;
use crate::models::{PerformanceSnapshot, SetLog};

/// One-rep-max estimation formula
///
/// Both formulas work on *effective* reps: completed reps plus the reps left
/// in reserve (`10 - RPE`). A set of 8 at RPE 8 is treated like 10 reps to failure.
///
/// # Scientific References
///
/// - Epley, B. (1985). "Poundage Chart." *Boyd Epley Workout*. Lincoln, NE.
/// - Brzycki, M. (1993). "Strength testing: predicting a one-rep max from reps-to-fatigue."
///   *Journal of Physical Education, Recreation & Dance*, 64(1), 88-90.
/// - Helms, E.R., et al. (2016). "Application of the repetitions in reserve-based rating of
///   perceived exertion scale for resistance training." *Strength Cond J*, 38(4), 42-49.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum E1rmAlgorithm {
    /// Epley: `weight * (1 + effective_reps / 30)`
    #[default]
    Epley,

    /// Brzycki: `weight / (1.0278 - 0.0278 * effective_reps)`
    ///
    /// Diverges as effective reps approach 37, so it is only applied up to
    /// 10 effective reps; above that the estimate falls back to Epley.
    Brzycki,
}

impl E1rmAlgorithm {
    /// Estimate the one-rep max for a set
    ///
    /// Returns 0 when `weight` or `reps` is 0, and returns `weight` unchanged for a
    /// single at RPE 10. Results are rounded to 2 decimals and are monotonically
    /// non-decreasing in `reps` for a fixed weight and RPE.
    #[must_use]
    pub fn estimate(self, weight: f64, reps: u32, rpe: f64) -> f64 {
        if weight <= 0.0 || reps == 0 {
            return 0.0;
        }
        if reps == 1 && rpe >= MAX_RPE {
            return weight;
        }

        let effective_reps = f64::from(reps) + rpe_to_rir(rpe);

        let estimate = match self {
            Self::Epley => Self::epley(weight, effective_reps),
            Self::Brzycki if effective_reps <= BRZYCKI_MAX_EFFECTIVE_REPS => {
                weight / BRZYCKI_SLOPE.mul_add(-effective_reps, BRZYCKI_BASE)
            }
            Self::Brzycki => Self::epley(weight, effective_reps),
        };

        round2(estimate)
    }

    fn epley(weight: f64, effective_reps: f64) -> f64 {
        weight * (1.0 + effective_reps / EPLEY_DIVISOR)
    }

    /// Get algorithm name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Epley => "epley",
            Self::Brzycki => "brzycki",
        }
    }

    /// Get formula as string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Epley => "E1RM = weight x (1 + (reps + RIR) / 30)",
            Self::Brzycki => {
                "E1RM = weight / (1.0278 - 0.0278 x (reps + RIR)), Epley above 10 effective reps"
            }
        }
    }
}

impl fmt::Display for E1rmAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for E1rmAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "epley" => Ok(Self::Epley),
            "brzycki" => Ok(Self::Brzycki),
            other => Err(AppError::invalid_input(format!(
                "Unknown E1RM algorithm: '{other}'. Valid options: epley, brzycki"
            ))),
        }
    }
}

/// Estimate one-rep max with the default (Epley) formula
#[must_use]
pub fn estimate_one_rep_max(weight: f64, reps: u32, rpe: f64) -> f64 {
    E1rmAlgorithm::Epley.estimate(weight, reps, rpe)
}

/// Reps in reserve implied by an RPE, never negative
#[must_use]
pub fn rpe_to_rir(rpe: f64) -> f64 {
    (MAX_RPE - rpe).max(0.0)
}

/// RPE implied by a reps-in-reserve value
#[must_use]
pub fn rir_to_rpe(rir: f64) -> f64 {
    (MAX_RPE - rir).clamp(1.0, MAX_RPE)
}

/// Load that should allow `reps` with `rir` left in reserve (inverse Epley)
#[must_use]
pub fn weight_for_reps(e1rm: f64, reps: u32, rir: f64) -> f64 {
    if e1rm <= 0.0 {
        return 0.0;
    }
    let effective_reps = f64::from(reps) + rir.max(0.0);
    round2(e1rm / (1.0 + effective_reps / EPLEY_DIVISOR))
}

/// Reps to failure expected at `weight` for a lifter with the given E1RM (inverse Epley)
#[must_use]
pub fn predict_max_reps(e1rm: f64, weight: f64) -> f64 {
    if weight <= 0.0 || e1rm <= 0.0 {
        return 0.0;
    }
    (EPLEY_DIVISOR * (e1rm / weight - 1.0)).max(0.0)
}

/// Round a load to the nearest available increment
#[must_use]
pub fn round_to_increment(weight: f64, increment: f64) -> f64 {
    if increment <= 0.0 {
        return round2(weight.max(0.0));
    }
    round2(((weight / increment).round() * increment).max(0.0))
}

/// Round a load down to the nearest available increment
#[must_use]
pub fn floor_to_increment(weight: f64, increment: f64) -> f64 {
    if increment <= 0.0 {
        return round2(weight.max(0.0));
    }
    round2(((weight / increment).floor() * increment).max(0.0))
}

/// Derive a session snapshot from the best non-warmup set (highest E1RM)
///
/// Returns `None` when the session has no working sets. Ties keep the earlier set.
#[must_use]
pub fn best_set_snapshot(
    exercise_id: &str,
    date: DateTime<Utc>,
    sets: &[SetLog],
) -> Option<PerformanceSnapshot> {
    let working: Vec<&SetLog> = sets
        .iter()
        .filter(|set| !set.is_warmup && set.exercise_id == exercise_id)
        .collect();

    let mut best: Option<(&SetLog, f64)> = None;
    for set in working.iter().copied() {
        let e1rm = estimate_one_rep_max(set.load(), set.reps, set.rpe);
        if best.is_none_or(|(_, top)| e1rm > top) {
            best = Some((set, e1rm));
        }
    }

    best.map(|(set, e1rm)| PerformanceSnapshot {
        exercise_id: exercise_id.to_owned(),
        date,
        weight: set.load(),
        reps: set.reps,
        rpe: set.rpe,
        e1rm,
        sets: u32::try_from(working.len()).unwrap_or(u32::MAX),
    })
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
