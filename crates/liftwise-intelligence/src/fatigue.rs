// ABOUTME: Weekly fatigue scoring (0-100) from recovery surveys and multi-week trend analysis
// ABOUTME: Static band table maps scores to low/moderate/high/critical with recommendation text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Fatigue Analyzer
//!
//! The weekly score is a weighted sum of survey answers:
//!
//! ```text
//! (fatigue - 1) * 6.25 + (5 - sleep) * 6.25 + (5 - motivation) * 5
//!   + min(15, missed_reps * 3) + 10 if joint pain + 5 if strength decline
//! ```
//!
//! capped at 100.
//!
//! # Scientific References
//!
//! - Meeusen, R., et al. (2013). "Prevention, diagnosis, and treatment of the overtraining
//!   syndrome." *European Journal of Sport Science*, 13(1), 1-24.
//! - Saw, A.E., et al. (2016). "Monitoring the athlete training response: subjective self-reported
//!   measures trump commonly used objective measures." *Br J Sports Med*, 50(5), 281-291.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::constants::fatigue::{
    FATIGUE_WEIGHT, HIGH_BAND_MAX, JOINT_PAIN_PENALTY, LOW_BAND_MAX, MAX_SCORE, MISSED_REP_CAP,
    MISSED_REP_WEIGHT, MODERATE_BAND_MAX, MOTIVATION_WEIGHT, SLEEP_WEIGHT,
    STRENGTH_DECLINE_PENALTY, TREND_DELTA, TREND_WEEKS,
};
use crate::models::WeeklyPerformanceData;

/// Fatigue band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FatigueLevel {
    /// Score below 25
    Low,
    /// Score 25 to below 50
    Moderate,
    /// Score 50 to below 75
    High,
    /// Score 75 and above
    Critical,
}

impl fmt::Display for FatigueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
        };
        f.write_str(label)
    }
}

/// Band table: `(exclusive upper bound, level, recommendation)`
const FATIGUE_BANDS: [(f64, FatigueLevel, &str); 3] = [
    (
        LOW_BAND_MAX,
        FatigueLevel::Low,
        "Recovery is keeping up with training. Continue progressing as planned.",
    ),
    (
        MODERATE_BAND_MAX,
        FatigueLevel::Moderate,
        "Fatigue is building. Prioritize sleep and nutrition and monitor next week.",
    ),
    (
        HIGH_BAND_MAX,
        FatigueLevel::High,
        "Fatigue is high. Hold loads steady and consider reducing volume.",
    ),
];

const CRITICAL_RECOMMENDATION: &str =
    "Fatigue is critical. Take a deload week before continuing the program.";

/// Direction of fatigue across recent weeks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FatigueTrend {
    /// Later weeks score more than 5 points lower
    Improving,
    /// Within 5 points
    Stable,
    /// Later weeks score more than 5 points higher
    Worsening,
}

/// Individual contributions to a weekly score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FatigueComponents {
    /// Perceived fatigue contribution
    pub perceived_fatigue: f64,
    /// Sleep contribution
    pub sleep: f64,
    /// Motivation contribution
    pub motivation: f64,
    /// Missed-rep contribution (capped)
    pub missed_reps: f64,
    /// Joint-pain penalty
    pub joint_pain: f64,
    /// Strength-decline penalty
    pub strength_decline: f64,
}

/// Scored week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatigueScore {
    /// Week the score belongs to
    pub week_number: u32,
    /// Total score (0-100)
    pub score: f64,
    /// Band
    pub level: FatigueLevel,
    /// Band-specific advice
    pub recommendation: String,
    /// Breakdown of the total
    pub components: FatigueComponents,
}

impl FatigueScore {
    /// Readiness on a 0-100 scale (inverse of fatigue)
    #[must_use]
    pub fn readiness(&self) -> f64 {
        MAX_SCORE - self.score
    }

    /// Score rescaled to 0-10
    #[must_use]
    pub fn weekly_score(&self) -> f64 {
        self.score / 10.0
    }
}

/// Weekly fatigue scoring and trend analysis
pub struct FatigueAnalyzer;

impl FatigueAnalyzer {
    /// Score one week of survey data
    #[must_use]
    pub fn calculate_fatigue_score(week: &WeeklyPerformanceData) -> FatigueScore {
        let components = FatigueComponents {
            perceived_fatigue: f64::from(week.perceived_fatigue.saturating_sub(1)) * FATIGUE_WEIGHT,
            sleep: f64::from(5_u8.saturating_sub(week.sleep_quality)) * SLEEP_WEIGHT,
            motivation: f64::from(5_u8.saturating_sub(week.motivation)) * MOTIVATION_WEIGHT,
            missed_reps: (f64::from(week.missed_reps) * MISSED_REP_WEIGHT).min(MISSED_REP_CAP),
            joint_pain: if week.joint_pain {
                JOINT_PAIN_PENALTY
            } else {
                0.0
            },
            strength_decline: if week.strength_decline {
                STRENGTH_DECLINE_PENALTY
            } else {
                0.0
            },
        };

        let score = (components.perceived_fatigue
            + components.sleep
            + components.motivation
            + components.missed_reps
            + components.joint_pain
            + components.strength_decline)
            .min(MAX_SCORE);

        let (level, recommendation) = Self::band(score);

        debug!(week = week.week_number, score, %level, "scored weekly fatigue");

        FatigueScore {
            week_number: week.week_number,
            score,
            level,
            recommendation: recommendation.to_owned(),
            components,
        }
    }

    /// Band and recommendation for a score
    #[must_use]
    pub fn band(score: f64) -> (FatigueLevel, &'static str) {
        FATIGUE_BANDS
            .iter()
            .find(|(upper, _, _)| score < *upper)
            .map_or((FatigueLevel::Critical, CRITICAL_RECOMMENDATION), |(_, level, text)| {
                (*level, *text)
            })
    }

    /// Compare the earlier and later halves of the most recent weeks (at most three)
    ///
    /// Weeks are ordered by week number. With fewer than two weeks the trend is stable.
    #[must_use]
    pub fn analyze_fatigue_trend(history: &[WeeklyPerformanceData]) -> FatigueTrend {
        let mut ordered: Vec<&WeeklyPerformanceData> = history.iter().collect();
        ordered.sort_by_key(|week| week.week_number);

        let recent = &ordered[ordered.len().saturating_sub(TREND_WEEKS)..];
        if recent.len() < 2 {
            return FatigueTrend::Stable;
        }

        let scores: Vec<f64> = recent
            .iter()
            .map(|week| Self::calculate_fatigue_score(week).score)
            .collect();
        let (earlier, later) = scores.split_at(scores.len() / 2);
        let difference = mean(later) - mean(earlier);

        let trend = if difference > TREND_DELTA {
            FatigueTrend::Worsening
        } else if difference < -TREND_DELTA {
            FatigueTrend::Improving
        } else {
            FatigueTrend::Stable
        };

        debug!(difference, ?trend, "analyzed fatigue trend");
        trend
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
