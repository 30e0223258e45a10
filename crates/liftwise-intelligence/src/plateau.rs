// ABOUTME: E1RM trend analysis, plateau detection, and rule-based remedies for stalled lifts
// ABOUTME: Regression over weeks, rolling-window improvement check, peak tracking, batch scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Plateau Detector
//!
//! A lift is plateaued when its most recent window of snapshots (4 by default)
//! improved E1RM by less than 2%, or when its best E1RM is 3 or more weeks old.
//! Fewer snapshots than the window produce a not-plateaued alert with zeroed
//! counters instead of an error.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::intelligence::PlateauConfig;
use crate::constants::plateau::{
    HIGH_REPS, HIGH_RPE, LOW_REPS, LOW_RPE, LOW_SETS, PENALTY_PER_WEEK, PLATEAUED_BASE_SCORE,
    PROGRESSING_SCORE,
};
use crate::models::PerformanceSnapshot;
use crate::statistical_analysis::StatisticalAnalyzer;

const SECONDS_PER_WEEK: f64 = 7.0 * 24.0 * 60.0 * 60.0;

/// Regression and window analysis for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseTrend {
    /// Exercise analyzed
    pub exercise_id: String,
    /// Snapshots considered
    pub snapshot_count: usize,
    /// Regression slope of E1RM per week (0 when it cannot be fitted)
    pub weekly_change: f64,
    /// Goodness of fit of the regression
    pub r_squared: f64,
    /// E1RM change (percent) from the first to last point of the recent window
    pub window_improvement_percent: f64,
    /// Whether the recent window shows less than the minimum improvement
    pub is_plateaued: bool,
}

/// Kind of remedy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Move to a heavier, lower-rep range
    LowerReps,
    /// Move to a lighter, higher-rep range
    HigherReps,
    /// Add working sets
    MoreVolume,
    /// Train closer to failure
    PushHarder,
    /// Train further from failure
    BackOff,
    /// Swap in a close variation
    ExerciseVariation,
    /// Review technique
    TechniqueReview,
    /// Check sleep, nutrition, and stress
    RecoveryCheck,
}

/// A remedy for a stalled lift
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateauSuggestion {
    /// Remedy kind
    pub kind: SuggestionKind,
    /// Message shown to the lifter
    pub message: String,
}

impl PlateauSuggestion {
    fn new(kind: SuggestionKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_owned(),
        }
    }
}

/// Advisory record for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateauAlert {
    /// Exercise the alert refers to
    pub exercise_id: String,
    /// Whether the lift is plateaued
    pub is_plateaued: bool,
    /// Whole weeks since the peak E1RM
    pub weeks_since_progress: i64,
    /// Best E1RM on record
    pub peak_e1rm: f64,
    /// When the peak was set
    pub peak_date: Option<DateTime<Utc>>,
    /// Most recent E1RM
    pub current_e1rm: f64,
    /// Regression slope of E1RM per week
    pub weekly_change: f64,
    /// Remedies, most specific first (empty unless plateaued)
    pub suggestions: Vec<PlateauSuggestion>,
    /// When the analysis ran
    pub detected_at: DateTime<Utc>,
}

/// Plateau detection over performance snapshots
pub struct PlateauDetector;

impl PlateauDetector {
    /// Regress E1RM against weeks since the first snapshot and check the recent window
    #[must_use]
    pub fn analyze_exercise_trend(
        exercise_id: &str,
        snapshots: &[PerformanceSnapshot],
        config: &PlateauConfig,
    ) -> ExerciseTrend {
        let sorted = sorted_by_date(snapshots);

        let (weekly_change, r_squared) = sorted.first().map_or((0.0, 0.0), |first| {
            let points: Vec<(f64, f64)> = sorted
                .iter()
                .map(|snapshot| {
                    let seconds = (snapshot.date - first.date).num_seconds() as f64;
                    (seconds / SECONDS_PER_WEEK, snapshot.e1rm)
                })
                .collect();
            StatisticalAnalyzer::linear_regression(&points)
                .map_or((0.0, 0.0), |fit| (fit.slope, fit.r_squared))
        });

        let (window_improvement_percent, is_plateaued) = if sorted.len() >= config.window {
            let window = &sorted[sorted.len() - config.window..];
            let improvement = match (window.first(), window.last()) {
                (Some(first), Some(last)) => {
                    StatisticalAnalyzer::percent_change(first.e1rm, last.e1rm)
                }
                _ => 0.0,
            };
            (improvement, improvement < config.min_improvement_percent)
        } else {
            (0.0, false)
        };

        ExerciseTrend {
            exercise_id: exercise_id.to_owned(),
            snapshot_count: sorted.len(),
            weekly_change,
            r_squared,
            window_improvement_percent,
            is_plateaued,
        }
    }

    /// Decide whether an exercise is plateaued as of `now`
    #[must_use]
    pub fn detect_plateau(
        exercise_id: &str,
        snapshots: &[PerformanceSnapshot],
        now: DateTime<Utc>,
        config: &PlateauConfig,
    ) -> PlateauAlert {
        let sorted = sorted_by_date(snapshots);
        let current_e1rm = sorted.last().map_or(0.0, |snapshot| snapshot.e1rm);

        if sorted.len() < config.min_snapshots.max(config.window) {
            debug!(
                exercise_id,
                snapshots = sorted.len(),
                "insufficient snapshots for plateau detection"
            );
            return PlateauAlert {
                exercise_id: exercise_id.to_owned(),
                is_plateaued: false,
                weeks_since_progress: 0,
                peak_e1rm: 0.0,
                peak_date: None,
                current_e1rm,
                weekly_change: 0.0,
                suggestions: Vec::new(),
                detected_at: now,
            };
        }

        let trend = Self::analyze_exercise_trend(exercise_id, snapshots, config);

        let mut peak: Option<&PerformanceSnapshot> = None;
        for snapshot in sorted.iter().copied() {
            if peak.is_none_or(|best| snapshot.e1rm > best.e1rm) {
                peak = Some(snapshot);
            }
        }

        let weeks_since_progress = peak.map_or(0, |best| (now - best.date).num_days().max(0) / 7);
        let is_plateaued = trend.is_plateaued || weeks_since_progress >= config.stagnant_weeks;

        let suggestions = if is_plateaued {
            Self::generate_plateau_suggestions(snapshots, &trend, config)
        } else {
            Vec::new()
        };

        debug!(
            exercise_id,
            is_plateaued,
            weeks_since_progress,
            weekly_change = trend.weekly_change,
            "plateau analysis complete"
        );

        PlateauAlert {
            exercise_id: exercise_id.to_owned(),
            is_plateaued,
            weeks_since_progress,
            peak_e1rm: peak.map_or(0.0, |best| best.e1rm),
            peak_date: peak.map(|best| best.date),
            current_e1rm,
            weekly_change: trend.weekly_change,
            suggestions,
            detected_at: now,
        }
    }

    /// Rule-based remedies from the most recent snapshots' average reps, RPE, and sets
    ///
    /// Variation and technique suggestions are always included; a recovery check is
    /// added when the trend slope is not positive. Truncated to the configured maximum.
    #[must_use]
    pub fn generate_plateau_suggestions(
        snapshots: &[PerformanceSnapshot],
        trend: &ExerciseTrend,
        config: &PlateauConfig,
    ) -> Vec<PlateauSuggestion> {
        let sorted = sorted_by_date(snapshots);
        let recent = &sorted[sorted.len().saturating_sub(config.suggestion_window)..];

        let mut suggestions = Vec::new();

        if !recent.is_empty() {
            let reps: Vec<f64> = recent.iter().map(|s| f64::from(s.reps)).collect();
            let rpes: Vec<f64> = recent.iter().map(|s| s.rpe).collect();
            let sets: Vec<f64> = recent.iter().map(|s| f64::from(s.sets)).collect();
            let avg_reps = StatisticalAnalyzer::mean(&reps);
            let avg_rpe = StatisticalAnalyzer::mean(&rpes);
            let avg_sets = StatisticalAnalyzer::mean(&sets);

            if avg_reps > HIGH_REPS {
                suggestions.push(PlateauSuggestion::new(
                    SuggestionKind::LowerReps,
                    "Switch to a heavier load in the 5-8 rep range for a few weeks",
                ));
            } else if avg_reps < LOW_REPS {
                suggestions.push(PlateauSuggestion::new(
                    SuggestionKind::HigherReps,
                    "Spend a block in the 8-12 rep range to build work capacity",
                ));
            }

            if avg_sets < LOW_SETS {
                suggestions.push(PlateauSuggestion::new(
                    SuggestionKind::MoreVolume,
                    "Add one or two working sets per session",
                ));
            }

            if avg_rpe < LOW_RPE {
                suggestions.push(PlateauSuggestion::new(
                    SuggestionKind::PushHarder,
                    "Take working sets closer to failure (RPE 8-9)",
                ));
            } else if avg_rpe > HIGH_RPE {
                suggestions.push(PlateauSuggestion::new(
                    SuggestionKind::BackOff,
                    "Back off to RPE 7-8 so fatigue does not mask progress",
                ));
            }
        }

        suggestions.push(PlateauSuggestion::new(
            SuggestionKind::ExerciseVariation,
            "Rotate in a close variation for one mesocycle",
        ));
        suggestions.push(PlateauSuggestion::new(
            SuggestionKind::TechniqueReview,
            "Film a top set and review bar path and bracing",
        ));

        if trend.weekly_change <= 0.0 {
            suggestions.push(PlateauSuggestion::new(
                SuggestionKind::RecoveryCheck,
                "Check sleep, nutrition, and stress; recovery may be limiting progress",
            ));
        }

        suggestions.truncate(config.max_suggestions);
        suggestions
    }

    /// Analyze many exercises in parallel; output is sorted by exercise id
    #[must_use]
    pub fn detect_batch(
        histories: &[(String, Vec<PerformanceSnapshot>)],
        now: DateTime<Utc>,
        config: &PlateauConfig,
    ) -> Vec<PlateauAlert> {
        let mut alerts: Vec<PlateauAlert> = histories
            .par_iter()
            .map(|(exercise_id, snapshots)| Self::detect_plateau(exercise_id, snapshots, now, config))
            .collect();
        alerts.sort_by(|a, b| a.exercise_id.cmp(&b.exercise_id));
        alerts
    }

    /// Average progress score across a cohort of alerts (0 for an empty cohort)
    ///
    /// Progressing exercises score 100; plateaued ones score `50 - min(50, weeks * 10)`.
    #[must_use]
    pub fn progress_score(alerts: &[PlateauAlert]) -> f64 {
        let scores: Vec<f64> = alerts
            .iter()
            .map(|alert| {
                if alert.is_plateaued {
                    let penalty = (alert.weeks_since_progress.max(0) as f64 * PENALTY_PER_WEEK)
                        .min(PLATEAUED_BASE_SCORE);
                    PLATEAUED_BASE_SCORE - penalty
                } else {
                    PROGRESSING_SCORE
                }
            })
            .collect();
        StatisticalAnalyzer::mean(&scores)
    }

    /// Alerts that are plateaued, longest stall first
    #[must_use]
    pub fn plateaued_exercises(alerts: &[PlateauAlert]) -> Vec<&PlateauAlert> {
        let mut stalled: Vec<&PlateauAlert> =
            alerts.iter().filter(|alert| alert.is_plateaued).collect();
        stalled.sort_by(|a, b| {
            b.weeks_since_progress
                .cmp(&a.weeks_since_progress)
                .then_with(|| a.exercise_id.cmp(&b.exercise_id))
        });
        stalled
    }
}

fn sorted_by_date(snapshots: &[PerformanceSnapshot]) -> Vec<&PerformanceSnapshot> {
    let mut sorted: Vec<&PerformanceSnapshot> = snapshots.iter().collect();
    sorted.sort_by_key(|snapshot| snapshot.date);
    sorted
}
