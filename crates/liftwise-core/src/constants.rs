// ABOUTME: Rule thresholds for effort classification, fatigue scoring, and plateau detection
// ABOUTME: Pure data constants organized by domain; each threshold is independently testable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Constants module
//!
//! Thresholds are grouped per component rather than unified. The same number
//! appearing in two modules is a coincidence, not a shared contract.

/// Effort scale bounds and conversions
pub mod effort {
    /// Highest RPE value (set taken to failure)
    pub const MAX_RPE: f64 = 10.0;
    /// Lowest RPE value accepted at the boundary
    pub const MIN_RPE: f64 = 1.0;
    /// Highest reps-in-reserve a prescription may target
    pub const MAX_TARGET_RIR: u8 = 4;
    /// Lowest reps-in-reserve a prescription may target
    pub const MIN_TARGET_RIR: u8 = 0;
    /// Highest reps-in-reserve a calibrated adjustment may tell the lifter
    pub const MAX_ADJUSTED_RIR: f64 = 10.0;
}

/// Estimated one-rep-max formula coefficients
pub mod e1rm {
    /// Epley denominator: `w * (1 + reps / 30)`
    pub const EPLEY_DIVISOR: f64 = 30.0;
    /// Brzycki numerator constant: `w / (1.0278 - 0.0278 * reps)`
    pub const BRZYCKI_BASE: f64 = 1.0278;
    /// Brzycki per-rep coefficient
    pub const BRZYCKI_SLOPE: f64 = 0.0278;
    /// Brzycki is only trusted up to this many effective reps
    pub const BRZYCKI_MAX_EFFECTIVE_REPS: f64 = 10.0;
}

/// Set quality classification bands (RPE)
pub mod set_quality {
    /// Sets at or below this RPE are junk volume
    pub const JUNK_MAX_RPE: f64 = 5.0;
    /// Lower bound of the stimulative band
    pub const STIMULATIVE_MIN_RPE: f64 = 7.5;
    /// Upper bound of the stimulative band
    pub const STIMULATIVE_MAX_RPE: f64 = 9.5;
    /// RPE that marks failure
    pub const FAILURE_RPE: f64 = 10.0;
}

/// Weekly fatigue score weights and bands (0-100 scale)
pub mod fatigue {
    /// Points per perceived-fatigue step above 1
    pub const FATIGUE_WEIGHT: f64 = 6.25;
    /// Points per sleep-quality step below 5
    pub const SLEEP_WEIGHT: f64 = 6.25;
    /// Points per motivation step below 5
    pub const MOTIVATION_WEIGHT: f64 = 5.0;
    /// Points per missed rep
    pub const MISSED_REP_WEIGHT: f64 = 3.0;
    /// Cap on missed-rep contribution
    pub const MISSED_REP_CAP: f64 = 15.0;
    /// Flat penalty when joint pain is reported
    pub const JOINT_PAIN_PENALTY: f64 = 10.0;
    /// Flat penalty when strength decline is reported
    pub const STRENGTH_DECLINE_PENALTY: f64 = 5.0;
    /// Maximum score
    pub const MAX_SCORE: f64 = 100.0;
    /// Upper bound (exclusive) of the low band
    pub const LOW_BAND_MAX: f64 = 25.0;
    /// Upper bound (exclusive) of the moderate band
    pub const MODERATE_BAND_MAX: f64 = 50.0;
    /// Upper bound (exclusive) of the high band
    pub const HIGH_BAND_MAX: f64 = 75.0;
    /// Score difference that marks a trend change
    pub const TREND_DELTA: f64 = 5.0;
    /// Number of recent weeks considered by trend analysis
    pub const TREND_WEEKS: usize = 3;
}

/// Deload trigger thresholds (1-5 survey scales)
pub mod deload {
    /// Minimum weekly records before any trigger is evaluated
    pub const MIN_WEEKS: usize = 2;
    /// Current-week fatigue that arms the fatigue trigger
    pub const FATIGUE_CURRENT_MIN: u8 = 4;
    /// Previous-week fatigue that arms the fatigue trigger
    pub const FATIGUE_PREVIOUS_MIN: u8 = 3;
    /// Missed reps above this count trigger an intensity deload
    pub const MISSED_REPS_MAX: u32 = 5;
    /// Sleep quality at or below this in both weeks triggers a full deload
    pub const POOR_SLEEP_MAX: u8 = 2;
    /// Current-week motivation trigger
    pub const MOTIVATION_CURRENT_MAX: u8 = 2;
    /// Previous-week motivation trigger
    pub const MOTIVATION_PREVIOUS_MAX: u8 = 3;
    /// Weeks past the planned frequency before a deload is overdue
    pub const OVERDUE_GRACE_WEEKS: u32 = 2;
    /// Set multiplier floor
    pub const MIN_SETS: u32 = 1;
    /// RIR added to every exercise during a deload
    pub const RIR_INCREASE: u8 = 2;
    /// RPE band used during deload weeks
    pub const DELOAD_RPE_MIN: f64 = 5.0;
    /// RPE band used during deload weeks
    pub const DELOAD_RPE_MAX: f64 = 6.0;
}

/// Deload frequency (weeks between deloads) by lifter profile
pub mod deload_frequency {
    /// Baseline weeks between deloads
    pub const BASE_WEEKS: u32 = 5;
    /// Under 25 years old
    pub const YOUNG_WEEKS: u32 = 6;
    /// 45-54 years old
    pub const MASTERS_WEEKS: u32 = 4;
    /// 55 and older
    pub const SENIOR_WEEKS: u32 = 3;
    /// Training age under one year
    pub const BEGINNER_WEEKS: u32 = 8;
    /// Training age (years) at which deloads come a week sooner
    pub const VETERAN_TRAINING_YEARS: f64 = 5.0;
    /// Lowest allowed frequency
    pub const MIN_WEEKS: u32 = 3;
    /// Highest allowed frequency
    pub const MAX_WEEKS: u32 = 8;
    /// Sleep rating at or below this shortens the cycle
    pub const POOR_SLEEP_MAX: u8 = 2;
    /// Stress rating at or above this shortens the cycle
    pub const HIGH_STRESS_MIN: u8 = 4;
}

/// Plateau detection thresholds
pub mod plateau {
    /// Snapshots required before plateau analysis runs
    pub const MIN_SNAPSHOTS: usize = 4;
    /// Rolling window (snapshots) for the improvement check
    pub const WINDOW: usize = 4;
    /// Minimum E1RM improvement (percent) across the window
    pub const MIN_IMPROVEMENT_PERCENT: f64 = 2.0;
    /// Weeks without a new peak that mark a plateau
    pub const STAGNANT_WEEKS: i64 = 3;
    /// Snapshots used for suggestion heuristics
    pub const SUGGESTION_WINDOW: usize = 6;
    /// Maximum number of suggestions returned
    pub const MAX_SUGGESTIONS: usize = 5;
    /// Average reps above this suggest a heavier rep range
    pub const HIGH_REPS: f64 = 10.0;
    /// Average reps below this suggest a lighter rep range
    pub const LOW_REPS: f64 = 6.0;
    /// Average sets below this suggest more volume
    pub const LOW_SETS: f64 = 3.0;
    /// Average RPE below this suggests pushing closer to failure
    pub const LOW_RPE: f64 = 7.0;
    /// Average RPE above this suggests backing off
    pub const HIGH_RPE: f64 = 9.0;
    /// Progress score for an exercise that is still progressing
    pub const PROGRESSING_SCORE: f64 = 100.0;
    /// Progress score base for a plateaued exercise
    pub const PLATEAUED_BASE_SCORE: f64 = 50.0;
    /// Points removed per stagnant week
    pub const PENALTY_PER_WEEK: f64 = 10.0;
}

/// Effort-calibration confidence weights
pub mod calibration {
    /// Weight of a low-confidence calibration in the overall bias
    pub const LOW_WEIGHT: f64 = 1.0;
    /// Weight of a medium-confidence calibration
    pub const MEDIUM_WEIGHT: f64 = 2.0;
    /// Weight of a high-confidence calibration
    pub const HIGH_WEIGHT: f64 = 3.0;
    /// Weighted bias at or above this flags sandbagging
    pub const SANDBAGGING_BIAS: f64 = 2.0;
    /// Weighted bias at or below this flags overreaching
    pub const OVERREACHING_BIAS: f64 = -2.0;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Default service name
    pub const LIFTWISE: &str = "liftwise";
}
