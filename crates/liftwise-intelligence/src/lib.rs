// ABOUTME: Training progression and fatigue management engine for Liftwise
// ABOUTME: Deterministic calculators turning logged sets into prescriptions and advisories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

#![deny(unsafe_code)]

//! # Liftwise Intelligence
//!
//! Pure, synchronous calculators over in-memory inputs. Nothing here performs
//! I/O, sleeps, or reads the clock: every time-dependent operation takes `now`
//! explicitly, so identical inputs always produce identical outputs.
//!
//! The only long-lived state is [`rpe_calibration::RpeCalibrationEngine`],
//! which is owned by its caller. Hosts sharing one instance across requests
//! must serialize calls to `add_set_log` themselves.

// Re-export foundation modules so `crate::models` / `crate::errors` paths work
pub use liftwise_core::{constants, errors, models};

/// Pluggable estimation algorithms (E1RM)
pub mod algorithms;
/// Tunable thresholds with environment overrides
pub mod config;
/// Deload trigger evaluation, deload week generation, deload frequency
pub mod deload;
/// Body-part discomfort clustering and injury prompts
pub mod discomfort;
/// Weekly fatigue scoring and trend analysis
pub mod fatigue;
/// Periodization phase resolution and per-phase prescription tables
pub mod periodization;
/// E1RM trend analysis and plateau detection
pub mod plateau;
/// Next-session prescription calculator
pub mod progression;
/// Per-user effort-reporting bias calibration
pub mod rpe_calibration;
/// Per-set stimulus classification
pub mod set_quality;
/// Linear regression helpers
pub mod statistical_analysis;
/// Weekly volume landmarks (MEV / MAV / MRV)
pub mod volume;

pub use algorithms::E1rmAlgorithm;
pub use config::IntelligenceConfig;
pub use deload::{DeloadEngine, DeloadTriggers};
pub use discomfort::{DiscomfortLogOutcome, DiscomfortPattern, DiscomfortTracker};
pub use fatigue::{FatigueAnalyzer, FatigueLevel, FatigueScore, FatigueTrend};
pub use periodization::Periodization;
pub use plateau::{ExerciseTrend, PlateauAlert, PlateauDetector};
pub use progression::{
    LastPerformance, ProgressionCalculator, ProgressionInput, ProgressionTargets, ProgressionType,
};
pub use rpe_calibration::{
    BiasAnalysis, CalibrationConfidence, CalibrationResult, CalibrationSetLog,
    RpeCalibrationEngine,
};
pub use set_quality::{SetQualityAssessment, SetQualityClassifier, SetQualityInput};
pub use volume::{VolumeLandmarks, VolumeStatus};
