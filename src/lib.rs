// ABOUTME: Main library entry point for the Liftwise training progression engine
// ABOUTME: Re-exports the core models and intelligence calculators plus logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

#![deny(unsafe_code)]

//! # Liftwise
//!
//! A deterministic rules engine that turns logged strength-training sets into
//! next-session prescriptions, fatigue assessments, deload decisions, plateau
//! alerts, effort-reporting calibration, and injury-risk flags.
//!
//! ## Architecture
//!
//! - **`liftwise-core`**: error types, rule thresholds, and data models
//! - **`liftwise-intelligence`**: pure calculators over in-memory inputs
//! - **this crate**: the facade re-exporting both, logging setup, and the
//!   `liftwise-cli` binary that runs calculators over JSON files
//!
//! ## Example Usage
//!
//! ```rust
//! use liftwise::fatigue::FatigueAnalyzer;
//! use liftwise::models::WeeklyPerformanceData;
//!
//! let week = WeeklyPerformanceData {
//!     week_number: 1,
//!     perceived_fatigue: 4,
//!     sleep_quality: 2,
//!     motivation: 3,
//!     missed_reps: 2,
//!     joint_pain: false,
//!     strength_decline: false,
//! };
//! let score = FatigueAnalyzer::calculate_fatigue_score(&week);
//! assert!(score.score <= 100.0);
//! ```

pub use liftwise_core::{constants, errors, models};
pub use liftwise_intelligence::{
    algorithms, config, deload, discomfort, fatigue, periodization, plateau, progression,
    rpe_calibration, set_quality, statistical_analysis, volume,
};

/// Structured logging configuration
pub mod logging;
