// ABOUTME: Algorithm abstraction layer enabling pluggable calculation methods
// ABOUTME: Provides enum-based dispatch for one-rep-max estimation formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Algorithm Selection Module
//!
//! Estimation formulas are enums, not strings or booleans. Enum dispatch keeps
//! the built-in formulas fast and exhaustively matched.
//!
//! # Example
//!
//! ```rust
//! use liftwise_intelligence::algorithms::E1rmAlgorithm;
//!
//! let e1rm = E1rmAlgorithm::Epley.estimate(100.0, 10, 10.0);
//! assert!((e1rm - 133.33).abs() < 0.01);
//! ```

pub mod e1rm;

// Re-export algorithm types
pub use e1rm::{
    best_set_snapshot, estimate_one_rep_max, floor_to_increment, predict_max_reps,
    rir_to_rpe, round_to_increment, rpe_to_rir, weight_for_reps, E1rmAlgorithm,
};
