// ABOUTME: Effort calibration configuration for AMRAP-based RPE/RIR bias learning
// ABOUTME: History capacity, matching window, weight tolerance, staleness, confidence cut-offs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Calibration Configuration
//!
//! Confidence cut-offs are specific to calibration: 0-2 matched sets is low,
//! 3-5 medium, 6 or more high.

use serde::{Deserialize, Serialize};

/// Effort calibration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationConfig {
    /// Maximum logged sets retained per engine instance
    pub max_history: usize,
    /// Days before an AMRAP within which prior sets are matched
    pub match_window_days: i64,
    /// Relative weight tolerance for matching (0.10 = within 10%)
    pub weight_tolerance: f64,
    /// Days after which a calibration is considered stale
    pub stale_after_days: i64,
    /// Matched sets needed for medium confidence
    pub medium_confidence_samples: usize,
    /// Matched sets needed for high confidence
    pub high_confidence_samples: usize,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            max_history: 500,
            match_window_days: 28,
            weight_tolerance: 0.10,
            stale_after_days: 14,
            medium_confidence_samples: 3,
            high_confidence_samples: 6,
        }
    }
}
