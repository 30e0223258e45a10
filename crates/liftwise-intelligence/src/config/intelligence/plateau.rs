// ABOUTME: Plateau detector configuration for E1RM stagnation analysis
// ABOUTME: Window sizes, minimum improvement margin, and stagnant-week threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use crate::constants::plateau;
use serde::{Deserialize, Serialize};

/// Plateau detector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateauConfig {
    /// Snapshots required before analysis runs
    pub min_snapshots: usize,
    /// Rolling window (snapshots) for the improvement check
    pub window: usize,
    /// Minimum E1RM improvement (percent) across the window
    pub min_improvement_percent: f64,
    /// Weeks without a new peak that mark a plateau
    pub stagnant_weeks: i64,
    /// Snapshots used by suggestion heuristics
    pub suggestion_window: usize,
    /// Maximum suggestions returned
    pub max_suggestions: usize,
}

impl Default for PlateauConfig {
    fn default() -> Self {
        Self {
            min_snapshots: plateau::MIN_SNAPSHOTS,
            window: plateau::WINDOW,
            min_improvement_percent: plateau::MIN_IMPROVEMENT_PERCENT,
            stagnant_weeks: plateau::STAGNANT_WEEKS,
            suggestion_window: plateau::SUGGESTION_WINDOW,
            max_suggestions: plateau::MAX_SUGGESTIONS,
        }
    }
}
