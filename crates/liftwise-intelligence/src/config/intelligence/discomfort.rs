// ABOUTME: Discomfort tracker configuration for injury-risk pattern detection
// ABOUTME: Trailing window length and occurrence threshold for injury prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use serde::{Deserialize, Serialize};

/// Discomfort tracker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscomfortConfig {
    /// Trailing window (days) used to group reports
    pub window_days: i64,
    /// Reports of one body part needed before a pattern is reported
    pub min_pattern_occurrences: usize,
    /// Reports of one body part that suggest an injury
    pub injury_occurrences: usize,
}

impl Default for DiscomfortConfig {
    fn default() -> Self {
        Self {
            window_days: 14,
            min_pattern_occurrences: 2,
            injury_occurrences: 3,
        }
    }
}
