// ABOUTME: Deload engine configuration for experience-gated trigger decisions
// ABOUTME: Minimum independent trigger reasons required per experience tier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use crate::models::ExperienceLevel;
use serde::{Deserialize, Serialize};

/// Deload engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeloadConfig {
    /// Independent reasons a novice needs before a deload is recommended
    pub novice_min_reasons: usize,
    /// Independent reasons an intermediate lifter needs
    pub intermediate_min_reasons: usize,
    /// Independent reasons an advanced lifter needs
    pub advanced_min_reasons: usize,
}

impl DeloadConfig {
    /// Reasons required for a tier
    #[must_use]
    pub const fn min_reasons(&self, experience: ExperienceLevel) -> usize {
        match experience {
            ExperienceLevel::Novice => self.novice_min_reasons,
            ExperienceLevel::Intermediate => self.intermediate_min_reasons,
            ExperienceLevel::Advanced => self.advanced_min_reasons,
        }
    }
}

impl Default for DeloadConfig {
    fn default() -> Self {
        Self {
            novice_min_reasons: 2,
            intermediate_min_reasons: 1,
            advanced_min_reasons: 1,
        }
    }
}
