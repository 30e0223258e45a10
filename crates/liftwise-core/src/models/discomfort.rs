// ABOUTME: Body-part discomfort log entries captured during workouts
// ABOUTME: DiscomfortEntry, BodyPart, and the ordered DiscomfortSeverity scale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Where discomfort was felt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    /// Neck
    Neck,
    /// Shoulder joint
    Shoulder,
    /// Thoracic region
    UpperBack,
    /// Lumbar region
    LowerBack,
    /// Elbow joint
    Elbow,
    /// Wrist joint
    Wrist,
    /// Hip joint
    Hip,
    /// Knee joint
    Knee,
    /// Ankle joint
    Ankle,
    /// Hamstring muscle group
    Hamstring,
    /// Chest / pectoral area
    Chest,
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Neck => "neck",
            Self::Shoulder => "shoulder",
            Self::UpperBack => "upper back",
            Self::LowerBack => "lower back",
            Self::Elbow => "elbow",
            Self::Wrist => "wrist",
            Self::Hip => "hip",
            Self::Knee => "knee",
            Self::Ankle => "ankle",
            Self::Hamstring => "hamstring",
            Self::Chest => "chest",
        };
        f.write_str(label)
    }
}

/// Severity scale; ordering follows the numeric level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscomfortSeverity {
    /// Brief, minor sensation
    Twinge = 1,
    /// Noticeable, persistent sensation
    Discomfort = 2,
    /// Sharp or limiting pain
    Pain = 3,
}

impl DiscomfortSeverity {
    /// Numeric level used for averaging
    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }

    /// Label for a (rounded) numeric level, clamped into 1-3
    #[must_use]
    pub const fn from_level(level: u8) -> Self {
        match level {
            0 | 1 => Self::Twinge,
            2 => Self::Discomfort,
            _ => Self::Pain,
        }
    }
}

impl fmt::Display for DiscomfortSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Twinge => "twinge",
            Self::Discomfort => "discomfort",
            Self::Pain => "pain",
        };
        f.write_str(label)
    }
}

/// One discomfort report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscomfortEntry {
    /// Unique identifier
    pub id: Uuid,
    /// Where it was felt
    pub body_part: BodyPart,
    /// How bad it was
    pub severity: DiscomfortSeverity,
    /// Exercise being performed, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<String>,
    /// When it was reported
    pub logged_at: DateTime<Utc>,
    /// Free-form note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DiscomfortEntry {
    /// A linked exercise id, when present, must name something
    ///
    /// # Errors
    ///
    /// Returns an error when `exercise_id` is present but blank
    pub fn validate(&self) -> AppResult<()> {
        if self
            .exercise_id
            .as_deref()
            .is_some_and(|id| id.trim().is_empty())
        {
            return Err(AppError::out_of_range(
                "exercise_id",
                "Exercise id must not be blank when provided",
            )
            .with_resource_id(self.id.to_string()));
        }
        Ok(())
    }
}
