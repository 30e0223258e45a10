// ABOUTME: Core data models for the Liftwise training engine
// ABOUTME: Re-exports Exercise, SetLog, PerformanceSnapshot, weekly surveys, and mesocycle templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! # Data Models
//!
//! Shapes exchanged between the engine and its collaborators (exercise catalog,
//! session storage, weekly surveys, mesocycle scheduler, workout UI).
//!
//! ## Design Principles
//!
//! - **Reference by id**: advisory records point at exercises and users by id only
//! - **Serializable**: every model round-trips through JSON for persistence and the CLI
//! - **Validated at the boundary**: inbound records expose `validate()` so malformed
//!   data is rejected before it reaches a calculator

// Domain modules
mod discomfort;
mod exercise;
mod mesocycle;
mod performance;
mod profile;
mod set_log;
mod weekly;

// Exercise catalog
pub use exercise::{Equipment, Exercise, Mechanic, MovementPattern, MuscleGroup, RepRange};

// Logged sets
pub use set_log::{
    BodyweightModification, DifficultyFeedback, FormFeedback, SetFeedback, SetLog, SetQuality,
};

// Derived per-session summaries
pub use performance::PerformanceSnapshot;

// Lifter profile
pub use profile::{ExperienceLevel, UserProfile};

// Weekly recovery surveys
pub use weekly::WeeklyPerformanceData;

// Mesocycle templates
pub use mesocycle::{
    DeloadType, ExercisePrescription, MesocycleWeek, PeriodizationModel, PeriodizationPlan,
    RpeRange, SessionTemplate, TrainingPhase,
};

// Discomfort log
pub use discomfort::{BodyPart, DiscomfortEntry, DiscomfortSeverity};
