// ABOUTME: Core types and constants for the Liftwise strength-training engine
// ABOUTME: Foundation crate with error handling, domain models, and rule thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

#![deny(unsafe_code)]

//! # Liftwise Core
//!
//! Foundation crate providing shared types and constants for the Liftwise
//! training progression and fatigue management engine. This crate is designed
//! to change infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Rule thresholds (RPE bands, fatigue bands, plateau margins)
//! - **models**: Exercise catalog records, set logs, snapshots, weekly surveys, mesocycle weeks

/// Unified error handling system with standard error codes
pub mod errors;

/// Rule thresholds and reference values organized by domain
pub mod constants;

/// Core data models (Exercise, `SetLog`, `PerformanceSnapshot`, `MesocycleWeek`, etc.)
pub mod models;
