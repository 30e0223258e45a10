// ABOUTME: Subcommand implementations for liftwise-cli
// ABOUTME: Training (e1rm, sets, progression, volume), recovery (fatigue, deloads, discomfort), analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

pub mod analysis;
pub mod recovery;
pub mod training;
