// ABOUTME: Errors raised while loading or validating engine thresholds
// ABOUTME: Maps onto the CONFIG_* application error codes at the engine boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use crate::errors::{AppError, ErrorCode};
use std::env;
use thiserror::Error;

/// Why a threshold set was rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Paired thresholds are out of order (e.g. moderate weekly fatigue above high)
    #[error("Thresholds out of order: {0}")]
    InvalidRange(&'static str),

    /// A `LIFTWISE_*` variable could not be read
    #[error("Cannot read override: {0}")]
    EnvVar(#[from] env::VarError),

    /// A `LIFTWISE_*` variable is not a number
    #[error("Cannot parse override: {0}")]
    Parse(String),

    /// A single threshold lies outside its allowed bounds
    #[error("Threshold out of bounds: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        match &error {
            ConfigError::EnvVar(_) | ConfigError::Parse(_) => Self::config(error.to_string()),
            ConfigError::InvalidRange(_) | ConfigError::ValueOutOfRange(_) => {
                Self::new(ErrorCode::ConfigInvalid, error.to_string())
            }
        }
    }
}
