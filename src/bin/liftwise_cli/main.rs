// ABOUTME: Liftwise CLI - runs the training engine calculators over JSON records
// ABOUTME: Handles e1rm estimates, set classification, progression, fatigue, deloads, plateaus, calibration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors
//!
//! Usage:
//! ```bash
//! # Estimate a one-rep max
//! liftwise-cli e1rm --weight 100 --reps 8 --rpe 8
//!
//! # Classify a set against its targets
//! liftwise-cli classify-set --rpe 8.5 --reps 9 --min-reps 8 --max-reps 12 --target-rir 2
//!
//! # Prescribe the next session from a ProgressionInput document
//! liftwise-cli progress input.json
//!
//! # Score weekly surveys, check deload triggers, build a deload week
//! liftwise-cli fatigue weeks.json
//! liftwise-cli deload-check deload.json
//! liftwise-cli deload-week week.json --deload-type intensity
//!
//! # Plateaus, calibration, discomfort, and weekly volume
//! liftwise-cli plateau snapshots.json --now 2025-03-01T00:00:00Z
//! liftwise-cli calibrate amraps.json --prescribed-rir 2
//! liftwise-cli discomfort discomfort.json
//! liftwise-cli volume --sets sets.json --exercises catalog.json
//! ```
//!
//! Every file argument accepts `-` for stdin. Results are printed as JSON on
//! stdout; logs go to stderr. A failed command exits non-zero and writes the
//! error chain to stderr, followed by an `ErrorResponse` JSON line when the
//! failure carries an error code.

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use liftwise::algorithms::E1rmAlgorithm;
use liftwise::config::IntelligenceConfig;
use liftwise::logging::LoggingConfig;
use liftwise::models::{DeloadType, RepRange};
use liftwise::set_quality::SetQualityInput;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "liftwise-cli",
    about = "Liftwise training engine CLI",
    long_about = "Runs the Liftwise progression, fatigue, deload, plateau, and calibration calculators over JSON records."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Reference time for window-based analyses (RFC 3339, defaults to now)
    #[arg(long, global = true)]
    now: Option<DateTime<Utc>>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Estimate a one-rep max from one set
    E1rm {
        /// Load lifted (kg)
        #[arg(long)]
        weight: f64,

        /// Reps completed
        #[arg(long)]
        reps: u32,

        /// Reported RPE (1-10)
        #[arg(long, default_value = "10")]
        rpe: f64,

        /// Estimation formula (epley, brzycki)
        #[arg(long, default_value = "epley")]
        algorithm: E1rmAlgorithm,
    },

    /// Classify a set as junk, effective, stimulative, or excessive
    ClassifySet {
        /// Reported RPE (1-10)
        #[arg(long)]
        rpe: f64,

        /// Reps completed
        #[arg(long)]
        reps: u32,

        /// Bottom of the target rep range
        #[arg(long)]
        min_reps: u32,

        /// Top of the target rep range
        #[arg(long)]
        max_reps: u32,

        /// Target reps in reserve
        #[arg(long, default_value = "2")]
        target_rir: u8,

        /// The set was the final working set of the exercise
        #[arg(long)]
        last_set: bool,
    },

    /// Prescribe the next session from a progression input document
    Progress {
        /// `ProgressionInput` JSON file
        input: PathBuf,
    },

    /// Score weekly surveys and report the fatigue trend
    Fatigue {
        /// JSON array of weekly surveys
        history: PathBuf,
    },

    /// Evaluate deload triggers
    DeloadCheck {
        /// JSON object with `history`, `profile`, and `plan`
        input: PathBuf,
    },

    /// Derive a deload week from a base week template
    DeloadWeek {
        /// Base `MesocycleWeek` JSON file
        week: PathBuf,

        /// Kind of deload to apply
        #[arg(long, value_enum, default_value_t = DeloadKind::Volume)]
        deload_type: DeloadKind,
    },

    /// Detect plateaus across exercises
    Plateau {
        /// JSON array of performance snapshots
        snapshots: PathBuf,
    },

    /// Replay AMRAP logs and report effort-reporting bias
    Calibrate {
        /// JSON array of calibration set logs
        logs: PathBuf,

        /// Show the calibrated RIR for this prescription, per exercise
        #[arg(long)]
        prescribed_rir: Option<u8>,
    },

    /// Cluster discomfort reports into patterns
    Discomfort {
        /// JSON array of discomfort entries
        entries: PathBuf,
    },

    /// Count weekly hard sets per muscle group
    Volume {
        /// JSON array of logged sets
        #[arg(long)]
        sets: PathBuf,

        /// JSON array of exercise catalog records
        #[arg(long)]
        exercises: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DeloadKind {
    Volume,
    Intensity,
    Full,
}

impl From<DeloadKind> for DeloadType {
    fn from(kind: DeloadKind) -> Self {
        match kind {
            DeloadKind::Volume => Self::Volume,
            DeloadKind::Intensity => Self::Intensity,
            DeloadKind::Full => Self::Full,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            helpers::io::report_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = IntelligenceConfig::load().context("Invalid LIFTWISE_* configuration")?;
    let now = cli.now.unwrap_or_else(Utc::now);
    debug!(%now, "liftwise-cli starting");

    match cli.command {
        Command::E1rm {
            weight,
            reps,
            rpe,
            algorithm,
        } => commands::training::e1rm(weight, reps, rpe, algorithm),
        Command::ClassifySet {
            rpe,
            reps,
            min_reps,
            max_reps,
            target_rir,
            last_set,
        } => commands::training::classify_set(&SetQualityInput {
            rpe,
            target_rir,
            reps,
            target_rep_range: RepRange::new(min_reps, max_reps),
            is_last_set: last_set,
        }),
        Command::Progress { input } => commands::training::progress(&input, &config.progression),
        Command::Fatigue { history } => commands::recovery::fatigue(&history),
        Command::DeloadCheck { input } => commands::recovery::deload_check(&input, &config.deload),
        Command::DeloadWeek { week, deload_type } => {
            commands::recovery::deload_week(&week, deload_type.into())
        }
        Command::Plateau { snapshots } => {
            commands::analysis::plateau(&snapshots, now, &config.plateau)
        }
        Command::Calibrate {
            logs,
            prescribed_rir,
        } => commands::analysis::calibrate(&logs, prescribed_rir, now, &config.calibration),
        Command::Discomfort { entries } => {
            commands::recovery::discomfort(&entries, now, &config.discomfort)
        }
        Command::Volume { sets, exercises } => commands::training::volume(&sets, &exercises),
    }
}
