// ABOUTME: Recovery subcommands: fatigue scoring, deload triggers, deload weeks, discomfort patterns
// ABOUTME: Weekly surveys and discomfort logs are validated before analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use liftwise::config::intelligence::{DeloadConfig, DiscomfortConfig};
use liftwise::deload::DeloadEngine;
use liftwise::discomfort::{DiscomfortLogOutcome, DiscomfortPattern, DiscomfortTracker};
use liftwise::fatigue::{FatigueAnalyzer, FatigueScore, FatigueTrend};
use liftwise::models::{
    DeloadType, DiscomfortEntry, MesocycleWeek, PeriodizationPlan, UserProfile,
    WeeklyPerformanceData,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::helpers::io::{print_json, read_json, validate_all};

/// Input document for `deload-check`
#[derive(Deserialize)]
struct DeloadCheckRequest {
    history: Vec<WeeklyPerformanceData>,
    profile: UserProfile,
    plan: PeriodizationPlan,
}

#[derive(Serialize)]
struct FatigueReport {
    weeks: Vec<FatigueScore>,
    trend: FatigueTrend,
    readiness: Option<f64>,
    /// Latest week on the 0-10 scale the `progress` command accepts
    weekly_fatigue_score: Option<f64>,
}

#[derive(Serialize)]
struct DiscomfortReport {
    patterns: Vec<DiscomfortPattern>,
    latest: Option<DiscomfortLogOutcome>,
}

/// Score every week in a survey history and report the trend
pub fn fatigue(path: &Path) -> Result<()> {
    let mut history: Vec<WeeklyPerformanceData> = read_json(path)?;
    validate_all(&history, WeeklyPerformanceData::validate)?;
    history.sort_by_key(|week| week.week_number);

    let weeks: Vec<FatigueScore> = history
        .iter()
        .map(FatigueAnalyzer::calculate_fatigue_score)
        .collect();

    print_json(&FatigueReport {
        readiness: weeks.last().map(FatigueScore::readiness),
        weekly_fatigue_score: weeks.last().map(FatigueScore::weekly_score),
        trend: FatigueAnalyzer::analyze_fatigue_trend(&history),
        weeks,
    })
}

/// Evaluate deload triggers for a history, profile, and plan
pub fn deload_check(path: &Path, config: &DeloadConfig) -> Result<()> {
    let request: DeloadCheckRequest = read_json(path)?;
    validate_all(&request.history, WeeklyPerformanceData::validate)?;
    request
        .profile
        .validate()
        .context("Profile failed validation")?;

    let triggers =
        DeloadEngine::check_deload_triggers(&request.history, &request.profile, &request.plan, config);
    info!(
        should_deload = triggers.should_deload,
        reasons = triggers.reasons.len(),
        "evaluated deload triggers"
    );
    print_json(&triggers)
}

/// Derive a deload week from a base week template
pub fn deload_week(path: &Path, deload_type: DeloadType) -> Result<()> {
    let base: MesocycleWeek = read_json(path)?;
    base.validate().context("Week template failed validation")?;

    let deload = DeloadEngine::generate_deload_week(&base, deload_type);
    info!(
        week = base.week_number,
        base_sets = base.prescribed_sets(),
        deload_sets = deload.prescribed_sets(),
        "derived deload week"
    );
    print_json(&deload)
}

/// Cluster discomfort reports and evaluate the most recent one
pub fn discomfort(path: &Path, now: DateTime<Utc>, config: &DiscomfortConfig) -> Result<()> {
    let entries: Vec<DiscomfortEntry> = read_json(path)?;
    validate_all(&entries, DiscomfortEntry::validate)?;

    let latest = entries
        .iter()
        .max_by_key(|entry| entry.logged_at)
        .map(|entry| DiscomfortTracker::process_discomfort_log(entry, &entries, config));

    print_json(&DiscomfortReport {
        patterns: DiscomfortTracker::detect_discomfort_patterns(&entries, now, config),
        latest,
    })
}
