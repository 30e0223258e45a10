// ABOUTME: Clusters repeated body-part discomfort reports into injury-risk patterns
// ABOUTME: Trailing-window grouping, severity averaging, pain warnings, and injury prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use std::collections::{BTreeMap, BTreeSet};
use std::iter;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::intelligence::DiscomfortConfig;
use crate::models::{BodyPart, DiscomfortEntry, DiscomfortSeverity};

/// Likely injury to mention when a body part keeps flaring up
const SUGGESTED_INJURIES: [(BodyPart, &str); 11] = [
    (BodyPart::Neck, "Cervical strain"),
    (BodyPart::Shoulder, "Rotator cuff irritation"),
    (BodyPart::UpperBack, "Thoracic muscle strain"),
    (BodyPart::LowerBack, "Lower back strain"),
    (BodyPart::Elbow, "Tendinopathy (tennis or golfer's elbow)"),
    (BodyPart::Wrist, "Wrist sprain"),
    (BodyPart::Hip, "Hip flexor strain"),
    (BodyPart::Knee, "Patellar tendinopathy"),
    (BodyPart::Ankle, "Ankle sprain"),
    (BodyPart::Hamstring, "Hamstring strain"),
    (BodyPart::Chest, "Pectoral strain"),
];

/// Repeated discomfort in one body part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscomfortPattern {
    /// Affected body part
    pub body_part: BodyPart,
    /// Reports inside the window
    pub occurrences: usize,
    /// Mean severity rounded to the nearest label
    pub average_severity: DiscomfortSeverity,
    /// Days between the first and last report
    pub day_span: i64,
    /// Distinct exercises involved, sorted
    pub exercises: Vec<String>,
    /// Three or more reports, or any report of pain
    pub suggests_injury: bool,
    /// Earliest report in the window
    pub first_reported: DateTime<Utc>,
    /// Latest report in the window
    pub last_reported: DateTime<Utc>,
}

/// Immediate warning for a painful report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PainWarning {
    /// Affected body part
    pub body_part: BodyPart,
    /// Message shown during the workout
    pub message: String,
}

/// Prompt to log a possible injury
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryPrompt {
    /// Affected body part
    pub body_part: BodyPart,
    /// Reports in the window, including the new one
    pub occurrences: usize,
    /// Likely injury for the body part
    pub suggested_injury: String,
    /// Message shown to the lifter
    pub message: String,
}

/// Advisories produced by a new report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscomfortLogOutcome {
    /// Present only when the new report is pain
    pub pain_warning: Option<PainWarning>,
    /// Present when the body part's pattern suggests an injury
    pub injury_prompt: Option<InjuryPrompt>,
}

/// Discomfort pattern detection
pub struct DiscomfortTracker;

impl DiscomfortTracker {
    /// Group reports from the trailing window ending at `now` by body part
    ///
    /// Body parts with a single report are not patterns. Output is ordered by
    /// average severity (pain first), then occurrences, then body part.
    #[must_use]
    pub fn detect_discomfort_patterns(
        entries: &[DiscomfortEntry],
        now: DateTime<Utc>,
        config: &DiscomfortConfig,
    ) -> Vec<DiscomfortPattern> {
        let window_start = now - Duration::days(config.window_days);

        let mut groups: BTreeMap<BodyPart, Vec<&DiscomfortEntry>> = BTreeMap::new();
        for entry in entries
            .iter()
            .filter(|entry| entry.logged_at >= window_start && entry.logged_at <= now)
        {
            groups.entry(entry.body_part).or_default().push(entry);
        }

        let mut patterns: Vec<DiscomfortPattern> = groups
            .into_iter()
            .filter(|(_, group)| group.len() >= config.min_pattern_occurrences)
            .filter_map(|(body_part, group)| Self::summarize(body_part, &group, config))
            .collect();

        patterns.sort_by(|a, b| {
            b.average_severity
                .cmp(&a.average_severity)
                .then_with(|| b.occurrences.cmp(&a.occurrences))
                .then_with(|| a.body_part.cmp(&b.body_part))
        });

        debug!(patterns = patterns.len(), "detected discomfort patterns");
        patterns
    }

    fn summarize(
        body_part: BodyPart,
        group: &[&DiscomfortEntry],
        config: &DiscomfortConfig,
    ) -> Option<DiscomfortPattern> {
        let first_reported = group.iter().map(|entry| entry.logged_at).min()?;
        let last_reported = group.iter().map(|entry| entry.logged_at).max()?;

        let total: f64 = group
            .iter()
            .map(|entry| f64::from(entry.severity.level()))
            .sum();
        let average_severity =
            DiscomfortSeverity::from_level((total / group.len() as f64).round() as u8);

        let exercises: BTreeSet<String> = group
            .iter()
            .filter_map(|entry| entry.exercise_id.clone())
            .collect();

        let suggests_injury = group.len() >= config.injury_occurrences
            || group
                .iter()
                .any(|entry| entry.severity == DiscomfortSeverity::Pain);

        Some(DiscomfortPattern {
            body_part,
            occurrences: group.len(),
            average_severity,
            day_span: (last_reported - first_reported).num_days(),
            exercises: exercises.into_iter().collect(),
            suggests_injury,
            first_reported,
            last_reported,
        })
    }

    /// Evaluate a new report against the lifter's history
    ///
    /// The window ends at the new report's timestamp.
    #[must_use]
    pub fn process_discomfort_log(
        new_entry: &DiscomfortEntry,
        history: &[DiscomfortEntry],
        config: &DiscomfortConfig,
    ) -> DiscomfortLogOutcome {
        let pain_warning = (new_entry.severity == DiscomfortSeverity::Pain).then(|| PainWarning {
            body_part: new_entry.body_part,
            message: format!(
                "Stop loading the {} for today. Pain is a signal to reassess, not push through.",
                new_entry.body_part
            ),
        });

        let combined: Vec<DiscomfortEntry> = history
            .iter()
            .filter(|entry| entry.body_part == new_entry.body_part && entry.id != new_entry.id)
            .cloned()
            .chain(iter::once(new_entry.clone()))
            .collect();

        let injury_prompt =
            Self::detect_discomfort_patterns(&combined, new_entry.logged_at, config)
                .into_iter()
                .find(|pattern| pattern.body_part == new_entry.body_part && pattern.suggests_injury)
                .map(|pattern| {
                    let suggested_injury = Self::suggested_injury(pattern.body_part).to_owned();
                    InjuryPrompt {
                        body_part: pattern.body_part,
                        occurrences: pattern.occurrences,
                        message: format!(
                            "You've reported {} issues {} times in the last {} days. \
                             Consider logging a possible {}.",
                            pattern.body_part,
                            pattern.occurrences,
                            config.window_days,
                            suggested_injury.to_lowercase()
                        ),
                        suggested_injury,
                    }
                });

        debug!(
            body_part = %new_entry.body_part,
            pain_warning = pain_warning.is_some(),
            injury_prompt = injury_prompt.is_some(),
            "processed discomfort report"
        );

        DiscomfortLogOutcome {
            pain_warning,
            injury_prompt,
        }
    }

    /// Likely injury for a body part
    #[must_use]
    pub fn suggested_injury(body_part: BodyPart) -> &'static str {
        SUGGESTED_INJURIES
            .iter()
            .find(|(part, _)| *part == body_part)
            .map_or("Overuse strain", |(_, injury)| injury)
    }
}
