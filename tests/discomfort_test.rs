// ABOUTME: Tests for discomfort pattern clustering and per-report warnings
// ABOUTME: Covers the trailing window, severity averaging, ordering, pain warnings, and injury prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{days_after, discomfort, init_test_logging};
use liftwise::config::intelligence::DiscomfortConfig;
use liftwise::discomfort::{DiscomfortLogOutcome, DiscomfortPattern, DiscomfortTracker};
use liftwise::models::{BodyPart, DiscomfortEntry, DiscomfortSeverity};

fn patterns(entries: &[DiscomfortEntry]) -> Vec<DiscomfortPattern> {
    init_test_logging();
    DiscomfortTracker::detect_discomfort_patterns(
        entries,
        days_after(20),
        &DiscomfortConfig::default(),
    )
}

#[test]
fn test_single_reports_do_not_form_patterns() {
    let entries = vec![
        discomfort(BodyPart::Knee, DiscomfortSeverity::Pain, 18, None),
        discomfort(BodyPart::Elbow, DiscomfortSeverity::Twinge, 19, None),
    ];
    assert!(patterns(&entries).is_empty());
    assert!(patterns(&[]).is_empty());
}

#[test]
fn test_only_the_trailing_window_counts() {
    let entries = vec![
        discomfort(BodyPart::Knee, DiscomfortSeverity::Twinge, 5, None),
        discomfort(BodyPart::Knee, DiscomfortSeverity::Twinge, 7, Some("back_squat")),
        discomfort(BodyPart::Knee, DiscomfortSeverity::Twinge, 10, Some("lunge")),
        // After the reference time
        discomfort(BodyPart::Knee, DiscomfortSeverity::Twinge, 25, None),
    ];

    let found = patterns(&entries);
    assert_eq!(found.len(), 1);

    let knee = &found[0];
    assert_eq!(knee.body_part, BodyPart::Knee);
    assert_eq!(knee.occurrences, 2);
    assert_eq!(knee.day_span, 3);
    assert_eq!(knee.first_reported, days_after(7));
    assert_eq!(knee.last_reported, days_after(10));
    assert!(!knee.suggests_injury);
}

#[test]
fn test_average_severity_rounds_to_a_level() {
    let mixed = vec![
        discomfort(BodyPart::Hip, DiscomfortSeverity::Twinge, 15, None),
        discomfort(BodyPart::Hip, DiscomfortSeverity::Discomfort, 16, None),
    ];
    assert_eq!(
        patterns(&mixed)[0].average_severity,
        DiscomfortSeverity::Discomfort
    );

    let mild = vec![
        discomfort(BodyPart::Hip, DiscomfortSeverity::Twinge, 15, None),
        discomfort(BodyPart::Hip, DiscomfortSeverity::Twinge, 16, None),
    ];
    assert_eq!(patterns(&mild)[0].average_severity, DiscomfortSeverity::Twinge);
}

#[test]
fn test_repeated_or_painful_reports_suggest_injury() {
    let repeated: Vec<DiscomfortEntry> = (15..18)
        .map(|day| discomfort(BodyPart::Wrist, DiscomfortSeverity::Twinge, day, None))
        .collect();
    assert!(patterns(&repeated)[0].suggests_injury);

    let painful = vec![
        discomfort(BodyPart::Wrist, DiscomfortSeverity::Twinge, 15, None),
        discomfort(BodyPart::Wrist, DiscomfortSeverity::Pain, 16, None),
    ];
    assert!(patterns(&painful)[0].suggests_injury);
}

#[test]
fn test_exercises_are_deduplicated_and_sorted() {
    let entries = vec![
        discomfort(BodyPart::Shoulder, DiscomfortSeverity::Twinge, 15, Some("overhead_press")),
        discomfort(BodyPart::Shoulder, DiscomfortSeverity::Twinge, 16, Some("bench_press")),
        discomfort(BodyPart::Shoulder, DiscomfortSeverity::Twinge, 17, Some("overhead_press")),
        discomfort(BodyPart::Shoulder, DiscomfortSeverity::Twinge, 18, None),
    ];

    let found = patterns(&entries);
    assert_eq!(found[0].exercises, vec!["bench_press", "overhead_press"]);
    assert_eq!(found[0].occurrences, 4);
}

#[test]
fn test_patterns_sorted_by_severity_then_occurrences_then_body_part() {
    let mut entries = Vec::new();
    for day in [15, 16] {
        entries.push(discomfort(BodyPart::Knee, DiscomfortSeverity::Pain, day, None));
        entries.push(discomfort(BodyPart::Elbow, DiscomfortSeverity::Discomfort, day, None));
        entries.push(discomfort(BodyPart::Neck, DiscomfortSeverity::Discomfort, day, None));
    }
    for day in [17, 18, 19] {
        entries.push(discomfort(BodyPart::Chest, DiscomfortSeverity::Discomfort, day, None));
    }

    let order: Vec<BodyPart> = patterns(&entries).iter().map(|p| p.body_part).collect();
    assert_eq!(
        order,
        vec![BodyPart::Knee, BodyPart::Chest, BodyPart::Neck, BodyPart::Elbow]
    );
}

#[test]
fn test_window_length_is_configurable() {
    let entries = vec![
        discomfort(BodyPart::Ankle, DiscomfortSeverity::Twinge, 1, None),
        discomfort(BodyPart::Ankle, DiscomfortSeverity::Twinge, 19, None),
    ];
    let config = DiscomfortConfig {
        window_days: 30,
        ..DiscomfortConfig::default()
    };

    assert!(patterns(&entries).is_empty());
    assert_eq!(
        DiscomfortTracker::detect_discomfort_patterns(&entries, days_after(20), &config).len(),
        1
    );
}

// ============================================================================
// Per-report processing
// ============================================================================

#[test]
fn test_pain_report_returns_a_warning() {
    let entry = discomfort(BodyPart::Knee, DiscomfortSeverity::Pain, 10, Some("back_squat"));
    let outcome =
        DiscomfortTracker::process_discomfort_log(&entry, &[], &DiscomfortConfig::default());

    let warning = outcome.pain_warning.unwrap();
    assert_eq!(warning.body_part, BodyPart::Knee);
    assert!(warning.message.contains("Stop loading the knee"));
    // A single report is not a pattern yet
    assert!(outcome.injury_prompt.is_none());
}

#[test]
fn test_twinge_without_history_is_quiet() {
    let entry = discomfort(BodyPart::Elbow, DiscomfortSeverity::Twinge, 10, None);
    let outcome =
        DiscomfortTracker::process_discomfort_log(&entry, &[], &DiscomfortConfig::default());
    assert_eq!(outcome, DiscomfortLogOutcome::default());
}

#[test]
fn test_third_report_prompts_for_an_injury() {
    let history = vec![
        discomfort(BodyPart::LowerBack, DiscomfortSeverity::Twinge, 2, Some("deadlift")),
        discomfort(BodyPart::LowerBack, DiscomfortSeverity::Twinge, 6, Some("deadlift")),
        discomfort(BodyPart::Knee, DiscomfortSeverity::Twinge, 7, None),
    ];
    let entry = discomfort(BodyPart::LowerBack, DiscomfortSeverity::Discomfort, 9, None);

    let outcome =
        DiscomfortTracker::process_discomfort_log(&entry, &history, &DiscomfortConfig::default());

    assert!(outcome.pain_warning.is_none());
    let prompt = outcome.injury_prompt.unwrap();
    assert_eq!(prompt.body_part, BodyPart::LowerBack);
    assert_eq!(prompt.occurrences, 3);
    assert_eq!(prompt.suggested_injury, "Lower back strain");
    assert!(prompt.message.contains("3 times"));
    assert!(prompt.message.contains("lower back strain"));
}

#[test]
fn test_reprocessing_a_stored_entry_does_not_double_count() {
    let earlier = discomfort(BodyPart::Hip, DiscomfortSeverity::Twinge, 5, None);
    let entry = discomfort(BodyPart::Hip, DiscomfortSeverity::Twinge, 8, None);
    let history = vec![earlier, entry.clone()];

    let outcome =
        DiscomfortTracker::process_discomfort_log(&entry, &history, &DiscomfortConfig::default());
    assert!(outcome.injury_prompt.is_none());
}

#[test]
fn test_reports_outside_the_window_do_not_prompt() {
    let history = vec![
        discomfort(BodyPart::Hamstring, DiscomfortSeverity::Twinge, 0, None),
        discomfort(BodyPart::Hamstring, DiscomfortSeverity::Twinge, 1, None),
    ];
    let entry = discomfort(BodyPart::Hamstring, DiscomfortSeverity::Twinge, 30, None);

    let outcome =
        DiscomfortTracker::process_discomfort_log(&entry, &history, &DiscomfortConfig::default());
    assert!(outcome.injury_prompt.is_none());
}

#[test]
fn test_every_body_part_has_a_suggested_injury() {
    for body_part in [
        BodyPart::Neck,
        BodyPart::Shoulder,
        BodyPart::UpperBack,
        BodyPart::LowerBack,
        BodyPart::Elbow,
        BodyPart::Wrist,
        BodyPart::Hip,
        BodyPart::Knee,
        BodyPart::Ankle,
        BodyPart::Hamstring,
        BodyPart::Chest,
    ] {
        let injury = DiscomfortTracker::suggested_injury(body_part);
        assert!(!injury.is_empty());
        assert_ne!(injury, "Overuse strain", "{body_part}");
    }
}
