// ABOUTME: Tests for one-rep-max estimation and the load/rep helper relations
// ABOUTME: Covers Epley and Brzycki formulas, degenerate inputs, rounding, and best-set snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use common::{approx_eq, base_time, set_log, warmup};
use liftwise::algorithms::{
    best_set_snapshot, estimate_one_rep_max, floor_to_increment, predict_max_reps, rir_to_rpe,
    round_to_increment, rpe_to_rir, weight_for_reps, E1rmAlgorithm,
};
use liftwise::errors::ErrorCode;
use liftwise::models::BodyweightModification;

#[test]
fn test_single_at_rpe_ten_returns_weight() {
    for weight in [20.0, 61.5, 100.0, 142.5, 317.5] {
        assert_eq!(estimate_one_rep_max(weight, 1, 10.0), weight);
        assert_eq!(E1rmAlgorithm::Brzycki.estimate(weight, 1, 10.0), weight);
    }
}

#[test]
fn test_ten_reps_to_failure_at_100kg() {
    let e1rm = estimate_one_rep_max(100.0, 10, 10.0);
    assert!((e1rm - 133.33).abs() < 0.01, "got {e1rm}");
}

#[test]
fn test_zero_weight_or_reps_returns_zero() {
    assert_eq!(estimate_one_rep_max(0.0, 8, 8.0), 0.0);
    assert_eq!(estimate_one_rep_max(100.0, 0, 8.0), 0.0);
    assert_eq!(E1rmAlgorithm::Brzycki.estimate(0.0, 5, 9.0), 0.0);
}

#[test]
fn test_estimate_is_monotonic_in_reps() {
    for algorithm in [E1rmAlgorithm::Epley, E1rmAlgorithm::Brzycki] {
        for rpe in [6.0, 8.0, 10.0] {
            let estimates: Vec<f64> = (1..=20)
                .map(|reps| algorithm.estimate(100.0, reps, rpe))
                .collect();
            assert!(
                estimates.windows(2).all(|pair| pair[1] >= pair[0]),
                "{algorithm} at RPE {rpe} not monotonic: {estimates:?}"
            );
        }
    }
}

#[test]
fn test_reps_in_reserve_raise_the_estimate() {
    // 8 reps at RPE 8 counts as 10 effective reps
    assert_eq!(
        estimate_one_rep_max(100.0, 8, 8.0),
        estimate_one_rep_max(100.0, 10, 10.0)
    );
}

#[test]
fn test_brzycki_within_trusted_range() {
    let e1rm = E1rmAlgorithm::Brzycki.estimate(100.0, 5, 10.0);
    let expected = 100.0 / (1.0278 - 0.0278 * 5.0);
    assert!((e1rm - expected).abs() < 0.01, "got {e1rm}");
}

#[test]
fn test_brzycki_falls_back_to_epley_above_ten_effective_reps() {
    assert_eq!(
        E1rmAlgorithm::Brzycki.estimate(80.0, 12, 10.0),
        E1rmAlgorithm::Epley.estimate(80.0, 12, 10.0)
    );
    // 9 reps at RPE 8 is 11 effective reps
    assert_eq!(
        E1rmAlgorithm::Brzycki.estimate(80.0, 9, 8.0),
        E1rmAlgorithm::Epley.estimate(80.0, 9, 8.0)
    );
}

#[test]
fn test_algorithm_parsing_and_names() {
    assert_eq!("epley".parse::<E1rmAlgorithm>().unwrap(), E1rmAlgorithm::Epley);
    assert_eq!("BRZYCKI".parse::<E1rmAlgorithm>().unwrap(), E1rmAlgorithm::Brzycki);
    assert_eq!(E1rmAlgorithm::default(), E1rmAlgorithm::Epley);
    assert_eq!(E1rmAlgorithm::Brzycki.to_string(), "brzycki");
    assert!(E1rmAlgorithm::Epley.formula().contains("30"));

    let error = "lombardi".parse::<E1rmAlgorithm>().unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(error.message.contains("lombardi"));
}

#[test]
fn test_rpe_rir_conversions() {
    assert_eq!(rpe_to_rir(8.0), 2.0);
    assert_eq!(rpe_to_rir(10.0), 0.0);
    assert_eq!(rpe_to_rir(10.5), 0.0);
    assert_eq!(rir_to_rpe(2.0), 8.0);
    assert_eq!(rir_to_rpe(0.0), 10.0);
    assert_eq!(rir_to_rpe(12.0), 1.0);
}

#[test]
fn test_weight_for_reps_inverts_epley() {
    let e1rm = estimate_one_rep_max(100.0, 8, 8.0);
    let weight = weight_for_reps(e1rm, 8, 2.0);
    assert!((weight - 100.0).abs() < 0.01, "got {weight}");
    assert_eq!(weight_for_reps(0.0, 8, 2.0), 0.0);
}

#[test]
fn test_predict_max_reps() {
    // 140 kg E1RM implies 12 reps to failure at 100 kg
    assert!((predict_max_reps(140.0, 100.0) - 12.0).abs() < 1e-9);
    assert_eq!(predict_max_reps(90.0, 100.0), 0.0);
    assert_eq!(predict_max_reps(140.0, 0.0), 0.0);
}

#[test]
fn test_increment_rounding() {
    assert!(approx_eq(round_to_increment(101.3, 2.5), 102.5));
    assert!(approx_eq(round_to_increment(101.2, 2.5), 100.0));
    assert!(approx_eq(floor_to_increment(104.9, 2.5), 102.5));
    assert!(approx_eq(round_to_increment(-3.0, 2.5), 0.0));
    assert!(approx_eq(round_to_increment(101.234, 0.0), 101.23));
}

#[test]
fn test_best_set_snapshot_picks_highest_estimate() {
    let sets = vec![
        warmup("back_squat", 1, 60.0, 5),
        set_log("back_squat", 2, 100.0, 8, 7.0),
        set_log("back_squat", 3, 105.0, 6, 9.0),
        set_log("back_squat", 4, 100.0, 10, 8.5),
        set_log("bench_press", 1, 140.0, 10, 10.0),
    ];

    let snapshot = best_set_snapshot("back_squat", base_time(), &sets).unwrap();
    assert_eq!(snapshot.exercise_id, "back_squat");
    assert_eq!(snapshot.weight, 100.0);
    assert_eq!(snapshot.reps, 10);
    assert_eq!(snapshot.sets, 3);
    assert_eq!(snapshot.e1rm, estimate_one_rep_max(100.0, 10, 8.5));
}

#[test]
fn test_best_set_snapshot_without_working_sets() {
    let sets = vec![warmup("back_squat", 1, 60.0, 5)];
    assert!(best_set_snapshot("back_squat", base_time(), &sets).is_none());
    assert!(best_set_snapshot("back_squat", base_time(), &[]).is_none());
}

#[test]
fn test_best_set_snapshot_uses_bodyweight_load() {
    let mut pull_up = set_log("pull_up", 1, 0.0, 8, 9.0);
    pull_up.bodyweight = Some(BodyweightModification {
        bodyweight_kg: 80.0,
        bodyweight_fraction: 1.0,
        added_kg: 10.0,
        assistance_kg: 0.0,
    });

    let snapshot = best_set_snapshot("pull_up", base_time(), &[pull_up]).unwrap();
    assert_eq!(snapshot.weight, 90.0);
    assert!(snapshot.e1rm > 90.0);
}
