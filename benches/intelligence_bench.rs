// ABOUTME: Criterion benchmarks for the training engine calculators
// ABOUTME: Measures E1RM estimation, plateau detection, calibration replay, fatigue scoring, and volume counting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Criterion benchmarks for the training engine calculators.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{
    calibration_logs, catalog, reference_now, snapshot_histories, weekly_sets, weekly_surveys,
    HistorySize,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use liftwise::algorithms::E1rmAlgorithm;
use liftwise::config::intelligence::{CalibrationConfig, PlateauConfig};
use liftwise::fatigue::FatigueAnalyzer;
use liftwise::plateau::PlateauDetector;
use liftwise::rpe_calibration::RpeCalibrationEngine;
use liftwise::volume::{assess_volume, count_weekly_sets};

fn bench_e1rm(c: &mut Criterion) {
    let mut group = c.benchmark_group("e1rm");

    for algorithm in [E1rmAlgorithm::Epley, E1rmAlgorithm::Brzycki] {
        group.bench_with_input(
            BenchmarkId::new("estimate", algorithm.name()),
            &algorithm,
            |b, algorithm| {
                b.iter(|| {
                    (1..=15u32)
                        .map(|reps| algorithm.estimate(black_box(100.0), reps, black_box(8.5)))
                        .sum::<f64>()
                });
            },
        );
    }

    group.finish();
}

fn bench_plateau(c: &mut Criterion) {
    let mut group = c.benchmark_group("plateau");
    let config = PlateauConfig::default();
    let now = reference_now();

    for size in [HistorySize::Block, HistorySize::Year] {
        let histories = snapshot_histories(size);
        group.throughput(Throughput::Elements(histories.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("detect_batch", size.weeks()),
            &histories,
            |b, histories| {
                b.iter(|| {
                    let alerts = PlateauDetector::detect_batch(black_box(histories), now, &config);
                    PlateauDetector::progress_score(&alerts)
                });
            },
        );
    }

    group.finish();
}

fn bench_calibration(c: &mut Criterion) {
    let mut group = c.benchmark_group("rpe_calibration");

    for size in [HistorySize::Block, HistorySize::Year] {
        let logs = calibration_logs(size);
        group.throughput(Throughput::Elements(logs.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("replay", size.weeks()),
            &logs,
            |b, logs| {
                b.iter(|| {
                    let mut engine = RpeCalibrationEngine::new(CalibrationConfig::default());
                    for log in logs.iter().cloned() {
                        engine.add_set_log(log);
                    }
                    engine.analyze_overall_bias()
                });
            },
        );
    }

    group.finish();
}

fn bench_fatigue(c: &mut Criterion) {
    let history = weekly_surveys(HistorySize::Year);

    c.bench_function("fatigue/score_year", |b| {
        b.iter(|| {
            black_box(&history)
                .iter()
                .map(|week| FatigueAnalyzer::calculate_fatigue_score(week).score)
                .sum::<f64>()
        });
    });

    c.bench_function("fatigue/trend_year", |b| {
        b.iter(|| FatigueAnalyzer::analyze_fatigue_trend(black_box(&history)));
    });
}

fn bench_volume(c: &mut Criterion) {
    let mut group = c.benchmark_group("volume");
    let exercises = catalog();

    for sessions in [3, 6] {
        let sets = weekly_sets(sessions);
        group.throughput(Throughput::Elements(sets.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("count_and_assess", sessions),
            &sets,
            |b, sets| {
                b.iter(|| assess_volume(&count_weekly_sets(black_box(sets), &exercises)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_e1rm,
    bench_plateau,
    bench_calibration,
    bench_fatigue,
    bench_volume
);
criterion_main!(benches);
