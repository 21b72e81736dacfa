// ABOUTME: Criterion benchmarks for the progress analytics computations
// ABOUTME: Measures streaks, trends, summaries, period analytics, and the progress report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the progress analytics computations.
//!
//! Each benchmark runs over month, year, and multi-year histories to show how
//! the computations scale with the number of entries.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{bench_profile, bench_today, generate_history, HistorySize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use progress_analytics::intelligence::{
    compute_bmi_progression, compute_streak, compute_summary_statistics,
    metrics_extractor::series_by_metric, ProgressAnalyzer,
};
use progress_analytics::models::{AnalyticsPeriod, Metric, ProgressEntry};

const SIZES: [HistorySize; 3] = [HistorySize::Month, HistorySize::Year, HistorySize::Multiyear];

fn histories() -> Vec<(usize, Vec<ProgressEntry>)> {
    SIZES
        .iter()
        .map(|size| {
            let entries = generate_history(*size);
            (entries.len(), entries)
        })
        .collect()
}

fn bench_streak(c: &mut Criterion) {
    let mut group = c.benchmark_group("streak");
    let today = bench_today();

    for (count, entries) in histories() {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("compute_streak", count),
            &entries,
            |b, entries| b.iter(|| compute_streak(black_box(entries), black_box(today))),
        );
    }

    group.finish();
}

fn bench_trends(c: &mut Criterion) {
    let mut group = c.benchmark_group("trends");
    let analyzer = ProgressAnalyzer::new();

    for (count, entries) in histories() {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("all_metrics", count),
            &entries,
            |b, entries| b.iter(|| analyzer.trends(black_box(entries), &Metric::ALL)),
        );
    }

    group.finish();
}

fn bench_summary_and_bmi(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary_bmi");
    let profile = bench_profile();

    for (count, entries) in histories() {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("summary_statistics", count),
            &entries,
            |b, entries| {
                b.iter(|| {
                    compute_summary_statistics(&series_by_metric(black_box(entries), &Metric::ALL))
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("bmi_progression", count),
            &entries,
            |b, entries| b.iter(|| compute_bmi_progression(black_box(entries), profile.height)),
        );
    }

    group.finish();
}

fn bench_period_analytics(c: &mut Criterion) {
    let mut group = c.benchmark_group("period_analytics");
    let analyzer = ProgressAnalyzer::new();
    let profile = bench_profile();
    let today = bench_today();
    let entries = generate_history(HistorySize::Multiyear);

    for period in [
        AnalyticsPeriod::Week,
        AnalyticsPeriod::Month,
        AnalyticsPeriod::Quarter,
        AnalyticsPeriod::Year,
    ] {
        group.bench_function(BenchmarkId::new("weight", period.as_str()), |b| {
            b.iter(|| {
                analyzer.period_analytics(
                    black_box(&entries),
                    period,
                    Metric::Weight,
                    today,
                    &profile,
                )
            });
        });
    }

    group.finish();
}

fn bench_progress_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("progress_report");
    let analyzer = ProgressAnalyzer::new();
    let profile = bench_profile();
    let today = bench_today();

    for (count, entries) in histories() {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("progress_stats", count),
            &entries,
            |b, entries| b.iter(|| analyzer.progress_stats(black_box(entries), today, &profile)),
        );
        group.bench_with_input(BenchmarkId::new("goals", count), &entries, |b, entries| {
            b.iter(|| analyzer.goals(black_box(entries), &profile));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_streak,
    bench_trends,
    bench_summary_and_bmi,
    bench_period_analytics,
    bench_progress_report,
);
criterion_main!(benches);
