//! Criterion benchmarks for u-taskrank.
//!
//! Uses synthetic task sets drawn from a seeded RNG to measure the
//! scoring, ranking, and allocation pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_taskrank::allocation::allocate;
use u_taskrank::criteria::{Criteria, TaskSet};
use u_taskrank::pipeline::Prioritizer;
use u_taskrank::ranking::rank;
use u_taskrank::scoring::{Scorer, WeightConfig};

fn synthetic_tasks(n: usize, seed: u64) -> TaskSet {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let criteria = Criteria::new(
                rng.random_range(0.0..=100.0),
                rng.random_range(0.0..=10.0),
                rng.random_range(0.0..=15.0),
                // roughly one task in five without a due date
                if rng.random_bool(0.2) { 0 } else { rng.random_range(1..=90) },
            );
            (format!("task-{i}"), criteria)
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let scorer = Scorer::new(WeightConfig::from_pairs([
        ("corePercentage", 1.2),
        ("effortComplexity", 2.5),
        ("organizationValue", 1.1),
        ("dueInDays", 3.5),
    ]));

    for &n in &[10usize, 100, 1_000, 10_000] {
        let tasks = synthetic_tasks(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &tasks, |b, t| {
            b.iter(|| black_box(rank(black_box(t), &scorer)))
        });
    }
    group.finish();
}

fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate");
    let scorer = Scorer::default();

    for &n in &[10usize, 1_000, 10_000] {
        let ranked = rank(&synthetic_tasks(n, 7), &scorer);
        group.bench_with_input(BenchmarkId::from_parameter(n), &ranked, |b, r| {
            b.iter(|| black_box(allocate(black_box(r))))
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let prioritizer = Prioritizer::default();

    for &n in &[100usize, 10_000] {
        let tasks = synthetic_tasks(n, 3);
        group.bench_with_input(BenchmarkId::from_parameter(n), &tasks, |b, t| {
            b.iter(|| black_box(prioritizer.run(black_box(t))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rank, bench_allocate, bench_pipeline);
criterion_main!(benches);
