//! Criterion benchmarks for the resampling hot loop.
//!
//! 1. Bootstrap means, sequential vs rayon
//! 2. Percentile interval over a statistic set
//! 3. Probability plot against the normal

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use statlab_core::distributions::{Normal, Sampling};
use statlab_core::sample::mean;
use statlab_core::{bootstrap_statistics, confidence_interval, probability_plot, BootstrapConfig};

fn heights(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(0);
    match Normal::new(170.0, 10.0) {
        Ok(dist) => dist.sample(&mut rng, n),
        Err(e) => panic!("{e}"),
    }
}

fn bench_bootstrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("bootstrap_means");
    for &size in &[100usize, 10_000] {
        let sample = heights(size);
        for parallel in [false, true] {
            let config = BootstrapConfig::default()
                .with_resamples(1000)
                .with_parallelism(parallel);
            let label = if parallel { "parallel" } else { "sequential" };
            group.bench_with_input(BenchmarkId::new(label, size), &sample, |b, sample| {
                b.iter(|| bootstrap_statistics(black_box(sample), &config, mean).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_interval(c: &mut Criterion) {
    let stats = heights(10_000);
    c.bench_function("confidence_interval_10k", |b| {
        b.iter(|| confidence_interval(black_box(&stats), 90.0).unwrap())
    });
}

fn bench_probability_plot(c: &mut Criterion) {
    let sample = heights(1000);
    let normal = Normal::standard();
    c.bench_function("probability_plot_1k", |b| {
        b.iter(|| probability_plot(black_box(&sample), &normal).unwrap())
    });
}

criterion_group!(benches, bench_bootstrap, bench_interval, bench_probability_plot);
criterion_main!(benches);
