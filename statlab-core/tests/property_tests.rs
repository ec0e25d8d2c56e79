//! Property tests for the resampling contracts.
//!
//! 1. Statistic-set length — R draws in, R statistics out
//! 2. Mean bounds — every bootstrap mean lies inside [min, max] of the input
//! 3. Interval ordering — lower ≤ upper for any level
//! 4. Determinism — a fixed seed reproduces the set, parallel or not
//! 5. Histogram conservation — counts add up to the sample size

use proptest::prelude::*;
use statlab_core::sample::{max, mean, min};
use statlab_core::{bootstrap_statistics, confidence_interval, BootstrapConfig, Histogram};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_sample() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6_f64, 1..40)
}

fn arb_config() -> impl Strategy<Value = BootstrapConfig> {
    (1usize..200, any::<u64>()).prop_map(|(n, seed)| {
        BootstrapConfig::default().with_resamples(n).with_seed(seed)
    })
}

// ── 1 & 2. Length and bounds ─────────────────────────────────────────

proptest! {
    #[test]
    fn one_statistic_per_resample(sample in arb_sample(), config in arb_config()) {
        let stats = bootstrap_statistics(&sample, &config, mean).unwrap();
        prop_assert_eq!(stats.len(), config.n_resamples);
    }

    #[test]
    fn bootstrap_means_stay_in_range(sample in arb_sample(), config in arb_config()) {
        let (lo, hi) = (min(&sample), max(&sample));
        for m in bootstrap_statistics(&sample, &config, mean).unwrap() {
            prop_assert!(m >= lo && m <= hi, "{} outside [{}, {}]", m, lo, hi);
        }
    }
}

// ── 3. Interval ordering ─────────────────────────────────────────────

proptest! {
    #[test]
    fn lower_never_exceeds_upper(
        stats in prop::collection::vec(-1.0e3..1.0e3_f64, 2..200),
        level in 0.5..99.5_f64,
    ) {
        let ci = confidence_interval(&stats, level).unwrap();
        prop_assert!(ci.lower <= ci.upper);
        prop_assert!(ci.lower >= min(&stats) && ci.upper <= max(&stats));
    }
}

// ── 4. Determinism ───────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn fixed_seed_is_reproducible(sample in arb_sample(), config in arb_config()) {
        let a = bootstrap_statistics(&sample, &config, mean).unwrap();
        let b = bootstrap_statistics(&sample, &config, mean).unwrap();
        let par = bootstrap_statistics(&sample, &config.clone().with_parallelism(true), mean).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&a, &par);
    }
}

// ── 5. Histogram conservation ────────────────────────────────────────

proptest! {
    #[test]
    fn histogram_counts_every_value(sample in arb_sample(), bins in 1usize..50) {
        let h = Histogram::new(&sample, bins).unwrap();
        prop_assert_eq!(h.total(), sample.len() as u64);
        prop_assert_eq!(h.edges.len(), bins + 1);
    }
}
