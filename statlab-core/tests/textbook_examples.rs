//! Worked examples with known answers.

use statlab_core::distributions::{
    density_curve, linspace, Binomial, ChiSquared, ContinuousDistribution, DiscreteDistribution,
    Normal, StudentT,
};
use statlab_core::sample::mean;
use statlab_core::{bootstrap_confidence_interval, simulate_sampling, BootstrapConfig};

const SCORES: [f64; 10] = [85.0, 90.0, 78.0, 92.0, 88.0, 75.0, 84.0, 82.0, 89.0, 91.0];

#[test]
fn fair_coin_probabilities() {
    let coin = Binomial::new(5, 0.5).unwrap();
    let expected = [0.03125, 0.15625, 0.3125, 0.3125, 0.15625, 0.03125];
    let table = coin.pmf_table().unwrap();
    for (row, want) in table.iter().zip(expected) {
        assert!((row.probability - want).abs() < 1e-12);
    }
    let total: f64 = table.iter().map(|r| r.probability).sum();
    assert!((total - 1.0).abs() < 1e-12);
    assert!((coin.mean() - 2.5).abs() < 1e-12);
}

#[test]
fn exam_scores_interval_covers_sample_mean() {
    assert!((mean(&SCORES) - 85.4).abs() < 1e-12);
    for seed in [0, 1, 42, 1234] {
        let config = BootstrapConfig::default().with_resamples(1000).with_seed(seed);
        let (stats, ci) = bootstrap_confidence_interval(&SCORES, mean, &config, 90.0).unwrap();
        assert_eq!(stats.len(), 1000);
        assert!(ci.lower <= 85.4 && 85.4 <= ci.upper, "seed {seed}: {ci:?}");
        assert_eq!(ci.level, 90.0);
    }
}

#[test]
fn more_resamples_stabilise_the_interval() {
    let spread = |n: usize| {
        let lowers: Vec<f64> = (0..8)
            .map(|seed| {
                let config = BootstrapConfig::default().with_resamples(n).with_seed(seed);
                bootstrap_confidence_interval(&SCORES, mean, &config, 90.0)
                    .unwrap()
                    .1
                    .lower
            })
            .collect();
        statlab_core::sample::std_dev(&lowers, 0)
    };
    assert!(spread(5000) < spread(50));
}

#[test]
fn standard_error_for_heights() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let sim = simulate_sampling(175.0, 10.0, 10, 5, &mut StdRng::seed_from_u64(0)).unwrap();
    assert_eq!(sim.sample_means.len(), 5);
    assert!(sim.sample_means.iter().all(|m| (150.0..200.0).contains(m)));
    assert!((sim.expected_means_std - 10.0 / 10f64.sqrt()).abs() < 1e-12);
    assert!(sim.standard_error >= 0.0);
}

#[test]
fn t_peaks_rise_toward_the_normal() {
    let normal_peak = Normal::standard().pdf(0.0);
    let peaks: Vec<f64> = [1.0, 5.0, 10.0, 30.0]
        .iter()
        .map(|&df| StudentT::new(df).unwrap().pdf(0.0))
        .collect();
    assert!(peaks.windows(2).all(|w| w[0] < w[1]));
    assert!(peaks.iter().all(|&p| p < normal_peak));
}

#[test]
fn chi_square_curves_on_the_lesson_grid() {
    let xs = linspace(0.0, 20.0, 1000);
    for df in [1.0, 2.0, 3.0, 5.0, 10.0] {
        let chi = ChiSquared::new(df).unwrap();
        let curve = density_curve(&chi, &xs);
        let expected_len = if df == 1.0 { 999 } else { 1000 };
        assert_eq!(curve.len(), expected_len, "df {df}");
        assert_eq!(chi.mean(), df);
    }
}
