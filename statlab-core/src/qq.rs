//! Probability (QQ) plots.
//!
//! The sorted sample is paired with the target distribution's quantiles at
//! Filliben's estimate of the uniform order-statistic medians, and a
//! least-squares line is fitted through the pairs. A sample from the target
//! family lies close to a straight line with `r` near 1.

use serde::{Deserialize, Serialize};

use crate::distributions::ContinuousDistribution;
use crate::error::{Result, StatError};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation of the plotted points.
    pub r: f64,
}

impl LinearFit {
    pub fn at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityPlot {
    /// Name of the reference distribution.
    pub distribution: String,
    /// Quantiles of the reference distribution (x axis).
    pub theoretical: Vec<f64>,
    /// Sorted sample (y axis).
    pub ordered: Vec<f64>,
    pub fit: LinearFit,
}

impl ProbabilityPlot {
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.theoretical.iter().copied().zip(self.ordered.iter().copied())
    }

    /// Endpoints of the fitted line across the theoretical range.
    pub fn fit_line(&self) -> [(f64, f64); 2] {
        let lo = self.theoretical.first().copied().unwrap_or(0.0);
        let hi = self.theoretical.last().copied().unwrap_or(0.0);
        [(lo, self.fit.at(lo)), (hi, self.fit.at(hi))]
    }
}

/// Filliben's approximation to the medians of the `n` uniform order statistics.
pub fn filliben_medians(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let last = 0.5_f64.powf(1.0 / n as f64);
    let nf = n as f64;
    let mut medians: Vec<f64> = (1..=n)
        .map(|i| (i as f64 - 0.3175) / (nf + 0.365))
        .collect();
    medians[n - 1] = last;
    medians[0] = 1.0 - last;
    medians
}

/// Ordinary least squares of `ys` on `xs`.
///
/// A constant `ys` gives slope 0 and `r` 0; a constant `xs` has no fit and
/// yields `NaN` slope and `r`.
pub fn least_squares(xs: &[f64], ys: &[f64]) -> LinearFit {
    let n = xs.len().min(ys.len()) as f64;
    let mx = xs.iter().sum::<f64>() / n;
    let my = ys.iter().sum::<f64>() / n;
    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for (&x, &y) in xs.iter().zip(ys) {
        let (dx, dy) = (x - mx, y - my);
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }
    let slope = sxy / sxx;
    let r = if syy == 0.0 { 0.0 } else { sxy / (sxx * syy).sqrt() };
    LinearFit {
        slope,
        intercept: my - slope * mx,
        r,
    }
}

/// Probability plot of `sample` against `dist`. Needs two or more finite values.
pub fn probability_plot(
    sample: &[f64],
    dist: &dyn ContinuousDistribution,
) -> Result<ProbabilityPlot> {
    if sample.is_empty() {
        return Err(StatError::EmptySample { name: "sample" });
    }
    if sample.len() < 2 {
        return Err(StatError::invalid("sample", "need at least 2 values for a probability plot"));
    }
    if let Some(bad) = sample.iter().find(|v| !v.is_finite()) {
        return Err(StatError::invalid("sample", format!("non-finite value {bad}")));
    }

    let mut ordered = sample.to_vec();
    ordered.sort_by(f64::total_cmp);
    let theoretical: Vec<f64> = filliben_medians(ordered.len())
        .into_iter()
        .map(|m| dist.quantile(m))
        .collect();
    let fit = least_squares(&theoretical, &ordered);

    Ok(ProbabilityPlot {
        distribution: dist.name(),
        theoretical,
        ordered,
        fit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions::{Exponential, Normal, Sampling};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn filliben_endpoints_and_symmetry() {
        let m = filliben_medians(10);
        assert_eq!(m.len(), 10);
        assert!((m[9] - 0.5_f64.powf(0.1)).abs() < 1e-15);
        assert!((m[0] + m[9] - 1.0).abs() < 1e-15);
        assert!(((5.0 - 0.3175) / 10.365 - m[4]).abs() < 1e-15);
        assert!(m.windows(2).all(|w| w[1] > w[0]));
        for i in 0..10 {
            assert!((m[i] + m[9 - i] - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn least_squares_exact_line() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [1.0, 3.0, 5.0, 7.0];
        let fit = least_squares(&xs, &ys);
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normal_sample_is_straight_against_normal() {
        let mut rng = StdRng::seed_from_u64(0);
        let xs = Normal::standard().sample(&mut rng, 1000);
        let plot = probability_plot(&xs, &Normal::standard()).unwrap();
        assert!(plot.fit.r > 0.99, "{}", plot.fit.r);
        assert!((plot.fit.slope - 1.0).abs() < 0.1);
        assert!(plot.fit.intercept.abs() < 0.1);
    }

    #[test]
    fn exponential_sample_bends_against_normal() {
        let mut rng = StdRng::seed_from_u64(0);
        let expo = Exponential::new(1.0).unwrap();
        let xs = expo.sample(&mut rng, 1000);
        let against_normal = probability_plot(&xs, &Normal::standard()).unwrap();
        let against_expo = probability_plot(&xs, &expo).unwrap();
        assert!(against_expo.fit.r > against_normal.fit.r);
        assert!(against_expo.fit.r > 0.99);
    }

    #[test]
    fn ordered_values_are_sorted_input() {
        let plot = probability_plot(&[3.0, 1.0, 2.0], &Normal::standard()).unwrap();
        assert_eq!(plot.ordered, vec![1.0, 2.0, 3.0]);
        assert_eq!(plot.theoretical.len(), 3);
        assert!(plot.theoretical[1].abs() < 1e-12);
        assert_eq!(plot.points().count(), 3);
    }

    #[test]
    fn rejects_tiny_or_non_finite_samples() {
        let n = Normal::standard();
        assert!(probability_plot(&[], &n).is_err());
        assert!(probability_plot(&[1.0], &n).is_err());
        assert!(probability_plot(&[1.0, f64::NAN], &n).is_err());
    }
}
