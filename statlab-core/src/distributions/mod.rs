//! Probability distributions used by the lessons.
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`Normal`] | mean, std_dev ≥ 0 | ℝ |
//! | [`StudentT`] | df > 0 | ℝ |
//! | [`ChiSquared`] | df > 0 | [0, ∞) |
//! | [`Exponential`] | scale > 0 | [0, ∞) |
//! | [`Weibull`] | shape > 0, scale > 0 | [0, ∞) |
//! | [`Pareto`] | shape > 0, x_min > 0 | [x_min, ∞) |
//! | [`Binomial`] | n ≥ 0, 0 ≤ p ≤ 1 | {0, …, n} |
//!
//! Constructors validate their parameters; evaluation never fails and
//! returns `NaN` for a probability outside [0, 1].

mod binomial;
mod chi_squared;
mod exponential;
mod normal;
mod pareto;
mod student_t;
mod weibull;

pub use binomial::{Binomial, DiscreteDistribution, PmfRow, MAX_TABLE_TRIALS};
pub use chi_squared::ChiSquared;
pub use exponential::Exponential;
pub use normal::Normal;
pub use pareto::Pareto;
pub use student_t::StudentT;
pub use weibull::Weibull;

use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DistributionError {
    #[error("{distribution}: parameter `{name}` = {value} {reason}")]
    InvalidParameter {
        distribution: &'static str,
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// A continuous distribution with density, CDF and quantile function.
pub trait ContinuousDistribution: Send + Sync {
    /// Human-readable name with parameters, e.g. `Weibull(shape=1.5, scale=1)`.
    fn name(&self) -> String;
    fn pdf(&self, x: f64) -> f64;
    fn cdf(&self, x: f64) -> f64;
    /// Inverse CDF. `NaN` for `p` outside [0, 1].
    fn quantile(&self, p: f64) -> f64;
    fn mean(&self) -> f64;
    fn variance(&self) -> f64;
}

/// Distributions that can generate random draws.
pub trait Sampling {
    fn draw<R: Rng>(&self, rng: &mut R) -> f64;

    fn sample<R: Rng>(&self, rng: &mut R, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.draw(rng)).collect()
    }
}

/// `n` evenly spaced points from `start` to `stop` inclusive.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// `(x, pdf(x))` over a grid, dropping points where the density is not finite
/// (e.g. χ² with one degree of freedom at zero).
pub fn density_curve(dist: &dyn ContinuousDistribution, xs: &[f64]) -> Vec<(f64, f64)> {
    xs.iter()
        .map(|&x| (x, dist.pdf(x)))
        .filter(|(_, y)| y.is_finite())
        .collect()
}

/// Numeric inverse of a monotone CDF on `[lo, ∞)`, by bracketing and bisection.
pub(crate) fn invert_cdf<F>(cdf: F, p: f64, lo: f64, initial_hi: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return lo;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }

    let mut lo = lo;
    let mut hi = initial_hi.max(lo + 1.0);
    while cdf(hi) < p {
        lo = hi;
        hi *= 2.0;
        if !hi.is_finite() {
            return f64::INFINITY;
        }
    }
    for _ in 0..200 {
        let mid = 0.5 * (lo + hi);
        if cdf(mid) < p {
            lo = mid;
        } else {
            hi = mid;
        }
        if hi - lo <= 1e-12 * hi.abs().max(1.0) {
            break;
        }
    }
    0.5 * (lo + hi)
}

pub(crate) fn require_positive(
    distribution: &'static str,
    name: &'static str,
    value: f64,
) -> Result<f64, DistributionError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DistributionError::InvalidParameter {
            distribution,
            name,
            value,
            reason: "must be finite and > 0",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints_and_count() {
        let xs = linspace(-5.0, 5.0, 100);
        assert_eq!(xs.len(), 100);
        assert_eq!(xs[0], -5.0);
        assert_eq!(xs[99], 5.0);
        assert!(xs.windows(2).all(|w| w[1] > w[0]));

        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 9.0, 1), vec![2.0]);
    }

    #[test]
    fn density_curve_drops_non_finite_points() {
        let chi = ChiSquared::new(1.0).unwrap();
        let curve = density_curve(&chi, &linspace(0.0, 20.0, 1000));
        assert_eq!(curve.len(), 999);
        assert!(curve.iter().all(|(_, y)| y.is_finite()));
    }

    #[test]
    fn invert_cdf_recovers_exponential_quantile() {
        let cdf = |x: f64| 1.0 - (-x).exp();
        let q = invert_cdf(cdf, 0.5, 0.0, 1.0);
        assert!((q - 2f64.ln()).abs() < 1e-9);
        assert!(invert_cdf(cdf, 2.0, 0.0, 1.0).is_nan());
    }

    #[test]
    fn require_positive_rejects_zero_and_nan() {
        assert!(require_positive("T", "df", 0.0).is_err());
        assert!(require_positive("T", "df", f64::NAN).is_err());
        assert_eq!(require_positive("T", "df", 3.0), Ok(3.0));
    }
}
