use rand::Rng;
use rand_distr::Distribution;

use super::{require_positive, ContinuousDistribution, DistributionError, Sampling};

/// Pareto Type I: support `[x_min, ∞)`, tail index `shape` (α).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pareto {
    shape: f64,
    x_min: f64,
}

impl Pareto {
    pub fn new(shape: f64, x_min: f64) -> Result<Self, DistributionError> {
        Ok(Self {
            shape: require_positive("Pareto", "shape", shape)?,
            x_min: require_positive("Pareto", "x_min", x_min)?,
        })
    }

    pub fn shape(&self) -> f64 {
        self.shape
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// P(X > x).
    pub fn survival(&self, x: f64) -> f64 {
        if x <= self.x_min {
            1.0
        } else {
            (self.x_min / x).powf(self.shape)
        }
    }
}

impl ContinuousDistribution for Pareto {
    fn name(&self) -> String {
        format!("Pareto(alpha={}, x_min={})", self.shape, self.x_min)
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < self.x_min {
            0.0
        } else {
            self.shape * self.x_min.powf(self.shape) / x.powf(self.shape + 1.0)
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        1.0 - self.survival(x)
    }

    fn quantile(&self, p: f64) -> f64 {
        if p.is_nan() || !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        self.x_min / (1.0 - p).powf(1.0 / self.shape)
    }

    /// Infinite for α ≤ 1.
    fn mean(&self) -> f64 {
        if self.shape <= 1.0 {
            f64::INFINITY
        } else {
            self.shape * self.x_min / (self.shape - 1.0)
        }
    }

    /// Infinite for α ≤ 2.
    fn variance(&self) -> f64 {
        let a = self.shape;
        if a <= 2.0 {
            f64::INFINITY
        } else {
            self.x_min * self.x_min * a / ((a - 1.0) * (a - 1.0) * (a - 2.0))
        }
    }
}

impl Sampling for Pareto {
    fn draw<R: Rng>(&self, rng: &mut R) -> f64 {
        match rand_distr::Pareto::new(self.x_min, self.shape) {
            Ok(dist) => dist.sample(rng),
            Err(_) => f64::NAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn density_starts_at_x_min() {
        let p = Pareto::new(3.0, 1.0).unwrap();
        assert_eq!(p.pdf(0.99), 0.0);
        assert!((p.pdf(1.0) - 3.0).abs() < 1e-12);
        assert!((p.pdf(2.0) - 3.0 / 16.0).abs() < 1e-12);
    }

    #[test]
    fn survival_is_power_law() {
        let p = Pareto::new(3.0, 1.0).unwrap();
        assert!((p.survival(10.0) - 1e-3).abs() < 1e-15);
        assert!((p.cdf(p.quantile(0.9)) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn moments_diverge_for_small_alpha() {
        assert_eq!(Pareto::new(1.0, 1.0).unwrap().mean(), f64::INFINITY);
        assert_eq!(Pareto::new(2.0, 1.0).unwrap().variance(), f64::INFINITY);
        assert!((Pareto::new(3.0, 1.0).unwrap().mean() - 1.5).abs() < 1e-12);
        assert!((Pareto::new(3.0, 1.0).unwrap().variance() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn draws_never_fall_below_x_min() {
        let p = Pareto::new(3.0, 1.0).unwrap();
        let xs = p.sample(&mut StdRng::seed_from_u64(0), 5_000);
        assert!(xs.iter().all(|&x| x >= 1.0));
    }
}
