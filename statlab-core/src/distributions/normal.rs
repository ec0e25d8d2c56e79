use rand::Rng;
use rand_distr::StandardNormal;

use super::{ContinuousDistribution, DistributionError, Sampling};
use crate::special::{inverse_normal_cdf, standard_normal_cdf, standard_normal_pdf};

/// Normal(mean, std_dev). `std_dev == 0` is allowed and degenerates to a
/// point mass at `mean`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

impl Normal {
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, DistributionError> {
        if !mean.is_finite() {
            return Err(DistributionError::InvalidParameter {
                distribution: "Normal",
                name: "mean",
                value: mean,
                reason: "must be finite",
            });
        }
        if !(std_dev.is_finite() && std_dev >= 0.0) {
            return Err(DistributionError::InvalidParameter {
                distribution: "Normal",
                name: "std_dev",
                value: std_dev,
                reason: "must be finite and >= 0",
            });
        }
        Ok(Self { mean, std_dev })
    }

    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl ContinuousDistribution for Normal {
    fn name(&self) -> String {
        format!("Normal(mean={}, std={})", self.mean, self.std_dev)
    }

    fn pdf(&self, x: f64) -> f64 {
        if self.std_dev == 0.0 {
            return if x == self.mean { f64::INFINITY } else { 0.0 };
        }
        standard_normal_pdf((x - self.mean) / self.std_dev) / self.std_dev
    }

    fn cdf(&self, x: f64) -> f64 {
        if self.std_dev == 0.0 {
            return if x < self.mean { 0.0 } else { 1.0 };
        }
        standard_normal_cdf((x - self.mean) / self.std_dev)
    }

    fn quantile(&self, p: f64) -> f64 {
        if self.std_dev == 0.0 && (0.0..=1.0).contains(&p) {
            return self.mean;
        }
        self.mean + self.std_dev * inverse_normal_cdf(p)
    }

    fn mean(&self) -> f64 {
        self.mean
    }

    fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }
}

impl Sampling for Normal {
    fn draw<R: Rng>(&self, rng: &mut R) -> f64 {
        let z: f64 = rng.sample(StandardNormal);
        self.mean + self.std_dev * z
    }
}
