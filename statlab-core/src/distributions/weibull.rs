use rand::Rng;
use rand_distr::Distribution;

use super::{require_positive, ContinuousDistribution, DistributionError, Sampling};
use crate::special::gamma;

/// Two-parameter Weibull on `[0, ∞)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weibull {
    shape: f64,
    scale: f64,
}

impl Weibull {
    pub fn new(shape: f64, scale: f64) -> Result<Self, DistributionError> {
        Ok(Self {
            shape: require_positive("Weibull", "shape", shape)?,
            scale: require_positive("Weibull", "scale", scale)?,
        })
    }

    pub fn shape(&self) -> f64 {
        self.shape
    }
}

impl ContinuousDistribution for Weibull {
    fn name(&self) -> String {
        format!("Weibull(shape={}, scale={})", self.shape, self.scale)
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        let k = self.shape;
        let z = x / self.scale;
        if x == 0.0 {
            return match k.partial_cmp(&1.0) {
                Some(std::cmp::Ordering::Less) => f64::INFINITY,
                Some(std::cmp::Ordering::Equal) => 1.0 / self.scale,
                _ => 0.0,
            };
        }
        (k / self.scale) * z.powf(k - 1.0) * (-z.powf(k)).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            0.0
        } else {
            -(-(x / self.scale).powf(self.shape)).exp_m1()
        }
    }

    fn quantile(&self, p: f64) -> f64 {
        if p.is_nan() || !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        self.scale * (-(-p).ln_1p()).powf(1.0 / self.shape)
    }

    fn mean(&self) -> f64 {
        self.scale * gamma(1.0 + 1.0 / self.shape)
    }

    fn variance(&self) -> f64 {
        let g1 = gamma(1.0 + 1.0 / self.shape);
        let g2 = gamma(1.0 + 2.0 / self.shape);
        self.scale * self.scale * (g2 - g1 * g1)
    }
}

impl Sampling for Weibull {
    fn draw<R: Rng>(&self, rng: &mut R) -> f64 {
        match rand_distr::Weibull::new(self.scale, self.shape) {
            Ok(dist) => dist.sample(rng),
            Err(_) => f64::NAN,
        }
    }
}
