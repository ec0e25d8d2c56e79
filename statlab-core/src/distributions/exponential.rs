use rand::Rng;
use rand_distr::{Distribution, Exp1};

use super::{require_positive, ContinuousDistribution, DistributionError, Sampling};

/// Exponential distribution parameterised by its scale (mean), `1 / rate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    scale: f64,
}

impl Exponential {
    pub fn new(scale: f64) -> Result<Self, DistributionError> {
        Ok(Self {
            scale: require_positive("Exponential", "scale", scale)?,
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl ContinuousDistribution for Exponential {
    fn name(&self) -> String {
        format!("Exponential(scale={})", self.scale)
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            (-x / self.scale).exp() / self.scale
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            0.0
        } else {
            -(-x / self.scale).exp_m1()
        }
    }

    fn quantile(&self, p: f64) -> f64 {
        if p.is_nan() || !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        -self.scale * (-p).ln_1p()
    }

    fn mean(&self) -> f64 {
        self.scale
    }

    fn variance(&self) -> f64 {
        self.scale * self.scale
    }
}

impl Sampling for Exponential {
    fn draw<R: Rng>(&self, rng: &mut R) -> f64 {
        let unit: f64 = Exp1.sample(rng);
        self.scale * unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn median_is_scale_ln_two() {
        let e = Exponential::new(2.0).unwrap();
        assert!((e.quantile(0.5) - 2.0 * 2f64.ln()).abs() < 1e-12);
        assert!((e.cdf(e.quantile(0.8)) - 0.8).abs() < 1e-12);
        assert_eq!(e.quantile(1.0), f64::INFINITY);
    }

    #[test]
    fn no_mass_below_zero() {
        let e = Exponential::new(1.0).unwrap();
        assert_eq!(e.pdf(-0.1), 0.0);
        assert_eq!(e.cdf(-3.0), 0.0);
        assert_eq!(e.pdf(0.0), 1.0);
    }

    #[test]
    fn draws_are_non_negative_with_mean_scale() {
        let e = Exponential::new(1.0).unwrap();
        let xs = e.sample(&mut StdRng::seed_from_u64(0), 20_000);
        assert!(xs.iter().all(|&x| x >= 0.0));
        assert!((crate::sample::mean(&xs) - 1.0).abs() < 0.03);
    }
}
