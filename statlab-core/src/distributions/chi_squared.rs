use rand::Rng;
use rand_distr::Distribution;

use super::{invert_cdf, require_positive, ContinuousDistribution, DistributionError, Sampling};
use crate::special::{ln_gamma, regularized_lower_gamma};

/// Chi-square distribution with `df` degrees of freedom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquared {
    df: f64,
}

impl ChiSquared {
    pub fn new(df: f64) -> Result<Self, DistributionError> {
        Ok(Self {
            df: require_positive("ChiSquared", "df", df)?,
        })
    }

    pub fn df(&self) -> f64 {
        self.df
    }
}

impl ContinuousDistribution for ChiSquared {
    fn name(&self) -> String {
        format!("chi2(df={})", self.df)
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        let half = self.df / 2.0;
        if x == 0.0 {
            return match half.partial_cmp(&1.0) {
                Some(std::cmp::Ordering::Less) => f64::INFINITY,
                Some(std::cmp::Ordering::Equal) => 0.5,
                _ => 0.0,
            };
        }
        ((half - 1.0) * x.ln() - x / 2.0 - half * 2f64.ln() - ln_gamma(half)).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        regularized_lower_gamma(self.df / 2.0, x / 2.0)
    }

    fn quantile(&self, p: f64) -> f64 {
        invert_cdf(|x| self.cdf(x), p, 0.0, self.df.max(1.0) * 2.0)
    }

    fn mean(&self) -> f64 {
        self.df
    }

    fn variance(&self) -> f64 {
        2.0 * self.df
    }
}

impl Sampling for ChiSquared {
    fn draw<R: Rng>(&self, rng: &mut R) -> f64 {
        match rand_distr::ChiSquared::new(self.df) {
            Ok(dist) => dist.sample(rng),
            Err(_) => f64::NAN,
        }
    }
}
