use rand::Rng;
use rand_distr::Distribution;

use super::{require_positive, ContinuousDistribution, DistributionError, Sampling};
use crate::special::{inverse_normal_cdf, ln_gamma, regularized_incomplete_beta};

/// Student's t-distribution with `df` degrees of freedom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentT {
    df: f64,
}

impl StudentT {
    pub fn new(df: f64) -> Result<Self, DistributionError> {
        Ok(Self {
            df: require_positive("StudentT", "df", df)?,
        })
    }

    pub fn df(&self) -> f64 {
        self.df
    }
}

impl ContinuousDistribution for StudentT {
    fn name(&self) -> String {
        format!("t(df={})", self.df)
    }

    fn pdf(&self, t: f64) -> f64 {
        let half = self.df / 2.0;
        let ln_pdf = ln_gamma(half + 0.5)
            - ln_gamma(half)
            - 0.5 * (self.df * std::f64::consts::PI).ln()
            - (half + 0.5) * (1.0 + t * t / self.df).ln();
        ln_pdf.exp()
    }

    fn cdf(&self, t: f64) -> f64 {
        if t.is_nan() {
            return f64::NAN;
        }
        if t == 0.0 {
            return 0.5;
        }
        let tail = 0.5 * regularized_incomplete_beta(self.df / (self.df + t * t), self.df / 2.0, 0.5);
        if t > 0.0 {
            1.0 - tail
        } else {
            tail
        }
    }

    /// Newton iteration from the normal quantile.
    fn quantile(&self, p: f64) -> f64 {
        if p.is_nan() || !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        if p == 0.0 {
            return f64::NEG_INFINITY;
        }
        if p == 1.0 {
            return f64::INFINITY;
        }
        if p == 0.5 {
            return 0.0;
        }
        let mut t = inverse_normal_cdf(p);
        for _ in 0..60 {
            let density = self.pdf(t);
            if density < 1e-300 {
                break;
            }
            let step = (self.cdf(t) - p) / density;
            // Heavy tails (df near 1) overshoot; cap each step.
            let step = step.clamp(-t.abs().max(1.0), t.abs().max(1.0));
            t -= step;
            if step.abs() < 1e-12 * t.abs().max(1.0) {
                break;
            }
        }
        t
    }

    fn mean(&self) -> f64 {
        if self.df > 1.0 {
            0.0
        } else {
            f64::NAN
        }
    }

    fn variance(&self) -> f64 {
        if self.df > 2.0 {
            self.df / (self.df - 2.0)
        } else if self.df > 1.0 {
            f64::INFINITY
        } else {
            f64::NAN
        }
    }
}

impl Sampling for StudentT {
    fn draw<R: Rng>(&self, rng: &mut R) -> f64 {
        match rand_distr::StudentT::new(self.df) {
            Ok(dist) => dist.sample(rng),
            Err(_) => f64::NAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn df_one_is_cauchy() {
        let t = StudentT::new(1.0).unwrap();
        // Cauchy peak 1/π, CDF(1) = 3/4
        assert!((t.pdf(0.0) - 1.0 / std::f64::consts::PI).abs() < 1e-9);
        assert!((t.cdf(1.0) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn heavier_tails_for_fewer_degrees_of_freedom() {
        let t1 = StudentT::new(1.0).unwrap();
        let t30 = StudentT::new(30.0).unwrap();
        assert!(t1.pdf(4.0) > t30.pdf(4.0));
        assert!(t1.pdf(0.0) < t30.pdf(0.0));
    }

    #[test]
    fn large_df_approaches_normal() {
        let t = StudentT::new(10_000.0).unwrap();
        assert!((t.pdf(0.0) - 0.398_942_28).abs() < 1e-4);
        assert!((t.quantile(0.975) - 1.96).abs() < 0.01);
    }

    #[test]
    fn quantile_inverts_cdf() {
        for df in [1.0, 5.0, 10.0, 30.0] {
            let t = StudentT::new(df).unwrap();
            for p in [0.05, 0.25, 0.5, 0.9, 0.99] {
                let q = t.quantile(p);
                assert!((t.cdf(q) - p).abs() < 1e-8, "df={df} p={p} q={q}");
            }
        }
        // Tabulated two-sided 95% critical value for df = 10.
        assert!((StudentT::new(10.0).unwrap().quantile(0.975) - 2.228_139).abs() < 1e-5);
    }

    #[test]
    fn rejects_non_positive_df() {
        assert!(StudentT::new(0.0).is_err());
        assert!(StudentT::new(-3.0).is_err());
    }
}
