use rand::Rng;
use rand_distr::Distribution;
use serde::{Deserialize, Serialize};

use super::{DistributionError, Sampling};
use crate::special::ln_choose;

/// A distribution over the non-negative integers.
pub trait DiscreteDistribution: Send + Sync {
    fn name(&self) -> String;
    fn pmf(&self, k: u64) -> f64;
    fn cdf(&self, k: u64) -> f64;
    fn mean(&self) -> f64;
    fn variance(&self) -> f64;
}

/// Largest `n` for which [`Binomial::pmf_table`] builds a table.
pub const MAX_TABLE_TRIALS: u64 = 10_000;

/// Number of successes in `n` independent trials with success probability `p`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Binomial {
    n: u64,
    p: f64,
}

/// One row of a probability table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PmfRow {
    pub k: u64,
    pub probability: f64,
}

impl Binomial {
    pub fn new(n: u64, p: f64) -> Result<Self, DistributionError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(DistributionError::InvalidParameter {
                distribution: "Binomial",
                name: "p",
                value: p,
                reason: "must lie in [0, 1]",
            });
        }
        Ok(Self { n, p })
    }

    pub fn trials(&self) -> u64 {
        self.n
    }

    pub fn success_probability(&self) -> f64 {
        self.p
    }

    /// P(X = k) for every k in `0..=n`. Fails when `n` exceeds
    /// [`MAX_TABLE_TRIALS`].
    pub fn pmf_table(&self) -> Result<Vec<PmfRow>, DistributionError> {
        if self.n > MAX_TABLE_TRIALS {
            return Err(DistributionError::InvalidParameter {
                distribution: "Binomial",
                name: "n",
                value: self.n as f64,
                reason: "is too large for a probability table (at most 10000)",
            });
        }
        Ok((0..=self.n)
            .map(|k| PmfRow {
                k,
                probability: self.pmf(k),
            })
            .collect())
    }
}

impl DiscreteDistribution for Binomial {
    fn name(&self) -> String {
        format!("Binomial(n={}, p={})", self.n, self.p)
    }

    fn pmf(&self, k: u64) -> f64 {
        if k > self.n {
            return 0.0;
        }
        // Degenerate p: all mass on one end, and 0^0 = 1.
        if self.p == 0.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        if self.p == 1.0 {
            return if k == self.n { 1.0 } else { 0.0 };
        }
        let failures = (self.n - k) as f64;
        (ln_choose(self.n, k) + k as f64 * self.p.ln() + failures * (-self.p).ln_1p()).exp()
    }

    fn cdf(&self, k: u64) -> f64 {
        let total: f64 = (0..=k.min(self.n)).map(|i| self.pmf(i)).sum();
        total.min(1.0)
    }

    fn mean(&self) -> f64 {
        self.n as f64 * self.p
    }

    fn variance(&self) -> f64 {
        self.n as f64 * self.p * (1.0 - self.p)
    }
}

impl Sampling for Binomial {
    fn draw<R: Rng>(&self, rng: &mut R) -> f64 {
        match rand_distr::Binomial::new(self.n, self.p) {
            Ok(dist) => dist.sample(rng) as f64,
            Err(_) => f64::NAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fair_coin_table() {
        let coin = Binomial::new(5, 0.5).unwrap();
        let expected = [1.0, 5.0, 10.0, 10.0, 5.0, 1.0].map(|c| c / 32.0);
        let table = coin.pmf_table().unwrap();
        assert_eq!(table.len(), 6);
        for (row, want) in table.iter().zip(expected) {
            assert!((row.probability - want).abs() < 1e-12, "{row:?}");
        }
    }

    #[test]
    fn table_sums_to_one() {
        let climbs = Binomial::new(10, 0.7).unwrap();
        let total: f64 = climbs.pmf_table().unwrap().iter().map(|r| r.probability).sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!((climbs.cdf(10) - 1.0).abs() < 1e-12);
        assert!((climbs.mean() - 7.0).abs() < 1e-12);
        assert!((climbs.variance() - 2.1).abs() < 1e-12);
    }

    #[test]
    fn most_likely_climb_count_is_seven() {
        let climbs = Binomial::new(10, 0.7).unwrap();
        let mode = climbs
            .pmf_table()
            .unwrap()
            .into_iter()
            .max_by(|a, b| a.probability.total_cmp(&b.probability))
            .map(|r| r.k);
        assert_eq!(mode, Some(7));
        // C(10,7) 0.7^7 0.3^3
        assert!((climbs.pmf(7) - 0.266_827_932).abs() < 1e-9);
    }

    #[test]
    fn degenerate_probabilities() {
        let never = Binomial::new(4, 0.0).unwrap();
        assert_eq!(never.pmf(0), 1.0);
        assert_eq!(never.pmf(1), 0.0);
        let always = Binomial::new(4, 1.0).unwrap();
        assert_eq!(always.pmf(4), 1.0);
        assert_eq!(always.pmf(3), 0.0);
        let empty = Binomial::new(0, 0.3).unwrap();
        assert_eq!(empty.pmf_table().unwrap().len(), 1);
        assert_eq!(empty.pmf(0), 1.0);
    }

    #[test]
    fn table_refuses_huge_trial_counts() {
        let huge = Binomial::new(u64::MAX, 0.5).unwrap();
        assert!(matches!(
            huge.pmf_table(),
            Err(DistributionError::InvalidParameter { name: "n", .. })
        ));
        let largest = Binomial::new(MAX_TABLE_TRIALS, 0.5).unwrap();
        assert_eq!(largest.pmf_table().unwrap().len(), MAX_TABLE_TRIALS as usize + 1);
    }

    #[test]
    fn rejects_probability_outside_unit_interval() {
        assert!(Binomial::new(3, 1.2).is_err());
        assert!(Binomial::new(3, -0.1).is_err());
        assert!(Binomial::new(3, f64::NAN).is_err());
    }
}
