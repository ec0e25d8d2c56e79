//! Descriptive statistics over a numeric sample, and the named reducers
//! that config files can refer to.
//!
//! The free functions return `NaN` for inputs they cannot summarize (an empty
//! slice, or fewer than `ddof + 1` values). Callers that must reject such input
//! check for finiteness, which is how the bootstrap catches a bad reducer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::percentile::percentile_sorted;

/// Arithmetic mean, kept within `[min, max]` of the input.
///
/// Summation rounding can land a few ulps outside the extremes (three copies
/// of `0.1` sum to a mean of `0.10000000000000002`); the result is pulled back
/// onto the nearer extreme.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let (sum, lo, hi) = values.iter().fold(
        (0.0, f64::INFINITY, f64::NEG_INFINITY),
        |(sum, lo, hi), &v| (sum + v, lo.min(v), hi.max(v)),
    );
    let m = sum / values.len() as f64;
    if m < lo {
        lo
    } else if m > hi {
        hi
    } else {
        m
    }
}

/// Variance with `ddof` delta degrees of freedom (0 = population, 1 = sample).
pub fn variance(values: &[f64], ddof: usize) -> f64 {
    let n = values.len();
    if n <= ddof {
        return f64::NAN;
    }
    let m = mean(values);
    values.iter().map(|&v| (v - m).powi(2)).sum::<f64>() / (n - ddof) as f64
}

/// Standard deviation with `ddof` delta degrees of freedom.
pub fn std_dev(values: &[f64], ddof: usize) -> f64 {
    variance(values, ddof).sqrt()
}

pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    percentile_sorted(&sorted, 50.0)
}

pub fn min(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

pub fn max(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// A named reducer from a sample to one number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    Mean,
    Median,
    /// Population standard deviation (ddof = 0).
    StdDev,
    /// Population variance (ddof = 0).
    Variance,
    Min,
    Max,
}

impl Statistic {
    pub const ALL: [Statistic; 6] = [
        Statistic::Mean,
        Statistic::Median,
        Statistic::StdDev,
        Statistic::Variance,
        Statistic::Min,
        Statistic::Max,
    ];

    pub fn apply(self, values: &[f64]) -> f64 {
        match self {
            Statistic::Mean => mean(values),
            Statistic::Median => median(values),
            Statistic::StdDev => std_dev(values, 0),
            Statistic::Variance => variance(values, 0),
            Statistic::Min => min(values),
            Statistic::Max => max(values),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Statistic::Mean => "mean",
            Statistic::Median => "median",
            Statistic::StdDev => "std_dev",
            Statistic::Variance => "variance",
            Statistic::Min => "min",
            Statistic::Max => "max",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Statistic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Statistic::ALL
            .into_iter()
            .find(|stat| stat.name() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Statistic::ALL.iter().map(|s| s.name()).collect();
                format!("unknown statistic '{s}'. Valid: {}", valid.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCORES: [f64; 10] = [85.0, 90.0, 78.0, 92.0, 88.0, 75.0, 84.0, 82.0, 89.0, 91.0];

    #[test]
    fn mean_of_scores() {
        assert!((mean(&SCORES) - 85.4).abs() < 1e-12);
    }

    #[test]
    fn mean_never_rounds_past_the_extremes() {
        assert_eq!(mean(&[0.1, 0.1, 0.1]), 0.1);
        assert_eq!(variance(&[0.1, 0.1, 0.1], 0), 0.0);
        let m = mean(&[0.1, 0.2, 0.3]);
        assert!((0.1..=0.3).contains(&m));
        assert!(mean(&[f64::NAN]).is_nan());
    }

    #[test]
    fn population_and_sample_variance() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((variance(&v, 0) - 4.0).abs() < 1e-12);
        assert!((std_dev(&v, 0) - 2.0).abs() < 1e-12);
        assert!((variance(&v, 1) - 32.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn median_even_and_odd() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn empty_input_is_nan() {
        assert!(mean(&[]).is_nan());
        assert!(median(&[]).is_nan());
        assert!(min(&[]).is_nan());
        assert!(variance(&[1.0], 1).is_nan());
    }

    #[test]
    fn statistic_round_trips_through_name() {
        for stat in Statistic::ALL {
            assert_eq!(stat.name().parse::<Statistic>(), Ok(stat));
        }
        assert!("mode".parse::<Statistic>().is_err());
    }

    #[test]
    fn statistic_apply_matches_free_functions() {
        assert_eq!(Statistic::Mean.apply(&SCORES), mean(&SCORES));
        assert_eq!(Statistic::Min.apply(&SCORES), 75.0);
        assert_eq!(Statistic::Max.apply(&SCORES), 92.0);
    }
}
