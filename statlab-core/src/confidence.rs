//! Percentile confidence intervals over a bootstrap statistic set.
//!
//! For an x% interval, (100 − x)/2 percent of the sorted statistics is trimmed
//! from each tail; the trim points are the interval's endpoints.

use serde::{Deserialize, Serialize};

use crate::bootstrap::{bootstrap_statistics, BootstrapConfig};
use crate::error::{Result, StatError};
use crate::percentile::percentile_sorted;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Confidence level in percent, `0 < level < 100`.
    pub level: f64,
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// The two percentiles this interval trims at, `(lower, upper)`.
    pub fn trim_percentiles(level: f64) -> (f64, f64) {
        let lower = (100.0 - level) / 2.0;
        (lower, 100.0 - lower)
    }
}

/// Two-sided percentile interval at `level` percent.
///
/// Needs at least two finite statistics and `0 < level < 100`.
pub fn confidence_interval(statistics: &[f64], level: f64) -> Result<ConfidenceInterval> {
    if !(level > 0.0 && level < 100.0) {
        return Err(StatError::invalid(
            "confidence_level",
            format!("{level} is outside (0, 100)"),
        ));
    }
    if statistics.len() < 2 {
        return Err(StatError::invalid(
            "statistics",
            format!(
                "need at least 2 values for an interval, got {}",
                statistics.len()
            ),
        ));
    }
    if let Some((index, &value)) = statistics.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(StatError::NonFiniteStatistic { index, value });
    }

    let mut sorted = statistics.to_vec();
    sorted.sort_by(f64::total_cmp);

    let (lo_pct, hi_pct) = ConfidenceInterval::trim_percentiles(level);
    Ok(ConfidenceInterval {
        level,
        lower: percentile_sorted(&sorted, lo_pct),
        upper: percentile_sorted(&sorted, hi_pct),
    })
}

/// Resample `data`, reduce each draw with `reducer`, and trim the result to an
/// interval. Returns the statistic set alongside the interval.
pub fn bootstrap_confidence_interval<F>(
    data: &[f64],
    reducer: F,
    config: &BootstrapConfig,
    level: f64,
) -> Result<(Vec<f64>, ConfidenceInterval)>
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    // Validate the level before paying for the resampling.
    if !(level > 0.0 && level < 100.0) {
        return Err(StatError::invalid(
            "confidence_level",
            format!("{level} is outside (0, 100)"),
        ));
    }
    let statistics = bootstrap_statistics(data, config, reducer)?;
    let interval = confidence_interval(&statistics, level)?;
    Ok((statistics, interval))
}
