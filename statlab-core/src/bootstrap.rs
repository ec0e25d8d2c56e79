//! Bootstrap resampling: draw with replacement, reduce, repeat.
//!
//! Each draw `i` gets its own generator derived from `(seed, "bootstrap", i)`,
//! so the statistic set is a pure function of the input, the config and the
//! reducer. Sequential and rayon-parallel evaluation produce identical output.

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StatError};
use crate::profiling::ProfileScope;
use crate::rng::RngHierarchy;
use crate::sample::Statistic;

/// RNG stream name for bootstrap draws.
pub const BOOTSTRAP_STREAM: &str = "bootstrap";

// ─── Configuration ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Number of resamples R (default 1000).
    pub n_resamples: usize,
    /// Size of each resample; `None` means the size of the input sample.
    pub resample_size: Option<usize>,
    /// RNG seed for reproducibility.
    pub seed: u64,
    /// Evaluate draws on the rayon pool.
    pub parallel: bool,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            n_resamples: 1000,
            resample_size: None,
            seed: 42,
            parallel: false,
        }
    }
}

impl BootstrapConfig {
    pub fn with_resamples(mut self, n_resamples: usize) -> Self {
        self.n_resamples = n_resamples;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check the config against a sample and return the effective resample size.
    fn validate(&self, sample: &[f64]) -> Result<usize> {
        if sample.is_empty() {
            return Err(StatError::EmptySample { name: "sample" });
        }
        if self.n_resamples == 0 {
            return Err(StatError::invalid("n_resamples", "must be at least 1"));
        }
        match self.resample_size {
            Some(0) => Err(StatError::invalid("resample_size", "must be at least 1")),
            Some(size) => Ok(size),
            None => Ok(sample.len()),
        }
    }
}

// ─── Resampling ──────────────────────────────────────────────────────

/// One draw of `size` values, uniformly and with replacement, from `sample`.
pub fn resample_with_replacement<R: Rng>(
    sample: &[f64],
    size: usize,
    rng: &mut R,
) -> Vec<f64> {
    let mut out = Vec::with_capacity(size);
    resample_into(sample, size, rng, &mut out);
    out
}

fn resample_into<R: Rng>(sample: &[f64], size: usize, rng: &mut R, out: &mut Vec<f64>) {
    out.clear();
    let n = sample.len();
    out.extend((0..size).map(|_| sample[rng.gen_range(0..n)]));
}

/// Bootstrap statistic set: `config.n_resamples` values, the i-th being
/// `reducer` applied to draw i.
///
/// Fails on an empty sample, `n_resamples == 0`, an explicit resample size of
/// zero, or a non-finite reducer output.
pub fn bootstrap_statistics<F>(
    sample: &[f64],
    config: &BootstrapConfig,
    reducer: F,
) -> Result<Vec<f64>>
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    let size = config.validate(sample)?;
    let hierarchy = RngHierarchy::new(config.seed);
    let _scope = ProfileScope::with_detail("bootstrap_statistics", || {
        format!(
            "{} draws x {size} values, parallel={}",
            config.n_resamples, config.parallel
        )
    });

    let draw = |buf: &mut Vec<f64>, index: usize| -> Result<f64> {
        let mut rng = hierarchy.rng_for(BOOTSTRAP_STREAM, index as u64);
        resample_into(sample, size, &mut rng, buf);
        let value = reducer(buf.as_slice());
        if value.is_finite() {
            Ok(value)
        } else {
            Err(StatError::NonFiniteStatistic { index, value })
        }
    };

    if config.parallel {
        (0..config.n_resamples)
            .into_par_iter()
            .map_init(|| Vec::with_capacity(size), |buf, i| draw(buf, i))
            .collect()
    } else {
        let mut buf = Vec::with_capacity(size);
        (0..config.n_resamples)
            .map(|i| draw(&mut buf, i))
            .collect()
    }
}

/// [`bootstrap_statistics`] with a named reducer.
pub fn bootstrap_statistic(
    sample: &[f64],
    config: &BootstrapConfig,
    statistic: Statistic,
) -> Result<Vec<f64>> {
    bootstrap_statistics(sample, config, |draw| statistic.apply(draw))
}

/// Keep the resampled draws themselves instead of reducing them.
///
/// Draw `i` here is the same draw `i` that [`bootstrap_statistics`] reduces
/// for the same config, so the two can be cross-checked.
pub fn draw_bootstrap_samples(
    sample: &[f64],
    count: usize,
    config: &BootstrapConfig,
) -> Result<Vec<Vec<f64>>> {
    let size = config.validate(sample)?;
    if count == 0 {
        return Err(StatError::invalid("count", "must be at least 1"));
    }
    let hierarchy = RngHierarchy::new(config.seed);

    Ok((0..count)
        .map(|i| {
            let mut rng = hierarchy.rng_for(BOOTSTRAP_STREAM, i as u64);
            resample_with_replacement(sample, size, &mut rng)
        })
        .collect())
}

/// Plain single-generator loop for callers that own their RNG.
pub fn bootstrap_statistics_with_rng<F, R>(
    sample: &[f64],
    n_resamples: usize,
    resample_size: usize,
    reducer: F,
    rng: &mut R,
) -> Result<Vec<f64>>
where
    F: Fn(&[f64]) -> f64,
    R: Rng,
{
    if sample.is_empty() {
        return Err(StatError::EmptySample { name: "sample" });
    }
    if n_resamples == 0 {
        return Err(StatError::invalid("n_resamples", "must be at least 1"));
    }
    if resample_size == 0 {
        return Err(StatError::invalid("resample_size", "must be at least 1"));
    }

    let mut buf = Vec::with_capacity(resample_size);
    let mut stats = Vec::with_capacity(n_resamples);
    for index in 0..n_resamples {
        resample_into(sample, resample_size, rng, &mut buf);
        let value = reducer(buf.as_slice());
        if !value.is_finite() {
            return Err(StatError::NonFiniteStatistic { index, value });
        }
        stats.push(value);
    }
    Ok(stats)
}
