//! Standard error by simulation.
//!
//! Draw `sample_count` samples of `sample_size` values from
//! Normal(population_mean, population_std), take each sample's mean, and
//! divide the (population) standard deviation of those means by
//! `sqrt(sample_size)`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::distributions::{Normal, Sampling};
use crate::error::{Result, StatError};
use crate::profiling::ProfileScope;
use crate::sample::{mean, std_dev};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingSimulation {
    /// Mean of each simulated sample, in draw order.
    pub sample_means: Vec<f64>,
    /// Population standard deviation (ddof = 0) of `sample_means`.
    pub sample_means_std: f64,
    /// `sample_means_std / sqrt(sample_size)`.
    pub standard_error: f64,
    pub sample_size: usize,
    /// Theoretical spread of the sample means, `population_std / sqrt(sample_size)`.
    pub expected_means_std: f64,
}

pub fn simulate_sampling<R: Rng>(
    population_mean: f64,
    population_std: f64,
    sample_size: usize,
    sample_count: usize,
    rng: &mut R,
) -> Result<SamplingSimulation> {
    if sample_size == 0 {
        return Err(StatError::invalid("sample_size", "must be at least 1"));
    }
    if sample_count == 0 {
        return Err(StatError::invalid("sample_count", "must be at least 1"));
    }
    let population = Normal::new(population_mean, population_std)?;

    let _scope = ProfileScope::with_detail("simulate_sampling", || {
        format!("{sample_count} samples x {sample_size} values")
    });

    let mut buf = Vec::with_capacity(sample_size);
    let sample_means: Vec<f64> = (0..sample_count)
        .map(|_| {
            buf.clear();
            buf.extend((0..sample_size).map(|_| population.draw(rng)));
            mean(&buf)
        })
        .collect();

    let sample_means_std = std_dev(&sample_means, 0);
    let root_n = (sample_size as f64).sqrt();

    Ok(SamplingSimulation {
        standard_error: sample_means_std / root_n,
        sample_means_std,
        sample_means,
        sample_size,
        expected_means_std: population_std / root_n,
    })
}
