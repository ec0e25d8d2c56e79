//! Equal-width histograms.
//!
//! Bins span `[min, max]` of the data; every bin is half-open `[a, b)`
//! except the last, which also takes values equal to the maximum. A sample
//! with a single distinct value gets the range `[v - 0.5, v + 0.5]`.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StatError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// `bins + 1` ascending edges.
    pub edges: Vec<f64>,
    pub counts: Vec<u64>,
}

impl Histogram {
    pub fn new(values: &[f64], bins: usize) -> Result<Self> {
        if values.is_empty() {
            return Err(StatError::EmptySample { name: "values" });
        }
        if bins == 0 {
            return Err(StatError::invalid("bins", "must be at least 1"));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(StatError::invalid("values", format!("non-finite value {bad}")));
        }

        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins)
            .map(|i| if i == bins { hi } else { lo + width * i as f64 })
            .collect();

        let mut counts = vec![0u64; bins];
        for &v in values {
            let mut idx = (((v - lo) / width) as usize).min(bins - 1);
            // Float division can land one bin off near an edge.
            if v < edges[idx] {
                idx -= 1;
            } else if idx + 1 < bins && v >= edges[idx + 1] {
                idx += 1;
            }
            counts[idx] += 1;
        }

        Ok(Self { edges, counts })
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn bin_width(&self) -> f64 {
        match (self.edges.first(), self.edges.last()) {
            (Some(lo), Some(hi)) if self.bins() > 0 => (hi - lo) / self.bins() as f64,
            _ => 0.0,
        }
    }

    pub fn centers(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect()
    }

    /// Counts normalised so the bars integrate to one.
    pub fn density(&self) -> Vec<f64> {
        let norm = self.total() as f64 * self.bin_width();
        self.counts.iter().map(|&c| c as f64 / norm).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_bin_is_closed() {
        let h = Histogram::new(&[0.0, 1.0, 2.0, 3.0, 4.0], 4).unwrap();
        assert_eq!(h.edges, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(h.counts, vec![1, 1, 1, 2]);
        assert_eq!(h.total(), 5);
    }

    #[test]
    fn density_integrates_to_one() {
        let values: Vec<f64> = (0..97).map(|i| (i as f64 * 0.37).sin()).collect();
        let h = Histogram::new(&values, 20).unwrap();
        let area: f64 = h.density().iter().map(|d| d * h.bin_width()).sum();
        assert!((area - 1.0).abs() < 1e-12);
        assert_eq!(h.centers().len(), 20);
    }

    #[test]
    fn constant_sample_gets_unit_range() {
        let h = Histogram::new(&[2.0, 2.0, 2.0], 2).unwrap();
        assert_eq!(h.edges, vec![1.5, 2.0, 2.5]);
        assert_eq!(h.counts, vec![0, 3]);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Histogram::new(&[], 10).is_err());
        assert!(Histogram::new(&[1.0], 0).is_err());
        assert!(Histogram::new(&[1.0, f64::INFINITY], 3).is_err());
    }
}
