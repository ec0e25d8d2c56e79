//! Percentiles with linear interpolation between order statistics.
//!
//! For `n` sorted values the p-th percentile sits at rank `p/100 · (n − 1)`;
//! a fractional rank interpolates between its two neighbours.

use crate::error::{Result, StatError};

/// Percentile of an already sorted slice. `p` is in `[0, 100]`.
///
/// Returns `NaN` for an empty slice.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted[0];
    }
    let rank = (p / 100.0).clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = rank - lo as f64;
    sorted[lo] * (1.0 - frac) + sorted[hi] * frac
}

/// Sort a copy of `values` and return the requested percentiles, in order.
pub fn percentiles(values: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(StatError::EmptySample { name: "values" });
    }
    if let Some(&p) = ps.iter().find(|p| !(0.0..=100.0).contains(*p)) {
        return Err(StatError::invalid(
            "percentile",
            format!("{p} is outside [0, 100]"),
        ));
    }
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(StatError::NonFiniteStatistic { index, value });
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(ps.iter().map(|&p| percentile_sorted(&sorted, p)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_between_order_statistics() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        // rank = 0.25 * 3 = 0.75
        assert!((percentile_sorted(&sorted, 25.0) - 1.75).abs() < 1e-12);
        assert!((percentile_sorted(&sorted, 50.0) - 2.5).abs() < 1e-12);
        assert_eq!(percentile_sorted(&sorted, 0.0), 1.0);
        assert_eq!(percentile_sorted(&sorted, 100.0), 4.0);
    }

    #[test]
    fn single_value_is_every_percentile() {
        assert_eq!(percentile_sorted(&[7.0], 5.0), 7.0);
        assert_eq!(percentile_sorted(&[7.0], 95.0), 7.0);
    }

    #[test]
    fn empty_slice_is_nan() {
        assert!(percentile_sorted(&[], 50.0).is_nan());
    }

    #[test]
    fn percentiles_sorts_a_copy() {
        let values = [4.0, 1.0, 3.0, 2.0];
        let out = percentiles(&values, &[5.0, 95.0]).unwrap();
        // rank 0.15 and 2.85
        assert!((out[0] - 1.15).abs() < 1e-12);
        assert!((out[1] - 3.85).abs() < 1e-12);
        assert_eq!(values, [4.0, 1.0, 3.0, 2.0]);
    }

    #[test]
    fn percentiles_rejects_bad_input() {
        assert!(percentiles(&[], &[50.0]).is_err());
        assert!(percentiles(&[1.0, 2.0], &[101.0]).is_err());
        assert!(percentiles(&[1.0, f64::NAN], &[50.0]).is_err());
    }
}
