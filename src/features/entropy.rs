//! Approximate entropy of a scalar series.
//!
//! Approximate entropy (ApEn) measures how predictable a series is: it
//! compares how often patterns of length `m` that are close to each other
//! stay close when extended to length `m + 1`. Lower values indicate more
//! regularity.
//!
//! This variant works on correlation integrals directly:
//!
//! ```text
//! ApEn(m, r) = ln( C^m(r) / C^{m+1}(r) )
//! ```
//!
//! where `C^k(r)` is the mean, over every pattern of length `k`, of the
//! fraction of patterns (self-match included) within Chebyshev distance `r`.
//!
//! # Example
//!
//! ```
//! use anofox_apen::features::entropy::approximate_entropy;
//!
//! let constant = vec![5.0; 10];
//! let apen = approximate_entropy(&constant, 3, 0.5).unwrap();
//! assert_eq!(apen, 0.0);
//! ```

use crate::error::{ApenError, Result};

/// Floor substituted for a non-positive `C^{m+1}(r)`.
///
/// This is a fixed numerical guard, not a statistical correction; the value
/// is kept as-is so outputs stay comparable with existing deployments.
pub const DEGENERATE_FLOOR: f64 = 1e-7;

/// Returns the approximate entropy of the series.
///
/// # Arguments
/// * `series` - Input samples, oldest first
/// * `m` - Pattern length
/// * `r` - Similarity radius; patterns match when every component differs by at most `r`
///
/// # Errors
/// * [`ApenError::InvalidParameter`] if `m == 0` or `r` is not a finite value > 0
/// * [`ApenError::InsufficientData`] if `series.len() < 2 * m`
pub fn approximate_entropy(series: &[f64], m: usize, r: f64) -> Result<f64> {
    if m == 0 {
        return Err(ApenError::InvalidParameter(
            "pattern length must be positive".to_string(),
        ));
    }
    if r <= 0.0 || !r.is_finite() {
        return Err(ApenError::InvalidParameter(format!(
            "similarity radius must be a finite value > 0.0, received {}",
            r
        )));
    }

    if m > series.len() / 2 {
        return Err(ApenError::InsufficientData {
            needed: m.saturating_mul(2),
            got: series.len(),
        });
    }

    let c_m = correlation_integral(series, m, r);
    let c_m1 = correlation_integral(series, m + 1, r);

    Ok(entropy_ratio(c_m, c_m1))
}

/// Returns `C^m(r)`: the average fraction of length-`m` patterns within
/// distance `r` of each pattern, self-matches included.
///
/// Returns 0.0 when the series is shorter than `m` or `m` is zero.
pub fn correlation_integral(series: &[f64], m: usize, r: f64) -> f64 {
    if m == 0 || series.len() < m {
        return 0.0;
    }

    let n_patterns = series.len() - m + 1;
    let mut sum = 0.0;

    for i in 0..n_patterns {
        let pattern = &series[i..i + m];
        let mut count = 0usize;
        for j in 0..n_patterns {
            if bounded_distance(pattern, &series[j..j + m], r) <= r {
                count += 1;
            }
        }
        sum += count as f64 / n_patterns as f64;
    }

    sum / n_patterns as f64
}

/// Chebyshev distance between two patterns, abandoned once it exceeds `r`.
///
/// The result is the exact maximum componentwise difference when it is
/// `<= r`. Otherwise it is only guaranteed to be some value `> r`, so it must
/// not be reported as a distance magnitude.
pub fn bounded_distance(a: &[f64], b: &[f64], r: f64) -> f64 {
    let mut max = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        let d = (x - y).abs();
        if d > max {
            max = d;
            if max > r {
                return max;
            }
        }
    }
    max
}

/// Returns `ln(c_m / c_m1)`, flooring a non-positive `c_m1` at
/// [`DEGENERATE_FLOOR`].
pub fn entropy_ratio(c_m: f64, c_m1: f64) -> f64 {
    let denominator = if c_m1 > 0.0 { c_m1 } else { DEGENERATE_FLOOR };
    (c_m / denominator).ln()
}
