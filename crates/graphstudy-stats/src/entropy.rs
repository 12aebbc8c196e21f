//! Shannon entropy of discrete distributions and differential entropy of densities.
//!
//! Both measures are in bits (base-2 logarithms). Zero-probability terms contribute
//! nothing to the sum, which avoids evaluating `0 * log2(0)`.

use crate::numeric::integrate_trapezoidal;

/// Computes the Shannon entropy of a vector of relative frequencies.
///
/// The frequencies must be non-negative and sum to one; this is not checked. An
/// empty vector has zero entropy.
///
/// # Examples
///
/// ```
/// use graphstudy_stats::entropy::discrete_entropy;
///
/// assert_eq!(discrete_entropy(&[0.5, 0.5]), 1.0);
/// assert_eq!(discrete_entropy(&[1.0]), 0.0);
/// assert_eq!(discrete_entropy(&[]), 0.0);
/// ```
#[must_use]
pub fn discrete_entropy(frequencies: &[f64]) -> f64 {
    let sum = frequencies
        .iter()
        .filter(|&&f| f > 0.0)
        .map(|&f| f * f.log2())
        .sum::<f64>();
    // -0.0 for a single certain outcome
    sum.abs()
}

/// Computes the differential entropy of a pointwise probability density.
///
/// `density` holds `(x, p(x))` points sorted by `x`. The integral of `-p log2 p` is
/// approximated with the trapezoidal rule; non-positive densities contribute zero.
/// The density must already be normalized to unit area.
///
/// # Examples
///
/// ```
/// use graphstudy_stats::entropy::differential_entropy;
///
/// // The uniform density over [0, 4] has an entropy of log2(4) = 2 bits.
/// let uniform = [(0.0, 0.25), (2.0, 0.25), (4.0, 0.25)];
/// assert!((differential_entropy(&uniform) - 2.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn differential_entropy(density: &[(f64, f64)]) -> f64 {
    integrate_trapezoidal(density.iter().map(|&(x, p)| {
        let plog2p = if p > 0.0 { -(p * p.log2()) } else { 0.0 };
        (x, plog2p)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discrete_uniform() {
        let frequencies = [0.25; 4];
        assert!((discrete_entropy(&frequencies) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_discrete_ignores_empty_bins() {
        let frequencies = [0.0, 0.5, 0.0, 0.5, 0.0];
        assert!((discrete_entropy(&frequencies) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_discrete_is_never_negative_zero() {
        let entropy = discrete_entropy(&[0.0, 1.0]);
        assert_eq!(entropy, 0.0);
        assert!(entropy.is_sign_positive());
    }

    #[test]
    fn test_differential_of_wide_uniform_is_positive() {
        let density = (0..=100)
            .map(|i| (f64::from(i) * 0.08, 0.125))
            .collect::<Vec<_>>();
        assert!((differential_entropy(&density) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_differential_of_narrow_uniform_is_negative() {
        let density = [(0.0, 2.0), (0.25, 2.0), (0.5, 2.0)];
        assert!((differential_entropy(&density) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_differential_of_zero_density() {
        let density = [(0.0, 0.0), (1.0, 0.0)];
        assert_eq!(differential_entropy(&density), 0.0);
    }
}
