//! Histogram binning policies
//!
//! A binning policy decides how wide the bins of a [`Histogram`](crate::histogram::Histogram)
//! are and, consequently, how many of them are needed to cover the data.
//!
//! - [`Binning::FixedWidth`]: the caller chooses the bin width
//! - [`Binning::FixedCount`]: the caller chooses the number of bins
//! - [`Binning::ScottNormalReference`]: the width is derived from the sample size and
//!   standard deviation by [Scott's normal reference rule][scott]
//!
//! [scott]: https://en.wikipedia.org/wiki/Histogram#Scott's_normal_reference_rule
//!
//! # Examples
//!
//! ```
//! use graphstudy_stats::binning::{Binning, binwidth_scott_normal_reference};
//!
//! assert_eq!(Binning::ScottNormalReference.to_string(), "scott-normal-reference");
//! assert_eq!("fixed-count".parse::<Binning>().unwrap(), Binning::FixedCount);
//!
//! let width = binwidth_scott_normal_reference(1000, 1.0);
//! assert!((width - 0.35).abs() < 1e-12);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Rule used to pick the width and count of histogram bins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Binning {
    /// Explicit bin width chosen by the caller.
    #[display("fixed-width")]
    FixedWidth,
    /// Explicit bin count chosen by the caller.
    #[display("fixed-count")]
    FixedCount,
    /// Bin width chosen by Scott's normal reference rule.
    #[display("scott-normal-reference")]
    ScottNormalReference,
}

impl Binning {
    /// Returns all binning policies in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [
            Self::FixedWidth,
            Self::FixedCount,
            Self::ScottNormalReference,
        ]
    }

    /// Returns the stable name of the policy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FixedWidth => "fixed-width",
            Self::FixedCount => "fixed-count",
            Self::ScottNormalReference => "scott-normal-reference",
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unknown binning policy '{name}'")]
pub struct ParseBinningError {
    #[error(not(source))]
    name: String,
}

impl FromStr for Binning {
    type Err = ParseBinningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|binning| binning.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseBinningError { name: s.to_owned() })
    }
}

/// Returns the bin width suggested by Scott's normal reference rule.
///
/// The width is `3.5 * stdev / n^(1/3)`.
///
/// # Panics
///
/// Panics if `n == 0`. A non-positive `stdev` yields a non-positive width, which
/// callers have to treat as degenerate data.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn binwidth_scott_normal_reference(n: usize, stdev: f64) -> f64 {
    assert!(n > 0, "Scott's rule needs at least one event");
    3.5 * stdev / (n as f64).cbrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Binning::FixedWidth.name(), "fixed-width");
        assert_eq!(Binning::FixedCount.name(), "fixed-count");
        assert_eq!(
            Binning::ScottNormalReference.name(),
            "scott-normal-reference"
        );
        for binning in Binning::all() {
            assert_eq!(binning.to_string(), binning.name());
        }
    }

    #[test]
    fn test_parse_round_trips_names() {
        for binning in Binning::all() {
            assert_eq!(binning.name().parse::<Binning>().unwrap(), binning);
        }
        assert_eq!(
            "Fixed-Width".parse::<Binning>().unwrap(),
            Binning::FixedWidth
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "sturges".parse::<Binning>().unwrap_err();
        assert_eq!(err.to_string(), "unknown binning policy 'sturges'");
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&Binning::ScottNormalReference).unwrap();
        assert_eq!(json, "\"scott-normal-reference\"");
    }

    #[test]
    fn test_scott_rule_shrinks_with_sample_size() {
        let small = binwidth_scott_normal_reference(8, 2.0);
        let large = binwidth_scott_normal_reference(8000, 2.0);
        assert!((small - 3.5).abs() < 1e-12);
        assert!((large - 0.35).abs() < 1e-12);
    }
}
