use serde::{Deserialize, Serialize};

use crate::{kernel::Kernel, output::Destination};

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("bin width and bin count cannot both be set for the boxed kernel")]
    WidthAndBins,
    #[display("lower bound {lower} exceeds upper bound {upper}")]
    InvertedRange { lower: f64, upper: f64 },
    #[display("range bound {value} is not finite")]
    NonFiniteBound { value: f64 },
    #[display("width must be finite and positive, got {width}")]
    InvalidWidth { width: f64 },
    #[display("bin count must be positive")]
    ZeroBins,
    #[display("number of evaluation points must be positive")]
    ZeroPoints,
}

/// Parameters that control how the [`Analyzer`](crate::analyzer::Analyzer) treats a sample.
///
/// The configuration stores *how* to analyze, never the data itself. Every field is a
/// plain value so a configuration can be echoed as JSON or loaded from a file; use
/// [`AnalyzerConfig::validate`] before relying on one that was built by hand.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AnalyzerConfig {
    /// Estimator to apply.
    pub kernel: Kernel,
    /// Smallest event to consider (inclusive).
    pub lower: Option<f64>,
    /// Largest event to consider (inclusive).
    pub upper: Option<f64>,
    /// Histogram bin width or Gaussian filter width.
    pub width: Option<f64>,
    /// Histogram bin count.
    pub bins: Option<usize>,
    /// Number of evaluation intervals of the Gaussian kernel (adaptive if unset).
    pub points: Option<usize>,
    /// Where the tabular output goes.
    pub output: Destination,
}

impl AnalyzerConfig {
    #[must_use]
    pub fn new(kernel: Kernel) -> Self {
        Self {
            kernel,
            ..Self::default()
        }
    }

    /// Checks the configuration for consistency.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite, if `lower > upper`, if the width is
    /// not finite and positive, if `bins` or `points` is zero, or if both `width` and
    /// `bins` are set for the [`Kernel::Boxed`] estimator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for value in self.lower.into_iter().chain(self.upper) {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteBound { value });
            }
        }
        if let (Some(lower), Some(upper)) = (self.lower, self.upper)
            && lower > upper
        {
            return Err(ConfigError::InvertedRange { lower, upper });
        }
        if let Some(width) = self.width
            && !(width.is_finite() && width > 0.0)
        {
            return Err(ConfigError::InvalidWidth { width });
        }
        if self.bins == Some(0) {
            return Err(ConfigError::ZeroBins);
        }
        if self.points == Some(0) {
            return Err(ConfigError::ZeroPoints);
        }
        if self.kernel == Kernel::Boxed && self.width.is_some() && self.bins.is_some() {
            return Err(ConfigError::WidthAndBins);
        }
        Ok(())
    }
}
