use serde::{Deserialize, Serialize};

use crate::sample::Sample;

/// One-pass summary of a sample.
///
/// Holds the number of events together with their extremes, arithmetic mean and
/// root mean square. Standard deviations are derived from the mean and RMS on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The number of events.
    pub count: usize,
    /// The smallest event.
    pub min: f64,
    /// The largest event.
    pub max: f64,
    /// The arithmetic mean of the events.
    pub mean: f64,
    /// The root mean square of the events.
    pub rms: f64,
}

impl Summary {
    /// Summarizes a sample in a single pass.
    ///
    /// # Returns
    ///
    /// * `Some(Summary)` - if the sample contains at least one event
    /// * `None` - if the sample is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use graphstudy_stats::summary::Summary;
    /// let summary = Summary::from_sample(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(summary.count, 3);
    /// assert_eq!(summary.min, 1.0);
    /// assert_eq!(summary.max, 3.0);
    /// assert_eq!(summary.mean, 2.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sample<S>(sample: &S) -> Option<Self>
    where
        S: Sample + ?Sized,
    {
        let mut count = 0_usize;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for x in sample.values() {
            count += 1;
            sum += x;
            sum_sq += x * x;
            min = min.min(x);
            max = max.max(x);
        }
        if count == 0 {
            return None;
        }
        let n = count as f64;
        Some(Self {
            count,
            min,
            max,
            mean: sum / n,
            rms: (sum_sq / n).sqrt(),
        })
    }

    /// Returns the width `max - min` of the observed range.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Returns the population standard deviation.
    ///
    /// Only meaningful if `rms >= |mean|`, which holds up to rounding for any summary
    /// produced by [`Summary::from_sample`]. Tiny negative variances caused by
    /// cancellation are clamped to zero.
    #[must_use]
    pub fn stdevp(&self) -> f64 {
        (self.rms * self.rms - self.mean * self.mean).max(0.0).sqrt()
    }

    /// Returns the sample standard deviation (with Bessel's correction).
    ///
    /// The result is NaN for a single event.
    ///
    /// # Examples
    ///
    /// ```
    /// # use graphstudy_stats::summary::Summary;
    /// let summary = Summary::from_sample(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    /// assert!((summary.stdevp() - 2.0).abs() < 1e-12);
    /// assert!((summary.stdev() - 2.138_089_935_299_395).abs() < 1e-12);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn stdev(&self) -> f64 {
        let n = self.count as f64;
        self.stdevp() * (n / (n - 1.0)).sqrt()
    }
}
