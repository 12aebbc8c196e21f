use tracing::debug;

use crate::{
    binning::{Binning, binwidth_scott_normal_reference},
    entropy::discrete_entropy,
    sample::Sample,
    summary::Summary,
};

/// Largest number of bins a histogram may have.
pub const MAX_BINCOUNT: usize = 1 << 24;

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum HistogramError {
    #[display("cannot build a histogram of an empty sample")]
    EmptySample,
    #[display("{bincount} bins exceed the limit of {MAX_BINCOUNT}")]
    TooManyBins { bincount: f64 },
}

/// A dense histogram of relative frequencies.
///
/// The histogram is built from a sample in two passes: the first pass collects a
/// [`Summary`], the second assigns every event to one of `bincount()` equally wide
/// bins. The events themselves are not retained, only the binned frequencies.
///
/// Bins are laid out so that the first bin is centered on the smallest event and the
/// last bin contains the largest one, i.e. the histogram starts half a bin width below
/// the minimum. If all events are equal, the histogram has a single bin of width 1
/// centered on that value.
///
/// The frequencies are relative (each bin's count divided by the number of events),
/// so they sum to one.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Relative frequency per bin.
    frequencies: Vec<f64>,
    /// Summary collected during the first pass.
    summary: Summary,
    /// Lower edge of the first bin (not necessarily the minimum).
    start: f64,
    /// Width of every bin.
    binwidth: f64,
    /// Entropy of the frequencies in bits.
    entropy: f64,
    /// Policy that chose the bin width / count.
    binning: Binning,
}

/// Bin geometry resolved from the summary and the requested policy.
#[derive(Debug, Clone, Copy)]
struct BinLayout {
    start: f64,
    width: f64,
    count: usize,
}

#[derive(Debug, Clone, Copy)]
enum BinRequest {
    Width(f64),
    Count(usize),
    Auto,
}

impl BinRequest {
    fn binning(self) -> Binning {
        match self {
            Self::Width(_) => Binning::FixedWidth,
            Self::Count(_) => Binning::FixedCount,
            Self::Auto => Binning::ScottNormalReference,
        }
    }
}

impl Histogram {
    /// Creates a histogram with the bin width chosen by Scott's normal reference rule.
    ///
    /// The sample is traversed twice. Meaningful results require at least three
    /// events.
    ///
    /// # Errors
    ///
    /// Returns [`HistogramError::EmptySample`] if the sample is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use graphstudy_stats::{binning::Binning, histogram::Histogram};
    /// let histogram = Histogram::new(&[-1.0, 2.0, -3.0, 4.0, -5.0]).unwrap();
    /// assert_eq!(histogram.size(), 5);
    /// assert_eq!(histogram.binning(), Binning::ScottNormalReference);
    /// assert!((histogram.frequencies().iter().sum::<f64>() - 1.0).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn new<S>(sample: &S) -> Result<Self, HistogramError>
    where
        S: Sample + ?Sized,
    {
        Self::build(sample, BinRequest::Auto)
    }

    /// Creates a histogram with exactly `bincount` bins.
    ///
    /// Unless all events are equal, the bin width is `(max - min) / (bincount - 1)` so
    /// that the outermost bins are centered on the extremes.
    ///
    /// # Errors
    ///
    /// Returns an error if the sample is empty or if `bincount` exceeds
    /// [`MAX_BINCOUNT`].
    ///
    /// # Panics
    ///
    /// Panics if `bincount == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use graphstudy_stats::histogram::Histogram;
    /// let days = [31.0, 28.0, 31.0, 30.0, 31.0, 30.0, 31.0, 31.0, 30.0, 31.0, 30.0, 31.0];
    /// let histogram = Histogram::with_bincount(&days, 4).unwrap();
    /// assert_eq!(histogram.bincount(), 4);
    /// assert_eq!(histogram.center(0), 28.0);
    /// assert_eq!(histogram.frequency(3), 7.0 / 12.0);
    /// ```
    #[must_use]
    pub fn with_bincount<S>(sample: &S, bincount: usize) -> Result<Self, HistogramError>
    where
        S: Sample + ?Sized,
    {
        assert!(bincount > 0, "bin count must be positive");
        Self::build(sample, BinRequest::Count(bincount))
    }

    /// Creates a histogram with bins of width `binwidth`.
    ///
    /// As many bins as are needed to reach the maximum are used. Unless all events are
    /// equal, [`Histogram::binwidth`] returns exactly `binwidth`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sample is empty or if more than [`MAX_BINCOUNT`] bins
    /// would be needed to cover it.
    ///
    /// # Panics
    ///
    /// Panics unless `binwidth` is finite and positive.
    #[must_use]
    pub fn with_binwidth<S>(sample: &S, binwidth: f64) -> Result<Self, HistogramError>
    where
        S: Sample + ?Sized,
    {
        assert!(
            binwidth.is_finite() && binwidth > 0.0,
            "bin width must be finite and positive"
        );
        Self::build(sample, BinRequest::Width(binwidth))
    }

    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    fn build<S>(sample: &S, request: BinRequest) -> Result<Self, HistogramError>
    where
        S: Sample + ?Sized,
    {
        let summary = Summary::from_sample(sample).ok_or(HistogramError::EmptySample)?;
        let layout = BinLayout::resolve(&summary, request)?;
        debug!(
            binning = %request.binning(),
            start = layout.start,
            width = layout.width,
            count = layout.count,
            "resolved histogram bins"
        );

        let mut counts = vec![0_u64; layout.count];
        for x in sample.values() {
            let position = ((x - layout.start) / layout.width).floor();
            // Clamp to absorb rounding at the upper edge
            let idx = if position > 0.0 {
                (position as usize).min(layout.count - 1)
            } else {
                0
            };
            counts[idx] += 1;
        }

        let n = summary.count as f64;
        let frequencies = counts
            .into_iter()
            .map(|count| count as f64 / n)
            .collect::<Vec<_>>();
        let entropy = discrete_entropy(&frequencies);

        Ok(Self {
            frequencies,
            summary,
            start: layout.start,
            binwidth: layout.width,
            entropy,
            binning: request.binning(),
        })
    }

    /// Returns the number of events that populated the histogram.
    #[must_use]
    pub fn size(&self) -> usize {
        self.summary.count
    }

    /// Returns the number of bins.
    #[must_use]
    pub fn bincount(&self) -> usize {
        self.frequencies.len()
    }

    /// Returns the width of every bin.
    #[must_use]
    pub fn binwidth(&self) -> f64 {
        self.binwidth
    }

    /// Returns the lower edge of the first bin.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the smallest event.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.summary.min
    }

    /// Returns the largest event.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.summary.max
    }

    /// Returns the arithmetic mean of the events.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.summary.mean
    }

    /// Returns the root mean square of the events.
    #[must_use]
    pub fn rms(&self) -> f64 {
        self.summary.rms
    }

    /// Returns the summary collected while building the histogram.
    #[must_use]
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Returns the entropy of the frequencies in bits.
    ///
    /// Empty bins contribute nothing.
    #[must_use]
    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    /// Returns the policy that chose the bin width / count.
    #[must_use]
    pub fn binning(&self) -> Binning {
        self.binning
    }

    /// Returns the center of the bin with index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= bincount()`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn center(&self, idx: usize) -> f64 {
        assert!(idx < self.bincount(), "bin index out of range");
        self.start + (idx as f64 + 0.5) * self.binwidth
    }

    /// Returns the relative frequency of the bin with index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= bincount()`.
    #[must_use]
    pub fn frequency(&self, idx: usize) -> f64 {
        self.frequencies[idx]
    }

    /// Returns the relative frequencies of all bins.
    #[must_use]
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Returns an iterator over `(center, frequency)` pairs in bin order.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..self.bincount()).map(|idx| (self.center(idx), self.frequency(idx)))
    }
}

impl BinLayout {
    #[expect(clippy::cast_precision_loss)]
    fn resolve(summary: &Summary, request: BinRequest) -> Result<Self, HistogramError> {
        if let BinRequest::Count(count) = request
            && count > MAX_BINCOUNT
        {
            return Err(HistogramError::TooManyBins {
                bincount: count as f64,
            });
        }
        let range = summary.range();
        if range <= 0.0 {
            // All events are equal; a single unit bin centered on the value
            return Ok(Self {
                start: summary.min - 0.5,
                width: 1.0,
                count: 1,
            });
        }

        let layout = match request {
            BinRequest::Count(1) => Self {
                start: summary.min,
                width: range,
                count: 1,
            },
            BinRequest::Count(count) => {
                Self::centered(summary.min, range / (count - 1) as f64, count)
            }
            BinRequest::Width(width) => {
                let count = checked_bincount((range / width + 0.5).floor() + 1.0)?;
                Self::centered(summary.min, width, count)
            }
            BinRequest::Auto => {
                let suggested =
                    binwidth_scott_normal_reference(summary.count, summary.stdev());
                // Snap the suggestion so that the range is an integral number of bins
                let intervals = if suggested > 0.0 {
                    (range / suggested).round().max(1.0)
                } else {
                    1.0
                };
                let count = checked_bincount(intervals + 1.0)?;
                Self::centered(summary.min, range / (count - 1) as f64, count)
            }
        };
        Ok(layout)
    }

    fn centered(min: f64, width: f64, count: usize) -> Self {
        Self {
            start: min - 0.5 * width,
            width,
            count,
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
fn checked_bincount(bincount: f64) -> Result<usize, HistogramError> {
    // Also rejects NaN
    if bincount <= MAX_BINCOUNT as f64 {
        Ok(bincount as usize)
    } else {
        Err(HistogramError::TooManyBins { bincount })
    }
}
