//! Multi-pass access to samples of scalar measurements.
//!
//! Every estimator in this crate makes at least two passes over its input: one to
//! collect a [`Summary`](crate::summary::Summary) and one to bin or evaluate the
//! events. The [`Sample`] trait makes that contract explicit: [`Sample::values`] may be
//! called any number of times and must yield the same sequence every time.
//!
//! # Examples
//!
//! ```
//! use graphstudy_stats::sample::{RangeFilter, Sample};
//!
//! let events = vec![1.0, 5.0, 2.0, 8.0];
//! assert_eq!(events.count(), 4);
//!
//! let filtered = RangeFilter::new(&events, Some(2.0), Some(5.0));
//! assert_eq!(filtered.values().collect::<Vec<_>>(), [5.0, 2.0]);
//! ```

/// A finite sequence of real numbers that can be traversed more than once.
pub trait Sample {
    /// Returns a fresh iterator over the events of the sample.
    fn values(&self) -> impl Iterator<Item = f64> + '_;

    /// Returns the number of events.
    ///
    /// The default implementation makes one full pass.
    fn count(&self) -> usize {
        self.values().count()
    }

    /// Returns whether the sample holds at least `n` events.
    ///
    /// Advances the iterator at most `n` times.
    fn has_at_least(&self, n: usize) -> bool {
        n == 0 || self.values().nth(n - 1).is_some()
    }
}

impl Sample for [f64] {
    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().copied()
    }

    fn count(&self) -> usize {
        self.len()
    }
}

impl<const N: usize> Sample for [f64; N] {
    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().copied()
    }

    fn count(&self) -> usize {
        N
    }
}

impl Sample for Vec<f64> {
    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().copied()
    }

    fn count(&self) -> usize {
        self.len()
    }
}

impl<S> Sample for &S
where
    S: Sample + ?Sized,
{
    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (**self).values()
    }

    fn count(&self) -> usize {
        (**self).count()
    }
}

/// A view of a sample restricted to an inclusive range.
///
/// Either bound may be absent, in which case that side is unbounded. The view is
/// itself a [`Sample`] and never copies the underlying events.
#[derive(Debug, Clone, Copy)]
pub struct RangeFilter<'a, S: ?Sized> {
    inner: &'a S,
    lower: Option<f64>,
    upper: Option<f64>,
}

impl<'a, S> RangeFilter<'a, S>
where
    S: Sample + ?Sized,
{
    /// Creates a filtered view of `inner` that keeps events `x` with
    /// `lower <= x <= upper`.
    #[must_use]
    pub fn new(inner: &'a S, lower: Option<f64>, upper: Option<f64>) -> Self {
        Self {
            inner,
            lower,
            upper,
        }
    }

    /// Returns whether `x` lies inside the range of this view.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.lower.is_none_or(|lo| lo <= x) && self.upper.is_none_or(|hi| x <= hi)
    }
}

impl<S> Sample for RangeFilter<'_, S>
where
    S: Sample + ?Sized,
{
    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.inner.values().filter(|&x| self.contains(x))
    }
}
