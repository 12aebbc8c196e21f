//! Numeric integration over sampled functions.

/// Computes the integral over a range given as `(x, f(x))` points using the
/// trapezoidal rule.
///
/// The points do not have to be equidistant but they must be sorted by `x`. Fewer
/// than two points integrate to zero.
///
/// # Examples
///
/// ```
/// use graphstudy_stats::numeric::integrate_trapezoidal;
///
/// let line = [(0.0, 0.0), (1.0, 1.0), (3.0, 3.0)];
/// assert_eq!(integrate_trapezoidal(line), 4.5);
/// ```
#[must_use]
pub fn integrate_trapezoidal<I>(points: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut points = points.into_iter();
    let Some(mut prev) = points.next() else {
        return 0.0;
    };
    let mut sum = 0.0;
    for next in points {
        sum += 0.5 * (next.0 - prev.0) * (next.1 + prev.1);
        prev = next;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_ranges() {
        assert_eq!(integrate_trapezoidal(std::iter::empty()), 0.0);
        assert_eq!(integrate_trapezoidal([(1.0, 5.0)]), 0.0);
    }

    #[test]
    fn test_constant() {
        let points = [(0.0, 2.0), (0.5, 2.0), (2.0, 2.0)];
        assert!((integrate_trapezoidal(points) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_parabola_converges() {
        let n = 1000;
        let points = (0..=n).map(|i| {
            let x = f64::from(i) / f64::from(n);
            (x, x * x)
        });
        assert!((integrate_trapezoidal(points) - 1.0 / 3.0).abs() < 1e-6);
    }
}
