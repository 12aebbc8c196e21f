//! Kernel density estimation.
//!
//! A [`GaussianKernel`] turns a sample into a smooth univariate function by summing a
//! Gaussian bump centered on every event. The samplers in this module evaluate any
//! univariate function over an interval and return the result as a [`Density`]:
//!
//! - [`sample_fixed`] evaluates on a regular grid
//! - [`sample_adaptive`] starts from a coarse grid and bisects intervals until
//!   consecutive plotted points are close to each other, so evaluation points
//!   concentrate where the function changes quickly
//!
//! Both samplers can normalize the result to unit area (trapezoidal rule).
//!
//! # Examples
//!
//! ```
//! use graphstudy_stats::density::{GaussianKernel, sample_fixed};
//!
//! let events = [1.0, 2.0, 2.5, 4.0];
//! let kernel = GaussianKernel::new(&events, 0.5);
//! let density = sample_fixed(|x| kernel.evaluate(x), -1.0, 6.0, 700, true);
//! assert_eq!(density.len(), 701);
//! assert!((density.integral() - 1.0).abs() < 1e-12);
//! ```

use std::f64::consts::PI;

use tracing::{debug, trace};

use crate::{entropy::differential_entropy, numeric::integrate_trapezoidal, sample::Sample};

/// Number of intervals of the initial grid of the adaptive sampler.
const ADAPTIVE_INITIAL_INTERVALS: usize = 50;

/// Desired distance between consecutive plotted points, in coordinates where the
/// interval and the function's magnitude are both scaled to one.
const ADAPTIVE_TARGET_DISTANCE: f64 = 1.0 / 200.0;

/// Relative slack on [`ADAPTIVE_TARGET_DISTANCE`] before an interval is bisected.
const ADAPTIVE_TOLERANCE: f64 = 0.25;

/// Maximum number of successive bisections of an initial interval.
const ADAPTIVE_MAX_DEPTH: u32 = 32;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DensityError {
    /// The function kept jumping no matter how finely it was sampled.
    #[display("adaptive sampling did not converge near x = {x}")]
    NonConvergence { x: f64 },
}

/// A Gaussian kernel density estimate of a sample.
///
/// Evaluating the kernel at `x` yields `sum_i N(x - x_i)` where `N` is the normal
/// density with mean zero and standard deviation `sigma`. The result is therefore
/// not normalized; it integrates to the number of events.
#[derive(Debug, Clone, Copy)]
pub struct GaussianKernel<'a, S: ?Sized> {
    sample: &'a S,
    sigma: f64,
    /// `1 / (sigma * sqrt(2 pi))`
    prefactor: f64,
}

impl<'a, S> GaussianKernel<'a, S>
where
    S: Sample + ?Sized,
{
    /// Creates a kernel with filter width `sigma` for the given sample.
    ///
    /// The sample is borrowed and traversed once per evaluation.
    ///
    /// # Panics
    ///
    /// Panics unless `sigma` is finite and positive.
    #[must_use]
    pub fn new(sample: &'a S, sigma: f64) -> Self {
        assert!(
            sigma.is_finite() && sigma > 0.0,
            "kernel width must be finite and positive"
        );
        Self {
            sample,
            sigma,
            prefactor: 1.0 / (sigma * (2.0 * PI).sqrt()),
        }
    }

    /// Returns the filter width.
    #[must_use]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Evaluates the kernel at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let sum = self
            .sample
            .values()
            .map(|xi| {
                let z = (x - xi) / self.sigma;
                (-0.5 * z * z).exp()
            })
            .sum::<f64>();
        self.prefactor * sum
    }
}

/// A function sampled at points with strictly increasing abscissae.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Density {
    points: Vec<(f64, f64)>,
}

impl Density {
    /// Returns the `(x, y)` points in increasing `x` order.
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the density and returns its points.
    #[must_use]
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the trapezoidal integral over all points.
    #[must_use]
    pub fn integral(&self) -> f64 {
        integrate_trapezoidal(self.points.iter().copied())
    }

    /// Returns the point with the largest `y` value (the first one on ties).
    #[must_use]
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .copied()
            .reduce(|best, p| if p.1 > best.1 { p } else { best })
    }

    /// Returns the differential entropy in bits.
    ///
    /// Only meaningful for a normalized density.
    #[must_use]
    pub fn entropy(&self) -> f64 {
        differential_entropy(&self.points)
    }

    /// Scales all `y` values so that the trapezoidal integral becomes one.
    ///
    /// A density with zero (or non-finite) integral is left unchanged, so a function
    /// that is zero everywhere stays zero.
    fn normalize(&mut self) {
        let integral = self.integral();
        if integral.is_finite() && integral > 0.0 {
            for (_, y) in &mut self.points {
                *y /= integral;
            }
        }
    }
}

/// Evaluates `f` over a regular grid.
///
/// Returns `n + 1` points where `x` is evenly spaced from `lo` to `hi` (both
/// inclusive). If `normalize` is set, the result is scaled to unit area. The function
/// must be deterministic and, if normalization is requested, non-negative.
///
/// # Panics
///
/// Panics if `n == 0`, if either bound is not finite or if `lo > hi`.
///
/// # Examples
///
/// ```
/// use graphstudy_stats::density::sample_fixed;
///
/// let density = sample_fixed(|x| x, 0.0, 1.0, 4, false);
/// assert_eq!(
///     density.points(),
///     [(0.0, 0.0), (0.25, 0.25), (0.5, 0.5), (0.75, 0.75), (1.0, 1.0)]
/// );
/// ```
#[must_use]
pub fn sample_fixed<F>(f: F, lo: f64, hi: f64, n: usize, normalize: bool) -> Density
where
    F: Fn(f64) -> f64,
{
    assert!(n > 0, "number of evaluation points must be positive");
    check_interval(lo, hi);

    #[expect(clippy::cast_precision_loss)]
    let step = (hi - lo) / n as f64;
    let points = (0..=n)
        .map(|i| {
            #[expect(clippy::cast_precision_loss)]
            let x = if i == n { hi } else { lo + i as f64 * step };
            (x, f(x))
        })
        .collect();

    let mut density = Density { points };
    if normalize {
        density.normalize();
    }
    density
}

/// Evaluates `f` over an adaptively refined grid.
///
/// Sampling starts from a coarse regular grid over `[lo, hi]`. Every interval whose
/// endpoints, plotted with both the interval and the function's magnitude scaled to
/// one, are farther apart than a fixed target distance is bisected recursively. Flat
/// regions therefore keep a coarse spacing while peaks and slopes are resolved
/// finely. The first point is at `lo`, the last at `hi`, and `x` increases strictly.
///
/// If `normalize` is set, the result is scaled to unit area.
///
/// # Errors
///
/// Returns [`DensityError::NonConvergence`] if an interval is still too long after the
/// maximum number of bisections, which happens for discontinuous or non-finite
/// functions.
///
/// # Panics
///
/// Panics if either bound is not finite or if `lo > hi`.
///
/// # Examples
///
/// ```
/// use graphstudy_stats::density::sample_adaptive;
///
/// let density = sample_adaptive(|x: f64| (-x * x).exp(), -5.0, 5.0, false).unwrap();
/// let points = density.points();
/// assert_eq!(points.first().unwrap().0, -5.0);
/// assert_eq!(points.last().unwrap().0, 5.0);
/// assert!(points.windows(2).all(|w| w[0].0 < w[1].0));
/// ```
pub fn sample_adaptive<F>(
    f: F,
    lo: f64,
    hi: f64,
    normalize: bool,
) -> Result<Density, DensityError>
where
    F: Fn(f64) -> f64,
{
    check_interval(lo, hi);
    if lo == hi {
        let mut density = Density {
            points: vec![(lo, f(lo))],
        };
        if normalize {
            density.normalize();
        }
        return Ok(density);
    }

    let coarse = sample_fixed(&f, lo, hi, ADAPTIVE_INITIAL_INTERVALS, false).into_points();
    let magnitude = coarse
        .iter()
        .map(|&(_, y)| y.abs())
        .filter(|y| y.is_finite())
        .fold(0.0, f64::max);
    let scale = PlotScale {
        x: hi - lo,
        y: if magnitude > 0.0 { magnitude } else { 1.0 },
    };

    let mut points = Vec::with_capacity(4 * coarse.len());
    points.push(coarse[0]);
    for pair in coarse.windows(2) {
        refine(&f, scale, pair[0], pair[1], 0, &mut points)?;
    }
    debug!(lo, hi, points = points.len(), "adaptive sampling converged");

    let mut density = Density { points };
    if normalize {
        density.normalize();
    }
    Ok(density)
}

fn check_interval(lo: f64, hi: f64) {
    assert!(
        lo.is_finite() && hi.is_finite(),
        "sampling interval must be finite"
    );
    assert!(lo <= hi, "sampling interval must not be reversed");
}

/// Extents used to make plotted distances dimensionless.
#[derive(Debug, Clone, Copy)]
struct PlotScale {
    x: f64,
    y: f64,
}

impl PlotScale {
    fn distance(self, a: (f64, f64), b: (f64, f64)) -> f64 {
        let dx = (b.0 - a.0) / self.x;
        let dy = (b.1 - a.1) / self.y;
        dx.hypot(dy)
    }
}

/// Appends refined points in `(a, b]` to `out`.
fn refine<F>(
    f: &F,
    scale: PlotScale,
    a: (f64, f64),
    b: (f64, f64),
    depth: u32,
    out: &mut Vec<(f64, f64)>,
) -> Result<(), DensityError>
where
    F: Fn(f64) -> f64,
{
    // NaN distances never satisfy this and end up as non-convergence
    if scale.distance(a, b) <= ADAPTIVE_TARGET_DISTANCE * (1.0 + ADAPTIVE_TOLERANCE) {
        out.push(b);
        return Ok(());
    }
    let xm = 0.5 * (a.0 + b.0);
    if depth >= ADAPTIVE_MAX_DEPTH || xm <= a.0 || xm >= b.0 {
        trace!(x = a.0, depth, "giving up on interval");
        return Err(DensityError::NonConvergence { x: a.0 });
    }
    let m = (xm, f(xm));
    refine(f, scale, a, m, depth + 1, out)?;
    refine(f, scale, m, b, depth + 1, out)
}
