//! Sample analysis driven by an [`AnalyzerConfig`].
//!
//! An [`Analyzer`] stores *how* data should be analyzed, never the data itself, so the
//! same instance can analyze several samples in sequence and its parameters may be
//! tuned between calls. Each call proceeds as follows:
//!
//! 1. The configuration is validated. Errors are reported before anything else happens.
//! 2. Events outside the configured `[lower, upper]` range are ignored. If fewer than
//!    [`MIN_EVENTS`] remain, nothing is analyzed.
//! 3. The selected [`Kernel`] is applied:
//!    - [`Kernel::Raw`] writes the events verbatim
//!    - [`Kernel::Boxed`] builds a [`Histogram`] with a fixed bin width, a fixed bin
//!      count or (if neither is set) Scott's rule
//!    - [`Kernel::Gaussian`] smooths the events with a Gaussian kernel and samples the
//!      normalized density on a fixed grid (if `points` is set) or adaptively
//! 4. The result is written to the configured [`Destination`].
//! 5. Only then are the meta-data records updated.

use std::io::{self, Write as _};

use graphstudy_stats::{
    binning::binwidth_scott_normal_reference,
    density::{Density, DensityError, GaussianKernel, sample_adaptive, sample_fixed},
    histogram::{Histogram, HistogramError},
    sample::{RangeFilter, Sample},
    summary::Summary,
};
use tracing::{debug, warn};

use crate::{
    config::{AnalyzerConfig, ConfigError},
    kernel::Kernel,
    output::{self, Destination, Output},
    record::Object,
};

/// Smallest number of events worth analyzing.
pub const MIN_EVENTS: usize = 3;

/// Filter width used when the data leave no other choice (all events equal).
const FALLBACK_SIGMA: f64 = 0.5;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AnalysisError {
    #[display("not enough data to analyze (at least {MIN_EVENTS} events are needed)")]
    InsufficientData,
    #[display("invalid analyzer configuration")]
    #[from]
    Config(#[error(source)] ConfigError),
    #[display("cannot bin events")]
    #[from]
    Histogram(#[error(source)] HistogramError),
    #[display("cannot estimate density")]
    #[from]
    Density(#[error(source)] DensityError),
    #[display("cannot write output to {destination}")]
    Output {
        destination: Destination,
        source: io::Error,
    },
}

/// Estimator-specific outcome of an analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum Estimate {
    /// The events were written verbatim.
    Raw,
    /// The events were binned.
    Histogram(Histogram),
    /// The events were smoothed with a Gaussian kernel of width `sigma`.
    Density { sigma: f64, density: Density },
}

/// The outcome of a successful analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    summary: Summary,
    estimate: Estimate,
    destination: Destination,
}

impl Analysis {
    /// Returns the summary of the analyzed (range-filtered) events.
    #[must_use]
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    #[must_use]
    pub fn estimate(&self) -> &Estimate {
        &self.estimate
    }

    /// Returns the destination the output was written to.
    #[must_use]
    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Returns the bin count if the events were binned.
    #[must_use]
    pub fn bincount(&self) -> Option<usize> {
        match &self.estimate {
            Estimate::Histogram(histogram) => Some(histogram.bincount()),
            Estimate::Raw | Estimate::Density { .. } => None,
        }
    }

    /// Returns the entropy of the histogram or density, if one was computed.
    #[must_use]
    pub fn entropy(&self) -> Option<f64> {
        match &self.estimate {
            Estimate::Raw => None,
            Estimate::Histogram(histogram) => Some(histogram.entropy()),
            Estimate::Density { density, .. } => Some(density.entropy()),
        }
    }

    /// Adds the summary to `info` and the estimator-specific fields to `subinfo`.
    pub fn record(&self, info: &mut Object, subinfo: &mut Object) {
        info.insert("size", self.summary.count);
        info.insert("minimum", self.summary.min);
        info.insert("maximum", self.summary.max);
        info.insert("mean", self.summary.mean);
        info.insert("rms", self.summary.rms);

        subinfo.insert(
            "filename",
            self.destination
                .filename()
                .map(|path| path.to_string_lossy().into_owned()),
        );
        match &self.estimate {
            Estimate::Raw => {}
            Estimate::Histogram(histogram) => {
                subinfo.insert("binning", histogram.binning().name());
                subinfo.insert("bincount", histogram.bincount());
                subinfo.insert("binwidth", histogram.binwidth());
                subinfo.insert("entropy", histogram.entropy());
            }
            Estimate::Density { sigma, density } => {
                subinfo.insert("sigma", *sigma);
                subinfo.insert("points", density.len());
                let entropy = density.entropy();
                if entropy.is_finite() {
                    subinfo.insert("entropy", entropy);
                }
                if let Some((x, y)) = density.peak() {
                    subinfo.insert("max-x", x);
                    subinfo.insert("max-y", y);
                }
            }
        }
    }
}

/// Analyzes samples according to a configuration.
///
/// # Examples
///
/// ```
/// use graphstudy_analysis::{analyzer::Analyzer, kernel::Kernel, record::Object};
///
/// let mut analyzer = Analyzer::new(Kernel::Boxed);
/// analyzer.set_bins(Some(4)).unwrap();
///
/// let (mut info, mut subinfo) = (Object::new(), Object::new());
/// let events = [1.0, 2.0, 2.0, 3.0, 4.0];
/// let analysis = analyzer.analyze(&events, &mut info, &mut subinfo).unwrap();
/// assert_eq!(analysis.bincount(), Some(4));
/// assert!(info.contains_key("mean"));
/// assert!(subinfo.contains_key("entropy"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    #[must_use]
    pub fn new(kernel: Kernel) -> Self {
        Self {
            config: AnalyzerConfig::new(kernel),
        }
    }

    /// Creates an analyzer from a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is inconsistent.
    pub fn with_config(config: AnalyzerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    #[must_use]
    pub fn kernel(&self) -> Kernel {
        self.config.kernel
    }

    pub fn set_kernel(&mut self, kernel: Kernel) {
        self.config.kernel = kernel;
    }

    /// Sets (or clears) the inclusive range of events to consider.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite or if `lower > upper`.
    pub fn set_range(&mut self, lower: Option<f64>, upper: Option<f64>) -> Result<(), ConfigError> {
        let config = AnalyzerConfig {
            lower,
            upper,
            ..AnalyzerConfig::default()
        };
        config.validate()?;
        self.config.lower = lower;
        self.config.upper = upper;
        Ok(())
    }

    /// Sets (or clears) the bin width or filter width.
    ///
    /// # Errors
    ///
    /// Returns an error unless the width is finite and positive.
    pub fn set_width(&mut self, width: Option<f64>) -> Result<(), ConfigError> {
        if let Some(width) = width
            && !(width.is_finite() && width > 0.0)
        {
            return Err(ConfigError::InvalidWidth { width });
        }
        self.config.width = width;
        Ok(())
    }

    /// Sets (or clears) the bin count.
    ///
    /// # Errors
    ///
    /// Returns an error if the count is zero.
    pub fn set_bins(&mut self, bins: Option<usize>) -> Result<(), ConfigError> {
        if bins == Some(0) {
            return Err(ConfigError::ZeroBins);
        }
        self.config.bins = bins;
        Ok(())
    }

    /// Sets (or clears) the number of evaluation intervals of the Gaussian kernel.
    ///
    /// # Errors
    ///
    /// Returns an error if the number is zero.
    pub fn set_points(&mut self, points: Option<usize>) -> Result<(), ConfigError> {
        if points == Some(0) {
            return Err(ConfigError::ZeroPoints);
        }
        self.config.points = points;
        Ok(())
    }

    pub fn set_output(&mut self, output: Destination) {
        self.config.output = output;
    }

    /// Analyzes a sample and updates the records on success.
    ///
    /// Returns `Ok(None)` without touching the records if fewer than [`MIN_EVENTS`]
    /// events fall into the configured range.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is inconsistent, if the histogram would
    /// need too many bins, if adaptive sampling does not converge or if the output
    /// cannot be written. The records are left untouched
    /// in all of these cases.
    pub fn analyze_allow_failure<S>(
        &self,
        sample: &S,
        info: &mut Object,
        subinfo: &mut Object,
    ) -> Result<Option<Analysis>, AnalysisError>
    where
        S: Sample + ?Sized,
    {
        let Some(analysis) = self.run(sample)? else {
            return Ok(None);
        };
        analysis.record(info, subinfo);
        Ok(Some(analysis))
    }

    /// Analyzes a sample and updates the records.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InsufficientData`] in the cases where
    /// [`Analyzer::analyze_allow_failure`] returns `Ok(None)`, and any error that
    /// function returns.
    pub fn analyze<S>(
        &self,
        sample: &S,
        info: &mut Object,
        subinfo: &mut Object,
    ) -> Result<Analysis, AnalysisError>
    where
        S: Sample + ?Sized,
    {
        self.analyze_allow_failure(sample, info, subinfo)?
            .ok_or(AnalysisError::InsufficientData)
    }

    /// Analyzes a sample without recording anything.
    ///
    /// # Errors
    ///
    /// See [`Analyzer::analyze_allow_failure`].
    pub fn run<S>(&self, sample: &S) -> Result<Option<Analysis>, AnalysisError>
    where
        S: Sample + ?Sized,
    {
        self.config.validate()?;

        let events = RangeFilter::new(sample, self.config.lower, self.config.upper);
        if !events.has_at_least(MIN_EVENTS) {
            warn!(
                kernel = %self.config.kernel,
                "skipping analysis of fewer than {MIN_EVENTS} events"
            );
            return Ok(None);
        }
        let Some(summary) = Summary::from_sample(&events) else {
            return Ok(None);
        };
        debug!(
            kernel = %self.config.kernel,
            events = summary.count,
            "analyzing sample"
        );

        let estimate = match self.config.kernel {
            Kernel::Raw => {
                self.write_output(|w| output::write_events(w, &summary, events.values()))?;
                Estimate::Raw
            }
            Kernel::Boxed => {
                let histogram = self.histogram(&events)?;
                self.write_output(|w| output::write_frequencies(w, &histogram))?;
                Estimate::Histogram(histogram)
            }
            Kernel::Gaussian => {
                let (sigma, density) = self.density(&events, &summary)?;
                self.write_output(|w| output::write_density(w, &summary, &density))?;
                Estimate::Density { sigma, density }
            }
        };

        Ok(Some(Analysis {
            summary,
            estimate,
            destination: self.config.output.clone(),
        }))
    }

    fn histogram<S>(&self, events: &S) -> Result<Histogram, AnalysisError>
    where
        S: Sample + ?Sized,
    {
        let histogram = match (self.config.width, self.config.bins) {
            (Some(_), Some(_)) => return Err(ConfigError::WidthAndBins.into()),
            (Some(width), None) => Histogram::with_binwidth(events, width),
            (None, Some(bins)) => Histogram::with_bincount(events, bins),
            (None, None) => Histogram::new(events),
        };
        Ok(histogram?)
    }

    #[expect(clippy::cast_precision_loss)]
    fn density<S>(
        &self,
        events: &S,
        summary: &Summary,
    ) -> Result<(f64, Density), AnalysisError>
    where
        S: Sample + ?Sized,
    {
        // The range filter keeps `lower <= min` and `max <= upper`, so `lo <= hi`
        let lo = self.config.lower.unwrap_or(summary.min);
        let hi = self.config.upper.unwrap_or(summary.max);

        let spacing = self
            .config
            .width
            .or_else(|| self.config.bins.map(|bins| (hi - lo) / bins as f64))
            .unwrap_or_else(|| binwidth_scott_normal_reference(summary.count, summary.stdev()));
        let mut sigma = spacing / 2.0;
        if !(sigma.is_finite() && sigma > 0.0) {
            debug!(sigma, "degenerate filter width, using {FALLBACK_SIGMA}");
            sigma = FALLBACK_SIGMA;
        }

        let kernel = GaussianKernel::new(events, sigma);
        let f = |x| kernel.evaluate(x);
        let density = match self.config.points {
            Some(points) if lo < hi => sample_fixed(f, lo, hi, points, true),
            _ => sample_adaptive(f, lo, hi, true)?,
        };
        debug!(sigma, points = density.len(), "estimated density");
        Ok((sigma, density))
    }

    fn write_output<F>(&self, write: F) -> Result<(), AnalysisError>
    where
        F: FnOnce(&mut Output) -> io::Result<()>,
    {
        let destination = &self.config.output;
        let wrap = |source| AnalysisError::Output {
            destination: destination.clone(),
            source,
        };
        let Some(mut output) = destination.open().map_err(wrap)? else {
            return Ok(());
        };
        write(&mut output)
            .and_then(|()| output.flush())
            .map_err(wrap)?;
        debug!(%destination, "wrote analysis output");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{E, PI};

    use rand::SeedableRng as _;
    use rand_distr::{Distribution as _, Normal};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::record::Record;

    fn normal_sample(n: usize, seed: u64) -> Vec<f64> {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let normal = Normal::new(0.0, 1.0).unwrap();
        (0..n).map(|_| normal.sample(&mut rng)).collect()
    }

    fn real(object: &Object, key: &str) -> f64 {
        object.get(key).and_then(Record::as_real).unwrap()
    }

    fn integer(object: &Object, key: &str) -> usize {
        object.get(key).and_then(Record::as_integer).unwrap()
    }

    #[test]
    fn test_two_events_are_not_enough() {
        for kernel in Kernel::all() {
            let analyzer = Analyzer::new(kernel);
            let (mut info, mut subinfo) = (Object::new(), Object::new());
            let result = analyzer
                .analyze_allow_failure(&[1.0, 2.0], &mut info, &mut subinfo)
                .unwrap();
            assert!(result.is_none());
            assert!(info.is_empty());
            assert!(subinfo.is_empty());

            let err = analyzer
                .analyze(&[1.0, 2.0], &mut info, &mut subinfo)
                .unwrap_err();
            assert!(matches!(err, AnalysisError::InsufficientData));
            assert!(info.is_empty());
        }
    }

    #[test]
    fn test_three_events_are_enough() {
        for kernel in Kernel::all() {
            let analyzer = Analyzer::new(kernel);
            let (mut info, mut subinfo) = (Object::new(), Object::new());
            let analysis = analyzer
                .analyze_allow_failure(&[1.0, 2.0, 4.0], &mut info, &mut subinfo)
                .unwrap();
            assert!(analysis.is_some(), "{kernel}");
            assert_eq!(integer(&info, "size"), 3);
            assert_eq!(real(&info, "minimum"), 1.0);
            assert_eq!(real(&info, "maximum"), 4.0);
            assert!((real(&info, "mean") - 7.0 / 3.0).abs() < 1e-12);
            assert!((real(&info, "rms") - 7.0_f64.sqrt()).abs() < 1e-12);
            assert_eq!(subinfo.get("filename"), Some(&Record::Null));
        }
    }

    #[test]
    fn test_width_and_bins_conflict_for_boxed() {
        let mut analyzer = Analyzer::new(Kernel::Boxed);
        analyzer.set_width(Some(0.1)).unwrap();
        analyzer.set_bins(Some(10)).unwrap();
        let (mut info, mut subinfo) = (Object::new(), Object::new());
        // Validation precedes the check for enough data
        for events in [&[1.0][..], &[1.0, 2.0, 3.0, 4.0][..]] {
            let err = analyzer
                .analyze_allow_failure(events, &mut info, &mut subinfo)
                .unwrap_err();
            assert!(matches!(
                err,
                AnalysisError::Config(ConfigError::WidthAndBins)
            ));
        }
        assert!(info.is_empty());
        assert!(subinfo.is_empty());
    }

    #[test]
    fn test_boxed_fields() {
        let events = normal_sample(1000, 1);
        let (mut info, mut subinfo) = (Object::new(), Object::new());

        let mut analyzer = Analyzer::new(Kernel::Boxed);
        analyzer.analyze(&events, &mut info, &mut subinfo).unwrap();
        assert_eq!(
            subinfo.get("binning"),
            Some(&Record::from("scott-normal-reference"))
        );

        analyzer.set_bins(Some(17)).unwrap();
        analyzer.analyze(&events, &mut info, &mut subinfo).unwrap();
        assert_eq!(subinfo.get("binning"), Some(&Record::from("fixed-count")));
        assert_eq!(integer(&subinfo, "bincount"), 17);

        analyzer.set_bins(None).unwrap();
        analyzer.set_width(Some(0.25)).unwrap();
        analyzer.analyze(&events, &mut info, &mut subinfo).unwrap();
        assert_eq!(subinfo.get("binning"), Some(&Record::from("fixed-width")));
        assert_eq!(real(&subinfo, "binwidth"), 0.25);
        assert!(real(&subinfo, "entropy") > 0.0);
    }

    #[test]
    fn test_range_filter() {
        let events = [-10.0, 1.0, 2.0, 3.0, 4.0, 10.0];
        let mut analyzer = Analyzer::new(Kernel::Raw);
        analyzer.set_range(Some(0.0), Some(5.0)).unwrap();
        let (mut info, mut subinfo) = (Object::new(), Object::new());
        analyzer.analyze(&events, &mut info, &mut subinfo).unwrap();
        assert_eq!(integer(&info, "size"), 4);
        assert_eq!(real(&info, "minimum"), 1.0);
        assert_eq!(real(&info, "maximum"), 4.0);

        // Bounds are inclusive, and two remaining events are not enough
        analyzer.set_range(Some(3.0), Some(4.0)).unwrap();
        let (mut info, mut subinfo) = (Object::new(), Object::new());
        let result = analyzer
            .analyze_allow_failure(&events, &mut info, &mut subinfo)
            .unwrap();
        assert!(result.is_none());
        assert!(info.is_empty());
    }

    #[test]
    fn test_setters_reject_invalid_values() {
        let mut analyzer = Analyzer::default();
        assert!(analyzer.set_range(Some(2.0), Some(1.0)).is_err());
        assert!(analyzer.set_range(Some(f64::NAN), None).is_err());
        assert!(analyzer.set_width(Some(-1.0)).is_err());
        assert!(analyzer.set_bins(Some(0)).is_err());
        assert!(analyzer.set_points(Some(0)).is_err());
        assert_eq!(analyzer.config(), &AnalyzerConfig::default());
    }

    #[test]
    fn test_with_config_validates() {
        let config = AnalyzerConfig {
            width: Some(1.0),
            bins: Some(2),
            ..AnalyzerConfig::new(Kernel::Boxed)
        };
        assert_eq!(
            Analyzer::with_config(config).unwrap_err(),
            ConfigError::WidthAndBins
        );
    }

    #[test]
    fn test_gaussian_adaptive() {
        let events = normal_sample(2000, 7);
        let summary = Summary::from_sample(&events).unwrap();
        let analyzer = Analyzer::new(Kernel::Gaussian);
        let (mut info, mut subinfo) = (Object::new(), Object::new());
        let analysis = analyzer.analyze(&events, &mut info, &mut subinfo).unwrap();

        let expected_sigma = binwidth_scott_normal_reference(2000, summary.stdev()) / 2.0;
        assert!((real(&subinfo, "sigma") - expected_sigma).abs() < 1e-12);
        assert!(real(&subinfo, "max-x").abs() < 0.75);
        assert!(real(&subinfo, "max-y") > 0.3);

        let Estimate::Density { density, .. } = analysis.estimate() else {
            panic!("expected a density");
        };
        assert_eq!(integer(&subinfo, "points"), density.len());
        assert_eq!(density.points().first().unwrap().0, summary.min);
        assert_eq!(density.points().last().unwrap().0, summary.max);
        assert!((density.integral() - 1.0).abs() < 1e-9);

        // Entropy of the standard normal distribution, widened slightly by smoothing
        let normal_entropy = (2.0 * PI * E).sqrt().log2();
        assert!((real(&subinfo, "entropy") - normal_entropy).abs() < 0.15);
    }

    #[test]
    fn test_gaussian_fixed_points_and_bandwidth() {
        let events = normal_sample(500, 3);
        let mut analyzer = Analyzer::new(Kernel::Gaussian);
        analyzer.set_points(Some(100)).unwrap();
        analyzer.set_range(Some(-4.0), Some(4.0)).unwrap();

        analyzer.set_bins(Some(16)).unwrap();
        let (mut info, mut subinfo) = (Object::new(), Object::new());
        analyzer.analyze(&events, &mut info, &mut subinfo).unwrap();
        assert_eq!(integer(&subinfo, "points"), 101);
        assert!((real(&subinfo, "sigma") - 0.25).abs() < 1e-12);

        analyzer.set_width(Some(0.3)).unwrap();
        analyzer.analyze(&events, &mut info, &mut subinfo).unwrap();
        assert!((real(&subinfo, "sigma") - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_gaussian_constant_data() {
        let analyzer = Analyzer::new(Kernel::Gaussian);
        let (mut info, mut subinfo) = (Object::new(), Object::new());
        analyzer
            .analyze(&[2.0, 2.0, 2.0], &mut info, &mut subinfo)
            .unwrap();
        assert_eq!(real(&subinfo, "sigma"), FALLBACK_SIGMA);
        assert_eq!(integer(&subinfo, "points"), 1);
        assert_eq!(real(&subinfo, "max-x"), 2.0);
    }

    #[test]
    fn test_gaussian_one_sided_range() {
        let events = [1.0, 2.0, 3.0, 4.0];
        let mut analyzer = Analyzer::new(Kernel::Gaussian);
        analyzer.set_points(Some(10)).unwrap();

        // The evaluation range starts at the lower bound, not at the smallest event
        analyzer.set_range(Some(0.0), None).unwrap();
        let analysis = analyzer.run(&events).unwrap().unwrap();
        let Estimate::Density { density, .. } = analysis.estimate() else {
            panic!("expected a density");
        };
        assert_eq!(density.points().first().map(|&(x, _)| x), Some(0.0));
        assert_eq!(density.points().last().map(|&(x, _)| x), Some(4.0));

        // A bound beyond all events leaves nothing to analyze
        analyzer.set_range(Some(5.0), None).unwrap();
        assert!(analyzer.run(&events).unwrap().is_none());
    }

    #[test]
    fn test_too_many_bins_is_an_error() {
        let mut analyzer = Analyzer::new(Kernel::Boxed);
        analyzer.set_width(Some(1e-10)).unwrap();
        let (mut info, mut subinfo) = (Object::new(), Object::new());
        let err = analyzer
            .analyze_allow_failure(&[0.0, 1.0, 1e300], &mut info, &mut subinfo)
            .unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Histogram(HistogramError::TooManyBins { .. })
        ));
        assert!(info.is_empty());
        assert!(subinfo.is_empty());
    }

    #[test]
    fn test_file_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("histo.txt");
        let mut analyzer = Analyzer::new(Kernel::Boxed);
        analyzer.set_bins(Some(3)).unwrap();
        analyzer.set_output(Destination::File(path.clone()));

        let (mut info, mut subinfo) = (Object::new(), Object::new());
        analyzer
            .analyze(&[1.0, 2.0, 2.0, 3.0], &mut info, &mut subinfo)
            .unwrap();
        assert_eq!(
            subinfo.get("filename"),
            Some(&Record::Text(path.to_string_lossy().into_owned()))
        );

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("# Number of events:"));
        let rows = text
            .lines()
            .filter(|line| !line.starts_with('#') && !line.is_empty())
            .count();
        assert_eq!(rows, 3);
    }

    #[test]
    fn test_output_failure_leaves_records_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut analyzer = Analyzer::new(Kernel::Raw);
        analyzer.set_output(Destination::File(dir.path().join("no/such/dir.txt")));
        let (mut info, mut subinfo) = (Object::new(), Object::new());
        let err = analyzer
            .analyze(&[1.0, 2.0, 3.0], &mut info, &mut subinfo)
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Output { .. }));
        assert!(err.to_string().contains("dir.txt"));
        assert!(info.is_empty());
        assert!(subinfo.is_empty());
    }
}
