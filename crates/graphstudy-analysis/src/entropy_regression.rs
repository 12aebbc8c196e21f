use graphstudy_stats::regression::{LinearFit, fit_line};

use crate::{analyzer::Analysis, record::Object};

/// Collects histogram entropies across a batch of analyses of the same sample.
///
/// The entropy of a histogram of a continuous distribution grows roughly linearly with
/// the binary logarithm of its bin count. Fitting `entropy = intercept + slope *
/// log2(bincount)` over a batch characterizes how information content scales with
/// resolution.
///
/// # Examples
///
/// ```
/// use graphstudy_analysis::{
///     analyzer::Analyzer, entropy_regression::EntropyRegression, kernel::Kernel,
///     record::Object,
/// };
///
/// let events = (0..1000).map(|i| f64::from(i) / 999.0).collect::<Vec<_>>();
/// let mut analyzer = Analyzer::new(Kernel::Boxed);
/// let mut regression = EntropyRegression::new();
/// let mut info = Object::new();
/// for bins in [9, 17, 33, 65] {
///     analyzer.set_bins(Some(bins)).unwrap();
///     let analysis = analyzer.analyze(&events, &mut info, &mut Object::new()).unwrap();
///     regression.push(&analysis);
/// }
/// regression.assign(&mut info);
/// let slope = info.get("entropy-slope").unwrap().as_real().unwrap();
/// assert!((slope - 1.0).abs() < 0.1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EntropyRegression {
    points: Vec<(f64, f64)>,
}

impl EntropyRegression {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the `(log2(bincount), entropy)` pair of a histogram analysis.
    ///
    /// Analyses without a bin count are ignored. Returns whether a pair was added.
    #[expect(clippy::cast_precision_loss)]
    pub fn push(&mut self, analysis: &Analysis) -> bool {
        match (analysis.bincount(), analysis.entropy()) {
            (Some(bincount), Some(entropy)) => {
                self.points.push(((bincount as f64).log2(), entropy));
                true
            }
            _ => false,
        }
    }

    /// Returns the collected `(log2(bincount), entropy)` pairs.
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Fits a line through the collected pairs, if there are any.
    #[must_use]
    pub fn fit(&self) -> Option<LinearFit> {
        (!self.points.is_empty()).then(|| fit_line(&self.points))
    }

    /// Writes `entropy-intercept` and `entropy-slope` into `info`.
    ///
    /// Nothing is written if no pair was collected.
    pub fn assign(&self, info: &mut Object) {
        if let Some(fit) = self.fit() {
            info.insert("entropy-intercept", fit.intercept);
            info.insert("entropy-slope", fit.slope);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_distr::{Distribution as _, Normal};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{analyzer::Analyzer, kernel::Kernel, record::Record};

    fn analyze(analyzer: &Analyzer, events: &[f64]) -> Analysis {
        analyzer
            .analyze(events, &mut Object::new(), &mut Object::new())
            .unwrap()
    }

    #[test]
    fn test_empty_regression_assigns_nothing() {
        let regression = EntropyRegression::new();
        let mut info = Object::new();
        regression.assign(&mut info);
        assert!(info.is_empty());
        assert!(regression.fit().is_none());
    }

    #[test]
    fn test_non_histogram_analyses_are_ignored() {
        let events = [1.0, 2.0, 3.0, 5.0];
        let mut regression = EntropyRegression::new();
        assert!(!regression.push(&analyze(&Analyzer::new(Kernel::Raw), &events)));
        assert!(!regression.push(&analyze(&Analyzer::new(Kernel::Gaussian), &events)));
        assert!(regression.push(&analyze(&Analyzer::new(Kernel::Boxed), &events)));
        assert_eq!(regression.points().len(), 1);
    }

    #[test]
    fn test_single_configuration_gives_constant_fit() {
        let events = [1.0, 2.0, 2.0, 3.0];
        let mut analyzer = Analyzer::new(Kernel::Boxed);
        analyzer.set_bins(Some(3)).unwrap();
        let analysis = analyze(&analyzer, &events);
        let mut regression = EntropyRegression::new();
        regression.push(&analysis);

        let mut info = Object::new();
        regression.assign(&mut info);
        assert_eq!(info.get("entropy-intercept"), Some(&Record::Real(1.5)));
        assert_eq!(info.get("entropy-slope"), Some(&Record::Real(0.0)));
    }

    #[test]
    fn test_normal_sample_entropy_grows_with_resolution() {
        let mut rng = Pcg64Mcg::seed_from_u64(5);
        let normal = Normal::new(10.0, 2.0).unwrap();
        let events = (0..100_000)
            .map(|_| normal.sample(&mut rng))
            .collect::<Vec<_>>();

        let mut analyzer = Analyzer::new(Kernel::Boxed);
        let mut regression = EntropyRegression::new();
        for bins in [16, 32, 64, 128] {
            analyzer.set_bins(Some(bins)).unwrap();
            regression.push(&analyze(&analyzer, &events));
        }
        let fit = regression.fit().unwrap();
        assert!((fit.slope - 1.0).abs() < 0.1, "{fit:?}");
    }
}
