//! Statistical estimators for scalar samples extracted from graphs and layouts.
//!
//! This crate provides the numerical building blocks of the analysis pipeline:
//!
//! - **Samples**: a multi-pass view over finite real numbers, optionally restricted to a range
//! - **Summary statistics**: count, extremes, mean, root mean square and standard deviations
//! - **Histograms**: equal-width bins chosen by width, by count or by Scott's rule
//! - **Kernel density estimation**: Gaussian kernels sampled on fixed or adaptive grids
//! - **Entropy**: discrete and differential Shannon entropy in bits
//! - **Regression**: least-squares line fits used for entropy scaling laws
//!
//! # Modules
//!
//! - [`sample`]: The [`Sample`](sample::Sample) trait and range filtering
//! - [`summary`]: One-pass summary statistics
//! - [`binning`]: Binning policies and Scott's normal reference rule
//! - [`histogram`]: Histogram construction
//! - [`density`]: Gaussian kernel and function samplers
//! - [`entropy`]: Entropy of frequency tables and densities
//! - [`numeric`]: Numerical integration
//! - [`regression`]: Simple linear regression
//!
//! # Examples
//!
//! ## Summarizing a sample
//!
//! ```
//! use graphstudy_stats::summary::Summary;
//!
//! let summary = Summary::from_sample(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(summary.mean, 3.0);
//! ```
//!
//! ## Building a histogram
//!
//! ```
//! use graphstudy_stats::histogram::Histogram;
//!
//! let events = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0];
//! let histogram = Histogram::with_bincount(&events, 3).unwrap();
//! assert_eq!(histogram.frequencies(), [1.0 / 6.0, 2.0 / 6.0, 3.0 / 6.0]);
//! ```
//!
//! ## Estimating a density
//!
//! ```
//! use graphstudy_stats::density::{GaussianKernel, sample_adaptive};
//!
//! let events = [0.0, 0.5, 1.0, 4.0];
//! let kernel = GaussianKernel::new(&events, 0.5);
//! let density = sample_adaptive(|x| kernel.evaluate(x), -2.0, 6.0, true).unwrap();
//! assert!((density.integral() - 1.0).abs() < 1e-12);
//! ```

pub mod binning;
pub mod density;
pub mod entropy;
pub mod histogram;
pub mod numeric;
pub mod regression;
pub mod sample;
pub mod summary;
