//! Analysis of scalar samples taken from graphs and layouts
//!
//! This crate turns a sample of measurements (edge lengths, projections, pairwise
//! distances, ...) into a tabular output file and a machine-readable meta-data record.
//!
//! # Overview
//!
//! 1. **Configure** ([`config::AnalyzerConfig`]): choose the estimator ([`kernel::Kernel`]),
//!    an optional event range, bin width / bin count / evaluation points and the output
//!    [`output::Destination`]
//! 2. **Analyze** ([`analyzer::Analyzer`]): filter the events, build a histogram or a
//!    kernel density estimate and write it as a Gnuplot-ready table
//! 3. **Record** ([`record::Object`]): collect summary statistics into a shared record
//!    and estimator-specific fields into a per-configuration record
//! 4. **Fit** ([`entropy_regression::EntropyRegression`]): relate histogram entropy to
//!    resolution across a batch of configurations
//!
//! # Examples
//!
//! Analyze the same sample with several bin counts and fit the entropy scaling law:
//!
//! ```
//! use graphstudy_analysis::{
//!     analyzer::Analyzer, entropy_regression::EntropyRegression, kernel::Kernel,
//!     record::{Object, Record},
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let events = [0.3, 1.2, 0.7, 2.2, 1.9, 0.4, 1.1, 1.5];
//!
//! let mut info = Object::new();
//! let mut data = Vec::new();
//! let mut regression = EntropyRegression::new();
//! let mut analyzer = Analyzer::new(Kernel::Boxed);
//! for bins in [2, 4, 8] {
//!     analyzer.set_bins(Some(bins))?;
//!     let mut subinfo = Object::new();
//!     let analysis = analyzer.analyze(&events, &mut info, &mut subinfo)?;
//!     regression.push(&analysis);
//!     data.push(Record::from(subinfo));
//! }
//! info.insert("data", data);
//! regression.assign(&mut info);
//!
//! assert!(info.contains_key("entropy-slope"));
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod config;
pub mod entropy_regression;
pub mod kernel;
pub mod output;
pub mod record;
