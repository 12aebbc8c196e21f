//! Generic analysis of existing raw data.
//!
//! The events are analyzed once per configuration. Widths and bin counts are given as
//! lists, and iteration `i` uses the `i`-th entry of each list (or none if the list is
//! shorter). A `%` in the output file name expands to the iteration number.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use graphstudy_analysis::{
    analyzer::Analyzer,
    entropy_regression::EntropyRegression,
    kernel::Kernel,
    output::Destination,
    record::{Object, Record},
};
use tracing::info;

use crate::{events, util};

const PRODUCER: &str = "rawdata";

#[derive(Debug, Clone, Args)]
pub(crate) struct RawdataArg {
    /// File with one event per line (standard input if omitted or `-`)
    pub input: Option<PathBuf>,

    /// Estimator to apply (raw, boxed or gaussian)
    #[arg(short, long, default_value = "boxed")]
    pub kernel: Kernel,

    /// Bin widths or filter widths (comma-separated, one analysis per value)
    #[arg(short, long, value_delimiter = ',')]
    pub width: Vec<f64>,

    /// Bin counts (comma-separated, one analysis per value)
    #[arg(short, long, value_delimiter = ',')]
    pub bins: Vec<usize>,

    /// Number of evaluation intervals of the Gaussian kernel (adaptive if omitted)
    #[arg(short, long)]
    pub points: Option<usize>,

    /// Ignore events smaller than this value
    #[arg(long, allow_negative_numbers = true)]
    pub lower: Option<f64>,

    /// Ignore events larger than this value
    #[arg(long, allow_negative_numbers = true)]
    pub upper: Option<f64>,

    /// Output file for the data tables (`-` for standard output, discarded if omitted)
    #[arg(short, long)]
    pub output: Option<Destination>,

    /// Output file for the JSON meta data (`-` for standard output)
    #[arg(short, long, default_value = "-")]
    pub meta: Destination,
}

impl RawdataArg {
    fn iterations(&self) -> usize {
        self.width.len().max(self.bins.len()).max(1)
    }
}

pub(crate) fn run(arg: &RawdataArg) -> anyhow::Result<()> {
    let events = events::read_events(arg.input.as_deref())?;
    info!(events = events.len(), "loaded raw data");

    let info = analyze(arg, &events)?;
    util::write_json(&arg.meta, &info)
}

fn analyze(arg: &RawdataArg, events: &[f64]) -> anyhow::Result<Object> {
    let mut info = Object::new();
    info.insert("producer", PRODUCER);

    let mut analyzer = Analyzer::new(arg.kernel);
    analyzer
        .set_range(arg.lower, arg.upper)
        .context("Invalid event range")?;
    analyzer
        .set_points(arg.points)
        .context("Invalid number of evaluation points")?;
    let output = arg.output.clone().unwrap_or_default();

    let mut data = Vec::new();
    let mut regression = EntropyRegression::new();
    for i in 0..arg.iterations() {
        let width = arg.width.get(i).copied();
        let bins = arg.bins.get(i).copied();
        analyzer
            .set_width(width)
            .with_context(|| format!("Invalid width in iteration {i}"))?;
        analyzer
            .set_bins(bins)
            .with_context(|| format!("Invalid bin count in iteration {i}"))?;
        analyzer.set_output(output.expand_filename(i));

        let mut subinfo = Object::new();
        let analysis = analyzer
            .analyze(events, &mut info, &mut subinfo)
            .with_context(|| format!("Failed to analyze raw data in iteration {i}"))?;
        info!(iteration = i, ?width, ?bins, "analyzed raw data");
        regression.push(&analysis);
        data.push(Record::from(subinfo));
    }
    info.insert("data", data);
    regression.assign(&mut info);
    Ok(info)
}
