//! Output destinations and the plain-text tables written to them.
//!
//! Every table starts with a block of `#`-commented header lines summarizing the data,
//! followed by an empty line and one row per data point. Numbers are right-aligned in
//! columns of width [`COLUMN_WIDTH`] and printed in scientific notation with enough
//! digits to round-trip an `f64`, so the files can be fed to Gnuplot as-is.

use std::{
    convert::Infallible,
    fmt,
    fs::File,
    io::{self, BufWriter, StdoutLock, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use graphstudy_stats::{density::Density, histogram::Histogram, summary::Summary};
use serde::{Deserialize, Serialize};

/// Width of every column in the written tables.
pub const COLUMN_WIDTH: usize = 26;

/// Digits after the decimal point (17 significant digits in total).
const PRECISION: usize = 16;

/// Where tabular output goes.
///
/// Parses `-` as standard output and anything else as a file name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// Discard the output.
    #[default]
    Null,
    /// Write to standard output.
    Stdio,
    /// Write to (create or truncate) a file.
    File(PathBuf),
}

impl Destination {
    /// Returns the file name, if any.
    ///
    /// The null and standard output destinations have no file name.
    #[must_use]
    pub fn filename(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Null | Self::Stdio => None,
        }
    }

    /// Replaces every `%` in a file name by the decimal iteration number.
    ///
    /// Null and standard output destinations are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphstudy_analysis::output::Destination;
    ///
    /// let pattern: Destination = "histo-%.txt".parse().unwrap();
    /// assert_eq!(pattern.expand_filename(3), "histo-3.txt".parse().unwrap());
    /// assert_eq!(Destination::Stdio.expand_filename(3), Destination::Stdio);
    /// ```
    #[must_use]
    pub fn expand_filename(&self, iteration: usize) -> Self {
        match self {
            Self::File(path) => {
                let name = path.to_string_lossy();
                if name.contains('%') {
                    Self::File(PathBuf::from(name.replace('%', &iteration.to_string())))
                } else {
                    self.clone()
                }
            }
            Self::Null | Self::Stdio => self.clone(),
        }
    }

    /// Opens the destination for writing.
    ///
    /// Returns `None` for the null destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn open(&self) -> io::Result<Option<Output>> {
        match self {
            Self::Null => Ok(None),
            Self::Stdio => Ok(Some(Output::Stdout {
                writer: io::stdout().lock(),
            })),
            Self::File(path) => Ok(Some(Output::File {
                writer: BufWriter::new(File::create(path)?),
            })),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Stdio => f.write_str("stdout"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl FromStr for Destination {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "-" {
            Self::Stdio
        } else {
            Self::File(PathBuf::from(s))
        })
    }
}

/// An opened, buffered output destination.
#[derive(Debug)]
pub enum Output {
    Stdout { writer: StdoutLock<'static> },
    File { writer: BufWriter<File> },
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer } => writer.flush(),
        }
    }
}

struct Real(f64);

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>COLUMN_WIDTH$.PRECISION$e}", self.0)
    }
}

fn write_header_count<W: Write>(w: &mut W, label: &str, value: usize) -> io::Result<()> {
    writeln!(w, "# {label:<24}{value:>COLUMN_WIDTH$}")
}

fn write_header_real<W: Write>(w: &mut W, label: &str, value: f64) -> io::Result<()> {
    writeln!(w, "# {label:<24}{}", Real(value))
}

fn write_summary_header<W: Write>(w: &mut W, summary: &Summary) -> io::Result<()> {
    write_header_real(w, "Minimum:", summary.min)?;
    write_header_real(w, "Maximum:", summary.max)?;
    write_header_real(w, "Arithmetic mean:", summary.mean)?;
    write_header_real(w, "Root mean square:", summary.rms)
}

/// Writes the events, one per line.
///
/// # Errors
///
/// Returns any error of the underlying writer.
pub fn write_events<W, I>(w: &mut W, summary: &Summary, events: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = f64>,
{
    write_header_count(w, "Number of events:", summary.count)?;
    write_summary_header(w, summary)?;
    writeln!(w)?;
    for x in events {
        writeln!(w, "{}", Real(x))?;
    }
    Ok(())
}

/// Writes the bin centers and relative frequencies of a histogram.
///
/// # Errors
///
/// Returns any error of the underlying writer.
pub fn write_frequencies<W: Write>(w: &mut W, histogram: &Histogram) -> io::Result<()> {
    write_header_count(w, "Number of events:", histogram.size())?;
    write_header_count(w, "Bin count:", histogram.bincount())?;
    write_summary_header(w, histogram.summary())?;
    write_header_real(w, "Entropy:", histogram.entropy())?;
    writeln!(w)?;
    for (center, frequency) in histogram.bins() {
        writeln!(w, "{}{}", Real(center), Real(frequency))?;
    }
    Ok(())
}

/// Writes the sampled points of a density.
///
/// # Errors
///
/// Returns any error of the underlying writer.
pub fn write_density<W: Write>(w: &mut W, summary: &Summary, density: &Density) -> io::Result<()> {
    write_header_count(w, "Number of events:", summary.count)?;
    write_summary_header(w, summary)?;
    write_header_count(w, "Density step count:", density.len())?;
    writeln!(w)?;
    for &(x, y) in density.points() {
        writeln!(w, "{}{}", Real(x), Real(y))?;
    }
    Ok(())
}
