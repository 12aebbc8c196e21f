use serde::{Deserialize, Serialize};

/// Estimator applied by the [`Analyzer`](crate::analyzer::Analyzer).
///
/// Parsing is case-insensitive.
///
/// ```
/// use graphstudy_analysis::kernel::Kernel;
///
/// assert_eq!("Gaussian".parse::<Kernel>().unwrap(), Kernel::Gaussian);
/// assert_eq!(Kernel::Boxed.to_string(), "boxed");
/// ```
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    derive_more::FromStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Kernel {
    /// Write the events verbatim.
    #[display("raw")]
    Raw,
    /// Bin the events into a histogram.
    #[default]
    #[display("boxed")]
    Boxed,
    /// Smooth the events with a Gaussian kernel.
    #[display("gaussian")]
    Gaussian,
}

impl Kernel {
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Raw, Self::Boxed, Self::Gaussian]
    }
}
