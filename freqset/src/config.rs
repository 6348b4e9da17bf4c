//! Configuration types for the mining engines.

use std::fmt;
use std::str::FromStr;

use crate::error::{MineResult, MiningError};

/// Minimum support ratio, guaranteed to lie in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct MinSupport(f64);

impl MinSupport {
    pub fn new(value: f64) -> MineResult<Self> {
        // NaN fails both comparisons
        if value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(MiningError::InvalidMinSupport(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether `count` out of `num_transactions` meets the ratio.
    pub fn admits(self, count: usize, num_transactions: usize) -> bool {
        num_transactions > 0 && count as f64 / num_transactions as f64 >= self.0
    }

    /// Smallest absolute count whose ratio meets the threshold.
    ///
    /// Starts from `ceil(ratio * n)` and walks it onto the exact boundary of
    /// [`MinSupport::admits`], so a count test and a ratio test agree on
    /// every input.
    pub fn min_count(self, num_transactions: usize) -> usize {
        if num_transactions == 0 {
            return 1;
        }
        let mut count = (self.0 * num_transactions as f64).ceil() as usize;
        while count > 0 && self.admits(count - 1, num_transactions) {
            count -= 1;
        }
        while count < num_transactions && !self.admits(count, num_transactions) {
            count += 1;
        }
        count.max(1)
    }
}

impl fmt::Display for MinSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Mining engine selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Apriori,
    FpGrowth,
}

impl FromStr for Algorithm {
    type Err = MiningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "apriori" => Ok(Algorithm::Apriori),
            "fp-growth" | "fpgrowth" | "fp" => Ok(Algorithm::FpGrowth),
            other => Err(MiningError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Apriori => write!(f, "apriori"),
            Algorithm::FpGrowth => write!(f, "fp-growth"),
        }
    }
}

/// Configuration for a mining run.
///
/// # Example
///
/// ```rust
/// use freqset::{Algorithm, MinerConfig};
///
/// let config = MinerConfig::builder()
///     .with_min_support(0.25)
///     .with_algorithm(Algorithm::FpGrowth)
///     .with_parallel(true)
///     .build()
///     .unwrap();
/// assert_eq!(config.min_support.value(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinerConfig {
    /// Minimum support ratio.
    pub min_support: MinSupport,
    /// Engine used for frequent itemset mining.
    pub algorithm: Algorithm,
    /// Spread support counting and branch mining over rayon workers.
    pub parallel: bool,
}

impl MinerConfig {
    /// Creates a new builder for MinerConfig.
    pub fn builder() -> MinerConfigBuilder {
        MinerConfigBuilder::default()
    }
}

/// Builder for MinerConfig.
#[derive(Debug, Clone)]
pub struct MinerConfigBuilder {
    min_support: f64,
    algorithm: Algorithm,
    parallel: bool,
}

impl Default for MinerConfigBuilder {
    fn default() -> Self {
        Self {
            min_support: 0.1,
            algorithm: Algorithm::default(),
            parallel: false,
        }
    }
}

impl MinerConfigBuilder {
    /// Sets the minimum support ratio. Validated by [`build`](Self::build).
    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds the MinerConfig, rejecting a support ratio outside `(0, 1]`.
    pub fn build(self) -> MineResult<MinerConfig> {
        Ok(MinerConfig {
            min_support: MinSupport::new(self.min_support)?,
            algorithm: self.algorithm,
            parallel: self.parallel,
        })
    }
}
