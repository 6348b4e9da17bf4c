//! Frequent and closed itemset mining.
//!
//! Two engines mine the same itemsets from a [`TransactionStore`]: the
//! level-wise [`apriori`] engine and the tree-based [`fp`] (FP-Growth)
//! engine. [`closed`] reduces a mined collection to its closed itemsets.
//!
//! ```rust
//! use freqset::{mine, Algorithm, MinerConfig, TransactionStore};
//!
//! let store = TransactionStore::from_records(vec![
//!     vec!["a", "b"],
//!     vec!["a", "b", "c"],
//!     vec!["a"],
//!     vec!["b", "c"],
//! ]);
//! let config = MinerConfig::builder()
//!     .with_min_support(0.5)
//!     .with_algorithm(Algorithm::FpGrowth)
//!     .build()
//!     .unwrap();
//!
//! let outcome = mine(&store, &config);
//! assert_eq!(outcome.itemsets.len(), 5);
//! ```

pub mod apriori;
pub mod closed;
pub mod config;
pub mod error;
pub mod fp;
pub mod io;
pub mod itemset;
pub mod storage;
pub mod store;

#[cfg(feature = "python")]
mod python;

pub use apriori::{apriori, AprioriOutput, IterationStats, LevelStats};
pub use closed::closed_itemsets;
pub use config::{Algorithm, MinSupport, MinerConfig, MinerConfigBuilder};
pub use error::{MineResult, MiningError};
pub use fp::fp_growth_algorithm;
pub use itemset::{Itemset, SupportMap};
pub use storage::{FrequentItemset, FrequentItemsets, FrequentLevel};
pub use store::{ItemId, TransactionStore, Vocabulary};

/// Result of a mining run, whichever engine produced it.
#[derive(Debug, Clone, Default)]
pub struct MiningOutcome {
    pub itemsets: FrequentItemsets,
    /// Support of every counted itemset; covers at least every frequent one.
    pub support: SupportMap,
    /// Per-level statistics, only recorded by Apriori.
    pub stats: Option<IterationStats>,
}

impl MiningOutcome {
    /// Closed subset of the mined itemsets.
    pub fn closed(&self) -> FrequentItemsets {
        self.itemsets.closed()
    }
}

/// Runs the engine selected by `config` over `store`.
pub fn mine(store: &TransactionStore, config: &MinerConfig) -> MiningOutcome {
    match config.algorithm {
        Algorithm::Apriori => {
            let output = apriori(store, config.min_support, config.parallel);
            MiningOutcome {
                itemsets: output.itemsets,
                support: output.support,
                stats: Some(output.stats),
            }
        }
        Algorithm::FpGrowth => {
            let itemsets = fp_growth_algorithm(store, config.min_support, config.parallel);
            MiningOutcome {
                support: itemsets.support_map(),
                itemsets,
                stats: None,
            }
        }
    }
}
