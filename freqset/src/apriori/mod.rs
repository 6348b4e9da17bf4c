//! Level-wise frequent itemset mining.
//!
//! Level `k` counts every size-`k` candidate in a single pass over the store,
//! keeps the ones meeting the support ratio, and self-joins the survivors
//! into size-`k + 1` candidates. Mining stops at the first level with no
//! survivors.

mod candidates;
mod counting;
mod stats;

pub use candidates::{initial_candidates, join};
pub use counting::count_support;
pub use stats::{IterationStats, LevelStats};

use crate::config::MinSupport;
use crate::itemset::{Itemset, SupportMap};
use crate::storage::{FrequentItemsets, FrequentLevel};
use crate::store::TransactionStore;

/// Everything an Apriori run produces.
#[derive(Debug, Clone, Default)]
pub struct AprioriOutput {
    pub itemsets: FrequentItemsets,
    pub stats: IterationStats,
    /// Counts of every candidate that was counted, frequent or not.
    pub support: SupportMap,
}

/// State carried from one level to the next.
struct Accumulator {
    num_transactions: usize,
    support: SupportMap,
    itemsets: FrequentItemsets,
    stats: IterationStats,
}

impl Accumulator {
    fn new(num_transactions: usize) -> Self {
        Self {
            num_transactions,
            support: SupportMap::new(),
            itemsets: FrequentItemsets::new(num_transactions),
            stats: IterationStats::default(),
        }
    }

    /// Counts and prunes one level, returning its frequent itemsets.
    fn count_and_prune(
        &mut self,
        size: usize,
        candidates: Vec<Itemset>,
        store: &TransactionStore,
        min_support: MinSupport,
        parallel: bool,
    ) -> Vec<Itemset> {
        let counts = count_support(&candidates, store.transactions(), parallel);
        let num_candidates = candidates.len();

        let mut frequent = Vec::new();
        let mut level = FrequentLevel::new(size);
        for (candidate, count) in candidates.into_iter().zip(counts) {
            if min_support.admits(count, self.num_transactions) {
                level.add_itemset(&candidate, count);
                frequent.push(candidate.clone());
            }
            *self.support.entry(candidate).or_insert(0) += count;
        }

        self.stats.record(size, num_candidates, frequent.len());
        if !level.is_empty() {
            self.itemsets.set_level(level);
        }
        frequent
    }

    fn finish(self) -> AprioriOutput {
        AprioriOutput {
            itemsets: self.itemsets,
            stats: self.stats,
            support: self.support,
        }
    }
}

/// Mines every itemset whose support ratio reaches `min_support`.
pub fn apriori(store: &TransactionStore, min_support: MinSupport, parallel: bool) -> AprioriOutput {
    let mut acc = Accumulator::new(store.len());
    let mut candidates = initial_candidates(store);
    let mut size = 1;

    while !candidates.is_empty() {
        let frequent = acc.count_and_prune(size, candidates, store, min_support, parallel);
        size += 1;
        candidates = join(&frequent, size);
    }

    acc.finish()
}

#[cfg(test)]
mod tests;
