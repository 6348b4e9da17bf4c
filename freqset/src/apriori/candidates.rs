use std::collections::BTreeSet;

use crate::itemset::Itemset;
use crate::store::TransactionStore;

/// One singleton candidate per item occurring in any transaction.
pub fn initial_candidates(store: &TransactionStore) -> Vec<Itemset> {
    let items: BTreeSet<_> = store.transactions().iter().flatten().copied().collect();
    items.into_iter().map(Itemset::singleton).collect()
}

/// Self-join: every union of two frequent itemsets holding exactly `size`
/// items. Identical unions collapse into one candidate.
pub fn join(frequent: &[Itemset], size: usize) -> Vec<Itemset> {
    let mut joined = BTreeSet::new();
    for (i, left) in frequent.iter().enumerate() {
        for right in &frequent[i + 1..] {
            if left.union_len(right) == size {
                joined.insert(left.union(right));
            }
        }
    }
    joined.into_iter().collect()
}
