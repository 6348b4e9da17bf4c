//! Closed itemset filtering.
//!
//! An itemset is closed when no other itemset of the same collection is a
//! strict superset with identical support. Closure is judged only against the
//! collection handed in, not against every possible superset.

use crate::itemset::{Itemset, SupportMap};

fn support_of(itemset: &Itemset, support: &SupportMap) -> usize {
    support.get(itemset).copied().unwrap_or(0)
}

/// Whether `candidate` has no strict superset in `itemsets` with equal support.
pub fn is_closed(candidate: &Itemset, itemsets: &[Itemset], support: &SupportMap) -> bool {
    let count = support_of(candidate, support);
    !itemsets.iter().any(|larger| {
        candidate.is_strict_subset_of(larger) && support_of(larger, support) == count
    })
}

/// Closed members of `itemsets`, in input order.
pub fn closed_itemsets(itemsets: &[Itemset], support: &SupportMap) -> Vec<Itemset> {
    itemsets
        .iter()
        .filter(|candidate| is_closed(candidate, itemsets, support))
        .cloned()
        .collect()
}
