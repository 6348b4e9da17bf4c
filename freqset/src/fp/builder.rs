use super::tree::FPTree;
use crate::store::{ItemId, TransactionStore};
use std::collections::{HashMap, HashSet};

/// Builds the tree over every transaction of the store, infrequent items
/// included, so header supports match a direct scan for every item.
pub fn build_fp_tree(store: &TransactionStore) -> FPTree {
    let mut fp_tree = FPTree::new();

    for transaction in store.transactions() {
        if !transaction.is_empty() {
            fp_tree.insert_transaction(transaction, 1);
        }
    }

    debug_assert!(fp_tree.verify(store).is_ok());
    fp_tree
}

/// Builds a conditional tree from a weighted pattern base, dropping items
/// whose total weight in the base stays below `min_count`.
pub fn build_conditional_fp_tree(prefix_paths: &[(Vec<ItemId>, usize)], min_count: usize) -> FPTree {
    let mut item_counts: HashMap<ItemId, usize> = HashMap::new();

    for (path, count) in prefix_paths {
        for &item in path {
            *item_counts.entry(item).or_insert(0) += count;
        }
    }

    let frequent_items: HashSet<ItemId> = item_counts
        .into_iter()
        .filter_map(|(item, count)| (count >= min_count).then_some(item))
        .collect();

    let mut conditional_tree = FPTree::new();

    for (path, count) in prefix_paths {
        let filtered_path: Vec<ItemId> = path
            .iter()
            .filter(|item| frequent_items.contains(item))
            .copied()
            .collect();

        if !filtered_path.is_empty() {
            conditional_tree.insert_transaction(&filtered_path, *count);
        }
    }

    conditional_tree
}

/// Items of `tree` whose header support reaches `min_count`, in item order.
pub fn frequent_items(tree: &FPTree, min_count: usize) -> Vec<ItemId> {
    tree.header_table
        .keys()
        .copied()
        .filter(|&item| tree.item_support(item) >= min_count)
        .collect()
}
