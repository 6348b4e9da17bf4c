use super::builder::{build_conditional_fp_tree, build_fp_tree, frequent_items};
use super::combinations::generate_combinations_from_path;
use super::tree::FPTree;
use crate::config::MinSupport;
use crate::itemset::Itemset;
use crate::storage::FrequentItemsets;
use crate::store::{ItemId, TransactionStore};
use rayon::prelude::*;

/// Mines every itemset of the store whose support reaches `min_support`.
pub fn fp_growth_algorithm(store: &TransactionStore, min_support: MinSupport, parallel: bool) -> FrequentItemsets {
    let num_transactions = store.len();
    if num_transactions == 0 {
        return FrequentItemsets::new(0);
    }

    let fp_tree = build_fp_tree(store);
    mine_patterns(&fp_tree, min_support.min_count(num_transactions), num_transactions, parallel)
}

/// Mines `fp_tree` for every pattern reaching `min_count`.
pub fn mine_patterns(
    fp_tree: &FPTree,
    min_count: usize,
    num_transactions: usize,
    parallel: bool,
) -> FrequentItemsets {
    fp_growth_recursive(fp_tree, &[], min_count, num_transactions, parallel)
}

/// Mines one (conditional) tree. Every pattern found is joined with `suffix`,
/// the items the tree is conditioned on.
pub fn fp_growth_recursive(
    fp_tree: &FPTree,
    suffix: &[ItemId],
    min_count: usize,
    num_transactions: usize,
    parallel: bool,
) -> FrequentItemsets {
    let mut local_result = FrequentItemsets::new(num_transactions);

    if fp_tree.has_single_path() {
        let path = fp_tree.get_single_path();
        for k in 1..=path.len() {
            generate_combinations_from_path(&path, k, suffix, min_count, &mut local_result);
        }
        return local_result;
    }

    let grow = |&item: &ItemId| -> FrequentItemsets {
        let mut item_result = FrequentItemsets::new(num_transactions);

        let mut new_suffix = suffix.to_vec();
        new_suffix.push(item);
        item_result.add(&Itemset::new(new_suffix.iter().copied()), fp_tree.item_support(item));

        let prefix_paths = fp_tree.get_prefix_paths(item);
        if !prefix_paths.is_empty() {
            let conditional_tree = build_conditional_fp_tree(&prefix_paths, min_count);
            if !conditional_tree.is_empty() {
                item_result.merge(fp_growth_recursive(
                    &conditional_tree,
                    &new_suffix,
                    min_count,
                    num_transactions,
                    parallel,
                ));
            }
        }

        item_result
    };

    let items = frequent_items(fp_tree, min_count);
    let branch_results: Vec<FrequentItemsets> = if parallel {
        items.par_iter().map(grow).collect()
    } else {
        items.iter().map(grow).collect()
    };

    for item_results in branch_results {
        local_result.merge(item_results);
    }
    local_result
}
