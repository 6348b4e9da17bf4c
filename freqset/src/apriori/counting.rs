use rayon::prelude::*;

use crate::itemset::Itemset;
use crate::store::ItemId;

fn tally(counts: &mut [usize], candidates: &[Itemset], transaction: &[ItemId]) {
    for (count, candidate) in counts.iter_mut().zip(candidates) {
        if candidate.is_subset_of(transaction) {
            *count += 1;
        }
    }
}

/// Counts, in one pass over the transactions, how many contain each candidate.
///
/// The parallel path folds a private count vector per rayon worker and sums
/// the partial vectors afterwards.
pub fn count_support(candidates: &[Itemset], transactions: &[Vec<ItemId>], parallel: bool) -> Vec<usize> {
    let width = candidates.len();

    if !parallel {
        let mut counts = vec![0; width];
        for transaction in transactions {
            tally(&mut counts, candidates, transaction);
        }
        return counts;
    }

    transactions
        .par_iter()
        .fold(
            || vec![0; width],
            |mut counts, transaction| {
                tally(&mut counts, candidates, transaction);
                counts
            },
        )
        .reduce(
            || vec![0; width],
            |mut total, partial| {
                for (sum, count) in total.iter_mut().zip(partial) {
                    *sum += count;
                }
                total
            },
        )
}
