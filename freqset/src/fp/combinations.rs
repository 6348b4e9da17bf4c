use crate::itemset::Itemset;
use crate::storage::FrequentItemsets;
use crate::store::ItemId;

/// Emits every size-`k` combination of the nodes of a single-path tree,
/// joined with `suffix`.
///
/// Counts never grow going down a path, so a combination's support is the
/// count of its deepest node, and the nodes meeting `min_count` form a
/// prefix of the path.
pub fn generate_combinations_from_path(
    path: &[(ItemId, usize)],
    k: usize,
    suffix: &[ItemId],
    min_count: usize,
    result: &mut FrequentItemsets,
) {
    let frequent_len = path.iter().take_while(|&&(_, count)| count >= min_count).count();
    if k == 0 || k > frequent_len {
        return;
    }

    let indices: Vec<usize> = (0..frequent_len).collect();
    let mut callback = |combination: &[usize]| {
        let deepest = combination[combination.len() - 1];
        let pattern = Itemset::new(
            suffix
                .iter()
                .copied()
                .chain(combination.iter().map(|&idx| path[idx].0)),
        );
        result.add(&pattern, path[deepest].1);
    };
    generate_combinations_recursive(&indices, k, 0, &mut Vec::new(), &mut callback);
}

pub fn generate_combinations_recursive<F>(
    items: &[usize],
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    callback: &mut F,
) where
    F: FnMut(&[usize]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    for i in start..items.len() {
        current.push(items[i]);
        generate_combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}
