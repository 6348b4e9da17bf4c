use crate::closed;
use crate::itemset::{Itemset, SupportMap};
use crate::store::ItemId;

/// Flat storage for itemsets of one size together with their supports.
#[derive(Debug, Clone, Default)]
pub struct ItemsetStorage {
    items: Vec<ItemId>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

impl ItemsetStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a canonical (sorted, distinct) item slice.
    pub fn push(&mut self, items: &[ItemId], support: usize) -> usize {
        let start = self.items.len();
        self.items.extend_from_slice(items);
        self.offsets.push((start, items.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[ItemId] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    fn append(&mut self, other: ItemsetStorage) {
        let base = self.items.len();
        self.items.extend(other.items);
        self.offsets
            .extend(other.offsets.into_iter().map(|(start, len)| (start + base, len)));
        self.supports.extend(other.supports);
    }
}

/// Frequent itemsets sharing one size.
#[derive(Debug, Clone)]
pub struct FrequentLevel {
    storage: ItemsetStorage,
    pub itemset_size: usize,
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: ItemsetStorage::new(),
            itemset_size,
        }
    }

    pub fn add_itemset(&mut self, itemset: &Itemset, support: usize) -> usize {
        debug_assert_eq!(itemset.len(), self.itemset_size);
        self.storage.push(itemset.items(), support)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &[ItemId] {
        self.storage.get_itemset(idx)
    }

    pub fn support(&self, idx: usize) -> usize {
        self.storage.support(idx)
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[ItemId]> {
        (0..self.storage.len()).map(move |idx| self.get_itemset(idx))
    }
}

/// One mined itemset with its absolute and relative support.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequentItemset<'a> {
    pub items: &'a [ItemId],
    pub support: usize,
    pub ratio: f64,
}

/// Mining result: frequent itemsets grouped by size, level `k` at index `k - 1`.
#[derive(Debug, Clone, Default)]
pub struct FrequentItemsets {
    levels: Vec<FrequentLevel>,
    num_transactions: usize,
}

impl FrequentItemsets {
    pub fn new(num_transactions: usize) -> Self {
        Self {
            levels: Vec::new(),
            num_transactions,
        }
    }

    pub fn add(&mut self, itemset: &Itemset, support: usize) {
        let size = itemset.len();
        if size == 0 {
            return;
        }
        while self.levels.len() < size {
            self.levels.push(FrequentLevel::new(self.levels.len() + 1));
        }
        self.levels[size - 1].add_itemset(itemset, support);
    }

    /// Installs a whole level, replacing whatever was stored for that size.
    pub(crate) fn set_level(&mut self, level: FrequentLevel) {
        let size = level.itemset_size;
        while self.levels.len() < size {
            self.levels.push(FrequentLevel::new(self.levels.len() + 1));
        }
        self.levels[size - 1] = level;
    }

    /// Moves every itemset of `other` into `self`.
    pub fn merge(&mut self, other: FrequentItemsets) {
        for level in other.levels {
            let size = level.itemset_size;
            while self.levels.len() < size {
                self.levels.push(FrequentLevel::new(self.levels.len() + 1));
            }
            self.levels[size - 1].storage.append(level.storage);
        }
    }

    pub fn levels(&self) -> &[FrequentLevel] {
        &self.levels
    }

    pub fn level(&self, itemset_size: usize) -> Option<&FrequentLevel> {
        itemset_size
            .checked_sub(1)
            .and_then(|idx| self.levels.get(idx))
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn len(&self) -> usize {
        self.levels.iter().map(FrequentLevel::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = FrequentItemset<'_>> {
        let total = self.num_transactions as f64;
        self.levels.iter().flat_map(move |level| {
            (0..level.len()).map(move |idx| FrequentItemset {
                items: level.get_itemset(idx),
                support: level.support(idx),
                ratio: level.support(idx) as f64 / total,
            })
        })
    }

    pub fn itemsets(&self) -> Vec<Itemset> {
        self.iter().map(|entry| Itemset::from(entry.items)).collect()
    }

    pub fn support_map(&self) -> SupportMap {
        self.iter()
            .map(|entry| (Itemset::from(entry.items), entry.support))
            .collect()
    }

    /// Support of `itemset`, if it was mined.
    pub fn support_of(&self, itemset: &Itemset) -> Option<usize> {
        let level = self.level(itemset.len())?;
        (0..level.len())
            .find(|&idx| level.get_itemset(idx) == itemset.items())
            .map(|idx| level.support(idx))
    }

    /// Closed subset of these itemsets, judged against each other.
    pub fn closed(&self) -> FrequentItemsets {
        let support = self.support_map();
        let mut closed_sets = FrequentItemsets::new(self.num_transactions);
        for itemset in closed::closed_itemsets(&self.itemsets(), &support) {
            let count = support.get(&itemset).copied().unwrap_or(0);
            closed_sets.add(&itemset, count);
        }
        closed_sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itemset_storage() {
        let mut storage = ItemsetStorage::new();

        storage.push(&[2, 5, 7], 4);
        storage.push(&[1, 3], 2);
        storage.push(&[2, 3, 5, 9], 1);

        assert_eq!(storage.get_itemset(0), &[2, 5, 7]);
        assert_eq!(storage.get_itemset(1), &[1, 3]);
        assert_eq!(storage.get_itemset(2), &[2, 3, 5, 9]);
        assert_eq!(storage.support(0), 4);
        assert_eq!(storage.len(), 3);
    }

    #[test]
    fn test_frequent_level() {
        let mut level = FrequentLevel::new(2);

        level.add_itemset(&Itemset::new(vec![1, 2]), 3);
        level.add_itemset(&Itemset::new(vec![4, 3]), 2);

        assert_eq!(level.len(), 2);
        assert_eq!(level.itemset_size, 2);
        assert_eq!(level.get_itemset(1), &[3, 4]);
        assert_eq!(level.iter_itemsets().count(), 2);
    }

    #[test]
    fn test_frequent_itemsets_grouping_and_ratio() {
        let mut result = FrequentItemsets::new(4);
        result.add(&Itemset::new(vec![0, 1]), 2);
        result.add(&Itemset::singleton(0), 3);

        assert_eq!(result.levels().len(), 2);
        assert_eq!(result.len(), 2);
        assert_eq!(result.level(1).unwrap().len(), 1);
        assert!(result.level(0).is_none());

        let entries: Vec<_> = result.iter().collect();
        assert_eq!(entries[0].items, &[0]);
        assert_eq!(entries[0].ratio, 0.75);
        assert_eq!(entries[1].ratio, 0.5);
        assert_eq!(result.support_of(&Itemset::new(vec![1, 0])), Some(2));
        assert_eq!(result.support_of(&Itemset::singleton(1)), None);
    }

    #[test]
    fn test_merge() {
        let mut left = FrequentItemsets::new(5);
        left.add(&Itemset::singleton(0), 5);

        let mut right = FrequentItemsets::new(5);
        right.add(&Itemset::singleton(1), 4);
        right.add(&Itemset::new(vec![0, 1]), 4);

        left.merge(right);
        assert_eq!(left.len(), 3);
        assert_eq!(left.level(1).unwrap().get_itemset(1), &[1]);
        assert_eq!(left.level(2).unwrap().get_itemset(0), &[0, 1]);
        assert_eq!(left.support_map().len(), 3);
    }

    #[test]
    fn test_support_map_tells_equal_sized_results_apart() {
        let mut left = FrequentItemsets::new(4);
        left.add(&Itemset::singleton(0), 3);
        left.add(&Itemset::singleton(1), 2);

        let mut right = FrequentItemsets::new(4);
        right.add(&Itemset::singleton(1), 2);
        right.add(&Itemset::singleton(0), 2);

        assert_eq!(left.len(), right.len());
        assert_ne!(left.support_map(), right.support_map());

        let mut reordered = FrequentItemsets::new(4);
        reordered.add(&Itemset::singleton(1), 2);
        reordered.add(&Itemset::singleton(0), 3);
        assert_eq!(left.support_map(), reordered.support_map());
    }
}
