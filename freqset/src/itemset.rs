use std::cmp::Ordering;
use std::collections::HashMap;

use crate::store::{ItemId, Vocabulary};

/// Set of distinct items, kept sorted so equality and hashing are structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Itemset(Vec<ItemId>);

/// Support count of every itemset a miner has counted.
pub type SupportMap = HashMap<Itemset, usize>;

impl Itemset {
    pub fn new(items: impl IntoIterator<Item = ItemId>) -> Self {
        let mut items: Vec<ItemId> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    pub fn singleton(item: ItemId) -> Self {
        Self(vec![item])
    }

    pub fn items(&self) -> &[ItemId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.0.binary_search(&item).is_ok()
    }

    /// Whether every item is present in `sorted`, a sorted item slice.
    ///
    /// Walks both slices once; a shorter `sorted` simply runs out first.
    pub fn is_subset_of(&self, sorted: &[ItemId]) -> bool {
        if self.0.len() > sorted.len() {
            return false;
        }
        let mut rest = sorted.iter();
        'outer: for item in &self.0 {
            for other in rest.by_ref() {
                match other.cmp(item) {
                    Ordering::Less => continue,
                    Ordering::Equal => continue 'outer,
                    Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }

    pub fn is_strict_subset_of(&self, other: &Itemset) -> bool {
        self.0.len() < other.0.len() && self.is_subset_of(&other.0)
    }

    pub fn union(&self, other: &Itemset) -> Itemset {
        let mut merged = Vec::with_capacity(self.0.len() + other.0.len());
        let (mut i, mut j) = (0, 0);
        while i < self.0.len() && j < other.0.len() {
            match self.0[i].cmp(&other.0[j]) {
                Ordering::Less => {
                    merged.push(self.0[i]);
                    i += 1;
                }
                Ordering::Greater => {
                    merged.push(other.0[j]);
                    j += 1;
                }
                Ordering::Equal => {
                    merged.push(self.0[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        merged.extend_from_slice(&self.0[i..]);
        merged.extend_from_slice(&other.0[j..]);
        Itemset(merged)
    }

    /// Size of `self ∪ other` without building it.
    pub fn union_len(&self, other: &Itemset) -> usize {
        let shared = self.0.iter().filter(|&&item| other.contains(item)).count();
        self.0.len() + other.0.len() - shared
    }

    pub fn labels<'a>(&self, vocabulary: &'a Vocabulary) -> Vec<&'a str> {
        vocabulary.labels_of(&self.0)
    }
}

impl From<Vec<ItemId>> for Itemset {
    fn from(items: Vec<ItemId>) -> Self {
        Itemset::new(items)
    }
}

impl From<&[ItemId]> for Itemset {
    fn from(items: &[ItemId]) -> Self {
        Itemset::new(items.iter().copied())
    }
}
