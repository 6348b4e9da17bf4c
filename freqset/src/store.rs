use std::collections::{BTreeSet, HashMap, HashSet};

use ndarray::ArrayView2;

/// Dense item handle. Ids follow the canonical item order.
pub type ItemId = usize;

/// Two-way mapping between item labels and their ids.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    labels: Vec<String>,
    index: HashMap<String, ItemId>,
}

impl Vocabulary {
    fn from_labels(labels: Vec<String>) -> Self {
        let index = labels
            .iter()
            .enumerate()
            .map(|(id, label)| (label.clone(), id))
            .collect();
        Self { labels, index }
    }

    pub fn label(&self, id: ItemId) -> &str {
        &self.labels[id]
    }

    pub fn id(&self, label: &str) -> Option<ItemId> {
        self.index.get(label).copied()
    }

    pub fn labels_of(&self, items: &[ItemId]) -> Vec<&str> {
        items.iter().map(|&id| self.label(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Immutable, insertion-ordered collection of transactions.
///
/// Each transaction is kept twice: as the order-preserving sequence of its
/// distinct items (first occurrence wins) and as its canonical item set,
/// sorted by id. Both engines consume the canonical form.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    sequences: Vec<Vec<ItemId>>,
    itemsets: Vec<Vec<ItemId>>,
    vocabulary: Vocabulary,
}

impl TransactionStore {
    /// Interns raw token records. Ids are assigned in lexicographic label
    /// order, so sorting by id sorts by label.
    pub fn from_records<I, R, S>(records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw: Vec<Vec<String>> = records
            .into_iter()
            .map(|record| record.into_iter().map(Into::into).collect())
            .collect();

        let distinct: BTreeSet<&str> = raw.iter().flatten().map(String::as_str).collect();
        let vocabulary = Vocabulary::from_labels(distinct.into_iter().map(str::to_string).collect());

        let sequences = raw
            .iter()
            .map(|record| {
                let mut seen = HashSet::with_capacity(record.len());
                record
                    .iter()
                    .filter_map(|label| vocabulary.id(label))
                    .filter(|&id| seen.insert(id))
                    .collect()
            })
            .collect();

        Self::from_sequences(sequences, vocabulary)
    }

    /// Reads a binary transaction matrix: one row per transaction, a
    /// non-zero cell marks the column's item as present. The column index is
    /// the item id and its decimal rendering the label.
    ///
    /// Canonical order here is column order, not label order: column 10
    /// (`"10"`) sorts after column 2 (`"2"`).
    pub fn from_matrix(transactions: ArrayView2<i32>) -> Self {
        let num_transactions = transactions.shape()[0];
        let num_items = transactions.shape()[1];

        let sequences = (0..num_transactions)
            .map(|i| {
                (0..num_items)
                    .filter(|&j| transactions[[i, j]] != 0)
                    .collect()
            })
            .collect();
        let vocabulary = Vocabulary::from_labels((0..num_items).map(|j| j.to_string()).collect());

        Self::from_sequences(sequences, vocabulary)
    }

    fn from_sequences(sequences: Vec<Vec<ItemId>>, vocabulary: Vocabulary) -> Self {
        let itemsets = sequences
            .iter()
            .map(|sequence: &Vec<ItemId>| {
                let mut items = sequence.clone();
                items.sort_unstable();
                items
            })
            .collect();

        Self {
            sequences,
            itemsets,
            vocabulary,
        }
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    /// Canonical item sets, in insertion order.
    pub fn transactions(&self) -> &[Vec<ItemId>] {
        &self.itemsets
    }

    /// Order-preserving deduplicated item sequence of one transaction.
    pub fn sequence(&self, idx: usize) -> &[ItemId] {
        &self.sequences[idx]
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn num_items(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of transactions holding each item, indexed by id.
    pub fn item_frequencies(&self) -> Vec<usize> {
        let mut counts = vec![0; self.num_items()];
        for transaction in &self.itemsets {
            for &item in transaction {
                counts[item] += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_ids_follow_label_order() {
        let store = TransactionStore::from_records(vec![vec!["pear", "apple"], vec!["fig"]]);
        let vocab = store.vocabulary();

        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.id("apple"), Some(0));
        assert_eq!(vocab.id("fig"), Some(1));
        assert_eq!(vocab.id("pear"), Some(2));
        assert_eq!(vocab.id("kiwi"), None);
        assert_eq!(vocab.label(1), "fig");
    }

    #[test]
    fn test_sequence_keeps_order_and_itemset_sorts() {
        let store = TransactionStore::from_records(vec![vec!["c", "a", "c", "b", "a"]]);

        assert_eq!(store.sequence(0), &[2, 0, 1]);
        assert_eq!(store.transactions()[0], vec![0, 1, 2]);
    }

    #[test]
    fn test_repeated_token_counts_once() {
        let store = TransactionStore::from_records(vec![vec!["x", "x", "x"], vec!["x", "y"]]);

        assert_eq!(store.transactions()[0], vec![0]);
        assert_eq!(store.item_frequencies(), vec![2, 1]);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let store = TransactionStore::from_records(vec![vec!["b"], vec![], vec!["a"]]);

        assert_eq!(store.len(), 3);
        assert_eq!(store.transactions()[0], vec![1]);
        assert!(store.transactions()[1].is_empty());
        assert_eq!(store.transactions()[2], vec![0]);
    }

    #[test]
    fn test_empty_store() {
        let store = TransactionStore::from_records(Vec::<Vec<String>>::new());
        assert!(store.is_empty());
        assert_eq!(store.num_items(), 0);
        assert!(store.item_frequencies().is_empty());
    }

    #[test]
    fn test_from_matrix() {
        let matrix = Array2::from_shape_vec(
            (3, 3),
            vec![
                1, 1, 0, //
                0, 0, 1, //
                1, 0, 1,
            ],
        )
        .unwrap();

        let store = TransactionStore::from_matrix(matrix.view());
        assert_eq!(store.len(), 3);
        assert_eq!(store.transactions()[0], vec![0, 1]);
        assert_eq!(store.transactions()[1], vec![2]);
        assert_eq!(store.transactions()[2], vec![0, 2]);
        assert_eq!(store.vocabulary().label(2), "2");
        assert_eq!(store.item_frequencies(), vec![2, 1, 2]);
    }

    #[test]
    fn test_from_matrix_orders_by_column_not_label() {
        let mut matrix = Array2::<i32>::zeros((1, 11));
        matrix[[0, 2]] = 1;
        matrix[[0, 10]] = 1;

        let store = TransactionStore::from_matrix(matrix.view());
        assert_eq!(store.transactions()[0], vec![2, 10]);
        assert_eq!(store.vocabulary().labels_of(&[2, 10]), vec!["2", "10"]);
        assert_eq!(store.vocabulary().id("10"), Some(10));
    }
}
