use super::*;

fn store(records: &[&[&str]]) -> TransactionStore {
    TransactionStore::from_records(records.iter().map(|r| r.iter().copied()))
}

fn support(value: f64) -> MinSupport {
    MinSupport::new(value).unwrap()
}

fn labelled(output: &AprioriOutput, store: &TransactionStore) -> Vec<(String, usize)> {
    let mut rows: Vec<_> = output
        .itemsets
        .iter()
        .map(|entry| (store.vocabulary().labels_of(entry.items).join(","), entry.support))
        .collect();
    rows.sort();
    rows
}

#[test]
fn test_basic_scenario() {
    // {a,b}, {a,b,c}, {a}, {b,c} at 0.5
    let store = store(&[&["a", "b"], &["a", "b", "c"], &["a"], &["b", "c"]]);
    let output = apriori(&store, support(0.5), false);

    assert_eq!(
        labelled(&output, &store),
        vec![
            ("a".to_string(), 3),
            ("a,b".to_string(), 2),
            ("b".to_string(), 3),
            ("b,c".to_string(), 2),
            ("c".to_string(), 2),
        ]
    );
    assert!(output.itemsets.level(3).is_none());

    let ratios: Vec<f64> = output
        .itemsets
        .iter()
        .filter(|entry| entry.items.len() == 1)
        .map(|entry| entry.ratio)
        .collect();
    assert_eq!(ratios, vec![0.75, 0.75, 0.5]);
}

#[test]
fn test_iteration_stats() {
    let store = store(&[&["a", "b"], &["a", "b", "c"], &["a"], &["b", "c"]]);
    let output = apriori(&store, support(0.5), false);

    // level 1: a b c -> all frequent; level 2: ab ac bc -> ab bc;
    // level 3: abc -> none
    assert_eq!(
        output.stats.levels,
        vec![
            LevelStats { level: 1, candidates: 3, frequent: 3 },
            LevelStats { level: 2, candidates: 3, frequent: 2 },
            LevelStats { level: 3, candidates: 1, frequent: 0 },
        ]
    );
    assert_eq!(output.stats.total_frequent, 5);
    assert_eq!(output.stats.total_frequent, output.itemsets.len());
    assert_eq!(output.stats.total_candidates(), 7);
}

#[test]
fn test_support_map_holds_infrequent_candidates() {
    let store = store(&[&["a", "b"], &["a", "b", "c"], &["a"], &["b", "c"]]);
    let output = apriori(&store, support(0.5), false);

    let ac = Itemset::new(vec![0, 2]);
    assert_eq!(output.support.get(&ac), Some(&1));
    assert_eq!(output.itemsets.support_of(&ac), None);
    assert_eq!(output.support.get(&Itemset::new(vec![0, 1, 2])), Some(&1));
}

#[test]
fn test_empty_store() {
    let store = TransactionStore::from_records(Vec::<Vec<String>>::new());
    let output = apriori(&store, support(0.5), false);

    assert!(output.itemsets.is_empty());
    assert!(output.stats.levels.is_empty());
    assert_eq!(output.stats.total_frequent, 0);
}

#[test]
fn test_nothing_frequent() {
    let store = store(&[&["a"], &["b"], &["c"]]);
    let output = apriori(&store, support(0.5), false);

    assert!(output.itemsets.is_empty());
    assert_eq!(output.stats.levels, vec![LevelStats { level: 1, candidates: 3, frequent: 0 }]);
}

#[test]
fn test_repeated_token_does_not_inflate_support() {
    let store = store(&[&["x", "x", "x"], &["y"]]);
    let output = apriori(&store, support(0.5), false);

    assert_eq!(output.itemsets.support_of(&Itemset::singleton(0)), Some(1));
    assert_eq!(output.itemsets.iter().next().unwrap().ratio, 0.5);
}

#[test]
fn test_full_support_threshold() {
    let store = store(&[&["a", "b"], &["a", "b", "c"], &["a", "b"]]);
    let output = apriori(&store, support(1.0), false);

    assert_eq!(
        labelled(&output, &store),
        vec![("a".to_string(), 3), ("a,b".to_string(), 3), ("b".to_string(), 3)]
    );
}

#[test]
fn test_join_collapses_duplicates() {
    let frequent = vec![
        Itemset::new(vec![0, 1]),
        Itemset::new(vec![0, 2]),
        Itemset::new(vec![1, 2]),
        Itemset::new(vec![2, 3]),
    ];
    let joined = join(&frequent, 3);

    // {0,1,2} arises from three pairs but appears once
    assert_eq!(
        joined,
        vec![
            Itemset::new(vec![0, 1, 2]),
            Itemset::new(vec![0, 2, 3]),
            Itemset::new(vec![1, 2, 3]),
        ]
    );
}

#[test]
fn test_initial_candidates_skip_absent_columns() {
    use ndarray::Array2;

    let matrix = Array2::from_shape_vec((2, 3), vec![1, 0, 0, 1, 0, 1]).unwrap();
    let store = TransactionStore::from_matrix(matrix.view());

    assert_eq!(
        initial_candidates(&store),
        vec![Itemset::singleton(0), Itemset::singleton(2)]
    );
}

#[test]
fn test_count_support_parallel_matches_sequential() {
    let store = store(&[
        &["a", "b", "c"],
        &["a", "c"],
        &["b", "d"],
        &["a", "b", "c", "d"],
        &["c"],
    ]);
    let candidates = vec![
        Itemset::new(vec![0, 2]),
        Itemset::new(vec![1]),
        Itemset::new(vec![1, 3]),
        Itemset::new(vec![0, 1, 2, 3]),
    ];

    let sequential = count_support(&candidates, store.transactions(), false);
    let parallel = count_support(&candidates, store.transactions(), true);
    assert_eq!(sequential, vec![3, 3, 2, 1]);
    assert_eq!(sequential, parallel);
}
