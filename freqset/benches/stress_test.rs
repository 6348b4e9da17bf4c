use freqset::{apriori, fp_growth_algorithm, MinSupport, TransactionStore};
use ndarray::Array2;
use rand::Rng;
use std::time::Instant;

fn generate_store(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> TransactionStore {
    let mut rng = rand::thread_rng();
    let mut data = vec![0i32; num_transactions * num_items];

    for tx_idx in 0..num_transactions {
        let random_factor: f64 = rng.r#gen();
        let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
        let num_items_in_tx = num_items_in_tx.min(num_items);

        for _ in 0..num_items_in_tx {
            let density_check: f64 = rng.r#gen();
            if density_check < density {
                let item = rng.gen_range(0..num_items);
                data[tx_idx * num_items + item] = 1;
            }
        }
    }

    let matrix = Array2::from_shape_vec((num_transactions, num_items), data).unwrap();
    TransactionStore::from_matrix(matrix.view())
}

fn stress_test_large_stores() {
    println!("\n=== Large Store Test ===");

    let configs = vec![
        ("10K x 50", 10_000, 50, 15),
        ("50K x 80", 50_000, 80, 20),
        ("100K x 100", 100_000, 100, 25),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        println!("\nTesting: {}", name);

        let start_gen = Instant::now();
        let store = generate_store(num_tx, num_items, avg_size, 0.7);
        println!("  Generated in {:?}", start_gen.elapsed());

        let start = Instant::now();
        let result = fp_growth_algorithm(&store, MinSupport::new(0.05).unwrap(), true);
        println!("  FP-Growth: {} patterns in {:?}", result.len(), start.elapsed());
    }
}

fn stress_test_apriori_vs_fp_growth() {
    println!("\n=== Apriori vs FP-Growth ===");

    let store = generate_store(5_000, 40, 12, 0.7);

    for &min_support in &[0.2, 0.1, 0.05] {
        let support = MinSupport::new(min_support).unwrap();
        println!("\nmin_support = {}", min_support);

        let start = Instant::now();
        let apriori_output = apriori(&store, support, true);
        let apriori_time = start.elapsed();

        let start = Instant::now();
        let fp_result = fp_growth_algorithm(&store, support, true);
        let fp_time = start.elapsed();

        println!(
            "  Apriori:   {} patterns in {:?} ({} candidates counted)",
            apriori_output.itemsets.len(),
            apriori_time,
            apriori_output.stats.total_candidates()
        );
        println!("  FP-Growth: {} patterns in {:?}", fp_result.len(), fp_time);
        if apriori_output.itemsets.support_map() != fp_result.support_map() {
            println!("  ✗ Engines disagree!");
        }
    }
}

fn stress_test_dense_data() {
    println!("\n=== Dense Data Test (worst case) ===");

    let configs = vec![
        ("Dense 80%", 10_000, 50, 40, 0.8),
        ("Dense 90%", 10_000, 50, 45, 0.9),
    ];

    for (name, num_tx, num_items, avg_size, density) in configs {
        println!("\nTesting: {}", name);
        let store = generate_store(num_tx, num_items, avg_size, density);

        let start = Instant::now();
        let result = fp_growth_algorithm(&store, MinSupport::new(0.3).unwrap(), true);
        println!("  Time: {:?}", start.elapsed());
        println!("  Patterns: {}", result.len());
        println!("  Max itemset size: {}", result.levels().len());
        println!("  Closed: {}", result.closed().len());
    }
}

fn main() {
    println!("=== Itemset Mining Stress Testing Suite ===");

    stress_test_large_stores();
    stress_test_apriori_vs_fp_growth();
    stress_test_dense_data();

    println!("\n=== Stress Testing Complete ===");
}
