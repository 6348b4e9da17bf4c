//! FP-Growth: frequent itemset mining over a compressed prefix tree.
//!
//! Transactions are inserted in canonical item order so equal prefixes share
//! nodes. Mining walks the header table, turns each item's ancestor paths
//! into a conditional tree and recurses on it.

pub mod builder;
pub mod combinations;
pub mod mining;
pub mod tree;

pub use builder::{build_conditional_fp_tree, build_fp_tree};
pub use mining::{fp_growth_algorithm, mine_patterns};
pub use tree::{FPNode, FPTree};
