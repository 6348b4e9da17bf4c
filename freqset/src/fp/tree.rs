use std::collections::{BTreeMap, HashMap};

use crate::error::{MineResult, MiningError};
use crate::store::{ItemId, TransactionStore};

#[derive(Debug, Clone)]
pub struct FPNode {
    pub item: Option<ItemId>,
    pub count: usize,
    pub parent: Option<usize>,
    pub children: HashMap<ItemId, usize>,
}

/// Prefix tree over an arena of nodes addressed by index.
///
/// The header table lists, per item, the nodes holding it in creation order.
#[derive(Debug, Clone)]
pub struct FPTree {
    pub nodes: Vec<FPNode>,
    pub header_table: BTreeMap<ItemId, Vec<usize>>,
    pub root_index: usize,
}

impl FPNode {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
        }
    }

    pub fn new_item(item: ItemId, count: usize, parent: usize) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: HashMap::new(),
        }
    }
}

impl Default for FPTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FPTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header_table: BTreeMap::new(),
            root_index: 0,
        }
    }

    /// Inserts one path, adding `count` to every node along it.
    pub fn insert_transaction(&mut self, transaction: &[ItemId], count: usize) {
        let mut current_index = self.root_index;

        for &item in transaction {
            if let Some(&child_index) = self.nodes[current_index].children.get(&item) {
                self.nodes[child_index].count += count;
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes.push(FPNode::new_item(item, count, current_index));
                self.nodes[current_index].children.insert(item, new_index);
                self.header_table.entry(item).or_default().push(new_index);
                current_index = new_index;
            }
        }
    }

    /// Sum of the counts of every node holding `item`.
    pub fn item_support(&self, item: ItemId) -> usize {
        self.header_table
            .get(&item)
            .map_or(0, |nodes| nodes.iter().map(|&idx| self.nodes[idx].count).sum())
    }

    /// Conditional pattern base of `item`: for each node holding it, the
    /// root-to-parent path (root excluded) weighted by that node's count.
    pub fn get_prefix_paths(&self, item: ItemId) -> Vec<(Vec<ItemId>, usize)> {
        self.header_table.get(&item).map_or(Vec::new(), |nodes| {
            nodes
                .iter()
                .filter_map(|&idx| {
                    let mut path = Vec::new();
                    let mut current = self.nodes[idx].parent;

                    while let Some(i) = current {
                        if let Some(item) = self.nodes[i].item {
                            path.push(item);
                        }
                        current = self.nodes[i].parent;
                    }

                    path.reverse();
                    (!path.is_empty()).then_some((path, self.nodes[idx].count))
                })
                .collect()
        })
    }

    pub fn is_empty(&self) -> bool {
        self.header_table.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn has_single_path(&self) -> bool {
        let mut current_index = self.root_index;

        loop {
            let children = &self.nodes[current_index].children;
            match children.len() {
                0 => return true,
                1 => match children.values().next() {
                    Some(&child) => current_index = child,
                    None => return true,
                },
                _ => return false,
            }
        }
    }

    /// `(item, count)` pairs from the root down the first child chain.
    pub fn get_single_path(&self) -> Vec<(ItemId, usize)> {
        let mut path = Vec::new();
        let mut current_index = self.root_index;

        while let Some(&child_index) = self.nodes[current_index].children.values().next() {
            let child_node = &self.nodes[child_index];
            if let Some(item) = child_node.item {
                path.push((item, child_node.count));
            }
            current_index = child_index;
        }
        path
    }

    /// Checks that every header node is reachable from the root and holds the
    /// header's item, and that each item's header support equals the number
    /// of transactions of `store` containing it.
    pub fn verify(&self, store: &TransactionStore) -> MineResult<()> {
        let mut reachable = vec![false; self.nodes.len()];
        let mut stack = vec![self.root_index];
        while let Some(idx) = stack.pop() {
            reachable[idx] = true;
            stack.extend(self.nodes[idx].children.values().copied());
        }

        for (&item, nodes) in &self.header_table {
            for &node in nodes {
                let holds_item = self.nodes.get(node).map_or(false, |n| n.item == Some(item));
                if !holds_item || !reachable[node] {
                    return Err(MiningError::UnreachableHeaderNode { item, node });
                }
            }
        }

        for (item, scan) in store.item_frequencies().into_iter().enumerate() {
            let tree = self.item_support(item);
            if tree != scan {
                return Err(MiningError::SupportMismatch { item, tree, scan });
            }
        }
        Ok(())
    }
}
