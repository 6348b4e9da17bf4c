/// Candidate and survivor counts of one Apriori level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelStats {
    /// Itemset size of this level.
    pub level: usize,
    /// Candidates counted before pruning.
    pub candidates: usize,
    /// Candidates meeting the support threshold.
    pub frequent: usize,
}

/// Per-level diagnostics of an Apriori run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IterationStats {
    pub levels: Vec<LevelStats>,
    pub total_frequent: usize,
}

impl IterationStats {
    pub fn record(&mut self, level: usize, candidates: usize, frequent: usize) {
        self.levels.push(LevelStats {
            level,
            candidates,
            frequent,
        });
        self.total_frequent += frequent;
    }

    pub fn total_candidates(&self) -> usize {
        self.levels.iter().map(|l| l.candidates).sum()
    }
}
