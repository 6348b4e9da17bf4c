use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::apriori::IterationStats;
use crate::config::MinSupport;
use crate::error::{MineResult, MiningError};
use crate::storage::{FrequentItemset, FrequentItemsets};
use crate::store::{ItemId, Vocabulary};

/// Renders items as `{a, b, c}` in canonical order.
pub fn format_itemset(items: &[ItemId], vocabulary: &Vocabulary) -> String {
    format!("{{{}}}", vocabulary.labels_of(items).join(", "))
}

/// Itemsets by descending support; ties keep mining order.
fn by_support(itemsets: &FrequentItemsets) -> Vec<FrequentItemset<'_>> {
    let mut entries: Vec<_> = itemsets.iter().collect();
    entries.sort_by(|a, b| b.support.cmp(&a.support));
    entries
}

fn write_lines<W: Write>(out: &mut W, itemsets: &FrequentItemsets, vocabulary: &Vocabulary) -> io::Result<()> {
    for entry in by_support(itemsets) {
        writeln!(
            out,
            "{:.1}\t{}",
            entry.ratio * 100.0,
            format_itemset(entry.items, vocabulary)
        )?;
    }
    Ok(())
}

/// One `percent<TAB>{items}` line per frequent itemset.
pub fn write_itemsets<W: Write>(out: &mut W, itemsets: &FrequentItemsets, vocabulary: &Vocabulary) -> io::Result<()> {
    write_lines(out, itemsets, vocabulary)
}

/// Total frequent count, then `level    candidates<TAB>frequent` per level.
///
/// Level `k` pairs the size-`k` candidate count with its survivors, starting
/// at level 1. Reports laid out as `iteration    |L(k)|<TAB>|L(k+1)|` will not
/// line up with this file row for row.
pub fn write_statistics<W: Write>(out: &mut W, stats: &IterationStats) -> io::Result<()> {
    writeln!(out, "{}", stats.total_frequent)?;
    for level in &stats.levels {
        writeln!(out, "{}    {}\t{}", level.level, level.candidates, level.frequent)?;
    }
    Ok(())
}

/// Closed itemset count, then one line per closed itemset.
pub fn write_closed<W: Write>(out: &mut W, closed: &FrequentItemsets, vocabulary: &Vocabulary) -> io::Result<()> {
    writeln!(out, "{}", closed.len())?;
    write_lines(out, closed, vocabulary)
}

/// File names of the three reports of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub itemsets: PathBuf,
    pub statistics: PathBuf,
    pub closed: PathBuf,
}

impl ReportPaths {
    pub fn new(out_dir: impl AsRef<Path>, dataset: &str, min_support: MinSupport, step: &str) -> Self {
        let dir = out_dir.as_ref();
        let name = |task: u8, result: u8| {
            dir.join(format!("step{step}_task{task}_{dataset}_{min_support}_result{result}.txt"))
        };
        Self {
            itemsets: name(1, 1),
            statistics: name(1, 2),
            closed: name(2, 1),
        }
    }
}

/// Creates `path` and hands a buffered writer to `write`.
pub fn write_report<F>(path: &Path, write: F) -> MineResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let failed = |source: io::Error| MiningError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut out = BufWriter::new(File::create(path).map_err(failed)?);
    write(&mut out).map_err(failed)?;
    out.flush().map_err(failed)
}
