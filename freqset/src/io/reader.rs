use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{MineResult, MiningError};
use crate::store::TransactionStore;

/// Layout of one dataset line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordFormat {
    /// Leading whitespace-separated fields that are not items.
    pub skip_fields: usize,
}

impl Default for RecordFormat {
    fn default() -> Self {
        Self { skip_fields: 3 }
    }
}

/// Splits one line into its item tokens.
///
/// Surrounding whitespace and any trailing commas are stripped before the
/// line is split on whitespace.
pub fn parse_record(line: &str, format: RecordFormat) -> Vec<String> {
    let line = line.trim();
    let line = line.trim_end_matches(',');
    line.split_whitespace()
        .skip(format.skip_fields)
        .map(str::to_string)
        .collect()
}

/// Reads one record per line; blank lines become empty transactions.
pub fn read_records<R: BufRead>(reader: R, format: RecordFormat) -> io::Result<Vec<Vec<String>>> {
    reader
        .lines()
        .map(|line| line.map(|l| parse_record(&l, format)))
        .collect()
}

pub fn load_store(path: impl AsRef<Path>, format: RecordFormat) -> MineResult<TransactionStore> {
    let path = path.as_ref();
    let unreadable = |source: io::Error| MiningError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    let records = read_records(BufReader::new(file), format).map_err(unreadable)?;
    Ok(TransactionStore::from_records(records))
}
