//! Error types for itemset mining.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::store::ItemId;

/// Errors that can occur while configuring or running a mining job.
#[derive(Error, Debug)]
pub enum MiningError {
    /// Minimum support ratio outside `(0, 1]`.
    #[error("minimum support must be in (0, 1], got {0}")]
    InvalidMinSupport(f64),

    /// Algorithm selector that names no known engine.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// No input source was given.
    #[error("no input source specified")]
    MissingInput,

    /// The input source could not be opened or read.
    #[error("cannot read input {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A report file could not be written.
    #[error("cannot write report {}: {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A header table entry points at a node the root cannot reach.
    #[error("header entry for item {item} references node {node} unreachable from the root")]
    UnreachableHeaderNode { item: ItemId, node: usize },

    /// Header table support disagrees with a direct transaction scan.
    #[error("support mismatch for item {item}: header table sums {tree}, transactions hold {scan}")]
    SupportMismatch { item: ItemId, tree: usize, scan: usize },
}

/// Result type for mining operations.
pub type MineResult<T> = std::result::Result<T, MiningError>;
