//! Dataset reading and report writing around the mining core.

pub mod reader;
pub mod report;

pub use reader::{load_store, parse_record, read_records, RecordFormat};
pub use report::{format_itemset, write_closed, write_itemsets, write_report, write_statistics, ReportPaths};
