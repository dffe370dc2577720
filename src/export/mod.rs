//! Export of the summary record table for downstream analysis.

mod records;

pub use records::{write_csv, write_json, write_jsonl};
